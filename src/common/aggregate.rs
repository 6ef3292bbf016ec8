use crate::common::{DomainEvent, DomainResult};
use serde::{Deserialize, Serialize};

pub trait AggregateRoot: Send + Sync + Clone {
    type Event: DomainEvent + Serialize + for<'de> Deserialize<'de>;

    fn aggregate_id(&self) -> &str;
    fn version(&self) -> u64;

    /// Apply an event to update the aggregate state
    fn apply(&mut self, event: &Self::Event) -> DomainResult<()>;

    /// Get uncommitted events
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Mark events as committed
    fn mark_events_as_committed(&mut self);

    /// Add a new event to the uncommitted events list
    fn add_event(&mut self, event: Self::Event);

    /// Rebuild state by applying a recorded history to a fresh instance.
    /// Replayed events are not uncommitted.
    fn load_from_history(mut self, events: impl IntoIterator<Item = Self::Event>) -> DomainResult<Self>
    where
        Self: Sized,
    {
        for event in events {
            self.apply(&event)?;
        }
        Ok(self)
    }
}
