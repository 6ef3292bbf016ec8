// Flood escape projections - read model folded from a run's events
use serde::{Deserialize, Serialize};
use super::aggregate::EscapeOutcome;
use super::events::FloodEscapeEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeSummary {
    pub run_id: String,
    pub phases: u32,
    pub hazard_cells: usize,
    pub agent_cells: usize,
    pub outcome: Option<EscapeOutcome>,
}

impl EscapeSummary {
    pub fn from_events(events: &[FloodEscapeEvent]) -> Self {
        let mut summary = EscapeSummary::default();
        for event in events {
            summary.phases = summary.phases.max(event.phase());
            match event {
                FloodEscapeEvent::SimulationStarted { run_id, hazard_seeds, agent_seeds, .. } => {
                    summary.run_id = run_id.clone();
                    summary.hazard_cells += hazard_seeds.len();
                    summary.agent_cells += agent_seeds.len();
                }
                FloodEscapeEvent::HazardLayerCommitted { cells, .. } => {
                    summary.hazard_cells += cells.len();
                }
                FloodEscapeEvent::AgentLayerExpanded { cells, .. } => {
                    summary.agent_cells += cells.len();
                }
                FloodEscapeEvent::GoalReached { distance, .. } => {
                    summary.outcome = Some(EscapeOutcome::GoalReached { distance: *distance });
                }
                FloodEscapeEvent::AgentTrapped { .. } => {
                    summary.outcome = Some(EscapeOutcome::AgentTrapped);
                }
            }
        }
        summary
    }
}
