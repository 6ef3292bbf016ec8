use crate::common::DomainEvent;
use crate::domains::grid::Coord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FloodEscapeEvent {
    SimulationStarted {
        run_id: String,
        rows: usize,
        cols: usize,
        hazard_seeds: Vec<Coord>,
        agent_seeds: Vec<Coord>,
        timestamp: DateTime<Utc>,
    },
    /// The whole next hazard layer, committed to the grid in one step.
    HazardLayerCommitted {
        run_id: String,
        phase: u32,
        cells: Vec<Coord>,
        timestamp: DateTime<Utc>,
    },
    AgentLayerExpanded {
        run_id: String,
        phase: u32,
        distance: u32,
        cells: Vec<Coord>,
        timestamp: DateTime<Utc>,
    },
    GoalReached {
        run_id: String,
        phase: u32,
        goal: Coord,
        distance: u32,
        timestamp: DateTime<Utc>,
    },
    AgentTrapped {
        run_id: String,
        phase: u32,
        timestamp: DateTime<Utc>,
    },
}

impl FloodEscapeEvent {
    pub fn phase(&self) -> u32 {
        match self {
            FloodEscapeEvent::SimulationStarted { .. } => 0,
            FloodEscapeEvent::HazardLayerCommitted { phase, .. } => *phase,
            FloodEscapeEvent::AgentLayerExpanded { phase, .. } => *phase,
            FloodEscapeEvent::GoalReached { phase, .. } => *phase,
            FloodEscapeEvent::AgentTrapped { phase, .. } => *phase,
        }
    }
}

impl DomainEvent for FloodEscapeEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FloodEscapeEvent::SimulationStarted { .. } => "SimulationStarted",
            FloodEscapeEvent::HazardLayerCommitted { .. } => "HazardLayerCommitted",
            FloodEscapeEvent::AgentLayerExpanded { .. } => "AgentLayerExpanded",
            FloodEscapeEvent::GoalReached { .. } => "GoalReached",
            FloodEscapeEvent::AgentTrapped { .. } => "AgentTrapped",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            FloodEscapeEvent::SimulationStarted { run_id, .. } => run_id,
            FloodEscapeEvent::HazardLayerCommitted { run_id, .. } => run_id,
            FloodEscapeEvent::AgentLayerExpanded { run_id, .. } => run_id,
            FloodEscapeEvent::GoalReached { run_id, .. } => run_id,
            FloodEscapeEvent::AgentTrapped { run_id, .. } => run_id,
        }
    }

    fn event_version(&self) -> u64 { 1 }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            FloodEscapeEvent::SimulationStarted { timestamp, .. } => *timestamp,
            FloodEscapeEvent::HazardLayerCommitted { timestamp, .. } => *timestamp,
            FloodEscapeEvent::AgentLayerExpanded { timestamp, .. } => *timestamp,
            FloodEscapeEvent::GoalReached { timestamp, .. } => *timestamp,
            FloodEscapeEvent::AgentTrapped { timestamp, .. } => *timestamp,
        }
    }
}
