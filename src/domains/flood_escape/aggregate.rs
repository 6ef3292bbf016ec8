use crate::common::{AggregateRoot, DomainError, DomainResult};
use crate::domains::grid::{Cell, Coord, DistanceMap, Grid};
use super::events::FloodEscapeEvent;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscapeStatus {
    Running,
    GoalReached { distance: u32 },
    AgentTrapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscapeOutcome {
    GoalReached { distance: u32 },
    AgentTrapped,
}

impl EscapeStatus {
    pub fn outcome(&self) -> Option<EscapeOutcome> {
        match self {
            EscapeStatus::Running => None,
            EscapeStatus::GoalReached { distance } => Some(EscapeOutcome::GoalReached { distance: *distance }),
            EscapeStatus::AgentTrapped => Some(EscapeOutcome::AgentTrapped),
        }
    }
}

/// Two frontiers sharing one grid: a hazard that floods open terrain and an
/// agent looking for a goal cell. Each phase commits a full hazard layer
/// before the agent expands a full layer over the updated grid.
#[derive(Debug, Clone)]
pub struct FloodEscape {
    pub id: String,
    grid: Grid<Cell>,
    hazard_frontier: Vec<Coord>,
    agent_frontier: Vec<Coord>,
    agent_distance: DistanceMap,
    // Scratch marks deduplicating one layer; hazard uses 2p-1, agent 2p
    layer_stamp: Grid<u32>,
    phase: u32,
    status: EscapeStatus,
    version: u64,
    uncommitted_events: Vec<FloodEscapeEvent>,
}

impl FloodEscape {
    /// Start a new run. Hazard cells seed the hazard frontier and `Start`
    /// cells seed the agent frontier at distance zero.
    pub fn new(grid: Grid<Cell>) -> DomainResult<Self> {
        let mut escape = Self::blank(Uuid::new_v4().to_string(), grid)?;

        let event = FloodEscapeEvent::SimulationStarted {
            run_id: escape.id.clone(),
            rows: escape.grid.rows(),
            cols: escape.grid.cols(),
            hazard_seeds: escape.hazard_frontier.clone(),
            agent_seeds: escape.agent_frontier.clone(),
            timestamp: Utc::now(),
        };
        escape.add_event(event.clone());
        escape.apply(&event)?;
        Ok(escape)
    }

    /// Rebuild a run from the initial grid and its recorded events.
    pub fn replay(grid: Grid<Cell>, events: Vec<FloodEscapeEvent>) -> DomainResult<Self> {
        let run_id = match events.first() {
            Some(FloodEscapeEvent::SimulationStarted { run_id, .. }) => run_id.clone(),
            _ => {
                return Err(DomainError::InvalidCommand {
                    reason: "History must begin with SimulationStarted".to_string(),
                })
            }
        };

        Self::blank(run_id, grid)?.load_from_history(events)
    }

    fn blank(id: String, grid: Grid<Cell>) -> DomainResult<Self> {
        let mut hazard_frontier = Vec::with_capacity(grid.len());
        hazard_frontier.extend(grid.positions(|c| *c == Cell::Hazard));
        let mut agent_frontier = Vec::with_capacity(grid.len());
        agent_frontier.extend(grid.positions(|c| *c == Cell::Start));
        if agent_frontier.is_empty() {
            return Err(DomainError::invalid_input("grid has no agent start cell"));
        }
        let layer_stamp = Grid::new(grid.rows(), grid.cols(), 0);

        let mut agent_distance = DistanceMap::for_grid(&grid);
        for &seed in &agent_frontier {
            agent_distance.set_once(seed, 0);
        }

        Ok(Self {
            id,
            grid,
            hazard_frontier,
            agent_frontier,
            agent_distance,
            layer_stamp,
            phase: 0,
            status: EscapeStatus::Running,
            version: 0,
            uncommitted_events: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn status(&self) -> EscapeStatus {
        self.status
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn agent_distance(&self) -> &DistanceMap {
        &self.agent_distance
    }

    pub fn hazard_frontier(&self) -> &[Coord] {
        &self.hazard_frontier
    }

    pub fn agent_frontier(&self) -> &[Coord] {
        &self.agent_frontier
    }

    /// Advance one phase: hazard layer first, then agent layer.
    pub fn step(&mut self) -> DomainResult<EscapeStatus> {
        if self.status != EscapeStatus::Running {
            return Err(DomainError::InvalidCommand {
                reason: format!("Run {} has already finished", self.id),
            });
        }
        let phase = self.phase + 1;

        let hazard_layer = self.next_hazard_layer(2 * phase - 1);
        trace!(phase, cells = hazard_layer.len(), "hazard layer computed");
        self.record(FloodEscapeEvent::HazardLayerCommitted {
            run_id: self.id.clone(),
            phase,
            cells: hazard_layer,
            timestamp: Utc::now(),
        })?;

        // Reads the grid as committed above
        let agent_layer = self.next_agent_layer(2 * phase);
        trace!(phase, cells = agent_layer.len(), "agent layer computed");
        let goal = agent_layer
            .iter()
            .copied()
            .find(|c| self.grid.get(*c) == Some(&Cell::Goal));
        let trapped = agent_layer.is_empty();

        self.record(FloodEscapeEvent::AgentLayerExpanded {
            run_id: self.id.clone(),
            phase,
            distance: phase,
            cells: agent_layer,
            timestamp: Utc::now(),
        })?;

        if let Some(goal) = goal {
            self.record(FloodEscapeEvent::GoalReached {
                run_id: self.id.clone(),
                phase,
                goal,
                distance: phase,
                timestamp: Utc::now(),
            })?;
        } else if trapped {
            self.record(FloodEscapeEvent::AgentTrapped {
                run_id: self.id.clone(),
                phase,
                timestamp: Utc::now(),
            })?;
        }

        debug!(run_id = %self.id, phase, status = ?self.status, "phase complete");
        Ok(self.status)
    }

    /// Step until the goal is reached or the agent frontier runs dry.
    pub fn run(&mut self) -> DomainResult<EscapeOutcome> {
        loop {
            if let Some(outcome) = self.step()?.outcome() {
                return Ok(outcome);
            }
        }
    }

    fn record(&mut self, event: FloodEscapeEvent) -> DomainResult<()> {
        self.add_event(event.clone());
        self.apply(&event)
    }

    fn next_hazard_layer(&mut self, stamp: u32) -> Vec<Coord> {
        let Self { grid, hazard_frontier, layer_stamp, .. } = self;
        let mut layer = Vec::with_capacity(layer_capacity(hazard_frontier.len(), grid.len()));
        for &from in hazard_frontier.iter() {
            for next in grid.neighbors(from) {
                let floodable = matches!(grid.get(next), Some(Cell::Open | Cell::Start));
                if floodable && claim(layer_stamp, next, stamp) {
                    layer.push(next);
                }
            }
        }
        layer
    }

    fn next_agent_layer(&mut self, stamp: u32) -> Vec<Coord> {
        let Self { grid, agent_frontier, agent_distance, layer_stamp, .. } = self;
        let mut layer = Vec::with_capacity(layer_capacity(agent_frontier.len(), grid.len()));
        for &from in agent_frontier.iter() {
            for next in grid.neighbors(from) {
                let enterable = grid.get(next).map(Cell::is_passable).unwrap_or(false);
                if enterable && !agent_distance.is_set(next) && claim(layer_stamp, next, stamp) {
                    layer.push(next);
                }
            }
        }
        layer
    }
}

/// A layer holds at most four new cells per frontier cell, and never more
/// cells than the grid.
fn layer_capacity(frontier: usize, cells: usize) -> usize {
    frontier.saturating_mul(4).min(cells)
}

/// Marks `at` for the current layer; false when it was already claimed.
fn claim(stamps: &mut Grid<u32>, at: Coord, stamp: u32) -> bool {
    match stamps.get_mut(at) {
        Some(mark) if *mark != stamp => {
            *mark = stamp;
            true
        }
        _ => false,
    }
}

impl AggregateRoot for FloodEscape {
    type Event = FloodEscapeEvent;

    fn aggregate_id(&self) -> &str { &self.id }
    fn version(&self) -> u64 { self.version }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            FloodEscapeEvent::SimulationStarted { rows, cols, .. } => {
                // Seeding happens when the blank run is built
                if *rows != self.grid.rows() || *cols != self.grid.cols() {
                    return Err(DomainError::InvalidCommand {
                        reason: format!(
                            "History is for a {}x{} grid, run has {}x{}",
                            rows,
                            cols,
                            self.grid.rows(),
                            self.grid.cols()
                        ),
                    });
                }
            }
            FloodEscapeEvent::HazardLayerCommitted { phase, cells, .. } => {
                for &cell in cells {
                    match self.grid.get(cell) {
                        Some(Cell::Open | Cell::Start) => {
                            self.grid.set(cell, Cell::Hazard);
                        }
                        _ => {
                            return Err(DomainError::InvalidCommand {
                                reason: format!("Cell {} cannot be flooded", cell),
                            })
                        }
                    }
                }
                self.hazard_frontier.clear();
                self.hazard_frontier.extend_from_slice(cells);
                self.phase = *phase;
            }
            FloodEscapeEvent::AgentLayerExpanded { phase, distance, cells, .. } => {
                for &cell in cells {
                    if !self.agent_distance.set_once(cell, *distance) {
                        return Err(DomainError::InvalidCommand {
                            reason: format!("Cell {} was already visited by the agent", cell),
                        });
                    }
                }
                self.agent_frontier.clear();
                self.agent_frontier.extend_from_slice(cells);
                self.phase = *phase;
            }
            FloodEscapeEvent::GoalReached { distance, .. } => {
                self.status = EscapeStatus::GoalReached { distance: *distance };
            }
            FloodEscapeEvent::AgentTrapped { .. } => {
                self.status = EscapeStatus::AgentTrapped;
            }
        }

        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] { &self.uncommitted_events }
    fn mark_events_as_committed(&mut self) { self.uncommitted_events.clear(); }
    fn add_event(&mut self, event: Self::Event) { self.uncommitted_events.push(event); }
}
