use gridflow::application::problems::grid::decode_escape_cell;
use gridflow::common::{AggregateRoot, DomainError};
use gridflow::domains::flood_escape::*;
use gridflow::domains::grid::{Cell, Coord, Grid};
use std::collections::HashSet;

fn parse_map(lines: &[&str]) -> Grid<Cell> {
    let cols = lines[0].len();
    Grid::parse_chars(lines.len(), cols, lines.iter().copied(), decode_escape_cell).unwrap()
}

fn run_to_end(lines: &[&str]) -> (FloodEscape, EscapeOutcome) {
    let mut escape = FloodEscape::new(parse_map(lines)).unwrap();
    let outcome = escape.run().unwrap();
    (escape, outcome)
}

#[test]
fn test_agent_walks_straight_to_goal() {
    let (escape, outcome) = run_to_end(&["S.D"]);
    assert_eq!(outcome, EscapeOutcome::GoalReached { distance: 2 });
    assert_eq!(escape.status(), EscapeStatus::GoalReached { distance: 2 });
    assert_eq!(escape.phase(), 2);
}

#[test]
fn test_hazard_cuts_the_only_path() {
    let (escape, outcome) = run_to_end(&["S.*.D"]);
    assert_eq!(outcome, EscapeOutcome::AgentTrapped);
    assert_eq!(escape.phase(), 1);
    assert!(escape.agent_frontier().is_empty());
}

#[test]
fn test_known_maps() {
    let cases: Vec<(Vec<&str>, EscapeOutcome)> = vec![
        (vec!["D.*", "...", ".S."], EscapeOutcome::GoalReached { distance: 3 }),
        (vec!["D.*", "...", "..S"], EscapeOutcome::AgentTrapped),
        (vec!["D...*.", ".X.X..", "....S."], EscapeOutcome::GoalReached { distance: 6 }),
        (vec![".D.*", "....", "..X.", "S.*.", "...."], EscapeOutcome::GoalReached { distance: 4 }),
        (vec!["S.X", "XXD"], EscapeOutcome::AgentTrapped),
    ];

    for (lines, expected) in cases {
        let (_, outcome) = run_to_end(&lines);
        assert_eq!(outcome, expected, "map {:?}", lines);
    }
}

#[test]
fn test_shared_neighbours_join_a_layer_once() {
    let mut escape = FloodEscape::new(parse_map(&["*.*", "...", "S.D"])).unwrap();

    assert_eq!(escape.step().unwrap(), EscapeStatus::Running);
    assert_eq!(
        escape.hazard_frontier(),
        &[Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2)]
    );
    assert_eq!(escape.agent_frontier(), &[Coord::new(2, 1)]);

    // (1, 1) borders all three hazard cells
    assert_eq!(escape.step().unwrap(), EscapeStatus::GoalReached { distance: 2 });
    assert_eq!(escape.hazard_frontier(), &[Coord::new(1, 1), Coord::new(2, 0)]);

    let mut escape = FloodEscape::new(parse_map(&["S.S", "...", "..D"])).unwrap();
    escape.step().unwrap();
    assert_eq!(
        escape.agent_frontier(),
        &[Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2)]
    );
}

#[test]
fn test_layers_never_repeat_a_cell() {
    for lines in [
        vec!["D...*.", ".X.X..", "....S."],
        vec![".D.*", "....", "..X.", "S.*.", "...."],
        vec!["*...*", ".....", "S...S", ".....", "*.D.*"],
    ] {
        let (escape, _) = run_to_end(&lines);
        for event in escape.uncommitted_events() {
            if let FloodEscapeEvent::HazardLayerCommitted { cells, .. }
            | FloodEscapeEvent::AgentLayerExpanded { cells, .. } = event
            {
                let unique: HashSet<&Coord> = cells.iter().collect();
                assert_eq!(unique.len(), cells.len(), "map {:?}", lines);
            }
        }
    }
}

#[test]
fn test_hazard_never_enters_goal_or_rock() {
    let (escape, _) = run_to_end(&["D.*", "...", "..S"]);
    assert_eq!(escape.grid().get(Coord::new(0, 0)), Some(&Cell::Goal));

    let (escape, _) = run_to_end(&["*X..", "....", "S..D"]);
    assert_eq!(escape.grid().get(Coord::new(0, 1)), Some(&Cell::Obstacle));
}

#[test]
fn test_layers_advance_in_lockstep() {
    let (escape, _) = run_to_end(&["D...*.", ".X.X..", "....S."]);
    let events = escape.uncommitted_events();

    let mut flooded: HashSet<Coord> = HashSet::new();
    let mut hazard_frontier: Vec<Coord> = Vec::new();
    let mut agent_frontier: Vec<Coord> = Vec::new();
    let mut last_hazard_phase = 0;

    for event in events {
        match event {
            FloodEscapeEvent::SimulationStarted { hazard_seeds, agent_seeds, .. } => {
                flooded.extend(hazard_seeds.iter().copied());
                hazard_frontier = hazard_seeds.clone();
                agent_frontier = agent_seeds.clone();
            }
            FloodEscapeEvent::HazardLayerCommitted { phase, cells, .. } => {
                assert_eq!(*phase, last_hazard_phase + 1);
                last_hazard_phase = *phase;
                for cell in cells {
                    assert!(hazard_frontier.iter().any(|h| h.is_adjacent(cell)));
                    assert!(flooded.insert(*cell), "{} flooded twice", cell);
                }
                hazard_frontier = cells.clone();
            }
            FloodEscapeEvent::AgentLayerExpanded { phase, distance, cells, .. } => {
                // The hazard layer of the same phase is always committed first
                assert_eq!(*phase, last_hazard_phase);
                assert_eq!(distance, phase);
                for cell in cells {
                    assert!(agent_frontier.iter().any(|a| a.is_adjacent(cell)));
                    assert!(!flooded.contains(cell), "agent entered flooded {}", cell);
                }
                agent_frontier = cells.clone();
            }
            FloodEscapeEvent::GoalReached { phase, .. } | FloodEscapeEvent::AgentTrapped { phase, .. } => {
                assert_eq!(*phase, last_hazard_phase);
            }
        }
    }
}

#[test]
fn test_replay_rebuilds_identical_state() {
    let lines = [".D.*", "....", "..X.", "S.*.", "...."];
    let (escape, _) = run_to_end(&lines);
    let history = escape.uncommitted_events().to_vec();

    let replayed = FloodEscape::replay(parse_map(&lines), history).unwrap();

    assert_eq!(replayed.id, escape.id);
    assert_eq!(replayed.status(), escape.status());
    assert_eq!(replayed.phase(), escape.phase());
    assert_eq!(replayed.version(), escape.version());
    assert_eq!(replayed.grid(), escape.grid());
    assert_eq!(replayed.agent_distance(), escape.agent_distance());
    assert!(replayed.uncommitted_events().is_empty());
}

#[test]
fn test_replay_rejects_repeated_layers() {
    let lines = ["S...D"];
    let (escape, _) = run_to_end(&lines);
    let history = escape.uncommitted_events().to_vec();

    let agent_layer = history
        .iter()
        .position(|e| matches!(e, FloodEscapeEvent::AgentLayerExpanded { .. }))
        .unwrap();
    let mut repeated = history.clone();
    repeated.insert(agent_layer + 1, history[agent_layer].clone());
    assert!(matches!(
        FloodEscape::replay(parse_map(&lines), repeated),
        Err(DomainError::InvalidCommand { .. })
    ));

    let lines = ["*..S...D"];
    let (escape, _) = run_to_end(&lines);
    let history = escape.uncommitted_events().to_vec();
    let hazard_layer = history
        .iter()
        .position(|e| matches!(e, FloodEscapeEvent::HazardLayerCommitted { .. }))
        .unwrap();
    let mut repeated = history.clone();
    repeated.insert(hazard_layer + 1, history[hazard_layer].clone());
    assert!(FloodEscape::replay(parse_map(&lines), repeated).is_err());
}

#[test]
fn test_replay_requires_start_event() {
    let (escape, _) = run_to_end(&["S.D"]);
    let history = escape.uncommitted_events()[1..].to_vec();

    let result = FloodEscape::replay(parse_map(&["S.D"]), history);
    assert!(matches!(result, Err(DomainError::InvalidCommand { .. })));
}

#[test]
fn test_replay_rejects_history_for_other_grid() {
    let (escape, _) = run_to_end(&["S.D"]);
    let history = escape.uncommitted_events().to_vec();

    assert!(FloodEscape::replay(parse_map(&["S..D"]), history).is_err());
}

#[test]
fn test_step_after_finish_is_rejected() {
    let (mut escape, _) = run_to_end(&["SD"]);
    assert_eq!(escape.status(), EscapeStatus::GoalReached { distance: 1 });
    assert!(matches!(escape.step(), Err(DomainError::InvalidCommand { .. })));
}

#[test]
fn test_missing_start_is_invalid_input() {
    let grid = parse_map(&["..D"]);
    assert!(matches!(FloodEscape::new(grid), Err(DomainError::InvalidInput { .. })));
}

#[test]
fn test_missing_goal_ends_trapped() {
    let (escape, outcome) = run_to_end(&["S..", "..."]);
    assert_eq!(outcome, EscapeOutcome::AgentTrapped);
    assert_eq!(escape.agent_distance().reached(), 6);
}

#[test]
fn test_summary_projection() {
    let (escape, _) = run_to_end(&["D.*", "...", ".S."]);
    let summary = EscapeSummary::from_events(escape.uncommitted_events());

    assert_eq!(summary.run_id, escape.id);
    assert_eq!(summary.phases, 3);
    assert_eq!(summary.outcome, Some(EscapeOutcome::GoalReached { distance: 3 }));
    assert_eq!(summary.agent_cells, escape.agent_distance().reached());
}

#[test]
fn test_events_start_with_simulation_started() {
    let (escape, _) = run_to_end(&["S.D"]);
    let events = escape.uncommitted_events();

    assert!(matches!(events.first(), Some(FloodEscapeEvent::SimulationStarted { .. })));
    assert!(matches!(events.last(), Some(FloodEscapeEvent::GoalReached { .. })));
    assert_eq!(escape.version(), events.len() as u64);
}
