use gridflow::adapters::inbound::InMemoryPuzzleSource;
use gridflow::application::{find_problem, SolverService, CATALOG};
use gridflow::common::ApplicationError;
use gridflow::domains::logger::DomainLogger;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CaptureLogger {
    fn new() -> Self { Self { messages: Arc::new(Mutex::new(Vec::new())) } }
}

impl DomainLogger for CaptureLogger {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
}

fn service_with(source: InMemoryPuzzleSource) -> (SolverService, Arc<CaptureLogger>) {
    let capture = Arc::new(CaptureLogger::new());
    let service = SolverService::new(Arc::new(source), capture.clone());
    (service, capture)
}

fn solve(problem: &str, input: &str) -> String {
    let (service, _) = service_with(InMemoryPuzzleSource::new());
    service.solve_text(problem, input).unwrap().answer
}

#[test]
fn test_catalog_ids_are_unique() {
    let ids: HashSet<&str> = CATALOG.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), CATALOG.len());
    assert!(find_problem("flood-escape").is_some());
    assert!(find_problem("nope").is_none());
}

#[test]
fn test_grid_problems() {
    assert_eq!(solve("maze", "4 6\n101111\n101010\n101011\n111011\n"), "15");
    assert_eq!(solve("maze", "4 6\n110110\n110110\n111111\n111101\n"), "9");
    assert_eq!(
        solve("maze", "2 25\n1011101110111011101110111\n1110111011101110111011101\n"),
        "38"
    );
    assert_eq!(solve("maze", "2 2\n10\n01\n"), "0");

    assert_eq!(
        solve("ripening", "6 4\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 1\n"),
        "8"
    );
    assert_eq!(
        solve("ripening", "6 4\n0 -1 0 0 0 0\n-1 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 1\n"),
        "-1"
    );
    assert_eq!(
        solve("ripening", "5 5\n-1 1 0 0 0\n0 -1 -1 -1 0\n0 -1 -1 -1 0\n0 -1 -1 -1 0\n0 0 0 0 0\n"),
        "14"
    );
    assert_eq!(solve("ripening", "2 2\n1 -1\n-1 1\n"), "0");

    assert_eq!(solve("flood-escape", "3 3\nD.*\n...\n.S.\n"), "3");
    assert_eq!(solve("flood-escape", "3 3\nD.*\n...\n..S\n"), "KAKTUS");

    assert_eq!(solve("percolation", "5 6\n010101\n010000\n011101\n100011\n001011\n"), "NO");
    assert_eq!(
        solve(
            "percolation",
            "8 8\n11000111\n01100000\n00011001\n11001000\n10001001\n10111100\n01010000\n00001011\n"
        ),
        "YES"
    );

    assert_eq!(solve("network-reach", "7\n6\n1 2\n2 3\n1 5\n5 2\n5 6\n4 7\n"), "4");
}

#[test]
fn test_recurrence_problems() {
    assert_eq!(solve("consultation", "7\n3 10\n5 20\n1 10\n1 20\n2 15\n4 40\n2 200\n"), "45");
    assert_eq!(solve("staircase", "6\n10\n20\n15\n25\n10\n20\n"), "75");
    assert_eq!(solve("wine-tasting", "6\n6\n10\n13\n9\n8\n1\n"), "33");
    assert_eq!(solve("house-painting", "3\n26 40 83\n49 60 57\n13 89 99\n"), "96");
    assert_eq!(solve("knapsack", "4 7\n6 13\n4 8\n3 6\n5 12\n"), "14");
    assert_eq!(solve("longest-increasing", "6\n10 20 10 30 20 50\n"), "4");
    assert_eq!(solve("crossing-wires", "8\n1 8\n3 9\n2 2\n4 1\n6 4\n10 10\n9 7\n7 6\n"), "3");
    assert_eq!(solve("max-subarray", "10\n10 -4 3 1 5 6 -35 12 21 -1\n"), "33");
    assert_eq!(solve("square-sum", "7\n"), "4");
    assert_eq!(solve("one-two-three", "3\n4\n7\n10\n"), "7\n44\n274");
}

#[test]
fn test_scan_problems() {
    assert_eq!(solve("window-sum", "10 2\n3 -2 -4 -9 0 3 7 13 8 -3\n"), "21");
    assert_eq!(solve("hoof-paper-scissors", "5\nP\nP\nH\nP\nS\n"), "4");
    assert_eq!(solve("even-pour", "2 3\n702\n429\n"), "351");
    assert_eq!(solve("tree-harvest", "5\n1 3 2 4 6\n2 7 3 4 1\n"), "64");
    assert_eq!(solve("warehouse-roof", "7\n2 4\n11 4\n15 8\n4 6\n5 3\n8 10\n13 6\n"), "98");
    assert_eq!(solve("ternary-sum", "12\n"), "YES");
    assert_eq!(solve("ternary-sum", "14\n"), "NO");
    assert_eq!(
        solve("candy-count", "2\n\n4 5\n.>o<.\n..v..\n..o..\n..^..\n\n3 3\n>o<\nvvv\n...\n"),
        "2\n1"
    );
    assert_eq!(solve("colored-paper", "3\n3 7\n15 7\n5 2\n"), "260");
}

#[test]
fn test_flood_escape_solution_carries_trace() {
    let (service, _) = service_with(InMemoryPuzzleSource::new());
    let solution = service.solve_text("flood-escape", "1 3\nS.D\n").unwrap();

    assert_eq!(solution.answer, "2");
    assert_eq!(solution.trace.first().unwrap().event_type, "SimulationStarted");
    assert_eq!(solution.trace.last().unwrap().event_type, "GoalReached");
    for (i, envelope) in solution.trace.iter().enumerate() {
        assert_eq!(envelope.metadata.sequence, i as u64);
        assert_eq!(envelope.aggregate_type, "FloodEscape");
    }

    let plain = service.solve_text("maze", "1 1\n1\n").unwrap();
    assert!(plain.trace.is_empty());
}

#[test]
fn test_solve_named_reads_from_source() {
    let source = InMemoryPuzzleSource::new().with_puzzle("tiny", "1 3\nS.D\n");
    let (service, capture) = service_with(source);

    let solution = service.solve_named("flood-escape", "tiny").unwrap();
    assert_eq!(solution.answer, "2");

    let msgs = capture.messages.lock().unwrap();
    assert!(msgs.iter().any(|m| m.starts_with("INFO:flood-escape solved")));
}

#[test]
fn test_missing_puzzle_is_logged() {
    let (service, capture) = service_with(InMemoryPuzzleSource::new());

    let err = service.solve_named("maze", "absent").unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert!(capture.messages.lock().unwrap().iter().any(|m| m.contains("ERR:failed to load 'absent'")));
}

#[test]
fn test_unknown_problem() {
    let (service, capture) = service_with(InMemoryPuzzleSource::new());

    let err = service.solve_text("sudoku", "").unwrap_err();
    assert!(matches!(err, ApplicationError::UnknownProblem(ref id) if id == "sudoku"));
    assert!(capture.messages.lock().unwrap().iter().any(|m| m.starts_with("WARN:")));
}

#[test]
fn test_malformed_input_is_rejected() {
    let (service, capture) = service_with(InMemoryPuzzleSource::new());

    assert!(service.solve_text("maze", "2 2\n11\n").is_err());
    assert!(service.solve_text("ripening", "2 1\n1 7\n").is_err());
    assert!(service.solve_text("flood-escape", "1 3\nS?D\n").is_err());
    assert!(service.solve_text("network-reach", "2\n1\n1 3\n").is_err());
    assert!(service.solve_text("window-sum", "2 3\n1 2\n").is_err());

    let msgs = capture.messages.lock().unwrap();
    assert_eq!(msgs.iter().filter(|m| m.starts_with("ERR:")).count(), 5);
}
