use crate::application::catalog::Solution;
use crate::application::input::Tokens;
use crate::common::{AggregateRoot, DomainError, DomainResult, EventEnvelope};
use crate::domains::flood_escape::{EscapeOutcome, FloodEscape};
use crate::domains::grid::{Cell, Coord, Grid};
use crate::domains::search::{multi_source, saturation, single_source, Network, Saturation};

/// `rows cols` then rows of `1` (open) / `0` (wall). Shortest path length
/// from the top-left to the bottom-right cell, counting both ends; 0 if the
/// exit cannot be reached.
pub fn maze(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let rows: usize = tokens.next("row count")?;
    let cols: usize = tokens.next("column count")?;
    let lines = tokens.words(rows, "maze row")?;
    let grid = Grid::parse_chars(rows, cols, lines, |c| match c {
        '1' => Ok(Cell::Open),
        '0' => Ok(Cell::Obstacle),
        other => Err(DomainError::invalid_input(format!("unknown maze cell '{}'", other))),
    })?;

    let traversal = single_source(&grid, Coord::new(0, 0), 1, Cell::is_passable);
    let exit = Coord::new(rows - 1, cols - 1);
    Ok(Solution::answer(traversal.distances.get(exit).unwrap_or(0)))
}

/// `cols rows` then a matrix of `1` (ripe), `0` (unripe), `-1` (empty).
/// Days until every tomato is ripe, or -1 if some never ripen.
pub fn ripening(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let cols: usize = tokens.next("column count")?;
    let rows: usize = tokens.next("row count")?;

    let mut matrix = Vec::with_capacity(rows);
    for _ in 0..rows {
        let row = tokens
            .take::<i8>(cols, "tomato state")?
            .into_iter()
            .map(|v| match v {
                1 => Ok(Cell::Start),
                0 => Ok(Cell::Open),
                -1 => Ok(Cell::Obstacle),
                other => Err(DomainError::invalid_input(format!("unknown tomato state {}", other))),
            })
            .collect::<DomainResult<Vec<Cell>>>()?;
        matrix.push(row);
    }
    let grid = Grid::from_rows(matrix)?;

    let seeds: Vec<Coord> = grid.positions(|c| *c == Cell::Start).collect();
    let traversal = multi_source(&grid, seeds, 1, Cell::is_passable);
    let answer = match saturation(&grid, &traversal, 1, Cell::is_obstacle) {
        Saturation::Saturated { layers } => i64::from(layers),
        Saturation::Unreachable { .. } => -1,
    };
    Ok(Solution::answer(answer))
}

pub fn decode_escape_cell(c: char) -> DomainResult<Cell> {
    match c {
        '.' => Ok(Cell::Open),
        '*' => Ok(Cell::Hazard),
        'X' => Ok(Cell::Obstacle),
        'S' => Ok(Cell::Start),
        'D' => Ok(Cell::Goal),
        other => Err(DomainError::invalid_input(format!("unknown map cell '{}'", other))),
    }
}

/// `rows cols` then a map of `.`, `*` (water), `X` (rock), `S` (start),
/// `D` (den). Minutes to reach the den while the water spreads, or `KAKTUS`.
pub fn flood_escape(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let rows: usize = tokens.next("row count")?;
    let cols: usize = tokens.next("column count")?;
    let lines = tokens.words(rows, "map row")?;
    let grid = Grid::parse_chars(rows, cols, lines, decode_escape_cell)?;

    let mut escape = FloodEscape::new(grid)?;
    let outcome = escape.run()?;
    let trace = EventEnvelope::wrap_all(escape.uncommitted_events(), "FloodEscape", "flood-escape")?;
    escape.mark_events_as_committed();

    let answer = match outcome {
        EscapeOutcome::GoalReached { distance } => distance.to_string(),
        EscapeOutcome::AgentTrapped => "KAKTUS".to_string(),
    };
    Ok(Solution { answer, trace })
}

/// `rows cols` then rows of `0` (conducting) / `1` (insulating). `YES` when
/// current entering the top row can reach the bottom row.
pub fn percolation(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let rows: usize = tokens.next("row count")?;
    let cols: usize = tokens.next("column count")?;
    let lines = tokens.words(rows, "fabric row")?;
    let grid = Grid::parse_chars(rows, cols, lines, |c| match c {
        '0' => Ok(Cell::Open),
        '1' => Ok(Cell::Obstacle),
        other => Err(DomainError::invalid_input(format!("unknown fabric cell '{}'", other))),
    })?;

    let seeds: Vec<Coord> = (0..cols)
        .map(|col| Coord::new(0, col))
        .filter(|c| grid.get(*c) == Some(&Cell::Open))
        .collect();
    let traversal = multi_source(&grid, seeds, 0, Cell::is_passable);
    let bottom = rows - 1;
    let percolates = (0..cols).any(|col| traversal.distances.is_set(Coord::new(bottom, col)));

    Ok(Solution::answer(if percolates { "YES" } else { "NO" }))
}

/// `n`, `p`, then `p` links. How many computers node 1 infects.
pub fn network_reach(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let nodes: usize = tokens.next("node count")?;
    let link_count: usize = tokens.next("link count")?;
    let links = tokens.pairs::<usize, usize>(link_count, "link endpoint")?;

    let network = Network::new(nodes, &links)?;
    Ok(Solution::answer(network.reach_count(1)))
}
