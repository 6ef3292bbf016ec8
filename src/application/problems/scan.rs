use crate::application::catalog::Solution;
use crate::application::input::Tokens;
use crate::common::{DomainError, DomainResult};
use crate::domains::grid::Grid;
use crate::domains::scan::{self, Gesture};

pub fn window_sum(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("day count")?;
    let k: usize = tokens.next("window length")?;
    let temps = tokens.take::<i64>(n, "temperature")?;
    let best = scan::window_sum_max(&temps, k)
        .ok_or_else(|| DomainError::invalid_input(format!("window length {} does not fit {} values", k, n)))?;
    Ok(Solution::answer(best))
}

pub fn hoof_paper_scissors(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("game count")?;
    let gestures = tokens
        .words(n, "gesture")?
        .into_iter()
        .map(Gesture::parse)
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(Solution::answer(scan::hoof_paper_scissors(&gestures)))
}

pub fn even_pour(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let kettles: usize = tokens.next("kettle count")?;
    let people: u64 = tokens.next("people count")?;
    let volumes = tokens.take::<u64>(kettles, "kettle volume")?;
    Ok(Solution::answer(scan::even_pour(&volumes, people)))
}

pub fn tree_harvest(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("tree count")?;
    let heights = tokens.take::<u64>(n, "tree height")?;
    let growth = tokens.take::<u64>(n, "growth rate")?;
    let trees: Vec<(u64, u64)> = heights.into_iter().zip(growth).collect();
    Ok(Solution::answer(scan::tree_harvest(&trees)))
}

pub fn warehouse_roof(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("pillar count")?;
    let pillars = tokens.pairs::<i64, i64>(n, "pillar position and height")?;
    Ok(Solution::answer(scan::warehouse_roof(&pillars)))
}

pub fn ternary_sum(input: &str) -> DomainResult<Solution> {
    let n: u64 = Tokens::new(input).next("number")?;
    Ok(Solution::answer(if scan::ternary_sum(n) { "YES" } else { "NO" }))
}

/// Several boxes, each preceded by a blank line and `rows cols`.
pub fn candy_count(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let cases: usize = tokens.next("case count")?;
    let mut answers = Vec::with_capacity(cases);
    for _ in 0..cases {
        let rows: usize = tokens.next("row count")?;
        let cols: usize = tokens.next("column count")?;
        let lines = tokens.words(rows, "box row")?;
        let grid = Grid::parse_chars(rows, cols, lines, Ok)?;
        answers.push(scan::candy_count(&grid).to_string());
    }
    Ok(Solution::answer(answers.join("\n")))
}

pub fn colored_paper(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("sheet count")?;
    let sheets = tokens.pairs::<usize, usize>(n, "sheet offset")?;
    Ok(Solution::answer(scan::colored_paper(&sheets)))
}
