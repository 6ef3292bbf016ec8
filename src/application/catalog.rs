use crate::common::{DomainResult, EventEnvelope};
use once_cell::sync::Lazy;
use serde::Serialize;
use super::problems::{grid, recurrence, scan};

/// Rendered answer of one run plus the event trace of solvers that keep one.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub answer: String,
    pub trace: Vec<EventEnvelope>,
}

impl Solution {
    pub fn answer(answer: impl ToString) -> Self {
        Self { answer: answer.to_string(), trace: Vec::new() }
    }
}

pub type SolveFn = fn(&str) -> DomainResult<Solution>;

#[derive(Clone, Copy)]
pub struct ProblemEntry {
    pub id: &'static str,
    pub summary: &'static str,
    pub solve: SolveFn,
}

impl std::fmt::Debug for ProblemEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProblemEntry").field("id", &self.id).finish()
    }
}

pub static CATALOG: Lazy<Vec<ProblemEntry>> = Lazy::new(|| {
    vec![
        // Grid and graph search
        entry("maze", "shortest path through a 0/1 maze", grid::maze),
        entry("ripening", "days until every tomato ripens", grid::ripening),
        entry("flood-escape", "reach the den ahead of spreading water", grid::flood_escape),
        entry("percolation", "does current reach the bottom row", grid::percolation),
        entry("network-reach", "computers infected from node 1", grid::network_reach),
        // Dynamic programming
        entry("consultation", "best pay from scheduled consultations", recurrence::consultation),
        entry("staircase", "best staircase score without three in a row", recurrence::staircase),
        entry("wine-tasting", "most wine without three glasses in a row", recurrence::wine_tasting),
        entry("house-painting", "cheapest street painting", recurrence::house_painting),
        entry("knapsack", "0/1 knapsack value", recurrence::knapsack),
        entry("longest-increasing", "longest increasing subsequence", recurrence::longest_increasing),
        entry("crossing-wires", "wires to remove so none cross", recurrence::crossing_wires),
        entry("max-subarray", "largest contiguous sum", recurrence::max_subarray),
        entry("square-sum", "fewest squares summing to n", recurrence::square_sum),
        entry("one-two-three", "ordered sums of 1, 2 and 3", recurrence::one_two_three),
        // Scans, search and greedy
        entry("window-sum", "largest sum of k consecutive days", scan::window_sum),
        entry("hoof-paper-scissors", "most wins with one switch", scan::hoof_paper_scissors),
        entry("even-pour", "largest equal share by binary search", scan::even_pour),
        entry("tree-harvest", "most wood from growing trees", scan::tree_harvest),
        entry("warehouse-roof", "area of the warehouse roof", scan::warehouse_roof),
        entry("ternary-sum", "sum of distinct powers of three", scan::ternary_sum),
        entry("candy-count", "candies drawn in each box", scan::candy_count),
        entry("colored-paper", "area covered by paper sheets", scan::colored_paper),
    ]
});

fn entry(id: &'static str, summary: &'static str, solve: SolveFn) -> ProblemEntry {
    ProblemEntry { id, summary, solve }
}

pub fn find_problem(id: &str) -> Option<&'static ProblemEntry> {
    CATALOG.iter().find(|p| p.id == id)
}
