use crate::domains::grid::{Coord, Grid, FOUR_WAY};
use super::traversal::{expand, Traversal};
use tracing::debug;

/// Breadth-first distances from a single start cell.
///
/// `distance[start] = base` and every reachable cell holds its shortest hop
/// count plus `base`. Cells rejected by `passable` are never entered;
/// unreachable cells stay unset.
pub fn single_source<T, P>(grid: &Grid<T>, start: Coord, base: u32, passable: P) -> Traversal
where
    P: Fn(&T) -> bool,
{
    single_source_with(grid, start, base, &FOUR_WAY, passable)
}

pub fn single_source_with<T, P>(
    grid: &Grid<T>,
    start: Coord,
    base: u32,
    directions: &[(isize, isize)],
    passable: P,
) -> Traversal
where
    P: Fn(&T) -> bool,
{
    let traversal = expand(grid, std::iter::once(start), base, directions, passable);
    debug!(
        start = %start,
        reached = traversal.distances.reached(),
        "single-source search finished"
    );
    traversal
}
