use crate::domains::grid::{Coord, Grid, FOUR_WAY};
use super::traversal::{expand, Traversal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Breadth-first distances from every seed at once. All seeds start at
/// `base` simultaneously, so each cell records the distance to its nearest seed.
pub fn multi_source<T, P>(
    grid: &Grid<T>,
    seeds: impl IntoIterator<Item = Coord>,
    base: u32,
    passable: P,
) -> Traversal
where
    P: Fn(&T) -> bool,
{
    multi_source_with(grid, seeds, base, &FOUR_WAY, passable)
}

pub fn multi_source_with<T, P>(
    grid: &Grid<T>,
    seeds: impl IntoIterator<Item = Coord>,
    base: u32,
    directions: &[(isize, isize)],
    passable: P,
) -> Traversal
where
    P: Fn(&T) -> bool,
{
    let traversal = expand(grid, seeds, base, directions, passable);
    debug!(reached = traversal.distances.reached(), "multi-source search finished");
    traversal
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Saturation {
    /// Every non-obstacle cell was reached after `layers` expansions.
    Saturated { layers: u32 },
    /// Propagation stopped with `unvisited` non-obstacle cells untouched.
    Unreachable { unvisited: usize },
}

/// Post-scan of a finished traversal.
pub fn saturation<T, O>(grid: &Grid<T>, traversal: &Traversal, base: u32, is_obstacle: O) -> Saturation
where
    O: Fn(&T) -> bool,
{
    let unvisited = grid
        .iter()
        .filter(|&(at, cell)| !is_obstacle(cell) && !traversal.distances.is_set(at))
        .count();

    if unvisited > 0 {
        return Saturation::Unreachable { unvisited };
    }

    let layers = traversal
        .distances
        .max()
        .map(|max| max.saturating_sub(base))
        .unwrap_or(0);
    Saturation::Saturated { layers }
}
