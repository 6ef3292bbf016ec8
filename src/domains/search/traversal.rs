use crate::domains::grid::{Coord, DistanceMap, Frontier, Grid};
use tracing::trace;

/// Result of one breadth-first run over a grid.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub distances: DistanceMap,
    /// Number of frontier insertions over the whole run.
    pub enqueued: usize,
}

/// Shared FIFO expansion loop. Seeds are finalized with `base`; every other
/// reached cell gets its parent's distance plus one.
pub(crate) fn expand<T, P>(
    grid: &Grid<T>,
    seeds: impl IntoIterator<Item = Coord>,
    base: u32,
    directions: &[(isize, isize)],
    passable: P,
) -> Traversal
where
    P: Fn(&T) -> bool,
{
    let mut distances = DistanceMap::for_grid(grid);
    let mut frontier = Frontier::with_capacity(grid.rows(), grid.cols());
    let mut enqueued = 0usize;

    for seed in seeds {
        if distances.set_once(seed, base) {
            frontier.push(seed);
            enqueued += 1;
        }
    }
    trace!(seeds = enqueued, "frontier seeded");

    while let Some(current) = frontier.pop() {
        // Popped cells are always finalized
        let Some(here) = distances.get(current) else { continue };

        for next in grid.neighbors_with(current, directions) {
            let open = grid.get(next).map(&passable).unwrap_or(false);
            if open && distances.set_once(next, here + 1) {
                frontier.push(next);
                enqueued += 1;
            }
        }
    }

    Traversal { distances, enqueued }
}
