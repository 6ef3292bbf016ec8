use std::collections::VecDeque;
use super::grid::Grid;
use super::types::Coord;

/// Per-cell distance from the nearest seed. Each cell is written at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    cells: Grid<Option<u32>>,
    reached: usize,
}

impl DistanceMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { cells: Grid::new(rows, cols, None), reached: 0 }
    }

    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    pub fn get(&self, at: Coord) -> Option<u32> {
        self.cells.get(at).copied().flatten()
    }

    pub fn is_set(&self, at: Coord) -> bool {
        self.get(at).is_some()
    }

    /// Finalize the distance of `at`. Returns `false` without writing if it
    /// was already finalized or lies outside the map.
    pub fn set_once(&mut self, at: Coord, distance: u32) -> bool {
        match self.cells.get_mut(at) {
            Some(slot) if slot.is_none() => {
                *slot = Some(distance);
                self.reached += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of finalized cells.
    pub fn reached(&self) -> usize {
        self.reached
    }

    pub fn max(&self) -> Option<u32> {
        self.iter().filter_map(|(_, d)| d).max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<u32>)> + '_ {
        self.cells.iter().map(|(c, d)| (c, *d))
    }
}

/// FIFO queue of cells awaiting expansion.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<Coord>,
}

impl Frontier {
    /// Pre-size for every cell of a `rows x cols` grid so the search loop never reallocates.
    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        Self { queue: VecDeque::with_capacity(rows * cols) }
    }

    pub fn push(&mut self, at: Coord) {
        self.queue.push_back(at);
    }

    pub fn pop(&mut self) -> Option<Coord> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
