use serde::{Deserialize, Serialize};
use super::types::{Coord, FOUR_WAY};
use crate::common::{DomainError, DomainResult};

/// Fixed-shape, row-major two dimensional storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self { rows, cols, cells: vec![fill; rows * cols] }
    }
}

impl<T> Grid<T> {
    /// Build a grid from nested rows. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> DomainResult<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(DomainError::invalid_input("grid must have at least one row and one column"));
        }

        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(DomainError::invalid_input(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            cells.extend(row);
        }

        Ok(Self { rows: row_count, cols, cells })
    }

    /// Decode `rows` lines of exactly `cols` characters each.
    pub fn parse_chars<'a, I, F>(rows: usize, cols: usize, lines: I, mut decode: F) -> DomainResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(char) -> DomainResult<T>,
    {
        let mut parsed = Vec::with_capacity(rows);
        for line in lines.into_iter().take(rows) {
            let row = line.chars().map(&mut decode).collect::<DomainResult<Vec<T>>>()?;
            if row.len() != cols {
                return Err(DomainError::invalid_input(format!(
                    "row {} has {} cells, expected {}",
                    parsed.len(),
                    row.len(),
                    cols
                )));
            }
            parsed.push(row);
        }
        if parsed.len() != rows {
            return Err(DomainError::invalid_input(format!(
                "expected {} rows, found {}",
                rows,
                parsed.len()
            )));
        }
        Self::from_rows(parsed)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    pub fn get(&self, at: Coord) -> Option<&T> {
        if self.contains(at) {
            Some(&self.cells[self.index(at)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, at: Coord) -> Option<&mut T> {
        if self.contains(at) {
            let idx = self.index(at);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Overwrite a cell. Out-of-bounds writes are ignored and reported as `false`.
    pub fn set(&mut self, at: Coord, value: T) -> bool {
        match self.get_mut(at) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Coord::new(i / cols, i % cols))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    pub fn positions<'a, P>(&'a self, mut pred: P) -> impl Iterator<Item = Coord> + 'a
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.iter().filter(move |&(_, v)| pred(v)).map(|(c, _)| c)
    }

    /// In-bounds neighbours of `at` in `FOUR_WAY` order.
    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors_with(at, &FOUR_WAY)
    }

    pub fn neighbors_with<'a>(
        &'a self,
        at: Coord,
        directions: &'a [(isize, isize)],
    ) -> impl Iterator<Item = Coord> + 'a {
        directions
            .iter()
            .filter_map(move |&d| at.offset(d))
            .filter(move |c| self.contains(*c))
    }
}
