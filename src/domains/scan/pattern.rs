use crate::domains::grid::{Coord, Grid};

/// Count candies drawn as `>o<` across a row or `v`,`o`,`^` down a column.
pub fn candy_count(grid: &Grid<char>) -> usize {
    let at = |row: usize, col: usize| grid.get(Coord::new(row, col)).copied();
    let mut count = 0;

    for row in 0..grid.rows() {
        for col in 0..grid.cols().saturating_sub(2) {
            if at(row, col) == Some('>') && at(row, col + 1) == Some('o') && at(row, col + 2) == Some('<') {
                count += 1;
            }
        }
    }

    for row in 0..grid.rows().saturating_sub(2) {
        for col in 0..grid.cols() {
            if at(row, col) == Some('v') && at(row + 1, col) == Some('o') && at(row + 2, col) == Some('^') {
                count += 1;
            }
        }
    }

    count
}

pub const CANVAS_SIDE: usize = 100;
pub const SHEET_SIDE: usize = 10;

/// Area covered by 10x10 sheets whose lower-left corners sit at the given
/// offsets on a 100x100 canvas. Parts hanging off the canvas are ignored.
pub fn colored_paper(sheets: &[(usize, usize)]) -> usize {
    let mut canvas = Grid::new(CANVAS_SIDE, CANVAS_SIDE, false);
    for &(x, y) in sheets {
        for dx in 0..SHEET_SIDE {
            for dy in 0..SHEET_SIDE {
                canvas.set(Coord::new(x + dx, y + dy), true);
            }
        }
    }
    canvas.iter().filter(|(_, covered)| **covered).count()
}
