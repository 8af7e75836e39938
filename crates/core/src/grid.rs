//! Rectangular 0/1 seed grids.
//!
//! A [`Grid`] is the validated form of the matrices a world is built from.
//! Row length determines the width; rows need not equal columns, and a grid
//! with zero rows (or zero-length rows) is well-formed and seeds an empty
//! world.

use std::fmt;

use tui_life_types::Coord;

use crate::error::PatternError;

/// A validated rectangular matrix of 0/1 cells.
///
/// Storage is a flat row-major `Vec<u8>`; `y` indexes rows, `x` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Validate a matrix of rows.
    ///
    /// Fails with [`PatternError::RaggedRow`] when a row's length differs
    /// from the first row's, and with [`PatternError::InvalidCell`] when a
    /// value is outside `{0, 1}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let grid = Grid::parse(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 3);
    /// ```
    pub fn parse<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, PatternError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(PatternError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(PatternError::InvalidCell { x, y, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells equal to 1.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Cell value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Coordinates of all cells equal to 1, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(|(i, _)| ((i % self.width) as i64, (i / self.width) as i64))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.cells[y * self.width + x];
                write!(f, "{}", v)?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
