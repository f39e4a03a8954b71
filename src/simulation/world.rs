//! Square grid of [`Cell`]s.
//!
//! The grid dimension is fixed when the world is built; afterwards only the
//! contents of cells change.

use std::fmt;

use ndarray::Array2;

use super::cell::Cell;
use super::error::{Error, Result};

/// Offsets of the 8-connected Moore neighborhood, row-major.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Checks whether `(row, col)` lies inside a `size x size` grid.
///
/// Negative coordinates and coordinates equal to `size` are outside.
pub fn is_valid_location(size: usize, row: isize, col: isize) -> bool {
    0 <= row && (row as usize) < size && 0 <= col && (col as usize) < size
}

/// The simulated world: a square matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    grid: Array2<Cell>,
}

impl World {
    /// Creates a `dim x dim` world where every location holds `cell`.
    pub fn filled(dim: usize, cell: Cell) -> Self {
        Self {
            grid: Array2::from_elem((dim, dim), cell),
        }
    }

    /// Builds a world from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if any row length differs from the number
    /// of rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let dim = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != dim) {
            return Err(Error::NotSquare {
                rows: dim,
                cols: row.len(),
            });
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let grid = Array2::from_shape_vec((dim, dim), cells).map_err(|_| Error::NotSquare {
            rows: dim,
            cols: dim,
        })?;

        Ok(Self { grid })
    }

    /// Number of rows (equal to the number of columns).
    pub fn dim(&self) -> usize {
        self.grid.nrows()
    }

    /// Total number of locations, `dim * dim`.
    pub fn n_cells(&self) -> usize {
        self.grid.len()
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the location is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid[[row, col]]
    }

    /// Returns the cell at a possibly out-of-bounds location.
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Cell> {
        if is_valid_location(self.dim(), row, col) {
            Some(self.grid[[row as usize, col as usize]])
        } else {
            None
        }
    }

    /// Overwrites the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.grid[[row, col]] = cell;
    }

    /// Counts the locations holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.iter().filter(|&&c| c == cell).count()
    }

    /// In-bounds Moore neighbors of `(row, col)`, excluding the cell itself.
    pub fn moore_neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> + '_ {
        let (row, col) = (row as isize, col as isize);
        MOORE_OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.get_checked(row + dr, col + dc))
    }

    /// Row-major iterator over `((row, col), cell)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.grid.indexed_iter().map(|(loc, &cell)| (loc, cell))
    }

    /// Row-major iterator over the locations holding `cell`.
    pub fn locations_of(&self, cell: Cell) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(move |&(_, c)| c == cell)
            .map(|(loc, _)| loc)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.outer_iter() {
            for cell in row {
                let symbol = match cell {
                    Cell::Red => 'R',
                    Cell::Blue => 'B',
                    Cell::Empty => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
