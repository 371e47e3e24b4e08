/*
grid.rs

Copyright 2026 The Dungen Authors

This file is part of Dungen.

Dungen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Dungen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Dungen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Square lattice of wall and open cells.
//!
//! Cells at even/even coordinates are room nodes, and start open. Every other cell starts as a
//! wall, so that each pair of axis-adjacent rooms is separated by exactly one wall cell that the
//! carver may later open.

use std::fmt;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// The requested grid size is even (or zero). Only odd sizes produce a valid room lattice.
    InvalidSize(usize),

    /// The coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidSize(size) => {
                write!(f, "grid size must be an odd number, got {size}")
            }
            GridError::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

/// Unit block of the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Horizontal coordinate, `0 <= x < size`.
    pub x: usize,

    /// Vertical coordinate, `0 <= y < size`.
    pub y: usize,

    /// Whether the cell is a wall or an open passage.
    pub is_wall: bool,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Square lattice of cells, stored as a flat row-major vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells per side.
    size: usize,

    /// The cells, indexed by `y * size + x`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given side length with all rooms open and all other cells walls.
    ///
    /// # Errors
    ///
    /// The method returns an error if `size` is even. An even side length would leave rooms on
    /// the last row and column without a boundary wall.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size % 2 == 0 {
            return Err(GridError::InvalidSize(size));
        }

        let mut cells: Vec<Cell> = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell {
                    x,
                    y,
                    is_wall: x % 2 == 1 || y % 2 == 1,
                });
            }
        }
        Ok(Self { size, cells })
    }

    /// Number of cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinate lies inside the grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Return the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// The method returns an error if the coordinate is outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(&self.cells[self.index(x, y)])
    }

    /// Whether the cell at the given coordinate is a wall.
    ///
    /// # Errors
    ///
    /// The method returns an error if the coordinate is outside the grid.
    pub fn is_wall(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.cell(x, y).map(|c| c.is_wall)
    }

    /// Set the wall flag of the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// The method returns an error if the coordinate is outside the grid.
    pub fn set_wall(&mut self, x: usize, y: usize, is_wall: bool) -> Result<(), GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        let i: usize = self.index(x, y);
        self.cells[i].is_wall = is_wall;
        Ok(())
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Room cells two units away on one axis, filtered to the grid bounds.
    pub fn room_neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
        if x >= 2 {
            neighbors.push((x - 2, y));
        }
        if x + 2 < self.size {
            neighbors.push((x + 2, y));
        }
        if y >= 2 {
            neighbors.push((x, y - 2));
        }
        if y + 2 < self.size {
            neighbors.push((x, y + 2));
        }
        neighbors
    }

    /// Cells one unit away on one axis, filtered to the grid bounds.
    pub fn adjacent(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
        if x >= 1 {
            neighbors.push((x - 1, y));
        }
        if x + 1 < self.size {
            neighbors.push((x + 1, y));
        }
        if y >= 1 {
            neighbors.push((x, y - 1));
        }
        if y + 1 < self.size {
            neighbors.push((x, y + 1));
        }
        neighbors
    }

    // Infallible accessors for coordinates produced by the neighbor helpers above, which are
    // always in bounds.

    pub(crate) fn wall(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)].is_wall
    }

    pub(crate) fn set_wall_flag(&mut self, x: usize, y: usize, is_wall: bool) {
        let i: usize = self.index(x, y);
        self.cells[i].is_wall = is_wall;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_sizes_are_rejected() {
        assert_eq!(Grid::new(4).unwrap_err(), GridError::InvalidSize(4));
        assert_eq!(Grid::new(0).unwrap_err(), GridError::InvalidSize(0));
    }

    #[test]
    fn construction_follows_the_parity_rule() {
        let grid: Grid = Grid::new(5).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.cells().count(), 25);
        for cell in grid.cells() {
            let expected: bool = cell.x % 2 == 1 || cell.y % 2 == 1;
            assert_eq!(cell.is_wall, expected, "cell {cell}");
        }
    }

    #[test]
    fn single_cell_grid_is_one_open_room() {
        let grid: Grid = Grid::new(1).unwrap();
        assert_eq!(grid.cells().count(), 1);
        assert!(!grid.is_wall(0, 0).unwrap());
    }

    #[test]
    fn queries_outside_the_grid_fail() {
        let mut grid: Grid = Grid::new(3).unwrap();
        assert_eq!(
            grid.cell(3, 0).unwrap_err(),
            GridError::OutOfBounds { x: 3, y: 0 }
        );
        assert_eq!(
            grid.is_wall(0, 7).unwrap_err(),
            GridError::OutOfBounds { x: 0, y: 7 }
        );
        assert_eq!(
            grid.set_wall(5, 5, true).unwrap_err(),
            GridError::OutOfBounds { x: 5, y: 5 }
        );
    }

    #[test]
    fn set_wall_flips_one_cell() {
        let mut grid: Grid = Grid::new(3).unwrap();
        assert!(grid.is_wall(1, 0).unwrap());
        grid.set_wall(1, 0, false).unwrap();
        assert!(!grid.is_wall(1, 0).unwrap());
        // The other cells are untouched.
        assert!(grid.is_wall(0, 1).unwrap());
        assert!(!grid.is_wall(0, 0).unwrap());
    }

    #[test]
    fn room_neighbors_are_bounds_filtered() {
        let grid: Grid = Grid::new(5).unwrap();
        assert_eq!(grid.room_neighbors(0, 0), vec![(2, 0), (0, 2)]);
        assert_eq!(
            grid.room_neighbors(2, 2),
            vec![(0, 2), (4, 2), (2, 0), (2, 4)]
        );
        assert_eq!(grid.room_neighbors(4, 4), vec![(2, 4), (4, 2)]);
    }

    #[test]
    fn adjacent_cells_are_bounds_filtered() {
        let grid: Grid = Grid::new(5).unwrap();
        assert_eq!(grid.adjacent(0, 0).len(), 2);
        assert_eq!(grid.adjacent(2, 0).len(), 3);
        assert_eq!(grid.adjacent(2, 2).len(), 4);
        assert_eq!(Grid::new(1).unwrap().adjacent(0, 0).len(), 0);
    }
}
