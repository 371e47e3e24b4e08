/*
dead_ends.rs

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

//! Corridor leaves of the carved maze.

use std::collections::HashSet;

use super::grid::Grid;

/// Whether the room at the given coordinate is a corridor leaf (degree 1).
///
/// The number of adjacent cells depends on the room position: corner rooms have two, boundary
/// rooms three, and interior rooms four. The wall-count threshold shifts accordingly so that
/// the test always means "exactly one opened passage".
pub fn is_dead_end(grid: &Grid, x: usize, y: usize) -> bool {
    let last: usize = grid.size() - 1;
    let on_x_boundary: bool = x == 0 || x == last;
    let on_y_boundary: bool = y == 0 || y == last;

    let wall_neighbors: usize = grid
        .adjacent(x, y)
        .into_iter()
        .filter(|&(nx, ny)| grid.wall(nx, ny))
        .count();

    let threshold: usize = if on_x_boundary && on_y_boundary {
        1
    } else if on_x_boundary || on_y_boundary {
        2
    } else {
        3
    };
    wall_neighbors == threshold
}

/// Ordered collection of the cells classified as dead ends.
///
/// The vector keeps the discovery order. Instead of looking for a cell in the vector, the
/// [`std::collections::HashSet`] speeds up the membership lookup used when rendering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeadEndSet {
    /// Dead ends in discovery order.
    cells: Vec<(usize, usize)>,

    /// Stores the membership status of the cells.
    members: HashSet<(usize, usize)>,
}

impl DeadEndSet {
    /// Create an empty [`DeadEndSet`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell to the set.
    pub fn push(&mut self, x: usize, y: usize) {
        self.cells.push((x, y));
        self.members.insert((x, y));
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the given cell is in the set.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.members.contains(&(x, y))
    }

    /// Iterate over the cells in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_room_with_one_open_passage_is_a_dead_end() {
        let mut grid: Grid = Grid::new(5).unwrap();
        // Fresh corner: both passages are walls, degree 0.
        assert!(!is_dead_end(&grid, 0, 0));

        grid.set_wall(1, 0, false).unwrap();
        assert!(is_dead_end(&grid, 0, 0));

        // Opening the second passage makes it a through corridor.
        grid.set_wall(0, 1, false).unwrap();
        assert!(!is_dead_end(&grid, 0, 0));
    }

    #[test]
    fn edge_room_threshold_is_two_walls() {
        let mut grid: Grid = Grid::new(5).unwrap();
        // Room (2, 0) sits on the top boundary with three adjacent cells.
        grid.set_wall(1, 0, false).unwrap();
        assert!(is_dead_end(&grid, 2, 0));

        grid.set_wall(2, 1, false).unwrap();
        assert!(!is_dead_end(&grid, 2, 0));
    }

    #[test]
    fn interior_room_threshold_is_three_walls() {
        let mut grid: Grid = Grid::new(5).unwrap();
        grid.set_wall(1, 2, false).unwrap();
        assert!(is_dead_end(&grid, 2, 2));

        // Two or more open passages: never a dead end.
        grid.set_wall(3, 2, false).unwrap();
        assert!(!is_dead_end(&grid, 2, 2));
        grid.set_wall(2, 1, false).unwrap();
        assert!(!is_dead_end(&grid, 2, 2));
    }

    #[test]
    fn single_room_grid_is_not_a_dead_end() {
        let grid: Grid = Grid::new(1).unwrap();
        // A lone room has no adjacent cells: wall count 0 misses the corner threshold of 1.
        assert!(!is_dead_end(&grid, 0, 0));
    }

    #[test]
    fn set_keeps_order_and_membership() {
        let mut set: DeadEndSet = DeadEndSet::new();
        assert!(set.is_empty());

        set.push(4, 0);
        set.push(0, 2);
        assert_eq!(set.len(), 2);
        assert!(set.contains(4, 0));
        assert!(!set.contains(2, 2));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![(4, 0), (0, 2)]);
    }
}
