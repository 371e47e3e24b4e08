/*
carver.rs

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

//! Carve a random perfect maze into a grid.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::time::Instant;

use super::dead_ends::{self, DeadEndSet};
use super::grid::{Grid, GridError};

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum CarveError {
    /// Attempted to open the wall between two cells that are not both open rooms exactly two
    /// units apart on one axis.
    InvalidCarve {
        from: (usize, usize),
        to: (usize, usize),
    },

    /// A grid access failed.
    Grid(GridError),
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarveError::InvalidCarve { from, to } => write!(
                f,
                "cannot open a wall between ({}, {}) and ({}, {})",
                from.0, from.1, to.0, to.1
            ),
            CarveError::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CarveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CarveError::Grid(e) => Some(e),
            CarveError::InvalidCarve { .. } => None,
        }
    }
}

impl From<GridError> for CarveError {
    fn from(e: GridError) -> Self {
        CarveError::Grid(e)
    }
}

/// Randomized depth-first maze carver.
///
/// The carver walks the room lattice with an explicit stack, knocking down the wall between the
/// current room and a randomly chosen unvisited neighbor room. The opened cells form a spanning
/// tree over the rooms: every room is reached exactly once and no cycle exists. Rooms that turn
/// out to be corridor leaves are collected while backtracking.
#[derive(Debug)]
pub struct Carver {
    /// Number of walls opened during the last carve.
    pub steps: usize,

    /// Duration in seconds of the last carve.
    pub duration: f32,

    /// Time when the carve started. Used to compute [`Carver::duration`].
    start: Instant,
}

impl Default for Carver {
    fn default() -> Self {
        Self::new()
    }
}

impl Carver {
    /// Create a [`Carver`] object.
    pub fn new() -> Self {
        Self {
            steps: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Carve a maze into a freshly initialized grid and return the dead ends found on the way.
    ///
    /// The walk starts at room `(0, 0)`. The only nondeterminism is the neighbor shuffle: with a
    /// seeded random source the carve is reproducible bit for bit.
    ///
    /// # Errors
    ///
    /// The method returns an error if a wall opening violates the room adjacency rule. This
    /// cannot happen with the neighbor selection below; the check guards the grid invariant.
    pub fn carve(&mut self, grid: &mut Grid, rng: &mut impl Rng) -> Result<DeadEndSet, CarveError> {
        self.steps = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let size: usize = grid.size();
        let mut visited: Vec<bool> = vec![false; size * size];
        let mut fringe: Vec<(usize, usize)> = vec![(0, 0)];
        let mut found: DeadEndSet = DeadEndSet::new();

        while let Some(&(x, y)) = fringe.last() {
            visited[y * size + x] = true;

            let mut candidates: Vec<(usize, usize)> = grid
                .room_neighbors(x, y)
                .into_iter()
                .filter(|&(nx, ny)| !visited[ny * size + nx])
                .collect();
            candidates.shuffle(rng);

            match candidates.first() {
                // Backtrack point: the room has no unvisited neighbor left.
                None => {
                    if dead_ends::is_dead_end(grid, x, y) {
                        debug!("Dead end at ({x}, {y})");
                        found.push(x, y);
                    }
                    fringe.pop();
                }
                Some(&(nx, ny)) => {
                    fringe.push((nx, ny));
                    self.open_wall(grid, (x, y), (nx, ny))?;
                }
            }
        }

        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Opened {} walls  Dead ends = {}  Duration = {}",
            self.steps,
            found.len(),
            self.duration
        );
        Ok(found)
    }

    /// Open the wall cell halfway between two open rooms two units apart on one axis.
    fn open_wall(
        &mut self,
        grid: &mut Grid,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<(), CarveError> {
        let (ax, ay) = from;
        let (bx, by) = to;
        if grid.is_wall(ax, ay)? || grid.is_wall(bx, by)? {
            return Err(CarveError::InvalidCarve { from, to });
        }

        let x_diff: usize = ax.abs_diff(bx);
        let y_diff: usize = ay.abs_diff(by);
        if !(x_diff == 2 && y_diff == 0 || x_diff == 0 && y_diff == 2) {
            return Err(CarveError::InvalidCarve { from, to });
        }

        // The wall sits at the midpoint of the two rooms.
        grid.set_wall((ax + bx) / 2, (ay + by) / 2, false)?;
        self.steps += 1;
        Ok(())
    }
}
