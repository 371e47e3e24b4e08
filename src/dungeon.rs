/*
dungeon.rs

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

//! Tie the grid, the carver, and the dead-end set together behind one owning type.

use rand::Rng;
use std::fmt;

use crate::generator::carver::{CarveError, Carver};
use crate::generator::dead_ends::DeadEndSet;
use crate::generator::eroder;
use crate::generator::grid::{Grid, GridError};

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum DungeonError {
    /// Grid construction or access failed.
    Grid(GridError),

    /// The carve violated a grid invariant.
    Carve(CarveError),
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DungeonError::Grid(e) => write!(f, "{e}"),
            DungeonError::Carve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DungeonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DungeonError::Grid(e) => Some(e),
            DungeonError::Carve(e) => Some(e),
        }
    }
}

impl From<GridError> for DungeonError {
    fn from(e: GridError) -> Self {
        DungeonError::Grid(e)
    }
}

impl From<CarveError> for DungeonError {
    fn from(e: CarveError) -> Self {
        DungeonError::Carve(e)
    }
}

/// A generated dungeon: the carved grid and its current dead-end set.
///
/// The grid and the set are owned for the lifetime of the object. Erosion flips wall flags in
/// place and replaces the set; regeneration discards both and carves from scratch.
#[derive(Debug)]
pub struct Dungeon {
    /// The carved grid.
    grid: Grid,

    /// Cells currently classified as dead ends.
    dead_ends: DeadEndSet,

    /// The carver, kept for its statistics about the last generation.
    carver: Carver,
}

impl Dungeon {
    /// Generate a dungeon of the given side length with the default random source.
    ///
    /// # Errors
    ///
    /// The method returns an error if `size` is even.
    pub fn new(size: usize) -> Result<Self, DungeonError> {
        Self::generate(size, &mut rand::rng())
    }

    /// Generate a dungeon of the given side length with the given random source.
    ///
    /// With a seeded source the generated dungeon is reproducible bit for bit.
    ///
    /// # Errors
    ///
    /// The method returns an error if `size` is even.
    pub fn generate(size: usize, rng: &mut impl Rng) -> Result<Self, DungeonError> {
        let mut grid: Grid = Grid::new(size)?;
        let mut carver: Carver = Carver::new();
        let dead_ends: DeadEndSet = carver.carve(&mut grid, rng)?;
        Ok(Self {
            grid,
            dead_ends,
            carver,
        })
    }

    /// Discard the current maze and carve a fresh one of the same size.
    ///
    /// # Errors
    ///
    /// The method returns an error if the carve violates a grid invariant, which cannot happen
    /// with the built-in neighbor selection.
    pub fn regenerate(&mut self, rng: &mut impl Rng) -> Result<(), DungeonError> {
        self.grid = Grid::new(self.grid.size())?;
        self.dead_ends = self.carver.carve(&mut self.grid, rng)?;
        Ok(())
    }

    /// Erode the dead ends for the given number of iterations. Zero iterations is a no-op.
    pub fn erode(&mut self, iterations: usize) {
        eroder::erode(&mut self.grid, &mut self.dead_ends, iterations);
    }

    /// Number of cells per grid side.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Return the carved grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the current dead-end set.
    pub fn dead_ends(&self) -> &DeadEndSet {
        &self.dead_ends
    }

    /// Return the carver and its statistics about the last generation.
    pub fn carver(&self) -> &Carver {
        &self.carver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn open_cells(grid: &Grid) -> usize {
        grid.cells().filter(|c| !c.is_wall).count()
    }

    #[test]
    fn even_size_fails_construction() {
        let err: DungeonError = Dungeon::generate(4, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, DungeonError::Grid(GridError::InvalidSize(4)));
    }

    #[test]
    fn generation_is_reproducible_through_the_facade() {
        let first: Dungeon = Dungeon::generate(25, &mut StdRng::seed_from_u64(99)).unwrap();

        let mut second: Dungeon = Dungeon::generate(25, &mut StdRng::seed_from_u64(1)).unwrap();
        second.regenerate(&mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.dead_ends(), second.dead_ends());
    }

    #[test]
    fn erosion_never_opens_cells() {
        let mut dungeon: Dungeon = Dungeon::generate(25, &mut StdRng::seed_from_u64(7)).unwrap();
        let mut open: usize = open_cells(dungeon.grid());

        for _ in 0..8 {
            dungeon.erode(1);
            let now: usize = open_cells(dungeon.grid());
            assert!(now <= open);
            open = now;
        }
    }

    #[test]
    fn zero_erosion_changes_nothing() {
        let mut dungeon: Dungeon = Dungeon::generate(9, &mut StdRng::seed_from_u64(31)).unwrap();
        let grid_before: Grid = dungeon.grid().clone();
        let dead_ends_before: DeadEndSet = dungeon.dead_ends().clone();

        dungeon.erode(0);
        assert_eq!(dungeon.grid(), &grid_before);
        assert_eq!(dungeon.dead_ends(), &dead_ends_before);
    }

    #[test]
    fn carver_statistics_are_exposed() {
        let dungeon: Dungeon = Dungeon::generate(5, &mut StdRng::seed_from_u64(2)).unwrap();
        // A spanning tree over the 9 rooms of a size-5 grid opens 8 walls.
        assert_eq!(dungeon.carver().steps, 8);
    }
}
