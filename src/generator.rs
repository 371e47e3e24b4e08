/*
generator.rs

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

//! Generate random dungeons and erode their dead ends.
//!
//! A dungeon starts as a [`grid::Grid`]: a square lattice with an odd side length where cells at
//! even/even coordinates are open room nodes and every other cell is a wall. You create the grid
//! with [`grid::Grid::new`].
//!
//! A [`carver::Carver`] object then carves a perfect maze into the grid with its
//! [`carver::Carver::carve`] method: a randomized depth-first walk over the rooms that opens the
//! wall cell between a room and a randomly picked unvisited neighbor room. The opened cells form
//! a spanning tree, so every room is reachable and the corridors contain no cycle. While the walk
//! backtracks, rooms with exactly one opened passage are collected into a
//! [`dead_ends::DeadEndSet`] (the degree test is boundary aware, see
//! [`dead_ends::is_dead_end`]).
//!
//! Finally, [`eroder::erode`] prunes the corridor leaves: each iteration walls off the cells in
//! the dead-end set and promotes their single open neighbor as the next round's candidates.
//!
//! The [`crate::dungeon::Dungeon`] facade drives this pipeline for consumers that do not need
//! the individual pieces.

pub mod carver;
pub mod dead_ends;
pub mod eroder;
pub mod grid;
