/*
lib.rs

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

//! Dungen generates procedural perfect-maze dungeons and erodes their dead ends.
//!
//! The entry point for most consumers is [`dungeon::Dungeon`], which owns the carved grid and
//! its dead-end set and exposes the erode and regenerate operations. The pieces of the pipeline
//! live in [`generator`]; [`draw`] renders a dungeon as text.
//!
//! # Examples
//!
//! ```
//! use dungen::draw;
//! use dungen::dungeon::Dungeon;
//!
//! let mut dungeon = Dungeon::new(25).expect("size must be odd");
//! dungeon.erode(3);
//! print!("{}", draw::render(&dungeon, false));
//! ```

pub mod draw;
pub mod dungeon;
pub mod generator;
