/*
draw.rs

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

//! Render a dungeon as text.
//!
//! The renderer only reads the per-cell wall state and the dead-end set; it never calls back
//! into the generation pipeline.

use crate::dungeon::Dungeon;

const WALL: char = '█';
const OPEN: char = ' ';
const DEAD_END: char = '*';

/// Render the grid, one text row per grid row.
///
/// Walls are solid blocks and open cells are blank. Each cell is doubled horizontally so the
/// output looks roughly square in a terminal. With `mark_dead_ends`, the cells of the current
/// dead-end set are marked.
pub fn render(dungeon: &Dungeon, mark_dead_ends: bool) -> String {
    let size: usize = dungeon.size();
    let mut out: String = String::with_capacity(size * (2 * size + 1));

    for cell in dungeon.grid().cells() {
        if cell.x == 0 && cell.y > 0 {
            out.push('\n');
        }
        let c: char = if cell.is_wall {
            WALL
        } else if mark_dead_ends && dungeon.dead_ends().contains(cell.x, cell.y) {
            DEAD_END
        } else {
            OPEN
        };
        out.push(c);
        out.push(c);
    }
    out
}
