/*
eroder.rs

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

//! Prune dead-end corridors back toward the body of the maze.

use log::debug;

use super::dead_ends::DeadEndSet;
use super::grid::Grid;

/// Erode the dead ends for the given number of iterations.
///
/// Each iteration walls off every cell in the set and promotes its single open neighbor as the
/// next iteration's dead end, shortening every live corridor branch by one cell from its tip.
/// A listed cell without exactly one open neighbor is skipped: its corridor has branched or
/// closed since it was classified, and walling it off would break a junction. The promoted
/// neighbor is not re-checked against the degree rule until its own erosion round.
///
/// The set is replaced, not merged, on every iteration. Zero iterations is a no-op, and
/// iterations beyond the length of the longest corridor empty the set and do nothing more.
pub fn erode(grid: &mut Grid, dead_ends: &mut DeadEndSet, iterations: usize) {
    for round in 0..iterations {
        if dead_ends.is_empty() {
            break;
        }

        let mut next: DeadEndSet = DeadEndSet::new();
        let mut pruned: usize = 0;

        for (x, y) in dead_ends.iter() {
            let open: Vec<(usize, usize)> = grid
                .adjacent(x, y)
                .into_iter()
                .filter(|&(nx, ny)| !grid.wall(nx, ny))
                .collect();
            if open.len() != 1 {
                continue;
            }

            grid.set_wall_flag(x, y, true);
            pruned += 1;
            let (nx, ny) = open[0];
            next.push(nx, ny);
        }

        debug!("Erosion round {round}: pruned {pruned}, promoted {}", next.len());
        *dead_ends = next;
    }
}
