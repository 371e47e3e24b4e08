/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line maps options to the construct, erode, and regenerate actions of the dungeon
//! core and prints each result as text.
//!
//! # Examples
//!
//! Generate a small dungeon, reproducibly, and erode its dead ends three times:
//!
//! ```text
//! $ dungen --preset small --seed 7 --erode 3
//! ```
//!
//! Generate five medium dungeons and print carving statistics:
//!
//! ```text
//! $ dungen --count 5 --summary
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::fmt;

use dungen::draw;
use dungen::dungeon::Dungeon;

/// Predefined dungeon sizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum SizePreset {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizePreset::Tiny => write!(f, "tiny"),
            SizePreset::Small => write!(f, "small"),
            SizePreset::Medium => write!(f, "medium"),
            SizePreset::Large => write!(f, "large"),
            SizePreset::Huge => write!(f, "huge"),
        }
    }
}

impl SizePreset {
    /// Number of cells per grid side.
    pub fn cells(self) -> usize {
        match self {
            SizePreset::Tiny => 25,
            SizePreset::Small => 51,
            SizePreset::Medium => 101,
            SizePreset::Large => 201,
            SizePreset::Huge => 401,
        }
    }
}

/// Generate random perfect-maze dungeons and erode their dead ends.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of cells per grid side (odd number); overrides --preset
    #[arg(short, long)]
    size: Option<usize>,

    /// Predefined dungeon size
    #[arg(value_enum, short, long, default_value_t = SizePreset::Medium)]
    preset: SizePreset,

    /// Number of erosion iterations to run after carving
    #[arg(short, long, default_value_t = 0)]
    erode: usize,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Number of dungeons to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Mark the remaining dead ends in the output
    #[arg(short, long, default_value_t = false)]
    mark_dead_ends: bool,

    /// Print some statistics after generating the dungeons
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and run the requested generation.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let size: usize = args.size.unwrap_or_else(|| args.preset.cells());

    // One random source covers the whole run, so a seed reproduces every generated dungeon, not
    // only the first one.
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut dungeon: Dungeon = match Dungeon::generate(size, &mut rng) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut steps: usize = 0;
    let mut dead_ends: usize = 0;

    for i in 0..args.count {
        debug!("Dungeon {i}");
        if i > 0 {
            if let Err(e) = dungeon.regenerate(&mut rng) {
                eprintln!("Error: {e}");
                return 1;
            }
        }

        total += dungeon.carver().duration;
        if dungeon.carver().duration > max {
            max = dungeon.carver().duration;
        }
        steps += dungeon.carver().steps;
        dead_ends += dungeon.dead_ends().len();

        dungeon.erode(args.erode);

        println!("{}", draw::render(&dungeon, args.mark_dead_ends));
    }

    //
    // Print some stats
    //
    if args.summary {
        println!(
            "
      total time = {}s
    average time = {}s
        max time = {}s
    walls opened = {}
dead ends carved = {}",
            total,
            total / args.count as f32,
            max,
            steps,
            dead_ends
        );
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_size_table() {
        assert_eq!(SizePreset::Tiny.cells(), 25);
        assert_eq!(SizePreset::Small.cells(), 51);
        assert_eq!(SizePreset::Medium.cells(), 101);
        assert_eq!(SizePreset::Large.cells(), 201);
        assert_eq!(SizePreset::Huge.cells(), 401);
        // Every preset is odd, as the grid requires.
        for preset in [
            SizePreset::Tiny,
            SizePreset::Small,
            SizePreset::Medium,
            SizePreset::Large,
            SizePreset::Huge,
        ] {
            assert_eq!(preset.cells() % 2, 1);
        }
    }
}
