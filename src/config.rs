/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Numlink.

Numlink is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Numlink is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Numlink. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build-time constants.

pub const PKGNAME: &str = "numlink";

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Grid size for the first levels.
pub const MIN_GRID_SIZE: usize = 5;

/// The grid stops growing at this size, whatever the level.
pub const MAX_GRID_SIZE: usize = 8;

/// Number of levels played before the grid grows by one row and one column.
pub const LEVELS_PER_SIZE: u32 = 5;

/// Smallest grid the command line accepts.
pub const MIN_CLI_GRID_SIZE: usize = 2;

/// Largest grid the command line accepts.
pub const MAX_CLI_GRID_SIZE: usize = 16;

/// Number of random starting cells tried before the path generator gives up.
pub const MAX_ATTEMPTS: usize = 100;

/// Number of cells the path generator may explore from a single starting cell.
pub const MAX_STEPS_PER_ATTEMPT: usize = 50_000;

/// Number of puzzles the play loop generates before accepting one that does not cover the grid.
pub const MAX_PUZZLE_RETRIES: usize = 10;

/// Smallest distance, along the solution path, between two consecutive anchors.
pub const MIN_ANCHOR_GAP: usize = 2;

/// Largest distance, along the solution path, between two consecutive anchors.
pub const MAX_ANCHOR_GAP: usize = 4;

/// Number of hints given to a new player.
pub const INITIAL_HINTS: u32 = 3;
