/*
lib.rs

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

//! Numlink puzzles.
//!
//! A random path visits every cell of a square grid. Some cells of the path hold sequential
//! numbers, and the player connects each number to the next one by drawing lines through the
//! other cells. The puzzle is solved when every cell is used.
//!
//! * [`generator`] builds the path and places the numbers.
//! * [`game::Game`] holds a puzzle and the lines drawn by the player.
//! * [`progress`] and [`saver`] keep the level and the hints between sessions.
//! * [`draw`] renders a puzzle as text for the command line.

pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod lines;
pub mod progress;
pub mod saver;

pub use game::{ExtendResult, Game};
pub use generator::grid::{Cell, CellKind, Coordinate, Grid};
pub use generator::path::Path;
