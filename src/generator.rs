/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is composed of two parts:
//!
//! * A random path represented by a [`path::Path`] object, which visits every cell of the grid
//!   exactly once.
//!   You create this object by creating a [`random_path::RandomPath`] object and by using its
//!   [`random_path::RandomPath::generate`] method.
//!   If all the attempts fail, then the method returns the longest path it found, which does not
//!   cover the whole grid.
//!
//! * A [`grid::Grid`] object where some cells of the path hold sequential numbers (anchors).
//!   These numbers are placed by the [`anchors::segment`] function.
//!   The player must connect each anchor to the next one so that every cell is used.

pub mod anchors;
pub mod grid;
pub mod path;
pub mod random_path;
