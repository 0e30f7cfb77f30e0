/*
anchors.rs

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

//! Place the numbered anchors along the solution path.
//!
//! Anchor 1 is on the first cell of the path, and the last anchor is on the last cell. In
//! between, consecutive anchors are separated by a random number of steps along the path, so
//! that the player always has cells to fill between two numbers.

use log::debug;
use rand::Rng;

use super::grid::{Coordinate, Grid};
use super::path::Path;
use crate::config::{MAX_ANCHOR_GAP, MIN_ANCHOR_GAP};

/// Place the anchors in the grid and return them, ordered by value.
///
/// The function uses the actual length of the path, which might be shorter than the number of
/// cells in the grid if the path generator gave up.
pub fn segment<R: Rng + ?Sized>(
    path: &Path,
    grid: &mut Grid,
    rng: &mut R,
) -> Vec<(Coordinate, u32)> {
    let cells: &[Coordinate] = path.get();
    let mut anchors: Vec<(Coordinate, u32)> = Vec::new();

    if cells.is_empty() {
        return anchors;
    }

    let last: usize = cells.len() - 1;
    let mut index: usize = 0;
    let mut value: u32 = 1;

    loop {
        grid.set_anchor(cells[index], value);
        anchors.push((cells[index], value));

        if index == last {
            break;
        }

        // Do not overshoot the end of the path
        let mut gap: usize = rng.random_range(MIN_ANCHOR_GAP..=MAX_ANCHOR_GAP);
        if index + gap > last {
            gap = last - index;
        }

        index += gap;
        value += 1;
    }

    debug!("Placed {} anchors along {} cells", anchors.len(), cells.len());
    grid.debug();
    anchors
}
