/*
path.rs

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

//! Path through the cells of the Numlink grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::grid::Coordinate;

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Coordinate>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coordinate>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_vec(path: &[Coordinate]) -> Self {
        Self {
            path: path.to_vec(),
            visited: path.iter().copied().collect(),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, coord: Coordinate) {
        self.path.push(coord);
        self.visited.insert(coord);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(c) = self.path.pop() {
            self.visited.remove(&c);
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.visited.contains(&coord)
    }

    /// Return a reference to the ordered list of cells.
    pub fn get(&self) -> &[Coordinate] {
        &self.path
    }

    /// Return the position of the given cell in the path.
    pub fn position(&self, coord: Coordinate) -> Option<usize> {
        self.path.iter().position(|c| *c == coord)
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Coordinate> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }

    /// Whether the path visits every cell of a `size` x `size` grid exactly once, moving from
    /// one cell to an adjacent cell at each step.
    pub fn is_hamiltonian(&self, size: usize) -> bool {
        if self.path.len() != size * size {
            return false;
        }
        let distinct: HashSet<&Coordinate> = self.path.iter().collect();
        if distinct.len() != self.path.len() {
            return false;
        }
        if self.path.iter().any(|c| c.row >= size || c.col >= size) {
            return false;
        }
        self.path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}
