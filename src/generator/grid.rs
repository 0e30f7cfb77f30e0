/*
grid.rs

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

//! Cells of the Numlink grid.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the grid. Rows and columns start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Coordinate {
    /// Create a [`Coordinate`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two cells share a side (no diagonals).
    pub fn is_adjacent(&self, other: Coordinate) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Return the cells that share a side with this cell in a grid of the given size.
    pub fn neighbours(&self, size: usize) -> Vec<Coordinate> {
        let mut ret: Vec<Coordinate> = Vec::with_capacity(4);

        if self.row > 0 {
            ret.push(Coordinate::new(self.row - 1, self.col));
        }
        if self.col + 1 < size {
            ret.push(Coordinate::new(self.row, self.col + 1));
        }
        if self.row + 1 < size {
            ret.push(Coordinate::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            ret.push(Coordinate::new(self.row, self.col - 1));
        }
        ret
    }
}

/// Type of a cell.
///
/// - An `Empty` cell must be filled by the player with a line.
/// - A `FixedAnchor` cell holds a number that is given from the beginning of the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Empty,
    FixedAnchor,
}

/// Grid cell.
///
/// The anchor value is present only for [`CellKind::FixedAnchor`] cells. The fields are private
/// so that the two cannot disagree.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    anchor: Option<u32>,
    kind: CellKind,
}

impl Cell {
    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an anchor cell with the given value.
    pub fn anchor(value: u32) -> Self {
        Self {
            anchor: Some(value),
            kind: CellKind::FixedAnchor,
        }
    }

    /// Return the anchor value, or None for an empty cell.
    pub fn anchor_value(&self) -> Option<u32> {
        self.anchor
    }

    /// Return the type of the cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Whether the cell is an anchor.
    pub fn is_anchor(&self) -> bool {
        self.kind == CellKind::FixedAnchor
    }
}

/// Square grid of cells.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a [`Grid`] object with only empty cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::empty(); size]; size],
        }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the number of cells.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Whether the coordinate is inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Get the cell at the given coordinates, or None if the coordinates are outside the grid.
    pub fn get_cell(&self, coord: Coordinate) -> Option<Cell> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    /// Get the cell at the given row and column.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.get_cell(Coordinate::new(row, col))
    }

    /// Turn the cell into an anchor. Coordinates outside the grid are ignored.
    pub fn set_anchor(&mut self, coord: Coordinate, value: u32) {
        if let Some(cell) = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
        {
            *cell = Cell::anchor(value);
        }
    }

    /// Return the anchor value of the cell, or None if the cell is empty or outside the grid.
    pub fn anchor_value(&self, coord: Coordinate) -> Option<u32> {
        self.get_cell(coord).and_then(|c| c.anchor_value())
    }

    /// Whether the cell is an anchor.
    pub fn is_anchor(&self, coord: Coordinate) -> bool {
        self.get_cell(coord).is_some_and(|c| c.is_anchor())
    }

    /// Return the coordinates of the anchor with the given value.
    pub fn find_anchor(&self, value: u32) -> Option<Coordinate> {
        self.iter()
            .find(|(_, cell)| cell.anchor_value() == Some(value))
            .map(|(coord, _)| coord)
    }

    /// Return the number of anchors in the grid.
    pub fn num_anchors(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_anchor()).count()
    }

    /// Return the coordinates of all the anchors, sorted by anchor value.
    pub fn anchors(&self) -> Vec<(Coordinate, u32)> {
        let mut ret: Vec<(Coordinate, u32)> = self
            .iter()
            .filter_map(|(coord, cell)| cell.anchor_value().map(|v| (coord, v)))
            .collect();
        ret.sort_unstable_by_key(|(_, v)| *v);
        ret
    }

    /// Iterate over the cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coordinate::new(row, col), *cell))
        })
    }

    /// Print the grid in the debug log.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let mut s: String = String::new();
        for row in &self.cells {
            s.clear();
            for cell in row {
                match cell.anchor_value() {
                    Some(v) => s.push_str(&format!("{v:^4}")),
                    None => s.push_str(" .  "),
                }
            }
            debug!("{s}");
        }
    }
}
