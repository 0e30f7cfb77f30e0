/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] owns the grid, the solution path, and the lines drawn by the player. The player
//! draws one line at a time:
//!
//! * [`Game::begin_line`] starts a line from an anchor. If a line already starts from that
//!   anchor, it is removed first.
//! * [`Game::extend_line`] moves the end of the line to an adjacent cell. Moving back to the
//!   previous cell shrinks the line. Reaching the next anchor completes the line.
//! * [`Game::end_line`] drops the line if it is not complete.
//!
//! Lines never share a cell, except the anchors where a line ends and the next one starts.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::generator::anchors;
use crate::generator::grid::{Cell, Coordinate, Grid};
use crate::generator::path::Path;
use crate::generator::random_path::RandomPath;
use crate::lines::{Line, Lines};

/// Result of moving the end of the line being drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExtendResult {
    /// The line has one more cell.
    Grew,

    /// The player moved back to the previous cell, and the line has one cell less.
    Retracted,

    /// The line reached the next anchor. The value is the anchor the line starts from.
    Committed(u32),

    /// The move is not allowed. Nothing changed.
    Rejected,
}

fn fresh_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct Game {
    /// Cells and anchors.
    grid: Grid,

    /// Current puzzle path (solution).
    path: Path,

    /// Lines that the player completed.
    lines: Lines,

    /// Line being drawn. Never saved.
    #[serde(skip)]
    draft: Option<Line>,

    /// Random source for the puzzle generator.
    #[serde(skip, default = "fresh_rng")]
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a [`Game`] object with no puzzle.
    pub fn new() -> Self {
        Self::with_rng(fresh_rng())
    }

    /// Create a [`Game`] object that always generates the same puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            grid: Grid::default(),
            path: Path::default(),
            lines: Lines::new(),
            draft: None,
            rng,
        }
    }

    /// Create a [`Game`] object from a prepared grid and its solution path.
    pub fn from_puzzle(grid: Grid, path: Path) -> Self {
        let mut game: Game = Self::new();
        game.grid = grid;
        game.path = path;
        game
    }

    /// Generate a new puzzle. The lines of the previous puzzle are dropped.
    ///
    /// If the generator cannot find a path that covers the whole grid, the puzzle is built on the
    /// longest path it found. Such a puzzle cannot be solved: check [`Game::is_complete`] and call
    /// the method again.
    pub fn new_puzzle(&mut self, size: usize) -> (&Grid, &Path) {
        self.build_puzzle(RandomPath::new(size.max(1)))
    }

    fn build_puzzle(&mut self, mut generator: RandomPath) -> (&Grid, &Path) {
        let size: usize = generator.size;

        self.path = generator.generate(&mut self.rng);
        if let Some(e) = generator.last_error() {
            warn!("Degraded {size}x{size} puzzle: {e}");
        }
        self.grid = Grid::new(size);
        let placed: Vec<(Coordinate, u32)> =
            anchors::segment(&self.path, &mut self.grid, &mut self.rng);
        self.lines.clear();
        self.draft = None;

        info!(
            "New {size}x{size} puzzle with {} anchors ({} attempts, {}s)",
            placed.len(),
            generator.attempts,
            generator.duration
        );
        (&self.grid, &self.path)
    }

    /// Return the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Return the cell at the given row and column.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.cell_at(row, col)
    }

    /// Return the completed lines.
    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    /// Return the line being drawn.
    pub fn draft(&self) -> Option<&Line> {
        self.draft.as_ref()
    }

    /// Whether a line is being drawn.
    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Whether the solution path covers the whole grid, so that the puzzle can be solved.
    pub fn is_complete(&self) -> bool {
        self.grid.size() > 0 && self.path.is_hamiltonian(self.grid.size())
    }

    /// Return the solution, for the hint display.
    pub fn hint_path(&self) -> &Path {
        &self.path
    }

    /// Start drawing a line from the anchor at the given cell.
    ///
    /// Return `false` if the cell is not an anchor.
    pub fn begin_line(&mut self, row: usize, col: usize) -> bool {
        let coord: Coordinate = Coordinate::new(row, col);
        let Some(value) = self.grid.anchor_value(coord) else {
            debug!("Cannot start a line from {coord}: not an anchor");
            return false;
        };

        // The player draws again from this anchor
        if self.lines.remove(value).is_some() {
            debug!("Removed the line from anchor {value}");
        }
        self.draft = Some(Line::new(value, coord));
        debug!("Drawing from anchor {value} at {coord}");
        true
    }

    /// Move the end of the line being drawn to the given cell.
    pub fn extend_line(&mut self, row: usize, col: usize) -> ExtendResult {
        let coord: Coordinate = Coordinate::new(row, col);
        if !self.grid.contains(coord) {
            return ExtendResult::Rejected;
        }
        let (start_anchor, last, previous) = match &self.draft {
            Some(d) => match d.last_point() {
                Some(last) => (d.start_anchor, last, d.previous_point()),
                None => return ExtendResult::Rejected,
            },
            None => return ExtendResult::Rejected,
        };

        // Same cell, or not a neighbour
        if !coord.is_adjacent(last) {
            return ExtendResult::Rejected;
        }

        // Back to the previous cell
        if previous == Some(coord) {
            if let Some(d) = self.draft.as_mut() {
                d.points.pop();
            }
            return ExtendResult::Retracted;
        }

        if let Some(value) = self.grid.anchor_value(coord) {
            if value != start_anchor + 1 {
                debug!("Line from {start_anchor} cannot go through anchor {value}");
                return ExtendResult::Rejected;
            }
            if let Some(mut line) = self.draft.take() {
                line.points.push(coord);
                debug!("Line from {start_anchor} completed: {} cells", line.points.len());
                self.lines.insert(line);
            }
            if self.is_solved() {
                info!("Puzzle solved");
            }
            return ExtendResult::Committed(start_anchor);
        }

        if self.is_occupied(coord) {
            debug!("Cell {coord} is already used");
            return ExtendResult::Rejected;
        }

        if let Some(d) = self.draft.as_mut() {
            d.points.push(coord);
        }
        ExtendResult::Grew
    }

    /// Stop drawing. An incomplete line is dropped.
    pub fn end_line(&mut self) {
        if let Some(d) = self.draft.take() {
            debug!("Dropped the line from anchor {}", d.start_anchor);
        }
    }

    /// Remove the most recently completed line. A line being drawn is dropped first.
    ///
    /// Return `false` if there is no completed line.
    pub fn undo(&mut self) -> bool {
        self.draft = None;
        match self.lines.undo() {
            Some(line) => {
                debug!("Undo the line from anchor {}", line.start_anchor);
                true
            }
            None => false,
        }
    }

    /// Remove all the lines. The puzzle does not change.
    pub fn reset_draws(&mut self) {
        self.lines.clear();
        self.draft = None;
    }

    /// Whether the cell is used by an anchor, by a completed line, or by the line being drawn.
    ///
    /// The current end of the line being drawn does not count, so that moving back onto it can
    /// be told apart from crossing the line.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        if self.grid.is_anchor(coord) || self.lines.contains_point(coord) {
            return true;
        }
        match &self.draft {
            Some(d) => d.points[..d.points.len().saturating_sub(1)].contains(&coord),
            None => false,
        }
    }

    /// Return the cells used by the anchors and the completed lines.
    pub fn covered(&self) -> HashSet<Coordinate> {
        let mut set: HashSet<Coordinate> = self.lines.covered();
        set.extend(self.grid.iter().filter(|(_, c)| c.is_anchor()).map(|(c, _)| c));
        set
    }

    /// Whether each anchor is connected to the next one by a completed line.
    pub fn all_pairs_connected(&self) -> bool {
        let anchors: Vec<(Coordinate, u32)> = self.grid.anchors();

        anchors.windows(2).all(|w| {
            let ((from, value), (to, _)) = (w[0], w[1]);
            self.lines.get(value).is_some_and(|l| {
                l.points.first() == Some(&from) && l.points.last() == Some(&to)
            })
        })
    }

    /// Whether the puzzle is successfully solved: every cell is used, and every anchor is
    /// connected to the next one.
    pub fn is_solved(&self) -> bool {
        let num_cells: usize = self.grid.num_cells();
        if num_cells == 0 || self.covered().len() != num_cells {
            return false;
        }
        if !self.all_pairs_connected() {
            warn!("All the cells are used, but some anchors are not connected");
            return false;
        }
        true
    }
}
