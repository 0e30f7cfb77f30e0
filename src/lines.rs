/*
lines.rs

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

//! Manage the lines that the player completed.
//!
//! The module stores the completed lines, indexed by the anchor they start from, as well as the
//! order in which they were committed so that the last one can be undone.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::generator::grid::Coordinate;

/// Line drawn by the player from an anchor.
///
/// While the line is being drawn, it only starts from its anchor. Once completed, its last point
/// is the anchor with the next value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Line {
    /// Value of the anchor the line starts from.
    pub start_anchor: u32,

    /// Cells of the line, starting with the anchor cell.
    pub points: Vec<Coordinate>,
}

impl Line {
    /// Create a [`Line`] object with only its starting cell.
    pub fn new(start_anchor: u32, start: Coordinate) -> Self {
        Self {
            start_anchor,
            points: vec![start],
        }
    }

    /// Return the cell where the line currently ends.
    pub fn last_point(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Return the cell before the last one, if any.
    pub fn previous_point(&self) -> Option<Coordinate> {
        let l: usize = self.points.len();
        if l >= 2 { Some(self.points[l - 2]) } else { None }
    }

    /// Whether the cell is part of the line.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.points.contains(&coord)
    }
}

/// Completed lines.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Lines {
    /// Lines indexed by their starting anchor value.
    by_anchor: HashMap<u32, Line>,

    /// Starting anchor values in commit order. The last entry is the next line to undo.
    undo_op: Vec<u32>,
}

impl Lines {
    /// Create a [`Lines`] object.
    pub fn new() -> Self {
        Self {
            by_anchor: HashMap::new(),
            undo_op: Vec::new(),
        }
    }

    /// Remove all the lines.
    pub fn clear(&mut self) {
        self.by_anchor.clear();
        self.undo_op.clear();
    }

    /// Return the number of completed lines.
    pub fn len(&self) -> usize {
        self.by_anchor.len()
    }

    /// Whether there are no completed lines.
    pub fn is_empty(&self) -> bool {
        self.by_anchor.is_empty()
    }

    /// Add a line, replacing the line that starts from the same anchor, if any.
    pub fn insert(&mut self, line: Line) {
        self.remove(line.start_anchor);
        self.undo_op.push(line.start_anchor);
        self.by_anchor.insert(line.start_anchor, line);
    }

    /// Remove and return the line that starts from the given anchor.
    pub fn remove(&mut self, start_anchor: u32) -> Option<Line> {
        let line: Line = self.by_anchor.remove(&start_anchor)?;
        self.undo_op.retain(|a| *a != start_anchor);
        Some(line)
    }

    /// Remove and return the most recently committed line.
    pub fn undo(&mut self) -> Option<Line> {
        let start_anchor: u32 = self.undo_op.pop()?;
        self.by_anchor.remove(&start_anchor)
    }

    /// Return the line that starts from the given anchor.
    pub fn get(&self, start_anchor: u32) -> Option<&Line> {
        self.by_anchor.get(&start_anchor)
    }

    /// Whether a completed line goes through the cell.
    pub fn contains_point(&self, coord: Coordinate) -> bool {
        self.by_anchor.values().any(|l| l.contains(coord))
    }

    /// Iterate over the lines in commit order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> + '_ {
        self.undo_op.iter().filter_map(|a| self.by_anchor.get(a))
    }

    /// Return all the cells used by the lines.
    pub fn covered(&self) -> HashSet<Coordinate> {
        self.by_anchor
            .values()
            .flat_map(|l| l.points.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start_anchor: u32, points: &[(usize, usize)]) -> Line {
        Line {
            start_anchor,
            points: points.iter().map(|(r, c)| Coordinate::new(*r, *c)).collect(),
        }
    }

    #[test]
    fn test_undo_follows_commit_order() {
        let mut lines: Lines = Lines::new();
        lines.insert(line(2, &[(0, 3), (0, 4)]));
        lines.insert(line(1, &[(0, 0), (0, 1)]));

        assert_eq!(lines.undo().map(|l| l.start_anchor), Some(1));
        assert_eq!(lines.undo().map(|l| l.start_anchor), Some(2));
        assert_eq!(lines.undo(), None);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_insert_replaces_same_anchor() {
        let mut lines: Lines = Lines::new();
        lines.insert(line(1, &[(0, 0), (0, 1), (0, 2)]));
        lines.insert(line(3, &[(2, 0), (2, 1)]));
        lines.insert(line(1, &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 2)]));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.get(1).map(|l| l.points.len()), Some(5));
        assert!(lines.contains_point(Coordinate::new(1, 1)));

        // The replacing line is now the most recent one
        let order: Vec<u32> = lines.iter().map(|l| l.start_anchor).collect();
        assert_eq!(order, vec![3, 1]);
        assert_eq!(lines.undo().map(|l| l.start_anchor), Some(1));
        assert!(!lines.contains_point(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_remove_and_covered() {
        let mut lines: Lines = Lines::new();
        lines.insert(line(1, &[(0, 0), (0, 1)]));
        lines.insert(line(2, &[(0, 1), (1, 1)]));

        assert_eq!(lines.covered().len(), 3);
        assert!(lines.remove(1).is_some());
        assert!(lines.remove(1).is_none());
        assert_eq!(lines.covered().len(), 2);
        assert_eq!(lines.undo().map(|l| l.start_anchor), Some(2));
    }

    #[test]
    fn test_line_points() {
        let mut l: Line = Line::new(4, Coordinate::new(2, 2));
        assert_eq!(l.previous_point(), None);
        l.points.push(Coordinate::new(2, 3));
        assert_eq!(l.last_point(), Some(Coordinate::new(2, 3)));
        assert_eq!(l.previous_point(), Some(Coordinate::new(2, 2)));
    }
}
