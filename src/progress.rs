/*
progress.rs

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

//! Level progression and hints.
//!
//! The player starts at level 1 on a 5x5 grid. Every five levels, the grid grows by one row and
//! one column, up to 8x8.
//! The player starts with three hints and gets an extra hint the first time they play on a new
//! day. A hint shows the whole solution path.
//! See the [`crate::saver::progress`] module that saves and restores the [`Progress`] object.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{INITIAL_HINTS, LEVELS_PER_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Player progression.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Progress {
    /// Current level, starting at 1.
    pub level: u32,

    /// Number of hints left.
    pub hints: u32,

    /// Last day the player played. Used to grant the daily hint.
    pub last_hint_date: Option<NaiveDate>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a [`Progress`] object for a new player.
    pub fn new() -> Self {
        Self {
            level: 1,
            hints: INITIAL_HINTS,
            last_hint_date: None,
        }
    }

    /// Return the grid size for the current level.
    pub fn grid_size(&self) -> usize {
        let steps: usize = (self.level.max(1) - 1) as usize / LEVELS_PER_SIZE as usize;
        (MIN_GRID_SIZE + steps).min(MAX_GRID_SIZE)
    }

    /// Grant a hint if the player did not play yet today, and record the day.
    ///
    /// Return `true` if a hint was granted. The very first day does not count.
    pub fn check_daily_hint(&mut self, today: NaiveDate) -> bool {
        let granted: bool = match self.last_hint_date {
            Some(d) => d != today,
            None => false,
        };
        if granted {
            self.hints += 1;
            debug!("Daily bonus: {} hints", self.hints);
        }
        self.last_hint_date = Some(today);
        granted
    }

    /// Use a hint. Return `false` if there are no hints left.
    pub fn use_hint(&mut self) -> bool {
        if self.hints == 0 {
            return false;
        }
        self.hints -= 1;
        true
    }

    /// Move to the next level, after the puzzle is solved.
    pub fn advance_level(&mut self) {
        self.level += 1;
        debug!("Level {} ({}x{})", self.level, self.grid_size(), self.grid_size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_by_level() {
        let mut p: Progress = Progress::new();
        assert_eq!(p.grid_size(), 5);
        p.level = 5;
        assert_eq!(p.grid_size(), 5);
        p.level = 6;
        assert_eq!(p.grid_size(), 6);
        p.level = 16;
        assert_eq!(p.grid_size(), 8);
        p.level = 100;
        assert_eq!(p.grid_size(), 8);
        p.level = 0;
        assert_eq!(p.grid_size(), 5);
    }

    #[test]
    fn test_daily_hint() {
        let day1: NaiveDate = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let day2: NaiveDate = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let mut p: Progress = Progress::new();

        assert!(!p.check_daily_hint(day1));
        assert_eq!(p.hints, INITIAL_HINTS);
        assert!(!p.check_daily_hint(day1));
        assert!(p.check_daily_hint(day2));
        assert_eq!(p.hints, INITIAL_HINTS + 1);
        assert_eq!(p.last_hint_date, Some(day2));
    }

    #[test]
    fn test_use_hints_until_none() {
        let mut p: Progress = Progress::new();
        for _ in 0..INITIAL_HINTS {
            assert!(p.use_hint());
        }
        assert!(!p.use_hint());
        assert_eq!(p.hints, 0);
    }

    #[test]
    fn test_advance_level() {
        let mut p: Progress = Progress::new();
        for _ in 0..5 {
            p.advance_level();
        }
        assert_eq!(p.level, 6);
        assert_eq!(p.grid_size(), 6);
    }
}
