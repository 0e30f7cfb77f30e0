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

//! Save and restore the player progression.
//!
//! The saved object is a serialization of the [`Progress`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::{delete_json, load_json, save_json};
use crate::progress::Progress;

/// Level and hints of the player, kept in `progress.json`.
pub struct SaverProgress {
    save_file: PathBuf,
}

impl SaverProgress {
    pub fn new(data_dir: PathBuf) -> Self {
        let save_file: PathBuf = data_dir.join("progress.json");
        debug!("Progress file: {save_file:?}");
        Self { save_file }
    }

    /// Return the saved progression, or None for a new player.
    pub fn get_progress(&self) -> Result<Option<Progress>, Box<dyn Error>> {
        load_json(&self.save_file)
    }

    pub fn save_progress(&self, progress: &Progress) -> Result<(), Box<dyn Error>> {
        save_json(&self.save_file, progress)
    }

    pub fn delete_save(&self) {
        delete_json(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_save_and_restore() {
        let dir = tempfile::tempdir().unwrap();
        let saver: SaverProgress = SaverProgress::new(dir.path().to_path_buf());

        assert!(saver.get_progress().unwrap().is_none());

        let mut progress: Progress = Progress::new();
        progress.level = 7;
        progress.hints = 1;
        progress.last_hint_date = NaiveDate::from_ymd_opt(2025, 6, 30);
        saver.save_progress(&progress).unwrap();

        assert_eq!(saver.get_progress().unwrap(), Some(progress));

        saver.delete_save();
        assert!(saver.get_progress().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("progress.json"), "{ level: ").unwrap();
        let saver: SaverProgress = SaverProgress::new(dir.path().to_path_buf());

        assert!(saver.get_progress().is_err());
    }
}
