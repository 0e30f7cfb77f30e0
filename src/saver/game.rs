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

//! Save and restore the game in progress when quitting or starting Numlink.
//!
//! When a game is in progress and the player quits Numlink, the game status is saved in the
//! `savegame.json` file.
//! When Numlink is restarted, the saved game is loaded, and the player can continue the puzzle.
//!
//! The saved object is a serialization of the [`Game`] object in JSON format by using [`serde`].
//! The line being drawn is not saved.

use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::{delete_json, load_json, save_json};
use crate::game::Game;

/// Object to save and restore a puzzle in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the directory where the puzzle is saved.
    pub fn new(data_dir: PathBuf) -> Self {
        let save_file: PathBuf = data_dir.join("savegame.json");
        debug!("Save game file: {save_file:?}");
        Self { save_file }
    }

    /// Return the saved puzzle, or None if there is no saved puzzle.
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        load_json(&self.save_file)
    }

    /// Save the game. The line being drawn is not saved.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        save_json(&self.save_file, game)
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        delete_json(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ExtendResult;

    #[test]
    fn test_save_and_restore_lines() {
        let dir = tempfile::tempdir().unwrap();
        let saver: SaverGame = SaverGame::new(dir.path().to_path_buf());
        assert!(saver.get_game().unwrap().is_none());

        let mut game: Game = Game::with_seed(99);
        game.new_puzzle(5);

        // Complete the first line along the solution, then start another one
        let cells = game.hint_path().get().to_vec();
        assert!(game.begin_line(cells[0].row, cells[0].col));
        let mut i: usize = 1;
        while game.extend_line(cells[i].row, cells[i].col) == ExtendResult::Grew {
            i += 1;
        }
        assert!(game.begin_line(cells[i].row, cells[i].col));
        assert_eq!(game.extend_line(cells[i + 1].row, cells[i + 1].col), ExtendResult::Grew);

        saver.save_game(&game).unwrap();
        let restored: Game = saver.get_game().unwrap().unwrap();

        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.hint_path(), game.hint_path());
        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.lines().get(1), game.lines().get(1));
        assert!(!restored.is_drawing());
        assert!(restored.hint_path().contains(cells[3]));

        saver.delete_save();
        assert!(saver.get_game().unwrap().is_none());
    }
}
