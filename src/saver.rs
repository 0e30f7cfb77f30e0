/*
saver.rs

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

//! Save and restore the player data.
//!
//! Both objects are stored in JSON format in the data directory, by using [`serde`].

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

pub mod game;
pub mod progress;

/// Read an object from a JSON file. Return None if the file does not exist.
fn load_json<T: DeserializeOwned>(file: &Path) -> Result<Option<T>, Box<dyn Error>> {
    let f: File = match File::open(file) {
        Ok(f) => f,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(Box::new(error)),
    };
    Ok(Some(serde_json::from_reader(BufReader::new(f))?))
}

/// Write an object to a JSON file, replacing the previous content.
fn save_json<T: Serialize>(file: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let mut writer: BufWriter<File> = BufWriter::new(File::create(file)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Remove a save file. A missing file is not an error.
fn delete_json(file: &Path) {
    if let Err(e) = remove_file(file)
        && e.kind() != ErrorKind::NotFound
    {
        warn!("Cannot remove {}: {e}", file.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nowhere").join("data.json");

        assert!(load_json::<u32>(&file).unwrap().is_none());
        assert!(save_json(&file, &3u32).is_err());
        delete_json(&file);
    }
}
