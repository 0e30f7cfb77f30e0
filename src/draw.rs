/*
draw.rs

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

//! Draw the puzzle as text.
//!
//! Each cell is three characters wide. Anchors show their value. Cells used by a completed line
//! show `#`, cells of the line being drawn show `+`, and free cells show `.`.
//! Two cells of the same line are joined by `-` or `|` when the line goes from one to the other.

use std::collections::HashSet;

use crate::game::Game;
use crate::generator::grid::{Coordinate, Grid};
use crate::generator::path::Path;
use crate::lines::Line;

/// Return the pairs of consecutive cells of a line, in both directions.
fn links(points: &[Coordinate]) -> HashSet<(Coordinate, Coordinate)> {
    points
        .windows(2)
        .flat_map(|w| [(w[0], w[1]), (w[1], w[0])])
        .collect()
}

/// Render the grid with the given links between cells. `mark` returns the symbol of a non-anchor
/// cell.
fn render<F>(grid: &Grid, joined: &HashSet<(Coordinate, Coordinate)>, mark: F) -> String
where
    F: Fn(Coordinate) -> char,
{
    let size: usize = grid.size();
    let mut s: String = String::new();

    for row in 0..size {
        // Cells and horizontal links
        for col in 0..size {
            let c: Coordinate = Coordinate::new(row, col);
            match grid.anchor_value(c) {
                Some(v) => s.push_str(&format!("{v:^3}")),
                None => s.push_str(&format!(" {} ", mark(c))),
            }
            if col + 1 < size {
                if joined.contains(&(c, Coordinate::new(row, col + 1))) {
                    s.push('-');
                } else {
                    s.push(' ');
                }
            }
        }
        s.push('\n');

        // Vertical links
        if row + 1 < size {
            for col in 0..size {
                let c: Coordinate = Coordinate::new(row, col);
                if joined.contains(&(c, Coordinate::new(row + 1, col))) {
                    s.push_str(" | ");
                } else {
                    s.push_str("   ");
                }
                if col + 1 < size {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
    }
    s
}

/// Draw the grid, the completed lines, and the line being drawn.
pub fn draw_game(game: &Game) -> String {
    let mut joined: HashSet<(Coordinate, Coordinate)> = HashSet::new();
    for line in game.lines().iter() {
        joined.extend(links(&line.points));
    }
    let draft: Option<&Line> = game.draft();
    if let Some(d) = draft {
        joined.extend(links(&d.points));
    }

    render(game.grid(), &joined, |c| {
        if game.lines().contains_point(c) {
            '#'
        } else if draft.is_some_and(|d| d.contains(c)) {
            '+'
        } else {
            '.'
        }
    })
}

/// Draw the grid alone, as given to the player.
pub fn draw_grid(grid: &Grid) -> String {
    render(grid, &HashSet::new(), |_| '.')
}

/// Draw the grid with the whole solution path over it.
pub fn draw_solution(grid: &Grid, path: &Path) -> String {
    render(grid, &links(path.get()), |c| {
        if path.contains(c) { '#' } else { '.' }
    })
}
