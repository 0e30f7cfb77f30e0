/*
random_path.rs

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

//! Generate a random path that visits every cell of the grid.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{HashSet, VecDeque};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::Coordinate;
use super::path::Path;
use crate::config::{MAX_ATTEMPTS, MAX_STEPS_PER_ATTEMPT};

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomPathError {
    /// No possible path from the current cell.
    NoPath,

    /// The attempt explored too many cells.
    StepsExceeded,

    /// All the attempts failed. The longest partial path is returned instead.
    Incomplete { covered: usize, expected: usize },
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::NoPath => write!(f, "no path from this cell"),
            RandomPathError::StepsExceeded => write!(f, "too many steps for this attempt"),
            RandomPathError::Incomplete { covered, expected } => {
                write!(f, "the path only covers {covered} cells out of {expected}")
            }
        }
    }
}

impl Error for RandomPathError {}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Number of rows and columns in the grid.
    pub size: usize,

    /// Number of cells in the grid.
    pub num_cells: usize,

    /// Starting cell of the last attempt.
    pub starting_cell: Coordinate,

    /// Number of attempts it took to generate the last random path.
    pub attempts: usize,

    /// Total number of explored cells for the last random path, all attempts included.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Number of starting cells to try before giving up.
    pub max_attempts: usize,

    /// Number of cells that a single attempt may explore.
    pub max_steps: usize,

    /// Number of explored cells in the current attempt.
    steps: usize,

    /// Result of the last generation. None when the path covers the whole grid.
    last_error: Option<RandomPathError>,
}

impl RandomPath {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self::with_limits(size, MAX_ATTEMPTS, MAX_STEPS_PER_ATTEMPT)
    }

    /// Create the object with specific attempt and step limits.
    pub fn with_limits(size: usize, max_attempts: usize, max_steps: usize) -> Self {
        Self {
            size,
            num_cells: size * size,
            starting_cell: Coordinate::default(),
            attempts: 0,
            iteration: 0,
            duration: 0.0,
            max_attempts: max_attempts.max(1),
            max_steps,
            steps: 0,
            last_error: None,
        }
    }

    /// Return the error of the last generation, if the returned path is incomplete.
    pub fn last_error(&self) -> Option<&RandomPathError> {
        self.last_error.as_ref()
    }

    /// Generate and return a random path.
    ///
    /// Each attempt starts from a random cell. The first path that covers the whole grid is
    /// returned. When all the attempts fail, the longest partial path is returned, and
    /// [`RandomPath::last_error`] reports [`RandomPathError::Incomplete`].
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Path {
        let start: Instant = Instant::now();
        self.attempts = 0;
        self.iteration = 0;
        self.duration = 0.0;
        self.last_error = None;

        if self.num_cells == 0 {
            return Path::new(0);
        }

        let mut best: Path = Path::new(self.num_cells);
        let mut path: Path = Path::new(self.num_cells);

        while self.attempts < self.max_attempts {
            self.attempts += 1;
            self.steps = 0;
            path.clear();
            self.starting_cell = self.random_start(rng);

            debug!(
                "Attempt {}: starting cell = {}  Number of cells = {}",
                self.attempts, self.starting_cell, self.num_cells
            );

            match self.find_path(self.starting_cell, &mut path, &mut best, rng) {
                Ok(()) => {
                    self.duration = start.elapsed().as_secs_f32();
                    debug!(
                        "Attempts = {}  Iterations = {}  Duration = {}",
                        self.attempts, self.iteration, self.duration
                    );
                    return path;
                }
                Err(e) => debug!("    Attempt {} failed: {e}", self.attempts),
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        let e: RandomPathError = RandomPathError::Incomplete {
            covered: best.len(),
            expected: self.num_cells,
        };
        warn!("Giving up after {} attempts: {e}", self.attempts);
        self.last_error = Some(e);
        best
    }

    /// Select a random starting cell.
    ///
    /// When the grid has an odd number of cells, a path can only start on a cell of the majority
    /// color of the checkerboard, which is the color of the corners.
    fn random_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        loop {
            let c: Coordinate = Coordinate::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if self.num_cells % 2 == 0 || (c.row + c.col) % 2 == 0 {
                return c;
            }
        }
    }

    /// Recursively find a path.
    fn find_path<R: Rng + ?Sized>(
        &mut self,
        current: Coordinate,
        path: &mut Path,
        best: &mut Path,
        rng: &mut R,
    ) -> Result<(), RandomPathError> {
        path.push(current);
        if path.len() > best.len() {
            *best = path.clone();
        }
        if path.len() == self.num_cells {
            return Ok(());
        }

        self.iteration += 1;
        self.steps += 1;
        if self.steps >= self.max_steps {
            return Err(RandomPathError::StepsExceeded);
        }

        // Random order, then the most constrained neighbours first. The sort is stable, so the
        // neighbours with the same number of exits stay in random order.
        let mut candidates: Vec<Coordinate> = current
            .neighbours(self.size)
            .into_iter()
            .filter(|c| !path.contains(*c))
            .collect();
        candidates.shuffle(rng);
        candidates.sort_by_key(|c| self.free_neighbours(*c, path));

        for next in candidates {
            if self.is_dead_end(current, next, path) || self.splits_free_cells(next, path) {
                continue;
            }
            match self.find_path(next, path, best, rng) {
                Ok(()) => return Ok(()),
                Err(RandomPathError::NoPath) => (),
                Err(e) => return Err(e),
            }
        }
        path.pop();
        Err(RandomPathError::NoPath)
    }

    /// Whether moving from `current` to `next` leaves a neighbour of `current` that can no
    /// longer be part of the path.
    ///
    /// A free cell with no free neighbour left cannot be reached. A free cell with only one free
    /// neighbour must be the last cell of the path, and there is only one last cell.
    fn is_dead_end(&self, current: Coordinate, next: Coordinate, path: &Path) -> bool {
        let mut path_ends: usize = 0;

        for cell in current
            .neighbours(self.size)
            .into_iter()
            .filter(|c| *c != next && !path.contains(*c))
        {
            let free: usize = cell
                .neighbours(self.size)
                .into_iter()
                .filter(|c| *c == next || !path.contains(*c))
                .count();
            match free {
                0 => return true,
                1 => path_ends += 1,
                _ => (),
            }
        }
        path_ends > 1
    }

    /// Return the number of neighbours of the cell that are not in the path yet.
    fn free_neighbours(&self, cell: Coordinate, path: &Path) -> usize {
        cell.neighbours(self.size)
            .into_iter()
            .filter(|c| !path.contains(*c))
            .count()
    }

    /// Whether moving to `next` cuts the remaining free cells in several regions.
    ///
    /// The path continues from `next`, so every free cell must still be reachable from it.
    fn splits_free_cells(&self, next: Coordinate, path: &Path) -> bool {
        let remaining: usize = self.num_cells - path.len() - 1;
        if remaining == 0 {
            return false;
        }

        let mut seen: HashSet<Coordinate> = HashSet::with_capacity(remaining + 1);
        let mut queue: VecDeque<Coordinate> = VecDeque::new();
        seen.insert(next);
        queue.push_back(next);

        while let Some(cell) = queue.pop_front() {
            for n in cell.neighbours(self.size) {
                if !path.contains(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len() - 1 < remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_covers_every_size() {
        for size in 1..=8 {
            let mut rng: StdRng = StdRng::seed_from_u64(size as u64);
            let mut generator: RandomPath = RandomPath::new(size);
            let path: Path = generator.generate(&mut rng);

            assert_eq!(generator.last_error(), None, "size {size}");
            assert!(path.is_hamiltonian(size), "size {size}: {:?}", path.get());
        }
    }

    #[test]
    fn test_generate_many_paths() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let mut generator: RandomPath = RandomPath::new(6);

        for _ in 0..20 {
            let path: Path = generator.generate(&mut rng);
            assert!(path.is_hamiltonian(6));
            assert!(generator.attempts >= 1 && generator.attempts <= MAX_ATTEMPTS);
        }
    }

    #[test]
    fn test_large_grids_never_degrade() {
        let mut rng: StdRng = StdRng::seed_from_u64(77);
        let mut generator: RandomPath = RandomPath::new(8);

        for i in 0..60 {
            let path: Path = generator.generate(&mut rng);
            assert_eq!(generator.last_error(), None, "path {i}");
            assert!(path.is_hamiltonian(8), "path {i}: {:?}", path.get());
        }
    }

    #[test]
    fn test_gives_up_with_longest_path() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut generator: RandomPath = RandomPath::with_limits(5, 3, 6);
        let path: Path = generator.generate(&mut rng);

        assert_eq!(generator.attempts, 3);
        assert_eq!(
            generator.last_error(),
            Some(&RandomPathError::Incomplete {
                covered: path.len(),
                expected: 25
            })
        );
        assert!(!path.is_empty() && path.len() < 25);
        assert!(!path.is_hamiltonian(5));

        // Still a valid path: distinct cells, each one next to the previous one
        let cells: &[Coordinate] = path.get();
        assert!(cells.windows(2).all(|w| w[0].is_adjacent(w[1])));
        let distinct: HashSet<&Coordinate> = cells.iter().collect();
        assert_eq!(distinct.len(), cells.len());

        // The next generation starts over
        let mut generator: RandomPath = RandomPath::new(5);
        generator.generate(&mut rng);
        assert_eq!(generator.last_error(), None);
    }

    #[test]
    fn test_split_detection() {
        // 4x4 grid, path along the second row
        let mut path: Path = Path::new(16);
        path.push(Coordinate::new(1, 0));
        path.push(Coordinate::new(1, 1));
        path.push(Coordinate::new(1, 2));
        let generator: RandomPath = RandomPath::new(4);

        // (1,3) still joins the first row to the bottom rows
        assert!(!generator.splits_free_cells(Coordinate::new(1, 3), &path));

        // Once the row is full, going up leaves the bottom rows out of reach
        path.push(Coordinate::new(1, 3));
        assert!(generator.splits_free_cells(Coordinate::new(0, 3), &path));
        assert!(generator.splits_free_cells(Coordinate::new(2, 3), &path));
    }

    #[test]
    fn test_same_seed_same_path() {
        let mut generator: RandomPath = RandomPath::new(5);
        let p1: Path = generator.generate(&mut StdRng::seed_from_u64(7));
        let p2: Path = generator.generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_odd_grid_starts_on_corner_color() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let generator: RandomPath = RandomPath::new(5);

        for _ in 0..50 {
            let c: Coordinate = generator.random_start(&mut rng);
            assert_eq!((c.row + c.col) % 2, 0);
        }
    }

    #[test]
    fn test_dead_end_detection() {
        // 3x3 grid, starting from the top middle cell
        let mut path: Path = Path::new(9);
        path.push(Coordinate::new(0, 1));
        let generator: RandomPath = RandomPath::new(3);

        assert!(!generator.is_dead_end(Coordinate::new(0, 1), Coordinate::new(0, 0), &path));

        path.push(Coordinate::new(1, 1));
        path.push(Coordinate::new(1, 0));
        // (0,0) is now only reachable from (1,0); going to (2,0) strands it
        assert!(generator.is_dead_end(Coordinate::new(1, 0), Coordinate::new(2, 0), &path));
        assert!(!generator.is_dead_end(Coordinate::new(1, 0), Coordinate::new(0, 0), &path));
    }
}
