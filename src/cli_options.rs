/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Numlink generates a puzzle for the saved level and prints it.
//! The `--play` option starts a game in the terminal.
//!
//! # Examples
//!
//! Generate three 6x6 puzzles with their solutions:
//!
//! ```
//! $ numlink -n 6 -c 3 --solution
//! ```
//!
//! Play, saving the progression in a specific directory:
//!
//! ```
//! $ numlink --play --data-dir /tmp/numlink
//! Level 1 - Hints: 3
//!  1   .   .   2   .
//! ...
//! > b 0 0
//! > e 0 1 0 2
//! ```

use chrono::Local;
use clap::Parser;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use numlink::config::{
    COPYRIGHT_NOTICE, MAX_CLI_GRID_SIZE, MAX_PUZZLE_RETRIES, MIN_CLI_GRID_SIZE, PKGNAME,
};
use numlink::draw::{draw_game, draw_grid, draw_solution};
use numlink::game::{ExtendResult, Game};
use numlink::generator::anchors;
use numlink::generator::grid::{Coordinate, Grid};
use numlink::generator::path::Path;
use numlink::generator::random_path::RandomPath;
use numlink::progress::Progress;
use numlink::saver::game::SaverGame;
use numlink::saver::progress::SaverProgress;

/// Generate and play Numlink puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of rows and columns. Defaults to the size for the saved level
    #[arg(short = 'n', long, value_parser = parse_size)]
    size: Option<usize>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the solution path after each puzzle
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Seed for the random generator, to get the same puzzles again
    #[arg(long)]
    seed: Option<u64>,

    /// Play in the terminal
    #[arg(short, long, default_value_t = false, conflicts_with_all = ["count", "summary", "solution"])]
    play: bool,

    /// Directory where the progression and the game in progress are saved
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Validate the grid size option.
fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !(MIN_CLI_GRID_SIZE..=MAX_CLI_GRID_SIZE).contains(&size) {
        return Err(format!(
            "the size must be between {MIN_CLI_GRID_SIZE} and {MAX_CLI_GRID_SIZE}"
        ));
    }
    Ok(size)
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: Option<PathBuf> = args
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join(PKGNAME)));

    let ret: Result<(), Box<dyn Error>> = if args.play {
        match data_dir {
            Some(d) => play(&args, d),
            None => Err("Cannot find the data directory; use --data-dir".into()),
        }
    } else {
        let size: usize = match args.size {
            Some(s) => s,
            None => saved_progress(data_dir).grid_size(),
        };
        generate(&args, size);
        Ok(())
    };

    match ret {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Return the saved progression, or a new one.
fn saved_progress(data_dir: Option<PathBuf>) -> Progress {
    let Some(d) = data_dir else {
        return Progress::new();
    };
    match SaverProgress::new(d).get_progress() {
        Ok(p) => p.unwrap_or_default(),
        Err(e) => {
            warn!("Cannot read the progression: {e}");
            Progress::new()
        }
    }
}

/// Create the random generator from the seed option.
fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate and print puzzles.
fn generate(args: &Args, size: usize) {
    let mut rng: StdRng = build_rng(args.seed);
    let mut generator: RandomPath = RandomPath::new(size);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut degraded: usize = 0;

    for i in 0..args.count {
        debug!("Puzzle {i}");

        let path: Path = generator.generate(&mut rng);
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        attempts += generator.attempts;
        if let Some(e) = generator.last_error() {
            eprintln!("Puzzle {}: {e}", i + 1);
            degraded += 1;
        }

        let mut grid: Grid = Grid::new(size);
        let placed: Vec<(Coordinate, u32)> = anchors::segment(&path, &mut grid, &mut rng);

        println!("Puzzle {} ({size}x{size}, {} anchors)", i + 1, placed.len());
        println!("{}", draw_grid(&grid));
        if args.solution {
            println!("{}", draw_solution(&grid, &path));
        }
    }

    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
    degraded paths = {}",
            total,
            total / args.count as f32,
            max,
            attempts / args.count,
            degraded
        );
    }
}

/// Parse a row and a column.
fn parse_cell(row: &str, col: &str) -> Option<(usize, usize)> {
    Some((row.parse().ok()?, col.parse().ok()?))
}

const PLAY_HELP: &str = "Commands:
  b ROW COL              start a line from the number at ROW COL
  e ROW COL [ROW COL...] move the end of the line to the next cells
  x                      drop the line being drawn
  u                      undo the last completed line
  r                      remove all the lines
  h                      use a hint (show the solution)
  q                      save and quit";

/// Play in the terminal.
fn play(args: &Args, data_dir: PathBuf) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&data_dir)?;
    let saver_progress: SaverProgress = SaverProgress::new(data_dir.clone());
    let saver_game: SaverGame = SaverGame::new(data_dir);

    let mut progress: Progress = saver_progress.get_progress()?.unwrap_or_default();
    if progress.check_daily_hint(Local::now().date_naive()) {
        println!("Daily bonus: +1 hint!");
    }
    saver_progress.save_progress(&progress)?;

    let mut game: Game = restore_game(args, &saver_game, &progress);

    println!("{PLAY_HELP}\n");
    print_game(&game, &progress);

    let stdin = io::stdin();
    for input in stdin.lock().lines() {
        let input: String = input?;
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            ["b", row, col] => {
                let started: bool =
                    parse_cell(row, col).is_some_and(|(r, c)| game.begin_line(r, c));
                if !started {
                    println!("Lines start from a number");
                }
            }
            ["e", cells @ ..] if !cells.is_empty() && cells.len() % 2 == 0 => {
                for pair in cells.chunks(2) {
                    let Some((r, c)) = parse_cell(pair[0], pair[1]) else {
                        println!("Wrong cell: {} {}", pair[0], pair[1]);
                        break;
                    };
                    match game.extend_line(r, c) {
                        ExtendResult::Committed(a) => println!("{a} is connected to {}", a + 1),
                        ExtendResult::Rejected => {
                            println!("Cannot go to {r} {c}");
                            break;
                        }
                        ExtendResult::Grew | ExtendResult::Retracted => (),
                    }
                }
            }
            ["x"] => game.end_line(),
            ["u"] => {
                if !game.undo() {
                    println!("Nothing to undo");
                }
            }
            ["r"] => game.reset_draws(),
            ["h"] => {
                if progress.use_hint() {
                    saver_progress.save_progress(&progress)?;
                    println!("{}", draw_solution(game.grid(), game.hint_path()));
                } else {
                    println!("No hints remaining!");
                }
            }
            ["q"] => break,
            _ => println!("{PLAY_HELP}"),
        }

        if game.is_solved() {
            println!("{}\nLevel complete!\n", draw_game(&game));
            progress.advance_level();
            saver_progress.save_progress(&progress)?;
            game = new_game(args, &progress);
        }
        print_game(&game, &progress);
    }

    saver_game.save_game(&game)?;
    Ok(())
}

/// Restore the saved game, or create a new one if the saved puzzle is solved or cannot be solved.
fn restore_game(args: &Args, saver_game: &SaverGame, progress: &Progress) -> Game {
    match saver_game.get_game() {
        Ok(Some(g)) if g.is_complete() && !g.is_solved() => g,
        Ok(Some(_)) => {
            debug!("Discarding the saved game");
            new_game(args, progress)
        }
        Ok(None) => new_game(args, progress),
        Err(e) => {
            warn!("Cannot restore the saved game: {e}");
            new_game(args, progress)
        }
    }
}

/// Create a game with a new puzzle for the current level.
fn new_game(args: &Args, progress: &Progress) -> Game {
    let mut game: Game = match args.seed {
        Some(s) => Game::with_seed(s.wrapping_add(progress.level as u64)),
        None => Game::new(),
    };
    let size: usize = args.size.unwrap_or(progress.grid_size());

    for retry in 1..=MAX_PUZZLE_RETRIES {
        game.new_puzzle(size);
        if game.is_complete() {
            break;
        }
        warn!("Puzzle {retry} does not cover the grid, generating another one");
    }
    game
}

/// Print the level, the hints, and the grid.
fn print_game(game: &Game, progress: &Progress) {
    println!("Level {} - Hints: {}", progress.level, progress.hints);
    print!("{}> ", draw_game(game));
    let _ = io::stdout().flush();
}
