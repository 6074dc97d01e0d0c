//! Example walking the engine's call surface from the command line.
//!
//! Picks a built-in theme, prints the clue grid, then repeatedly asks the
//! engine for a hint and tries to act on it, reporting placements,
//! rejections, and discovered words along the way.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! ```
//!
//! Choose a theme and a hint budget:
//!
//! ```sh
//! cargo run --example play -- --theme countries --hints 20
//! ```
//!
//! Engine logging is available through `env_logger`:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example play
//! ```

use std::process;

use clap::Parser;
use cloudoku_core::{Position, Theme, theme::BUILTIN_NAMES};
use cloudoku_game::Game;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Built-in theme to play (animals, colors, countries).
    #[arg(long, value_name = "NAME", default_value = "animals")]
    theme: String,

    /// Number of hints to request and act on.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    hints: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(theme) = Theme::builtin(&args.theme) else {
        eprintln!("Unknown theme: {}", args.theme);
        eprintln!("Available themes:");
        for name in BUILTIN_NAMES {
            eprintln!("  {name}");
        }
        process::exit(2);
    };

    let mut game = Game::new(theme);

    println!("Theme: {}", game.theme().name());
    println!();
    println!("Starting grid:");
    print_grid(&game);
    println!();

    for _ in 0..args.hints {
        let Some(hint) = game.hint() else {
            println!("The grid is full; no more hints.");
            break;
        };

        let Some(symbol) = hint.symbol else {
            println!(
                "Hint: {} wants '{}', which the grid alphabet cannot spell; skipping.",
                hint.position, hint.letter
            );
            continue;
        };

        match game.try_place(hint.position.row(), hint.position.col(), symbol.value()) {
            Ok(()) => println!("Placed {} at {}.", hint.letter, hint.position),
            Err(reason) => {
                println!("Hint {} at {} rejected: {reason}.", hint.letter, hint.position);
                continue;
            }
        }

        for discovery in game.scan_completed_lines() {
            println!("Discovered {} on {}!", discovery.word, discovery.line);
        }
    }

    println!();
    println!("Final grid:");
    print_grid(&game);
    println!();
    println!("Revealed cells: {}", game.revealed_count());
    println!("Words found: {}", game.words_found());
    println!("Hints used: {}", game.hints_used());
    if game.is_complete() {
        println!("All words discovered!");
    }
}

fn print_grid(game: &Game) {
    for row in 0..9 {
        if row % 3 == 0 && row != 0 {
            println!("  ------+-------+------");
        }
        let mut rendered = String::from("  ");
        for col in 0..9 {
            if col % 3 == 0 && col != 0 {
                rendered.push_str("| ");
            }
            match game.cell(Position::new(row, col)).symbol() {
                Some(symbol) => rendered.push(symbol.letter()),
                None => rendered.push('.'),
            }
            rendered.push(' ');
        }
        println!("{}", rendered.trim_end());
    }
}
