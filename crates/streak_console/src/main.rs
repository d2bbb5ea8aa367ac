//! Console front-end: prompts two players for coordinates and renders
//! the board between turns.

#![warn(missing_docs)]

mod cli;
mod input;

use anyhow::Result;
use clap::Parser;
use streak_engine::{Game, GameConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    info!(?cli, "starting console game");

    let config = GameConfig::new(cli.height, cli.width, cli.win_length);
    let game = Game::new(config, cli.strategy.build())?;
    run(game)
}

/// Drives the prompt/play loop until the game reports completion.
fn run(mut game: Game) -> Result<()> {
    while !game.is_done() {
        println!("===================================================");
        println!("{game}");

        let row = input::read_index("Row:\t")?;
        let col = input::read_index("Col:\t")?;
        let (Some(row), Some(col)) = (row, col) else {
            println!("ERROR: Please provide correct integer input values...");
            continue;
        };

        if !game.is_play_valid(row, col) {
            debug!(row, col, "rejected target");
            println!("ERROR: Please provide correct integer input values...");
            continue;
        }

        game = game.play_at(row, col)?;
        println!("{}", game.round_result_text().expect("move just played"));
        game = game.toggle_turn();
    }

    println!("{game}");
    Ok(())
}
