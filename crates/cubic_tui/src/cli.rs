//! Command-line interface for cubic_tui.

use clap::{Parser, Subcommand};
use cubic_tictactoe::GridSize;
use std::path::PathBuf;

/// Cubic tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "cubic_tui")]
#[command(about = "Tic-tac-toe on an N×N×N cube", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a local two-player game
    Play {
        /// Edge length of the cube (2-5); overrides the config file
        #[arg(short, long, value_parser = parse_size)]
        size: Option<GridSize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the winning-line catalog as JSON
    Lines {
        /// Edge length of the cube (2-5)
        #[arg(short, long, value_parser = parse_size, default_value = "3")]
        size: GridSize,
    },
}

fn parse_size(value: &str) -> Result<GridSize, String> {
    let size: usize = value
        .parse()
        .map_err(|e| format!("not a number: {}", e))?;
    GridSize::new(size).map_err(|e| e.to_string())
}
