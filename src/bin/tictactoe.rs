//! tictactoe - exact Tic-Tac-Toe solver
//!
//! This CLI provides:
//! - The optimal move and game value for any position
//! - Games between search, random and human agents
//! - A whole-game consistency check of alpha-beta against minimax
//! - Export of the optimal policy table
//!
//! Set `RUST_LOG=debug` to log every root search.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exact minimax and alpha-beta search for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Best(tictactoe_search::cli::commands::best::BestArgs),

    /// Play games between agents
    Play(tictactoe_search::cli::commands::play::PlayArgs),

    /// Check alpha-beta against minimax on every reachable board
    Verify(tictactoe_search::cli::commands::verify::VerifyArgs),

    /// Export the optimal policy as JSON
    Policy(tictactoe_search::cli::commands::policy::PolicyArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Best(args) => tictactoe_search::cli::commands::best::execute(args),
        Commands::Play(args) => tictactoe_search::cli::commands::play::execute(args),
        Commands::Verify(args) => tictactoe_search::cli::commands::verify::execute(args),
        Commands::Policy(args) => tictactoe_search::cli::commands::policy::execute(args),
    }
}
