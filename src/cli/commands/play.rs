//! Play command - Run games between agents

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    agents::{AgentKind, play_game},
    cli::output::{format_board, print_kv, print_section},
    config::PlayConfig,
    tictactoe::{Board, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play games between agents")]
pub struct PlayArgs {
    /// Agent playing X (overrides the config file)
    #[arg(long, value_enum)]
    pub x: Option<AgentKind>,

    /// Agent playing O (overrides the config file)
    #[arg(long, value_enum)]
    pub o: Option<AgentKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting position (9 cells, '.' for empty)
    #[arg(long)]
    pub start: Option<String>,

    /// JSON file with a saved play configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Only print the final tally
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Win/draw counts over a series of games
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Merge the config file (if any) with command-line overrides
pub fn resolve_config(args: &PlayArgs) -> Result<PlayConfig> {
    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PlayConfig::default(),
    };

    if let Some(kind) = args.x {
        config = config.with_agent(Player::X, kind);
    }
    if let Some(kind) = args.o {
        config = config.with_agent(Player::O, kind);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(start) = &args.start {
        config.start = Some(start.clone());
    }
    Ok(config)
}

fn print_game(game: &Game) -> Result<()> {
    let boards = game.state_sequence()?;
    for (board, mv) in boards.iter().skip(1).zip(&game.moves) {
        println!("\n{} plays {}", mv.player, mv.action);
        print!("{}", format_board(board));
    }
    Ok(())
}

pub fn execute(args: PlayArgs) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = resolve_config(&args)?;
    let start: Board = config
        .start_board()
        .context("invalid starting position")?;

    let mut x = config.x.build(Player::X, config.seed_for(Player::X));
    let mut o = config.o.build(Player::O, config.seed_for(Player::O));

    if !args.quiet {
        print_section(&format!("{} vs {}", x.name(), o.name()));
        print!("{}", format_board(&start));
    }

    let mut tally = Tally::default();
    for game_num in 1..=args.games {
        let game = play_game(x.as_mut(), o.as_mut(), start)?;
        let outcome = game.outcome.context("game ended without an outcome")?;
        tally.record(outcome);

        if !args.quiet {
            if args.games > 1 {
                print_section(&format!("Game {game_num}"));
            }
            print_game(&game)?;
            println!("\nResult: {outcome}");
        }
    }

    if args.games > 1 || args.quiet {
        print_section("Tally");
        print_kv("X wins", &tally.x_wins.to_string());
        print_kv("O wins", &tally.o_wins.to_string());
        print_kv("Draws", &tally.draws.to_string());
    }

    Ok(())
}
