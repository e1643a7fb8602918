//! Best command - Optimal move for a single position

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_action, format_board, format_stats, print_kv, print_section},
    search::{Algorithm, SearchStats, search_with},
    tictactoe::{Action, Board, GameOutcome, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct BestArgs {
    /// Board as 9 cells in row-major order, '.' for empty (e.g. "X.O/.X./...")
    pub board: String,

    /// Search algorithm
    #[arg(long, short = 'a', value_enum, default_value_t = Algorithm::AlphaBeta)]
    pub algorithm: Algorithm,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BestReport {
    board: String,
    algorithm: Algorithm,
    to_move: Option<Player>,
    outcome: Option<GameOutcome>,
    action: Option<Action>,
    value: Option<i32>,
    immediate_wins: Vec<Action>,
    stats: SearchStats,
}

fn build_report(board: &Board, algorithm: Algorithm) -> BestReport {
    let outcome = board.outcome();
    let to_move = outcome.is_none().then(|| board.player());
    let search = search_with(algorithm, board);

    BestReport {
        board: board.encode(),
        algorithm,
        to_move,
        outcome,
        action: search.action,
        value: search.value,
        immediate_wins: to_move
            .map(|p| LineAnalyzer::winning_moves(board, p).into_iter().collect())
            .unwrap_or_default(),
        stats: search.stats,
    }
}

pub fn execute(args: BestArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let report = build_report(&board, args.algorithm);

    if args.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
        println!();
        return Ok(());
    }

    print_section("Position");
    print!("{}", format_board(&board));

    if let Some(outcome) = report.outcome {
        println!("\nGame over: {outcome}");
        return Ok(());
    }

    print_section(&format!("Optimal move ({})", args.algorithm));
    if let Some(player) = report.to_move {
        print_kv("To move", &player.to_string());
    }
    print_kv("Action", &format_action(report.action));
    if let Some(value) = report.value {
        let verdict = match value {
            1 => "X wins",
            -1 => "O wins",
            _ => "draw",
        };
        print_kv("Value", &format!("{value:+} ({verdict} with best play)"));
    }
    if !report.immediate_wins.is_empty() {
        let wins: Vec<String> = report.immediate_wins.iter().map(|a| a.to_string()).collect();
        print_kv("Immediate wins", &wins.join(", "));
    }
    print_kv("Search", &format_stats(&report.stats));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_running_game() {
        let board = Board::from_string("XOX .XO O..").unwrap();
        let report = build_report(&board, Algorithm::Minimax);

        assert_eq!(report.to_move, Some(Player::X));
        assert_eq!(report.outcome, None);
        assert_eq!(report.action, Some(Action::new(2, 2)));
        assert_eq!(report.value, Some(1));
        assert_eq!(report.immediate_wins, vec![Action::new(2, 2)]);
    }

    #[test]
    fn test_report_for_finished_game() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let report = build_report(&board, Algorithm::AlphaBeta);

        assert_eq!(report.to_move, None);
        assert_eq!(report.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(report.action, None);
        assert!(report.immediate_wins.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let report = build_report(&Board::new(), Algorithm::AlphaBeta);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "alpha-beta");
        assert_eq!(json["action"]["row"], 0);
        assert_eq!(json["value"], 0);
    }
}
