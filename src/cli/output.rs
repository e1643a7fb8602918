//! Output formatting and progress display for CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::SearchStats,
    tictactoe::{Action, Board},
};

/// Create a progress bar over a known number of boards
pub fn create_board_progress(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} boards ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Create a spinner for analysis tasks
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Board with row and column indices, for humans choosing moves
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for (row, line) in board.cells.iter().enumerate() {
        let cells: Vec<String> = line.iter().map(|c| c.to_char().to_string()).collect();
        out.push_str(&format!("  {row} {}\n", cells.join(" ")));
    }
    out
}

pub fn format_action(action: Option<Action>) -> String {
    match action {
        Some(action) => format!("{action} (position {})", action.position()),
        None => "none".to_string(),
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

pub fn format_stats(stats: &SearchStats) -> String {
    format!(
        "{} nodes, {} cutoffs",
        format_number(stats.nodes),
        format_number(stats.cutoffs)
    )
}
