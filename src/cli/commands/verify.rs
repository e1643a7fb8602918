//! Verify command - Check alpha-beta against plain minimax on every board

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    analysis::{AgreementReport, reachable_boards, verify_agreement},
    cli::output::{create_board_progress, format_number, format_stats, print_kv, print_section},
};

#[derive(Parser, Debug)]
#[command(about = "Check that both searches agree on every reachable board")]
pub struct VerifyArgs {
    /// Write the agreement report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let boards = reachable_boards();

    let pb = create_board_progress(boards.len() as u64)?;
    if args.no_progress {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    pb.set_message("minimax vs alpha-beta");
    let report = verify_agreement(&boards, |n| pb.set_position(n as u64));
    pb.finish_and_clear();

    print_section("Search agreement");
    print_kv("Reachable boards", &format_number(boards.len() as u64));
    print_kv("Terminal", &format_number(report.terminal_boards as u64));
    print_kv("Searched", &format_number(report.boards_checked as u64));
    print_kv(
        "Same action",
        &format_number(report.identical_actions as u64),
    );
    print_kv("Value mismatches", &report.disagreements.len().to_string());
    print_kv("Minimax", &format_stats(&report.minimax));
    print_kv("Alpha-beta", &format_stats(&report.alphabeta));

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nReport exported to: {}", path.display());
    }

    ensure_consistent(&report)
}

/// Print every disagreement and fail if there is any
fn ensure_consistent(report: &AgreementReport) -> Result<()> {
    if report.is_consistent() {
        return Ok(());
    }
    for d in &report.disagreements {
        eprintln!(
            "{}: minimax {:?} ({:?}) vs alpha-beta {:?} ({:?})",
            d.board, d.minimax_action, d.minimax_value, d.alphabeta_action, d.alphabeta_value
        );
    }
    bail!(
        "alpha-beta disagreed with minimax on {} boards",
        report.disagreements.len()
    )
}
