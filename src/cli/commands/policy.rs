//! Policy command - Export the optimal move for every reachable board

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::{PolicyEntry, optimal_policy, reachable_boards},
    cli::output::create_spinner,
    search::Algorithm,
};

#[derive(Parser, Debug)]
#[command(about = "Export the optimal policy as JSON")]
pub struct PolicyArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Search algorithm
    #[arg(long, short = 'a', value_enum, default_value_t = Algorithm::AlphaBeta)]
    pub algorithm: Algorithm,
}

#[derive(Serialize)]
struct PolicyExport<'a> {
    description: &'static str,
    algorithm: Algorithm,
    total_states: usize,
    policy: &'a std::collections::BTreeMap<String, PolicyEntry>,
}

pub fn execute(args: PolicyArgs) -> Result<()> {
    let spinner = create_spinner("Solving every reachable position...")?;
    let boards = reachable_boards();
    let policy = optimal_policy(args.algorithm, &boards);
    spinner.finish_and_clear();

    let export = PolicyExport {
        description: "Optimal Tic-Tac-Toe move per position (row-major board encoding)",
        algorithm: args.algorithm,
        total_states: policy.len(),
        policy: &policy,
    };

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    serde_json::to_writer_pretty(file, &export)?;

    println!(
        "Optimal policy for {} positions exported to: {}",
        policy.len(),
        args.output.display()
    );
    Ok(())
}
