//! CLI infrastructure for the tic-tac-toe solver
//!
//! This module provides the command-line interface for querying the optimal
//! move, playing games between agents, and checking the searches against
//! each other over the whole game.

pub mod commands;
pub mod output;
