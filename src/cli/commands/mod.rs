//! Subcommands of the `tictactoe` binary

pub mod best;
pub mod play;
pub mod policy;
pub mod verify;
