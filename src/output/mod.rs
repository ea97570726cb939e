//! Terminal output formatting
//!
//! Display utilities for the `play` and `check` subcommands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_board, write_outcome};
