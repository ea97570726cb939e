//! Command implementations

pub mod check;
pub mod play;

pub use check::check_guess;
pub use play::{play, run_play};
