//! Wordle Web
//!
//! A browser Wordle game served over HTTP, plus a terminal mode sharing the same rules.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_web::core::{Feedback, Mark, Word};
//!
//! let secret = Word::new("apple").unwrap();
//! let guess = Word::new("alpel").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.marks()[0], Mark::Hit);
//! println!("{feedback}");
//! ```

// Layered configuration
pub mod config;

// Core domain types
pub mod core;

// Game sessions and the service driving them
pub mod game;

// Session persistence
pub mod store;

// Word lists
pub mod wordlists;

// HTTP server
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
