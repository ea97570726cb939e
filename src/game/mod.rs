//! Game sessions and the service that drives them

pub mod service;
mod session;

pub use service::{GameRules, GameService, ServiceError, ServiceResult};
pub use session::{Attempt, GameStatus, GuessError, MAX_ATTEMPTS, Session};
