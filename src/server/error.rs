//! HTTP error handling
//!
//! Players never see raw failures: every error becomes a redirect to the start screen
//! or the game view, carrying a `notice` that the view turns into a banner.

use super::views::Notice;
use crate::game::{GameStatus, GuessError, ServiceError};
use crate::store::StoreError;
use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no active game")]
    NoActiveGame,

    #[error("malformed guess form: {0}")]
    MalformedGuess(String),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NoActiveGame => Self::NoActiveGame,
            ServiceError::Guess(err) => Self::Guess(err),
            ServiceError::Store(err) => Self::Store(err),
        }
    }
}

/// Path of the end-of-game view for a terminal status
#[must_use]
pub const fn result_path(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Won => Some("/result/success"),
        GameStatus::Lost => Some("/result/fail"),
        GameStatus::InProgress | GameStatus::NotStarted => None,
    }
}

fn redirect_with(path: &str, notice: Notice) -> Redirect {
    Redirect::to(&format!("{path}?notice={}", notice.slug()))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let redirect = match &self {
            Self::NoActiveGame => redirect_with("/", Notice::NoActiveGame),
            Self::MalformedGuess(_) | Self::Guess(GuessError::Invalid(_)) => {
                redirect_with("/game", Notice::InvalidGuess)
            }
            Self::Guess(GuessError::UnknownWord(_)) => redirect_with("/game", Notice::UnknownWord),
            Self::Guess(GuessError::GameOver(status)) => {
                Redirect::to(result_path(*status).unwrap_or("/game"))
            }
            Self::Store(err) => {
                tracing::error!(error = %err, "session store failure");
                redirect_with("/", Notice::Unavailable)
            }
        };

        if !matches!(self, Self::Store(_)) {
            tracing::debug!(reason = %self, "request redirected");
        }

        redirect.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use axum::http::{StatusCode, header::LOCATION};

    fn location(err: AppError) -> String {
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        response.headers()[LOCATION].to_str().unwrap().to_string()
    }

    #[test]
    fn errors_redirect_to_safe_views() {
        assert_eq!(location(AppError::NoActiveGame), "/?notice=no-active-game");
        assert_eq!(
            location(GuessError::Invalid(WordError::InvalidLength(3)).into()),
            "/game?notice=invalid-guess"
        );
        assert_eq!(
            location(AppError::MalformedGuess("missing field `guess`".into())),
            "/game?notice=invalid-guess"
        );
        assert_eq!(
            location(GuessError::UnknownWord("zzzzz".into()).into()),
            "/game?notice=unknown-word"
        );
        assert_eq!(
            location(StoreError::Unavailable("down".into()).into()),
            "/?notice=unavailable"
        );
    }

    #[test]
    fn finished_game_redirects_to_its_result() {
        assert_eq!(
            location(GuessError::GameOver(GameStatus::Won).into()),
            "/result/success"
        );
        assert_eq!(
            location(GuessError::GameOver(GameStatus::Lost).into()),
            "/result/fail"
        );
    }

    #[test]
    fn service_errors_convert() {
        assert!(matches!(
            AppError::from(ServiceError::NoActiveGame),
            AppError::NoActiveGame
        ));
    }
}
