//! Request handlers for the game routes

use super::cookie;
use super::error::{AppError, result_path};
use super::state::AppState;
use super::views::{self, Notice, Outcome};
use crate::game::GameStatus;
use crate::store::SessionId;
use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::extract::{Form, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header::SET_COOKIE};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

/// Optional `?notice=` banner
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    #[serde(default)]
    notice: Option<String>,
}

impl NoticeQuery {
    /// Banner to show; a query string that does not parse shows none
    fn banner(query: Result<Query<Self>, QueryRejection>) -> Option<Notice> {
        let Query(query) = query.ok()?;
        query.notice.as_deref().and_then(Notice::from_slug)
    }
}

/// Guess form body
#[derive(Debug, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    guess: String,
}

/// Start screen
pub async fn home(query: Result<Query<NoticeQuery>, QueryRejection>) -> Html<String> {
    Html(views::home_page(NoticeQuery::banner(query)))
}

/// Begin a new game
///
/// A browser keeps its session id across games. An id the server has no session for
/// (never issued, or already evicted) is replaced with a fresh one.
pub async fn start(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let existing = match cookie::session_id(&headers) {
        Some(id) => state.service.session(&id).await?.map(|_| id),
        None => None,
    };
    let id = existing.unwrap_or_else(SessionId::generate);

    state.service.start(id).await?;

    let redirect = Redirect::to("/game");
    if existing.is_some() {
        Ok(redirect.into_response())
    } else {
        Ok(([(SET_COOKIE, cookie::set_cookie(id))], redirect).into_response())
    }
}

/// Current game view
pub async fn game(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NoticeQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let id = cookie::session_id(&headers).ok_or(AppError::NoActiveGame)?;
    let session = state
        .service
        .session(&id)
        .await?
        .ok_or(AppError::NoActiveGame)?;

    if let Some(path) = result_path(session.status()) {
        return Ok(Redirect::to(path).into_response());
    }

    Ok(Html(views::game_page(&session, NoticeQuery::banner(query))).into_response())
}

/// Submit one guess
///
/// A body that is not a single-field urlencoded form is treated as an invalid guess.
pub async fn submit_guess(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<GuessForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let id = cookie::session_id(&headers).ok_or(AppError::NoActiveGame)?;
    let Form(form) = form.map_err(|rejection| AppError::MalformedGuess(rejection.body_text()))?;
    let session = state.service.submit_guess(id, &form.guess).await?;

    Ok(Redirect::to(result_path(session.status()).unwrap_or("/game")))
}

/// End-of-game view
pub async fn result(
    State(state): State<AppState>,
    headers: HeaderMap,
    status: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Some(outcome) = status.ok().and_then(|Path(status)| Outcome::from_slug(&status)) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let id = cookie::session_id(&headers).ok_or(AppError::NoActiveGame)?;
    let session = state
        .service
        .session(&id)
        .await?
        .ok_or(AppError::NoActiveGame)?;

    let actual = match session.status() {
        GameStatus::Won => Outcome::Success,
        GameStatus::Lost => Outcome::Fail,
        GameStatus::InProgress | GameStatus::NotStarted => {
            return Ok(Redirect::to("/game").into_response());
        }
    };

    if actual != outcome {
        let path = result_path(session.status()).unwrap_or("/game");
        return Ok(Redirect::to(path).into_response());
    }

    let definition = state
        .service
        .vocabulary()
        .definition(session.secret().text());

    Ok(Html(views::result_page(&session, outcome, definition)).into_response())
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
