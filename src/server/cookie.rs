//! Session cookie handling

use crate::store::SessionId;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "wordle_session";

/// Extract the session id from the request's cookies, if present and well formed
#[must_use]
pub fn session_id(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

/// `Set-Cookie` value binding the browser to a session
#[must_use]
pub fn set_cookie(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
