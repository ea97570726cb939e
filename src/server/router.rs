//! Router configuration

use super::handlers;
use super::state::AppState;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/start", get(handlers::start))
        .route("/game", get(handlers::game).post(handlers::submit_guess))
        .route("/result/:status", get(handlers::result))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameRules, GameService, MAX_ATTEMPTS};
    use crate::store::InMemoryStore;
    use crate::wordlists::Vocabulary;
    use axum::body::{Body, to_bytes};
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, Response, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let vocabulary =
            Vocabulary::from_json(r#"{"apple": "the round fruit of a tree of the rose family"}"#)
                .unwrap();
        let service = GameService::new(
            Arc::new(vocabulary),
            Arc::new(InMemoryStore::new()),
            GameRules::default(),
        );
        create_router(AppState::new(Arc::new(service)))
    }

    async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        app.clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_guess(app: &Router, guess: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri("/game")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        app.clone()
            .oneshot(request.body(Body::from(format!("guess={guess}"))).unwrap())
            .await
            .unwrap()
    }

    async fn post_raw(
        app: &Router,
        content_type: Option<&str>,
        body: &str,
        cookie: &str,
    ) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri("/game")
            .header(COOKIE, cookie);
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        app.clone()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    fn location(response: &Response<Body>) -> &str {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        response.headers()[LOCATION].to_str().unwrap()
    }

    async fn text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Start a game and return the session cookie pair
    async fn start(app: &Router) -> String {
        let response = get(app, "/start", None).await;
        assert_eq!(location(&response), "/game");
        let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn home_renders_start_link() {
        let response = get(&app(), "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("href=\"/start\""));
    }

    #[tokio::test]
    async fn home_ignores_unknown_notice() {
        let response = get(&app(), "/?notice=whatever", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check() {
        let response = get(&app(), "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "ok");
    }

    #[tokio::test]
    async fn game_without_session_redirects_home() {
        let app = app();
        let response = get(&app, "/game", None).await;
        assert_eq!(location(&response), "/?notice=no-active-game");

        let response = post_guess(&app, "apple", None).await;
        assert_eq!(location(&response), "/?notice=no-active-game");
    }

    #[tokio::test]
    async fn restart_keeps_cookie_and_resets_game() {
        let app = app();
        let cookie = start(&app).await;
        post_guess(&app, "zzzzz", Some(&cookie)).await;

        let response = get(&app, "/start", Some(&cookie)).await;
        assert_eq!(location(&response), "/game");
        assert!(response.headers().get(SET_COOKIE).is_none());

        let html = text(get(&app, "/game", Some(&cookie)).await).await;
        assert!(html.contains("6 of 6 guesses left"));
    }

    #[tokio::test]
    async fn winning_flow() {
        let app = app();
        let cookie = start(&app).await;

        let response = post_guess(&app, "APPLE", Some(&cookie)).await;
        assert_eq!(location(&response), "/result/success");

        let response = get(&app, "/result/success", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text(response).await;
        assert!(html.contains("<strong>APPLE</strong>"));
        assert!(html.contains("rose family"));

        let response = get(&app, "/game", Some(&cookie)).await;
        assert_eq!(location(&response), "/result/success");

        let response = post_guess(&app, "crane", Some(&cookie)).await;
        assert_eq!(location(&response), "/result/success");
    }

    #[tokio::test]
    async fn losing_flow() {
        let app = app();
        let cookie = start(&app).await;

        for i in 1..=MAX_ATTEMPTS {
            let response = post_guess(&app, "zzzzz", Some(&cookie)).await;
            let expected = if i < MAX_ATTEMPTS { "/game" } else { "/result/fail" };
            assert_eq!(location(&response), expected);
        }

        let response = get(&app, "/result/fail", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("The word was <strong>APPLE</strong>"));

        let response = get(&app, "/result/success", Some(&cookie)).await;
        assert_eq!(location(&response), "/result/fail");
    }

    #[tokio::test]
    async fn invalid_guess_keeps_attempts() {
        let app = app();
        let cookie = start(&app).await;

        for bad in ["abc", "apples", "ap1le", ""] {
            let response = post_guess(&app, bad, Some(&cookie)).await;
            assert_eq!(location(&response), "/game?notice=invalid-guess");
        }

        let html = text(get(&app, "/game?notice=invalid-guess", Some(&cookie)).await).await;
        assert!(html.contains("6 of 6 guesses left"));
        assert!(html.contains("Please enter exactly 5 letters"));
    }

    #[tokio::test]
    async fn game_view_is_idempotent() {
        let app = app();
        let cookie = start(&app).await;
        post_guess(&app, "alpel", Some(&cookie)).await;

        let first = text(get(&app, "/game", Some(&cookie)).await).await;
        let second = text(get(&app, "/game", Some(&cookie)).await).await;

        assert_eq!(first, second);
        assert!(first.contains("5 of 6 guesses left"));
    }

    #[tokio::test]
    async fn result_before_game_ends_redirects_to_game() {
        let app = app();
        let cookie = start(&app).await;

        let response = get(&app, "/result/success", Some(&cookie)).await;
        assert_eq!(location(&response), "/game");
    }

    #[tokio::test]
    async fn unknown_result_status_is_not_found() {
        let app = app();
        let cookie = start(&app).await;

        let response = get(&app, "/result/draw", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_guess_bodies_redirect_to_game() {
        let app = app();
        let cookie = start(&app).await;

        let bodies = [
            (None, "guess=apple"),
            (Some("application/json"), r#"{"guess": "apple"}"#),
            (Some("application/x-www-form-urlencoded"), "guess=crane&guess=apple"),
        ];
        for (content_type, body) in bodies {
            let response = post_raw(&app, content_type, body, &cookie).await;
            assert_eq!(location(&response), "/game?notice=invalid-guess", "{body}");
        }

        let html = text(get(&app, "/game", Some(&cookie)).await).await;
        assert!(html.contains("6 of 6 guesses left"));
    }

    #[tokio::test]
    async fn garbled_notice_query_is_ignored() {
        let app = app();
        let response = get(&app, "/?notice=a&notice=b", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = start(&app).await;
        let response = get(&app, "/game?notice=x&notice=y", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!text(response).await.contains("class=\"notice\""));
    }

    #[tokio::test]
    async fn unknown_session_cookie_is_replaced_on_start() {
        let app = app();
        let forged = format!("wordle_session={}", uuid::Uuid::new_v4());

        let response = get(&app, "/start", Some(&forged)).await;
        assert_eq!(location(&response), "/game");
        let issued = response.headers()[SET_COOKIE].to_str().unwrap();
        let issued = issued.split(';').next().unwrap().to_string();
        assert_ne!(issued, forged);

        let response = get(&app, "/game", Some(&issued)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = get(&app, "/game", Some(&forged)).await;
        assert_eq!(location(&response), "/?notice=no-active-game");
    }
}
