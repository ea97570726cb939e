//! HTTP surface of the game
//!
//! Routes:
//! - `GET /` start screen
//! - `GET /start` new game, then redirect to `/game`
//! - `GET /game` current board; `POST /game` submit a guess
//! - `GET /result/{success|fail}` end-of-game view
//! - `GET /health` liveness probe

mod cookie;
mod error;
mod handlers;
mod router;
mod state;
mod views;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;

use crate::config::AppConfig;
use crate::game::GameService;
use crate::store::InMemoryStore;
use crate::wordlists::{VocabularyError, load_vocabulary};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;

/// Server-level errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Game server
pub struct Server {
    listen_addr: SocketAddr,
    state: AppState,
    store: Arc<InMemoryStore>,
    sweep_interval: Duration,
}

impl Server {
    /// Load the vocabulary and assemble the service
    ///
    /// # Errors
    /// Returns `ServerError::Vocabulary` if the word list cannot be loaded.
    pub fn new(config: &AppConfig) -> Result<Self, ServerError> {
        let vocabulary = load_vocabulary(config.game.wordlist_path.as_deref())?;
        tracing::info!(
            words = vocabulary.len(),
            policy = ?config.game.feedback_policy,
            strict_dictionary = config.game.strict_dictionary,
            "vocabulary loaded"
        );

        let store = Arc::new(InMemoryStore::with_limits(
            config.sessions.max_sessions,
            config.sessions.idle_timeout(),
        ));
        let service = GameService::new(Arc::new(vocabulary), store.clone(), config.game.rules());

        Ok(Self {
            listen_addr: config.server.listen_addr,
            state: AppState::new(Arc::new(service)),
            store,
            sweep_interval: config.sessions.sweep_interval(),
        })
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// # Errors
    /// Returns `ServerError::Io` if binding or serving fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let app = create_router(self.state);
        let listener = TcpListener::bind(self.listen_addr).await?;

        tracing::info!("Wordle server listening on http://{}", self.listen_addr);

        let sweeper = tokio::spawn(sweep_idle_sessions(self.store, self.sweep_interval));

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await;
        sweeper.abort();
        served?;

        tracing::info!("Wordle server shutting down");
        Ok(())
    }
}

/// Periodically drop sessions nobody has played for a while
async fn sweep_idle_sessions(store: Arc<InMemoryStore>, period: Duration) {
    let mut interval = tokio::time::interval(period);

    loop {
        interval.tick().await;

        let evicted = store.evict_idle().await;
        if evicted > 0 {
            let remaining = store.len().await;
            tracing::info!(evicted, remaining, "idle sessions evicted");
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_builds_from_default_config() {
        assert!(Server::new(&AppConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn sweeper_evicts_idle_sessions() {
        use crate::core::Word;
        use crate::game::Session;
        use crate::store::{SessionId, SessionStore};

        let store = Arc::new(InMemoryStore::with_limits(10, Duration::ZERO));
        store
            .put(SessionId::generate(), Session::start(Word::new("apple").unwrap()))
            .await
            .unwrap();

        let sweeper = tokio::spawn(sweep_idle_sessions(store.clone(), Duration::from_millis(10)));
        for _ in 0..100 {
            if store.is_empty().await {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        sweeper.abort();

        assert!(store.is_empty().await);
    }

    #[test]
    fn missing_wordlist_is_fatal() {
        let mut config = AppConfig::default();
        config.game.wordlist_path = Some("/nonexistent/wordlist.json".into());
        assert!(matches!(
            Server::new(&config),
            Err(ServerError::Vocabulary(VocabularyError::Read { .. }))
        ));
    }
}
