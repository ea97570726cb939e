//! Wordle Web - CLI
//!
//! Serves the browser game by default; `play` and `check` work in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_web::{
    commands::{check_guess, run_play},
    config::{AppConfig, LoggingConfig},
    core::FeedbackPolicy,
    output::print_check_result,
    server::Server,
    wordlists::load_vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_web",
    about = "Wordle in the browser, with a terminal mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WORDLE_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration
    #[arg(short, long, global = true)]
    listen: Option<SocketAddr>,

    /// Feedback policy: budgeted (default) or containment
    #[arg(short, long, global = true)]
    policy: Option<FeedbackPolicy>,

    /// Log level, overrides the configuration
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve,

    /// Play in the terminal
    Play,

    /// Show the feedback one guess gets against a given secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Command line flags win over file and environment
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen;
    }
    if let Some(policy) = cli.policy {
        config.game.feedback_policy = policy;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.json = true;
    }

    init_tracing(&config.logging);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => Server::new(&config)?.run().await?,
        Commands::Play => {
            let vocabulary = load_vocabulary(config.game.wordlist_path.as_deref())?;
            run_play(&vocabulary, config.game.rules())?;
        }
        Commands::Check { guess, secret } => {
            let (guess, secret, feedback) =
                check_guess(&guess, &secret, config.game.feedback_policy)?;
            print_check_result(&guess, &secret, &feedback);
        }
    }

    Ok(())
}
