//! Interactive flashcard study app.

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;

use std::io;

use anyhow::Context;
use flashcard_core::JsonRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::console::Console;
use crate::session::Session;

pub use error::SessionError;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::debug!(data_dir = %config.data_dir.display(), seed = ?config.seed, "starting session");

    let repository = JsonRepository::new(&config.data_dir);
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut session = Session::new(console, repository, config.rng())?;
    session.run()?;

    Ok(())
}
