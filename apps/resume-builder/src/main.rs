mod clock;
mod config;
mod editor;
mod errors;
mod models;
mod preview;
mod seed;
mod session;
mod store;
mod validation;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::seed::example_resume;
use crate::session::{Session, SessionOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the session.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = match config.today {
        Some(today) => {
            info!(%today, "Using fixed date for validation");
            Arc::new(FixedClock(today))
        }
        None => Arc::new(SystemClock),
    };

    let mut session = Session::new(example_resume(), clock, SessionOptions::from(&config));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await?;

    Ok(())
}
