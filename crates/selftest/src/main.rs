//! Runs the documented `possibly` examples and reports any that misbehave.

mod scenarios;

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut failed = 0usize;
    for (name, run) in scenarios::ALL {
        match run() {
            Ok(()) => tracing::info!(scenario = name, "ok"),
            Err(err) => {
                failed += 1;
                tracing::error!(scenario = name, error = %err, "failed");
            }
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} scenarios failed", failed, scenarios::ALL.len()));
    }
    tracing::info!(count = scenarios::ALL.len(), "all scenarios passed");
    Ok(())
}
