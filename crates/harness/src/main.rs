//! Offline drill binary for the spread controller and duty routines.
//!
//! Stands up a scripted in-memory party, then walks the selector queries,
//! all four spread operations, and a handful of duty ticks through the zone
//! registry. No game client is involved; world, avoidance, and movement are
//! the same recording fakes the tests use.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p harness
//! DRILL_PARTY_SIZE=7 cargo run -p harness
//! ```

mod config;
mod scenario;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::HarnessConfig;
use scenario::Scenario;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = HarnessConfig::from_env();
    setup_logging();

    tracing::info!(
        party_size = config.party_size,
        window_ms = config.spread_window.as_millis() as u64,
        distance = config.spread_distance,
        "starting drill",
    );

    let scenario = Scenario::new(config);
    scenario.run().await?;

    tracing::info!("drill complete");
    Ok(())
}

/// Console logging filtered by `RUST_LOG`, defaulting to info.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
