//! Drill tunables loaded from the environment.

use std::env;
use std::time::Duration;

use movement::DEFAULT_SPREAD_DISTANCE;

/// Knobs for one drill run.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Allies stood up around the agent.
    pub party_size: usize,
    /// Window handed to every spread operation.
    pub spread_window: Duration,
    /// Separation radius handed to every spread operation.
    pub spread_distance: f32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            party_size: 3,
            spread_window: Duration::from_millis(300),
            spread_distance: DEFAULT_SPREAD_DISTANCE,
        }
    }
}

impl HarnessConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DRILL_PARTY_SIZE` - Allies stood up around the agent (default: 3, capped at 7)
    /// - `DRILL_SPREAD_MS` - Spread window in milliseconds (default: 300)
    /// - `DRILL_SPREAD_DISTANCE` - Separation radius in yalms (default: 6.5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(size) = read_env::<usize>("DRILL_PARTY_SIZE") {
            config.party_size = size.clamp(1, 7);
        }
        if let Some(window) = read_env::<u64>("DRILL_SPREAD_MS") {
            config.spread_window = Duration::from_millis(window.max(1));
        }
        if let Some(distance) = read_env::<f32>("DRILL_SPREAD_DISTANCE") {
            config.spread_distance = distance;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
