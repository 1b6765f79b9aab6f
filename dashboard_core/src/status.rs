//! Synthetic system status lines for the log panel.

use crate::log::{LogMessage, MessageKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Shape of the generated core temperature readings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Core indices are drawn from `0..cores`
    pub cores: u32,
    /// Temperature range (°C)
    pub temp_min: f32,
    pub temp_max: f32,
    /// Readings at or above this are reported as warnings
    pub warn_at: f32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            cores: 4,
            temp_min: 45.0,
            temp_max: 60.0,
            warn_at: 58.0,
        }
    }
}

/// Produces randomized status messages (`R` is the random source).
pub struct StatusFeed<R = ChaCha8Rng> {
    config: StatusConfig,
    rng: R,
}

impl StatusFeed<ChaCha8Rng> {
    pub fn seeded(config: StatusConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> StatusFeed<R> {
    pub fn new(config: StatusConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn next_message(&mut self) -> LogMessage {
        let core = self.rng.gen_range(0..self.config.cores.max(1));
        let (lo, hi) = (self.config.temp_min, self.config.temp_max);
        let temp = if lo < hi { self.rng.gen_range(lo..hi) } else { lo };

        if temp >= self.config.warn_at {
            LogMessage {
                text: format!("SYS_WARN: Core {core} temp {temp:.1} C"),
                kind: MessageKind::Warning,
            }
        } else {
            LogMessage {
                text: format!("SYS_INFO: Core {core} temp {temp:.1} C"),
                kind: MessageKind::Info,
            }
        }
    }
}
