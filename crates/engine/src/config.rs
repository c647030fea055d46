//! Runtime configuration read from environment variables.

use colorfall_types::TICK_MS;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the piece randomizer.
    pub seed: u64,
    /// Append JSONL session events here when set.
    pub log_path: Option<String>,
    /// Input poll / render period.
    pub frame_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            log_path: None,
            frame_ms: TICK_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `COLORFALL_SEED`: u64 seed (random when unset or unparsable)
    /// - `COLORFALL_LOG_PATH`: JSONL event log path (disabled when empty)
    /// - `COLORFALL_FRAME_MS`: frame period in ms (default 16, minimum 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("COLORFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random);

        let log_path = lookup("COLORFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let frame_ms = lookup("COLORFALL_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(TICK_MS);

        Self {
            seed,
            log_path,
            frame_ms,
        }
    }
}
