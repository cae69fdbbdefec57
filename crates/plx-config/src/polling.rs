//! Background job polling configuration.
//!
//! One policy applies to every poller (documentation generation and
//! service-creation playbooks alike).

use serde::{Deserialize, Serialize};

const fn default_interval_secs() -> u64 {
    3
}

/// Ten minutes.
const fn default_max_elapsed_secs() -> u64 {
    600
}

const fn default_resume_on_start() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// Fixed delay between status fetches, in seconds.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Give up on a job after this many seconds. `0` disables the bound.
    #[serde(default = "default_max_elapsed_secs")]
    pub max_elapsed_secs: u64,

    /// Resume polling a persisted in-flight job on start-up.
    #[serde(default = "default_resume_on_start")]
    pub resume_on_start: bool,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_elapsed_secs: default_max_elapsed_secs(),
            resume_on_start: default_resume_on_start(),
        }
    }
}

impl PollingConfig {
    /// Whether an overall time bound is enforced.
    pub const fn is_bounded(&self) -> bool {
        self.max_elapsed_secs > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_behavior() {
        let config = PollingConfig::default();
        assert_eq!(config.interval_secs, 3);
        assert_eq!(config.max_elapsed_secs, 600);
        assert!(config.is_bounded());
        assert!(config.resume_on_start);
    }

    #[test]
    fn zero_disables_bound() {
        let config = PollingConfig {
            max_elapsed_secs: 0,
            ..Default::default()
        };
        assert!(!config.is_bounded());
    }
}
