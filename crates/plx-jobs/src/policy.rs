use std::time::Duration;

use plx_config::PollingConfig;

/// Fixed-interval polling with an optional overall bound, shared by every
/// job kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until the job reaches a terminal state.
    pub max_elapsed: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from_config(&PollingConfig::default())
    }
}

impl PollPolicy {
    #[must_use]
    pub fn from_config(config: &PollingConfig) -> Self {
        Self {
            // A zero interval would spin.
            interval: Duration::from_secs(config.interval_secs.max(1)),
            max_elapsed: config
                .is_bounded()
                .then(|| Duration::from_secs(config.max_elapsed_secs)),
        }
    }

    #[must_use]
    pub fn expired(&self, elapsed: Duration) -> bool {
        self.max_elapsed.is_some_and(|max| elapsed >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_seconds_bounded_at_ten_minutes() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(3));
        assert_eq!(policy.max_elapsed, Some(Duration::from_secs(600)));
        assert!(!policy.expired(Duration::from_secs(599)));
        assert!(policy.expired(Duration::from_secs(600)));
    }

    #[test]
    fn unbounded_never_expires() {
        let policy = PollPolicy::from_config(&PollingConfig {
            interval_secs: 0,
            max_elapsed_secs: 0,
            resume_on_start: false,
        });
        assert_eq!(policy.interval, Duration::from_secs(1));
        assert!(!policy.expired(Duration::from_secs(86_400)));
    }
}
