//! Status enums and kinds for PlatifyX resources.
//!
//! All enums use `snake_case` serialization. Server-owned statuses that the
//! backend may extend (`BuildStatus`, `ReleaseStatus`) carry an `Unknown`
//! catch-all so a new value never turns a listing into a parse error.
//! [`JobStatus`] is closed: it is the state machine the progress tracker
//! enforces.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Status of a long-running generation job.
///
/// ```text
/// queued → running → completed
///        ↘         ↘ failed
///          completed / failed
/// ```
///
/// `completed` and `failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Valid next states from the current state. Non-terminal states may be
    /// observed repeatedly while polling.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Queued => &[Self::Queued, Self::Running, Self::Completed, Self::Failed],
            Self::Running => &[Self::Running, Self::Completed, Self::Failed],
            Self::Completed | Self::Failed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BuildStatus
// ---------------------------------------------------------------------------

/// Status of a CI build or pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Queued,
    Running,
    Success,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Cancelled)
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReleaseStatus
// ---------------------------------------------------------------------------

/// Approval status of a release.
///
/// ```text
/// pending → approved → deployed
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    Pending,
    Approved,
    Rejected,
    Deployed,
    #[serde(other)]
    Unknown,
}

impl ReleaseStatus {
    /// Only pending releases can be approved or rejected.
    #[must_use]
    pub const fn awaiting_decision(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Deployed => "deployed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocKind
// ---------------------------------------------------------------------------

/// What a documentation generation request should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Documentation,
    Diagram,
}

impl DocKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Diagram => "diagram",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SsoProvider
// ---------------------------------------------------------------------------

/// Single sign-on identity providers the portal can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SsoProvider {
    Google,
    Github,
    Okta,
    AzureAd,
}

impl SsoProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Okta => "okta",
            Self::AzureAd => "azure_ad",
        }
    }
}

impl fmt::Display for SsoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected:literal) => {
            #[test]
            fn $name() {
                let json = serde_json::to_string(&$variant).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, $variant);
            }
        };
    }

    serde_roundtrip!(job_running, JobStatus, JobStatus::Running, "running");
    serde_roundtrip!(build_cancelled, BuildStatus, BuildStatus::Cancelled, "cancelled");
    serde_roundtrip!(release_deployed, ReleaseStatus, ReleaseStatus::Deployed, "deployed");
    serde_roundtrip!(doc_diagram, DocKind, DocKind::Diagram, "diagram");
    serde_roundtrip!(sso_azure, SsoProvider, SsoProvider::AzureAd, "azure_ad");

    #[test]
    fn job_valid_transitions() {
        assert!(JobStatus::Queued.can_transition_to(JobStatus::Running));
        assert!(JobStatus::Queued.can_transition_to(JobStatus::Completed));
        assert!(JobStatus::Running.can_transition_to(JobStatus::Running));
        assert!(JobStatus::Running.can_transition_to(JobStatus::Failed));
    }

    #[test]
    fn job_invalid_transitions() {
        assert!(!JobStatus::Running.can_transition_to(JobStatus::Queued));
        assert!(!JobStatus::Completed.can_transition_to(JobStatus::Running));
        assert!(!JobStatus::Failed.can_transition_to(JobStatus::Completed));
    }

    #[test]
    fn job_terminal_states() {
        assert!(JobStatus::Completed.allowed_next_states().is_empty());
        assert!(JobStatus::Failed.allowed_next_states().is_empty());
        assert!(JobStatus::Completed.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
    }

    #[test]
    fn unknown_build_status_is_tolerated() {
        let status: BuildStatus = serde_json::from_str("\"skipped\"").unwrap();
        assert_eq!(status, BuildStatus::Unknown);
        assert!(!status.is_finished());
    }

    #[test]
    fn only_pending_releases_await_decision() {
        assert!(ReleaseStatus::Pending.awaiting_decision());
        assert!(!ReleaseStatus::Approved.awaiting_decision());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", JobStatus::Completed), "completed");
        assert_eq!(format!("{}", BuildStatus::Success), "success");
        assert_eq!(format!("{}", ReleaseStatus::Rejected), "rejected");
        assert_eq!(format!("{}", DocKind::Documentation), "documentation");
        assert_eq!(format!("{}", SsoProvider::Github), "github");
    }
}
