//! Domain-level error type for PlatifyX.
//!
//! Transport and storage errors live in their own crates (`ApiError`,
//! `AuthError`); this module only covers domain rules.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::enums::JobStatus;
    use crate::progress::{JobHandle, JobProgress};

    #[test]
    fn rejected_regression_names_both_ends() {
        let mut current = JobProgress::from_handle(&JobHandle {
            id: "job-3".into(),
            status: JobStatus::Running,
        });
        let mut stale = current.clone();
        stale.status = JobStatus::Queued;

        let err = current.advance(stale).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state transition: job job-3 from job-3:running to job-3:queued"
        );
    }
}
