use plx_auth::AuthError;
use plx_client::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{label} already in progress (job {id})")]
    AlreadyInProgress { label: &'static str, id: String },

    #[error("failed to start {label}: {source}")]
    Submit {
        label: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("client storage error: {0}")]
    Storage(#[from] AuthError),
}

impl JobError {
    /// Message suitable for showing to a user as-is.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Submit { label, source } => {
                format!("Failed to start {label}: {}", source.display_message())
            }
            other => other.to_string(),
        }
    }
}
