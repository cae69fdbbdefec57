//! Progress record for long-running generation jobs.
//!
//! The backend owns every field; the client only reads successive snapshots
//! and folds them into the current record with [`JobProgress::advance`],
//! which enforces the forward-only status machine and keeps `percent`
//! non-decreasing while the job is in flight.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;
use crate::errors::CoreError;

/// Response to a job submission: the id to poll and its initial status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobHandle {
    pub id: String,
    #[serde(default = "initial_status")]
    pub status: JobStatus,
}

const fn initial_status() -> JobStatus {
    JobStatus::Queued
}

/// Server-tracked status of one generation job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobProgress {
    /// Some progress endpoints omit the id; callers fill it from the request.
    #[serde(default)]
    pub id: String,
    pub status: JobStatus,
    /// 0–100.
    #[serde(default)]
    pub percent: u8,
    #[serde(default)]
    pub chunk: u32,
    #[serde(default)]
    pub total_chunks: u32,
    #[serde(default)]
    pub message: String,
    /// Present only when `status = completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_content: Option<String>,
    /// Present only when `status = failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobProgress {
    /// Initial record built from a submission handle, before the first poll.
    #[must_use]
    pub fn from_handle(handle: &JobHandle) -> Self {
        let now = Utc::now();
        Self {
            id: handle.id.clone(),
            status: handle.status,
            percent: 0,
            chunk: 0,
            total_chunks: 0,
            message: String::new(),
            result_content: None,
            error_message: None,
            save_path: None,
            started_at: Some(now),
            updated_at: Some(now),
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Fold a newer server snapshot into this record.
    ///
    /// Rejects snapshots for a different job and status regressions. A
    /// `percent` lower than the one already observed is kept at the previous
    /// value; out-of-range values are clamped to 100.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if `next` belongs to another
    /// job or moves the status backwards (including any move out of a
    /// terminal state).
    pub fn advance(&mut self, next: Self) -> Result<(), CoreError> {
        if next.id != self.id || !self.status.can_transition_to(next.status) {
            return Err(CoreError::InvalidTransition {
                entity_type: "job".into(),
                id: self.id.clone(),
                from: format!("{}:{}", self.id, self.status),
                to: format!("{}:{}", next.id, next.status),
            });
        }

        let floor = self.percent;
        let started_at = self.started_at;
        *self = next;
        self.percent = self.percent.min(100).max(floor);
        if self.started_at.is_none() {
            self.started_at = started_at;
        }
        if self.status == JobStatus::Completed {
            self.percent = 100;
        }
        Ok(())
    }

    /// Human-readable chunk position, e.g. `chunk 3 of 10`.
    #[must_use]
    pub fn chunk_label(&self) -> Option<String> {
        (self.total_chunks > 0).then(|| format!("chunk {} of {}", self.chunk, self.total_chunks))
    }
}
