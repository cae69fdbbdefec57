//! # plx-jobs
//!
//! Progress tracking for long-running backend jobs: documentation generation
//! and service-creation playbooks.
//!
//! A [`ProgressTracker`] owns at most one in-flight job. It submits the job,
//! persists the job id in durable client storage, polls the status endpoint
//! on a fixed [`PollPolicy`] interval and publishes every snapshot on a
//! `tokio::sync::watch` channel. A later process picks the job back up with
//! [`ProgressTracker::resume`].

mod error;
mod policy;
mod source;
mod tracker;

pub use error::JobError;
pub use policy::PollPolicy;
pub use source::{JobSource, PlaybookSource, TechDocsSource};
pub use tracker::{JobOutcome, ProgressTracker, TrackerState};
