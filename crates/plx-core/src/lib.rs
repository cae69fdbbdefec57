//! # plx-core
//!
//! Core types shared by every PlatifyX crate:
//! - Entity structs for the portal backend's resources (CI, secrets, RBAC,
//!   FinOps, infrastructure templates, documentation generation)
//! - Status enums, including the forward-only generation job state machine
//! - The [`progress::JobProgress`] record polled for long-running jobs
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod progress;

pub use errors::CoreError;
pub use progress::{JobHandle, JobProgress};
