use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BuildStatus, ReleaseStatus};

/// A single CI build.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Build {
    pub id: String,
    pub pipeline: String,
    pub status: BuildStatus,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub triggered_by: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_secs: Option<u64>,
}

/// Log output of a build, one entry per line.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BuildLogs {
    pub build_id: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Body of `POST ci/builds`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TriggerBuild {
    pub pipeline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pipeline {
    pub id: String,
    pub name: String,
    pub repository: Option<String>,
    pub provider: Option<String>,
    pub last_status: Option<BuildStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PipelineRun {
    pub id: String,
    pub pipeline_id: String,
    pub status: BuildStatus,
    pub branch: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// A release awaiting or past approval.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Release {
    pub id: String,
    pub name: String,
    pub version: String,
    pub environment: String,
    pub status: ReleaseStatus,
    pub requested_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST ci/releases/approve` and `POST ci/releases/reject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub release_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Aggregate numbers for the CI dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct CiStats {
    pub total_builds: u64,
    pub running_builds: u64,
    pub success_rate: f64,
    pub average_duration_secs: f64,
    pub pending_releases: u64,
}
