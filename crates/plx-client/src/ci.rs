//! CI/CD endpoints: builds, pipelines, releases and dashboard stats.

use plx_core::entities::{
    Build, BuildLogs, CiStats, Pipeline, PipelineRun, Release, ReleaseDecision, TriggerBuild,
};
use plx_core::enums::BuildStatus;
use reqwest::Method;

use crate::{ApiClient, ApiError, Query, segment};

/// Filters for `GET ci/builds`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFilter {
    pub status: Option<BuildStatus>,
    pub branch: Option<String>,
    pub pipeline: Option<String>,
    pub limit: Option<u32>,
}

impl BuildFilter {
    fn path(&self) -> String {
        Query::new()
            .push_opt("limit", self.limit)
            .push_opt("status", self.status.map(BuildStatus::as_str))
            .push_opt("branch", self.branch.as_deref())
            .push_opt("pipeline", self.pipeline.as_deref())
            .apply("ci/builds")
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the payload is not a build list.
    pub async fn list_builds(&self, filter: &BuildFilter) -> Result<Vec<Build>, ApiError> {
        self.get_list(&filter.path(), "builds").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty id, otherwise any request error.
    pub async fn build_logs(&self, build_id: &str) -> Result<BuildLogs, ApiError> {
        let path = format!("ci/builds/{}/logs", segment(build_id)?);
        let payload: serde_json::Value = self.get_json(&path).await?;
        Ok(parse_logs(build_id, payload))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the trigger.
    pub async fn trigger_build(&self, request: &TriggerBuild) -> Result<Build, ApiError> {
        self.send_json(Method::POST, "ci/builds", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_pipelines(&self, limit: Option<u32>) -> Result<Vec<Pipeline>, ApiError> {
        let path = Query::new().push_opt("limit", limit).apply("ci/pipelines");
        self.get_list(&path, "pipelines").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty id, otherwise any request error.
    pub async fn pipeline_runs(
        &self,
        pipeline_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<PipelineRun>, ApiError> {
        let path = Query::new()
            .push_opt("limit", limit)
            .apply(&format!("ci/pipelines/{}/runs", segment(pipeline_id)?));
        self.get_list(&path, "runs").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_releases(&self, limit: Option<u32>) -> Result<Vec<Release>, ApiError> {
        let path = Query::new().push_opt("limit", limit).apply("ci/releases");
        self.get_list(&path, "releases").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the decision.
    pub async fn approve_release(&self, decision: &ReleaseDecision) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "ci/releases/approve", Some(decision))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the decision.
    pub async fn reject_release(&self, decision: &ReleaseDecision) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "ci/releases/reject", Some(decision))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn ci_stats(&self) -> Result<CiStats, ApiError> {
        self.get_json("ci/stats").await
    }
}

/// Logs come back as `{"lines": [...]}`, `{"logs": "..."}` or a bare string.
fn parse_logs(build_id: &str, payload: serde_json::Value) -> BuildLogs {
    let split = |text: &str| text.lines().map(str::to_string).collect::<Vec<_>>();
    let lines = match &payload {
        serde_json::Value::String(text) => split(text),
        serde_json::Value::Object(map) => match (map.get("lines"), map.get("logs")) {
            (Some(serde_json::Value::Array(lines)), _) => lines
                .iter()
                .map(|l| l.as_str().map_or_else(|| l.to_string(), str::to_string))
                .collect(),
            (_, Some(serde_json::Value::String(text))) => split(text),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    BuildLogs {
        build_id: build_id.to_string(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn build_filter_query() {
        let filter = BuildFilter {
            status: Some(BuildStatus::Failed),
            branch: Some("main".into()),
            pipeline: None,
            limit: Some(50),
        };
        assert_eq!(filter.path(), "ci/builds?limit=50&status=failed&branch=main");
        assert_eq!(BuildFilter::default().path(), "ci/builds");
    }

    #[test]
    fn logs_accept_all_shapes() {
        let from_lines = parse_logs("b1", json!({"lines": ["one", "two"]}));
        assert_eq!(from_lines.lines, vec!["one", "two"]);

        let from_text = parse_logs("b1", json!({"logs": "one\ntwo\n"}));
        assert_eq!(from_text.lines, vec!["one", "two"]);

        let bare = parse_logs("b1", json!("only line"));
        assert_eq!(bare.lines, vec!["only line"]);
        assert_eq!(bare.build_id, "b1");

        assert!(parse_logs("b1", json!({})).lines.is_empty());
    }

    #[test]
    fn build_list_fixture_parses() {
        let fixture = json!({
            "builds": [
                {"id": "b-1", "pipeline": "payments-api", "status": "success",
                 "branch": "main", "commit": "4f1c2ab", "duration_secs": 312},
                {"id": "b-2", "pipeline": "payments-api", "status": "skipped"}
            ]
        });
        let builds: Vec<Build> = crate::envelope::extract_list(fixture, "builds").unwrap();
        assert_eq!(builds.len(), 2);
        assert_eq!(builds[1].status, BuildStatus::Unknown);
    }
}
