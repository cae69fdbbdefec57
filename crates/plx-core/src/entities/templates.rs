use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;
use crate::progress::JobProgress;

/// An infrastructure template from the service catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InfrastructureTemplate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub provider: Option<String>,
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,
}

impl InfrastructureTemplate {
    /// Variables that must be supplied before a preview can be requested.
    pub fn required_variables(&self) -> impl Iterator<Item = &TemplateVariable> {
        self.variables
            .iter()
            .filter(|variable| variable.required && variable.default.is_none())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateVariable {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub default: Option<String>,
}

/// Body shared by `POST infrastructure-templates/preview` and `.../generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplateRequest {
    pub template_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// Dry-run result shown before generation is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TemplatePreview {
    #[serde(default)]
    pub files: Vec<PreviewFile>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedTemplate {
    pub repository_url: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    pub message: Option<String>,
}

/// Body of `POST playbook/service/create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceCreateRequest {
    pub name: String,
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

/// Progress of a service-creation playbook, as reported by
/// `GET playbook/service/progress/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceProgress {
    /// Some progress bodies omit the id; callers fill it from the request.
    #[serde(default)]
    pub id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub current_step: u32,
    #[serde(default)]
    pub total_steps: u32,
    #[serde(default)]
    pub message: String,
    pub repository_url: Option<String>,
    pub error: Option<String>,
}

impl From<ServiceProgress> for JobProgress {
    fn from(value: ServiceProgress) -> Self {
        let completed = value.status == JobStatus::Completed;
        Self {
            id: value.id,
            status: value.status,
            percent: value.progress,
            chunk: value.current_step,
            total_chunks: value.total_steps,
            result_content: completed
                .then(|| value.repository_url.clone().unwrap_or_else(|| value.message.clone())),
            save_path: value.repository_url,
            message: value.message,
            error_message: value.error,
            started_at: None,
            updated_at: None,
        }
    }
}
