use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocKind;

/// Body of a documentation / diagram generation request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DocGenerationRequest {
    pub repository: String,
    pub kind: DocKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Free-form instructions passed to the generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Where the backend should save the result, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}
