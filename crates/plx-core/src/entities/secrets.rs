use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AWS Secrets Manager entry as listed (no secret value).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AwsSecretSummary {
    pub name: String,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub last_changed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// An AWS secret including its value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AwsSecret {
    pub name: String,
    pub value: String,
    pub arn: Option<String>,
    pub version_id: Option<String>,
}

/// Body of `POST awssecrets/create` (and, without `name`, `PUT awssecrets/secret/:name`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAwsSecret {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// Keys stored under a Vault KV path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VaultKeys {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Data stored at a Vault KV path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VaultSecret {
    pub path: String,
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
    pub version: Option<u64>,
}

/// Body of `POST vault/kv/write`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VaultWrite {
    pub path: String,
    pub data: BTreeMap<String, serde_json::Value>,
}
