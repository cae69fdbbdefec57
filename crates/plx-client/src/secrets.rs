//! Secret stores: AWS Secrets Manager and HashiCorp Vault KV.

use plx_core::entities::{AwsSecret, AwsSecretSummary, NewAwsSecret, VaultKeys, VaultSecret, VaultWrite};
use reqwest::Method;

use crate::{ApiClient, ApiError, Query, segment};

/// Body of `PUT awssecrets/secret/:name`.
#[derive(serde::Serialize)]
struct SecretValue<'a> {
    value: &'a str,
}

impl ApiClient {
    // ── AWS Secrets Manager ────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_aws_secrets(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<AwsSecretSummary>, ApiError> {
        let path = Query::new().push_opt("limit", limit).apply("awssecrets/list");
        self.get_list(&path, "secrets").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty name, otherwise any request error.
    pub async fn get_aws_secret(&self, name: &str) -> Result<AwsSecret, ApiError> {
        self.get_json(&format!("awssecrets/secret/{}", segment(name)?))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the secret.
    pub async fn create_aws_secret(&self, secret: &NewAwsSecret) -> Result<(), ApiError> {
        if secret.name.trim().is_empty() {
            return Err(ApiError::InvalidPath("secret name must not be empty".into()));
        }
        self.send_unit(Method::POST, "awssecrets/create", Some(secret))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty name, otherwise any request error.
    pub async fn update_aws_secret(&self, name: &str, value: &str) -> Result<(), ApiError> {
        let path = format!("awssecrets/secret/{}", segment(name)?);
        self.send_unit(Method::PUT, &path, Some(&SecretValue { value }))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty name, otherwise any request error.
    pub async fn delete_aws_secret(&self, name: &str) -> Result<(), ApiError> {
        self.delete(&format!("awssecrets/delete/{}", segment(name)?))
            .await
    }

    // ── Vault KV ───────────────────────────────────────────────────

    /// Keys directly under `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_vault_keys(&self, path: &str) -> Result<VaultKeys, ApiError> {
        let url = Query::new().push("path", path).apply("vault/kv/list");
        let payload: serde_json::Value = self.get_json(&url).await?;
        let keys = match payload.get("keys") {
            Some(_) => serde_json::from_value::<VaultKeys>(payload)
                .map_err(|e| ApiError::Parse(e.to_string()))?
                .keys,
            None => crate::envelope::extract_list(payload, "keys")?,
        };
        Ok(VaultKeys {
            path: path.to_string(),
            keys,
        })
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty path, otherwise any request error.
    pub async fn read_vault_secret(&self, path: &str) -> Result<VaultSecret, ApiError> {
        let url = Query::new()
            .push("path", non_empty(path)?)
            .apply("vault/kv/read");
        self.get_json(&url).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty path, otherwise any request error.
    pub async fn write_vault_secret(&self, write: &VaultWrite) -> Result<(), ApiError> {
        non_empty(&write.path)?;
        self.send_unit(Method::POST, "vault/kv/write", Some(write))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty path, otherwise any request error.
    pub async fn delete_vault_secret(&self, path: &str) -> Result<(), ApiError> {
        let url = Query::new()
            .push("path", non_empty(path)?)
            .apply("vault/kv/delete");
        self.delete(&url).await
    }
}

fn non_empty(path: &str) -> Result<&str, ApiError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        Err(ApiError::InvalidPath("vault path must not be empty".into()))
    } else {
        Ok(trimmed)
    }
}
