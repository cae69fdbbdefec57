//! Infrastructure templates: listing, dry-run preview and generation.

use plx_core::entities::{GeneratedTemplate, InfrastructureTemplate, TemplatePreview, TemplateRequest};
use reqwest::Method;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_templates(&self) -> Result<Vec<InfrastructureTemplate>, ApiError> {
        self.get_list("infrastructure-templates", "templates").await
    }

    /// Render a template without creating anything.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request.
    pub async fn preview_template(&self, request: &TemplateRequest) -> Result<TemplatePreview, ApiError> {
        self.send_json(Method::POST, "infrastructure-templates/preview", request)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request.
    pub async fn generate_template(
        &self,
        request: &TemplateRequest,
    ) -> Result<GeneratedTemplate, ApiError> {
        self.send_json(Method::POST, "infrastructure-templates/generate", request)
            .await
    }
}
