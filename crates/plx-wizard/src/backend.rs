use std::future::Future;

use plx_client::{ApiClient, ApiError};
use plx_core::entities::{GeneratedTemplate, TemplatePreview, TemplateRequest};

/// The two backend calls the wizard makes.
pub trait TemplateBackend: Send + Sync {
    fn preview(
        &self,
        request: &TemplateRequest,
    ) -> impl Future<Output = Result<TemplatePreview, ApiError>> + Send;

    fn generate(
        &self,
        request: &TemplateRequest,
    ) -> impl Future<Output = Result<GeneratedTemplate, ApiError>> + Send;
}

impl TemplateBackend for ApiClient {
    async fn preview(&self, request: &TemplateRequest) -> Result<TemplatePreview, ApiError> {
        self.preview_template(request).await
    }

    async fn generate(&self, request: &TemplateRequest) -> Result<GeneratedTemplate, ApiError> {
        self.generate_template(request).await
    }
}
