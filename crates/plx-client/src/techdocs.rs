//! Documentation and diagram generation jobs.

use plx_core::entities::DocGenerationRequest;
use plx_core::progress::{JobHandle, JobProgress};
use reqwest::Method;

use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// Submit a generation job; poll it with [`Self::docs_progress`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request.
    pub async fn generate_docs(&self, request: &DocGenerationRequest) -> Result<JobHandle, ApiError> {
        self.send_json(Method::POST, "techdocs/generate", request)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty id, otherwise any request error.
    pub async fn docs_progress(&self, id: &str) -> Result<JobProgress, ApiError> {
        self.get_json(&format!("techdocs/progress/{}", segment(id)?))
            .await
    }
}
