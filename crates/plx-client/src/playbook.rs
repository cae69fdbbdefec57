//! Service-creation playbooks.

use plx_core::entities::{ServiceCreateRequest, ServiceProgress};
use plx_core::progress::JobHandle;
use reqwest::Method;

use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// Start a playbook; poll it with [`Self::playbook_progress`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request.
    pub async fn create_service(&self, request: &ServiceCreateRequest) -> Result<JobHandle, ApiError> {
        self.send_json(Method::POST, "playbook/service/create", request)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] for an empty id, otherwise any request error.
    pub async fn playbook_progress(&self, id: &str) -> Result<ServiceProgress, ApiError> {
        self.get_json(&format!("playbook/service/progress/{}", segment(id)?))
            .await
    }
}
