//! Where jobs are submitted and their status is read.

use std::future::Future;

use plx_auth::storage::{PLAYBOOK_PROGRESS_KEY, TECHDOCS_PROGRESS_KEY};
use plx_client::{ApiClient, ApiError};
use plx_core::entities::{DocGenerationRequest, ServiceCreateRequest};
use plx_core::progress::{JobHandle, JobProgress};

/// A kind of long-running backend job.
pub trait JobSource: Send + Sync + 'static {
    type Request: Send + Sync;

    /// Human-readable job kind, used in messages.
    fn label(&self) -> &'static str;

    /// Durable storage key holding the in-flight job id.
    fn storage_key(&self) -> &'static str;

    fn submit(
        &self,
        request: &Self::Request,
    ) -> impl Future<Output = Result<JobHandle, ApiError>> + Send;

    fn status(&self, id: &str) -> impl Future<Output = Result<JobProgress, ApiError>> + Send;
}

/// Documentation and diagram generation (`techdocs/*`).
#[derive(Debug, Clone)]
pub struct TechDocsSource {
    client: ApiClient,
}

impl TechDocsSource {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl JobSource for TechDocsSource {
    type Request = DocGenerationRequest;

    fn label(&self) -> &'static str {
        "documentation generation"
    }

    fn storage_key(&self) -> &'static str {
        TECHDOCS_PROGRESS_KEY
    }

    async fn submit(&self, request: &DocGenerationRequest) -> Result<JobHandle, ApiError> {
        self.client.generate_docs(request).await
    }

    async fn status(&self, id: &str) -> Result<JobProgress, ApiError> {
        self.client.docs_progress(id).await
    }
}

/// Service-creation playbooks (`playbook/service/*`).
#[derive(Debug, Clone)]
pub struct PlaybookSource {
    client: ApiClient,
}

impl PlaybookSource {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl JobSource for PlaybookSource {
    type Request = ServiceCreateRequest;

    fn label(&self) -> &'static str {
        "service creation"
    }

    fn storage_key(&self) -> &'static str {
        PLAYBOOK_PROGRESS_KEY
    }

    async fn submit(&self, request: &ServiceCreateRequest) -> Result<JobHandle, ApiError> {
        self.client.create_service(request).await
    }

    async fn status(&self, id: &str) -> Result<JobProgress, ApiError> {
        self.client.playbook_progress(id).await.map(JobProgress::from)
    }
}
