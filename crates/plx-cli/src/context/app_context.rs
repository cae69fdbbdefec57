use std::sync::Arc;

use anyhow::Context;
use plx_auth::{ClientStore, FileStore, StoredCredentials};
use plx_client::ApiClient;
use plx_config::PlxConfig;
use plx_jobs::{PlaybookSource, PollPolicy, ProgressTracker, TechDocsSource};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PlxConfig,
    pub client: ApiClient,
    pub store: Arc<dyn ClientStore>,
    pub policy: PollPolicy,
}

impl AppContext {
    /// Build the API client and open durable client storage.
    ///
    /// Credentials are read from the token store on every request, so a
    /// missing login surfaces per call rather than here.
    pub fn init(config: PlxConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api, Arc::new(StoredCredentials))
            .context("invalid [api] configuration")?;
        let store = FileStore::open_default().context("failed to open client storage")?;
        tracing::debug!(path = %store.path().display(), "client storage opened");
        let policy = PollPolicy::from_config(&config.polling);

        Ok(Self {
            config,
            client,
            store: Arc::new(store),
            policy,
        })
    }

    #[must_use]
    pub fn docs_tracker(&self) -> ProgressTracker<TechDocsSource> {
        ProgressTracker::new(
            TechDocsSource::new(self.client.clone()),
            Arc::clone(&self.store),
            self.policy,
        )
    }

    #[must_use]
    pub fn playbook_tracker(&self) -> ProgressTracker<PlaybookSource> {
        ProgressTracker::new(
            PlaybookSource::new(self.client.clone()),
            Arc::clone(&self.store),
            self.policy,
        )
    }
}
