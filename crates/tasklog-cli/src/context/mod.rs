use std::sync::Arc;

use anyhow::Context;
use tasklog_auth::SessionContext;
use tasklog_client::{TaskQuery, TasklogClient, Viewer};
use tasklog_config::TasklogConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TasklogConfig,
    pub client: TasklogClient,
    /// Where the stored session lives (`keyring` or `file`), for status output.
    pub session_source: Option<&'static str>,
}

impl AppContext {
    /// Restore the stored session and build the gateway over it.
    pub fn init(config: TasklogConfig) -> anyhow::Result<Self> {
        let store = tasklog_auth::store_from_config(&config.session)
            .context("failed to open session store")?;
        let session_source = store.detect_source();
        let session = Arc::new(SessionContext::init(store));
        let client = TasklogClient::new(&config.api, session)?;

        Ok(Self {
            config,
            client,
            session_source,
        })
    }

    /// A fresh query engine for the logged-in user.
    pub fn task_query(&self) -> anyhow::Result<TaskQuery> {
        let session = self.client.session().require_session()?;
        Ok(TaskQuery::new(
            Viewer::from_session(&session),
            self.config.general.page_size,
            self.config.general.timezone.clone(),
        ))
    }
}
