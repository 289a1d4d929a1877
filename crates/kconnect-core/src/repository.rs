// ── ConnectorRepository ──
//
// The data-access seam between the session controller and the cluster.
// `ConnectClient` is the production implementation; tests substitute a
// recording fake. Every operation is one round trip and success of a
// mutation is never re-verified here — callers re-fetch to observe it.

use serde_json::Value;

use kconnect_api::ConnectClient;

use crate::error::Error;
use crate::model::ConnectorSummary;

/// Read and mutate connector state on the remote cluster.
// The console is single-threaded, so no Send bound is needed on the futures.
#[allow(async_fn_in_trait)]
pub trait ConnectorRepository {
    /// Names of all connectors currently known to the cluster, in whatever
    /// order the API returns them.
    async fn list_connector_names(&self) -> Result<Vec<String>, Error>;

    /// One list row: status fetch plus a config fetch to derive the topic.
    ///
    /// A connector mid-creation may be momentarily inconsistent and fail
    /// here; the caller decides whether to skip or abort.
    async fn fetch_summary(&self, name: &str) -> Result<ConnectorSummary, Error>;

    async fn fetch_overview(&self, name: &str) -> Result<Value, Error>;
    async fn fetch_status(&self, name: &str) -> Result<Value, Error>;
    async fn fetch_config(&self, name: &str) -> Result<Value, Error>;
    async fn fetch_tasks(&self, name: &str) -> Result<Value, Error>;

    async fn restart(&self, name: &str) -> Result<(), Error>;
    async fn pause(&self, name: &str) -> Result<(), Error>;
    async fn resume(&self, name: &str) -> Result<(), Error>;

    async fn update_config(&self, name: &str, config: &Value) -> Result<(), Error>;
    async fn create_connector(&self, document: &Value) -> Result<(), Error>;
}

impl ConnectorRepository for ConnectClient {
    async fn list_connector_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.list_connectors().await?)
    }

    async fn fetch_summary(&self, name: &str) -> Result<ConnectorSummary, Error> {
        let status = self.connector_status(name).await?;
        let config = self.connector_config(name).await?;
        ConnectorSummary::from_documents(&status, &config)
    }

    async fn fetch_overview(&self, name: &str) -> Result<Value, Error> {
        Ok(self.connector_overview(name).await?)
    }

    async fn fetch_status(&self, name: &str) -> Result<Value, Error> {
        Ok(self.connector_status(name).await?)
    }

    async fn fetch_config(&self, name: &str) -> Result<Value, Error> {
        Ok(self.connector_config(name).await?)
    }

    async fn fetch_tasks(&self, name: &str) -> Result<Value, Error> {
        Ok(self.connector_tasks(name).await?)
    }

    async fn restart(&self, name: &str) -> Result<(), Error> {
        Ok(self.restart_connector(name).await?)
    }

    async fn pause(&self, name: &str) -> Result<(), Error> {
        Ok(self.pause_connector(name).await?)
    }

    async fn resume(&self, name: &str) -> Result<(), Error> {
        Ok(self.resume_connector(name).await?)
    }

    async fn update_config(&self, name: &str, config: &Value) -> Result<(), Error> {
        Ok(self.update_connector_config(name, config).await?)
    }

    async fn create_connector(&self, document: &Value) -> Result<(), Error> {
        Ok(ConnectClient::create_connector(self, document).await?)
    }
}
