// Kafka Connect REST client
//
// Wraps `reqwest::Client` with Connect-specific URL construction and a
// uniform success-range check. Every method is one round trip: no caching,
// no retries, no batching. Mutations are fire-and-forget at this layer —
// callers re-fetch to observe their effect.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for a single Kafka Connect worker (or the REST frontend
/// of a distributed cluster).
///
/// Any response outside 200–299 becomes [`Error::Remote`] carrying the
/// method, URL, status, and body text.
#[derive(Clone)]
pub struct ConnectClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ConnectClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the cluster root, e.g. `http://connect:8083`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Used by tests to point at a mock server.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The cluster base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path, e.g. `connectors/{name}/status`.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Check the success range and either pass the response through or
    /// convert it into [`Error::Remote`] with the body attached.
    async fn check(
        method: &'static str,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();
        Err(Error::Remote {
            method,
            url,
            status: status.as_u16(),
            body,
        })
    }

    /// GET a JSON document.
    async fn get_json(&self, url: Url) -> Result<Value, Error> {
        debug!("GET {url}");
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let resp = Self::check("GET", resp).await?;

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// POST with an optional JSON body, discarding the response payload.
    async fn post(&self, url: Url, body: Option<&Value>) -> Result<(), Error> {
        debug!("POST {url}");
        let mut req = self.http.post(url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await.map_err(Error::Transport)?;
        Self::check("POST", resp).await?;
        Ok(())
    }

    /// PUT with an optional JSON body, discarding the response payload.
    async fn put(&self, url: Url, body: Option<&Value>) -> Result<(), Error> {
        debug!("PUT {url}");
        let mut req = self.http.put(url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await.map_err(Error::Transport)?;
        Self::check("PUT", resp).await?;
        Ok(())
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// List all connector names known to the cluster.
    ///
    /// `GET /connectors`
    pub async fn list_connectors(&self) -> Result<Vec<String>, Error> {
        let url = self.endpoint("connectors")?;
        let value = self.get_json(url).await?;
        serde_json::from_value(value.clone()).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: value.to_string(),
        })
    }

    /// Fetch the overview document (name, config, tasks, type).
    ///
    /// `GET /connectors/{name}`
    pub async fn connector_overview(&self, name: &str) -> Result<Value, Error> {
        let url = self.endpoint(&format!("connectors/{name}"))?;
        self.get_json(url).await
    }

    /// Fetch the status document (connector state, worker id, task states).
    ///
    /// `GET /connectors/{name}/status`
    pub async fn connector_status(&self, name: &str) -> Result<Value, Error> {
        let url = self.endpoint(&format!("connectors/{name}/status"))?;
        self.get_json(url).await
    }

    /// Fetch the config key/value map.
    ///
    /// `GET /connectors/{name}/config`
    pub async fn connector_config(&self, name: &str) -> Result<Value, Error> {
        let url = self.endpoint(&format!("connectors/{name}/config"))?;
        self.get_json(url).await
    }

    /// Fetch the task list.
    ///
    /// `GET /connectors/{name}/tasks`
    pub async fn connector_tasks(&self, name: &str) -> Result<Value, Error> {
        let url = self.endpoint(&format!("connectors/{name}/tasks"))?;
        self.get_json(url).await
    }

    /// Request a connector restart. Success is not re-verified here.
    ///
    /// `POST /connectors/{name}/restart`
    pub async fn restart_connector(&self, name: &str) -> Result<(), Error> {
        let url = self.endpoint(&format!("connectors/{name}/restart"))?;
        self.post(url, None).await
    }

    /// Pause a connector.
    ///
    /// `PUT /connectors/{name}/pause`
    pub async fn pause_connector(&self, name: &str) -> Result<(), Error> {
        let url = self.endpoint(&format!("connectors/{name}/pause"))?;
        self.put(url, None).await
    }

    /// Resume a paused connector.
    ///
    /// `PUT /connectors/{name}/resume`
    pub async fn resume_connector(&self, name: &str) -> Result<(), Error> {
        let url = self.endpoint(&format!("connectors/{name}/resume"))?;
        self.put(url, None).await
    }

    /// Create a connector from a `{name, config}` document.
    ///
    /// `POST /connectors` — creating a name that already exists fails with
    /// [`Error::Remote`]; the API makes no idempotency promise.
    pub async fn create_connector(&self, document: &Value) -> Result<(), Error> {
        let url = self.endpoint("connectors")?;
        self.post(url, Some(document)).await
    }

    /// Replace a connector's config.
    ///
    /// `PUT /connectors/{name}/config`
    pub async fn update_connector_config(&self, name: &str, config: &Value) -> Result<(), Error> {
        let url = self.endpoint(&format!("connectors/{name}/config"))?;
        self.put(url, Some(config)).await
    }
}
