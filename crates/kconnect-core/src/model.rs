// ── Connector domain model ──
//
// One `ConnectorSummary` per list row, built from the worker's status and
// config documents. Summaries are immutable snapshots: a row refresh
// replaces the whole value, it never patches fields in place.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::Error;

/// Connector lifecycle state as reported by the cluster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ConnectorState {
    Unassigned,
    Running,
    Paused,
    Failed,
}

/// Whether a connector produces into or consumes out of Kafka.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectorKind {
    Source,
    Sink,
}

impl ConnectorKind {
    /// Config key holding the topic(s) this connector touches.
    ///
    /// Sources declare a `topic.prefix`; sinks subscribe to `topics`.
    pub fn topic_config_key(self) -> &'static str {
        match self {
            Self::Source => "topic.prefix",
            Self::Sink => "topics",
        }
    }
}

/// Point-in-time snapshot of one connector, as rendered in the list view.
///
/// `name` is the stable identity used to re-fetch; every other field may be
/// replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSummary {
    pub name: String,
    pub state: ConnectorState,
    pub kind: ConnectorKind,
    pub worker_id: String,
    pub task_count: usize,
    pub topic: Option<String>,
}

impl ConnectorSummary {
    /// Build a summary from the `/status` and `/config` documents.
    ///
    /// The topic column is derived from the config using the kind-specific
    /// key (`topic.prefix` for sources, `topics` for sinks); a missing key
    /// just leaves the column empty.
    pub fn from_documents(status: &Value, config: &Value) -> Result<Self, Error> {
        let name = required_str(status, "/name")?;
        let state = required_str(status, "/connector/state")?
            .parse::<ConnectorState>()
            .map_err(|_| bad_field("/connector/state"))?;
        let worker_id = required_str(status, "/connector/worker_id")?.to_owned();
        let kind = required_str(status, "/type")?
            .parse::<ConnectorKind>()
            .map_err(|_| bad_field("/type"))?;
        let task_count = status
            .pointer("/tasks")
            .and_then(Value::as_array)
            .ok_or_else(|| bad_field("/tasks"))?
            .len();

        let topic = config
            .get(kind.topic_config_key())
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self {
            name: name.to_owned(),
            state,
            kind,
            worker_id,
            task_count,
            topic,
        })
    }
}

fn required_str<'a>(doc: &'a Value, pointer: &str) -> Result<&'a str, Error> {
    doc.pointer(pointer)
        .and_then(Value::as_str)
        .ok_or_else(|| bad_field(pointer))
}

fn bad_field(pointer: &str) -> Error {
    Error::Format {
        context: "status document".to_owned(),
        message: format!("missing or invalid field at '{pointer}'"),
    }
}
