// ── Connector config templates ──
//
// Starting points for `--create`: the operator gets a pre-filled document
// in the editor with `null` placeholders for the values only they know.
// Field order is insertion order (preserve_order), so the document reads
// top-down in the order it should be filled in.

use serde_json::{Value, json};

/// Template used to seed a new connector's config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorTemplate {
    /// JDBC source connector (timestamp mode).
    JdbcSource,
    /// JDBC sink connector (upsert mode).
    JdbcSink,
    /// Bare skeleton: class, task count, topics.
    #[default]
    Generic,
}

impl ConnectorTemplate {
    /// The template's config map. `null` marks fields the operator must
    /// fill in before the document is accepted.
    pub fn config(self) -> Value {
        match self {
            Self::JdbcSource => json!({
                "connector.class": "io.confluent.connect.jdbc.JdbcSourceConnector",
                "mode": "timestamp",
                "poll.interval.ms": "7200000",
                "tasks.max": "1",
                "timestamp.column.name": null,
                "topic.prefix": null,
                "connection.url": null,
                "query": null,
            }),
            Self::JdbcSink => json!({
                "connector.class": "io.confluent.connect.jdbc.JdbcSinkConnector",
                "auto.create": "true",
                "insert.mode": "upsert",
                "tasks.max": "1",
                "pk.fields": null,
                "pk.mode": null,
                "connection.url": null,
                "topics": null,
            }),
            Self::Generic => json!({
                "connector.class": null,
                "tasks.max": "1",
                "topics": null,
            }),
        }
    }

    /// Full `{name, config}` create document for `POST /connectors`.
    pub fn create_document(self, name: &str) -> Value {
        json!({
            "name": name,
            "config": self.config(),
        })
    }
}
