// ── Refresh protocol ──
//
// Synchronizes the in-memory connector list with the cluster. The sequence
// is synchronous from the controller's point of view; the observer gets a
// callback before and after each network step so the UI can repaint a
// progress line between round trips.
//
// A failure on any name aborts the whole refresh: nothing is committed, the
// caller keeps whatever list it had before.

use tracing::{debug, info};

use crate::error::Error;
use crate::model::ConnectorSummary;
use crate::repository::ConnectorRepository;

/// Progress callbacks for a full refresh. All methods default to no-ops so
/// headless callers (CLI backup, tests) can pass [`SilentObserver`].
pub trait RefreshObserver {
    /// The refresh sequence is starting; stale views should come down.
    fn on_begin(&mut self) {}

    /// The name list arrived, already sorted.
    fn on_names_fetched(&mut self, _names: &[String]) {}

    /// About to load row `index` of `total` (1-based).
    fn on_item_start(&mut self, _index: usize, _total: usize, _name: &str) {}

    /// All rows loaded; the list view can come back.
    fn on_complete(&mut self) {}
}

/// Observer that ignores every signal.
pub struct SilentObserver;

impl RefreshObserver for SilentObserver {}

/// Load every connector's summary, in lexicographic name order.
///
/// The result is only returned on full success; the caller commits it with
/// `ListModel::replace_all`, which resets the selection to the first row.
pub async fn refresh_all<R: ConnectorRepository>(
    repo: &R,
    observer: &mut dyn RefreshObserver,
) -> Result<Vec<ConnectorSummary>, Error> {
    observer.on_begin();

    let mut names = repo.list_connector_names().await?;
    names.sort();
    observer.on_names_fetched(&names);

    let total = names.len();
    let mut rows = Vec::with_capacity(total);
    for (i, name) in names.iter().enumerate() {
        observer.on_item_start(i + 1, total, name);
        debug!("loading connector {}/{}: {}", i + 1, total, name);
        let summary = repo
            .fetch_summary(name)
            .await
            .map_err(|e| e.for_connector(name))?;
        rows.push(summary);
    }

    observer.on_complete();
    info!("refreshed {total} connectors");
    Ok(rows)
}

/// Re-fetch a single row by name, e.g. after a restart/pause/resume.
///
/// The caller swaps the result in at the row's existing index, so list
/// order and selection stay put.
pub async fn refresh_row<R: ConnectorRepository>(
    repo: &R,
    name: &str,
) -> Result<ConnectorSummary, Error> {
    repo.fetch_summary(name)
        .await
        .map_err(|e| e.for_connector(name))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::model::{ConnectorKind, ConnectorState};

    /// Repository fake: serves canned summaries and records every call.
    struct FakeRepo {
        names: Vec<String>,
        fail_on: Option<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeRepo {
        fn new(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|&n| n.to_owned()).collect(),
                fail_on: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing_on(mut self, name: &str) -> Self {
            self.fail_on = Some(name.to_owned());
            self
        }

        fn summary(name: &str) -> ConnectorSummary {
            ConnectorSummary {
                name: name.to_owned(),
                state: ConnectorState::Running,
                kind: ConnectorKind::Sink,
                worker_id: "w1".to_owned(),
                task_count: 1,
                topic: None,
            }
        }
    }

    impl ConnectorRepository for FakeRepo {
        async fn list_connector_names(&self) -> Result<Vec<String>, Error> {
            self.calls.borrow_mut().push("list".to_owned());
            Ok(self.names.clone())
        }

        async fn fetch_summary(&self, name: &str) -> Result<ConnectorSummary, Error> {
            self.calls.borrow_mut().push(format!("summary:{name}"));
            if self.fail_on.as_deref() == Some(name) {
                return Err(Error::Format {
                    context: "status document".to_owned(),
                    message: "mid-creation".to_owned(),
                });
            }
            Ok(Self::summary(name))
        }

        async fn fetch_overview(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by refresh")
        }
        async fn fetch_status(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by refresh")
        }
        async fn fetch_config(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by refresh")
        }
        async fn fetch_tasks(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by refresh")
        }
        async fn restart(&self, name: &str) -> Result<(), Error> {
            self.calls.borrow_mut().push(format!("restart:{name}"));
            Ok(())
        }
        async fn pause(&self, _name: &str) -> Result<(), Error> {
            Ok(())
        }
        async fn resume(&self, _name: &str) -> Result<(), Error> {
            Ok(())
        }
        async fn update_config(&self, _name: &str, _config: &Value) -> Result<(), Error> {
            Ok(())
        }
        async fn create_connector(&self, _document: &Value) -> Result<(), Error> {
            Ok(())
        }
    }

    /// Observer that records the order and content of every signal.
    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<String>,
    }

    impl RefreshObserver for RecordingObserver {
        fn on_begin(&mut self) {
            self.events.push("begin".to_owned());
        }
        fn on_names_fetched(&mut self, names: &[String]) {
            self.events.push(format!("names:{}", names.join(",")));
        }
        fn on_item_start(&mut self, index: usize, total: usize, name: &str) {
            self.events.push(format!("item:{index}/{total}:{name}"));
        }
        fn on_complete(&mut self) {
            self.events.push("complete".to_owned());
        }
    }

    #[tokio::test]
    async fn refresh_sorts_names_before_loading() {
        // API returns ["b", "a"]; rows must come back as a, b.
        let repo = FakeRepo::new(&["b", "a"]);
        let rows = refresh_all(&repo, &mut SilentObserver).await.expect("refresh");

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn observer_sees_the_full_signal_sequence() {
        let repo = FakeRepo::new(&["b", "a"]);
        let mut observer = RecordingObserver::default();
        refresh_all(&repo, &mut observer).await.expect("refresh");

        assert_eq!(
            observer.events,
            vec![
                "begin",
                "names:a,b",
                "item:1/2:a",
                "item:2/2:b",
                "complete",
            ]
        );
    }

    #[tokio::test]
    async fn one_failure_aborts_the_whole_refresh() {
        // Third of five fails: no partial result, error names the connector.
        let repo = FakeRepo::new(&["a", "b", "c", "d", "e"]).failing_on("c");
        let err = refresh_all(&repo, &mut SilentObserver)
            .await
            .expect_err("must abort");

        match err {
            Error::Refresh { connector, .. } => assert_eq!(connector, "c"),
            other => panic!("expected Refresh error, got {other:?}"),
        }

        // d and e were never touched.
        let calls = repo.calls.borrow();
        assert!(!calls.iter().any(|c| c == "summary:d" || c == "summary:e"));
    }

    #[tokio::test]
    async fn row_refresh_touches_only_that_name() {
        let repo = FakeRepo::new(&["a", "b"]);
        let row = refresh_row(&repo, "b").await.expect("row refresh");
        assert_eq!(row.name, "b");
        assert_eq!(*repo.calls.borrow(), vec!["summary:b"]);
    }
}
