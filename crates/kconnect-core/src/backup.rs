// ── Backup / restore ──
//
// One pretty-printed config file per connector (`{name}.json`) plus an
// `ACTIVE_CONNECTORS.json` index listing the written file names. Restore
// reads the index back and re-creates (or updates) each connector.
//
// Per-file problems (malformed JSON, missing file) are reported and
// skipped so one bad file never sinks the batch; a remote failure aborts,
// since at that point the cluster itself is misbehaving.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tracing::{info, warn};

use crate::error::Error;
use crate::json;
use crate::repository::ConnectorRepository;

/// Index file naming every config written by a backup run.
pub const INDEX_FILE: &str = "ACTIVE_CONNECTORS.json";

/// What a restore run did, file by file.
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// Connectors created or updated.
    pub restored: Vec<String>,
    /// Files skipped, with the reason.
    pub skipped: Vec<(String, Error)>,
}

/// Write every connector's config into `dir`, then the index file.
///
/// Returns the written file names (without the index).
pub async fn backup_connectors<R: ConnectorRepository>(
    repo: &R,
    dir: &Path,
) -> Result<Vec<String>, Error> {
    if !dir.is_dir() {
        return Err(Error::Path {
            path: dir.to_owned(),
            reason: "backup target is not a directory".to_owned(),
        });
    }

    let mut names = repo.list_connector_names().await?;
    names.sort();

    let mut files = Vec::with_capacity(names.len());
    for name in &names {
        let config = repo.fetch_config(name).await?;
        let file_name = format!("{name}.json");
        fs::write(dir.join(&file_name), json::to_pretty_sorted(&config))?;
        info!("backed up {name}");
        files.push(file_name);
    }

    fs::write(
        dir.join(INDEX_FILE),
        json::to_pretty(&Value::from(files.clone())),
    )?;
    Ok(files)
}

/// Re-create every connector listed in `dir`'s index file.
///
/// Existing connectors get their config updated instead of a create (the
/// API rejects duplicate creates). Malformed or missing files are recorded
/// in the report and the batch continues.
pub async fn restore_connectors<R: ConnectorRepository>(
    repo: &R,
    dir: &Path,
) -> Result<RestoreReport, Error> {
    let index_path = dir.join(INDEX_FILE);
    if !index_path.is_file() {
        return Err(Error::Path {
            path: index_path,
            reason: "index file not found".to_owned(),
        });
    }

    let index_text = fs::read_to_string(&index_path)?;
    let files: Vec<String> = serde_json::from_str(&index_text)
        .map_err(|e| Error::format(INDEX_FILE, &e))?;

    let existing = repo.list_connector_names().await?;

    let mut report = RestoreReport::default();
    for file_name in files {
        let path = dir.join(&file_name);
        if !path.is_file() {
            warn!("skipping {file_name}: file not found");
            report.skipped.push((
                file_name.clone(),
                Error::Path {
                    path,
                    reason: "listed in index but not found".to_owned(),
                },
            ));
            continue;
        }

        let text = fs::read_to_string(&path)?;
        let config: Value = match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("skipping {file_name}: malformed JSON");
                report
                    .skipped
                    .push((file_name.clone(), Error::format(&file_name, &e)));
                continue;
            }
        };

        let name = file_name.trim_end_matches(".json");
        if existing.iter().any(|n| n == name) {
            repo.update_config(name, &config).await?;
        } else {
            repo.create_connector(&json!({ "name": name, "config": config }))
                .await?;
        }
        info!("restored {name}");
        report.restored.push(name.to_owned());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ConnectorSummary;

    /// Repository fake serving fixed configs and recording mutations.
    struct FakeRepo {
        names: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeRepo {
        fn new(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|&n| n.to_owned()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConnectorRepository for FakeRepo {
        async fn list_connector_names(&self) -> Result<Vec<String>, Error> {
            Ok(self.names.clone())
        }
        async fn fetch_summary(&self, _name: &str) -> Result<ConnectorSummary, Error> {
            unimplemented!("not used by backup")
        }
        async fn fetch_overview(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by backup")
        }
        async fn fetch_status(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by backup")
        }
        async fn fetch_config(&self, name: &str) -> Result<Value, Error> {
            Ok(json!({ "connector.class": "X", "name": name }))
        }
        async fn fetch_tasks(&self, _name: &str) -> Result<Value, Error> {
            unimplemented!("not used by backup")
        }
        async fn restart(&self, _name: &str) -> Result<(), Error> {
            Ok(())
        }
        async fn pause(&self, _name: &str) -> Result<(), Error> {
            Ok(())
        }
        async fn resume(&self, _name: &str) -> Result<(), Error> {
            Ok(())
        }
        async fn update_config(&self, name: &str, _config: &Value) -> Result<(), Error> {
            self.calls.borrow_mut().push(format!("update:{name}"));
            Ok(())
        }
        async fn create_connector(&self, document: &Value) -> Result<(), Error> {
            let name = document["name"].as_str().unwrap_or("?");
            self.calls.borrow_mut().push(format!("create:{name}"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn backup_writes_one_file_per_connector_plus_index() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = FakeRepo::new(&["b", "a"]);

        let files = backup_connectors(&repo, dir.path()).await.expect("backup");
        assert_eq!(files, vec!["a.json", "b.json"]);

        assert!(dir.path().join("a.json").is_file());
        assert!(dir.path().join("b.json").is_file());

        let index: Vec<String> = serde_json::from_str(
            &fs::read_to_string(dir.path().join(INDEX_FILE)).expect("index"),
        )
        .expect("index JSON");
        assert_eq!(index, files);
    }

    #[tokio::test]
    async fn backup_to_a_missing_directory_is_a_path_error() {
        let repo = FakeRepo::new(&[]);
        let err = backup_connectors(&repo, Path::new("/nonexistent/kconnect"))
            .await
            .expect_err("must fail");
        assert!(matches!(err, Error::Path { .. }));
    }

    #[tokio::test]
    async fn restore_creates_new_and_updates_existing() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("old.json"), "{\"topics\": \"t\"}").expect("write");
        fs::write(dir.path().join("new.json"), "{\"topics\": \"t\"}").expect("write");
        fs::write(
            dir.path().join(INDEX_FILE),
            "[\"old.json\", \"new.json\"]",
        )
        .expect("write index");

        // "old" already exists on the cluster, "new" does not.
        let repo = FakeRepo::new(&["old"]);
        let report = restore_connectors(&repo, dir.path()).await.expect("restore");

        assert_eq!(report.restored, vec!["old", "new"]);
        assert_eq!(*repo.calls.borrow(), vec!["update:old", "create:new"]);
    }

    #[tokio::test]
    async fn restore_skips_malformed_files_and_continues() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("good.json"), "{}").expect("write");
        fs::write(dir.path().join("bad.json"), "{not json").expect("write");
        fs::write(
            dir.path().join(INDEX_FILE),
            "[\"bad.json\", \"good.json\"]",
        )
        .expect("write index");

        let repo = FakeRepo::new(&[]);
        let report = restore_connectors(&repo, dir.path()).await.expect("restore");

        assert_eq!(report.restored, vec!["good"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, "bad.json");
        assert!(matches!(report.skipped[0].1, Error::Format { .. }));
    }

    #[tokio::test]
    async fn restore_without_an_index_is_a_path_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = restore_connectors(&FakeRepo::new(&[]), dir.path())
            .await
            .expect_err("must fail");
        assert!(matches!(err, Error::Path { .. }));
    }
}
