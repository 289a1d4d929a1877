//! `kconnect` — interactive terminal console for Kafka Connect clusters.
//!
//! One cluster per session. The console lists connectors with live state,
//! opens pretty-printed detail documents, and drives restart/pause/resume
//! and config edits through the Connect REST API. Editing happens in the
//! system editor after the terminal is restored, so editor flows end the
//! session.
//!
//! Logs are written to a file (default `/tmp/kconnect.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and the
//! one-shot backup/restore/create modes.

mod action;
mod app;
mod config;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use serde_json::Value;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use kconnect_api::{ConnectClient, TransportConfig};
use kconnect_core::{
    ConnectorRepository, ConnectorTemplate,
    backup::{backup_connectors, restore_connectors},
    editor::Editor,
    json,
};

use crate::app::{App, SessionOutcome};
use crate::tui::Tui;

/// Interactive console for operating a Kafka Connect cluster.
#[derive(Parser, Debug)]
#[command(name = "kconnect", version, about)]
struct Cli {
    /// Connect REST URL (e.g., http://connect:8083)
    #[arg(env = "KCONNECT_URL")]
    url: Option<String>,

    /// Create a connector with this name from a template, then exit
    #[arg(long, value_name = "NAME")]
    create: Option<String>,

    /// Pre-fill the create template with JDBC source defaults
    #[arg(long, requires = "create", conflicts_with = "jdbc_sink")]
    jdbc_source: bool,

    /// Pre-fill the create template with JDBC sink defaults
    #[arg(long, requires = "create")]
    jdbc_sink: bool,

    /// Back up every connector config to DIR, then exit
    #[arg(long, value_name = "DIR")]
    backup: Option<PathBuf>,

    /// Restore connector configs from a backup DIR, then exit
    #[arg(long, value_name = "DIR", conflicts_with = "backup")]
    restore: Option<PathBuf>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Editor command for config editing (defaults to $EDITOR)
    #[arg(long, env = "KCONNECT_EDITOR")]
    editor: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/kconnect.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "kconnect={log_level},kconnect_core={log_level},kconnect_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("kconnect.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

fn build_client(cli: &Cli, settings: &config::Settings) -> Result<ConnectClient> {
    let url = cli
        .url
        .clone()
        .or_else(|| settings.url.clone())
        .ok_or_else(|| {
            eyre!(
                "no Connect URL given; pass one as an argument, set KCONNECT_URL, \
                 or add `url` to {}",
                config::config_path().display()
            )
        })?;

    let transport = TransportConfig {
        timeout: std::time::Duration::from_secs(settings.timeout),
        accept_invalid_certs: cli.insecure || settings.insecure,
    };
    Ok(ConnectClient::new(url.parse()?, &transport)?)
}

fn build_editor(cli: &Cli, settings: &config::Settings) -> Editor {
    cli.editor
        .as_deref()
        .or(settings.editor.as_deref())
        .map_or_else(Editor::from_env, Editor::new)
}

/// `--backup DIR`: write every connector config plus the index file.
async fn run_backup(client: &ConnectClient, dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let files = backup_connectors(client, dir).await?;
    for file in &files {
        println!("wrote {}", dir.join(file).display());
    }
    println!("backed up {} connectors to {}", files.len(), dir.display());
    Ok(())
}

/// `--restore DIR`: push every config named in the index back to the
/// cluster, updating existing connectors and creating missing ones.
async fn run_restore(client: &ConnectClient, dir: &std::path::Path) -> Result<()> {
    let report = restore_connectors(client, dir).await?;
    for name in &report.restored {
        println!("restored {name}");
    }
    for (file, reason) in &report.skipped {
        eprintln!("skipped {file}: {reason}");
    }
    println!(
        "restored {} connectors ({} skipped)",
        report.restored.len(),
        report.skipped.len()
    );
    Ok(())
}

/// `--create NAME`: open a template document in the editor and POST the
/// result. An unmodified buffer aborts without touching the cluster.
async fn run_create(
    client: &ConnectClient,
    editor: &Editor,
    name: &str,
    template: ConnectorTemplate,
) -> Result<()> {
    let document = json::to_pretty(&template.create_document(name));
    let outcome = editor.edit(&document)?;
    if !outcome.changed {
        println!("no changes made; connector not created");
        return Ok(());
    }
    let value: Value = serde_json::from_str(&outcome.content)
        .map_err(|e| eyre!("edited document is not valid JSON: {e}"))?;
    client.create_connector(&value).await?;
    println!("created connector {name}");
    Ok(())
}

/// Apply whatever the session handed off after the terminal was restored.
async fn apply_outcome(
    client: &ConnectClient,
    editor: &Editor,
    outcome: SessionOutcome,
) -> Result<()> {
    match outcome {
        SessionOutcome::Quit => Ok(()),

        SessionOutcome::UpdateConfig {
            connector,
            original,
        } => {
            let edited = editor.edit(&original)?;
            if !edited.changed {
                println!("no changes made; config of {connector} untouched");
                return Ok(());
            }
            let value: Value = serde_json::from_str(&edited.content)
                .map_err(|e| eyre!("edited config is not valid JSON: {e}"))?;
            client.update_config(&connector, &value).await?;
            println!("updated config of {connector}");
            Ok(())
        }

        SessionOutcome::CreateConnector { document } => {
            let edited = editor.edit(&document)?;
            if !edited.changed {
                println!("no changes made; connector not created");
                return Ok(());
            }
            let value: Value = serde_json::from_str(&edited.content)
                .map_err(|e| eyre!("edited document is not valid JSON: {e}"))?;
            client.create_connector(&value).await?;
            println!("created connector");
            Ok(())
        }

        // View-only: open the document for inspection, discard the result.
        SessionOutcome::OpenEditor { text } => {
            editor.edit(&text)?;
            Ok(())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let settings = config::load_settings()?;
    let client = build_client(&cli, &settings)?;
    let editor = build_editor(&cli, &settings);

    info!(url = %client.base_url(), "starting kconnect");

    // One-shot modes run without the TUI.
    if let Some(dir) = &cli.backup {
        return run_backup(&client, dir).await;
    }
    if let Some(dir) = &cli.restore {
        return run_restore(&client, dir).await;
    }
    if let Some(name) = &cli.create {
        let template = if cli.jdbc_source {
            ConnectorTemplate::JdbcSource
        } else if cli.jdbc_sink {
            ConnectorTemplate::JdbcSink
        } else {
            ConnectorTemplate::Generic
        };
        return run_create(&client, &editor, name, template).await;
    }

    let cluster_url = client.base_url().to_string();
    let mut app = App::new(client.clone(), cluster_url);

    let outcome = {
        let mut terminal = Tui::new()?;
        terminal.enter()?;
        let outcome = app.run(&mut terminal).await;
        terminal.exit()?;
        outcome?
    };

    apply_outcome(&client, &editor, outcome).await
}
