//! `kconnect-core` — domain model and session logic for the kconnect console.
//!
//! Sits between `kconnect-api` (raw REST calls) and the TUI: connector
//! summaries, the selectable list and wrapped-document models, the refresh
//! protocol, and the file/process collaborators (editor, clipboard,
//! backup/restore).

pub mod backup;
pub mod document;
pub mod editor;
pub mod error;
pub mod json;
pub mod list;
pub mod model;
pub mod refresh;
pub mod repository;
pub mod templates;

pub use document::{DisplayLine, DocumentModel};
pub use error::Error;
pub use list::ListModel;
pub use model::{ConnectorKind, ConnectorState, ConnectorSummary};
pub use refresh::{RefreshObserver, refresh_all, refresh_row};
pub use repository::ConnectorRepository;
pub use templates::ConnectorTemplate;
