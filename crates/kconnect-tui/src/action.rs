//! UI actions and notices. Keys decode to actions; actions are the sole
//! mechanism for state mutation in the session controller.

use std::fmt;

/// Which document a connector detail view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Overview,
    Status,
    Config,
    Tasks,
}

impl DocKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Status => "Status",
            Self::Config => "Config",
            Self::Tasks => "Tasks",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State-transition request for the selected connector row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerb {
    Restart,
    Pause,
    Resume,
}

impl RowVerb {
    /// Past-tense label for the confirmation notice.
    pub fn done_label(self) -> &'static str {
        match self {
            Self::Restart => "restarted",
            Self::Pause => "paused",
            Self::Resume => "resumed",
        }
    }
}

/// Every state transition in the console is expressed as an Action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,

    // ── Shared navigation ─────────────────────────────────────────
    SelectPrevious,
    SelectNext,

    // ── List mode ─────────────────────────────────────────────────
    Refresh,
    OpenDocument(DocKind),
    Row(RowVerb),
    UpdateConfig,
    Duplicate,

    // ── Document mode ─────────────────────────────────────────────
    ToggleLineNumbers,
    OpenInEditor,
    CopyDocument,
    CloseDocument,
}

/// Severity of a status-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown in the status line until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}
