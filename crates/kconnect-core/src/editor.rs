// ── External collaborators: editor and clipboard ──
//
// The editor flow is a one-shot terminal hand-off: write the document to a
// temp file, run `$EDITOR` synchronously, read the buffer back. "Changed"
// means the whitespace-trimmed buffer differs from the original text.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::warn;

use crate::error::Error;

/// Result of an external edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether the operator actually changed the document.
    pub changed: bool,
    /// The trimmed buffer content after the session.
    pub content: String,
}

/// Launches an external editor on a temp file.
#[derive(Debug, Clone)]
pub struct Editor {
    command: String,
}

impl Editor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Editor from `$EDITOR`, defaulting to `vim`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_owned()))
    }

    /// Run a synchronous edit session over `content`.
    ///
    /// The editor's exit code is not treated as failure; like the classic
    /// `git commit` flow, an unchanged buffer simply means "no".
    pub fn edit(&self, content: &str) -> Result<EditOutcome, Error> {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        let status = Command::new(&self.command).arg(file.path()).status()?;
        if !status.success() {
            warn!("editor '{}' exited with {status}", self.command);
        }

        let edited = std::fs::read_to_string(file.path())?;
        let trimmed = edited.trim().to_owned();
        Ok(EditOutcome {
            changed: trimmed != content,
            content: trimmed,
        })
    }
}

/// Whether a clipboard hand-off is available on this platform.
///
/// Only macOS (`pbcopy`) for now, matching the console's legend.
pub fn clipboard_supported() -> bool {
    cfg!(target_os = "macos")
}

/// Copy text to the system clipboard via `pbcopy`.
pub fn copy_to_clipboard(text: &str) -> Result<(), Error> {
    let mut child = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }
    child.wait()?;
    Ok(())
}
