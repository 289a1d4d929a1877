//! Session controller — the two-mode state machine, key dispatch, refresh
//! orchestration, and rendering.
//!
//! The control loop is single-threaded and cooperative: one key event is
//! read, fully processed (including any network round trips), the frame is
//! repainted, and only then does the loop block for the next key. Refresh
//! keeps the terminal honest by repainting a progress line between the
//! sequential fetches; there is no background work and no cancellation.

use color_eyre::eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};
use tracing::{info, warn};

use kconnect_core::{
    ConnectorRepository, ConnectorSummary, DocumentModel, ListModel, RefreshObserver, editor,
    json, refresh_all, refresh_row,
};

use crate::action::{Action, DocKind, Notice, RowVerb};
use crate::theme;
use crate::tui::Tui;
use crate::widgets::{legend, state_indicator};

/// How the session ended. Editor flows hand off to the caller after the
/// terminal is restored; editing is a one-shot terminal action, not
/// resumed in-UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Plain quit.
    Quit,
    /// Operator asked to edit the selected connector's config.
    UpdateConfig { connector: String, original: String },
    /// Operator asked to create a connector from a pre-filled document.
    CreateConnector { document: String },
    /// Operator asked to open the viewed document in the system editor.
    OpenEditor { text: String },
}

/// Document-mode state: everything needed to render the excursion and
/// nothing more. Dropped wholesale on the way back to the list.
#[derive(Debug)]
pub struct DocumentView {
    pub connector: String,
    pub kind: DocKind,
    pub show_line_numbers: bool,
    pub model: DocumentModel,
    /// Width the current wrap result was computed for; `None` forces a
    /// rewrap on the next render pass.
    wrapped_width: Option<usize>,
}

impl DocumentView {
    fn new(connector: String, kind: DocKind, text: String) -> Self {
        Self {
            connector,
            kind,
            show_line_numbers: false,
            model: DocumentModel::new(text),
            wrapped_width: None,
        }
    }
}

/// The active view. All key dispatch and render logic pattern-matches on
/// this; there is no mode flag anywhere else.
#[derive(Debug)]
pub enum View {
    List,
    Document(DocumentView),
}

/// Top-level session state and control loop.
pub struct App<R: ConnectorRepository> {
    repo: R,
    cluster_url: String,
    /// The connector list survives document excursions, so selection and
    /// scroll position are intact on the way back.
    connectors: ListModel<ConnectorSummary>,
    view: View,
    notice: Option<Notice>,
}

impl<R: ConnectorRepository> App<R> {
    pub fn new(repo: R, cluster_url: String) -> Self {
        Self {
            repo,
            cluster_url,
            connectors: ListModel::new(),
            view: View::List,
            notice: None,
        }
    }

    /// Run the control loop until the operator quits or hands off to an
    /// editor flow.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<SessionOutcome> {
        let mut events = EventStream::new();

        // First load; on failure the list stays empty and the error shows
        // in the status line.
        self.refresh(tui).await;

        loop {
            tui.draw(|frame| self.render(frame))?;

            let Some(event) = events.next().await else {
                return Ok(SessionOutcome::Quit);
            };

            match event? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) =
                        action_for_key(&self.view, editor::clipboard_supported(), key)
                    else {
                        continue;
                    };
                    if action == Action::Refresh {
                        self.refresh(tui).await;
                    } else if let Some(outcome) = self.process_action(action).await {
                        return Ok(outcome);
                    }
                }
                // A resize is just a re-render trigger; the next draw picks
                // up the new geometry and document mode rewraps itself.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Apply one action. Returns an outcome when the session should end.
    async fn process_action(&mut self, action: Action) -> Option<SessionOutcome> {
        self.notice = None;

        match action {
            Action::Quit => return Some(SessionOutcome::Quit),

            Action::SelectPrevious => match &mut self.view {
                View::List => self.connectors.select_previous(),
                View::Document(doc) => doc.model.lines_mut().select_previous(),
            },
            Action::SelectNext => match &mut self.view {
                View::List => self.connectors.select_next(),
                View::Document(doc) => doc.model.lines_mut().select_next(),
            },

            // Handled by the run loop, which owns the terminal handle.
            Action::Refresh => {}

            Action::OpenDocument(kind) => self.open_document(kind).await,

            Action::Row(verb) => self.row_action(verb).await,

            Action::UpdateConfig => {
                let name = self.selected_name()?;
                match self.repo.fetch_config(&name).await {
                    Ok(config) => {
                        return Some(SessionOutcome::UpdateConfig {
                            connector: name,
                            original: json::to_pretty_sorted(&config),
                        });
                    }
                    Err(e) => self.notice = Some(Notice::error(e.to_string())),
                }
            }

            Action::Duplicate => {
                let name = self.selected_name()?;
                match self.repo.fetch_config(&name).await {
                    Ok(config) => {
                        let document = serde_json::json!({
                            "name": format!("{name}-copy"),
                            "config": config,
                        });
                        return Some(SessionOutcome::CreateConnector {
                            document: json::to_pretty(&document),
                        });
                    }
                    Err(e) => self.notice = Some(Notice::error(e.to_string())),
                }
            }

            Action::ToggleLineNumbers => {
                if let View::Document(doc) = &mut self.view {
                    doc.show_line_numbers = !doc.show_line_numbers;
                    // The gutter changes the available width; rewrap on the
                    // next render pass.
                    doc.wrapped_width = None;
                }
            }

            Action::OpenInEditor => {
                if let View::Document(doc) = &self.view {
                    return Some(SessionOutcome::OpenEditor {
                        text: doc.model.text().to_owned(),
                    });
                }
            }

            Action::CopyDocument => {
                if let View::Document(doc) = &self.view {
                    match editor::copy_to_clipboard(doc.model.text()) {
                        Ok(()) => {
                            self.view = View::List;
                            self.notice = Some(Notice::info("copied to clipboard"));
                        }
                        Err(e) => self.notice = Some(Notice::error(e.to_string())),
                    }
                }
            }

            Action::CloseDocument => {
                // Drop the document state; the list selection was never
                // touched, so the prior view comes back as it was.
                self.view = View::List;
            }
        }

        None
    }

    fn selected_name(&self) -> Option<String> {
        self.connectors.current().map(|s| s.name.clone())
    }

    /// Fetch a detail document and switch to DOCUMENT mode. A failed fetch
    /// aborts the transition; the list view stays as it is.
    async fn open_document(&mut self, kind: DocKind) {
        let Some(name) = self.selected_name() else {
            return;
        };
        let fetched = match kind {
            DocKind::Overview => self.repo.fetch_overview(&name).await,
            DocKind::Status => self.repo.fetch_status(&name).await,
            DocKind::Config => self.repo.fetch_config(&name).await,
            DocKind::Tasks => self.repo.fetch_tasks(&name).await,
        };
        match fetched {
            Ok(value) => {
                info!("opening {kind} for {name}");
                self.view =
                    View::Document(DocumentView::new(name, kind, json::to_pretty_sorted(&value)));
            }
            Err(e) => {
                warn!("failed to open {kind} for {name}: {e}");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    /// Restart/pause/resume the selected connector, then refresh just that
    /// row. A failed refresh leaves the row at its last known-good value.
    async fn row_action(&mut self, verb: RowVerb) {
        let Some(index) = self.connectors.selected() else {
            return;
        };
        let Some(name) = self.selected_name() else {
            return;
        };

        let result = match verb {
            RowVerb::Restart => self.repo.restart(&name).await,
            RowVerb::Pause => self.repo.pause(&name).await,
            RowVerb::Resume => self.repo.resume(&name).await,
        };
        if let Err(e) = result {
            self.notice = Some(Notice::error(e.to_string()));
            return;
        }

        match refresh_row(&self.repo, &name).await {
            Ok(row) => {
                self.connectors.replace_at(index, row);
                self.notice = Some(Notice::info(format!("{name} {}", verb.done_label())));
            }
            Err(e) => {
                warn!("row refresh after {verb:?} failed: {e}");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    /// Full refresh with live progress repaints between network calls.
    /// Nothing is committed unless every row loads, so a failure leaves
    /// the previously displayed list intact.
    async fn refresh(&mut self, tui: &mut Tui) {
        self.notice = None;
        let mut painter = ProgressPainter {
            tui,
            cluster_url: self.cluster_url.clone(),
            name_pad: 0,
        };
        match refresh_all(&self.repo, &mut painter).await {
            Ok(rows) => self.connectors.replace_all(rows),
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Min(1),    // content
            Constraint::Length(1), // status line
            Constraint::Length(1), // legend
        ])
        .split(frame.area());

        draw_header(frame, layout[0], &self.cluster_url);

        match &mut self.view {
            View::List => draw_connector_table(frame, layout[1], &self.connectors),
            View::Document(doc) => draw_document(frame, layout[1], doc),
        }

        self.draw_status_line(frame, layout[2]);

        let items = match &self.view {
            View::List => legend::list_legend(),
            View::Document(_) => legend::document_legend(editor::clipboard_supported()),
        };
        frame.render_widget(Paragraph::new(legend::legend_line(&items)), layout[3]);
    }

    fn draw_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(notice) = &self.notice {
            let style = match notice.level {
                crate::action::NoticeLevel::Info => theme::notice_info(),
                crate::action::NoticeLevel::Error => theme::notice_error(),
            };
            // Errors can be multi-line (remote bodies); keep the first line.
            let first = notice.message.lines().next().unwrap_or_default();
            Line::from(Span::styled(format!(" {first}"), style))
        } else {
            match &self.view {
                View::List => Line::from(Span::styled(
                    format!(" {} connectors", self.connectors.len()),
                    theme::notice_info(),
                )),
                View::Document(doc) => Line::from(Span::styled(
                    format!(" {} · {}", doc.connector, doc.kind),
                    theme::notice_info(),
                )),
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

// ── Key decoding ─────────────────────────────────────────────────────

/// Map a key press to an action for the current view. Mode-specific keys
/// are decoded against the view variant, never against a shared flag.
fn action_for_key(view: &View, clipboard: bool, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match view {
        View::List => match key.code {
            KeyCode::Up => Some(Action::SelectPrevious),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('o') => Some(Action::OpenDocument(DocKind::Overview)),
            KeyCode::Char('s') => Some(Action::OpenDocument(DocKind::Status)),
            KeyCode::Char('c') => Some(Action::OpenDocument(DocKind::Config)),
            KeyCode::Char('t') => Some(Action::OpenDocument(DocKind::Tasks)),
            KeyCode::Char('u') => Some(Action::UpdateConfig),
            KeyCode::Char('d') => Some(Action::Duplicate),
            KeyCode::Char('x') => Some(Action::Row(RowVerb::Restart)),
            KeyCode::Char('p') => Some(Action::Row(RowVerb::Pause)),
            KeyCode::Char('e') => Some(Action::Row(RowVerb::Resume)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        View::Document(_) => match key.code {
            KeyCode::Up => Some(Action::SelectPrevious),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char('n') => Some(Action::ToggleLineNumbers),
            KeyCode::Char('o') => Some(Action::OpenInEditor),
            KeyCode::Char('y') if clipboard => Some(Action::CopyDocument),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::CloseDocument),
            _ => None,
        },
    }
}

// ── Frame pieces ─────────────────────────────────────────────────────

fn draw_header(frame: &mut Frame, area: Rect, cluster_url: &str) {
    let line = Line::from(Span::raw(cluster_url.to_owned())).centered();
    frame.render_widget(Paragraph::new(line).style(theme::header()), area);
}

fn draw_connector_table(frame: &mut Frame, area: Rect, connectors: &ListModel<ConnectorSummary>) {
    let header = Row::new(vec![
        Cell::from("STATE"),
        Cell::from("TYPE"),
        Cell::from("TASKS"),
        Cell::from("WORKER"),
        Cell::from("TOPIC"),
        Cell::from("NAME"),
    ])
    .style(theme::table_header());

    let rows: Vec<Row> = connectors
        .items()
        .iter()
        .map(|summary| {
            Row::new(vec![
                Cell::from(state_indicator::state_span(summary.state)),
                Cell::from(summary.kind.to_string()),
                Cell::from(summary.task_count.to_string()),
                Cell::from(summary.worker_id.clone()),
                Cell::from(summary.topic.clone().unwrap_or_default()),
                Cell::from(summary.name.clone()),
            ])
            .style(theme::table_row())
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(20),
        Constraint::Min(12),
        Constraint::Min(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(theme::table_selected());

    let mut state = TableState::default();
    state.select(connectors.selected());
    frame.render_stateful_widget(table, area, &mut state);
}

/// Paint the wrapped document, re-wrapping first if the width or the
/// line-number gutter changed since the last pass.
fn draw_document(frame: &mut Frame, area: Rect, doc: &mut DocumentView) {
    let gutter = if doc.show_line_numbers {
        digits(doc.model.logical_line_count()) + 1
    } else {
        0
    };
    let width = (area.width as usize).saturating_sub(gutter).max(1);
    if doc.wrapped_width != Some(width) {
        doc.model.rewrap(width);
        doc.wrapped_width = Some(width);
    }

    // The selection index is the top visible line.
    let top = doc.model.lines().selected().unwrap_or(0);
    let height = area.height as usize;

    let lines: Vec<Line> = doc
        .model
        .lines()
        .items()
        .iter()
        .skip(top)
        .take(height)
        .map(|display| {
            let mut spans = Vec::with_capacity(2);
            if gutter > 0 {
                let number = display
                    .number
                    .map(|n| n.to_string())
                    .unwrap_or_default();
                spans.push(Span::styled(
                    format!("{number:>width$} ", width = gutter - 1),
                    theme::line_number(),
                ));
            }
            spans.push(Span::raw(display.text.clone()));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn digits(n: usize) -> usize {
    n.max(1).ilog10() as usize + 1
}

// ── Refresh progress ─────────────────────────────────────────────────

/// Observer that repaints a progress frame after every refresh signal, so
/// the operator sees live progress even though the loop is synchronous.
struct ProgressPainter<'a> {
    tui: &'a mut Tui,
    cluster_url: String,
    /// Longest connector name, for a stable status line.
    name_pad: usize,
}

impl ProgressPainter<'_> {
    fn paint(&mut self, message: &str) {
        let url = self.cluster_url.clone();
        // Progress painting is best-effort; a draw failure surfaces on the
        // next real frame anyway.
        let _ = self.tui.draw(|frame| {
            let layout = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

            draw_header(frame, layout[0], &url);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" {message}"),
                    theme::notice_info(),
                ))),
                layout[2],
            );
            frame.render_widget(
                Paragraph::new(legend::legend_line(&legend::list_legend())),
                layout[3],
            );
        });
    }
}

impl RefreshObserver for ProgressPainter<'_> {
    fn on_begin(&mut self) {
        self.paint("fetching connector names...");
    }

    fn on_names_fetched(&mut self, names: &[String]) {
        self.name_pad = names.iter().map(String::len).max().unwrap_or(0);
        self.paint(&format!("fetched {} connector names", names.len()));
    }

    fn on_item_start(&mut self, index: usize, total: usize, name: &str) {
        let pad = self.name_pad;
        self.paint(&format!("loading {index}/{total} {name:<pad$}"));
    }

    fn on_complete(&mut self) {
        self.paint("complete");
    }
}
