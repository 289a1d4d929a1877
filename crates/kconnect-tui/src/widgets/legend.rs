//! Bottom legend bar — `[KEY] description` hint pairs, per mode.

use ratatui::text::{Line, Span};

use crate::theme;

/// Hints for LIST mode.
pub fn list_legend() -> Vec<(&'static str, &'static str)> {
    vec![
        ("[↑/↓]", " Navigate "),
        ("[R]", " Refresh "),
        ("[O]", " Overview "),
        ("[S]", " Status "),
        ("[C]", " Config "),
        ("[T]", " Tasks "),
        ("[U]", " Update Config "),
        ("[D]", " Duplicate "),
        ("[X]", " Restart "),
        ("[P]", " Pause "),
        ("[E]", " Resume "),
        ("[Q]", " Quit "),
    ]
}

/// Hints for DOCUMENT mode. The copy key only appears where a clipboard
/// hand-off exists.
pub fn document_legend(clipboard: bool) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![
        ("[↑/↓]", " Scroll "),
        ("[N]", " Line Numbers "),
        ("[O]", " Open in Editor "),
    ];
    if clipboard {
        items.push(("[Y]", " Copy "));
    }
    items.push(("[Q]", " Back "));
    items
}

/// Render hint pairs into one legend line.
pub fn legend_line(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (key, description) in items {
        spans.push(Span::styled(*key, theme::legend_key()));
        spans.push(Span::styled(*description, theme::legend_description()));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
