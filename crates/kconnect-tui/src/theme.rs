//! Palette and semantic styling for the console.

use ratatui::style::{Color, Modifier, Style};

// ── Palette ───────────────────────────────────────────────────────────

pub const RUNNING_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const FAILED_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const PAUSED_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const ACCENT_CYAN: Color = Color::Rgb(139, 233, 253); // #8be9fd
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const GUTTER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36

// ── Semantic Styles ───────────────────────────────────────────────────

/// Header bar (cluster URL).
pub fn header() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(DIM_WHITE)
        .add_modifier(Modifier::BOLD)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Key cap in the legend bar, e.g. `[R]`.
pub fn legend_key() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT_CYAN)
}

/// Key description in the legend bar.
pub fn legend_description() -> Style {
    Style::default().fg(Color::Black).bg(DIM_WHITE)
}

/// Line-number gutter in document mode.
pub fn line_number() -> Style {
    Style::default().fg(GUTTER_GRAY)
}

/// Status line for progress and informational notices.
pub fn notice_info() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Status line for errors.
pub fn notice_error() -> Style {
    Style::default().fg(FAILED_RED).add_modifier(Modifier::BOLD)
}
