//! Connector state cell — ●/◌/◐/○ with color mapping.

use ratatui::style::Style;
use ratatui::text::Span;

use kconnect_core::ConnectorState;

use crate::theme;

/// Returns a styled `Span` with the state dot and name, e.g. `● RUNNING`.
pub fn state_span(state: ConnectorState) -> Span<'static> {
    let (symbol, color) = match state {
        ConnectorState::Running => ("●", theme::RUNNING_GREEN),
        ConnectorState::Paused => ("◐", theme::PAUSED_YELLOW),
        ConnectorState::Failed => ("○", theme::FAILED_RED),
        ConnectorState::Unassigned => ("◌", theme::DIM_WHITE),
    };
    Span::styled(format!("{symbol} {state}"), Style::default().fg(color))
}
