use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    frame.render_widget(Paragraph::new(status_line(state, theme)), area);
}

#[must_use]
pub fn status_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let (mode_label, mode_color) = match state.mode {
        AppMode::Running => ("▶ running", theme.accent),
        AppMode::Paused => ("⏸ paused", theme.warning),
        AppMode::Quit => ("■ stopping", theme.muted_text),
    };
    let muted = Style::default().fg(theme.muted_text);

    let mut spans = vec![
        Span::styled(
            mode_label,
            Style::default()
                .fg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}ms tick", state.tick_ms), muted),
        Span::styled(
            format!(
                "  ascent {}",
                if state.linked_ascent { "linked" } else { "per fleet" }
            ),
            muted,
        ),
    ];
    if let Some(err) = &state.last_error {
        spans.push(Span::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(theme.warning),
        ));
    }
    spans.push(Span::styled("  ? help  q quit", muted));
    Line::from(spans)
}
