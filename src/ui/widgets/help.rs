use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(Clear, area);

    let panel_style = Style::default().fg(theme.text).bg(theme.surface);
    let block = help_block(theme, panel_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(help_lines(theme))
        .style(panel_style)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}

fn help_block(theme: &Theme, panel_style: Style) -> Block<'static> {
    Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .style(panel_style)
        .border_style(Style::default().fg(theme.accent))
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_section(
        &mut lines,
        theme,
        "Fleets",
        [
            "<- / -> or Tab / Shift+Tab select fleet  |  1..9 jump to fleet",
            "r relaunch every fleet from the ground",
        ],
    );
    push_section(
        &mut lines,
        theme,
        "Sliders",
        [
            "Up / Down ascent speed +-1  |  PgUp / PgDn +-5  (range -10..10)",
            "+ / - or ] / [ jitter +-1  (range 0..10)",
            "0 reset the selected fleet's sliders",
            "l link ascent: one slider drives every fleet",
        ],
    );
    push_section(
        &mut lines,
        theme,
        "Animation",
        ["Space pause / resume", "q / Esc quit  |  Ctrl+C immediate quit"],
    );
    lines.push(Line::from(Span::styled(
        "Esc / ? / F1 closes this help",
        Style::default()
            .fg(theme.muted_text)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

fn push_section<const N: usize>(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    title: &'static str,
    body: [&'static str; N],
) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(body.into_iter().map(Line::from));
    lines.push(Line::from(""));
}
