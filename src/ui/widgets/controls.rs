use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::controls::{Parameter, Slider},
    ui::theme::Theme,
};

const LABEL_WIDTH: usize = 7;
const VALUE_WIDTH: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let count = u32::try_from(state.fleet_count()).unwrap_or(1).max(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (index, (controls, column)) in state.controls.iter().zip(columns.iter()).enumerate() {
        let selected = index == state.selected_fleet;
        let border_style = if selected {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Controls {} ", index + 1));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let track_width = usize::from(inner.width).saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 2);
        let linked = state.linked_ascent;
        let lines = vec![
            slider_line(&controls.ascent, track_width, theme, selected, linked),
            slider_line(&controls.jitter, track_width, theme, selected, false),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn slider_line(
    slider: &Slider,
    track_width: usize,
    theme: &Theme,
    selected: bool,
    linked: bool,
) -> Line<'static> {
    let label_style = if selected {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_text)
    };
    let label = if linked {
        format!("{:<width$}", format!("{}*", slider.parameter().label()), width = LABEL_WIDTH)
    } else {
        format!("{:<width$}", slider.parameter().label(), width = LABEL_WIDTH)
    };
    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(
            slider_track(slider, track_width),
            Style::default().fg(theme.track),
        ),
        Span::styled(
            format!(" {:>width$}", format_value(slider), width = VALUE_WIDTH),
            Style::default().fg(theme.accent),
        ),
    ])
}

fn format_value(slider: &Slider) -> String {
    match slider.parameter() {
        Parameter::AscentSpeed => format!("{:+}", slider.value()),
        Parameter::JitterIntensity => slider.value().to_string(),
    }
}

/// Text rendering of a slider: major ticks as `┼`, the knob as `●`.
#[must_use]
pub fn slider_track(slider: &Slider, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let range = slider.parameter().range();
    let span = f64::from(range.end() - range.start());
    let cell_for = |value: i32| -> usize {
        let fraction = f64::from(value - range.start()) / span;
        (fraction * (width - 1) as f64).round() as usize
    };

    let mut cells = vec!['─'; width];
    let tick = slider.parameter().major_tick();
    let mut value = *range.start();
    while value <= *range.end() {
        cells[cell_for(value)] = '┼';
        value += tick;
    }
    cells[cell_for(slider.value())] = '●';
    cells.into_iter().collect()
}
