pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    ui::{
        layout::{centered_rect, minimum_size, scene_layout},
        theme::{Theme, detect_color_capability, theme_for},
    },
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = theme_for(state.theme, detect_color_capability());
    render_with_theme(frame, state, &theme);
}

pub fn render_with_theme(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    let (min_width, min_height) = minimum_size(state.fleet_count());

    if area.width < min_width || area.height < min_height {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {min_width}x{min_height}."
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("balloon-ascension"),
        );
        frame.render_widget(warning, area);
        return;
    }

    let layout = scene_layout(area, state.fleet_count());
    for (index, panel) in layout.panels.iter().enumerate() {
        widgets::sky::render(frame, *panel, state, theme, index);
    }
    widgets::controls::render(frame, layout.controls, state, theme);
    widgets::status::render(frame, layout.status, state, theme);

    if state.help_open {
        widgets::help::render(frame, centered_rect(70, 70, area), theme);
    }
}
