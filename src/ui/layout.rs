use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const CONTROLS_HEIGHT: u16 = 4;
pub const MIN_PANEL_WIDTH: u16 = 14;
pub const MIN_HEIGHT: u16 = 14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLayout {
    pub panels: Vec<Rect>,
    pub controls: Rect,
    pub status: Rect,
}

/// Smallest terminal that fits `fleets` panels side by side.
#[must_use]
pub fn minimum_size(fleets: usize) -> (u16, u16) {
    let fleets = u16::try_from(fleets).unwrap_or(u16::MAX).max(1);
    (MIN_PANEL_WIDTH.saturating_mul(fleets), MIN_HEIGHT)
}

#[must_use]
pub fn scene_layout(area: Rect, fleets: usize) -> SceneLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let count = u32::try_from(fleets).unwrap_or(1).max(1);
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(rows[0])
        .to_vec();

    SceneLayout {
        panels,
        controls: rows[1],
        status: rows[2],
    }
}

#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
