//! One fleet's panel: balloons painted on a braille canvas.
//!
//! Scene coordinates grow downward; the canvas grows upward. Geometry is
//! flipped once with [`to_canvas`] before it is handed to ratatui.

use kurbo::{Affine, BezPath, ParamCurve, PathSeg, Point, Rect as GeoRect};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Line, Painter, Shape},
    },
};

use crate::{
    app::state::AppState,
    domain::{ascension::Ascension, geometry::BalloonShape},
    ui::theme::Theme,
};

const CURVE_STEPS: usize = 8;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, index: usize) {
    let Some(fleet) = state.scene.fleet(index) else {
        return;
    };
    let selected = index == state.selected_fleet;
    let block = panel_block(theme, index, fleet.balloon_count(), selected);
    let inner = block.inner(area);

    let width = f64::from(state.scene.panel_width());
    let height = f64::from(state.scene.panel_height());
    let sampling = Sampling::for_area(inner, width, height);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(theme.sky)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| paint_fleet(ctx, fleet, theme, sampling, width, height));
    frame.render_widget(canvas, area);
}

fn panel_block(theme: &Theme, index: usize, balloons: usize, selected: bool) -> Block<'static> {
    let border_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(TextLine::from(vec![
            Span::styled(format!(" Fleet {} ", index + 1), border_style),
            Span::styled(
                format!("{balloons} balloons "),
                Style::default().fg(theme.muted_text),
            ),
        ]))
}

/// Distance between fill samples, one per braille dot.
#[derive(Debug, Clone, Copy)]
pub struct Sampling {
    pub step_x: f64,
    pub step_y: f64,
}

impl Sampling {
    #[must_use]
    pub fn for_area(area: Rect, world_width: f64, world_height: f64) -> Self {
        let dots_x = f64::from(area.width.max(1)) * 2.0;
        let dots_y = f64::from(area.height.max(1)) * 4.0;
        Self {
            step_x: world_width / dots_x,
            step_y: world_height / dots_y,
        }
    }
}

/// Flips scene coordinates into canvas coordinates for a panel of `height`.
#[must_use]
pub fn to_canvas(height: f64) -> Affine {
    Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, height])
}

fn paint_fleet(
    ctx: &mut Context<'_>,
    fleet: &dyn Ascension,
    theme: &Theme,
    sampling: Sampling,
    width: f64,
    height: f64,
) {
    let panel = GeoRect::new(0.0, 0.0, width, height);
    let flip = to_canvas(height);
    let shapes: Vec<BalloonShape> = fleet
        .balloons()
        .iter()
        .map(|balloon| balloon.shape())
        .filter(|shape| visible(shape.bounds(), panel))
        .collect();

    for shape in &shapes {
        let envelope = flip * shape.envelope.clone();
        ctx.draw(&Filled {
            area: &envelope,
            color: theme.paint(shape.envelope_color),
            sampling,
        });
        let gondola = flip.transform_rect_bbox(shape.gondola);
        ctx.draw(&Filled {
            area: &gondola,
            color: theme.paint(shape.gondola_color),
            sampling,
        });
    }

    ctx.layer();

    for shape in &shapes {
        for (from, to) in outline_segments(shape, flip) {
            ctx.draw(&Line::new(from.x, from.y, to.x, to.y, theme.outline));
        }
    }
}

fn visible(bounds: GeoRect, panel: GeoRect) -> bool {
    bounds.x1 >= panel.x0
        && bounds.x0 <= panel.x1
        && bounds.y1 >= panel.y0
        && bounds.y0 <= panel.y1
}

/// Straight segments tracing the envelope, gondola and cables.
#[must_use]
pub fn outline_segments(shape: &BalloonShape, flip: Affine) -> Vec<(Point, Point)> {
    let mut segments = Vec::new();
    let envelope: BezPath = flip * shape.envelope.clone();
    for seg in envelope.segments() {
        match seg {
            PathSeg::Line(line) => segments.push((line.p0, line.p1)),
            curve => {
                let mut prev = curve.start();
                for step in 1..=CURVE_STEPS {
                    let t = step as f64 / CURVE_STEPS as f64;
                    let next = curve.eval(t);
                    segments.push((prev, next));
                    prev = next;
                }
            }
        }
    }

    let gondola = flip.transform_rect_bbox(shape.gondola);
    let corners = [
        Point::new(gondola.x0, gondola.y0),
        Point::new(gondola.x1, gondola.y0),
        Point::new(gondola.x1, gondola.y1),
        Point::new(gondola.x0, gondola.y1),
    ];
    for i in 0..corners.len() {
        segments.push((corners[i], corners[(i + 1) % corners.len()]));
    }

    for cable in &shape.cables {
        segments.push((flip * cable.p0, flip * cable.p1));
    }
    segments
}

/// Fills any closed kurbo shape by testing one point per braille dot.
struct Filled<'a, S> {
    area: &'a S,
    color: Color,
    sampling: Sampling,
}

impl<S: kurbo::Shape> Shape for Filled<'_, S> {
    fn draw(&self, painter: &mut Painter) {
        let bbox = self.area.bounding_box();
        let Sampling { step_x, step_y } = self.sampling;
        if step_x <= 0.0 || step_y <= 0.0 {
            return;
        }
        let mut y = bbox.y0 + step_y / 2.0;
        while y < bbox.y1 {
            let mut x = bbox.x0 + step_x / 2.0;
            while x < bbox.x1 {
                if self.area.contains(Point::new(x, y))
                    && let Some((px, py)) = painter.get_point(x, y)
                {
                    painter.paint(px, py, self.color);
                }
                x += step_x;
            }
            y += step_y;
        }
    }
}
