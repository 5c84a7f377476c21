//! Vector geometry of a single balloon.
//!
//! Coordinates follow screen conventions: `x` grows to the right and `y` grows
//! downward, so "below" means a larger `y`. Every dimension is derived from the
//! balloon's unit size; the anchor `(x, y)` is the top-left corner of the
//! envelope's bounding square.

use kurbo::{Arc, BezPath, Line, Point, Rect, Shape, Vec2};
use serde::{Deserialize, Serialize};

/// Tolerance used when converting the envelope arc into cubic segments.
const ARC_TOLERANCE: f64 = 0.05;

pub const GONDOLA_WIDTH_RATIO: f64 = 0.5;
pub const GONDOLA_ASPECT: f64 = 0.7;
pub const CABLE_LENGTH_RATIO: f64 = 0.3;
/// Distance from the anchor to the lower end of the envelope taper.
pub const TAPER_DEPTH_RATIO: f64 = 1.3;
const TAPER_DROP_RATIO: f64 = 0.8;
const TAPER_HALF_WIDTH_RATIO: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const GONDOLA_COLOR: Rgb = Rgb(0xbc, 0x6c, 0x25);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeColor {
    Prussian,
    Crimson,
    Tangerine,
    Saffron,
    Vanilla,
}

impl EnvelopeColor {
    pub const PALETTE: [EnvelopeColor; 5] = [
        EnvelopeColor::Prussian,
        EnvelopeColor::Crimson,
        EnvelopeColor::Tangerine,
        EnvelopeColor::Saffron,
        EnvelopeColor::Vanilla,
    ];

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            EnvelopeColor::Prussian => Rgb(0x00, 0x30, 0x49),
            EnvelopeColor::Crimson => Rgb(0xd6, 0x28, 0x28),
            EnvelopeColor::Tangerine => Rgb(0xf7, 0x7f, 0x00),
            EnvelopeColor::Saffron => Rgb(0xfc, 0xbf, 0x49),
            EnvelopeColor::Vanilla => Rgb(0xea, 0xe2, 0xb7),
        }
    }
}

fn center_x(x: i32, unit: i32) -> f64 {
    f64::from(x) + f64::from(unit) / 2.0
}

/// Closed outline of the envelope: a semicircle of diameter `unit` across the
/// top, tapering down to a narrow neck `0.8 * unit` below the arc's center.
#[must_use]
pub fn envelope_outline(x: i32, y: f64, unit: i32) -> BezPath {
    let u = f64::from(unit);
    let cx = center_x(x, unit);
    let cy = y + u * 0.5;
    let neck_y = cy + u * TAPER_DROP_RATIO;

    let arc = Arc {
        center: Point::new(cx, cy),
        radii: Vec2::new(u / 2.0, u / 2.0),
        start_angle: std::f64::consts::PI,
        sweep_angle: std::f64::consts::PI,
        x_rotation: 0.0,
    };

    let mut path = BezPath::new();
    path.move_to(Point::new(cx - u * 0.5, cy));
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path.line_to(Point::new(cx + u * TAPER_HALF_WIDTH_RATIO, neck_y));
    path.line_to(Point::new(cx - u * TAPER_HALF_WIDTH_RATIO, neck_y));
    path.close_path();
    path
}

/// Basket hanging one cable length below the envelope neck.
#[must_use]
pub fn gondola(x: i32, y: f64, unit: i32) -> Rect {
    let u = f64::from(unit);
    let width = GONDOLA_WIDTH_RATIO * u;
    let top = y + TAPER_DEPTH_RATIO * u + CABLE_LENGTH_RATIO * u;
    let left = center_x(x, unit) - width * 0.5;
    Rect::from_origin_size((left, top), (width, width * GONDOLA_ASPECT))
}

/// Left and right cables, each running from the envelope neck to the matching
/// top corner of the gondola.
#[must_use]
pub fn cables(x: i32, y: f64, unit: i32) -> [Line; 2] {
    let u = f64::from(unit);
    let cx = center_x(x, unit);
    let neck_y = y + TAPER_DEPTH_RATIO * u;
    let basket = gondola(x, y, unit);

    let left = Line::new(
        (cx - u * TAPER_HALF_WIDTH_RATIO, neck_y),
        (basket.x0, basket.y0),
    );
    let right = Line::new(
        (cx + u * TAPER_HALF_WIDTH_RATIO, neck_y),
        (basket.x1, basket.y0),
    );
    [left, right]
}

/// Everything needed to paint one balloon.
#[derive(Debug, Clone)]
pub struct BalloonShape {
    pub envelope: BezPath,
    pub gondola: Rect,
    pub cables: [Line; 2],
    pub envelope_color: Rgb,
    pub gondola_color: Rgb,
}

impl BalloonShape {
    #[must_use]
    pub fn new(x: i32, y: f64, unit: i32, color: EnvelopeColor) -> Self {
        Self {
            envelope: envelope_outline(x, y, unit),
            gondola: gondola(x, y, unit),
            cables: cables(x, y, unit),
            envelope_color: color.rgb(),
            gondola_color: GONDOLA_COLOR,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.envelope.bounding_box().union(self.gondola)
    }
}
