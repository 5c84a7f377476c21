use serde::Serialize;

use super::{
    error::SceneError,
    geometry::{BalloonShape, CABLE_LENGTH_RATIO, EnvelopeColor, GONDOLA_WIDTH_RATIO},
};

/// A single hot-air balloon anchored at the top-left corner of its envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balloon {
    x: i32,
    y: f64,
    unit: i32,
    color: EnvelopeColor,
}

impl Balloon {
    pub fn new(x: i32, y: f64, unit: i32, color: EnvelopeColor) -> Result<Self, SceneError> {
        if unit <= 0 {
            return Err(SceneError::InvalidUnit(unit));
        }
        Ok(Self { x, y, unit, color })
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn unit(&self) -> i32 {
        self.unit
    }

    #[must_use]
    pub fn color(&self) -> EnvelopeColor {
        self.color
    }

    #[must_use]
    pub fn gondola_width(&self) -> f64 {
        GONDOLA_WIDTH_RATIO * f64::from(self.unit)
    }

    #[must_use]
    pub fn cable_length(&self) -> f64 {
        CABLE_LENGTH_RATIO * f64::from(self.unit)
    }

    /// Lower edge of the envelope's bounding square; the factory rests this on
    /// the panel baseline.
    #[must_use]
    pub fn anchor_bottom(&self) -> f64 {
        self.y + f64::from(self.unit)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y += f64::from(dy);
    }

    #[must_use]
    pub fn shape(&self) -> BalloonShape {
        BalloonShape::new(self.x, self.y, self.unit, self.color)
    }
}
