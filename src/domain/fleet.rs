use rand::Rng;
use serde::Serialize;

use super::{
    balloon::Balloon,
    controls::{ControlEvent, ParameterChange},
};

/// An ordered group of balloons sharing one ascent speed and one jitter
/// intensity. Insertion order is draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fleet {
    balloons: Vec<Balloon>,
    ascent_speed: i32,
    jitter_intensity: u32,
}

impl Fleet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, balloon: Balloon) {
        self.balloons.push(balloon);
    }

    #[must_use]
    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balloons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balloons.is_empty()
    }

    #[must_use]
    pub fn ascent_speed(&self) -> i32 {
        self.ascent_speed
    }

    #[must_use]
    pub fn jitter_intensity(&self) -> u32 {
        self.jitter_intensity
    }

    pub fn set_ascent_speed(&mut self, speed: i32) {
        self.ascent_speed = speed;
    }

    pub fn set_jitter_intensity(&mut self, intensity: u32) {
        self.jitter_intensity = intensity;
    }

    pub fn apply(&mut self, event: &ControlEvent) {
        match event.change {
            ParameterChange::AscentSpeed(speed) => self.set_ascent_speed(speed),
            ParameterChange::JitterIntensity(intensity) => self.set_jitter_intensity(intensity),
        }
    }

    pub fn translate_all(&mut self, dx: i32, dy: i32) {
        for balloon in &mut self.balloons {
            balloon.translate(dx, dy);
        }
    }

    /// Moves every balloon up by the current ascent speed. Screen `y` grows
    /// downward, so a positive speed decreases `y`.
    pub fn ascend(&mut self) {
        self.translate_all(0, self.ascent_speed.saturating_neg());
    }

    /// Nudges each balloon sideways by an independent draw from
    /// `[0, intensity]`, shifted down by `intensity / 2`.
    pub fn apply_jitter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let intensity = i32::try_from(self.jitter_intensity).unwrap_or(i32::MAX);
        if intensity == 0 {
            return;
        }
        for balloon in &mut self.balloons {
            let jitter = rng.random_range(0..=intensity);
            balloon.translate(jitter - intensity / 2, 0);
        }
    }

    /// One animation step.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ascend();
        self.apply_jitter(rng);
    }

    /// Swaps in a new set of balloons, keeping the current knob values.
    pub fn replace_balloons(&mut self, balloons: Vec<Balloon>) {
        self.balloons = balloons;
    }
}
