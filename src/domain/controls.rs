//! Typed control messages.
//!
//! A slider never touches a fleet directly: moving it yields a
//! [`ControlEvent`] which the scene routes to the fleet(s) it targets.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    AscentSpeed,
    JitterIntensity,
}

impl Parameter {
    #[must_use]
    pub const fn range(self) -> RangeInclusive<i32> {
        match self {
            Parameter::AscentSpeed => -10..=10,
            Parameter::JitterIntensity => 0..=10,
        }
    }

    #[must_use]
    pub const fn major_tick(self) -> i32 {
        match self {
            Parameter::AscentSpeed => 5,
            Parameter::JitterIntensity => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Parameter::AscentSpeed => "Ascent",
            Parameter::JitterIntensity => "Jitter",
        }
    }

    #[must_use]
    pub fn clamp(self, value: i32) -> i32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetTarget {
    One(usize),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterChange {
    AscentSpeed(i32),
    JitterIntensity(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub target: FleetTarget,
    pub change: ParameterChange,
}

impl ControlEvent {
    #[must_use]
    pub fn ascent(target: FleetTarget, speed: i32) -> Self {
        Self {
            target,
            change: ParameterChange::AscentSpeed(speed),
        }
    }

    #[must_use]
    pub fn jitter(target: FleetTarget, intensity: u32) -> Self {
        Self {
            target,
            change: ParameterChange::JitterIntensity(intensity),
        }
    }
}

/// A bounded integer control for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    parameter: Parameter,
    value: i32,
}

impl Slider {
    /// Sliders start at zero: stationary and with no jitter.
    #[must_use]
    pub fn new(parameter: Parameter) -> Self {
        Self {
            parameter,
            value: 0,
        }
    }

    #[must_use]
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Position of the knob in `0.0..=1.0` along the track.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        let range = self.parameter.range();
        let span = f64::from(range.end() - range.start());
        f64::from(self.value - range.start()) / span
    }

    pub fn step(&mut self, delta: i32, target: FleetTarget) -> Option<ControlEvent> {
        self.set(self.value.saturating_add(delta), target)
    }

    /// Moves the knob, clamping into range. Returns the message to publish,
    /// or `None` when the knob did not move.
    pub fn set(&mut self, value: i32, target: FleetTarget) -> Option<ControlEvent> {
        let clamped = self.parameter.clamp(value);
        if clamped == self.value {
            return None;
        }
        self.value = clamped;
        Some(self.event(target))
    }

    #[must_use]
    pub fn event(&self, target: FleetTarget) -> ControlEvent {
        match self.parameter {
            Parameter::AscentSpeed => ControlEvent::ascent(target, self.value),
            Parameter::JitterIntensity => {
                ControlEvent::jitter(target, u32::try_from(self.value).unwrap_or(0))
            }
        }
    }
}

/// The pair of sliders attached to one fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetControls {
    pub ascent: Slider,
    pub jitter: Slider,
}

impl Default for FleetControls {
    fn default() -> Self {
        Self {
            ascent: Slider::new(Parameter::AscentSpeed),
            jitter: Slider::new(Parameter::JitterIntensity),
        }
    }
}

impl FleetControls {
    #[must_use]
    pub fn slider(&self, parameter: Parameter) -> &Slider {
        match parameter {
            Parameter::AscentSpeed => &self.ascent,
            Parameter::JitterIntensity => &self.jitter,
        }
    }

    pub fn slider_mut(&mut self, parameter: Parameter) -> &mut Slider {
        match parameter {
            Parameter::AscentSpeed => &mut self.ascent,
            Parameter::JitterIntensity => &mut self.jitter,
        }
    }
}
