use rand::{Rng, seq::IndexedRandom};

use super::{balloon::Balloon, error::SceneError, fleet::Fleet, geometry::EnvelopeColor};

pub const BASE_UNIT: i32 = 50;
pub const MIN_BALLOONS: usize = 3;
pub const MAX_BALLOONS: usize = 7;
pub const MIN_BASE_UNIT: i32 = 2;
pub const MAX_BASE_UNIT: i32 = 200;

/// Parameters for randomly generated fleets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetBlueprint {
    pub base_unit: i32,
    pub min_balloons: usize,
    pub max_balloons: usize,
}

impl Default for FleetBlueprint {
    fn default() -> Self {
        Self {
            base_unit: BASE_UNIT,
            min_balloons: MIN_BALLOONS,
            max_balloons: MAX_BALLOONS,
        }
    }
}

impl FleetBlueprint {
    /// Unit sizes are drawn from `[base/2, base/2 + 2*base)`.
    #[must_use]
    pub fn unit_range(&self) -> std::ops::Range<i32> {
        let min = self.base_unit / 2;
        min..min.saturating_add(self.base_unit.saturating_mul(2))
    }

    /// Largest unit the blueprint can produce.
    #[must_use]
    pub fn max_unit(&self) -> i32 {
        self.unit_range().end - 1
    }

    pub fn validate(&self, panel_width: i32) -> Result<(), SceneError> {
        if !(MIN_BASE_UNIT..=MAX_BASE_UNIT).contains(&self.base_unit) {
            return Err(SceneError::InvalidConfig(format!(
                "base unit must be within {MIN_BASE_UNIT}..={MAX_BASE_UNIT}, got {}",
                self.base_unit
            )));
        }
        if self.min_balloons == 0 || self.min_balloons > self.max_balloons {
            return Err(SceneError::InvalidConfig(format!(
                "balloon count range {}..={} is empty",
                self.min_balloons, self.max_balloons
            )));
        }
        let max_unit = self.max_unit();
        if panel_width <= max_unit {
            return Err(SceneError::PanelTooNarrow {
                width: panel_width,
                max_unit,
            });
        }
        Ok(())
    }

    /// One balloon of random size and color, resting on the baseline at a
    /// random horizontal offset.
    pub fn random_balloon<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        width: i32,
        height: i32,
    ) -> Result<Balloon, SceneError> {
        let unit = rng.random_range(self.unit_range());
        if width <= unit {
            return Err(SceneError::PanelTooNarrow {
                width,
                max_unit: unit,
            });
        }
        let x = rng.random_range(0..width - unit);
        let y = f64::from(height - unit);
        let color = EnvelopeColor::PALETTE
            .choose(rng)
            .copied()
            .unwrap_or(EnvelopeColor::Prussian);
        Balloon::new(x, y, unit, color)
    }

    /// A fleet of `min_balloons..=max_balloons` random balloons.
    pub fn create_fleet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        width: i32,
        height: i32,
    ) -> Result<Fleet, SceneError> {
        self.validate(width)?;
        let count = rng.random_range(self.min_balloons..=self.max_balloons);
        let mut fleet = Fleet::new();
        for _ in 0..count {
            fleet.push(self.random_balloon(rng, width, height)?);
        }
        Ok(fleet)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn default_unit_range_matches_half_to_two_and_a_half_base() {
        let blueprint = FleetBlueprint::default();
        assert_eq!(blueprint.unit_range(), 25..125);
        assert_eq!(blueprint.max_unit(), 124);
    }

    #[test]
    fn fleets_rest_on_baseline() {
        let mut rng = StdRng::seed_from_u64(42);
        let blueprint = FleetBlueprint::default();
        for _ in 0..50 {
            let fleet = blueprint
                .create_fleet(&mut rng, 400, 600)
                .expect("fleet generated");
            assert!((3..=7).contains(&fleet.len()));
            for balloon in fleet.balloons() {
                assert!((balloon.anchor_bottom() - 600.0).abs() < f64::EPSILON);
                assert!((25..125).contains(&balloon.unit()));
                assert!(balloon.x() >= 0);
                assert!(balloon.x() < 400 - balloon.unit());
            }
        }
    }

    #[test]
    fn new_fleets_start_at_rest() {
        let mut rng = StdRng::seed_from_u64(1);
        let fleet = FleetBlueprint::default()
            .create_fleet(&mut rng, 400, 600)
            .expect("fleet generated");
        assert_eq!(fleet.ascent_speed(), 0);
        assert_eq!(fleet.jitter_intensity(), 0);
    }

    #[test]
    fn narrow_panel_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = FleetBlueprint::default()
            .create_fleet(&mut rng, 124, 600)
            .expect_err("too narrow");
        assert_eq!(
            err,
            SceneError::PanelTooNarrow {
                width: 124,
                max_unit: 124
            }
        );
    }

    #[test]
    fn inverted_count_range_is_rejected() {
        let blueprint = FleetBlueprint {
            min_balloons: 5,
            max_balloons: 2,
            ..FleetBlueprint::default()
        };
        assert!(matches!(
            blueprint.validate(400),
            Err(SceneError::InvalidConfig(_))
        ));
    }

    #[test]
    fn oversized_base_unit_is_rejected() {
        let blueprint = FleetBlueprint {
            base_unit: 1_500_000_000,
            ..FleetBlueprint::default()
        };
        assert!(matches!(
            blueprint.validate(i32::MAX),
            Err(SceneError::InvalidConfig(_))
        ));
        assert!(blueprint.max_unit() > blueprint.base_unit);
    }

    #[test]
    fn single_balloon_wider_than_panel_is_an_error() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = FleetBlueprint::default()
            .random_balloon(&mut rng, 20, 600)
            .expect_err("panel narrower than any unit");
        assert!(matches!(
            err,
            SceneError::PanelTooNarrow { width: 20, max_unit } if max_unit >= 25
        ));
    }

    #[test]
    fn same_seed_same_fleet() {
        let blueprint = FleetBlueprint::default();
        let a = blueprint
            .create_fleet(&mut StdRng::seed_from_u64(5), 400, 600)
            .expect("fleet");
        let b = blueprint
            .create_fleet(&mut StdRng::seed_from_u64(5), 400, 600)
            .expect("fleet");
        assert_eq!(a, b);
    }
}
