use rand::rngs::StdRng;
use serde::Serialize;

use super::{
    controls::{ControlEvent, FleetTarget},
    error::SceneError,
    factory::FleetBlueprint,
    fleet::Fleet,
};

/// Side-by-side fleets, each in its own panel of `panel_width` x
/// `panel_height` world units, sharing one random source.
#[derive(Debug)]
pub struct Scene {
    fleets: Vec<Fleet>,
    blueprint: FleetBlueprint,
    panel_width: i32,
    panel_height: i32,
    rng: StdRng,
}

#[derive(Debug, Serialize)]
pub struct SceneSnapshot<'a> {
    pub panel_width: i32,
    pub panel_height: i32,
    pub fleets: &'a [Fleet],
}

impl Scene {
    pub fn generate(
        blueprint: FleetBlueprint,
        fleet_count: usize,
        panel_width: i32,
        panel_height: i32,
        mut rng: StdRng,
    ) -> Result<Self, SceneError> {
        if fleet_count == 0 {
            return Err(SceneError::InvalidConfig(
                "a scene needs at least one fleet".to_string(),
            ));
        }
        let fleets = (0..fleet_count)
            .map(|_| blueprint.create_fleet(&mut rng, panel_width, panel_height))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(
            fleets = fleets.len(),
            balloons = fleets.iter().map(Fleet::len).sum::<usize>(),
            "scene generated"
        );
        Ok(Self {
            fleets,
            blueprint,
            panel_width,
            panel_height,
            rng,
        })
    }

    #[must_use]
    pub fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }

    #[must_use]
    pub fn fleet(&self, index: usize) -> Option<&Fleet> {
        self.fleets.get(index)
    }

    #[must_use]
    pub fn panel_width(&self) -> i32 {
        self.panel_width
    }

    #[must_use]
    pub fn panel_height(&self) -> i32 {
        self.panel_height
    }

    pub fn apply(&mut self, event: &ControlEvent) {
        match event.target {
            FleetTarget::All => {
                for fleet in &mut self.fleets {
                    fleet.apply(event);
                }
            }
            FleetTarget::One(index) => match self.fleets.get_mut(index) {
                Some(fleet) => fleet.apply(event),
                None => tracing::warn!(index, "control event for unknown fleet ignored"),
            },
        }
        tracing::debug!(?event, "control applied");
    }

    pub fn tick_fleet(&mut self, index: usize) {
        if let Some(fleet) = self.fleets.get_mut(index) {
            fleet.tick(&mut self.rng);
        }
    }

    pub fn tick_all(&mut self) {
        for fleet in &mut self.fleets {
            fleet.tick(&mut self.rng);
        }
    }

    /// Relaunches every fleet from the baseline with fresh balloons; ascent
    /// and jitter settings carry over.
    pub fn regenerate(&mut self) -> Result<(), SceneError> {
        for fleet in &mut self.fleets {
            let fresh =
                self.blueprint
                    .create_fleet(&mut self.rng, self.panel_width, self.panel_height)?;
            let balloons = fresh.balloons().to_vec();
            fleet.replace_balloons(balloons);
        }
        tracing::info!(fleets = self.fleets.len(), "fleets relaunched");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot {
            panel_width: self.panel_width,
            panel_height: self.panel_height,
            fleets: &self.fleets,
        }
    }
}
