use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_fleet_tickers},
        settings::SceneConfig,
    },
    cli::ThemeArg,
    domain::{
        controls::{ControlEvent, FleetControls, FleetTarget, Parameter},
        scene::Scene,
    },
};

mod input;

pub use input::{Command, command_for_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Paused,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub scene: Scene,
    pub controls: Vec<FleetControls>,
    pub selected_fleet: usize,
    pub linked_ascent: bool,
    pub help_open: bool,
    pub tick_ms: u64,
    pub frame_tick: u64,
    pub last_error: Option<String>,
    pub theme: ThemeArg,
}

impl AppState {
    pub fn new(config: &SceneConfig, theme: ThemeArg) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let scene = Scene::generate(
            config.blueprint(),
            config.fleets,
            config.panel_width,
            config.panel_height,
            rng,
        )?;

        let mut state = Self {
            mode: AppMode::Running,
            running: true,
            controls: vec![FleetControls::default(); config.fleets],
            scene,
            selected_fleet: 0,
            linked_ascent: config.linked_ascent,
            help_open: false,
            tick_ms: config.tick_ms,
            frame_tick: 0,
            last_error: None,
            theme,
        };
        state.preset_knobs(config.initial_ascent, config.initial_jitter);
        Ok(state)
    }

    fn preset_knobs(&mut self, ascent: i32, jitter: u32) {
        let jitter = i32::try_from(jitter).unwrap_or(i32::MAX);
        let mut events = Vec::new();
        for (index, controls) in self.controls.iter_mut().enumerate() {
            let target = FleetTarget::One(index);
            events.extend(controls.ascent.set(ascent, target));
            events.extend(controls.jitter.set(jitter, target));
        }
        for event in &events {
            self.scene.apply(event);
        }
    }

    #[must_use]
    pub fn fleet_count(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn selected_controls(&self) -> &FleetControls {
        &self.controls[self.selected_fleet]
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_fleet_tickers(tx, self.fleet_count(), self.tick_ms);
                tracing::info!(
                    fleets = self.fleet_count(),
                    tick_ms = self.tick_ms,
                    "animation started"
                );
            }
            AppEvent::Tick { fleet } => {
                if self.mode == AppMode::Running {
                    self.scene.tick_fleet(fleet);
                    self.frame_tick = self.frame_tick.saturating_add(1);
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Control(control) => self.scene.apply(&control),
            AppEvent::Relaunch => match self.scene.regenerate() {
                Ok(()) => self.last_error = None,
                Err(err) => {
                    tracing::warn!("relaunch failed: {err}");
                    self.last_error = Some(err.to_string());
                }
            },
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if self.help_open {
            return self.handle_help_key(key, tx).await;
        }
        if let Some(command) = command_for_key(key) {
            self.run_command(command, tx).await?;
        }
        Ok(())
    }

    async fn handle_help_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match command_for_key(key) {
            Some(Command::ToggleHelp | Command::CloseOverlay) => self.help_open = false,
            Some(Command::Quit) => tx.send(AppEvent::Quit).await?,
            _ => {}
        }
        Ok(())
    }

    pub async fn run_command(&mut self, command: Command, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match command {
            Command::NextFleet => {
                self.selected_fleet = (self.selected_fleet + 1) % self.fleet_count();
            }
            Command::PreviousFleet => {
                self.selected_fleet =
                    (self.selected_fleet + self.fleet_count() - 1) % self.fleet_count();
            }
            Command::SelectFleet(index) => {
                if index < self.fleet_count() {
                    self.selected_fleet = index;
                }
            }
            Command::Adjust(parameter, delta) => {
                let value = self.selected_controls().slider(parameter).value() + delta;
                self.publish_setting(parameter, value, tx).await?;
            }
            Command::ResetKnobs => {
                self.publish_setting(Parameter::AscentSpeed, 0, tx).await?;
                self.publish_setting(Parameter::JitterIntensity, 0, tx).await?;
            }
            Command::ToggleLinked => {
                self.linked_ascent = !self.linked_ascent;
                tracing::debug!(linked = self.linked_ascent, "linked ascent toggled");
                if self.linked_ascent {
                    let speed = self.selected_controls().ascent.value();
                    self.sync_ascent(speed, tx).await?;
                }
            }
            Command::TogglePause => {
                self.mode = match self.mode {
                    AppMode::Running => AppMode::Paused,
                    AppMode::Paused => AppMode::Running,
                    AppMode::Quit => AppMode::Quit,
                };
            }
            Command::Relaunch => tx.send(AppEvent::Relaunch).await?,
            Command::ToggleHelp => self.help_open = !self.help_open,
            Command::CloseOverlay | Command::Quit => tx.send(AppEvent::Quit).await?,
        }
        Ok(())
    }

    /// Moves one slider of the selected fleet and publishes the resulting
    /// control message. In linked mode the ascent slider drives every fleet.
    async fn publish_setting(
        &mut self,
        parameter: Parameter,
        value: i32,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        if parameter == Parameter::AscentSpeed && self.linked_ascent {
            return self.sync_ascent(value, tx).await;
        }
        let target = FleetTarget::One(self.selected_fleet);
        let slider = self.controls[self.selected_fleet].slider_mut(parameter);
        if let Some(event) = slider.set(value, target) {
            tx.send(AppEvent::Control(event)).await?;
        }
        Ok(())
    }

    async fn sync_ascent(&mut self, value: i32, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let mut changed = false;
        for controls in &mut self.controls {
            changed |= controls.ascent.set(value, FleetTarget::All).is_some();
        }
        if changed {
            let speed = self.selected_controls().ascent.value();
            tx.send(AppEvent::Control(ControlEvent::ascent(FleetTarget::All, speed)))
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
