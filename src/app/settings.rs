use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::Cli,
    domain::{
        factory::{BASE_UNIT, FleetBlueprint, MAX_BALLOONS, MIN_BALLOONS},
        error::SceneError,
    },
};

pub const DEFAULT_FLEETS: usize = 3;
pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_PANEL_WIDTH: i32 = 400;
pub const DEFAULT_PANEL_HEIGHT: i32 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub fleets: usize,
    pub base_unit: i32,
    pub min_balloons: usize,
    pub max_balloons: usize,
    pub panel_width: i32,
    pub panel_height: i32,
    pub tick_ms: u64,
    pub seed: Option<u64>,
    pub linked_ascent: bool,
    pub initial_ascent: i32,
    pub initial_jitter: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fleets: DEFAULT_FLEETS,
            base_unit: BASE_UNIT,
            min_balloons: MIN_BALLOONS,
            max_balloons: MAX_BALLOONS,
            panel_width: DEFAULT_PANEL_WIDTH,
            panel_height: DEFAULT_PANEL_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
            linked_ascent: false,
            initial_ascent: 0,
            initial_jitter: 0,
        }
    }
}

impl SceneConfig {
    #[must_use]
    pub fn blueprint(&self) -> FleetBlueprint {
        FleetBlueprint {
            base_unit: self.base_unit,
            min_balloons: self.min_balloons,
            max_balloons: self.max_balloons,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.fleets == 0 {
            return Err(SceneError::InvalidConfig(
                "a scene needs at least one fleet".to_string(),
            ));
        }
        if self.panel_height <= 0 {
            return Err(SceneError::InvalidConfig(format!(
                "panel height must be positive, got {}",
                self.panel_height
            )));
        }
        if self.tick_ms == 0 {
            return Err(SceneError::InvalidConfig(
                "tick period must be positive".to_string(),
            ));
        }
        self.blueprint().validate(self.panel_width)
    }

    /// Explicit command-line flags win over file and built-in values.
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(fleets) = cli.fleets {
            self.fleets = usize::from(fleets);
        }
        if let Some(tick_ms) = cli.tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(base_unit) = cli.base_unit {
            self.base_unit = base_unit;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(ascent) = cli.ascent {
            self.initial_ascent = ascent;
        }
        if let Some(jitter) = cli.jitter {
            self.initial_jitter = jitter;
        }
        if cli.linked_ascent {
            self.linked_ascent = true;
        }
    }
}

/// Resolves the scene configuration: defaults, then the config file, then
/// command-line flags. Returns the file that was read, if any.
pub fn load_scene_config(cli: &Cli) -> anyhow::Result<(SceneConfig, Option<PathBuf>)> {
    let default_path = config_path(
        std::env::var_os("BALLOON_ASCENSION_CONFIG_DIR"),
        std::env::var_os("HOME"),
    );
    load_scene_config_from(cli, default_path)
}

pub fn load_scene_config_from(
    cli: &Cli,
    default_path: Option<PathBuf>,
) -> anyhow::Result<(SceneConfig, Option<PathBuf>)> {
    let mut config = SceneConfig::default();
    let mut used_path = None;

    if let Some(path) = &cli.config {
        config = read_scene_config(path)?;
        used_path = Some(path.clone());
    } else if let Some(path) = default_path.filter(|path| path.is_file()) {
        match read_scene_config(&path) {
            Ok(saved) => {
                config = saved;
                used_path = Some(path);
            }
            Err(err) => tracing::warn!(path = %path.display(), "ignoring config file: {err:#}"),
        }
    }

    config.apply_cli_overrides(cli);
    config
        .validate()
        .context("scene configuration is invalid")?;
    Ok((config, used_path))
}

pub fn read_scene_config(path: &Path) -> anyhow::Result<SceneConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {} failed", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing config file {} failed", path.display()))
}

pub fn config_path(config_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(base) = config_dir {
        return Some(PathBuf::from(base).join("config.json"));
    }

    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("balloon-ascension")
            .join("config.json"),
    )
}
