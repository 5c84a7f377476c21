use crate::{
    app::{settings::SceneConfig, state::AppState},
    cli::ThemeArg,
};

pub(crate) fn state_test_config() -> SceneConfig {
    SceneConfig {
        seed: Some(2024),
        ..SceneConfig::default()
    }
}

pub(crate) fn test_state() -> AppState {
    AppState::new(&state_test_config(), ThemeArg::Daylight).expect("test state")
}
