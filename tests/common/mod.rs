#![allow(dead_code)]

use balloon_ascension::{
    app::{events::AppEvent, settings::SceneConfig, state::AppState},
    cli::ThemeArg,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

pub fn seeded_config(seed: u64) -> SceneConfig {
    SceneConfig {
        seed: Some(seed),
        ..SceneConfig::default()
    }
}

pub fn seeded_state(seed: u64) -> AppState {
    AppState::new(&seeded_config(seed), ThemeArg::Daylight).expect("state from seeded config")
}

pub fn key_event(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Feeds a key press, then drains whatever the state published back into it.
pub async fn press(
    state: &mut AppState,
    code: KeyCode,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    state
        .handle_event(key_event(code), tx)
        .await
        .expect("key handled");
    drain(state, tx, rx).await;
}

pub async fn drain(
    state: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        state.handle_event(event, tx).await.expect("event handled");
    }
}
