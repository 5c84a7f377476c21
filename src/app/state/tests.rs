use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::{AppMode, AppState, Command, command_for_key};
use crate::{
    app::events::AppEvent,
    domain::controls::{FleetTarget, Parameter, ParameterChange},
    test_support::{state_test_config, test_state},
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrow_keys_map_to_fleet_selection_and_ascent() {
    assert_eq!(command_for_key(key(KeyCode::Right)), Some(Command::NextFleet));
    assert_eq!(command_for_key(key(KeyCode::BackTab)), Some(Command::PreviousFleet));
    assert_eq!(
        command_for_key(key(KeyCode::Up)),
        Some(Command::Adjust(Parameter::AscentSpeed, 1))
    );
    assert_eq!(
        command_for_key(key(KeyCode::PageDown)),
        Some(Command::Adjust(Parameter::AscentSpeed, -5))
    );
}

#[test]
fn jitter_and_digit_keys() {
    assert_eq!(
        command_for_key(key(KeyCode::Char('+'))),
        Some(Command::Adjust(Parameter::JitterIntensity, 1))
    );
    assert_eq!(
        command_for_key(key(KeyCode::Char('['))),
        Some(Command::Adjust(Parameter::JitterIntensity, -1))
    );
    assert_eq!(
        command_for_key(key(KeyCode::Char('3'))),
        Some(Command::SelectFleet(2))
    );
    assert_eq!(command_for_key(key(KeyCode::Char('0'))), Some(Command::ResetKnobs));
}

#[test]
fn ctrl_c_quits_and_other_modifiers_are_ignored() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(command_for_key(ctrl_c), Some(Command::Quit));
    let alt_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT);
    assert_eq!(command_for_key(alt_r), None);
    assert_eq!(command_for_key(key(KeyCode::Char('z'))), None);
}

#[test]
fn new_state_presets_initial_knobs() {
    let mut config = state_test_config();
    config.initial_ascent = 3;
    config.initial_jitter = 2;
    let state = AppState::new(&config, crate::cli::ThemeArg::Daylight).expect("state");

    for (controls, fleet) in state.controls.iter().zip(state.scene.fleets()) {
        assert_eq!(controls.ascent.value(), 3);
        assert_eq!(controls.jitter.value(), 2);
        assert_eq!(fleet.ascent_speed(), 3);
        assert_eq!(fleet.jitter_intensity(), 2);
    }
}

#[tokio::test]
async fn fleet_selection_wraps() {
    let mut state = test_state();
    let (tx, _rx) = mpsc::channel(8);

    state.run_command(Command::PreviousFleet, &tx).await.expect("command");
    assert_eq!(state.selected_fleet, 2);
    state.run_command(Command::NextFleet, &tx).await.expect("command");
    assert_eq!(state.selected_fleet, 0);
    state.run_command(Command::SelectFleet(8), &tx).await.expect("command");
    assert_eq!(state.selected_fleet, 0);
}

#[tokio::test]
async fn adjusting_publishes_targeted_control_event() {
    let mut state = test_state();
    let (tx, mut rx) = mpsc::channel(8);
    state.selected_fleet = 1;

    state
        .run_command(Command::Adjust(Parameter::JitterIntensity, 1), &tx)
        .await
        .expect("command");

    match rx.try_recv() {
        Ok(AppEvent::Control(event)) => {
            assert_eq!(event.target, FleetTarget::One(1));
            assert_eq!(event.change, ParameterChange::JitterIntensity(1));
        }
        other => panic!("expected control event, got {other:?}"),
    }
    assert_eq!(state.scene.fleets()[1].jitter_intensity(), 0);
}

#[tokio::test]
async fn adjusting_past_range_publishes_nothing() {
    let mut state = test_state();
    let (tx, mut rx) = mpsc::channel(8);

    state
        .run_command(Command::Adjust(Parameter::JitterIntensity, -1), &tx)
        .await
        .expect("command");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn linking_broadcasts_selected_speed() {
    let mut state = test_state();
    let (tx, mut rx) = mpsc::channel(8);
    state.controls[0].ascent.set(4, FleetTarget::One(0));

    state.run_command(Command::ToggleLinked, &tx).await.expect("command");
    assert!(state.linked_ascent);
    assert!(state.controls.iter().all(|c| c.ascent.value() == 4));
    match rx.try_recv() {
        Ok(AppEvent::Control(event)) => {
            assert_eq!(event.target, FleetTarget::All);
            assert_eq!(event.change, ParameterChange::AscentSpeed(4));
        }
        other => panic!("expected broadcast, got {other:?}"),
    }
}

#[tokio::test]
async fn pause_suspends_ticks() {
    let mut state = test_state();
    let (tx, _rx) = mpsc::channel(8);
    state
        .handle_event(
            AppEvent::Control(crate::domain::controls::ControlEvent::ascent(
                FleetTarget::All,
                5,
            )),
            &tx,
        )
        .await
        .expect("event");

    state.run_command(Command::TogglePause, &tx).await.expect("command");
    assert_eq!(state.mode, AppMode::Paused);
    let before = state.scene.fleets()[0].clone();
    state
        .handle_event(AppEvent::Tick { fleet: 0 }, &tx)
        .await
        .expect("tick");
    assert_eq!(state.scene.fleets()[0], before);
    assert_eq!(state.frame_tick, 0);

    state.run_command(Command::TogglePause, &tx).await.expect("command");
    state
        .handle_event(AppEvent::Tick { fleet: 0 }, &tx)
        .await
        .expect("tick");
    assert_eq!(state.frame_tick, 1);
    assert_ne!(state.scene.fleets()[0], before);
}

#[tokio::test]
async fn help_overlay_swallows_controls() {
    let mut state = test_state();
    let (tx, mut rx) = mpsc::channel(8);
    state.help_open = true;

    state
        .handle_event(AppEvent::Input(crossterm::event::Event::Key(key(KeyCode::Up))), &tx)
        .await
        .expect("input");
    assert!(rx.try_recv().is_err());
    assert_eq!(state.controls[0].ascent.value(), 0);

    state
        .handle_event(AppEvent::Input(crossterm::event::Event::Key(key(KeyCode::Esc))), &tx)
        .await
        .expect("input");
    assert!(!state.help_open);
    assert!(rx.try_recv().is_err());
}
