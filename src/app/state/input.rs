use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::controls::Parameter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextFleet,
    PreviousFleet,
    SelectFleet(usize),
    Adjust(Parameter, i32),
    ResetKnobs,
    ToggleLinked,
    TogglePause,
    Relaunch,
    ToggleHelp,
    CloseOverlay,
    Quit,
}

fn ctrl_char(key: KeyEvent, target: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
}

#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if ctrl_char(key, 'c') {
        return Some(Command::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    let command = match key.code {
        KeyCode::Right | KeyCode::Tab => Command::NextFleet,
        KeyCode::Left | KeyCode::BackTab => Command::PreviousFleet,
        KeyCode::Up => Command::Adjust(Parameter::AscentSpeed, 1),
        KeyCode::Down => Command::Adjust(Parameter::AscentSpeed, -1),
        KeyCode::PageUp => {
            Command::Adjust(Parameter::AscentSpeed, Parameter::AscentSpeed.major_tick())
        }
        KeyCode::PageDown => {
            Command::Adjust(Parameter::AscentSpeed, -Parameter::AscentSpeed.major_tick())
        }
        KeyCode::Char('+' | '=' | ']') => Command::Adjust(Parameter::JitterIntensity, 1),
        KeyCode::Char('-' | '_' | '[') => Command::Adjust(Parameter::JitterIntensity, -1),
        KeyCode::Char(digit @ '1'..='9') => Command::SelectFleet((digit as usize) - ('1' as usize)),
        KeyCode::Char('0') => Command::ResetKnobs,
        KeyCode::Char('l' | 'L') => Command::ToggleLinked,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('r' | 'R') => Command::Relaunch,
        KeyCode::Char('?') | KeyCode::F(1) => Command::ToggleHelp,
        KeyCode::Esc => Command::CloseOverlay,
        KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}
