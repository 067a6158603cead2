//! Key bindings.

use crossterm::event::KeyCode;

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Press the click trigger.
    Click,
    /// Buy the upgrade at a zero-based index.
    Unlock(usize),
    /// Buy the highlighted upgrade.
    UnlockSelected,
    /// Move the highlight down.
    SelectNext,
    /// Move the highlight up.
    SelectPrevious,
    /// Leave the game.
    Quit,
}

/// Maps a key to an input, ignoring unbound keys.
pub fn map_key(key: KeyCode) -> Option<Input> {
    match key {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Input::Click),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(Input::UnlockSelected),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(Input::Unlock(digit as usize - 1)),
            _ if c == 'q' || c == 'Q' => Some(Input::Quit),
            _ => None,
        },
        KeyCode::Down | KeyCode::Tab => Some(Input::SelectNext),
        KeyCode::Up | KeyCode::BackTab => Some(Input::SelectPrevious),
        KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}
