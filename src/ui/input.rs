use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    /// Select by 0-based option position.
    Select(usize),
    MoveSelection(isize),
    Next,
    Previous,
    Restart,
}

/// Maps a key to an action. `finished` selects the result-view bindings,
/// where Enter means "Start Again".
pub fn map_key(key: KeyEvent, finished: bool) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('r') => InputAction::Restart,
        KeyCode::Enter if finished => InputAction::Restart,
        _ if finished => InputAction::None,
        KeyCode::Char(ch @ '1'..='9') => {
            let position = ch.to_digit(10).unwrap_or(1) as usize - 1;
            InputAction::Select(position)
        }
        KeyCode::Up | KeyCode::Char('k') => InputAction::MoveSelection(-1),
        KeyCode::Down | KeyCode::Char('j') => InputAction::MoveSelection(1),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            InputAction::Next
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => InputAction::Previous,
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let action = map_key(key, app.state().finished);
    tracing::trace!(?action, "Key mapped");
    match action {
        InputAction::None => {}
        InputAction::Quit => app.request_quit(),
        InputAction::Select(position) => app.select_position(position),
        InputAction::MoveSelection(delta) => app.move_selection(delta),
        InputAction::Next => app.next(),
        InputAction::Previous => app.previous(),
        InputAction::Restart => app.restart(),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_select_by_position() {
        assert_eq!(map_key(press(KeyCode::Char('1')), false), InputAction::Select(0));
        assert_eq!(map_key(press(KeyCode::Char('3')), false), InputAction::Select(2));
    }

    #[test]
    fn arrows_navigate() {
        assert_eq!(map_key(press(KeyCode::Right), false), InputAction::Next);
        assert_eq!(map_key(press(KeyCode::Enter), false), InputAction::Next);
        assert_eq!(map_key(press(KeyCode::Left), false), InputAction::Previous);
        assert_eq!(map_key(press(KeyCode::Up), false), InputAction::MoveSelection(-1));
        assert_eq!(map_key(press(KeyCode::Down), false), InputAction::MoveSelection(1));
    }

    #[test]
    fn enter_restarts_on_results() {
        assert_eq!(map_key(press(KeyCode::Enter), true), InputAction::Restart);
        assert_eq!(map_key(press(KeyCode::Char('1')), true), InputAction::None);
        assert_eq!(map_key(press(KeyCode::Left), true), InputAction::None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q')), false), InputAction::Quit);
        assert_eq!(map_key(press(KeyCode::Esc), true), InputAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), InputAction::Quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, false), InputAction::None);
    }
}
