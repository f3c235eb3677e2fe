use crate::pin::PinKey;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Read the system clipboard and paste it.
    ClipboardPaste,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    // Some terminals deliver Ctrl+V as a key instead of a bracketed paste,
    // so read the clipboard directly.
    if is_ctrl_char(key, 'v') || is_ctrl_shift_char(key, 'v') {
        return InputAction::ClipboardPaste;
    }

    if is_ctrl_char(key, 'l') {
        app.clear();
        return InputAction::None;
    }

    if let Some(pin_key) = pin_key(key) {
        app.on_key(pin_key);
    }
    InputAction::None
}

/// Map a terminal key to widget input.
pub fn pin_key(key: KeyEvent) -> Option<PinKey> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(PinKey::Char(ch)),
        KeyCode::Backspace => Some(PinKey::Backspace),
        KeyCode::Left | KeyCode::BackTab => Some(PinKey::Prev),
        KeyCode::Right | KeyCode::Tab => Some(PinKey::Next),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_ctrl_shift_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_chars_map_to_pin_input() {
        assert_eq!(
            pin_key(key(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(PinKey::Char('7'))
        );
        assert_eq!(
            pin_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(PinKey::Char('A'))
        );
    }

    #[test]
    fn navigation_keys_move_focus() {
        assert_eq!(pin_key(key(KeyCode::Left, KeyModifiers::NONE)), Some(PinKey::Prev));
        assert_eq!(pin_key(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(PinKey::Prev));
        assert_eq!(pin_key(key(KeyCode::Tab, KeyModifiers::NONE)), Some(PinKey::Next));
        assert_eq!(
            pin_key(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(PinKey::Backspace)
        );
    }

    #[test]
    fn control_chords_are_not_typed() {
        assert_eq!(pin_key(key(KeyCode::Char('v'), KeyModifiers::CONTROL)), None);
        assert_eq!(pin_key(key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
        assert_eq!(pin_key(key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }
}
