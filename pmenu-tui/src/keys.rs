use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use pmenu_core::Key;

/// A terminal event as the menu sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Key(Key),
    /// Ctrl-C. Raw mode delivers it as a key instead of a signal.
    Interrupt,
}

pub(crate) fn decode(event: &Event) -> Input {
    let Event::Key(key_event) = event else {
        return Input::Key(Key::Other);
    };
    if key_event.kind != KeyEventKind::Press {
        return Input::Key(Key::Other);
    }

    let modifiers = key_event.modifiers;
    let key = match key_event.code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Input::Interrupt;
        }
        KeyCode::Enter => Key::Enter,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c)
            if !c.is_control()
                && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Key::Char(c)
        }
        _ => Key::Other,
    };

    Input::Key(key)
}
