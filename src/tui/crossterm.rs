use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn into_input_event(event: crossterm::event::Event) -> InputEvent {
    use crossterm::event::Event;

    match event {
        Event::Key(key) => InputEvent::Key(into_key_event(key)),
        Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        Event::FocusGained => InputEvent::FocusGained,
        Event::FocusLost => InputEvent::FocusLost,
        Event::Paste(s) => InputEvent::Paste(s),
    }
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    let kind = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyEventKind::Press,
        crossterm::event::KeyEventKind::Repeat => KeyEventKind::Repeat,
        crossterm::event::KeyEventKind::Release => KeyEventKind::Release,
    };
    KeyEvent {
        code: into_key_code(event.code),
        modifiers: into_key_modifiers(event.modifiers),
        kind,
    }
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    use crossterm::event::KeyModifiers as Ct;

    [
        (Ct::SHIFT, KeyModifiers::SHIFT),
        (Ct::CONTROL, KeyModifiers::CONTROL),
        (Ct::ALT, KeyModifiers::ALT),
    ]
    .into_iter()
    .filter(|(ct, _)| mods.contains(*ct))
    .fold(KeyModifiers::NONE, |acc, (_, m)| acc | m)
}

fn into_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    use crossterm::event::KeyCode as Ct;

    match code {
        Ct::Char(ch) => KeyCode::Char(ch),
        Ct::Left => KeyCode::Left,
        Ct::Right => KeyCode::Right,
        Ct::Up => KeyCode::Up,
        Ct::Down => KeyCode::Down,
        Ct::Home => KeyCode::Home,
        Ct::End => KeyCode::End,
        Ct::Enter => KeyCode::Enter,
        Ct::Esc => KeyCode::Esc,
        Ct::Tab => KeyCode::Tab,
        Ct::Backspace => KeyCode::Backspace,
        Ct::F(n) => KeyCode::F(n),
        _ => KeyCode::Other,
    }
}

pub fn into_mouse_event(event: crossterm::event::MouseEvent) -> MouseEvent {
    use crossterm::event::MouseEventKind as Ct;

    let kind = match event.kind {
        Ct::Down(button) => MouseEventKind::Down(into_mouse_button(button)),
        Ct::Up(button) => MouseEventKind::Up(into_mouse_button(button)),
        Ct::Drag(button) => MouseEventKind::Drag(into_mouse_button(button)),
        Ct::Moved => MouseEventKind::Moved,
        Ct::ScrollUp => MouseEventKind::ScrollUp,
        Ct::ScrollDown => MouseEventKind::ScrollDown,
        Ct::ScrollLeft => MouseEventKind::ScrollLeft,
        Ct::ScrollRight => MouseEventKind::ScrollRight,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    }
}

fn into_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
