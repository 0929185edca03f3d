use cubeview_input::{ArrowKey, KeyEvent, KeyState, Modifiers};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState};

pub fn arrow(code: KeyCode) -> Option<ArrowKey> {
    match code {
        KeyCode::ArrowLeft => Some(ArrowKey::Left),
        KeyCode::ArrowRight => Some(ArrowKey::Right),
        KeyCode::ArrowUp => Some(ArrowKey::Up),
        KeyCode::ArrowDown => Some(ArrowKey::Down),
        _ => None,
    }
}

pub fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        control: state.control_key(),
    }
}

/// Translate a winit key event into a viewer key event; non-arrow keys yield `None`.
pub fn translate(
    code: KeyCode,
    state: ElementState,
    repeat: bool,
    modifiers: Modifiers,
) -> Option<KeyEvent> {
    let key = arrow(code)?;
    let state = match (state, repeat) {
        (ElementState::Released, _) => KeyState::Released,
        (ElementState::Pressed, true) => KeyState::Repeated,
        (ElementState::Pressed, false) => KeyState::Pressed,
    };
    Some(KeyEvent {
        key,
        state,
        modifiers,
    })
}
