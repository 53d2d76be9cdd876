use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, Modifiers, MouseButton};

/// Current input state for the window.
///
/// Holds "is down" information and the pointer position. Every applied event
/// is also appended to the frame's event list.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,

    /// Sub-notch wheel motion carried over from pixel-precise deltas.
    pub(crate) wheel_remainder: (f32, f32),
}

impl InputState {
    /// Applies an event to the current state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((*x, *y)),

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    ButtonState::Pressed => self.keys_down.insert(*key),
                    ButtonState::Released => self.keys_down.remove(key),
                };
            }

            InputEvent::PointerButton { button, state, x, y } => {
                self.pointer_pos = Some((*x, *y));
                match state {
                    ButtonState::Pressed => self.buttons_down.insert(*button),
                    ButtonState::Released => self.buttons_down.remove(button),
                };
            }

            InputEvent::Wheel { .. } | InputEvent::CloseRequested => {}
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
