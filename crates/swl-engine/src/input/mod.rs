//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! [`translate_window_event`] turns winit window events into [`InputEvent`]s.

mod frame;
mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use platform::translate_window_event;
pub use state::InputState;
pub use types::{
    ButtonState,
    InputEvent,
    Key,
    Modifiers,
    MouseButton,
    WheelDelta,
};
