use swl_engine::coords::Point;
use swl_engine::input::{ButtonState, InputEvent, InputState, Key, Modifiers, MouseButton};

/// What happened to the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down,
    Up,
    Motion,
}

/// Buttons held at the time of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl ButtonMask {
    pub fn from_state(state: &InputState) -> Self {
        Self {
            left: state.button_down(MouseButton::Left),
            right: state.button_down(MouseButton::Right),
            middle: state.button_down(MouseButton::Middle),
        }
    }

    /// `true` when the left or right button is held.
    pub fn any_primary(self) -> bool {
        self.left || self.right
    }
}

/// A mouse event in the receiving widget's parent-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    /// Button that changed state; `None` for motion.
    pub button: Option<MouseButton>,
    pub buttons: ButtonMask,
    pub pos: Point,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, button: Option<MouseButton>, x: i32, y: i32) -> Self {
        Self { kind, button, buttons: ButtonMask::default(), pos: Point::new(x, y) }
    }

    pub fn down(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Down, Some(button), x, y)
    }

    pub fn up(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Up, Some(button), x, y)
    }

    pub fn motion(x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Motion, None, x, y)
    }

    pub fn with_buttons(mut self, buttons: ButtonMask) -> Self {
        self.buttons = buttons;
        self
    }

    /// Same event expressed in a frame whose origin sits at `(x, y)`.
    pub fn offset(self, x: i32, y: i32) -> Self {
        Self { pos: self.pos.offset(x, y), ..self }
    }
}

/// Wheel motion in notches (positive `y` away from the user) at the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelEvent {
    pub wheel: Point,
    pub pos: Point,
}

impl WheelEvent {
    pub fn new(dx: i32, dy: i32, x: i32, y: i32) -> Self {
        Self { wheel: Point::new(dx, dy), pos: Point::new(x, y) }
    }

    pub fn offset(self, x: i32, y: i32) -> Self {
        Self { pos: self.pos.offset(x, y), ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
    pub repeat: bool,
    pub modifiers: Modifiers,
}

/// An input event in toolkit terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Mouse(MouseEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
    Quit,
}

/// Converts a window-space engine event into a toolkit event.
///
/// `scale` maps window logical pixels onto the renderer's logical size.
/// `state` is the input state after the event was applied; it supplies the
/// held-button mask and the pointer position for wheel events.
pub fn translate(ev: &InputEvent, state: &InputState, scale: (f32, f32)) -> Option<UiEvent> {
    let to_px = |x: f32, y: f32| ((x * scale.0).floor() as i32, (y * scale.1).floor() as i32);
    let buttons = ButtonMask::from_state(state);

    match *ev {
        InputEvent::PointerMoved { x, y } => {
            let (x, y) = to_px(x, y);
            Some(UiEvent::Mouse(MouseEvent::motion(x, y).with_buttons(buttons)))
        }
        InputEvent::PointerButton { button, state: st, x, y } => {
            let (x, y) = to_px(x, y);
            let ev = match st {
                ButtonState::Pressed => MouseEvent::down(button, x, y),
                ButtonState::Released => MouseEvent::up(button, x, y),
            };
            Some(UiEvent::Mouse(ev.with_buttons(buttons)))
        }
        InputEvent::Wheel { delta, x, y } => {
            let (x, y) = to_px(x, y);
            Some(UiEvent::Wheel(WheelEvent::new(delta.x, delta.y, x, y)))
        }
        InputEvent::Key { key, state: st, modifiers, repeat } => Some(UiEvent::Key(KeyEvent {
            key,
            pressed: st == ButtonState::Pressed,
            repeat,
            modifiers,
        })),
        InputEvent::CloseRequested => Some(UiEvent::Quit),
        _ => None,
    }
}
