use swl_engine::input::MouseButton;

use crate::event::{MouseEvent, MouseEventKind};

/// Callback receiving the event that triggered it.
pub type MouseCallback = Box<dyn FnMut(&MouseEvent)>;

/// Click/press/hover callbacks. Every callback is optional; missing ones are
/// skipped.
#[derive(Default)]
pub struct ButtonHandlers {
    clicked: Option<MouseCallback>,
    left_clicked: Option<MouseCallback>,
    right_clicked: Option<MouseCallback>,
    pressed: Option<MouseCallback>,
    hovered: Option<MouseCallback>,
}

impl ButtonHandlers {
    /// Any button released.
    pub fn set_clicked(&mut self, f: impl FnMut(&MouseEvent) + 'static) {
        self.clicked = Some(Box::new(f));
    }

    pub fn set_left_clicked(&mut self, f: impl FnMut(&MouseEvent) + 'static) {
        self.left_clicked = Some(Box::new(f));
    }

    pub fn set_right_clicked(&mut self, f: impl FnMut(&MouseEvent) + 'static) {
        self.right_clicked = Some(Box::new(f));
    }

    /// Any button pressed.
    pub fn set_pressed(&mut self, f: impl FnMut(&MouseEvent) + 'static) {
        self.pressed = Some(Box::new(f));
    }

    /// Pointer moved with neither the left nor the right button held.
    pub fn set_hovered(&mut self, f: impl FnMut(&MouseEvent) + 'static) {
        self.hovered = Some(Box::new(f));
    }

    /// Runs the callbacks matching `event`.
    ///
    /// On release `clicked` runs first, then `left_clicked` or `right_clicked`
    /// depending on the button. The middle button has no dedicated callback.
    pub fn dispatch(&mut self, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Up => {
                call(&mut self.clicked, event);
                match event.button {
                    Some(MouseButton::Left) => call(&mut self.left_clicked, event),
                    Some(MouseButton::Right) => call(&mut self.right_clicked, event),
                    _ => {}
                }
            }
            MouseEventKind::Down => call(&mut self.pressed, event),
            MouseEventKind::Motion => {
                if !event.buttons.any_primary() {
                    call(&mut self.hovered, event);
                }
            }
        }
    }
}

#[inline]
fn call(slot: &mut Option<MouseCallback>, event: &MouseEvent) {
    if let Some(f) = slot {
        f(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ButtonMask;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, ButtonHandlers) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut h = ButtonHandlers::default();
        let l = log.clone();
        h.set_clicked(move |_| l.borrow_mut().push("clicked"));
        let l = log.clone();
        h.set_left_clicked(move |_| l.borrow_mut().push("left"));
        let l = log.clone();
        h.set_right_clicked(move |_| l.borrow_mut().push("right"));
        let l = log.clone();
        h.set_pressed(move |_| l.borrow_mut().push("pressed"));
        let l = log.clone();
        h.set_hovered(move |_| l.borrow_mut().push("hovered"));
        (log, h)
    }

    #[test]
    fn up_runs_clicked_before_side() {
        let (log, mut h) = recorder();
        h.dispatch(&MouseEvent::up(MouseButton::Left, 0, 0));
        h.dispatch(&MouseEvent::up(MouseButton::Right, 0, 0));
        assert_eq!(*log.borrow(), ["clicked", "left", "clicked", "right"]);
    }

    #[test]
    fn middle_up_only_clicked() {
        let (log, mut h) = recorder();
        h.dispatch(&MouseEvent::up(MouseButton::Middle, 0, 0));
        assert_eq!(*log.borrow(), ["clicked"]);
    }

    #[test]
    fn down_is_pressed() {
        let (log, mut h) = recorder();
        h.dispatch(&MouseEvent::down(MouseButton::Right, 0, 0));
        assert_eq!(*log.borrow(), ["pressed"]);
    }

    #[test]
    fn hover_suppressed_while_dragging() {
        let (log, mut h) = recorder();
        let held = ButtonMask { left: true, ..ButtonMask::default() };
        h.dispatch(&MouseEvent::motion(1, 1).with_buttons(held));
        let middle = ButtonMask { middle: true, ..ButtonMask::default() };
        h.dispatch(&MouseEvent::motion(1, 1).with_buttons(middle));
        assert_eq!(*log.borrow(), ["hovered"]);
    }

    #[test]
    fn missing_callbacks_are_skipped() {
        let mut h = ButtonHandlers::default();
        h.dispatch(&MouseEvent::up(MouseButton::Left, 0, 0));
        h.dispatch(&MouseEvent::motion(0, 0));
    }
}
