use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once before the first frame, after the window exists.
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        let _ = ctx;
    }

    /// Called once per paced frame. Input received since the previous frame
    /// is in `ctx.input_frame`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
