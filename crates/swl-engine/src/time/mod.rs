//! Frame timing.
//!
//! One [`FramePacer`] per window: `tick()` once per presented frame to obtain
//! a [`FrameTime`], and ask `next_deadline()` when to wake up for the next one.

mod pacer;

pub use pacer::{FramePacer, FrameTime};
