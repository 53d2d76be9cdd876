//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, paces frames and wires them to the
//! GPU presentation layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
