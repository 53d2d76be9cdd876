//! GPU device + surface management.
//!
//! The toolkit rasterizes on the CPU; this module only owns the path that
//! gets a finished frame onto the window:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring a surface that accepts texture copies
//! - acquiring frames and uploading pixels into them

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::{GpuInitError, SurfaceErrorAction};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
