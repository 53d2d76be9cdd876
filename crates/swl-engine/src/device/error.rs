use std::fmt;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// Reasons the window surface cannot display CPU-rendered frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuInitError {
    /// The surface cannot be the destination of a texture copy.
    CopyDstUnsupported,
    /// None of the surface formats is 8-bit RGBA or BGRA.
    NoByteFormat(Vec<wgpu::TextureFormat>),
}

impl fmt::Display for GpuInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuInitError::CopyDstUnsupported => {
                write!(f, "surface does not support COPY_DST usage")
            }
            GpuInitError::NoByteFormat(formats) => {
                write!(f, "no 8-bit RGBA/BGRA surface format among {formats:?}")
            }
        }
    }
}

impl std::error::Error for GpuInitError {}
