use std::path::PathBuf;

use swl_engine::text::FontLoadError;

/// Errors surfaced by the toolkit.
///
/// Resource and window failures are fatal for an application and are meant
/// to be propagated to `main`. Lookup misses never produce an `Error`; they
/// return `None` or an empty string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Font(#[from] FontLoadError),

    #[error("failed to load image {path}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {path} decoded to a malformed {width}x{height} pixel buffer")]
    ImageBuffer { path: PathBuf, width: u32, height: u32 },

    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
