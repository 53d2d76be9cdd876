//! Shared setup for the demo binaries.

use std::path::{Path, PathBuf};

use anyhow::Context;
use swl_engine::logging::{init_logging, LoggingConfig};

/// Environment variable naming the font file the demos use.
pub const FONT_ENV: &str = "SWL_FONT";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Installs the logger with the engine's default filter.
pub fn init() {
    init_logging(LoggingConfig::default());
}

/// Font to load: the first command-line argument, then `$SWL_FONT`, then
/// the first common system font that exists.
pub fn font_path() -> anyhow::Result<PathBuf> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Ok(arg.into());
    }
    if let Some(env) = std::env::var_os(FONT_ENV) {
        return Ok(env.into());
    }
    SYSTEM_FONTS
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
        .with_context(|| format!("no font found; pass a .ttf path or set {FONT_ENV}"))
}
