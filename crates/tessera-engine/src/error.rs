//! Engine error types.
//!
//! Asset failures are reported before any GPU object exists; context failures
//! carry the formatted `anyhow` chain from the device/window layers.

use std::fmt;
use std::path::PathBuf;

use crate::sprite::BatchError;

/// Failure to read or decode one asset file.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// The image file is missing or could not be decoded.
    Texture { path: PathBuf, message: String },

    /// The image decoded into a pixel layout with no matching GPU format.
    UnsupportedFormat { path: PathBuf, format: String },

    /// The shader source is missing or lacks a required entry point.
    Shader { path: PathBuf, message: String },

    /// A font descriptor could not be parsed.
    /// `line` is 1-based; 0 means the problem is not tied to a line.
    Font { line: usize, message: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Texture { path, message } => {
                write!(f, "unable to load texture {}: {message}", path.display())
            }
            AssetError::UnsupportedFormat { path, format } => {
                write!(f, "image {} has unsupported channel profile {format}", path.display())
            }
            AssetError::Shader { path, message } => {
                write!(f, "unable to load shader {}: {message}", path.display())
            }
            AssetError::Font { line: 0, message } => write!(f, "font error: {message}"),
            AssetError::Font { line, message } => write!(f, "font error at line {line}: {message}"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Fatal engine construction or runtime error.
#[derive(Debug)]
pub enum EngineError {
    Asset(AssetError),

    /// Window or graphics context could not be created.
    Context(String),

    /// The OS event loop could not be created or failed while pumping.
    EventLoop(String),

    /// A sprite batch rejected a template or instance during setup.
    Sprite(BatchError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Asset(e) => write!(f, "asset load failure: {e}"),
            EngineError::Context(msg) => write!(f, "context creation failure: {msg}"),
            EngineError::EventLoop(msg) => write!(f, "event loop failure: {msg}"),
            EngineError::Sprite(e) => write!(f, "sprite setup failure: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Asset(e) => Some(e),
            EngineError::Sprite(e) => Some(e),
            EngineError::Context(_) | EngineError::EventLoop(_) => None,
        }
    }
}

impl From<AssetError> for EngineError {
    fn from(e: AssetError) -> Self {
        EngineError::Asset(e)
    }
}

impl From<BatchError> for EngineError {
    fn from(e: BatchError) -> Self {
        EngineError::Sprite(e)
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(e: anyhow::Error) -> Self {
        EngineError::Context(format!("{e:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_error_names_the_file() {
        let e = AssetError::Texture {
            path: PathBuf::from("assets/textures/Cell.dds"),
            message: "No such file or directory".into(),
        };
        let s = e.to_string();
        assert!(s.starts_with("unable to load texture"));
        assert!(s.contains("Cell.dds"));
    }

    #[test]
    fn font_error_line_zero_omits_line() {
        let e = AssetError::Font { line: 0, message: "missing fallback glyph".into() };
        assert_eq!(e.to_string(), "font error: missing fallback glyph");
    }

    #[test]
    fn engine_error_wraps_asset_source() {
        let e: EngineError = AssetError::Font { line: 3, message: "bad".into() }.into();
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().contains("line 3"));
    }

    #[test]
    fn anyhow_chain_becomes_context_error() {
        let err = anyhow::anyhow!("no adapter").context("failed to create wgpu device");
        let e: EngineError = err.into();
        let EngineError::Context(msg) = e else { panic!("expected context error") };
        assert!(msg.contains("failed to create wgpu device"));
        assert!(msg.contains("no adapter"));
    }
}
