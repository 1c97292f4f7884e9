use thiserror::Error;

/// Errors raised while loading a [`crate::SketchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while exporting the drawing to an image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export target has zero width or height
    #[error("export target {width}x{height} has no pixels")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}
