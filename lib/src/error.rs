use thiserror::Error;

/// Errors surfaced at the pipeline boundary.
///
/// Only genuinely fatal conditions live here: a source image that cannot
/// be decoded, or a configuration rejected by
/// [`RenderConfig::validate`](crate::RenderConfig::validate). Degenerate
/// geometry and malformed pixel values are handled in-band (empty frames,
/// clamped values) and never reach this type.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The source image could not be opened or decoded.
    #[error("failed to load image: {0}")]
    Load(#[from] image::ImageError),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
