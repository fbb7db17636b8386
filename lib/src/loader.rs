use std::path::Path;

use image::RgbaImage;

use crate::error::RenderError;

/// Load and decode an image file into an RGBA buffer.
///
/// Any format the `image` crate recognizes by content is accepted (PNG,
/// JPEG, GIF first frame, BMP, ...). Source bit depths are normalized to
/// 8 bits per channel.
///
/// # Errors
/// Returns [`RenderError::Load`] when the file is missing or cannot be
/// decoded. This is the one fatal input error of the pipeline: nothing
/// downstream can run without a decoded image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, RenderError> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}
