use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Rec. 709 luma weights for the red, green and blue channels.
pub const RED_WEIGHT: f32 = 0.2126;
pub const GREEN_WEIGHT: f32 = 0.7152;
pub const BLUE_WEIGHT: f32 = 0.0722;

/// Calculate the perceived brightness of a single pixel.
///
/// Formula: L = 0.2126*R + 0.7152*G + 0.0722*B on normalized channels.
/// The result is clamped to [0.0, 1.0] to absorb rounding; the alpha
/// channel does not participate.
///
/// # Arguments
/// * `pixel` - An RGBA color sample
///
/// # Returns
/// Normalized brightness in [0.0, 1.0]
pub fn luminance(pixel: &Rgba<u8>) -> f32 {
    let r = f32::from(pixel[0]) / 255.0;
    let g = f32::from(pixel[1]) / 255.0;
    let b = f32::from(pixel[2]) / 255.0;

    (RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b).clamp(0.0, 1.0)
}

/// Weighted luma of a pixel on the 0-255 scale, without normalization.
///
/// Used by the filter stages, which work in output-image units.
pub(crate) fn luma_255(pixel: &Rgba<u8>) -> f64 {
    f64::from(RED_WEIGHT) * f64::from(pixel[0])
        + f64::from(GREEN_WEIGHT) * f64::from(pixel[1])
        + f64::from(BLUE_WEIGHT) * f64::from(pixel[2])
}

/// Convert an RGBA image to a grayscale luminance image.
///
/// # Arguments
/// * `img` - Input RGBA image
///
/// # Returns
/// Grayscale image with luminance values on the 0-255 scale
pub fn luminance_image(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let lum = luminance(img.get_pixel(x, y));
            output.put_pixel(x, y, Luma([(lum * 255.0) as u8]));
        }
    }

    output
}
