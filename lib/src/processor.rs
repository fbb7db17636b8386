use image::RgbaImage;

use crate::config::RenderConfig;
use crate::debug::DebugSink;
use crate::edges::sobel;
use crate::error::RenderError;
use crate::filters::difference_of_gaussians;
use crate::frame::Frame;
use crate::luminance::{luminance, luminance_image};
use crate::resample::resample_for_terminal;
use crate::resolver::Resolver;
use crate::theme::Theme;

/// Run the full image-to-glyph pipeline.
///
/// Stages:
/// 1. Resample the source onto the terminal grid (cell aspect aware)
/// 2. Fill every cell from its luminance, sampling colors if enabled
/// 3. Difference-of-Gaussians over the resampled image
/// 4. Sobel gradient extraction over the DoG output
/// 5. Overwrite cells whose gradient strength exceeds the cutoff with
///    directional edge glyphs
///
/// The two fill passes are sequential and the second only ever replaces
/// ramp characters with edge glyphs; no cell regresses. A zero-sized
/// target (or source) produces an empty frame, not an error.
///
/// # Arguments
/// * `source` - Decoded source image
/// * `columns` - Target grid width in character cells
/// * `rows` - Target grid height in character cells
/// * `config` - Cutoff, sigmas and color toggle
/// * `theme` - Character ramp and edge glyph map
/// * `debug` - Receiver for intermediate artifacts; pass
///   [`NoopSink`](crate::debug::NoopSink) to discard them
///
/// # Errors
/// Returns [`RenderError::InvalidConfig`] if the configuration fails
/// validation.
pub fn render_frame(
    source: &RgbaImage,
    columns: u32,
    rows: u32,
    config: &RenderConfig,
    theme: &dyn Theme,
    debug: &dyn DebugSink,
) -> Result<Frame, RenderError> {
    config.validate().map_err(RenderError::InvalidConfig)?;
    debug.save_rgba("original", source);

    let resampled = resample_for_terminal(source, columns, rows);
    let (width, height) = resampled.dimensions();
    log::debug!(
        "resampled {}x{} source into {columns}x{rows} target: {width}x{height} grid",
        source.width(),
        source.height()
    );
    debug.save_rgba("resampled", &resampled);
    debug.save_gray("luminance", &luminance_image(&resampled));

    let mut frame = Frame::new(width, height);
    if config.enable_color {
        frame.enable_colors();
    }

    let resolver = Resolver::new(theme, config.edge_cutoff);

    // Pass 1: luminance fill (and color sampling).
    for y in 0..height {
        for x in 0..width {
            let pixel = resampled.get_pixel(x, y);
            if config.enable_color {
                frame.set_color(x, y, *pixel);
            }
            frame.set(x, y, resolver.ramp_char(luminance(pixel)));
        }
    }
    debug.save_frame("luminance_fill", &frame);

    // Pass 2: edge overlay where gradient strength exceeds the cutoff.
    let dog = difference_of_gaussians(&resampled, config.sigma1, config.sigma2);
    debug.save_gray("dog", &dog);
    let edges = sobel(&dog);

    let mut edge_cells = 0u32;
    for y in 0..height {
        for x in 0..width {
            if let Some(glyph) = resolver.edge_overlay(edges.get(x, y)) {
                frame.set(x, y, glyph);
                edge_cells += 1;
            }
        }
    }
    log::debug!("edge overlay replaced {edge_cells} of {} cells", width * height);
    debug.save_frame("edge_overlay", &frame);

    Ok(frame)
}
