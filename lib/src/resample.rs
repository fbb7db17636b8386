use image::RgbaImage;

/// Terminal character cells are roughly twice as tall as they are wide,
/// so one cell covers a 1x2 region in pixel-equivalent units.
pub const CELL_ASPECT_RATIO: f64 = 0.5;

/// Resample an image onto a terminal character grid.
///
/// Picks the largest grid that fits inside `columns` x `rows` while
/// preserving the source aspect ratio under the fixed cell shape: the
/// target height is divided by [`CELL_ASPECT_RATIO`] to get the grid's
/// effective aspect, the binding axis is chosen from comparing source and
/// effective aspects, and the other axis is derived from it. If rounding
/// pushes a dimension past the bounds it is clamped and the other axis
/// recomputed. Sampling is nearest-neighbor with source coordinates
/// clamped to the valid range.
///
/// A zero-sized source or target yields an empty image; downstream stages
/// treat an empty image as valid input.
pub fn resample_for_terminal(img: &RgbaImage, columns: u32, rows: u32) -> RgbaImage {
    let (src_width, src_height) = img.dimensions();
    if src_width == 0 || src_height == 0 || columns == 0 || rows == 0 {
        return RgbaImage::new(0, 0);
    }

    let img_aspect = f64::from(src_width) / f64::from(src_height);
    let effective_rows = f64::from(rows) / CELL_ASPECT_RATIO;
    let term_aspect = f64::from(columns) / effective_rows;

    let mut new_width;
    let mut new_height;
    if img_aspect > term_aspect {
        new_width = columns;
        new_height = (f64::from(columns) / img_aspect * CELL_ASPECT_RATIO) as u32;
    } else {
        new_height = rows;
        new_width = (f64::from(rows) * img_aspect / CELL_ASPECT_RATIO) as u32;
    }

    if new_width > columns {
        new_width = columns;
        new_height = (f64::from(columns) / img_aspect * CELL_ASPECT_RATIO) as u32;
    }
    if new_height > rows {
        new_height = rows;
        new_width = (f64::from(rows) * img_aspect / CELL_ASPECT_RATIO) as u32;
    }

    // Extreme aspect ratios can round one axis below a single cell.
    if new_width == 0 || new_height == 0 {
        return RgbaImage::new(0, 0);
    }

    let scale_x = f64::from(src_width) / f64::from(new_width);
    let scale_y = f64::from(src_height) / f64::from(new_height);

    let mut resampled = RgbaImage::new(new_width, new_height);
    for y in 0..new_height {
        let src_y = ((f64::from(y) * scale_y) as u32).min(src_height - 1);
        for x in 0..new_width {
            let src_x = ((f64::from(x) * scale_x) as u32).min(src_width - 1);
            resampled.put_pixel(x, y, *img.get_pixel(src_x, src_y));
        }
    }

    resampled
}
