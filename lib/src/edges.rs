use image::GrayImage;
use rayon::prelude::*;
use std::f32::consts::PI;

/// Sobel kernels for the horizontal and vertical gradient components.
const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Gradient measurement at a single grid position.
///
/// `strength` is the gradient magnitude on the 0-255 luma scale;
/// `direction` is the raw `atan2(gy, gx)` angle in radians and may be
/// negative. It is normalized by [`classify_direction`] before use.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeSample {
    pub strength: f32,
    pub direction: f32,
}

/// Per-pixel gradient samples for a whole image.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    width: u32,
    height: u32,
    samples: Vec<EdgeSample>,
}

impl EdgeMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at (x, y). Coordinates must be inside the map.
    pub fn get(&self, x: u32, y: u32) -> EdgeSample {
        self.samples[(y * self.width + x) as usize]
    }
}

/// Extract per-pixel gradients with the 3x3 Sobel operator.
///
/// The input is expected to be a luma image on the 0-255 scale (in this
/// pipeline, the difference-of-Gaussians output). Border samples are
/// clamped to the nearest edge pixel, so every pixel gets a full 3x3
/// neighborhood.
///
/// # Arguments
/// * `img` - Single-channel input image
///
/// # Returns
/// An [`EdgeMap`] with one sample per input pixel
pub fn sobel(img: &GrayImage) -> EdgeMap {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return EdgeMap {
            width,
            height,
            samples: Vec::new(),
        };
    }

    let samples = (0..(width as usize) * (height as usize))
        .into_par_iter()
        .map(|idx| {
            let x = idx as u32 % width;
            let y = idx as u32 / width;

            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for ky in 0..3usize {
                for kx in 0..3usize {
                    let sx = (i64::from(x) + kx as i64 - 1).clamp(0, i64::from(width) - 1);
                    let sy = (i64::from(y) + ky as i64 - 1).clamp(0, i64::from(height) - 1);
                    let sample = f32::from(img.get_pixel(sx as u32, sy as u32)[0]);

                    gx += sample * SOBEL_X[ky][kx];
                    gy += sample * SOBEL_Y[ky][kx];
                }
            }

            EdgeSample {
                strength: (gx * gx + gy * gy).sqrt(),
                direction: gy.atan2(gx),
            }
        })
        .collect();

    EdgeMap {
        width,
        height,
        samples,
    }
}

/// The four canonical edge-stroke directions.
///
/// Named for the stroke drawn in the output, not the gradient vector: a
/// horizontal gradient crosses a vertical contour, so it classifies as
/// `Vertical`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Gradient near 0° or 180°; drawn as a vertical stroke.
    Vertical,
    /// Gradient near 90° or 270°; drawn as a horizontal stroke.
    Horizontal,
    /// Gradient near 45° or 225°; drawn as '/'.
    DiagonalForward,
    /// Gradient near 135° or 315°; drawn as '\'.
    DiagonalBack,
}

impl EdgeDirection {
    /// Glyph used when the active theme does not define this direction.
    pub fn fallback_char(self) -> char {
        match self {
            EdgeDirection::Vertical => '|',
            EdgeDirection::Horizontal => '-',
            EdgeDirection::DiagonalForward => '/',
            EdgeDirection::DiagonalBack => '\\',
        }
    }
}

/// Classify a gradient angle into one of the four direction bins.
///
/// The angle may be any real value; it is wrapped into [0, 2π), converted
/// to degrees and bucketed into 45°-wide bins centered on the cardinal
/// and diagonal angles, with boundaries at 22.5° + k*45°.
pub fn classify_direction(direction: f32) -> EdgeDirection {
    let deg = direction.rem_euclid(2.0 * PI).to_degrees();

    if !(22.5..337.5).contains(&deg) || (157.5..202.5).contains(&deg) {
        EdgeDirection::Vertical
    } else if (67.5..112.5).contains(&deg) || (247.5..292.5).contains(&deg) {
        EdgeDirection::Horizontal
    } else if (22.5..67.5).contains(&deg) || (202.5..247.5).contains(&deg) {
        EdgeDirection::DiagonalForward
    } else {
        EdgeDirection::DiagonalBack
    }
}
