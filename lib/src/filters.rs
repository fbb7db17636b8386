use image::{GrayImage, RgbaImage};
use rayon::prelude::*;

use crate::luminance::luma_255;

/// A square, odd-sized convolution kernel with weights normalized to sum
/// to 1.0.
///
/// Weights are kept in f64: the normalization invariant is tighter than
/// f32 rounding allows.
#[derive(Debug, Clone)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a normalized Gaussian kernel for the given spread.
    ///
    /// The size is derived from sigma as `2*ceil(3*sigma) + 1`, never
    /// smaller than 3, so the kernel covers three standard deviations on
    /// each side of the center.
    ///
    /// # Panics
    /// Panics if `sigma` is not a positive finite number.
    pub fn gaussian(sigma: f32) -> Kernel {
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "sigma must be positive, got {sigma}"
        );
        let sigma = f64::from(sigma);

        let size = (((3.0 * sigma).ceil() as usize) * 2 + 1).max(3);
        let radius = (size / 2) as i64;

        let mut weights = Vec::with_capacity(size * size);
        let mut sum = 0.0;
        for ky in 0..size {
            for kx in 0..size {
                let dx = (kx as i64 - radius) as f64;
                let dy = (ky as i64 - radius) as f64;
                let value = (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
                weights.push(value);
                sum += value;
            }
        }
        for weight in &mut weights {
            *weight /= sum;
        }

        Kernel { size, weights }
    }

    /// Side length of the kernel (odd, >= 3).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center to the edge of the kernel.
    pub fn radius(&self) -> i64 {
        (self.size / 2) as i64
    }

    /// Weight at kernel position (kx, ky).
    pub fn weight(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }

    /// Sum of all weights; 1.0 up to rounding after normalization.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Apply a dense 2D Gaussian blur to an RGBA image.
///
/// All four channels, alpha included, are convolved independently with a
/// kernel built per [`Kernel::gaussian`]. Samples outside the image are
/// clamped to the nearest edge pixel. Output dimensions equal the input.
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `sigma` - Standard deviation of the Gaussian, must be positive
///
/// # Returns
/// Blurred image of the same dimensions
pub fn gaussian_blur(img: &RgbaImage, sigma: f32) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return RgbaImage::new(width, height);
    }

    let kernel = Kernel::gaussian(sigma);
    let radius = kernel.radius();

    let data: Vec<u8> = (0..(width as usize) * (height as usize))
        .into_par_iter()
        .flat_map_iter(|idx| {
            let x = idx as u32 % width;
            let y = idx as u32 / width;

            let mut acc = [0.0f64; 4];
            for ky in 0..kernel.size() {
                for kx in 0..kernel.size() {
                    let sx = (i64::from(x) + kx as i64 - radius).clamp(0, i64::from(width) - 1);
                    let sy = (i64::from(y) + ky as i64 - radius).clamp(0, i64::from(height) - 1);
                    let sample = img.get_pixel(sx as u32, sy as u32);
                    let weight = kernel.weight(kx, ky);

                    for (channel, value) in acc.iter_mut().enumerate() {
                        *value += f64::from(sample[channel]) * weight;
                    }
                }
            }

            acc.into_iter().map(|value| value.clamp(0.0, 255.0) as u8)
        })
        .collect();

    RgbaImage::from_raw(width, height, data).expect("pixel buffer matches image dimensions")
}

/// Difference of Gaussians: a band-pass edge-enhancement filter.
///
/// The image is blurred at both spreads, each result reduced to luma on
/// the 0-255 scale, and the difference re-centered around mid-gray:
/// `value = clamp((g1 - g2 + 255) / 2, 0, 255)`. A uniform input thus
/// maps to ~127 everywhere, and deviations from mid-gray mark edges.
/// The typical invocation uses `sigma1 < sigma2` (defaults 0.5 and 1.5).
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `sigma1` - Spread of the first (narrow) blur
/// * `sigma2` - Spread of the second (wide) blur
///
/// # Returns
/// Single-channel image of the same dimensions
pub fn difference_of_gaussians(img: &RgbaImage, sigma1: f32, sigma2: f32) -> GrayImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }

    let blur1 = gaussian_blur(img, sigma1);
    let blur2 = gaussian_blur(img, sigma2);

    let data: Vec<u8> = (0..(width as usize) * (height as usize))
        .into_par_iter()
        .map(|idx| {
            let x = idx as u32 % width;
            let y = idx as u32 / width;

            let g1 = luma_255(blur1.get_pixel(x, y));
            let g2 = luma_255(blur2.get_pixel(x, y));

            let diff = g1 - g2;
            ((diff + 255.0) / 2.0).clamp(0.0, 255.0) as u8
        })
        .collect();

    GrayImage::from_raw(width, height, data).expect("pixel buffer matches image dimensions")
}
