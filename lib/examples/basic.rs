//! Basic example: render a synthetic image to stdout.
//!
//! Draws a bright circle on a gray background and prints the resulting
//! character grid, edges and all.

use glyphcast::debug::NoopSink;
use glyphcast::{DefaultTheme, RenderConfig, render_frame};
use image::{Rgba, RgbaImage};

fn main() {
    let width = 128;
    let height = 128;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([60, 60, 60, 255]));

    // White circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 40.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            if (dx * dx + dy * dy).sqrt() <= radius {
                img.put_pixel(x, y, Rgba([230, 230, 230, 255]));
            }
        }
    }

    let config = RenderConfig::default();
    let frame = render_frame(&img, 60, 30, &config, &DefaultTheme, &NoopSink)
        .expect("default config is valid");

    for row in frame.rows() {
        println!("{}", row.iter().collect::<String>());
    }
}
