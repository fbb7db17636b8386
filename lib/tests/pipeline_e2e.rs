//! End-to-end tests for the image-to-glyph pipeline.
//!
//! These drive `render_frame` with synthetic images and verify the
//! frame-level contracts: ramp mapping, edge precedence, degenerate
//! geometry, and color sampling.

use glyphcast::debug::NoopSink;
use glyphcast::theme::DEFAULT_RAMP;
use glyphcast::{DefaultTheme, RenderConfig, render_frame};
use image::{Rgba, RgbaImage};

const EDGE_GLYPHS: [char; 4] = ['|', '-', '/', '\\'];

fn uniform(width: u32, height: u32, value: u8) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
}

fn render(img: &RgbaImage, columns: u32, rows: u32, config: &RenderConfig) -> glyphcast::Frame {
    render_frame(img, columns, rows, config, &DefaultTheme, &NoopSink).unwrap()
}

#[test]
fn uniform_mid_gray_scenario() {
    // Uniform mid-gray: gradient strength is zero everywhere, so every
    // cell shows the mid-ramp character ('+', index 5 of 10).
    let img = uniform(4, 4, 128);
    let frame = render(&img, 4, 2, &RenderConfig::default());

    assert_eq!((frame.width(), frame.height()), (4, 2));
    for row in frame.rows() {
        assert!(row.iter().all(|&ch| ch == '+'), "row was {row:?}");
    }
}

#[test]
fn black_and_white_hit_the_ramp_ends() {
    let frame = render(&uniform(8, 8, 0), 8, 4, &RenderConfig::default());
    for row in frame.rows() {
        assert!(row.iter().all(|&ch| ch == DEFAULT_RAMP[0]));
    }

    let frame = render(&uniform(8, 8, 255), 8, 4, &RenderConfig::default());
    for row in frame.rows() {
        assert!(row.iter().all(|&ch| ch == DEFAULT_RAMP[9]));
    }
}

#[test]
fn degenerate_geometry_is_not_an_error() {
    let img = uniform(16, 16, 128);
    for (columns, rows) in [(0, 24), (80, 0), (0, 0)] {
        let frame = render(&img, columns, rows, &RenderConfig::default());
        assert!(frame.is_empty());
        assert_eq!(frame.rows().count(), 0);
    }

    let empty = RgbaImage::new(0, 0);
    let frame = render(&empty, 80, 24, &RenderConfig::default());
    assert!(frame.is_empty());
}

#[test]
fn output_fits_inside_the_target_grid() {
    for (w, h) in [(640, 480), (480, 640), (1000, 50), (50, 1000)] {
        let frame = render(&uniform(w, h, 90), 80, 24, &RenderConfig::default());
        assert!(frame.width() <= 80);
        assert!(frame.height() <= 24);
    }
}

#[test]
fn high_contrast_stripe_produces_edge_glyphs() {
    // A white stripe on black: the DoG output varies strongly around the
    // stripe borders, so with a low cutoff some cells must become edge
    // glyphs, and untouched cells keep ramp characters.
    let mut img = uniform(64, 64, 0);
    for y in 0..64 {
        for x in 28..36 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }

    let config = RenderConfig {
        edge_cutoff: 10.0,
        ..Default::default()
    };
    let frame = render(&img, 32, 32, &config);

    let mut edge_cells = 0;
    let mut ramp_cells = 0;
    for row in frame.rows() {
        for &ch in row {
            if EDGE_GLYPHS.contains(&ch) {
                edge_cells += 1;
            } else {
                assert!(DEFAULT_RAMP.contains(&ch), "unexpected glyph {ch:?}");
                ramp_cells += 1;
            }
        }
    }
    assert!(edge_cells > 0, "no edge glyphs rendered");
    assert!(ramp_cells > 0, "edge overlay swallowed the whole frame");
}

#[test]
fn edges_washed_out_by_a_high_cutoff() {
    // Same stripe, but with an unreachable cutoff the overlay never
    // fires: gradient magnitude on a 0-255 image tops out below 1500.
    let mut img = uniform(64, 64, 0);
    for y in 0..64 {
        for x in 28..36 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }

    let config = RenderConfig {
        edge_cutoff: 2000.0,
        ..Default::default()
    };
    let frame = render(&img, 32, 32, &config);

    for row in frame.rows() {
        for &ch in row {
            assert!(DEFAULT_RAMP.contains(&ch));
        }
    }
}

#[test]
fn color_grid_samples_the_source() {
    let img = uniform(4, 4, 200);
    let config = RenderConfig {
        enable_color: true,
        ..Default::default()
    };
    let frame = render(&img, 4, 2, &config);

    assert!(frame.has_colors());
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            assert_eq!(frame.color(x, y), Some(Rgba([200, 200, 200, 255])));
        }
    }
}

#[test]
fn color_grid_absent_by_default() {
    let frame = render(&uniform(4, 4, 200), 4, 2, &RenderConfig::default());
    assert!(!frame.has_colors());
    assert_eq!(frame.color(0, 0), None);
}
