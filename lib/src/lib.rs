//! Image-to-terminal glyph pipeline.
//!
//! Converts a raster image into a character grid sized for a terminal:
//! the image is resampled under a fixed character-cell aspect ratio,
//! every cell is mapped onto a brightness ramp, and cells sitting on
//! strong gradients (found by difference-of-Gaussians filtering followed
//! by Sobel extraction) are overwritten with directional edge glyphs.
//!
//! # Example
//! ```no_run
//! use glyphcast::debug::NoopSink;
//! use glyphcast::{DefaultTheme, RenderConfig, load_image, render_frame};
//!
//! let image = load_image("photo.jpg").unwrap();
//! let frame = render_frame(&image, 80, 24, &RenderConfig::default(), &DefaultTheme, &NoopSink)
//!     .unwrap();
//! for row in frame.rows() {
//!     println!("{}", row.iter().collect::<String>());
//! }
//! ```

pub mod config;
pub mod debug;
pub mod edges;
pub mod error;
pub mod filters;
pub mod frame;
pub mod loader;
pub mod luminance;
pub mod processor;
pub mod resample;
pub mod resolver;
pub mod theme;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::RenderError;
pub use frame::Frame;
pub use loader::load_image;
pub use processor::render_frame;
pub use theme::{DefaultTheme, Theme};
