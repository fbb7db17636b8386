//! Debug artifact sink.
//!
//! The pipeline hands intermediate artifacts (images, frames) to a
//! [`DebugSink`] tagged by name. The sink is a pure observer: it never
//! alters pipeline state or control flow, and dump failures are logged
//! rather than propagated. Pass [`NoopSink`] when inspection is not
//! needed.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use image::{GrayImage, Luma, RgbaImage};

use crate::frame::Frame;

/// Receiver for intermediate pipeline artifacts.
///
/// All methods default to doing nothing, so sinks only override what
/// they care about.
pub trait DebugSink {
    fn save_rgba(&self, name: &str, image: &RgbaImage) {
        let _ = (name, image);
    }

    fn save_gray(&self, name: &str, image: &GrayImage) {
        let _ = (name, image);
    }

    fn save_frame(&self, name: &str, frame: &Frame) {
        let _ = (name, frame);
    }
}

/// Sink that discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl DebugSink for NoopSink {}

/// Sink that writes numbered PNG files into a directory.
///
/// Artifacts are named `step_NN_<name>.png` in dump order, so a pipeline
/// run reads chronologically in a file listing.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    step: AtomicU32,
}

impl FileSink {
    /// Create the sink, making the output directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> std::io::Result<FileSink> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(FileSink {
            dir,
            step: AtomicU32::new(0),
        })
    }

    fn next_path(&self, name: &str) -> PathBuf {
        let step = self.step.fetch_add(1, Ordering::SeqCst) + 1;
        self.dir.join(format!("step_{step:02}_{name}.png"))
    }

    fn report(&self, path: &Path, result: image::ImageResult<()>) {
        match result {
            Ok(()) => log::debug!("saved debug artifact {}", path.display()),
            Err(err) => log::warn!("failed to save debug artifact {}: {err}", path.display()),
        }
    }
}

impl DebugSink for FileSink {
    fn save_rgba(&self, name: &str, image: &RgbaImage) {
        let path = self.next_path(name);
        self.report(&path, image.save(&path));
    }

    fn save_gray(&self, name: &str, image: &GrayImage) {
        let path = self.next_path(name);
        self.report(&path, image.save(&path));
    }

    fn save_frame(&self, name: &str, frame: &Frame) {
        // Visualize the character grid as a grayscale image, one pixel
        // per cell keyed on the character's code point.
        let mut img = GrayImage::new(frame.width(), frame.height());
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let gray = (frame.get(x, y) as u32 % 256) as u8;
                img.put_pixel(x, y, Luma([gray]));
            }
        }

        let path = self.next_path(name);
        self.report(&path, img.save(&path));
    }
}
