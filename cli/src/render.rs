//! ANSI render sink: turns a completed frame into escape-coded terminal
//! output.

use std::io::{self, Write};

use glyphcast::Frame;
use image::Rgba;

/// Background fill drawn behind the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundColor {
    #[default]
    None,
    Black,
    White,
}

impl BackgroundColor {
    fn code(self) -> &'static str {
        match self {
            BackgroundColor::None => "",
            BackgroundColor::Black => "\x1b[40m",
            BackgroundColor::White => "\x1b[47m",
        }
    }
}

/// Clear the screen and draw a frame.
///
/// With `use_color`, cells carrying a sampled color are drawn with
/// truecolor foreground codes; consecutive cells of the same color share
/// one code, and each row ends with a reset so the background survives
/// line wrapping. An empty frame draws nothing at all.
pub fn draw(
    out: &mut impl Write,
    frame: &Frame,
    bg: BackgroundColor,
    use_color: bool,
) -> io::Result<()> {
    if frame.is_empty() {
        return Ok(());
    }

    // Cursor home, clear screen
    write!(out, "\x1b[H\x1b[2J")?;

    let bg_code = bg.code();
    if !bg_code.is_empty() {
        write!(out, "{bg_code}")?;
    }

    for y in 0..frame.height() {
        let mut last_color: Option<Rgba<u8>> = None;
        for x in 0..frame.width() {
            if use_color
                && let Some(color) = frame.color(x, y)
                && last_color != Some(color)
            {
                write!(out, "\x1b[38;2;{};{};{}m", color[0], color[1], color[2])?;
                last_color = Some(color);
            }
            write!(out, "{}", frame.get(x, y))?;
        }

        if last_color.is_some() {
            write!(out, "\x1b[0m{bg_code}")?;
        }
        writeln!(out)?;
    }

    write!(out, "\x1b[0m")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(frame: &Frame, bg: BackgroundColor, use_color: bool) -> String {
        let mut buf = Vec::new();
        draw(&mut buf, frame, bg, use_color).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_draw_plain_frame() {
        let mut frame = Frame::new(2, 1);
        frame.set(0, 0, '@');
        frame.set(1, 0, '.');

        let output = drawn(&frame, BackgroundColor::None, false);
        assert!(output.starts_with("\x1b[H\x1b[2J"));
        assert!(output.contains("@."));
        assert!(output.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_draw_background_code() {
        let frame = Frame::new(1, 1);
        let output = drawn(&frame, BackgroundColor::Black, false);
        assert!(output.contains("\x1b[40m"));

        let output = drawn(&frame, BackgroundColor::White, false);
        assert!(output.contains("\x1b[47m"));
    }

    #[test]
    fn test_draw_truecolor_runs() {
        let mut frame = Frame::new(3, 1);
        frame.enable_colors();
        for x in 0..3 {
            frame.set(x, 0, '#');
            frame.set_color(x, 0, Rgba([10, 20, 30, 255]));
        }

        let output = drawn(&frame, BackgroundColor::None, true);
        // One code for the whole same-colored run, plus the row reset.
        assert_eq!(output.matches("\x1b[38;2;10;20;30m").count(), 1);
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_draw_empty_frame_is_noop() {
        let frame = Frame::new(0, 0);
        assert!(drawn(&frame, BackgroundColor::Black, true).is_empty());
    }
}
