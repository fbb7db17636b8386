use image::Rgba;

/// A rendered frame: a fixed-size grid of characters with an optional
/// parallel grid of source colors.
///
/// Created once at target dimensions and mutated in place cell by cell;
/// never resized. The color grid is allocated lazily, only when color
/// output is requested.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    cells: Vec<char>,
    colors: Option<Vec<Rgba<u8>>>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Frame {
        let len = (width as usize) * (height as usize);
        Frame {
            width,
            height,
            cells: vec![' '; len],
            colors: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Allocate the parallel color grid. Idempotent.
    pub fn enable_colors(&mut self) {
        if self.colors.is_none() {
            self.colors = Some(vec![Rgba([0, 0, 0, 255]); self.cells.len()]);
        }
    }

    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Set the character at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = ch;
        }
    }

    /// Character at (x, y), or a blank for out-of-bounds reads.
    pub fn get(&self, x: u32, y: u32) -> char {
        self.index(x, y).map_or(' ', |idx| self.cells[idx])
    }

    /// Store a cell color. Ignored unless colors are enabled and the
    /// coordinates are in bounds.
    pub fn set_color(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if let Some(idx) = self.index(x, y)
            && let Some(colors) = self.colors.as_mut()
        {
            colors[idx] = color;
        }
    }

    /// Cell color, or `None` when colors are disabled or the coordinates
    /// are out of bounds.
    pub fn color(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let idx = self.index(x, y)?;
        self.colors.as_ref().map(|colors| colors[idx])
    }

    /// Iterate over the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // max(1) keeps chunks() happy for zero-width frames; the cell
        // vector is empty then, so no rows are produced either way.
        self.cells.chunks((self.width as usize).max(1))
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_blank() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert!(!frame.is_empty());
        assert_eq!(frame.get(2, 1), ' ');
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut frame = Frame::new(4, 3);
        frame.set(2, 1, '@');
        assert_eq!(frame.get(2, 1), '@');
        assert_eq!(frame.get(1, 2), ' ');
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut frame = Frame::new(4, 3);
        frame.set(4, 0, '@'); // ignored
        frame.set(0, 3, '@'); // ignored
        assert_eq!(frame.get(4, 0), ' ');
        assert_eq!(frame.get(100, 100), ' ');
    }

    #[test]
    fn test_colors_disabled_by_default() {
        let mut frame = Frame::new(2, 2);
        assert!(!frame.has_colors());
        frame.set_color(0, 0, Rgba([255, 0, 0, 255]));
        assert_eq!(frame.color(0, 0), None);
    }

    #[test]
    fn test_colors_roundtrip_once_enabled() {
        let mut frame = Frame::new(2, 2);
        frame.enable_colors();
        frame.set_color(1, 1, Rgba([10, 20, 30, 255]));
        assert_eq!(frame.color(1, 1), Some(Rgba([10, 20, 30, 255])));
        assert_eq!(frame.color(0, 0), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(frame.color(5, 5), None);
    }

    #[test]
    fn test_rows_iteration() {
        let mut frame = Frame::new(3, 2);
        frame.set(0, 0, 'a');
        frame.set(2, 1, 'b');

        let rows: Vec<&[char]> = frame.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &['a', ' ', ' ']);
        assert_eq!(rows[1], &[' ', ' ', 'b']);
    }

    #[test]
    fn test_empty_frame_has_no_rows() {
        let frame = Frame::new(0, 0);
        assert!(frame.is_empty());
        assert_eq!(frame.rows().count(), 0);
    }
}
