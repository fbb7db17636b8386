use crate::edges::EdgeDirection;

/// A character theme: a brightness ramp plus an edge-stroke glyph map.
///
/// Themes are immutable after construction; the pipeline only reads from
/// them.
pub trait Theme {
    /// Ramp of characters ordered darkest to brightest. An empty ramp is
    /// tolerated: the resolver falls back to a blank glyph.
    fn characters(&self) -> &[char];

    /// Glyph for a classified edge direction, or `None` if the theme does
    /// not define that bin (the resolver then uses
    /// [`EdgeDirection::fallback_char`]).
    fn edge_char(&self, direction: EdgeDirection) -> Option<char>;
}

/// Ramp used by [`DefaultTheme`], 10 levels from space to '#'.
pub const DEFAULT_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '%', '@', '#'];

/// The built-in theme: the 10-level ramp above and straight-line edge
/// glyphs `| - / \`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn characters(&self) -> &[char] {
        &DEFAULT_RAMP
    }

    fn edge_char(&self, direction: EdgeDirection) -> Option<char> {
        Some(match direction {
            EdgeDirection::Vertical => '|',
            EdgeDirection::Horizontal => '-',
            EdgeDirection::DiagonalForward => '/',
            EdgeDirection::DiagonalBack => '\\',
        })
    }
}
