use crate::edges::{EdgeSample, classify_direction};
use crate::theme::Theme;

/// Decides the final character for a cell from its luminance and edge
/// sample.
///
/// Policy: edge takes precedence over luminance. A gradient stronger than
/// the cutoff always yields the direction-classified edge glyph, whatever
/// the brightness underneath; everything else maps linearly onto the
/// theme's ramp. The transition at the cutoff is deliberately hard.
pub struct Resolver<'a> {
    theme: &'a dyn Theme,
    edge_cutoff: f32,
}

impl<'a> Resolver<'a> {
    pub fn new(theme: &'a dyn Theme, edge_cutoff: f32) -> Resolver<'a> {
        Resolver { theme, edge_cutoff }
    }

    /// Resolve a cell to its final character.
    pub fn resolve(&self, luminance: f32, edge: EdgeSample) -> char {
        self.edge_overlay(edge)
            .unwrap_or_else(|| self.ramp_char(luminance))
    }

    /// The edge glyph for this sample, if its strength exceeds the
    /// cutoff.
    pub fn edge_overlay(&self, edge: EdgeSample) -> Option<char> {
        if edge.strength > self.edge_cutoff {
            let direction = classify_direction(edge.direction);
            Some(
                self.theme
                    .edge_char(direction)
                    .unwrap_or_else(|| direction.fallback_char()),
            )
        } else {
            None
        }
    }

    /// Map a luminance value onto the theme's character ramp.
    ///
    /// `index = floor(luminance * ramp_len)`, clamped into bounds. The
    /// cast saturates, so NaN or negative input lands on the darkest
    /// character rather than panicking.
    pub fn ramp_char(&self, luminance: f32) -> char {
        let chars = self.theme.characters();
        if chars.is_empty() {
            return ' ';
        }

        let lum = luminance.clamp(0.0, 1.0);
        let index = ((lum * chars.len() as f32) as usize).min(chars.len() - 1);
        chars[index]
    }
}
