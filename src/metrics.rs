//! Pixel-width measurement hook supplied by the display backend.

use crate::style::FontId;

/// Pixel-width oracle for the device's fixed font set.
///
/// Implementations must be deterministic and non-negative. `text_width`
/// must stay additive over concatenation; the per-character default
/// guarantees this, and overriding implementations must preserve it or the
/// breaker's backward split scan loses its meaning.
pub trait TextMetrics {
    /// Width in pixels of a single glyph in `font`.
    fn char_width(&self, ch: char, font: FontId) -> i32;

    /// Width in pixels of `text`: the sum of its glyph widths.
    fn text_width(&self, text: &str, font: FontId) -> i32 {
        text.chars().map(|ch| self.char_width(ch, font)).sum()
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn char_width(&self, ch: char, font: FontId) -> i32 {
        (**self).char_width(ch, font)
    }

    fn text_width(&self, text: &str, font: FontId) -> i32 {
        (**self).text_width(text, font)
    }
}
