//! Painting layer for `signscreen` layouts.
//!
//! The [`Renderer`] walks a broken (or raw) token stream and issues primitive
//! paint calls against a [`DisplaySink`], the thin abstraction over the
//! device's display driver. On top of it sit the single-use screen widgets:
//! [`Text`] for header + wrapped body screens and [`Label`] for one-line
//! strings inside a fixed area, plus center-trim helpers for strings that
//! must be forced into a given width.

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod renderer;
pub mod sink;
pub mod trim;
pub mod widget;

pub use renderer::Renderer;
pub use sink::{DisplaySink, DrawOp, RecordingSink};
pub use trim::{text_center_trim_left, text_center_trim_right};
pub use widget::{Align, Label, Text, ICON_DEFAULT};

#[cfg(test)]
pub(crate) mod test_util {
    use signscreen::{FontId, TextMetrics};

    /// Monospace fake where every glyph is 10px in every font.
    pub struct TenPx;

    impl TextMetrics for TenPx {
        fn char_width(&self, _ch: char, _font: FontId) -> i32 {
            10
        }
    }
}
