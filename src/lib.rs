//! Pixel-exact styled text layout for embedded signing-device screens.
//!
//! A confirmation screen on a hardware signing device is built from a styled
//! token stream: words interleaved with font, color and line-break directives.
//! This crate turns such a stream plus a fixed [`Viewport`] into a bounded
//! sequence of width-fitted lines, splitting words mid-string with a hyphen
//! when they overflow and synthesizing an ellipsis when the vertical budget
//! runs out. Layout runs in a single greedy pass with no reflow; each screen
//! is broken and painted exactly once.
//!
//! Pixel widths come from a [`TextMetrics`] implementation supplied by the
//! display backend. Painting itself lives in the `signscreen-render` crate;
//! an `embedded-graphics` backend is provided by
//! `signscreen-embedded-graphics`.

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

pub mod linebreak;
pub mod metrics;
pub mod style;
pub mod token;
pub mod viewport;

pub use linebreak::{LayoutResult, Line, LineBreaker, WrapMode};
pub use metrics::TextMetrics;
pub use style::{consts, Color, FontId, TextStyle};
pub use token::{BreakKind, ContentItem, StyleToken};
pub use viewport::{Rect, Viewport};
