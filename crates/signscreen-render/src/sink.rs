//! Primitive paint operations consumed by the renderer and widgets.

use core::convert::Infallible;

use signscreen::{Color, FontId, Rect};

/// Display driver abstraction: the primitive paint calls the core issues.
///
/// Every paint issues fresh primitive calls; there is no frame buffering or
/// diffing at this layer. `x`/`y` address the text baseline origin, matching
/// the device driver's convention.
pub trait DisplaySink {
    type Error;

    /// Draw `text` with its left edge at `x` and baseline at `y`.
    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error>;

    /// Draw `text` horizontally centered on `x`.
    fn text_center(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error>;

    /// Draw `text` with its right edge at `x`.
    fn text_right(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error>;

    /// Fill `area` with `color`.
    fn bar(&mut self, area: Rect, color: Color) -> Result<(), Self::Error>;

    /// Draw the screen header bar with `title` and a named icon.
    fn header(
        &mut self,
        title: &str,
        icon: &str,
        fg: Color,
        bg: Color,
        icon_color: Color,
    ) -> Result<(), Self::Error>;
}

/// One recorded primitive call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text {
        x: i32,
        y: i32,
        text: String,
        font: FontId,
        fg: Color,
        bg: Color,
    },
    TextCenter {
        x: i32,
        y: i32,
        text: String,
        font: FontId,
        fg: Color,
        bg: Color,
    },
    TextRight {
        x: i32,
        y: i32,
        text: String,
        font: FontId,
        fg: Color,
        bg: Color,
    },
    Bar {
        area: Rect,
        color: Color,
    },
    Header {
        title: String,
        icon: String,
        fg: Color,
        bg: Color,
        icon_color: Color,
    },
}

/// Sink that records primitive calls instead of painting.
///
/// Used by tests and host-side tooling to assert on exact paint output
/// without display hardware.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSink {
    pub ops: Vec<DrawOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text payloads of all recorded text ops, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. }
                | DrawOp::TextCenter { text, .. }
                | DrawOp::TextRight { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySink for RecordingSink {
    type Error = Infallible;

    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font,
            fg,
            bg,
        });
        Ok(())
    }

    fn text_center(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Infallible> {
        self.ops.push(DrawOp::TextCenter {
            x,
            y,
            text: text.to_string(),
            font,
            fg,
            bg,
        });
        Ok(())
    }

    fn text_right(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Infallible> {
        self.ops.push(DrawOp::TextRight {
            x,
            y,
            text: text.to_string(),
            font,
            fg,
            bg,
        });
        Ok(())
    }

    fn bar(&mut self, area: Rect, color: Color) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Bar { area, color });
        Ok(())
    }

    fn header(
        &mut self,
        title: &str,
        icon: &str,
        fg: Color,
        bg: Color,
        icon_color: Color,
    ) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Header {
            title: title.to_string(),
            icon: icon.to_string(),
            fg,
            bg,
            icon_color,
        });
        Ok(())
    }
}
