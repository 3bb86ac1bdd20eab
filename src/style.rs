//! Font identifiers, RGB565 colors and the fixed device geometry.

use serde::{Deserialize, Serialize};

/// Identifier for one of the device's fixed font faces.
///
/// The font set is small and baked into firmware; there is no dynamic
/// loading. `Mono` is used for addresses and other data where glyph
/// alignment matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontId {
    Normal,
    Bold,
    Mono,
}

/// RGB565 color value as sent to the display controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    /// Pack 8-bit channels into RGB565.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xf8) << 8) | (((g as u16) & 0xfc) << 3) | ((b as u16) >> 3))
    }
}

/// Active font/foreground/background for a run of painted words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontId,
    pub fg: Color,
    pub bg: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontId::Normal,
            fg: consts::FG,
            bg: consts::BG,
        }
    }
}

/// Fixed display geometry and palette of the target device.
pub mod consts {
    use super::Color;

    pub const DISPLAY_WIDTH: i32 = 240;
    pub const DISPLAY_HEIGHT: i32 = 240;

    /// Height of the header bar at the top of every text screen.
    pub const TEXT_HEADER_HEIGHT: i32 = 48;
    /// Full baseline-to-baseline advance.
    pub const TEXT_LINE_HEIGHT: i32 = 26;
    /// Half advance, used for tighter grouping of related lines.
    pub const TEXT_LINE_HEIGHT_HALF: i32 = 13;
    pub const TEXT_MARGIN_LEFT: i32 = 14;
    /// Default vertical budget of a text screen.
    pub const TEXT_MAX_LINES: usize = 5;

    pub const FG: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BG: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const GREY: Color = Color::rgb(0x99, 0x99, 0x99);
    pub const TITLE_GREY: Color = Color::rgb(0x9b, 0x9b, 0x9b);
    pub const ORANGE_ICON: Color = Color::rgb(0xf5, 0xa6, 0x23);
    pub const RED: Color = Color::rgb(0xe4, 0x57, 0x2e);
    pub const GREEN: Color = Color::rgb(0x4c, 0xc1, 0x48);
}
