//! embedded-graphics display backend for `signscreen-render`.
//!
//! Maps the three logical faces onto embedded-graphics mono fonts, converts
//! RGB565 color words into [`Rgb565`], and implements both the width oracle
//! ([`signscreen::TextMetrics`]) and the paint surface
//! ([`signscreen_render::DisplaySink`]) over any `DrawTarget<Color = Rgb565>`.

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

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_7X13, FONT_7X13_BOLD, FONT_8X13},
        MonoFont, MonoTextStyleBuilder,
    },
    pixelcolor::{raw::RawU16, Rgb565},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use signscreen::{consts, Color, FontId, Rect, TextMetrics};
use signscreen_render::DisplaySink;

// Header icons render as a filled square of the icon color; the device's
// bitmap resources are not part of this backend.
const ICON_SIZE: u32 = 16;
const ICON_X: i32 = 14;
const ICON_Y: i32 = 18;
const HEADER_TITLE_X: i32 = 44;
const HEADER_TITLE_Y: i32 = 35;

/// Mono face for a logical font id.
pub fn face(font: FontId) -> &'static MonoFont<'static> {
    match font {
        FontId::Normal => &FONT_7X13,
        FontId::Bold => &FONT_7X13_BOLD,
        FontId::Mono => &FONT_8X13,
    }
}

/// Convert an RGB565 color word into an embedded-graphics color.
pub fn rgb(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.0))
}

/// Width oracle backed by the mono faces above.
///
/// Layout and painting must share this model, otherwise broken lines
/// disagree with painted glyph runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct EgTextMetrics;

impl TextMetrics for EgTextMetrics {
    fn char_width(&self, _ch: char, font: FontId) -> i32 {
        let face = face(font);
        (face.character_size.width + face.character_spacing) as i32
    }
}

/// [`DisplaySink`] over any embedded-graphics RGB565 draw target.
pub struct EgDisplay<D> {
    display: D,
}

impl<D> EgDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn into_inner(self) -> D {
        self.display
    }

    fn draw_text_at(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), D::Error> {
        let style = MonoTextStyleBuilder::new()
            .font(face(font))
            .text_color(rgb(fg))
            .background_color(rgb(bg))
            .build();
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic)
            .draw(&mut self.display)?;
        Ok(())
    }
}

impl<D> DisplaySink for EgDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error> {
        self.draw_text_at(x, y, text, font, fg, bg)
    }

    fn text_center(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error> {
        let width = EgTextMetrics.text_width(text, font);
        self.draw_text_at(x - width / 2, y, text, font, fg, bg)
    }

    fn text_right(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: FontId,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error> {
        let width = EgTextMetrics.text_width(text, font);
        self.draw_text_at(x - width, y, text, font, fg, bg)
    }

    fn bar(&mut self, area: Rect, color: Color) -> Result<(), Self::Error> {
        Rectangle::new(
            Point::new(area.x, area.y),
            Size::new(area.width as u32, area.height as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(rgb(color)))
        .draw(&mut self.display)
    }

    fn header(
        &mut self,
        title: &str,
        _icon: &str,
        fg: Color,
        bg: Color,
        icon_color: Color,
    ) -> Result<(), Self::Error> {
        self.bar(
            Rect::new(0, 0, consts::DISPLAY_WIDTH, consts::TEXT_HEADER_HEIGHT),
            bg,
        )?;
        Rectangle::new(Point::new(ICON_X, ICON_Y), Size::new(ICON_SIZE, ICON_SIZE))
            .into_styled(PrimitiveStyle::with_fill(rgb(icon_color)))
            .draw(&mut self.display)?;
        self.draw_text_at(HEADER_TITLE_X, HEADER_TITLE_Y, title, FontId::Bold, fg, bg)
    }
}
