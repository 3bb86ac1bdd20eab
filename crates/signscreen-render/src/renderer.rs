//! Token-stream painting with an advancing render cursor.

use log::debug;
use signscreen::{
    BreakKind, ContentItem, LayoutResult, LineBreaker, StyleToken, TextMetrics, TextStyle,
    Viewport, WrapMode,
};

use crate::sink::DisplaySink;

/// Paints content or pre-broken lines onto a [`DisplaySink`].
///
/// The renderer owns no display state: a fresh cursor is initialized from
/// the viewport at the start of every render pass, and both entry points
/// flatten into the same item-painting loop.
pub struct Renderer<'a> {
    metrics: &'a dyn TextMetrics,
}

impl<'a> Renderer<'a> {
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self { metrics }
    }

    /// Break `content` and paint the resulting lines.
    pub fn render_content<S: DisplaySink + ?Sized>(
        &self,
        sink: &mut S,
        content: &[ContentItem],
        viewport: &Viewport,
        mode: WrapMode,
        style: TextStyle,
    ) -> Result<(), S::Error> {
        let layout = LineBreaker::new(self.metrics).break_lines(
            content,
            viewport,
            mode,
            style.font,
            style.fg,
        );
        self.paint_items(sink, layout.flatten(), viewport, style)
    }

    /// Paint an already-broken layout.
    pub fn render_lines<S: DisplaySink + ?Sized>(
        &self,
        sink: &mut S,
        layout: &LayoutResult,
        viewport: &Viewport,
        style: TextStyle,
    ) -> Result<(), S::Error> {
        self.paint_items(sink, layout.flatten(), viewport, style)
    }

    /// Paint a raw token stream as-is, trusting its line breaks.
    pub fn render_raw<S: DisplaySink + ?Sized>(
        &self,
        sink: &mut S,
        items: &[ContentItem],
        viewport: &Viewport,
        style: TextStyle,
    ) -> Result<(), S::Error> {
        self.paint_items(sink, items.iter(), viewport, style)
    }

    fn paint_items<'i, S, I>(
        &self,
        sink: &mut S,
        items: I,
        viewport: &Viewport,
        style: TextStyle,
    ) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
        I: IntoIterator<Item = &'i ContentItem>,
    {
        let mut x = viewport.margin_left;
        let mut y = viewport.baseline_y;
        let mut font = style.font;
        let mut fg = style.fg;

        for item in items {
            match item {
                ContentItem::Style(StyleToken::Break(kind)) => {
                    let advance = match kind {
                        BreakKind::Full => viewport.line_height,
                        BreakKind::Half => viewport.half_line_height,
                    };
                    // Defensive bound; breaker output never gets here.
                    if y + advance > viewport.last_baseline() {
                        debug!("paint stopped: vertical budget exhausted at y={y}");
                        return Ok(());
                    }
                    x = viewport.margin_left;
                    y += advance;
                }
                ContentItem::Style(StyleToken::Font(new_font)) => font = *new_font,
                ContentItem::Style(StyleToken::Color(color)) => fg = *color,
                ContentItem::Space => {
                    sink.text(x, y, " ", font, fg, style.bg)?;
                    x += self.metrics.text_width(" ", font);
                }
                ContentItem::Word(word) => {
                    sink.text(x, y, word, font, fg, style.bg)?;
                    x += self.metrics.text_width(word, font);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use signscreen::{consts, ContentItem, FontId, LineBreaker, TextStyle, Viewport, WrapMode};

    use super::Renderer;
    use crate::sink::{DrawOp, RecordingSink};
    use crate::test_util::TenPx;

    fn viewport(width: i32, max_lines: usize) -> Viewport {
        Viewport {
            width,
            margin_left: 0,
            baseline_y: 26,
            line_height: 26,
            half_line_height: 13,
            max_lines,
        }
    }

    #[test]
    fn cursor_advances_by_measured_widths() {
        let vp = viewport(240, 5);
        let content = vec![ContentItem::word("abc"), ContentItem::word("de")];
        let mut sink = RecordingSink::new();
        Renderer::new(&TenPx)
            .render_content(&mut sink, &content, &vp, WrapMode::WordWrap, TextStyle::default())
            .unwrap();

        let positions: Vec<(i32, i32, &str)> = sink
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect();
        // word, trailing space, then the next word 10px later.
        assert_eq!(
            positions,
            vec![(0, 26, "abc"), (30, 26, " "), (40, 26, "de")]
        );
    }

    #[test]
    fn breaks_reset_x_and_advance_y() {
        let vp = viewport(240, 5);
        let content = vec![
            ContentItem::word("top"),
            ContentItem::br(),
            ContentItem::word("full"),
            ContentItem::br_half(),
            ContentItem::word("half"),
        ];
        let mut sink = RecordingSink::new();
        Renderer::new(&TenPx)
            .render_content(&mut sink, &content, &vp, WrapMode::WordWrap, TextStyle::default())
            .unwrap();

        let word_ops: Vec<(i32, i32, &str)> = sink
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, text, .. } if text != " " => {
                    Some((*x, *y, text.as_str()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(word_ops, vec![(0, 26, "top"), (0, 52, "full"), (0, 65, "half")]);
    }

    #[test]
    fn font_and_color_tokens_update_cursor_state() {
        let vp = viewport(240, 5);
        let content = vec![
            ContentItem::font(FontId::Bold),
            ContentItem::color(consts::GREY),
            ContentItem::word("warn"),
        ];
        let mut sink = RecordingSink::new();
        Renderer::new(&TenPx)
            .render_content(&mut sink, &content, &vp, WrapMode::WordWrap, TextStyle::default())
            .unwrap();

        assert!(sink.ops.iter().any(|op| matches!(
            op,
            DrawOp::Text { text, font: FontId::Bold, fg, .. }
                if text == "warn" && *fg == consts::GREY
        )));
    }

    #[test]
    fn painting_stops_past_vertical_budget() {
        // Hand-built raw stream that walks past the last baseline; the
        // renderer must stop silently at the offending break.
        let vp = viewport(240, 1);
        let items = vec![
            ContentItem::word("shown"),
            ContentItem::br(),
            ContentItem::word("dropped"),
        ];
        let mut sink = RecordingSink::new();
        Renderer::new(&TenPx)
            .render_raw(&mut sink, &items, &vp, TextStyle::default())
            .unwrap();
        assert_eq!(sink.texts(), vec!["shown"]);
    }

    #[test]
    fn prebroken_layout_paints_identically_to_raw_content() {
        let vp = viewport(120, 5);
        let content = vec![
            ContentItem::word("Confirm"),
            ContentItem::word("sending"),
            ContentItem::word("total"),
        ];
        let layout = LineBreaker::new(&TenPx).break_lines(
            &content,
            &vp,
            WrapMode::WordWrap,
            TextStyle::default().font,
            TextStyle::default().fg,
        );

        let renderer = Renderer::new(&TenPx);
        let mut from_content = RecordingSink::new();
        renderer
            .render_content(
                &mut from_content,
                &content,
                &vp,
                WrapMode::WordWrap,
                TextStyle::default(),
            )
            .unwrap();
        let mut from_lines = RecordingSink::new();
        renderer
            .render_lines(&mut from_lines, &layout, &vp, TextStyle::default())
            .unwrap();
        assert_eq!(from_content, from_lines);
    }
}
