//! Single-use screen widgets: header + body text, and boxed labels.

use signscreen::{
    consts, Color, ContentItem, FontId, Rect, TextMetrics, TextStyle, Viewport, WrapMode,
};

use crate::renderer::Renderer;
use crate::sink::DisplaySink;

/// Default header icon name when the caller picks none.
pub const ICON_DEFAULT: &str = "default";

/// A header bar plus a styled, word-wrapped body.
///
/// Content is collected through the builder-style `normal`/`bold`/`mono`
/// calls, each of which switches the active font before appending its
/// words. The widget paints once and then goes clean; [`Text::invalidate`]
/// re-arms it.
#[derive(Clone, Debug)]
pub struct Text {
    header_text: String,
    header_icon: String,
    icon_color: Color,
    max_lines: usize,
    wrap: WrapMode,
    pre_broken: bool,
    content: Vec<ContentItem>,
    repaint: bool,
}

impl Text {
    pub fn new(header_text: impl Into<String>) -> Self {
        Self {
            header_text: header_text.into(),
            header_icon: ICON_DEFAULT.to_string(),
            icon_color: consts::ORANGE_ICON,
            max_lines: consts::TEXT_MAX_LINES,
            wrap: WrapMode::WordWrap,
            pre_broken: false,
            content: Vec::new(),
            repaint: true,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>, color: Color) -> Self {
        self.header_icon = icon.into();
        self.icon_color = color;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Treat the content's break tokens as authoritative and skip wrapping.
    pub fn pre_broken(mut self) -> Self {
        self.pre_broken = true;
        self
    }

    pub fn normal<I>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.styled(FontId::Normal, words)
    }

    pub fn bold<I>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.styled(FontId::Bold, words)
    }

    pub fn mono<I>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.styled(FontId::Mono, words)
    }

    fn styled<I>(&mut self, font: FontId, words: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.content.push(ContentItem::font(font));
        for word in words {
            self.content.push(ContentItem::Word(word.into()));
        }
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.content.push(ContentItem::color(color));
        self
    }

    pub fn br(&mut self) -> &mut Self {
        self.content.push(ContentItem::br());
        self
    }

    pub fn br_half(&mut self) -> &mut Self {
        self.content.push(ContentItem::br_half());
        self
    }

    pub fn push(&mut self, item: ContentItem) -> &mut Self {
        self.content.push(item);
        self
    }

    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::with_max_lines(self.max_lines)
    }

    /// Header title plus the first screenful of body words.
    ///
    /// Debug and test harness hook for asserting on what a screen shows
    /// without rendering it.
    pub fn visible_words(&self) -> Vec<&str> {
        let mut out = vec![self.header_text.as_str()];
        out.extend(
            self.content
                .iter()
                .filter_map(ContentItem::as_word)
                .take(self.max_lines),
        );
        out
    }

    /// Mark the widget dirty so the next paint repaints it.
    pub fn invalidate(&mut self) {
        self.repaint = true;
    }

    /// Paint header and body. No-op while the widget is clean.
    pub fn paint<S, M>(&mut self, sink: &mut S, metrics: &M) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
        M: TextMetrics + ?Sized,
    {
        if !self.repaint {
            return Ok(());
        }
        sink.header(
            &self.header_text,
            &self.header_icon,
            consts::TITLE_GREY,
            consts::BG,
            self.icon_color,
        )?;
        let viewport = self.viewport();
        let renderer = Renderer::new(&metrics);
        if self.pre_broken {
            renderer.render_raw(sink, &self.content, &viewport, TextStyle::default())?;
        } else {
            renderer.render_content(
                sink,
                &self.content,
                &viewport,
                self.wrap,
                TextStyle::default(),
            )?;
        }
        self.repaint = false;
        Ok(())
    }
}

/// Horizontal anchoring for a [`Label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One line of text inside a fixed area, cleared and repainted as a unit.
#[derive(Clone, Debug)]
pub struct Label {
    area: Rect,
    text: String,
    align: Align,
    font: FontId,
    repaint: bool,
}

impl Label {
    pub fn new(area: Rect, text: impl Into<String>, align: Align, font: FontId) -> Self {
        Self {
            area,
            text: text.into(),
            align,
            font,
            repaint: true,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.repaint = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn invalidate(&mut self) {
        self.repaint = true;
    }

    /// Clear the area and paint the text anchored at the area's midpoint.
    ///
    /// All three alignments share the midpoint anchor: a left-aligned label
    /// starts at the horizontal center of its area, not at its left edge.
    pub fn paint<S>(&mut self, sink: &mut S) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        if !self.repaint {
            return Ok(());
        }
        sink.bar(self.area, consts::BG)?;
        let tx = self.area.center_x();
        let ty = self.area.center_y() + 8;
        match self.align {
            Align::Left => sink.text(tx, ty, &self.text, self.font, consts::FG, consts::BG)?,
            Align::Center => {
                sink.text_center(tx, ty, &self.text, self.font, consts::FG, consts::BG)?
            }
            Align::Right => {
                sink.text_right(tx, ty, &self.text, self.font, consts::FG, consts::BG)?
            }
        }
        self.repaint = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use signscreen::{consts, FontId, Rect, TextMetrics};

    use super::{Align, Label, Text};
    use crate::sink::{DrawOp, RecordingSink};
    use crate::test_util::TenPx;

    #[test]
    fn text_paints_header_then_body() {
        let mut screen = Text::new("CONFIRM");
        screen.normal(["Send"]).bold(["1.5", "XMR"]);
        let mut sink = RecordingSink::new();
        screen.paint(&mut sink, &TenPx).unwrap();

        assert!(matches!(
            &sink.ops[0],
            DrawOp::Header { title, fg, icon_color, .. }
                if title == "CONFIRM" && *fg == consts::TITLE_GREY && *icon_color == consts::ORANGE_ICON
        ));
        assert!(sink.texts().contains(&"Send"));
        assert!(sink.texts().contains(&"1.5"));
        assert!(sink.texts().contains(&"XMR"));
    }

    #[test]
    fn text_paints_through_a_metrics_trait_object() {
        let metrics: &dyn TextMetrics = &TenPx;
        let mut screen = Text::new("TITLE");
        screen.normal(["ok"]);
        let mut sink = RecordingSink::new();
        screen.paint(&mut sink, metrics).unwrap();
        assert!(sink.texts().contains(&"ok"));
    }

    #[test]
    fn text_paints_once_until_invalidated() {
        let mut screen = Text::new("CONFIRM");
        screen.normal(["hello"]);
        let mut sink = RecordingSink::new();
        screen.paint(&mut sink, &TenPx).unwrap();
        let painted = sink.ops.len();

        screen.paint(&mut sink, &TenPx).unwrap();
        assert_eq!(sink.ops.len(), painted);

        screen.invalidate();
        screen.paint(&mut sink, &TenPx).unwrap();
        assert_eq!(sink.ops.len(), painted * 2);
    }

    #[test]
    fn visible_words_lists_header_and_first_screenful() {
        let mut screen = Text::new("TITLE");
        screen.normal(["one", "two", "three", "four", "five", "six", "seven"]);
        // Default budget is TEXT_MAX_LINES, so five body words survive.
        assert_eq!(
            screen.visible_words(),
            vec!["TITLE", "one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn label_clears_area_before_painting() {
        let area = Rect::new(10, 20, 100, 30);
        let mut label = Label::new(area, "status", Align::Center, FontId::Normal);
        let mut sink = RecordingSink::new();
        label.paint(&mut sink).unwrap();

        assert_eq!(sink.ops[0], DrawOp::Bar { area, color: consts::BG });
        assert!(matches!(
            &sink.ops[1],
            DrawOp::TextCenter { x: 60, y: 43, text, .. } if text == "status"
        ));
    }

    #[test]
    fn label_alignment_selects_paint_primitive() {
        let area = Rect::new(0, 0, 200, 40);
        let mut sink = RecordingSink::new();
        Label::new(area, "l", Align::Left, FontId::Normal)
            .paint(&mut sink)
            .unwrap();
        Label::new(area, "r", Align::Right, FontId::Normal)
            .paint(&mut sink)
            .unwrap();

        // Left shares the midpoint anchor, it only changes the primitive.
        assert!(sink
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { x: 100, y: 28, text, .. } if text == "l")));
        assert!(sink
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::TextRight { x: 100, y: 28, text, .. } if text == "r")));
    }

    #[test]
    fn label_repaints_after_text_change() {
        let area = Rect::new(0, 0, 100, 20);
        let mut label = Label::new(area, "old", Align::Center, FontId::Bold);
        let mut sink = RecordingSink::new();
        label.paint(&mut sink).unwrap();
        label.paint(&mut sink).unwrap();
        assert_eq!(sink.ops.len(), 2);

        label.set_text("new");
        label.paint(&mut sink).unwrap();
        assert_eq!(sink.texts(), vec!["old", "new"]);
    }
}
