//! Greedy line breaking under pixel-metric constraints.
//!
//! The breaker consumes a content stream in a single pass with no
//! backtracking and produces width-fitted lines bounded by the viewport's
//! line budget. Words that overflow the remaining space are split mid-string
//! behind a hyphen while vertical space remains, and behind an ellipsis on
//! the last available line. Content past the budget is dropped and the
//! result marked truncated.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::metrics::TextMetrics;
use crate::style::{consts, Color, FontId};
use crate::token::{BreakKind, ContentItem, StyleToken};
use crate::viewport::Viewport;

const HYPHEN: &str = "-";
const ELLIPSIS: &str = "...";
// Split markers paint bold/grey so they read as layout artifacts, not content.
const MARKER_FONT: FontId = FontId::Bold;
const MARKER_COLOR: Color = consts::GREY;

/// Wrapping policy for a content stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Pack as many words per line as fit, separated by single spaces.
    WordWrap,
    /// Force a line break after every word.
    OneWordPerLine,
}

/// One broken line: the items to paint between two vertical advances.
///
/// Every line starts by re-asserting the active color and font, so lines
/// stay self-describing when painted in isolation. All lines except
/// possibly the last end with a `Break` token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub items: SmallVec<[ContentItem; 8]>,
}

impl Line {
    /// Words of this line in paint order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(ContentItem::as_word)
    }
}

/// Bounded line sequence produced by the breaker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub lines: Vec<Line>,
    /// True when trailing content was dropped and an ellipsis synthesized.
    pub truncated: bool,
}

impl LayoutResult {
    /// Flatten back into a single item stream for the renderer.
    pub fn flatten(&self) -> impl Iterator<Item = &ContentItem> {
        self.lines.iter().flat_map(|line| line.items.iter())
    }
}

/// Greedy, single-pass line breaker over a [`TextMetrics`] width oracle.
pub struct LineBreaker<'a> {
    metrics: &'a dyn TextMetrics,
}

enum Flow {
    Continue,
    Truncated,
}

impl<'a> LineBreaker<'a> {
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self { metrics }
    }

    /// Break `content` into width-fitted lines under `viewport`'s budget.
    ///
    /// `font` and `fg` seed the active style; both are re-asserted at the
    /// start of every produced line. An empty stream yields a single empty
    /// line. A zero line budget or a viewport narrower than its margin is a
    /// caller bug, checked in debug builds only.
    pub fn break_lines(
        &self,
        content: &[ContentItem],
        viewport: &Viewport,
        mode: WrapMode,
        font: FontId,
        fg: Color,
    ) -> LayoutResult {
        debug_assert!(viewport.max_lines >= 1, "viewport needs at least one line");
        debug_assert!(viewport.line_width() > 0, "viewport narrower than its margin");

        let mut st = BreakState::new(self.metrics, viewport, font, fg);

        for (index, item) in content.iter().enumerate() {
            let has_next = index + 1 < content.len();
            let flow = match item {
                ContentItem::Style(StyleToken::Break(kind)) => st.handle_break(*kind),
                ContentItem::Style(StyleToken::Font(font)) => {
                    st.set_font(*font);
                    Flow::Continue
                }
                ContentItem::Style(StyleToken::Color(color)) => {
                    st.set_color(*color);
                    Flow::Continue
                }
                ContentItem::Space => {
                    st.push_space();
                    Flow::Continue
                }
                ContentItem::Word(word) => st.place_word(word, has_next, mode),
            };
            if matches!(flow, Flow::Truncated) {
                debug!("layout truncated after {} lines", st.lines.len());
                return st.into_result(true);
            }
        }

        st.finish_line();
        st.into_result(false)
    }
}

struct BreakState<'a> {
    metrics: &'a dyn TextMetrics,
    viewport: &'a Viewport,
    font: FontId,
    fg: Color,
    offset_x: i32,
    offset_y: i32,
    line: SmallVec<[ContentItem; 8]>,
    /// True while the current line holds only its re-asserted prefix.
    pristine: bool,
    lines: Vec<Line>,
}

impl<'a> BreakState<'a> {
    fn new(metrics: &'a dyn TextMetrics, viewport: &'a Viewport, font: FontId, fg: Color) -> Self {
        Self {
            metrics,
            viewport,
            font,
            fg,
            offset_x: viewport.margin_left,
            offset_y: viewport.baseline_y,
            line: Self::prefix(fg, font),
            pristine: true,
            lines: Vec::new(),
        }
    }

    fn prefix(fg: Color, font: FontId) -> SmallVec<[ContentItem; 8]> {
        smallvec![ContentItem::color(fg), ContentItem::font(font)]
    }

    fn set_font(&mut self, font: FontId) {
        self.font = font;
        if self.pristine {
            // Folding into the prefix keeps re-breaking flattened output
            // stable instead of stacking duplicate assertions.
            self.line[1] = ContentItem::font(font);
        } else {
            self.line.push(ContentItem::font(font));
        }
    }

    fn set_color(&mut self, color: Color) {
        self.fg = color;
        if self.pristine {
            self.line[0] = ContentItem::color(color);
        } else {
            self.line.push(ContentItem::color(color));
        }
    }

    fn push_space(&mut self) {
        // Explicit spaces only occur when re-breaking flattened output; the
        // trailing space the breaker emits after each placed word already
        // covers those, so a duplicate is swallowed.
        if matches!(self.line.last(), Some(ContentItem::Space)) {
            return;
        }
        self.line.push(ContentItem::Space);
        self.pristine = false;
        self.offset_x += self.metrics.text_width(" ", self.font);
    }

    fn advance(&self, kind: BreakKind) -> i32 {
        match kind {
            BreakKind::Full => self.viewport.line_height,
            BreakKind::Half => self.viewport.half_line_height,
        }
    }

    fn handle_break(&mut self, kind: BreakKind) -> Flow {
        if self.offset_y + self.advance(kind) > self.viewport.last_baseline() {
            // Out of lines: mark the line being closed and stop.
            self.push_ellipsis();
            self.finish_line();
            return Flow::Truncated;
        }
        self.next_line(kind);
        Flow::Continue
    }

    fn next_line(&mut self, kind: BreakKind) {
        self.line.push(ContentItem::Style(StyleToken::Break(kind)));
        let items = core::mem::replace(&mut self.line, Self::prefix(self.fg, self.font));
        self.lines.push(Line { items });
        self.pristine = true;
        self.offset_x = self.viewport.margin_left;
        self.offset_y += self.advance(kind);
    }

    fn finish_line(&mut self) {
        let items = core::mem::replace(&mut self.line, Self::prefix(self.fg, self.font));
        self.lines.push(Line { items });
        self.pristine = true;
    }

    fn push_ellipsis(&mut self) {
        // Marker styling is painted inline and does not touch the tracked
        // active style; the next line's prefix restores it anyway.
        self.line.push(ContentItem::font(MARKER_FONT));
        self.line.push(ContentItem::color(MARKER_COLOR));
        self.line.push(ContentItem::word(ELLIPSIS));
        self.pristine = false;
    }

    fn place_word(&mut self, word: &str, has_next: bool, mode: WrapMode) -> Flow {
        if word.is_empty() {
            return Flow::Continue;
        }
        let mut rest = word;
        let mut width = self.metrics.text_width(rest, self.font);

        loop {
            let overflows = self.offset_x + width > self.viewport.width;
            // On the last line, anything still pending after this word means
            // it cannot be shown in full; truncate eagerly.
            let out_of_lines = has_next && self.offset_y >= self.viewport.last_baseline();
            if !overflows && !out_of_lines {
                break;
            }

            let beginning_of_line = self.offset_x == self.viewport.margin_left;
            let fits_fresh_line = width < self.viewport.line_width();
            let vertical_space = self.offset_y < self.viewport.last_baseline();

            if vertical_space && fits_fresh_line && !beginning_of_line {
                // Prefer a clean break over a mid-word split.
                self.next_line(BreakKind::Full);
                break;
            }

            // The continuation marker depends only on the remaining vertical
            // budget: hyphen while another line exists, ellipsis on the last.
            let (marker, marker_width) = if vertical_space {
                (HYPHEN, self.metrics.text_width(HYPHEN, MARKER_FONT))
            } else {
                (ELLIPSIS, self.metrics.text_width(ELLIPSIS, MARKER_FONT))
            };

            let mut split_at = self.longest_prefix(rest, width, marker_width);

            if split_at == 0 && vertical_space {
                if !beginning_of_line {
                    // Never leave a bare marker with no preceding characters:
                    // give the whole word a fresh line and retry.
                    self.next_line(BreakKind::Full);
                    continue;
                }
                // A fresh line must always consume at least one character or
                // a word wider than any line would never terminate.
                let first = rest.chars().next().map(char::len_utf8).unwrap_or(0);
                if first == 0 || first >= rest.len() {
                    // Single glyph wider than the line; place it overflowing.
                    break;
                }
                split_at = first;
            }

            let (prefix, remainder) = rest.split_at(split_at);
            if !prefix.is_empty() {
                self.line.push(ContentItem::word(prefix));
            }
            self.line.push(ContentItem::font(MARKER_FONT));
            self.line.push(ContentItem::color(MARKER_COLOR));
            self.line.push(ContentItem::word(marker));
            self.pristine = false;

            if !vertical_space {
                // Ellipsis on the last line closes the layout.
                self.finish_line();
                return Flow::Truncated;
            }
            self.next_line(BreakKind::Full);
            rest = remainder;
            width = self.metrics.text_width(rest, self.font);
        }

        // The (remainder of the) word fits.
        self.line.push(ContentItem::word(rest));
        self.pristine = false;

        match mode {
            WrapMode::OneWordPerLine if has_next => {
                if self.offset_y + self.viewport.line_height > self.viewport.last_baseline() {
                    self.push_ellipsis();
                    self.finish_line();
                    return Flow::Truncated;
                }
                self.next_line(BreakKind::Full);
            }
            WrapMode::OneWordPerLine => {}
            WrapMode::WordWrap => {
                self.offset_x += width;
                if has_next {
                    self.line.push(ContentItem::Space);
                    self.offset_x += self.metrics.text_width(" ", self.font);
                }
            }
        }
        Flow::Continue
    }

    /// Byte offset of the longest non-empty prefix of `word` whose width
    /// plus `marker_width` still fits the remaining space, found by
    /// scanning backward one character at a time. Zero when nothing fits.
    fn longest_prefix(&self, word: &str, word_width: i32, marker_width: i32) -> usize {
        let mut width = word_width;
        for (idx, ch) in word.char_indices().rev() {
            if idx == 0 {
                break;
            }
            width -= self.metrics.char_width(ch, self.font);
            if self.offset_x + width + marker_width < self.viewport.width {
                return idx;
            }
        }
        0
    }

    fn into_result(self, truncated: bool) -> LayoutResult {
        LayoutResult {
            lines: self.lines,
            truncated,
        }
    }
}
