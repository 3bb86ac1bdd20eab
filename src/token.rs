//! Content-stream items: words and interleaved style directives.

use serde::{Deserialize, Serialize};

use crate::style::{Color, FontId};

/// Vertical advance requested by a break directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    /// Full line advance.
    Full,
    /// Half-height advance for tighter spacing between related lines.
    Half,
}

/// Style directive interleaved with words in a content stream.
///
/// Font and color selections persist for all subsequent words until
/// superseded, including across line boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleToken {
    Font(FontId),
    Color(Color),
    Break(BreakKind),
}

/// One entry of a content stream or of a broken line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ContentItem {
    /// A single word. Producers pre-split on whitespace; a word never
    /// contains embedded spaces.
    Word(String),
    /// Trailing space the breaker emits after a placed word in word-wrap
    /// mode. Painted as a background-colored gap.
    Space,
    /// Font/color/break directive.
    Style(StyleToken),
}

impl ContentItem {
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    pub fn font(font: FontId) -> Self {
        Self::Style(StyleToken::Font(font))
    }

    pub fn color(color: Color) -> Self {
        Self::Style(StyleToken::Color(color))
    }

    pub fn br() -> Self {
        Self::Style(StyleToken::Break(BreakKind::Full))
    }

    pub fn br_half() -> Self {
        Self::Style(StyleToken::Break(BreakKind::Half))
    }

    /// Word payload, if this item is a word.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(text) => Some(text),
            _ => None,
        }
    }
}
