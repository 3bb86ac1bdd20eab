//! Center-painted strings forced into a fixed pixel width.
//!
//! Used for values that must stay on one line no matter what, such as
//! addresses and transaction identifiers. The string is trimmed from one
//! end and the cut marked with a bold grey ellipsis; left-trim keeps the
//! tail, right-trim keeps the head.

use signscreen::{consts, Color, FontId, TextMetrics};

use crate::sink::DisplaySink;

const ELLIPSIS: &str = "...";
const ELLIPSIS_FONT: FontId = FontId::Bold;
const ELLIPSIS_COLOR: Color = consts::GREY;

/// Paint `text` centered on `x`, trimming from the left if it exceeds
/// `max_width`. The kept tail is preceded by an ellipsis.
pub fn text_center_trim_left<S, M>(
    sink: &mut S,
    metrics: &M,
    x: i32,
    y: i32,
    text: &str,
    font: FontId,
    max_width: i32,
) -> Result<(), S::Error>
where
    S: DisplaySink + ?Sized,
    M: TextMetrics + ?Sized,
{
    if metrics.text_width(text, font) <= max_width {
        return sink.text_center(x, y, text, font, consts::FG, consts::BG);
    }

    let ellipsis_width = metrics.text_width(ELLIPSIS, ELLIPSIS_FONT);
    if ellipsis_width > max_width {
        return Ok(());
    }

    // Longest suffix that still fits next to the ellipsis.
    let mut start = text.len();
    let mut kept_width = 0;
    for (idx, ch) in text.char_indices().rev() {
        let width = metrics.char_width(ch, font);
        if kept_width + width + ellipsis_width > max_width {
            break;
        }
        kept_width += width;
        start = idx;
    }

    let px = x - (kept_width + ellipsis_width) / 2;
    sink.text(px, y, ELLIPSIS, ELLIPSIS_FONT, ELLIPSIS_COLOR, consts::BG)?;
    sink.text(
        px + ellipsis_width,
        y,
        &text[start..],
        font,
        consts::FG,
        consts::BG,
    )
}

/// Paint `text` centered on `x`, trimming from the right if it exceeds
/// `max_width`. The kept head is followed by an ellipsis.
pub fn text_center_trim_right<S, M>(
    sink: &mut S,
    metrics: &M,
    x: i32,
    y: i32,
    text: &str,
    font: FontId,
    max_width: i32,
) -> Result<(), S::Error>
where
    S: DisplaySink + ?Sized,
    M: TextMetrics + ?Sized,
{
    if metrics.text_width(text, font) <= max_width {
        return sink.text_center(x, y, text, font, consts::FG, consts::BG);
    }

    let ellipsis_width = metrics.text_width(ELLIPSIS, ELLIPSIS_FONT);
    if ellipsis_width > max_width {
        return Ok(());
    }

    // Longest prefix that still fits next to the ellipsis.
    let mut end = 0;
    let mut kept_width = 0;
    for (idx, ch) in text.char_indices() {
        let width = metrics.char_width(ch, font);
        if kept_width + width + ellipsis_width > max_width {
            break;
        }
        kept_width += width;
        end = idx + ch.len_utf8();
    }

    let px = x - (kept_width + ellipsis_width) / 2;
    sink.text(px, y, &text[..end], font, consts::FG, consts::BG)?;
    sink.text(
        px + kept_width,
        y,
        ELLIPSIS,
        ELLIPSIS_FONT,
        ELLIPSIS_COLOR,
        consts::BG,
    )
}
