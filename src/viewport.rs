//! Fixed pixel geometry for one rendered screen.

use serde::{Deserialize, Serialize};

use crate::style::consts;

/// Immutable per-screen geometry and line budget.
///
/// `baseline_y` is the baseline of the first text line; lines advance by
/// `line_height` (or `half_line_height` for half breaks) down to
/// [`last_baseline`](Self::last_baseline). There is no scrolling; content
/// past the budget is truncated by the breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Exclusive right edge for painted content.
    pub width: i32,
    /// Left margin where every line starts.
    pub margin_left: i32,
    /// Baseline of the first text line.
    pub baseline_y: i32,
    /// Full baseline-to-baseline advance.
    pub line_height: i32,
    /// Half advance for `BreakKind::Half`.
    pub half_line_height: i32,
    /// Hard vertical budget in full lines.
    pub max_lines: usize,
}

impl Viewport {
    /// Standard header-screen viewport with a custom line budget.
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            max_lines,
            ..Self::default()
        }
    }

    /// Baseline of the last line inside the vertical budget.
    pub fn last_baseline(&self) -> i32 {
        self.baseline_y + self.line_height * (self.max_lines.saturating_sub(1) as i32)
    }

    /// Usable width of an empty line.
    pub fn line_width(&self) -> i32 {
        self.width - self.margin_left
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: consts::DISPLAY_WIDTH,
            margin_left: consts::TEXT_MARGIN_LEFT,
            baseline_y: consts::TEXT_HEADER_HEIGHT + consts::TEXT_LINE_HEIGHT,
            line_height: consts::TEXT_LINE_HEIGHT,
            half_line_height: consts::TEXT_LINE_HEIGHT_HALF,
            max_lines: consts::TEXT_MAX_LINES,
        }
    }
}

/// Rectangular pixel area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }
}
