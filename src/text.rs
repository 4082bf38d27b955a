//! Text formatting for the 4-glyph display.

use core::fmt::Write;

use heapless::String;

use crate::DISPLAY_WIDTH;
use crate::time::WallTime;

/// Formatted display text. Wide enough for any `u32` so formatting never truncates.
pub type DisplayText = String<12>;

/// Formats arguments into display text.
///
/// Output beyond the buffer capacity is dropped.
pub fn format(args: core::fmt::Arguments<'_>) -> DisplayText {
    let mut text = DisplayText::new();
    let _ = text.write_fmt(args);
    text
}

/// `"HHMM"` on a 12-hour dial, hour padded with a space.
pub fn clock_text(time: WallTime) -> DisplayText {
    format(format_args!("{:>2}{:02}", time.twelve_hour(), time.minute()))
}

/// Counter value right-justified to the display width.
pub fn decimal_text(value: u32) -> DisplayText {
    format(format_args!("{:>1$}", value, DISPLAY_WIDTH))
}

/// Uppercase hexadecimal counter value right-justified to the display width.
pub fn hex_text(value: u32) -> DisplayText {
    format(format_args!("{:>1$X}", value, DISPLAY_WIDTH))
}

/// A reading laid out for the display: glyphs plus the digit carrying the
/// decimal point, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub text: DisplayText,
    pub decimal_point: Option<usize>,
}

/// Lays out a value with one decimal place, the point drawn on the segment
/// display rather than as a glyph. Falls back to a rounded integer when the
/// digits do not fit.
pub fn reading(value: f32) -> Reading {
    let formatted = format(format_args!("{:.1}", value));

    let mut digits = DisplayText::new();
    let mut point_after = None;
    for ch in formatted.chars() {
        if ch == '.' {
            point_after = digits.len().checked_sub(1);
        } else {
            let _ = digits.push(ch);
        }
    }

    if digits.len() > DISPLAY_WIDTH {
        let rounded = libm::roundf(value) as i32;
        return Reading {
            text: format(format_args!("{:>1$}", rounded, DISPLAY_WIDTH)),
            decimal_point: None,
        };
    }

    let pad = DISPLAY_WIDTH - digits.len();
    Reading {
        text: format(format_args!("{:>1$}", digits.as_str(), DISPLAY_WIDTH)),
        decimal_point: point_after.map(|position| position + pad),
    }
}

/// Sliding window over a message, one display width at a time.
///
/// The window advances one glyph per call until it reaches the end of the
/// message, then restarts from the beginning.
#[derive(Debug, Clone)]
pub struct Scroller {
    message: &'static str,
    index: usize,
}

impl Scroller {
    pub const fn new(message: &'static str) -> Self {
        Self { message, index: 0 }
    }

    /// Returns the current window and advances.
    pub fn next_window(&mut self) -> &'static str {
        let last = self.message.len().saturating_sub(DISPLAY_WIDTH);
        if self.index > last {
            self.index = 0;
        }

        let end = (self.index + DISPLAY_WIDTH).min(self.message.len());
        let window = self.message.get(self.index..end).unwrap_or("");
        self.index += 1;
        window
    }
}
