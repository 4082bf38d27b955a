use super::{Behavior, Cadence, Context, Frame};
use crate::PIXEL_COUNT;
use crate::colors::binary_colors;
use crate::pixels::Pixel;
use crate::text::{decimal_text, hex_text};
use crate::types::{Departure, Handoff, ModeKind};

const COUNT_MS: i64 = 1000;
const ON_BRIGHTNESS: f32 = 0.4;
const OFF_BRIGHTNESS: f32 = 0.1;

/// Number base of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Radix {
    Decimal,
    Hex,
}

/// Counts up once a second, showing the value as text and its low bits on the
/// pixels, least-significant bit first.
#[derive(Debug, Clone)]
pub struct CountMode {
    radix: Radix,
    value: u32,
    shown: bool,
    resumed: bool,
    cadence: Cadence,
}

impl CountMode {
    pub const fn new(radix: Radix) -> Self {
        Self {
            radix,
            value: 0,
            shown: false,
            resumed: false,
            cadence: Cadence::new(COUNT_MS),
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Value currently on the display.
    pub fn value(&self) -> u32 {
        self.value
    }

    fn show(&self, cx: &mut Context<'_, '_>) {
        let text = match self.radix {
            Radix::Decimal => decimal_text(self.value),
            Radix::Hex => hex_text(self.value),
        };
        cx.devices.display.print_text(&text);

        let (off, on) = binary_colors(self.value);
        for bit in 0..PIXEL_COUNT {
            let pixel = if self.value & (1 << bit) != 0 {
                Pixel::new(on, ON_BRIGHTNESS)
            } else {
                Pixel::new(off, OFF_BRIGHTNESS)
            };
            pixel.write_to(cx.devices.pixels, bit);
        }
    }
}

impl Behavior for CountMode {
    fn kind(&self) -> ModeKind {
        match self.radix {
            Radix::Decimal => ModeKind::CountDecimal,
            Radix::Hex => ModeKind::CountHex,
        }
    }

    fn skip_preview(&self) -> bool {
        self.resumed
    }

    fn enter(&mut self, from: Option<Departure>, _cx: &mut Context<'_, '_>) {
        match from {
            Some(Departure {
                kind: ModeKind::Pause,
                handoff,
            }) => {
                self.value = handoff.counter().unwrap_or(0);
                self.resumed = true;
            }
            _ => {
                self.value = 0;
                self.resumed = false;
            }
        }
        self.shown = false;
        self.cadence = Cadence::new(COUNT_MS);
    }

    fn handoff(&self) -> Handoff {
        Handoff::Counter(self.value)
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        if !self.cadence.ready(frame.delta_ms) {
            return None;
        }

        if self.shown {
            self.value = self.value.wrapping_add(1);
        }
        self.shown = true;
        self.show(cx);
        None
    }
}
