use super::{Behavior, Cadence, Context, Frame};
use crate::PIXEL_COUNT;
use crate::colors::rainbow_color;
use crate::pixels::Pixel;
use crate::text::Scroller;
use crate::types::{Departure, ModeKind};

pub const CREDITS_MESSAGE: &str = "    Made by tronster.com - Drink water, brush your teeth, love each other... not all at once.    ";

const SCROLL_MS: i64 = 250;
const HUE_STEP_MS: u64 = 250;

/// Scrolls the credits over a rotating rainbow.
#[derive(Debug, Clone)]
pub struct CreditsMode {
    scroller: Scroller,
    cadence: Cadence,
}

impl CreditsMode {
    pub const fn new() -> Self {
        Self {
            scroller: Scroller::new(CREDITS_MESSAGE),
            cadence: Cadence::new(SCROLL_MS),
        }
    }
}

impl Default for CreditsMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for CreditsMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Credits
    }

    fn enter(&mut self, _from: Option<Departure>, cx: &mut Context<'_, '_>) {
        cx.devices.display.set_decimal_point(1, false);
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        if self.cadence.ready(frame.delta_ms) {
            cx.devices.display.print_text(self.scroller.next_window());
        }

        let offset = frame.elapsed_ms / HUE_STEP_MS;
        for index in 0..PIXEL_COUNT {
            Pixel::new(rainbow_color(index, offset), 0.5).write_to(cx.devices.pixels, index);
        }
        None
    }
}
