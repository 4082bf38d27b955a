use super::{Behavior, Context, Frame};
use crate::PIXEL_COUNT;
use crate::daylight::day_night_frame;
use crate::hal::SegmentDisplay;
use crate::text::clock_text;
use crate::time::WallTime;
use crate::types::{Departure, ModeKind};

/// Draws `HHMM` with the colon-substitute decimal point blinking each second.
fn show_time(display: &mut dyn SegmentDisplay, time: WallTime) {
    display.print_text(&clock_text(time));
    display.set_decimal_point(1, time.second() % 2 == 0);
}

/// Clock face with the animated day/night pixels.
#[derive(Debug, Clone, Default)]
pub struct ClockMode;

impl ClockMode {
    pub const fn new() -> Self {
        ClockMode
    }
}

impl Behavior for ClockMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Clock
    }

    /// Blanks the seconds point and the day/night animation.
    fn exiting(&mut self, _next: ModeKind, cx: &mut Context<'_, '_>) {
        cx.devices.display.set_decimal_point(1, false);
        cx.devices.pixels.set_all(0, 0, 0, 0.0);
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        show_time(cx.devices.display, frame.wall);
        day_night_frame(frame.wall, cx.settings.sun).write_to(cx.devices.pixels, PIXEL_COUNT);
        None
    }
}

/// Clock face over a static dim fill. Returns to the clock once the nap is over.
#[derive(Debug, Clone, Default)]
pub struct NapMode;

impl NapMode {
    pub const fn new() -> Self {
        NapMode
    }
}

impl Behavior for NapMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Nap
    }

    fn skip_preview(&self) -> bool {
        false
    }

    fn enter(&mut self, _from: Option<Departure>, cx: &mut Context<'_, '_>) {
        cx.devices.pixels.set_all(0, 0, 1, 0.05);
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        show_time(cx.devices.display, frame.wall);
        if frame.elapsed_ms > cx.settings.nap_ms {
            return Some(ModeKind::Clock);
        }
        None
    }
}
