use super::{Behavior, Context, Frame};
use crate::PIXEL_COUNT;
use crate::colors::countdown_color;
use crate::pixels::Pixel;
use crate::text::decimal_text;
use crate::tune::{COMPLETION_TUNE, TunePlayer, TuneState};
use crate::types::ModeKind;

const PIXEL_BRIGHTNESS: f32 = 0.3;

/// Countdown timer. Shows the seconds left, then `done` and plays a tune.
#[derive(Debug, Clone)]
pub struct TimeoutMode {
    tune: TunePlayer,
}

impl TimeoutMode {
    pub const fn new() -> Self {
        Self {
            tune: TunePlayer::new(&COMPLETION_TUNE),
        }
    }

    pub fn tune_state(&self) -> TuneState {
        self.tune.state()
    }
}

impl Default for TimeoutMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for TimeoutMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Timeout
    }

    fn skip_preview(&self) -> bool {
        false
    }

    fn exiting(&mut self, _next: ModeKind, _cx: &mut Context<'_, '_>) {
        self.tune.cancel();
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        let duration = cx.settings.countdown_secs;
        let elapsed_secs = u32::try_from(frame.elapsed_ms / 1000).unwrap_or(u32::MAX);
        let remaining = duration.saturating_sub(elapsed_secs);

        if remaining > 0 {
            cx.devices.display.print_text(&decimal_text(remaining));
        } else {
            cx.devices.display.print_text("done");
            if self.tune.state() == TuneState::Idle {
                self.tune.start(frame.elapsed_ms);
            }
        }
        self.tune
            .poll(frame.elapsed_ms, frame.interrupted, cx.devices.buzzer);

        for index in 0..PIXEL_COUNT {
            let color = countdown_color(elapsed_secs, index, duration);
            Pixel::new(color, PIXEL_BRIGHTNESS).write_to(cx.devices.pixels, PIXEL_COUNT - 1 - index);
        }
        None
    }
}
