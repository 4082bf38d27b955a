use super::{Behavior, Context, Frame};
use crate::text::{DisplayText, decimal_text, format};
use crate::types::{Departure, Handoff, ModeKind};

/// Freezes the mode it was entered from, blinking the frozen value against its
/// own label. Every button resumes that mode with the value handed back.
#[derive(Debug, Clone)]
pub struct PauseMode {
    handoff: Handoff,
    frozen: DisplayText,
    resume: Option<ModeKind>,
}

impl PauseMode {
    pub fn new() -> Self {
        Self {
            handoff: Handoff::None,
            frozen: format(format_args!("    ")),
            resume: None,
        }
    }
}

impl Default for PauseMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for PauseMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Pause
    }

    fn enter(&mut self, from: Option<Departure>, _cx: &mut Context<'_, '_>) {
        let Some(from) = from else {
            return;
        };

        self.handoff = from.handoff;
        self.resume = Some(from.kind);
        if let Some(value) = from.handoff.counter() {
            self.frozen = decimal_text(value);
        }
    }

    fn handoff(&self) -> Handoff {
        self.handoff
    }

    fn resume_target(&self) -> Option<ModeKind> {
        self.resume
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        if (frame.elapsed_ms / 1000) % 2 == 0 {
            cx.devices.display.print_text(&self.frozen);
        } else {
            cx.devices.display.print_text(self.kind().label());
        }
        None
    }
}
