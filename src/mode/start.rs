use super::{Behavior, Context, Frame};
use crate::DISPLAY_WIDTH;
use crate::types::ModeKind;

/// Segments traced around the outer frame of each digit.
const SQUARE_PATH: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// Segments hopping across the diagonals and sticks.
const STICK_PATH: [u8; 8] = [2, 3, 14, 9, 6, 5, 12, 11];

const FRAME_MS: u64 = 80;

/// Startup animation: lights one segment at a time on every digit, then hands
/// over to the clock.
#[derive(Debug, Clone, Default)]
pub struct StartMode;

impl StartMode {
    pub const fn new() -> Self {
        StartMode
    }

    /// Segment lit during animation frame `frame`, or `None` once done.
    fn segment(frame: usize) -> Option<u8> {
        SQUARE_PATH
            .iter()
            .chain(STICK_PATH.iter())
            .nth(frame)
            .copied()
    }
}

impl Behavior for StartMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Start
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        let index = (frame.elapsed_ms / FRAME_MS) as usize;
        match Self::segment(index) {
            Some(segment) => {
                let mask = 1u16 << (segment - 1);
                for position in 0..DISPLAY_WIDTH {
                    cx.devices.display.set_segment_raw(position, mask);
                }
                None
            }
            None => Some(ModeKind::Clock),
        }
    }
}
