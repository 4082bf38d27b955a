use super::{Action, Behavior, Context, Frame};
use crate::PIXEL_COUNT;
use crate::buttons::ButtonState;
use crate::pixels::Pixel;
use crate::types::{Departure, ModeKind};

/// Modes selectable from the menu, in cursor order.
pub const ROSTER: [ModeKind; 7] = [
    ModeKind::Temperature,
    ModeKind::CountDecimal,
    ModeKind::CountHex,
    ModeKind::Clock,
    ModeKind::Nap,
    ModeKind::Timeout,
    ModeKind::Credits,
];

const BACKGROUND: Pixel = Pixel::rgb8(1.0, 0.0, 1.0, 0.1);
const HIGHLIGHT_RED: f32 = 30.0;
const HIGHLIGHT_GREEN: f32 = 30.0;

/// Menu position. Lives in the state machine so it survives leaving the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuCursor {
    index: usize,
    last_index: usize,
}

impl MenuCursor {
    pub const fn new() -> Self {
        Self {
            index: 0,
            last_index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Position highlighted before the last move.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Roster entry under the cursor.
    pub fn selected(&self) -> ModeKind {
        ROSTER[self.index]
    }

    pub fn down(&mut self) {
        self.last_index = self.index;
        self.index = (self.index + ROSTER.len() - 1) % ROSTER.len();
        #[cfg(feature = "defmt")]
        defmt::debug!("menu down: {}", self.index);
    }

    pub fn up(&mut self) {
        self.last_index = self.index;
        self.index = (self.index + 1) % ROSTER.len();
        #[cfg(feature = "defmt")]
        defmt::debug!("menu up: {}", self.index);
    }
}

/// Pixel marking roster position `index`; the roster runs right to left.
fn marker(index: usize) -> usize {
    (PIXEL_COUNT - 1) - index
}

/// Browses the roster. A and C move the cursor, B enters the selection.
#[derive(Debug, Clone, Default)]
pub struct MenuMode;

impl MenuMode {
    pub const fn new() -> Self {
        MenuMode
    }
}

impl Behavior for MenuMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Menu
    }

    fn enter(&mut self, _from: Option<Departure>, cx: &mut Context<'_, '_>) {
        for index in 0..PIXEL_COUNT {
            BACKGROUND.write_to(cx.devices.pixels, index);
        }
    }

    fn perform(
        &mut self,
        action: Action,
        cx: &mut Context<'_, '_>,
        buttons: &mut ButtonState,
    ) -> Option<ModeKind> {
        match action {
            Action::MenuDown => cx.menu.down(),
            Action::MenuUp => cx.menu.up(),
            Action::MenuSelect => {
                // A trigger still raised would otherwise reach the new mode.
                buttons.lower_triggers();
                return Some(cx.menu.selected());
            }
            Action::ToggleUnit => {}
        }
        None
    }

    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        cx.devices.display.print_text(cx.menu.selected().label());

        let pulse = ((frame.elapsed_ms / 1000) % 2) as f32;
        let highlight = Pixel::rgb8(HIGHLIGHT_RED, HIGHLIGHT_GREEN, 0.0, 0.3 + 0.2 * pulse);
        BACKGROUND.write_to(cx.devices.pixels, marker(cx.menu.last_index()));
        highlight.write_to(cx.devices.pixels, marker(cx.menu.index()));
        None
    }
}
