//! Touch button state shared between the interrupt side and the main loop.

/// One of the three touch buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    C,
}

impl Button {
    /// All buttons in dispatch order.
    pub const ALL: [Button; 3] = [Button::A, Button::B, Button::C];

    const fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::C => 2,
        }
    }
}

/// Held flags and release triggers for the three buttons.
///
/// Press and release edges set flags; the main loop consumes the triggers and
/// clears them once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    held: [bool; 3],
    triggered: [bool; 3],
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            held: [false; 3],
            triggered: [false; 3],
        }
    }

    /// Records a press edge.
    pub fn press(&mut self, button: Button) {
        self.held[button.index()] = true;
    }

    /// Records a release edge, which raises the button's trigger.
    pub fn release(&mut self, button: Button) {
        self.held[button.index()] = false;
        self.triggered[button.index()] = true;
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    pub fn is_triggered(&self, button: Button) -> bool {
        self.triggered[button.index()]
    }

    pub fn any_triggered(&self) -> bool {
        self.triggered.iter().any(|&triggered| triggered)
    }

    /// Clears every trigger.
    pub fn lower_triggers(&mut self) {
        self.triggered = [false; 3];
    }
}
