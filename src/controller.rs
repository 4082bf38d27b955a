//! Top-level control loop.

use crate::buttons::{Button, ButtonState};
use crate::hal::Devices;
use crate::machine::{StateMachine, Transition};
use crate::settings::Settings;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ClockError, ModeKind};

/// Application context owned by the main loop.
///
/// Holds the state machine, the button flags written by the input edge
/// handlers, and the time source. Call [`step`](Controller::step) at a steady
/// cadence (around every 10 ms).
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Controller<'t, I: TimeInstant, T: TimeSource<I>> {
    machine: StateMachine<I>,
    buttons: ButtonState,
    time_source: &'t T,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Controller<'t, I, T> {
    /// Creates a controller with no active mode.
    ///
    /// # Errors
    /// Returns the first problem found by [`Settings::validate`].
    pub fn new(settings: Settings, time_source: &'t T) -> Result<Self, ClockError> {
        settings.validate()?;

        Ok(Self {
            machine: StateMachine::new(settings),
            buttons: ButtonState::new(),
            time_source,
        })
    }

    /// Enters the startup animation.
    pub fn start(&mut self, devices: &mut Devices<'_>) -> Transition {
        let now = self.time_source.now();
        self.machine.change_mode(ModeKind::Start, now, devices)
    }

    /// Records a press edge from the input handler.
    pub fn press(&mut self, button: Button) {
        self.buttons.press(button);
    }

    /// Records a release edge from the input handler.
    pub fn release(&mut self, button: Button) {
        self.buttons.release(button);
    }

    /// Runs one loop iteration: dispatch triggers, clear them, tick the active
    /// mode, light the held buttons, and flush the display and pixels.
    pub fn step(&mut self, devices: &mut Devices<'_>) {
        let now = self.time_source.now();
        let wall = self.time_source.wall_time();
        let interrupted = self.buttons.any_triggered();

        self.machine.dispatch_buttons(now, &mut self.buttons, devices);
        self.buttons.lower_triggers();
        self.machine.tick(now, wall, interrupted, devices);

        devices.lights.set_rgb(
            self.buttons.is_held(Button::A),
            self.buttons.is_held(Button::B),
            self.buttons.is_held(Button::C),
        );
        devices.display.flush();
        devices.pixels.flush();
    }

    pub fn machine(&self) -> &StateMachine<I> {
        &self.machine
    }

    pub fn buttons(&self) -> &ButtonState {
        &self.buttons
    }
}
