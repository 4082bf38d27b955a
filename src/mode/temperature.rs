use super::{Action, Behavior, Context, Frame};
use crate::DISPLAY_WIDTH;
use crate::buttons::ButtonState;
use crate::text::reading;
use crate::types::ModeKind;

/// Ambient temperature readout in Fahrenheit or Celsius.
#[derive(Debug, Clone)]
pub struct TemperatureMode {
    fahrenheit: bool,
}

impl TemperatureMode {
    pub const fn new(fahrenheit: bool) -> Self {
        Self { fahrenheit }
    }

    pub fn is_fahrenheit(&self) -> bool {
        self.fahrenheit
    }
}

impl Behavior for TemperatureMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Temperature
    }

    fn exiting(&mut self, _next: ModeKind, cx: &mut Context<'_, '_>) {
        for position in 0..DISPLAY_WIDTH {
            cx.devices.display.set_decimal_point(position, false);
        }
    }

    fn perform(
        &mut self,
        action: Action,
        _cx: &mut Context<'_, '_>,
        _buttons: &mut ButtonState,
    ) -> Option<ModeKind> {
        if action == Action::ToggleUnit {
            self.fahrenheit = !self.fahrenheit;
        }
        None
    }

    fn render(&mut self, _frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind> {
        let celsius = cx.devices.sensor.read_celsius();
        let value = if self.fahrenheit {
            celsius * 9.0 / 5.0 + 32.0
        } else {
            celsius
        };

        let reading = reading(value);
        cx.devices.display.print_text(&reading.text);
        for position in 0..DISPLAY_WIDTH {
            cx.devices
                .display
                .set_decimal_point(position, reading.decimal_point == Some(position));
        }
        None
    }
}
