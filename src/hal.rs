//! Hardware traits for the display, pixel strip, buzzer, sensor and backlights.
//!
//! Implement these for your board. All calls are synchronous; implementations
//! should handle hardware errors internally since none of these methods can fail.

use crate::PIXEL_COUNT;

/// 4-character 14-segment alphanumeric display.
pub trait SegmentDisplay {
    /// Writes up to four glyphs, left to right.
    fn print_text(&mut self, text: &str);

    /// Writes a raw 14-bit segment mask to one digit (0-3).
    fn set_segment_raw(&mut self, position: usize, mask: u16);

    /// Turns the decimal point after a digit (0-3) on or off.
    fn set_decimal_point(&mut self, position: usize, on: bool);

    /// Pushes the buffered frame to the hardware.
    fn flush(&mut self);
}

/// Strip of RGB indicator pixels.
pub trait PixelStrip {
    /// Sets one pixel. Brightness is in the range 0.0-1.0.
    fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8, brightness: f32);

    /// Pushes the buffered pixels to the hardware.
    fn flush(&mut self);

    /// Sets every pixel to the same value.
    fn set_all(&mut self, red: u8, green: u8, blue: u8, brightness: f32) {
        for index in 0..PIXEL_COUNT {
            self.set_pixel(index, red, green, blue, brightness);
        }
    }
}

/// Tone generator.
pub trait Buzzer {
    /// Starts a note and returns. The note stops on its own after `duration_ms`.
    fn play_note(&mut self, midi_pitch: u8, duration_ms: u32);
}

/// Ambient temperature sensor.
pub trait TemperatureSensor {
    /// Current temperature in degrees Celsius.
    fn read_celsius(&mut self) -> f32;
}

/// Backlights behind the three touch buttons.
pub trait ButtonLights {
    /// Lights each button whose flag is set.
    fn set_rgb(&mut self, a: bool, b: bool, c: bool);
}

/// The collaborators a mode may touch during a tick.
pub struct Devices<'a> {
    pub display: &'a mut dyn SegmentDisplay,
    pub pixels: &'a mut dyn PixelStrip,
    pub buzzer: &'a mut dyn Buzzer,
    pub sensor: &'a mut dyn TemperatureSensor,
    pub lights: &'a mut dyn ButtonLights,
}
