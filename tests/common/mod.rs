//! Shared test infrastructure for rainbow-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rainbow_clock::{
    ButtonLights, Buzzer, Devices, PixelStrip, SegmentDisplay, TemperatureSensor, TimeDuration,
    TimeInstant, TimeSource, WallTime,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable monotonic and wall time
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
    wall: core::cell::Cell<WallTime>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
            wall: core::cell::Cell::new(wall(12, 0, 0)),
        }
    }

    /// Advance monotonic time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_wall(&self, time: WallTime) {
        self.wall.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }

    fn wall_time(&self) -> WallTime {
        self.wall.get()
    }
}

pub fn wall(hour: u8, minute: u8, second: u8) -> WallTime {
    WallTime::new(hour, minute, second).unwrap()
}

// ============================================================================
// Mock Devices
// ============================================================================

/// Segment display that remembers the last text, raw masks and decimal points
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub text: String,
    pub history: Vec<String>,
    pub raw: [u16; 4],
    pub decimal_points: [bool; 4],
    pub flushes: usize,
}

impl SegmentDisplay for MockDisplay {
    fn print_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.history.push(text.to_string());
    }

    fn set_segment_raw(&mut self, position: usize, mask: u16) {
        self.raw[position] = mask;
    }

    fn set_decimal_point(&mut self, position: usize, on: bool) {
        self.decimal_points[position] = on;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// One recorded pixel write
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelWrite {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub brightness: f32,
}

/// Pixel strip holding the last value written to each of its 7 pixels
#[derive(Debug, Default)]
pub struct MockStrip {
    pub pixels: [Option<PixelWrite>; 7],
    pub writes: usize,
    pub flushes: usize,
}

impl MockStrip {
    pub fn pixel(&self, index: usize) -> PixelWrite {
        self.pixels[index].expect("pixel was never written")
    }
}

impl PixelStrip for MockStrip {
    fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8, brightness: f32) {
        self.pixels[index] = Some(PixelWrite {
            red,
            green,
            blue,
            brightness,
        });
        self.writes += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Buzzer recording every note started
#[derive(Debug, Default)]
pub struct MockBuzzer {
    pub notes: Vec<(u8, u32)>,
}

impl Buzzer for MockBuzzer {
    fn play_note(&mut self, midi_pitch: u8, duration_ms: u32) {
        self.notes.push((midi_pitch, duration_ms));
    }
}

/// Sensor returning a fixed reading
#[derive(Debug)]
pub struct MockSensor {
    pub celsius: f32,
}

impl Default for MockSensor {
    fn default() -> Self {
        Self { celsius: 20.0 }
    }
}

impl TemperatureSensor for MockSensor {
    fn read_celsius(&mut self) -> f32 {
        self.celsius
    }
}

/// Backlights remembering the last state
#[derive(Debug, Default)]
pub struct MockLights {
    pub lit: (bool, bool, bool),
}

impl ButtonLights for MockLights {
    fn set_rgb(&mut self, a: bool, b: bool, c: bool) {
        self.lit = (a, b, c);
    }
}

/// All mock devices together
#[derive(Debug, Default)]
pub struct Rig {
    pub display: MockDisplay,
    pub strip: MockStrip,
    pub buzzer: MockBuzzer,
    pub sensor: MockSensor,
    pub lights: MockLights,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&mut self) -> Devices<'_> {
        Devices {
            display: &mut self.display,
            pixels: &mut self.strip,
            buzzer: &mut self.buzzer,
            sensor: &mut self.sensor,
            lights: &mut self.lights,
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Compare two floats with tolerance
pub fn approx(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
