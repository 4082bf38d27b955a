#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Controller`**: The application context; call `step` once per loop iteration
//! - **`StateMachine`**: Owns the single active mode, dispatches buttons, runs transitions
//! - **`Mode`** / **`ModeKind`**: The selectable behaviors (clock, nap, timeout, menu, ...)
//! - **`binding`**: Fixed table from `(ModeKind, Button)` to an action and/or successor
//! - **`Handoff`**: Value passed from an exiting mode to the one replacing it
//! - **`PixelBuffer`**: Fixed-size pixel layers with additive and weighted composition
//! - **`SegmentDisplay`**, **`PixelStrip`**, **`Buzzer`**, **`TemperatureSensor`**,
//!   **`ButtonLights`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `Srgb<f32>` (0.0-1.0 range) during composition and are clamped
//! to 8-bit channels when written to a `PixelStrip`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod buttons;
pub mod colors;
pub mod controller;
pub mod daylight;
pub mod hal;
pub mod machine;
pub mod mode;
pub mod pixels;
pub mod settings;
pub mod text;
pub mod time;
pub mod tune;
pub mod types;

pub use buttons::{Button, ButtonState};
pub use controller::Controller;
pub use hal::{ButtonLights, Buzzer, Devices, PixelStrip, SegmentDisplay, TemperatureSensor};
pub use machine::{StateMachine, Transition};
pub use mode::{Action, Binding, Frame, Mode, Target, binding};
pub use pixels::{Pixel, PixelBuffer};
pub use settings::{Settings, SunHours};
pub use time::{TimeDuration, TimeInstant, TimeSource, WallTime};
pub use types::{ClockError, Departure, Handoff, ModeKind};

/// Number of glyphs on the segment display.
pub const DISPLAY_WIDTH: usize = 4;

/// Number of physical pixels on the strip.
pub const PIXEL_COUNT: usize = 7;
