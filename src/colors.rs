//! Color helpers and the per-pixel color generators.
//!
//! HSV conversion goes through `palette`. Every generator here is a pure
//! function of its inputs, so each frame can be recomputed from the current
//! time alone.

use palette::{FromColor, Hsv, Srgb};

use crate::PIXEL_COUNT;
use crate::pixels::Pixel;

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates a color from channels given on the 0-255 scale.
#[inline]
pub const fn rgb8(red: f32, green: f32, blue: f32) -> Srgb {
    Srgb::new(red / 255.0, green / 255.0, blue / 255.0)
}

/// Slightly scrambled rainbow used by the binary counters.
pub const BINARY_PALETTE: [Srgb; 10] = [
    rgb8(25.0, 0.0, 0.0),
    rgb8(15.0, 15.0, 0.0),
    rgb8(0.0, 15.0, 15.0),
    rgb8(0.0, 0.0, 25.0),
    rgb8(15.0, 0.0, 15.0),
    rgb8(20.0, 10.0, 0.0),
    rgb8(0.0, 25.0, 0.0),
    rgb8(0.0, 10.0, 20.0),
    rgb8(10.0, 0.0, 20.0),
    rgb8(20.0, 0.0, 10.0),
];

/// Palette indices for the off and on pixels of a counter value.
///
/// Both advance once per block of 128 counts and wrap after ten blocks.
pub fn binary_palette_indices(value: u32) -> (usize, usize) {
    let len = BINARY_PALETTE.len() as u32;
    let off = (value / 128) % len;
    let on = ((value as u64 + 128) / 128 % len as u64) as u32;
    (off as usize, on as usize)
}

/// Off and on colors for a counter value.
pub fn binary_colors(value: u32) -> (Srgb, Srgb) {
    let (off, on) = binary_palette_indices(value);
    (BINARY_PALETTE[off], BINARY_PALETTE[on])
}

/// Maps an angle in degrees onto a smooth 0.0-1.0 wave.
#[inline]
pub fn unit_wave(degrees: f32) -> f32 {
    (libm::sinf(degrees.to_radians()) + 1.0) * 0.5
}

/// Warm shimmer added to a daytime pixel.
///
/// The phase advances 6 degrees per second and is offset by 231 degrees per
/// pixel, so neighbouring pixels glow out of step.
pub fn sine_shine(index: usize, second: u8) -> Pixel {
    let degrees = (second as u32 * 6 + index as u32 * 231) % 360;
    let amount = 50.0 * unit_wave(degrees as f32);
    Pixel::rgb8(amount, amount, 0.0, 0.0)
}

/// Number of virtual stars in the night sky.
pub const STAR_COUNT: usize = 5;

/// Position and tint of one twinkling star.
///
/// Returns the index within a virtual buffer of `size` pixels and the value to
/// add there.
///
/// # Panics
/// Panics if `size` is zero.
pub fn night_twinkle(star: usize, second: u8, size: usize) -> (usize, Pixel) {
    assert!(size > 0, "twinkle needs a non-empty buffer");
    let index = (second as f32 * 0.2 * (star + 1) as f32) as usize % size;
    (index, Pixel::rgb8(0.0, -10.0, 10.0, 0.0))
}

const COUNTDOWN_GO: Srgb = rgb8(2.0, 10.0, 2.0);
const COUNTDOWN_STOP: Srgb = rgb8(30.0, 0.0, 0.0);

/// Traffic-light color of pixel `index` after `elapsed_secs` of a countdown
/// lasting `duration_secs`.
///
/// The countdown is split into one step per pixel. Pixels below the active
/// step are green, pixels above it red, and the active pixel sweeps the hue
/// wheel as its step progresses.
pub fn countdown_color(elapsed_secs: u32, index: usize, duration_secs: u32) -> Srgb {
    let step = (duration_secs / PIXEL_COUNT as u32).max(1);
    let active = (elapsed_secs / step) as usize;

    if index > active {
        COUNTDOWN_STOP
    } else if index < active {
        COUNTDOWN_GO
    } else {
        let progress = (elapsed_secs % step) as f32 / step as f32;
        hsv(progress * 360.0, 1.0, 0.3)
    }
}

/// Rotating rainbow: color of pixel `index` at hue offset `offset`.
///
/// The wheel spans twice the strip length, so half a rainbow is visible at once.
pub fn rainbow_color(index: usize, offset: u64) -> Srgb {
    let span = (PIXEL_COUNT * 2) as u64;
    let position = (index as u64 + offset) % span;
    hsv(position as f32 / span as f32 * 360.0, 1.0, 0.3)
}
