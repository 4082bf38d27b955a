//! Day/night pixel blend for the clock face.
//!
//! Three layers are built over a virtual buffer wider than the physical strip:
//! a green day layer with a warm shimmer, a blue night layer with twinkling
//! stars, and a red sunrise/sunset tint. The night layer is blended over the
//! day layer by [`day_night_weight`], then the tint by [`sun_tint_weight`].

use crate::PIXEL_COUNT;
use crate::colors::{STAR_COUNT, night_twinkle, sine_shine};
use crate::pixels::{Pixel, PixelBuffer};
use crate::settings::SunHours;
use crate::time::WallTime;

/// Width of the virtual buffer used while blending.
pub const VIRTUAL_PIXELS: usize = 12;

/// Rises linearly from 0.0 to 1.0 over the first half of `progress` and falls
/// back to 0.0 over the second half. `progress` is clamped to 0.0-1.0.
pub fn triangle(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    if progress <= 0.5 {
        progress * 2.0
    } else {
        1.0 - (progress - 0.5) * 2.0
    }
}

#[inline]
fn minute_progress(minute: u8) -> f32 {
    minute as f32 / 59.0
}

/// Weight of the night layer: 1.0 is full night, 0.0 full day.
///
/// The sunrise hour fades from night to day across its minutes, the sunset
/// hour from day to night.
pub fn day_night_weight(time: WallTime, sun: SunHours) -> f32 {
    let hour = time.hour();
    let progress = minute_progress(time.minute());

    if hour == sun.sunrise {
        1.0 - progress
    } else if hour == sun.sunset {
        progress
    } else if hour < sun.sunrise || hour > sun.sunset {
        1.0
    } else {
        0.0
    }
}

/// Weight of the sunrise/sunset tint; non-zero only during those two hours.
pub fn sun_tint_weight(time: WallTime, sun: SunHours) -> f32 {
    let hour = time.hour();
    if hour == sun.sunrise || hour == sun.sunset {
        triangle(minute_progress(time.minute()))
    } else {
        0.0
    }
}

/// Computes the blended frame for `time`.
///
/// Only the first [`PIXEL_COUNT`] entries map to physical pixels.
pub fn day_night_frame(time: WallTime, sun: SunHours) -> PixelBuffer<VIRTUAL_PIXELS> {
    let second = time.second();

    let mut day = PixelBuffer::<VIRTUAL_PIXELS>::filled(Pixel::rgb8(0.0, 1.0, 0.0, 0.05));
    day.add_all(Pixel::rgb8(0.0, 1.0, 0.0, 0.05));
    for index in 0..PIXEL_COUNT {
        day[index] += sine_shine(index, second);
    }

    let mut night = PixelBuffer::<VIRTUAL_PIXELS>::filled(Pixel::rgb8(1.0, 0.0, 2.0, 0.05));
    night.add_all(Pixel::rgb8(1.0, 0.0, 2.0, 0.05));
    for star in 0..STAR_COUNT {
        let (index, tint) = night_twinkle(star, second, VIRTUAL_PIXELS);
        night[index] += tint;
    }

    let tint_red = 5.0 * (1 + time.minute() % 5) as f32;
    let tint = PixelBuffer::<VIRTUAL_PIXELS>::filled(Pixel::rgb8(tint_red, 0.0, 0.0, 0.05));

    day.blend(day_night_weight(time, sun), &night)
        .blend(sun_tint_weight(time, sun), &tint)
}
