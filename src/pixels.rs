//! Pixel values and fixed-size pixel buffers for layered composition.
//!
//! A [`Pixel`] is an `Srgb<f32>` color (0.0-1.0 per channel) plus a brightness.
//! Intermediate values may leave that range while layers are added and blended;
//! they are clamped only when written to a [`PixelStrip`].

use core::ops::{Add, AddAssign, Index, IndexMut};

use palette::{Mix, Srgb};

use crate::hal::PixelStrip;

/// Color and brightness of one indicator pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub color: Srgb,
    pub brightness: f32,
}

impl Pixel {
    /// Black at zero brightness.
    pub const OFF: Pixel = Pixel::new(Srgb::new(0.0, 0.0, 0.0), 0.0);

    pub const fn new(color: Srgb, brightness: f32) -> Self {
        Self { color, brightness }
    }

    /// Creates a pixel from channels given on the 0-255 scale.
    pub const fn rgb8(red: f32, green: f32, blue: f32, brightness: f32) -> Self {
        Self::new(crate::colors::rgb8(red, green, blue), brightness)
    }

    /// Weighted blend toward `target`: `weight * target + (1 - weight) * self`.
    ///
    /// `weight` is clamped to 0.0-1.0.
    pub fn blend(self, weight: f32, target: Pixel) -> Pixel {
        let weight = weight.clamp(0.0, 1.0);
        Pixel {
            color: self.color.mix(target.color, weight),
            brightness: weight * target.brightness + (1.0 - weight) * self.brightness,
        }
    }

    /// Writes this pixel to a strip, clamping channels and brightness.
    pub fn write_to(&self, strip: &mut dyn PixelStrip, index: usize) {
        let rgb: Srgb<u8> = self.color.into_format();
        strip.set_pixel(
            index,
            rgb.red,
            rgb.green,
            rgb.blue,
            self.brightness.clamp(0.0, 1.0),
        );
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::OFF
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(self, other: Pixel) -> Pixel {
        Pixel {
            color: self.color + other.color,
            brightness: self.brightness + other.brightness,
        }
    }
}

impl AddAssign for Pixel {
    fn add_assign(&mut self, other: Pixel) {
        *self = *self + other;
    }
}

/// Fixed-length sequence of pixels.
///
/// The length is part of the type, so composing buffers of different sizes is
/// rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Pixel; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Creates a buffer with every pixel set to `pixel`.
    pub const fn filled(pixel: Pixel) -> Self {
        Self { pixels: [pixel; N] }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    /// Adds `pixel` to every entry.
    pub fn add_all(&mut self, pixel: Pixel) {
        for entry in self.pixels.iter_mut() {
            *entry += pixel;
        }
    }

    /// Adds `other` entry by entry.
    pub fn add(&mut self, other: &PixelBuffer<N>) {
        for (entry, addend) in self.pixels.iter_mut().zip(other.pixels.iter()) {
            *entry += *addend;
        }
    }

    /// Blends every entry toward the matching entry of `target`.
    ///
    /// A weight of 0.0 keeps `self`, 1.0 yields `target`.
    pub fn blend(&self, weight: f32, target: &PixelBuffer<N>) -> PixelBuffer<N> {
        let mut mixed = *self;
        for (entry, other) in mixed.pixels.iter_mut().zip(target.pixels.iter()) {
            *entry = entry.blend(weight, *other);
        }
        mixed
    }

    /// Writes the first `count` pixels to the strip.
    ///
    /// # Panics
    /// Panics if `count` exceeds the buffer length.
    pub fn write_to(&self, strip: &mut dyn PixelStrip, count: usize) {
        assert!(count <= N, "cannot write {} pixels from a buffer of {}", count, N);
        for (index, pixel) in self.pixels[..count].iter().enumerate() {
            pixel.write_to(strip, index);
        }
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::filled(Pixel::OFF)
    }
}

impl<const N: usize> Index<usize> for PixelBuffer<N> {
    type Output = Pixel;

    fn index(&self, index: usize) -> &Pixel {
        &self.pixels[index]
    }
}

impl<const N: usize> IndexMut<usize> for PixelBuffer<N> {
    fn index_mut(&mut self, index: usize) -> &mut Pixel {
        &mut self.pixels[index]
    }
}
