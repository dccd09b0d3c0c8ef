//! Core types for colour transfer

use num_traits::NumCast;

/// Interleaving order of the three samples of a display pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PixelLayout {
    /// Red, green, blue (the `image` crate's order)
    #[default]
    Rgb,
    /// Blue, green, red (common for camera and OpenCV-style buffers)
    Bgr,
}

impl PixelLayout {
    /// Position of the red and blue samples within a pixel
    fn red_blue(&self) -> (usize, usize) {
        match self {
            PixelLayout::Rgb => (0, 2),
            PixelLayout::Bgr => (2, 0),
        }
    }

    /// Read one pixel in canonical `[r, g, b]` order
    #[inline]
    pub fn to_rgb<T: Copy>(&self, pixel: &[T]) -> [T; 3] {
        let (r, b) = self.red_blue();
        [pixel[r], pixel[1], pixel[b]]
    }

    /// Write a canonical `[r, g, b]` triple in this layout
    #[inline]
    pub fn write_rgb<T: Copy>(&self, rgb: [T; 3], pixel: &mut [T]) {
        let (r, b) = self.red_blue();
        pixel[r] = rgb[0];
        pixel[1] = rgb[1];
        pixel[b] = rgb[2];
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Working-space channel roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Brightness-like channel (L*, or l in lαβ)
    Lightness = 0,
    /// First chromatic axis (a*, or α)
    ChromaA = 1,
    /// Second chromatic axis (b*, or β)
    ChromaB = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Lightness, Channel::ChromaA, Channel::ChromaB];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Display sample type
pub trait Sample: Copy + NumCast + PartialOrd {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
}

impl Sample for u8 {
    fn to_f32(self) -> f32 {
        self as f32 / 255.0
    }

    /// Rounds and saturates at the 0-255 boundary; NaN maps to 0.
    fn from_f32(value: f32) -> Self {
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    }
}
