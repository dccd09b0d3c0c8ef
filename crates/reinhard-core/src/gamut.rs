//! Valid numeric envelope of a working colour space

/// Channel ranges outside which a working-space value no longer maps to a
/// displayable colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut {
    /// Lowest and highest valid lightness
    pub lightness: (f32, f32),
    /// Symmetric limit `±chroma[k]` for each chromatic channel
    pub chroma: [f32; 2],
}

impl Gamut {
    /// Midpoint of the lightness range
    pub fn lightness_centre(&self) -> f32 {
        0.5 * (self.lightness.0 + self.lightness.1)
    }

    /// Half-width of the lightness range
    pub fn lightness_half_range(&self) -> f32 {
        0.5 * (self.lightness.1 - self.lightness.0)
    }
}
