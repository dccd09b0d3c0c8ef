//! Image data structures

use crate::consts::CHANNELS;
use crate::{Channel, Dimensions, PixelLayout, TransferError, TransferResult};

/// An 8-bit, three-sample-per-pixel display image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    pub dimensions: Dimensions,
    pub layout: PixelLayout,
    data: Vec<u8>,
}

impl DisplayImage {
    /// Wrap an interleaved buffer, checking it matches the dimensions
    pub fn new(dimensions: Dimensions, layout: PixelLayout, data: Vec<u8>) -> TransferResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count() * CHANNELS;
        if data.len() != expected {
            return Err(TransferError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            dimensions,
            layout,
            data,
        })
    }

    /// An image where every pixel has the given `[r, g, b]` colour
    pub fn filled(dimensions: Dimensions, layout: PixelLayout, rgb: [u8; 3]) -> TransferResult<Self> {
        check_dimensions(dimensions)?;

        let mut data = vec![0u8; dimensions.pixel_count() * CHANNELS];
        for pixel in data.chunks_exact_mut(CHANNELS) {
            layout.write_rgb(rgb, pixel);
        }

        Ok(Self {
            dimensions,
            layout,
            data,
        })
    }

    /// Build an image from a per-pixel `[r, g, b]` function of `(x, y)`
    pub fn from_fn<F>(dimensions: Dimensions, layout: PixelLayout, mut f: F) -> TransferResult<Self>
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        check_dimensions(dimensions)?;

        let mut data = vec![0u8; dimensions.pixel_count() * CHANNELS];
        let width = dimensions.width as usize;
        for (i, pixel) in data.chunks_exact_mut(CHANNELS).enumerate() {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            layout.write_rgb(f(x, y), pixel);
        }

        Ok(Self {
            dimensions,
            layout,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    /// Raw interleaved samples in this image's layout
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The `[r, g, b]` colour at `(x, y)`
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.dimensions.width as usize + x as usize) * CHANNELS;
        self.layout.to_rgb(&self.data[idx..idx + CHANNELS])
    }

    /// Iterate over pixels in canonical `[r, g, b]` order
    pub fn rgb_pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(move |pixel| self.layout.to_rgb(pixel))
    }

    /// Re-interleave into a different sample order
    pub fn to_layout(&self, layout: PixelLayout) -> DisplayImage {
        if layout == self.layout {
            return self.clone();
        }

        let mut data = vec![0u8; self.data.len()];
        for (src, dst) in self
            .data
            .chunks_exact(CHANNELS)
            .zip(data.chunks_exact_mut(CHANNELS))
        {
            layout.write_rgb(self.layout.to_rgb(src), dst);
        }

        DisplayImage {
            dimensions: self.dimensions,
            layout,
            data,
        }
    }
}

/// A single channel of `f32` samples, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub dimensions: Dimensions,
    data: Vec<f32>,
}

impl Plane {
    pub fn new(dimensions: Dimensions, data: Vec<f32>) -> TransferResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count();
        if data.len() != expected {
            return Err(TransferError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { dimensions, data })
    }

    /// Wrap data produced by an elementwise pass over `like`
    ///
    /// The caller guarantees `data` has one sample per pixel of `like`.
    pub fn with_data_of(like: &Plane, data: Vec<f32>) -> Self {
        debug_assert_eq!(like.data.len(), data.len());
        Self {
            dimensions: like.dimensions,
            data,
        }
    }

    pub fn filled(dimensions: Dimensions, value: f32) -> TransferResult<Self> {
        Self::new(dimensions, vec![value; dimensions.pixel_count()])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Three planes forming a working-space image: lightness then two chromatic axes
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingImage {
    planes: [Plane; 3],
}

impl WorkingImage {
    /// Assemble from three planes, which must share dimensions
    pub fn from_planes(planes: [Plane; 3]) -> TransferResult<Self> {
        let dims = planes[0].dimensions;
        for plane in &planes[1..] {
            if plane.dimensions != dims {
                return Err(TransferError::BufferSizeMismatch {
                    expected: dims.pixel_count(),
                    actual: plane.len(),
                });
            }
        }
        Ok(Self { planes })
    }

    /// Split an interleaved `[c0, c1, c2, c0, ...]` buffer into planes
    pub fn from_interleaved(dimensions: Dimensions, samples: &[f32]) -> TransferResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count() * CHANNELS;
        if samples.len() != expected {
            return Err(TransferError::BufferSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let n = dimensions.pixel_count();
        let mut planes = [
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
        ];
        for pixel in samples.chunks_exact(CHANNELS) {
            planes[0].push(pixel[0]);
            planes[1].push(pixel[1]);
            planes[2].push(pixel[2]);
        }

        let [p0, p1, p2] = planes;
        Ok(Self {
            planes: [
                Plane { dimensions, data: p0 },
                Plane { dimensions, data: p1 },
                Plane { dimensions, data: p2 },
            ],
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.planes[0].dimensions
    }

    pub fn pixel_count(&self) -> usize {
        self.planes[0].len()
    }

    pub fn plane(&self, channel: Channel) -> &Plane {
        &self.planes[channel.index()]
    }

    pub fn planes(&self) -> &[Plane; 3] {
        &self.planes
    }

    /// Replace one plane, keeping the others
    pub fn with_plane(mut self, channel: Channel, plane: Plane) -> TransferResult<Self> {
        if plane.dimensions != self.dimensions() {
            return Err(TransferError::BufferSizeMismatch {
                expected: self.pixel_count(),
                actual: plane.len(),
            });
        }
        self.planes[channel.index()] = plane;
        Ok(self)
    }

    /// The three samples of pixel `i`
    #[inline]
    pub fn pixel(&self, i: usize) -> [f32; 3] {
        [
            self.planes[0].data[i],
            self.planes[1].data[i],
            self.planes[2].data[i],
        ]
    }
}

fn check_dimensions(dimensions: Dimensions) -> TransferResult<()> {
    if dimensions.is_empty() {
        return Err(TransferError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}
