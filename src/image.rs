//! Canonical raster type shared by the decoder and encoder.

/// Channel layout of a [`PixelImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// Single luminance channel.
    Gray,
    /// Luminance plus alpha.
    GrayAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
    /// Palette-indexed. Observed in header probes and transiently during
    /// decode; decode output is always expanded to direct color, so a
    /// returned [`PixelImage`] never carries this layout.
    Indexed,
}

impl ColorType {
    /// Channel count implied by the layout.
    pub fn planes(self) -> usize {
        match self {
            ColorType::Gray | ColorType::Indexed => 1,
            ColorType::GrayAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    pub(crate) fn from_engine(color: png::ColorType) -> Self {
        match color {
            png::ColorType::Grayscale => ColorType::Gray,
            png::ColorType::GrayscaleAlpha => ColorType::GrayAlpha,
            png::ColorType::Rgb => ColorType::Rgb,
            png::ColorType::Rgba => ColorType::Rgba,
            png::ColorType::Indexed => ColorType::Indexed,
        }
    }

    pub(crate) fn to_engine(self) -> png::ColorType {
        match self {
            ColorType::Gray => png::ColorType::Grayscale,
            ColorType::GrayAlpha => png::ColorType::GrayscaleAlpha,
            ColorType::Rgb => png::ColorType::Rgb,
            ColorType::Rgba => png::ColorType::Rgba,
            ColorType::Indexed => png::ColorType::Indexed,
        }
    }
}

/// Header metadata, as probed before any pixel data is read.
///
/// Reflects the stored file header, pre-normalization: `color_type` may be
/// [`ColorType::Indexed`] and `bit_depth` may be any depth the container
/// allows, including ones [`decode_bytes`](crate::decode_bytes) rejects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
}

/// One fully decoded or ready-to-encode raster.
///
/// Pixel data is 8 bits per channel, row-major, top row first, with no
/// padding between rows: `pixels.len() == height * width * planes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelImage {
    /// Width in pixels, positive.
    pub width: u32,
    /// Height in pixels, positive.
    pub height: u32,
    /// Bits per channel. Always 8 in images produced by this crate.
    pub bit_depth: u8,
    /// Channel layout. Never [`ColorType::Indexed`] in decode output.
    pub color_type: ColorType,
    /// Owned pixel data, exactly `height * width * planes` bytes.
    pub pixels: Vec<u8>,
}

impl PixelImage {
    /// Build an 8-bit image from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `pixels` is not exactly `width * height * planes` bytes.
    pub fn new(width: u32, height: u32, color_type: ColorType, pixels: Vec<u8>) -> Self {
        let expected = width as usize * height as usize * color_type.planes();
        assert_eq!(
            pixels.len(),
            expected,
            "pixel buffer is {} bytes, {width}x{height} {color_type:?} needs {expected}",
            pixels.len(),
        );
        PixelImage {
            width,
            height,
            bit_depth: 8,
            color_type,
            pixels,
        }
    }

    /// Channel count implied by the layout.
    pub fn planes(&self) -> usize {
        self.color_type.planes()
    }

    /// Bytes per row (`width * planes`; rows are unpadded).
    pub fn stride(&self) -> usize {
        self.width as usize * self.planes()
    }

    /// Iterate over rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.stride())
    }
}
