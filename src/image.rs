use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::TgaError;
use crate::pixel::PixelLayout;

/// A decoded (or resampled) image: owned B,G,R[,A] pixels, row-major,
/// top-left origin.
///
/// The buffer length is always `width * height * layout.bytes_per_pixel()`
/// and both dimensions fit the 16-bit TGA header fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TgaImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    has_alpha: bool,
    pixels: Vec<u8>,
}

impl TgaImage {
    /// Wrap a caller-provided pixel buffer.
    ///
    /// `has_alpha` follows the layout: `Bgra8` images carry alpha,
    /// `Bgr8` images do not.
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, TgaError> {
        Self::from_parts(width, height, layout, layout == PixelLayout::Bgra8, pixels)
    }

    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        layout: PixelLayout,
        has_alpha: bool,
        pixels: Vec<u8>,
    ) -> Result<Self, TgaError> {
        if width == 0 || height == 0 {
            return Err(TgaError::InvalidDimensions { width, height });
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(TgaError::DimensionsTooLarge { width, height });
        }
        let expected = buffer_len(width, height, layout)?;
        if pixels.len() != expected {
            return Err(TgaError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            has_alpha,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Bits per stored pixel: 24 or 32.
    pub fn bits_per_pixel(&self) -> u8 {
        self.layout.bits_per_pixel()
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// Whether the image carries alpha.
    ///
    /// A 24-bit file whose descriptor declares alpha bits reports `true`
    /// with a 3-byte layout; its samples read as opaque.
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret pixel data as a typed pixel slice.
    ///
    /// Returns [`TgaError::LayoutMismatch`] if the layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::TgaPixel>(&self) -> Result<&[P], TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(TgaError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels.as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::TgaPixel>(&self) -> Result<imgref::ImgRef<'_, P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Copy into an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::TgaPixel>(&self) -> Result<imgref::ImgVec<P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// `width * height * bpp`, checked.
pub(crate) fn buffer_len(width: u32, height: u32, layout: PixelLayout) -> Result<usize, TgaError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(TgaError::DimensionsTooLarge { width, height })
}
