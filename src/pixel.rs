/// Pixel memory layout of a [`TgaImage`](crate::TgaImage) buffer.
///
/// TGA stores channels in B,G,R[,A] order and this crate keeps that order
/// end to end; grayscale files are expanded to `Bgr8` on decode.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
        }
    }

    /// Bits per pixel, as written to the TGA pixel-depth field.
    pub fn bits_per_pixel(&self) -> u8 {
        match self {
            Self::Bgr8 => 24,
            Self::Bgra8 => 32,
        }
    }

    /// Layout for resampler output: the alpha byte is present only when
    /// the image carries alpha.
    #[cfg(feature = "std")]
    pub(crate) fn for_alpha(has_alpha: bool) -> Self {
        if has_alpha { Self::Bgra8 } else { Self::Bgr8 }
    }
}

/// One pixel read through [`sample`], always widened to four channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Sample {
    /// Channels in B,G,R,A order.
    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

/// Read the pixel at `(x, y)` with replicate-edge clamping.
///
/// Coordinates are clamped independently to `[0, width-1]` and
/// `[0, height-1]`, so any signed coordinate is valid. 3-byte pixels get
/// an opaque alpha of 255.
///
/// # Panics
///
/// Panics if `width` or `height` is zero, or if `pixels` is shorter than
/// `width * height * layout.bytes_per_pixel()`.
#[inline]
pub fn sample(
    pixels: &[u8],
    width: u32,
    height: u32,
    x: i64,
    y: i64,
    layout: PixelLayout,
) -> Sample {
    let cx = x.clamp(0, i64::from(width) - 1) as usize;
    let cy = y.clamp(0, i64::from(height) - 1) as usize;
    let bpp = layout.bytes_per_pixel();
    let off = (cy * width as usize + cx) * bpp;
    let px = &pixels[off..off + bpp];
    Sample {
        b: px[0],
        g: px[1],
        r: px[2],
        a: if bpp == 4 { px[3] } else { 255 },
    }
}

/// Typed pixels that can view a [`TgaImage`](crate::TgaImage) buffer.
///
/// Implemented for the `rgb` crate's BGR/BGRA 8-bit types.
#[cfg(feature = "rgb")]
pub trait TgaPixel: Copy {
    /// Buffer layout this pixel type reinterprets.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl TgaPixel for rgb::alt::BGR8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}

#[cfg(feature = "rgb")]
impl TgaPixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 BGR: distinct blue channel per pixel
    const PIXELS: [u8; 12] = [10, 0, 0, 20, 0, 0, 30, 0, 0, 40, 0, 0];

    #[test]
    fn clamps_each_axis_independently() {
        let at = |x, y| sample(&PIXELS, 2, 2, x, y, PixelLayout::Bgr8).b;
        assert_eq!(at(0, 0), 10);
        assert_eq!(at(-5, 0), 10);
        assert_eq!(at(9, 0), 20);
        assert_eq!(at(1, -3), 20);
        assert_eq!(at(-1, 7), 30);
        assert_eq!(at(100, 100), 40);
    }

    #[test]
    fn three_byte_pixels_are_opaque() {
        let s = sample(&[1, 2, 3], 1, 1, 0, 0, PixelLayout::Bgr8);
        assert_eq!(s.to_array(), [1, 2, 3, 255]);
    }

    #[test]
    fn four_byte_pixels_keep_alpha() {
        let s = sample(&[1, 2, 3, 4], 1, 1, 0, 0, PixelLayout::Bgra8);
        assert_eq!(s, Sample { b: 1, g: 2, r: 3, a: 4 });
    }
}
