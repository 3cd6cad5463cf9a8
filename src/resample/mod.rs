//! Integer-divisor downscaling.
//!
//! Five interchangeable resamplers map a [`TgaImage`] to one whose
//! dimensions are `max(1, floor(size / divisor))` on each axis. Every
//! method reads the source through [`crate::sample`], so edge handling is
//! replicate-edge clamping everywhere.
//!
//! Output pixels are `Bgra8` when the source carries alpha and `Bgr8`
//! otherwise.

mod area;
mod bicubic;
mod bilinear;
mod kernel;
mod lanczos;
mod nearest;

use alloc::string::ToString;
use alloc::vec;
use core::str::FromStr;
use enough::Stop;

use crate::error::TgaError;
use crate::image::{TgaImage, buffer_len};
use crate::pixel::{PixelLayout, Sample, sample};

/// Lanczos window radius used unless overridden.
pub const DEFAULT_LANCZOS_RADIUS: u32 = 3;

/// Largest accepted Lanczos radius. Each output pixel convolves
/// `(2a - 1)^2` source taps.
pub const MAX_LANCZOS_RADIUS: u32 = 16;

/// Downscaling algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResampleMethod {
    /// Point sampling. Fastest, blockiest.
    Nearest,
    /// 2x2 linear interpolation around the half-pixel-mapped center.
    Bilinear,
    /// 4x4 cubic convolution (a = -0.5). The convolution is not clamped,
    /// but stored bytes saturate: overshoot becomes 255, undershoot 0.
    Bicubic,
    /// Windowed sinc, clamped to `[0, 255]`.
    Lanczos,
    /// Box average over each `divisor x divisor` block, truncated.
    Area,
}

impl ResampleMethod {
    pub const ALL: [ResampleMethod; 5] = [
        Self::Nearest,
        Self::Bilinear,
        Self::Bicubic,
        Self::Lanczos,
        Self::Area,
    ];

    /// Numeric index used by external callers (0 = Nearest ... 4 = Area).
    pub const fn index(self) -> u8 {
        match self {
            Self::Nearest => 0,
            Self::Bilinear => 1,
            Self::Bicubic => 2,
            Self::Lanczos => 3,
            Self::Area => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Lanczos => "lanczos",
            Self::Area => "area",
        }
    }
}

impl TryFrom<u8> for ResampleMethod {
    type Error = TgaError;

    fn try_from(index: u8) -> Result<Self, TgaError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| TgaError::UnknownMethod(alloc::format!("index {index}")))
    }
}

impl FromStr for ResampleMethod {
    type Err = TgaError;

    fn from_str(s: &str) -> Result<Self, TgaError> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "point" => Ok(Self::Nearest),
            "bilinear" | "linear" => Ok(Self::Bilinear),
            "bicubic" | "cubic" => Ok(Self::Bicubic),
            "lanczos" | "lanczos3" => Ok(Self::Lanczos),
            "area" | "box" => Ok(Self::Area),
            _ => Err(TgaError::UnknownMethod(s.to_string())),
        }
    }
}

impl core::fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Output dimensions for `divisor`: `max(1, floor(size / divisor))`.
pub fn scaled_dimensions(width: u32, height: u32, divisor: u32) -> Result<(u32, u32), TgaError> {
    if divisor == 0 {
        return Err(TgaError::InvalidDivisor);
    }
    Ok(((width / divisor).max(1), (height / divisor).max(1)))
}

/// Builder for a downscale.
///
/// ```
/// use zentga::{PixelLayout, ResampleMethod, ResampleRequest, TgaImage, Unstoppable};
///
/// let image = TgaImage::new(4, 4, PixelLayout::Bgr8, vec![90; 4 * 4 * 3])?;
/// let half = ResampleRequest::new(&image, 2)
///     .method(ResampleMethod::Lanczos)
///     .resample(Unstoppable)?;
/// assert_eq!((half.width(), half.height()), (2, 2));
/// # Ok::<(), zentga::TgaError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ResampleRequest<'a> {
    image: &'a TgaImage,
    divisor: u32,
    method: ResampleMethod,
    lanczos_radius: u32,
}

impl<'a> ResampleRequest<'a> {
    /// Downscale `image` by `divisor` (must be at least 1) with the
    /// nearest-neighbor method unless another is chosen.
    pub fn new(image: &'a TgaImage, divisor: u32) -> Self {
        Self {
            image,
            divisor,
            method: ResampleMethod::Nearest,
            lanczos_radius: DEFAULT_LANCZOS_RADIUS,
        }
    }

    pub fn method(mut self, method: ResampleMethod) -> Self {
        self.method = method;
        self
    }

    /// Lanczos window radius `a`, clamped to
    /// `1..=`[`MAX_LANCZOS_RADIUS`].
    pub fn lanczos_radius(mut self, radius: u32) -> Self {
        self.lanczos_radius = radius.clamp(1, MAX_LANCZOS_RADIUS);
        self
    }

    /// Produce the downscaled image. Fails only on a zero divisor or
    /// cancellation.
    pub fn resample(self, stop: impl Stop) -> Result<TgaImage, TgaError> {
        let (dst_width, dst_height) =
            scaled_dimensions(self.image.width(), self.image.height(), self.divisor)?;
        let grid = Grid {
            pixels: self.image.pixels(),
            layout: self.image.layout(),
            src_width: self.image.width(),
            src_height: self.image.height(),
            dst_width,
            dst_height,
            divisor: self.divisor,
        };
        let has_alpha = self.image.has_alpha();
        match self.method {
            ResampleMethod::Nearest => run(&nearest::Nearest, &grid, has_alpha, &stop),
            ResampleMethod::Bilinear => run(&bilinear::Bilinear, &grid, has_alpha, &stop),
            ResampleMethod::Bicubic => run(&bicubic::Bicubic::new(&grid), &grid, has_alpha, &stop),
            ResampleMethod::Lanczos => run(
                &lanczos::Lanczos::new(&grid, self.lanczos_radius),
                &grid,
                has_alpha,
                &stop,
            ),
            ResampleMethod::Area => run(&area::Area, &grid, has_alpha, &stop),
        }
    }
}

/// Source pixels plus the source/destination geometry of one downscale.
pub(crate) struct Grid<'a> {
    pixels: &'a [u8],
    layout: PixelLayout,
    pub src_width: u32,
    pub src_height: u32,
    pub dst_width: u32,
    pub dst_height: u32,
    pub divisor: u32,
}

impl Grid<'_> {
    /// Clamped source read.
    #[inline]
    pub fn at(&self, x: i64, y: i64) -> Sample {
        sample(
            self.pixels,
            self.src_width,
            self.src_height,
            x,
            y,
            self.layout,
        )
    }

    /// Half-pixel-center source x for destination column `i`.
    #[inline]
    pub fn center_x(&self, i: usize) -> f64 {
        half_pixel_center(i, self.src_width, self.dst_width)
    }

    /// Half-pixel-center source y for destination row `j`.
    #[inline]
    pub fn center_y(&self, j: usize) -> f64 {
        half_pixel_center(j, self.src_height, self.dst_height)
    }
}

#[inline]
pub(crate) fn half_pixel_center(i: usize, src_len: u32, dst_len: u32) -> f64 {
    (i as f64 + 0.5) * f64::from(src_len) / f64::from(dst_len) - 0.5
}

/// One resampling strategy: computes a destination pixel (B,G,R,A) from
/// the clamped source.
pub(crate) trait Resampler {
    fn pixel(&self, grid: &Grid<'_>, i: usize, j: usize) -> [u8; 4];
}

fn run(
    resampler: &impl Resampler,
    grid: &Grid<'_>,
    has_alpha: bool,
    stop: &dyn Stop,
) -> Result<TgaImage, TgaError> {
    let layout = PixelLayout::for_alpha(has_alpha);
    let stride = layout.bytes_per_pixel();
    let mut out = vec![0u8; buffer_len(grid.dst_width, grid.dst_height, layout)?];
    let row_bytes = grid.dst_width as usize * stride;

    for (j, row) in out.chunks_exact_mut(row_bytes).enumerate() {
        if j % 16 == 0 {
            stop.check()?;
        }
        for (i, px) in row.chunks_exact_mut(stride).enumerate() {
            px.copy_from_slice(&resampler.pixel(grid, i, j)[..stride]);
        }
    }

    TgaImage::from_parts(grid.dst_width, grid.dst_height, layout, has_alpha, out)
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use alloc::vec::Vec;

    /// Build a grid over `pixels` for a downscale by `divisor`.
    pub fn grid(pixels: &[u8], width: u32, height: u32, layout: PixelLayout, divisor: u32) -> Grid<'_> {
        let (dst_width, dst_height) = scaled_dimensions(width, height, divisor).unwrap();
        Grid {
            pixels,
            layout,
            src_width: width,
            src_height: height,
            dst_width,
            dst_height,
            divisor,
        }
    }

    /// A 1-row BGR image whose three channels all equal `values[x]`.
    pub fn gray_row(values: &[u8]) -> Vec<u8> {
        values.iter().flat_map(|&v| [v, v, v]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_never_reach_zero() {
        assert_eq!(scaled_dimensions(5, 5, 3).unwrap(), (1, 1));
        assert_eq!(scaled_dimensions(2, 9, 4).unwrap(), (1, 2));
        assert_eq!(scaled_dimensions(64, 32, 1).unwrap(), (64, 32));
        assert!(matches!(
            scaled_dimensions(4, 4, 0),
            Err(TgaError::InvalidDivisor)
        ));
    }

    #[test]
    fn half_pixel_center_mapping() {
        assert_eq!(half_pixel_center(0, 4, 2), 0.5);
        assert_eq!(half_pixel_center(1, 4, 2), 2.5);
        assert_eq!(half_pixel_center(3, 7, 7), 3.0);
    }

    #[test]
    fn lanczos_radius_is_bounded() {
        let image = TgaImage::new(2, 2, PixelLayout::Bgr8, vec![5; 12]).unwrap();
        let request = ResampleRequest::new(&image, 1);
        assert_eq!(request.lanczos_radius(0).lanczos_radius, 1);
        assert_eq!(request.lanczos_radius(7).lanczos_radius, 7);
        assert_eq!(
            request.lanczos_radius(u32::MAX).lanczos_radius,
            MAX_LANCZOS_RADIUS
        );
    }

    #[test]
    fn method_from_index_and_name() {
        for m in ResampleMethod::ALL {
            assert_eq!(ResampleMethod::try_from(m.index()).unwrap(), m);
            assert_eq!(m.name().parse::<ResampleMethod>().unwrap(), m);
        }
        assert!(ResampleMethod::try_from(5).is_err());
        assert_eq!("Lanczos3".parse::<ResampleMethod>().unwrap(), ResampleMethod::Lanczos);
        assert!("sinc".parse::<ResampleMethod>().is_err());
    }
}
