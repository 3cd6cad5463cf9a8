use alloc::vec::Vec;

use super::kernel::{Taps, axis_taps, convolve, lanczos};
use super::{Grid, Resampler};

/// Windowed sinc over `floor(s - a + 1) ..= floor(s + a) - 1` on each axis.
pub(crate) struct Lanczos {
    cols: Vec<Taps>,
    rows: Vec<Taps>,
}

impl Lanczos {
    pub(crate) fn new(grid: &Grid<'_>, radius: u32) -> Self {
        let a = f64::from(radius);
        let window = |center: f64| {
            (
                (center - a + 1.0).floor() as i64,
                (center + a).floor() as i64 - 1,
            )
        };
        let kernel = |x: f64| lanczos(x, a);
        Self {
            cols: axis_taps(grid.src_width, grid.dst_width, window, kernel),
            rows: axis_taps(grid.src_height, grid.dst_height, window, kernel),
        }
    }

    /// Normalized, rounded channel values clamped to `[0, 255]`.
    pub(crate) fn weighted(&self, grid: &Grid<'_>, i: usize, j: usize) -> [f64; 4] {
        convolve(grid, &self.cols[i], &self.rows[j])
            .unwrap_or([0.0; 4])
            .map(|c| c.clamp(0.0, 255.0))
    }
}

impl Resampler for Lanczos {
    fn pixel(&self, grid: &Grid<'_>, i: usize, j: usize) -> [u8; 4] {
        self.weighted(grid, i, j).map(|c| c as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelLayout;
    use crate::resample::test_util::{grid, gray_row};

    #[test]
    fn ringing_is_clamped() {
        let px = gray_row(&[0, 0, 255, 255, 0, 0]);
        let g = grid(&px, 6, 1, PixelLayout::Bgr8, 2);
        let l = Lanczos::new(&g, 3);
        assert_eq!(l.weighted(&g, 1, 0)[0], 255.0);

        let px = gray_row(&[255, 255, 0, 0, 255, 255]);
        let g = grid(&px, 6, 1, PixelLayout::Bgr8, 2);
        let l = Lanczos::new(&g, 3);
        assert_eq!(l.weighted(&g, 1, 0)[0], 0.0);
    }

    #[test]
    fn flat_input_is_preserved() {
        let px = gray_row(&[77; 9]);
        let g = grid(&px, 9, 1, PixelLayout::Bgr8, 3);
        let l = Lanczos::new(&g, 3);
        for i in 0..3 {
            assert_eq!(l.pixel(&g, i, 0), [77, 77, 77, 255]);
        }
    }

    #[test]
    fn radius_sets_tap_count() {
        let px = gray_row(&[1; 8]);
        let g = grid(&px, 8, 1, PixelLayout::Bgr8, 2);
        // center 0.5: floor(0.5 - a + 1) ..= floor(0.5 + a) - 1
        assert_eq!(Lanczos::new(&g, 2).cols[0].len(), 3);
        assert_eq!(Lanczos::new(&g, 3).cols[0].len(), 5);
    }
}
