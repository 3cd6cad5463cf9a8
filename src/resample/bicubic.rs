use alloc::vec::Vec;

use super::kernel::{Taps, axis_taps, convolve, cubic};
use super::{Grid, Resampler};

/// 4x4 cubic convolution over `floor(s)-1 ..= floor(s)+2` on each axis.
pub(crate) struct Bicubic {
    cols: Vec<Taps>,
    rows: Vec<Taps>,
}

fn window(center: f64) -> (i64, i64) {
    let base = center.floor() as i64;
    (base - 1, base + 2)
}

impl Bicubic {
    pub(crate) fn new(grid: &Grid<'_>) -> Self {
        Self {
            cols: axis_taps(grid.src_width, grid.dst_width, window, cubic),
            rows: axis_taps(grid.src_height, grid.dst_height, window, cubic),
        }
    }

    /// Normalized, rounded channel values before narrowing to bytes.
    ///
    /// Negative kernel lobes can push these outside `[0, 255]`; no clamp
    /// is applied. A zero weight sum leaves the pixel at zero.
    pub(crate) fn weighted(&self, grid: &Grid<'_>, i: usize, j: usize) -> [f64; 4] {
        convolve(grid, &self.cols[i], &self.rows[j]).unwrap_or([0.0; 4])
    }
}

impl Resampler for Bicubic {
    fn pixel(&self, grid: &Grid<'_>, i: usize, j: usize) -> [u8; 4] {
        // float-to-int `as` saturates out-of-range values
        self.weighted(grid, i, j).map(|c| c as u8)
    }
}
