use super::{Grid, Resampler};

/// Point sampling at `(i * width / new_width, j * height / new_height)`.
pub(crate) struct Nearest;

impl Resampler for Nearest {
    #[inline]
    fn pixel(&self, grid: &Grid<'_>, i: usize, j: usize) -> [u8; 4] {
        let sx = i as u64 * u64::from(grid.src_width) / u64::from(grid.dst_width);
        let sy = j as u64 * u64::from(grid.src_height) / u64::from(grid.dst_height);
        grid.at(sx as i64, sy as i64).to_array()
    }
}
