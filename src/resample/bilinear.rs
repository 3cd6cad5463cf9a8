use super::{Grid, Resampler};

/// Interpolates the 2x2 neighborhood at `floor(sx), floor(sx)+1` by
/// `floor(sy), floor(sy)+1` around the half-pixel-mapped center.
pub(crate) struct Bilinear;

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Resampler for Bilinear {
    fn pixel(&self, grid: &Grid<'_>, i: usize, j: usize) -> [u8; 4] {
        let sx = grid.center_x(i);
        let sy = grid.center_y(j);
        let x0 = sx.floor();
        let y0 = sy.floor();
        let dx = sx - x0;
        let dy = sy - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let c00 = grid.at(x0, y0).to_array();
        let c10 = grid.at(x0 + 1, y0).to_array();
        let c01 = grid.at(x0, y0 + 1).to_array();
        let c11 = grid.at(x0 + 1, y0 + 1).to_array();

        core::array::from_fn(|k| {
            let top = lerp(f64::from(c00[k]), f64::from(c10[k]), dx);
            let bottom = lerp(f64::from(c01[k]), f64::from(c11[k]), dx);
            lerp(top, bottom, dy).round_ties_even() as u8
        })
    }
}
