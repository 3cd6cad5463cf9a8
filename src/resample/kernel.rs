//! Separable kernel weighting shared by the bicubic and Lanczos resamplers.
//!
//! Weights are computed once per destination column and per destination
//! row, so the per-pixel loop only multiplies `wx * wy`.

use alloc::vec::Vec;
use core::f64::consts::PI;

use super::{Grid, half_pixel_center};

/// Cubic convolution parameter.
const CUBIC_A: f64 = -0.5;

/// Keys cubic convolution kernel with `a = -0.5`.
pub(crate) fn cubic(t: f64) -> f64 {
    let t = t.abs();
    if t < 1.0 {
        (CUBIC_A + 2.0) * t * t * t - (CUBIC_A + 3.0) * t * t + 1.0
    } else if t < 2.0 {
        CUBIC_A * t * t * t - 5.0 * CUBIC_A * t * t + 8.0 * CUBIC_A * t - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Lanczos kernel `sinc(x) * sinc(x / a)` inside `|x| < a`.
pub(crate) fn lanczos(x: f64, a: f64) -> f64 {
    if x.abs() < a { sinc(x) * sinc(x / a) } else { 0.0 }
}

/// Source taps for one destination coordinate on one axis.
pub(crate) struct Taps {
    /// Source index of `weights[0]` (may be negative; reads clamp).
    first: i64,
    weights: Vec<f64>,
}

#[cfg(test)]
impl Taps {
    pub(crate) fn len(&self) -> usize {
        self.weights.len()
    }
}

/// Build taps for every destination index along an axis.
///
/// `window` maps the half-pixel-centered source coordinate to the
/// inclusive source index range; `kernel` weighs `center - index`.
pub(crate) fn axis_taps(
    src_len: u32,
    dst_len: u32,
    window: impl Fn(f64) -> (i64, i64),
    kernel: impl Fn(f64) -> f64,
) -> Vec<Taps> {
    (0..dst_len as usize)
        .map(|i| {
            let center = half_pixel_center(i, src_len, dst_len);
            let (first, last) = window(center);
            let weights = (first..=last)
                .map(|k| kernel(center - k as f64))
                .collect();
            Taps { first, weights }
        })
        .collect()
}

/// Weighted sum of the source under `rows x cols`, normalized by the total
/// weight and rounded half-to-even. `None` when the weights sum to exactly
/// zero.
pub(crate) fn convolve(grid: &Grid<'_>, cols: &Taps, rows: &Taps) -> Option<[f64; 4]> {
    let mut acc = [0.0f64; 4];
    let mut total = 0.0f64;
    for (dy, &wy) in rows.weights.iter().enumerate() {
        let y = rows.first + dy as i64;
        for (dx, &wx) in cols.weights.iter().enumerate() {
            let x = cols.first + dx as i64;
            let w = wx * wy;
            let px = grid.at(x, y).to_array();
            for (a, &c) in acc.iter_mut().zip(px.iter()) {
                *a += f64::from(c) * w;
            }
            total += w;
        }
    }
    if total == 0.0 {
        return None;
    }
    Some(acc.map(|a| (a / total).round_ties_even()))
}
