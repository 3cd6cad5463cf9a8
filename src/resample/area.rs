use super::{Grid, Resampler};

/// Box average of the `divisor x divisor` block at
/// `(i * divisor, j * divisor)`.
///
/// Sums are divided with integer (floor) division, not rounded. Blocks
/// that hang off the right or bottom edge of a non-multiple source read
/// clamped edge pixels.
pub(crate) struct Area;

/// Source indices covered by `start..start + len` on an axis of `size`
/// pixels, each paired with how many block positions clamp onto it.
fn block_span(start: u64, len: u64, size: u64) -> impl Iterator<Item = (i64, u128)> {
    let end = (start + len).min(size);
    let overhang = start + len - end;
    (start..end).map(move |s| {
        let count = if s + 1 == end { 1 + overhang } else { 1 };
        (s as i64, u128::from(count))
    })
}

impl Resampler for Area {
    fn pixel(&self, grid: &Grid<'_>, i: usize, j: usize) -> [u8; 4] {
        let d = u64::from(grid.divisor);
        let width = u64::from(grid.src_width);
        let height = u64::from(grid.src_height);
        let mut acc = [0u128; 4];
        for (y, wy) in block_span(j as u64 * d, d, height) {
            for (x, wx) in block_span(i as u64 * d, d, width) {
                let w = wx * wy;
                let px = grid.at(x, y).to_array();
                for (a, &c) in acc.iter_mut().zip(px.iter()) {
                    *a += u128::from(c) * w;
                }
            }
        }
        let area = u128::from(d) * u128::from(d);
        acc.map(|a| (a / area) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelLayout;
    use alloc::vec::Vec;
    use crate::resample::test_util::{grid, gray_row};

    #[test]
    fn truncates_instead_of_rounding() {
        // (1 + 2) / 2 = 1.5 -> 1, (254 + 255) / 2 = 254.5 -> 254
        let px = gray_row(&[1, 2, 254, 255]);
        let g = grid(&px, 4, 1, PixelLayout::Bgr8, 2);
        assert_eq!(Area.pixel(&g, 0, 0)[0], 1);
        assert_eq!(Area.pixel(&g, 1, 0)[0], 254);
    }

    #[test]
    fn averages_full_block() {
        // 2x2 block: 10, 20 / 30, 40
        let px: [u8; 12] = [10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40];
        let g = grid(&px, 2, 2, PixelLayout::Bgr8, 2);
        assert_eq!(Area.pixel(&g, 0, 0), [25, 25, 25, 255]);
    }

    fn block_sum_by_reads(px: &[u8], w: u32, h: u32, d: u32, i: usize, j: usize) -> [u8; 4] {
        let g = grid(px, w, h, PixelLayout::Bgr8, d);
        let d = i64::from(d);
        let mut acc = [0u64; 4];
        for y in j as i64 * d..(j as i64 + 1) * d {
            for x in i as i64 * d..(i as i64 + 1) * d {
                for (a, c) in acc.iter_mut().zip(g.at(x, y).to_array()) {
                    *a += u64::from(c);
                }
            }
        }
        acc.map(|a| (a / (d * d) as u64) as u8)
    }

    #[test]
    fn counted_spans_match_per_pixel_reads() {
        let (w, h) = (7u32, 5u32);
        let px: Vec<u8> = (0..w * h * 3).map(|v| (v * 37 % 251) as u8).collect();
        for d in 1..=9 {
            let g = grid(&px, w, h, PixelLayout::Bgr8, d);
            for j in 0..g.dst_height as usize {
                for i in 0..g.dst_width as usize {
                    assert_eq!(
                        Area.pixel(&g, i, j),
                        block_sum_by_reads(&px, w, h, d, i, j),
                        "divisor {d} at ({i}, {j})"
                    );
                }
            }
        }
    }

    #[test]
    fn block_span_counts_clamped_positions() {
        let spans: Vec<_> = block_span(0, 5, 3).collect();
        assert_eq!(spans, [(0, 1), (1, 1), (2, 3)]);
        let spans: Vec<_> = block_span(4, 2, 9).collect();
        assert_eq!(spans, [(4, 1), (5, 1)]);
    }

    #[test]
    fn overhanging_block_reads_edge() {
        // width 3, divisor 2, height 1: block rows 0..2 clamp to row 0
        let px = gray_row(&[100, 50, 0]);
        let g = grid(&px, 3, 1, PixelLayout::Bgr8, 2);
        assert_eq!(Area.pixel(&g, 0, 0)[0], 75);
    }
}
