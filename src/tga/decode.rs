//! TGA pixel decoding: raw and RLE streams, grayscale expansion, row flip.

use alloc::vec::Vec;
use enough::Stop;

use super::header::TgaHeader;
use super::rle;
use crate::error::TgaError;
use crate::image::{TgaImage, buffer_len};
use crate::info::ImageType;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

pub(crate) fn decode_tga(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<TgaImage, TgaError> {
    let header = TgaHeader::parse(data)?;
    let image_type = header.validate()?;
    let width = u32::from(header.width);
    let height = u32::from(header.height);

    let (layout, has_alpha) = if image_type.is_grayscale() {
        (PixelLayout::Bgr8, false)
    } else if header.pixel_depth == 32 {
        (PixelLayout::Bgra8, true)
    } else {
        (PixelLayout::Bgr8, header.declares_alpha())
    };

    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(buffer_len(width, height, layout)?)?;
    }
    stop.check()?;

    let stream = data
        .get(header.pixel_data_offset()..)
        .ok_or(TgaError::UnexpectedEof)?;
    let src_bpp = usize::from(header.pixel_depth / 8);
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(src_bpp))
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;

    let stored = match image_type {
        ImageType::TrueColor | ImageType::Grayscale => {
            let raw = stream.get(..expected).ok_or(TgaError::Truncated {
                expected,
                actual: stream.len(),
            })?;
            raw.to_vec()
        }
        ImageType::RleTrueColor | ImageType::RleGrayscale => {
            rle::unpack(stream, src_bpp, expected, stop)?
        }
    };

    let mut pixels = if image_type.is_grayscale() {
        expand_gray(&stored, width as usize, stop)?
    } else {
        stored
    };

    if !header.origin_top() {
        flip_rows(&mut pixels, width as usize * layout.bytes_per_pixel(), stop)?;
    }

    TgaImage::from_parts(width, height, layout, has_alpha, pixels)
}

/// Expand each gray byte `g` to `(g, g, g)`.
fn expand_gray(gray: &[u8], width: usize, stop: &dyn Stop) -> Result<Vec<u8>, TgaError> {
    let mut out = Vec::with_capacity(gray.len() * 3);
    for (row_idx, row) in gray.chunks_exact(width).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend(row.iter().flat_map(|&g| [g, g, g]));
    }
    Ok(out)
}

/// Reverse row order in place (bottom-left origin to top-left).
fn flip_rows(pixels: &mut [u8], row_bytes: usize, stop: &dyn Stop) -> Result<(), TgaError> {
    let rows = pixels.len() / row_bytes;
    for top in 0..rows / 2 {
        if top % 16 == 0 {
            stop.check()?;
        }
        let bottom = rows - 1 - top;
        let (upper, lower) = pixels.split_at_mut(bottom * row_bytes);
        upper[top * row_bytes..(top + 1) * row_bytes].swap_with_slice(&mut lower[..row_bytes]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn flip_reverses_whole_rows() {
        let mut px = [1, 1, 2, 2, 3, 3];
        flip_rows(&mut px, 2, &Unstoppable).unwrap();
        assert_eq!(px, [3, 3, 2, 2, 1, 1]);

        let mut even = [1, 2, 3, 4];
        flip_rows(&mut even, 1, &Unstoppable).unwrap();
        assert_eq!(even, [4, 3, 2, 1]);
    }

    #[test]
    fn gray_expands_to_three_channels() {
        let out = expand_gray(&[5, 200], 2, &Unstoppable).unwrap();
        assert_eq!(out, [5, 5, 5, 200, 200, 200]);
    }
}
