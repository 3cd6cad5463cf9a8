//! TGA encoder: uncompressed truecolor, top-left origin.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{DESCRIPTOR_ORIGIN_TOP, HEADER_LEN, TgaHeader};
use crate::error::TgaError;
use crate::image::TgaImage;
use crate::info::ImageType;

/// Descriptor alpha-depth nibble for an 8-bit alpha channel.
const ALPHA_DEPTH_8: u8 = 0x08;

/// Write `image` as a type-2 TGA. Pixels are copied verbatim; they are
/// already top-to-bottom, so no row reversal happens here.
pub(crate) fn encode_tga(image: &TgaImage, stop: &dyn Stop) -> Result<Vec<u8>, TgaError> {
    let header = TgaHeader {
        image_type: ImageType::TrueColor.code(),
        width: dimension(image.width(), image)?,
        height: dimension(image.height(), image)?,
        pixel_depth: image.bits_per_pixel(),
        descriptor: DESCRIPTOR_ORIGIN_TOP | if image.has_alpha() { ALPHA_DEPTH_8 } else { 0 },
        ..TgaHeader::default()
    };

    let pixels = image.pixels();
    let row_bytes = image.width() as usize * image.bytes_per_pixel();
    let mut out = Vec::with_capacity(HEADER_LEN + pixels.len());
    out.extend_from_slice(&header.to_bytes());

    for (row_idx, row) in pixels.chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(out)
}

fn dimension(value: u32, image: &TgaImage) -> Result<u16, TgaError> {
    u16::try_from(value).map_err(|_| TgaError::DimensionsTooLarge {
        width: image.width(),
        height: image.height(),
    })
}
