//! TGA (Targa) format internals.
//!
//! Reads image types 2, 3, 10 and 11 (truecolor and grayscale, raw or
//! run-length encoded). Writes uncompressed truecolor only.
//!
//! Use top-level [`crate::decode`], [`crate::encode`], etc.

mod decode;
mod encode;
pub(crate) mod header;
mod rle;

use crate::error::TgaError;
use crate::image::TgaImage;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Decode TGA data to top-left-origin BGR/BGRA pixels.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<TgaImage, TgaError> {
    decode::decode_tga(data, limits, stop)
}

/// Encode to uncompressed TGA.
pub(crate) fn encode(image: &TgaImage, stop: &dyn Stop) -> Result<Vec<u8>, TgaError> {
    encode::encode_tga(image, stop)
}
