//! # zentga
//!
//! TGA (Targa) image decoder and encoder, plus a family of integer-divisor
//! downscaling resamplers that operate on the decoded pixel buffers.
//!
//! ## Decoding
//!
//! Reads the four common image types:
//! - **2**: uncompressed truecolor (24-bit BGR, 32-bit BGRA)
//! - **3**: uncompressed 8-bit grayscale
//! - **10**: run-length encoded truecolor
//! - **11**: run-length encoded grayscale
//!
//! Decoded images always have a top-left origin and keep the format's
//! native B,G,R[,A] channel order. Grayscale is expanded to 3-channel BGR
//! and never carries alpha.
//!
//! ## Encoding
//!
//! Always writes type 2 (uncompressed truecolor), top-left origin, with an
//! 8-bit alpha descriptor when the image has alpha.
//!
//! ## Resampling
//!
//! [`ResampleMethod`] selects nearest, bilinear, bicubic, Lanczos or area
//! averaging. Output dimensions are `max(1, floor(size / divisor))`. All
//! methods read the source through [`sample`], which clamps coordinates
//! to the image (replicate-edge). Resampling needs the `std` feature
//! (on by default); the codec alone builds with `no_std` + `alloc`.
//!
//! ## Non-Goals
//!
//! - Color-mapped (types 1, 9) and black-and-white-only legacy variants
//! - 15/16-bit truecolor
//! - RLE output
//! - Upscaling
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{ResampleMethod, Unstoppable};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = zentga::probe(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! let image = zentga::decode(data, Unstoppable)?;
//! let quarter = zentga::resample(&image, 4, ResampleMethod::Area, Unstoppable)?;
//! let encoded = zentga::encode(&quarter, Unstoppable)?;
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;
#[cfg(feature = "std")]
mod resample;
mod tga;

mod decode;
mod encode;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use image::TgaImage;
pub use info::{ImageType, TgaInfo};
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::TgaPixel;
pub use pixel::{PixelLayout, Sample, sample};
#[cfg(feature = "std")]
pub use resample::{
    DEFAULT_LANCZOS_RADIUS, MAX_LANCZOS_RADIUS, ResampleMethod, ResampleRequest, scaled_dimensions,
};

/// Read header facts (dimensions, type, depth, alpha, origin) without
/// decoding pixels.
pub fn probe(data: &[u8]) -> Result<TgaInfo, TgaError> {
    TgaInfo::from_bytes(data)
}

/// Decode a TGA file held in memory.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<TgaImage, TgaError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode as uncompressed truecolor TGA.
pub fn encode(image: &TgaImage, stop: impl Stop) -> Result<Vec<u8>, TgaError> {
    EncodeRequest::new(image).encode(stop)
}

/// Downscale by `divisor` with `method` (Lanczos uses radius 3).
#[cfg(feature = "std")]
pub fn resample(
    image: &TgaImage,
    divisor: u32,
    method: ResampleMethod,
    stop: impl Stop,
) -> Result<TgaImage, TgaError> {
    ResampleRequest::new(image, divisor)
        .method(method)
        .resample(stop)
}

/// Read and decode a TGA file.
#[cfg(feature = "std")]
pub fn decode_file(path: impl AsRef<std::path::Path>, stop: impl Stop) -> Result<TgaImage, TgaError> {
    let data = std::fs::read(path)?;
    decode(&data, stop)
}

/// Encode and write a TGA file.
#[cfg(feature = "std")]
pub fn encode_file(
    image: &TgaImage,
    path: impl AsRef<std::path::Path>,
    stop: impl Stop,
) -> Result<(), TgaError> {
    EncodeRequest::new(image).encode_to_file(path, stop)
}
