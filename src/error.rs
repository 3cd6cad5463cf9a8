use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding, encoding, and resampling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unsupported TGA image type {0} (supported: 2, 3, 10, 11)")]
    UnsupportedImageType(u8),

    #[error("unsupported pixel depth {depth} for {image_type:?}")]
    UnsupportedPixelDepth {
        image_type: crate::ImageType,
        depth: u8,
    },

    #[error("pixel data truncated: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("RLE packet at offset {offset} overruns the image")]
    InvalidRlePacket { offset: usize },

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("downscale divisor must be at least 1")]
    InvalidDivisor,

    #[error("unknown resample method: {0}")]
    UnknownMethod(String),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
