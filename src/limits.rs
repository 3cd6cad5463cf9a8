use crate::error::TgaError;

/// Resource limits applied before a decode allocates its pixel buffer.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded (normalized) pixel buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header dimensions against the configured limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), TgaError> {
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Check that the output allocation fits the memory limit.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), TgaError> {
        within("allocation size", bytes as u64, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), TgaError> {
    match limit {
        Some(max) if value > max => Err(TgaError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
