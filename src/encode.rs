use alloc::vec::Vec;
use enough::Stop;

use crate::error::TgaError;
use crate::image::TgaImage;

/// Builder for a TGA encode.
///
/// Output is always type 2 (uncompressed truecolor) with a top-left
/// origin, 24-bit for `Bgr8` images and 32-bit for `Bgra8`.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest<'a> {
    image: &'a TgaImage,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(image: &'a TgaImage) -> Self {
        Self { image }
    }

    pub fn encode(self, stop: impl Stop) -> Result<Vec<u8>, TgaError> {
        crate::tga::encode(self.image, &stop)
    }

    /// Encode and write to `path`.
    #[cfg(feature = "std")]
    pub fn encode_to_file(
        self,
        path: impl AsRef<std::path::Path>,
        stop: impl Stop,
    ) -> Result<(), TgaError> {
        let bytes = self.encode(stop)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
