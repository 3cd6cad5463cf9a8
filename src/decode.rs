use enough::Stop;

use crate::error::TgaError;
use crate::image::TgaImage;
use crate::limits::Limits;

/// Builder for a TGA decode.
///
/// ```no_run
/// use zentga::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let limits = Limits { max_pixels: Some(16_000_000), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// # Ok::<(), zentga::TgaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before allocating pixel memory.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode to an owned image. Grayscale input is expanded to BGR and
    /// bottom-left-origin input is flipped to top-left.
    pub fn decode(self, stop: impl Stop) -> Result<TgaImage, TgaError> {
        crate::tga::decode(self.data, self.limits, &stop)
    }
}
