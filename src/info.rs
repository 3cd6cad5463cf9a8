use crate::error::TgaError;
use crate::pixel::PixelLayout;
use crate::tga::header::TgaHeader;

/// The four TGA image-type codes this crate reads.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// Type 2: uncompressed truecolor.
    TrueColor,
    /// Type 3: uncompressed grayscale.
    Grayscale,
    /// Type 10: run-length encoded truecolor.
    RleTrueColor,
    /// Type 11: run-length encoded grayscale.
    RleGrayscale,
}

impl ImageType {
    /// On-disk image-type code.
    pub const fn code(self) -> u8 {
        match self {
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
        }
    }

    pub const fn is_rle(self) -> bool {
        matches!(self, Self::RleTrueColor | Self::RleGrayscale)
    }

    pub const fn is_grayscale(self) -> bool {
        matches!(self, Self::Grayscale | Self::RleGrayscale)
    }

    /// Whether `depth` is a pixel depth this type can be decoded from.
    pub(crate) fn accepts_depth(self, depth: u8) -> bool {
        if self.is_grayscale() {
            depth == 8
        } else {
            depth == 24 || depth == 32
        }
    }
}

impl TryFrom<u8> for ImageType {
    type Error = TgaError;

    fn try_from(code: u8) -> Result<Self, TgaError> {
        match code {
            2 => Ok(Self::TrueColor),
            3 => Ok(Self::Grayscale),
            10 => Ok(Self::RleTrueColor),
            11 => Ok(Self::RleGrayscale),
            other => Err(TgaError::UnsupportedImageType(other)),
        }
    }
}

/// Header facts about a TGA file, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TgaInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    /// Stored bits per pixel (8, 24 or 32).
    pub pixel_depth: u8,
    pub has_alpha: bool,
    /// Rows are stored top row first.
    pub origin_top: bool,
}

impl TgaInfo {
    /// Probe a TGA header. Validates the image type, pixel depth and
    /// dimensions exactly as a full decode would.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let header = TgaHeader::parse(data)?;
        let image_type = header.validate()?;
        Ok(Self {
            width: u32::from(header.width),
            height: u32::from(header.height),
            image_type,
            pixel_depth: header.pixel_depth,
            has_alpha: !image_type.is_grayscale() && header.declares_alpha(),
            origin_top: header.origin_top(),
        })
    }

    /// Stored channels per pixel (1 for grayscale).
    pub fn channels(&self) -> usize {
        usize::from(self.pixel_depth / 8)
    }

    pub fn is_rle(&self) -> bool {
        self.image_type.is_rle()
    }

    /// Layout of the buffer a decode will produce.
    pub fn decoded_layout(&self) -> PixelLayout {
        if self.pixel_depth == 32 {
            PixelLayout::Bgra8
        } else {
            PixelLayout::Bgr8
        }
    }
}
