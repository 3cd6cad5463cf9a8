//! The fixed 18-byte TGA file header.

use crate::error::TgaError;
use crate::info::ImageType;

pub(crate) const HEADER_LEN: usize = 18;

/// Descriptor bits 0-3: alpha channel depth.
const DESCRIPTOR_ALPHA_MASK: u8 = 0x0F;
/// Descriptor bit 5: rows stored top row first.
pub(crate) const DESCRIPTOR_ORIGIN_TOP: u8 = 0x20;

/// Raw header fields, little-endian on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: u8,
    pub color_map_first_entry: u16,
    pub color_map_length: u16,
    pub color_map_entry_size: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub pixel_depth: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    pub(crate) fn parse(data: &[u8]) -> Result<Self, TgaError> {
        let h: &[u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|s| s.try_into().ok())
            .ok_or(TgaError::UnexpectedEof)?;
        let le16 = |i: usize| u16::from_le_bytes([h[i], h[i + 1]]);
        Ok(Self {
            id_length: h[0],
            color_map_type: h[1],
            image_type: h[2],
            color_map_first_entry: le16(3),
            color_map_length: le16(5),
            color_map_entry_size: h[7],
            x_origin: le16(8),
            y_origin: le16(10),
            width: le16(12),
            height: le16(14),
            pixel_depth: h[16],
            descriptor: h[17],
        })
    }

    pub(crate) fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = self.id_length;
        out[1] = self.color_map_type;
        out[2] = self.image_type;
        out[3..5].copy_from_slice(&self.color_map_first_entry.to_le_bytes());
        out[5..7].copy_from_slice(&self.color_map_length.to_le_bytes());
        out[7] = self.color_map_entry_size;
        out[8..10].copy_from_slice(&self.x_origin.to_le_bytes());
        out[10..12].copy_from_slice(&self.y_origin.to_le_bytes());
        out[12..14].copy_from_slice(&self.width.to_le_bytes());
        out[14..16].copy_from_slice(&self.height.to_le_bytes());
        out[16] = self.pixel_depth;
        out[17] = self.descriptor;
        out
    }

    /// Check the fields a decode depends on. Runs before any pixel data
    /// is touched.
    pub(crate) fn validate(&self) -> Result<ImageType, TgaError> {
        let image_type = ImageType::try_from(self.image_type)?;
        if !image_type.accepts_depth(self.pixel_depth) {
            return Err(TgaError::UnsupportedPixelDepth {
                image_type,
                depth: self.pixel_depth,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(TgaError::InvalidDimensions {
                width: u32::from(self.width),
                height: u32::from(self.height),
            });
        }
        Ok(image_type)
    }

    /// 32-bit pixels, or a nonzero alpha-depth nibble.
    pub(crate) fn declares_alpha(&self) -> bool {
        self.pixel_depth == 32 || self.descriptor & DESCRIPTOR_ALPHA_MASK > 0
    }

    pub(crate) fn origin_top(&self) -> bool {
        self.descriptor & DESCRIPTOR_ORIGIN_TOP != 0
    }

    /// Offset of the first pixel byte: header, image ID, then any
    /// color-map table (present but unused for truecolor images).
    pub(crate) fn pixel_data_offset(&self) -> usize {
        let color_map_bytes = if self.color_map_type == 0 {
            0
        } else {
            usize::from(self.color_map_length) * usize::from(self.color_map_entry_size).div_ceil(8)
        };
        HEADER_LEN + usize::from(self.id_length) + color_map_bytes
    }
}
