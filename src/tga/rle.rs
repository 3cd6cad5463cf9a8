//! TGA run-length packets.
//!
//! Each packet starts with one header byte. High bit set: a run, one pixel
//! repeated `(h & 0x7F) + 1` times. High bit clear: `(h & 0x7F) + 1`
//! literal pixels follow.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TgaError;

const RUN_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7F;

/// Unpack packets from `stream` until exactly `expected` bytes of
/// `bpp`-byte pixels are produced.
///
/// A stream that ends mid-packet, or before the buffer is full, is
/// [`TgaError::Truncated`]. A packet that would write past `expected` is
/// [`TgaError::InvalidRlePacket`]. Trailing bytes after the last packet
/// (footer, extension area) are ignored.
pub(crate) fn unpack(
    stream: &[u8],
    bpp: usize,
    expected: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    // Each stream byte expands to fewer than 128 output bytes; the header's
    // declared size alone is untrusted.
    let mut out = Vec::with_capacity(expected.min(stream.len().saturating_mul(128)));
    let mut pos = 0usize;
    let mut packets = 0usize;

    while out.len() < expected {
        let truncated = |actual: usize| TgaError::Truncated { expected, actual };
        let header = *stream.get(pos).ok_or(truncated(out.len()))?;
        let count = usize::from(header & COUNT_MASK) + 1;
        let bytes = count * bpp;
        if out.len() + bytes > expected {
            return Err(TgaError::InvalidRlePacket { offset: pos });
        }
        pos += 1;

        if header & RUN_FLAG != 0 {
            let px = stream.get(pos..pos + bpp).ok_or(truncated(out.len()))?;
            for _ in 0..count {
                out.extend_from_slice(px);
            }
            pos += bpp;
        } else {
            let literal = stream.get(pos..pos + bytes).ok_or(truncated(out.len()))?;
            out.extend_from_slice(literal);
            pos += bytes;
        }

        packets += 1;
        if packets % 4096 == 0 {
            stop.check()?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn run_then_raw() {
        // run of 3 x [1,2,3], then 2 literal pixels
        let stream = [0x82, 1, 2, 3, 0x01, 4, 5, 6, 7, 8, 9];
        let out = unpack(&stream, 3, 15, &Unstoppable).unwrap();
        assert_eq!(out, [1, 2, 3, 1, 2, 3, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn single_byte_pixels() {
        let stream = [0xFF, 7];
        let out = unpack(&stream, 1, 128, &Unstoppable).unwrap();
        assert_eq!(out.len(), 128);
        assert!(out.iter().all(|&g| g == 7));
    }

    #[test]
    fn stream_ending_mid_packet_is_truncated() {
        let stream = [0x03, 1, 2, 3, 4, 5];
        match unpack(&stream, 3, 12, &Unstoppable) {
            Err(TgaError::Truncated {
                expected: 12,
                actual: 0,
            }) => {}
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn stream_ending_between_packets_is_truncated() {
        let stream = [0x80, 9, 9, 9];
        match unpack(&stream, 3, 6, &Unstoppable) {
            Err(TgaError::Truncated {
                expected: 6,
                actual: 3,
            }) => {}
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_declared_size_with_short_stream_is_truncated() {
        let expected = 65535 * 65535 * 4;
        match unpack(&[0x80, 1, 2], 4, expected, &Unstoppable) {
            Err(TgaError::Truncated { actual: 0, .. }) => {}
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn packet_past_end_of_image_is_rejected() {
        let stream = [0x80, 1, 2, 3, 0x85, 4, 5, 6];
        match unpack(&stream, 3, 9, &Unstoppable) {
            Err(TgaError::InvalidRlePacket { offset: 4 }) => {}
            other => panic!("expected InvalidRlePacket, got {other:?}"),
        }
    }
}
