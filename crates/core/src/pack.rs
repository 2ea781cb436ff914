//! Byte-to-word packer.
//!
//! The device memory is addressed in 32-bit words, so the flattened
//! RGB byte stream is grouped into 4-byte chunks and packed with the
//! first byte in the least significant position. The byte order is a
//! property of the memory image format, not of the host.

use image::RgbImage;

use crate::WORD_BYTES;

/// Packs a byte sequence into little-endian 32-bit words.
///
/// The tail is padded with zero bytes up to a word boundary, so the
/// output always holds `ceil(bytes.len() / 4)` words and the unused
/// high bytes of the last word are zero.
pub fn pack_words(bytes: &[u8]) -> Vec<u32> {
    let mut words = Vec::with_capacity(bytes.len().div_ceil(WORD_BYTES));
    for chunk in bytes.chunks(WORD_BYTES) {
        let mut word = [0u8; WORD_BYTES];
        word[..chunk.len()].copy_from_slice(chunk);
        words.push(u32::from_le_bytes(word));
    }
    words
}

/// Packs a normalized frame's raw RGB buffer into memory words.
///
/// The buffer is already row-major with interleaved R, G, B channels,
/// which is exactly the flattening order the device expects.
pub fn pack_image(image: &RgbImage) -> Vec<u32> {
    pack_words(image.as_raw())
}
