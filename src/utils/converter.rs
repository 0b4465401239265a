//! Strip-to-byte serialization.
//!
//! Converts the four state words into the 32-byte block emitted by the
//! stream extractor. Words are written least-significant word first, each
//! in little-endian byte order, so the byte stream is identical on every
//! platform.

use super::bits::STRIP_WORDS;

/// Number of bytes produced by one serialized strip.
pub(crate) const STRIP_BYTES: usize = STRIP_WORDS * 8;

/// Serializes strip words into a 32-byte block.
///
/// Word 0 occupies bytes 0..8 with its least significant byte first.
///
/// # Parameters
/// - `words`: The strip, least-significant word first.
///
/// # Returns
/// The 32-byte little-endian serialization.
pub(crate) fn words_to_le_bytes(words: &[u64; STRIP_WORDS]) -> [u8; STRIP_BYTES] {
    let mut output = [0u8; STRIP_BYTES];
    for (chunk, word) in output.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    output
}
