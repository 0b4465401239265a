//! Buffered byte stream over an evolving strip.
//!
//! Each generation is serialized into one 32-byte block. Bytes are handed
//! out strictly in order; a new generation is computed only once every
//! byte of the current block has been consumed.

use super::source::ByteSource;
use crate::automaton::Strip;
use crate::distributions::WordSource;
use crate::utils::converter::STRIP_BYTES;

/// Serializes successive generations of a [`Strip`] into a byte stream.
///
/// The buffer only ever holds bytes of one complete generation. Word and
/// byte reads share the same cursor, so mixing
/// [`read`](ByteSource::read) and [`next_word`](WordSource::next_word)
/// yields the same bytes as a single read of the combined length.
#[derive(Debug, Clone)]
pub struct Extractor {
    strip: Strip,
    buffer: [u8; STRIP_BYTES],
    pos: usize,
}

impl Extractor {
    /// Creates an extractor with an empty buffer.
    ///
    /// The strip is not advanced until the first byte is requested.
    pub fn new(strip: Strip) -> Self {
        Extractor {
            strip,
            buffer: [0u8; STRIP_BYTES],
            pos: STRIP_BYTES,
        }
    }

    /// Returns the strip in its most recently evolved state.
    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    /// Returns the number of bytes left in the buffer.
    pub fn buffered(&self) -> usize {
        STRIP_BYTES - self.pos
    }

    /// Replaces the strip and discards any buffered bytes.
    pub fn reset(&mut self, strip: Strip) {
        self.strip = strip;
        self.pos = STRIP_BYTES;
    }

    /// Evolves one generation and loads its serialization.
    fn refill(&mut self) {
        self.strip.step();
        self.buffer = self.strip.to_bytes();
        self.pos = 0;
    }
}

impl ByteSource for Extractor {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < buf.len() {
            if self.pos == STRIP_BYTES {
                self.refill();
            }
            let take = (STRIP_BYTES - self.pos).min(buf.len() - filled);
            buf[filled..filled + take].copy_from_slice(&self.buffer[self.pos..self.pos + take]);
            self.pos += take;
            filled += take;
        }
        filled
    }
}

impl WordSource for Extractor {
    fn next_word(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        if self.buffered() >= 8 {
            bytes.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
            self.pos += 8;
        } else {
            self.read(&mut bytes);
        }
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Rule;

    fn extractor(seed: u64) -> Extractor {
        Extractor::new(Strip::from_seed(seed, Rule::Radius1))
    }

    #[test]
    fn test_zero_length_read_does_not_step() {
        let mut ex = extractor(12345);
        let before = ex.strip().snapshot();
        assert_eq!(ex.read(&mut [0u8; 0]), 0);
        assert_eq!(ex.strip().snapshot(), before);
        assert_eq!(ex.buffered(), 0);
    }

    #[test]
    fn test_first_block_is_first_generation() {
        let mut ex = extractor(12345);
        let mut strip = Strip::from_seed(12345, Rule::Radius1);
        strip.step();

        let mut block = [0u8; 32];
        assert_eq!(ex.read(&mut block), 32);
        assert_eq!(block, strip.to_bytes());
        assert_eq!(ex.strip().snapshot(), strip.snapshot());
    }

    #[test]
    fn test_one_step_per_block() {
        let mut ex = extractor(9);
        let mut reference = Strip::from_seed(9, Rule::Radius1);

        let mut byte = [0u8; 1];
        ex.read(&mut byte);
        reference.step();
        assert_eq!(ex.strip().snapshot(), reference.snapshot());
        assert_eq!(ex.buffered(), 31);

        let mut rest = [0u8; 31];
        ex.read(&mut rest);
        assert_eq!(ex.strip().snapshot(), reference.snapshot(), "no step while draining");
        assert_eq!(ex.buffered(), 0);

        ex.read(&mut byte);
        reference.step();
        assert_eq!(ex.strip().snapshot(), reference.snapshot());
    }

    #[test]
    fn test_read_returns_full_length() {
        let mut ex = extractor(3);
        for len in [1usize, 7, 31, 32, 33, 64, 100, 1000, 4099] {
            let mut buf = vec![0u8; len];
            assert_eq!(ex.read(&mut buf), len);
        }
    }

    #[test]
    fn test_split_reads_match_single_read() {
        let mut whole = extractor(77);
        let mut expected = vec![0u8; 200];
        whole.read(&mut expected);

        let mut split = extractor(77);
        let mut actual = vec![0u8; 200];
        let (a, rest) = actual.split_at_mut(5);
        let (b, c) = rest.split_at_mut(60);
        split.read(a);
        split.read(b);
        split.read(c);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_next_word_is_little_endian_read() {
        let mut bytes = extractor(5);
        let mut words = extractor(5);
        let mut buf = [0u8; 8];
        for _ in 0..20 {
            bytes.read(&mut buf);
            assert_eq!(words.next_word(), u64::from_le_bytes(buf));
        }
    }

    #[test]
    fn test_next_word_across_block_boundary() {
        let mut ex = extractor(5);
        let mut reference = extractor(5);
        let mut head = [0u8; 29];
        ex.read(&mut head);
        reference.read(&mut head);

        let mut buf = [0u8; 8];
        reference.read(&mut buf);
        assert_eq!(ex.next_word(), u64::from_le_bytes(buf));
        assert_eq!(ex.buffered(), reference.buffered());
    }

    #[test]
    fn test_reset_discards_buffer() {
        let mut ex = extractor(1);
        let mut buf = [0u8; 4];
        ex.read(&mut buf);
        ex.reset(Strip::from_seed(1, Rule::Radius1));
        assert_eq!(ex.buffered(), 0);

        let mut fresh = extractor(1);
        assert_eq!(ex.next_word(), fresh.next_word());
    }
}
