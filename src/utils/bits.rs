//! Circular bit operations over the 256-bit strip.
//!
//! The strip is held as four `u64` words, word 0 carrying bits 0..64. A
//! rotation moves every bit by `shift` positions around the full 256-bit
//! ring, carrying bits across word boundaries and from the top word back
//! into word 0.

/// Number of 64-bit words in a strip.
pub(crate) const STRIP_WORDS: usize = 4;

/// Number of bits in a strip.
pub(crate) const STRIP_BITS: usize = STRIP_WORDS * 64;

/// Rotates the 256-bit strip toward higher bit indices by `shift` positions.
///
/// Bit `i` of the result is bit `(i - shift) mod 256` of `words`, i.e. each
/// cell sees its left neighbor at distance `shift`.
///
/// # Parameters
/// - `words`: The strip, least-significant word first.
/// - `shift`: Rotation distance (1..64).
pub(crate) fn strip_left_rotation(words: &[u64; STRIP_WORDS], shift: u32) -> [u64; STRIP_WORDS] {
    debug_assert!((1..64).contains(&shift));
    let back = 64 - shift;
    [
        (words[0] << shift) | (words[3] >> back),
        (words[1] << shift) | (words[0] >> back),
        (words[2] << shift) | (words[1] >> back),
        (words[3] << shift) | (words[2] >> back),
    ]
}

/// Rotates the 256-bit strip toward lower bit indices by `shift` positions.
///
/// Bit `i` of the result is bit `(i + shift) mod 256` of `words`, i.e. each
/// cell sees its right neighbor at distance `shift`.
///
/// # Parameters
/// - `words`: The strip, least-significant word first.
/// - `shift`: Rotation distance (1..64).
pub(crate) fn strip_right_rotation(words: &[u64; STRIP_WORDS], shift: u32) -> [u64; STRIP_WORDS] {
    debug_assert!((1..64).contains(&shift));
    let back = 64 - shift;
    [
        (words[0] >> shift) | (words[1] << back),
        (words[1] >> shift) | (words[2] << back),
        (words[2] >> shift) | (words[3] << back),
        (words[3] >> shift) | (words[0] << back),
    ]
}

/// Returns the bit at `index` (taken modulo 256).
pub(crate) fn strip_bit(words: &[u64; STRIP_WORDS], index: usize) -> bool {
    let index = index % STRIP_BITS;
    (words[index / 64] >> (index % 64)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_rotation_crosses_word_boundary() {
        let words = [1u64 << 63, 0, 0, 0];
        assert_eq!(strip_left_rotation(&words, 1), [0, 1, 0, 0]);
    }

    #[test]
    fn test_left_rotation_wraps_top_bit() {
        let words = [0, 0, 0, 1u64 << 63];
        assert_eq!(strip_left_rotation(&words, 1), [1, 0, 0, 0]);
    }

    #[test]
    fn test_right_rotation_wraps_bottom_bit() {
        let words = [1, 0, 0, 0];
        assert_eq!(strip_right_rotation(&words, 1), [0, 0, 0, 1u64 << 63]);
    }

    #[test]
    fn test_right_rotation_by_two() {
        let words = [0, 0b100, 0, 0];
        assert_eq!(strip_right_rotation(&words, 2), [0, 1, 0, 0]);
        let words = [0b10, 0, 0, 0];
        assert_eq!(strip_right_rotation(&words, 2), [0, 0, 0, 1u64 << 63]);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let original = [
            0x0123_4567_89AB_CDEF,
            0xFEDC_BA98_7654_3210,
            0xDEAD_BEEF_CAFE_BABE,
            0x0F0F_F0F0_5555_AAAA,
        ];
        for shift in 1..64 {
            let rotated = strip_left_rotation(&original, shift);
            let restored = strip_right_rotation(&rotated, shift);
            assert_eq!(restored, original, "roundtrip failed for shift={}", shift);
        }
    }

    #[test]
    fn test_rotation_preserves_population() {
        let words: [u64; STRIP_WORDS] = [0xAAAA_0000_0000_0001, 0, 0x8000_0000_0000_0000, 0xFF];
        let ones: u32 = words.iter().map(|w| w.count_ones()).sum();
        let rotated = strip_left_rotation(&words, 2);
        assert_eq!(rotated.iter().map(|w| w.count_ones()).sum::<u32>(), ones);
    }

    #[test]
    fn test_strip_bit() {
        let words = [1, 1u64 << 1, 0, 1u64 << 63];
        assert!(strip_bit(&words, 0));
        assert!(strip_bit(&words, 65));
        assert!(strip_bit(&words, 255));
        assert!(!strip_bit(&words, 1));
        assert!(strip_bit(&words, 256), "index wraps around the strip");
    }
}
