//! Seed expansion from 64 bits to the 256-bit strip.
//!
//! The seed drives a SplitMix64 sequence whose first four outputs become
//! strip words 0..3. SplitMix64 is a bijection on its counter, so distinct
//! seeds always yield distinct word 0 and the full strip is well mixed
//! even for small or zero seeds.

use crate::utils::bits::STRIP_WORDS;

/// SplitMix64 increment (the 64-bit golden ratio).
pub(crate) const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Minimal SplitMix64 used only to expand seeds.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    fn next_word(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Expands a 64-bit seed into the initial strip words.
///
/// # Parameters
/// - `seed`: Any 64-bit value, zero included.
///
/// # Returns
/// Four words, least-significant first.
pub(crate) fn expand_seed(seed: u64) -> [u64; STRIP_WORDS] {
    let mut mixer = SplitMix64::new(seed);
    [
        mixer.next_word(),
        mixer.next_word(),
        mixer.next_word(),
        mixer.next_word(),
    ]
}
