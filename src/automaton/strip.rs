//! The 256-bit circular strip evolved by the generator.

use super::rule::Rule;
use super::seed::{expand_seed, GOLDEN_GAMMA};
use crate::utils::bits::{strip_bit, STRIP_BITS, STRIP_WORDS};
use crate::utils::converter::{words_to_le_bytes, STRIP_BYTES};

/// Fixed-width circular cellular automaton state.
///
/// Bit `i` of the strip lives in word `i / 64` at position `i % 64`; bit 255
/// neighbors bit 0. Every call to [`step`](Self::step) advances the whole
/// strip by exactly one generation under its [`Rule`].
///
/// # Examples
///
/// ```
/// use rule30rng::{Rule, Strip};
///
/// let mut strip = Strip::from_words([1, 0, 0, 0], Rule::Radius1);
/// strip.step();
/// assert!(strip.bit(255) && strip.bit(0) && strip.bit(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    words: [u64; STRIP_WORDS],
    rule: Rule,
}

impl Strip {
    /// Width of the strip in bits.
    pub const WIDTH: usize = STRIP_BITS;

    /// Number of bytes in one serialized generation.
    pub const BYTES: usize = STRIP_BYTES;

    /// Creates a strip deterministically from a 64-bit seed.
    ///
    /// The seed is expanded to 256 bits with SplitMix64. Should the expansion
    /// ever land on an all-zero or all-one strip, word 0 is perturbed so the
    /// automaton does not start on a fixed point.
    ///
    /// # Parameters
    /// - `seed`: Any 64-bit value, zero included.
    /// - `rule`: Transition rule applied by [`step`](Self::step).
    pub fn from_seed(seed: u64, rule: Rule) -> Self {
        let words = expand_seed(seed);
        if is_uniform(&words) {
            tracing::warn!(seed, "seed expanded to a degenerate strip, perturbing word 0");
        }
        Strip {
            words: guard_degenerate(words),
            rule,
        }
    }

    /// Creates a strip from raw words without any degeneracy check.
    ///
    /// # Parameters
    /// - `words`: Strip contents, least-significant word first.
    /// - `rule`: Transition rule applied by [`step`](Self::step).
    pub fn from_words(words: [u64; STRIP_WORDS], rule: Rule) -> Self {
        Strip { words, rule }
    }

    /// Advances the strip by one generation.
    pub fn step(&mut self) {
        self.words = self.rule.successor(&self.words);
    }

    /// Returns a copy of the current state words.
    pub fn snapshot(&self) -> [u64; STRIP_WORDS] {
        self.words
    }

    /// Returns the current state serialized as 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; STRIP_BYTES] {
        words_to_le_bytes(&self.words)
    }

    /// Returns the cell at `index`, wrapping around the strip.
    pub fn bit(&self, index: usize) -> bool {
        strip_bit(&self.words, index)
    }

    /// Returns the rule this strip evolves under.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Returns `true` when every cell holds the same value.
    ///
    /// An all-zero strip is a fixed point of both rules. An all-one strip
    /// collapses to all-zero under radius 1 and is a fixed point under
    /// radius 2.
    pub fn is_degenerate(&self) -> bool {
        is_uniform(&self.words)
    }
}

fn is_uniform(words: &[u64; STRIP_WORDS]) -> bool {
    words.iter().all(|&w| w == 0) || words.iter().all(|&w| w == u64::MAX)
}

/// Moves an all-zero or all-one strip off its fixed point by flipping the
/// SplitMix64 increment into word 0. Any other strip is returned unchanged.
fn guard_degenerate(mut words: [u64; STRIP_WORDS]) -> [u64; STRIP_WORDS] {
    if is_uniform(&words) {
        words[0] ^= GOLDEN_GAMMA;
    }
    words
}
