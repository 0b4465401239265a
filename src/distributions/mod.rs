//! Derived distributions over a 64-bit word stream.
//!
//! Everything here is generic over [`WordSource`] and knows nothing about
//! cellular automata. Each function documents exactly how many words it
//! consumes so that streams stay reproducible.

pub mod exponential;
pub mod normal;
pub mod uniform;

pub use exponential::exp_float64;
pub use normal::norm_float64;
pub use uniform::{float32, float64, intn, uint32, uint64};

/// A source of uniformly distributed 64-bit words.
pub trait WordSource {
    /// Returns the next word of the stream.
    fn next_word(&mut self) -> u64;
}

impl<W: WordSource + ?Sized> WordSource for &mut W {
    fn next_word(&mut self) -> u64 {
        (**self).next_word()
    }
}

/// Replays a fixed list of words, used to pin transforms to exact inputs.
#[cfg(test)]
pub(crate) struct ScriptedWords {
    words: Vec<u64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedWords {
    pub(crate) fn new(words: &[u64]) -> Self {
        ScriptedWords {
            words: words.to_vec(),
            pos: 0,
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl WordSource for ScriptedWords {
    fn next_word(&mut self) -> u64 {
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }
}
