//! Bit-level helpers shared by the automaton and the stream extractor.

pub(crate) mod bits;
pub(crate) mod converter;
