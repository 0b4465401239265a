//! Cellular automaton state engine.
//!
//! Owns the 256-bit circular strip, expands seeds into it and evolves it one
//! generation at a time under the radius-1 or radius-2 Rule 30 variant.

pub mod rule;
pub(crate) mod seed;
pub mod strip;

pub use rule::Rule;
pub use strip::Strip;
