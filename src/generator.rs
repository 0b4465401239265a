//! Rule30Rng: the public generator.
//!
//! Wires a seeded [`Strip`] into an [`Extractor`] and exposes byte reads,
//! state inspection and every scalar distribution. A generator is a plain
//! owned value: mutating calls take `&mut self`, so sharing one across
//! threads requires the caller's own lock, while separate instances are
//! fully independent.

use std::io;

use rand_core::{RngCore, SeedableRng};

use crate::automaton::{Rule, Strip};
use crate::distributions::{self, WordSource};
use crate::error::Rule30Error;
use crate::stream::{ByteSource, Extractor};

/// Deterministic pseudorandom generator driven by a Rule 30 automaton.
///
/// The same seed and rule always produce the same byte stream, on every
/// platform. This generator is not suitable for cryptographic use.
///
/// # Examples
///
/// ```
/// use rule30rng::Rule30Rng;
///
/// let mut a = Rule30Rng::new(12345);
/// let mut b = Rule30Rng::new(12345);
/// assert_eq!(a.uint64(), b.uint64());
///
/// let mut buf = [0u8; 100];
/// assert_eq!(a.read(&mut buf), 100);
///
/// let roll = a.intn(6).unwrap();
/// assert!((0..6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct Rule30Rng {
    extractor: Extractor,
}

impl Rule30Rng {
    /// Creates a radius-1 generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rule(seed, Rule::Radius1)
    }

    /// Creates a generator from a seed and an explicit rule.
    ///
    /// # Parameters
    /// - `seed`: Any 64-bit value, zero included.
    /// - `rule`: Radius-1 or radius-2 evolution.
    pub fn with_rule(seed: u64, rule: Rule) -> Self {
        tracing::debug!(seed, radius = rule.radius(), "rule30 generator seeded");
        Rule30Rng {
            extractor: Extractor::new(Strip::from_seed(seed, rule)),
        }
    }

    /// Re-initializes the state from `seed`, keeping the current rule.
    ///
    /// Buffered bytes are discarded; the following output is identical to a
    /// freshly constructed generator with the same seed and rule.
    pub fn reseed(&mut self, seed: u64) {
        let rule = self.rule();
        tracing::debug!(seed, radius = rule.radius(), "rule30 generator reseeded");
        self.extractor.reset(Strip::from_seed(seed, rule));
    }

    /// Returns the evolution rule.
    pub fn rule(&self) -> Rule {
        self.extractor.strip().rule()
    }

    /// Fills `buf` with pseudorandom bytes and returns its length.
    ///
    /// A zero-length buffer is a no-op and does not evolve the strip.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        self.extractor.read(buf)
    }

    /// Returns a copy of the current strip without advancing it.
    ///
    /// Before any output has been drawn this is the seeded state; afterwards
    /// it is the generation whose bytes are currently being served.
    pub fn snapshot(&self) -> [u64; 4] {
        self.extractor.strip().snapshot()
    }

    /// Returns a uniform 32-bit value (high half of one 64-bit draw).
    pub fn uint32(&mut self) -> u32 {
        distributions::uint32(&mut self.extractor)
    }

    /// Returns a uniform 64-bit value (8 stream bytes, little-endian).
    pub fn uint64(&mut self) -> u64 {
        distributions::uint64(&mut self.extractor)
    }

    /// Returns a uniform integer in `[0, bound)` without modulo bias.
    ///
    /// # Errors
    /// Returns [`Rule30Error::InvalidArgument`] if `bound <= 0`.
    pub fn intn(&mut self, bound: i64) -> Result<i64, Rule30Error> {
        distributions::intn(&mut self.extractor, bound)
    }

    /// Returns a uniform `f32` in `[0, 1)`.
    pub fn float32(&mut self) -> f32 {
        distributions::float32(&mut self.extractor)
    }

    /// Returns a uniform `f64` in `[0, 1)`.
    pub fn float64(&mut self) -> f64 {
        distributions::float64(&mut self.extractor)
    }

    /// Returns a standard normal deviate (two 64-bit draws).
    pub fn norm_float64(&mut self) -> f64 {
        distributions::norm_float64(&mut self.extractor)
    }

    /// Returns a rate-1 exponential deviate (one 64-bit draw).
    pub fn exp_float64(&mut self) -> f64 {
        distributions::exp_float64(&mut self.extractor)
    }
}

impl ByteSource for Rule30Rng {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.extractor.read(buf)
    }
}

impl WordSource for Rule30Rng {
    fn next_word(&mut self) -> u64 {
        self.extractor.next_word()
    }
}

impl io::Read for Rule30Rng {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.extractor.read(buf))
    }
}

impl RngCore for Rule30Rng {
    fn next_u32(&mut self) -> u32 {
        self.uint32()
    }

    fn next_u64(&mut self) -> u64 {
        self.uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.extractor.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rule30Rng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
