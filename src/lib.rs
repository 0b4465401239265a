//! Rule 30 cellular automaton pseudorandom generator.
//!
//! rule30rng evolves a 256-bit circular strip under Rule 30 (or its
//! radius-2 variant) and serializes every generation into 32 output bytes.
//! Output is fully determined by a 64-bit seed and the rule, and is
//! identical across platforms. It is intended for simulation, testing and
//! data generation. It is **not** a cryptographically secure generator.
//!
//! # Architecture
//!
//! ```text
//! Strip        (256-bit circular state, one generation per step)
//!     ↓ serialized, 32 bytes per generation
//! Extractor    (buffered in-order byte stream, arbitrary read sizes)
//!     ↓ 64-bit little-endian words
//! distributions (bounded ints, floats, normal and exponential deviates)
//! ```
//!
//! [`Rule30Rng`] bundles the three layers behind one owned value and also
//! implements [`std::io::Read`], [`rand_core::RngCore`] and
//! [`rand_core::SeedableRng`].
//!
//! # Examples
//!
//! Draw scalars and bytes:
//!
//! ```
//! use rule30rng::Rule30Rng;
//!
//! let mut rng = Rule30Rng::new(12345);
//!
//! let x = rng.float64();
//! assert!((0.0..1.0).contains(&x));
//!
//! let mut buf = [0u8; 64];
//! assert_eq!(rng.read(&mut buf), 64);
//!
//! assert!(rng.intn(0).is_err());
//! ```
//!
//! Select the radius-2 rule and inspect the strip:
//!
//! ```
//! use rule30rng::{GeneratorConfig, Rule};
//!
//! let mut rng = GeneratorConfig::new(7).with_rule(Rule::Radius2).build();
//! let before = rng.snapshot();
//! let _ = rng.uint64();
//! assert_ne!(rng.snapshot(), before);
//! ```

#![deny(clippy::all)]

pub mod automaton;
pub mod config;
pub mod distributions;
pub mod error;
pub mod generator;
pub mod stream;

#[cfg(feature = "cli")]
pub mod cli;

pub(crate) mod utils;

pub use automaton::{Rule, Strip};
pub use config::GeneratorConfig;
pub use distributions::WordSource;
pub use error::Rule30Error;
pub use generator::Rule30Rng;
pub use stream::{ByteSource, Extractor};
