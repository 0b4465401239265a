//! Byte stream extraction.
//!
//! Turns successive generations of the strip into a buffered, in-order byte
//! stream and defines the [`ByteSource`] capability consumed by tooling.

pub mod extractor;
pub mod source;

pub use extractor::Extractor;
pub use source::ByteSource;
