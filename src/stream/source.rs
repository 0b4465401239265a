//! ByteSource trait for raw byte-stream consumers.
//!
//! Defines the narrow capability tooling needs from a generator: fill a
//! caller-provided buffer. Anything that treats the generator as a generic
//! byte stream should depend on this trait rather than on the concrete type.

/// A source that fills buffers with pseudorandom bytes.
///
/// Implementations are infallible: the whole buffer is always written and
/// its length returned. Sinks that can fail (pipes, files) are the caller's
/// concern.
pub trait ByteSource {
    /// Fills `buf` completely and returns the number of bytes written.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }
}
