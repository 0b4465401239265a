use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;

use crate::stream::ByteSource;

/// Bytes produced per write to the sink.
pub(crate) const CHUNK_SIZE: usize = 1024 * 1024;

/// Single-read sizes timed by [`benchmark`].
const BENCH_SIZES: [usize; 4] = [1024, 10 * 1024, 100 * 1024, 1024 * 1024];

/// Returns `seed`, or a seed derived from the current time when it is 0.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| seed_from_nanos(d.as_nanos()))
        .unwrap_or(1)
}

/// Folds a nanosecond timestamp into a non-zero 64-bit seed.
fn seed_from_nanos(nanos: u128) -> u64 {
    match (nanos as u64) ^ ((nanos >> 64) as u64) {
        0 => 1,
        folded => folded,
    }
}

/// Streams `count` bytes from `src` into `out` in fixed-size chunks.
///
/// A `count` of 0 streams until the sink reports a broken pipe, which ends
/// the run successfully. With a finite count every write error is returned.
///
/// # Returns
/// The number of bytes written.
pub fn generate<S, W>(src: &mut S, count: u64, out: &mut W) -> anyhow::Result<u64>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written: u64 = 0;

    if count == 0 {
        loop {
            src.read(&mut buf);
            match out.write_all(&buf) {
                Ok(()) => written += buf.len() as u64,
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!(written, "output pipe closed");
                    return Ok(written);
                }
                Err(err) => return Err(err).context("writing random bytes"),
            }
        }
    }

    while written < count {
        let take = (count - written).min(CHUNK_SIZE as u64) as usize;
        let chunk = &mut buf[..take];
        src.read(chunk);
        out.write_all(chunk).context("writing random bytes")?;
        written += take as u64;
    }
    out.flush().context("flushing output")?;
    Ok(written)
}

/// Times one read of each benchmark size and writes a throughput table.
pub fn benchmark<S, W>(src: &mut S, seed: u64, out: &mut W) -> anyhow::Result<()>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Rule 30 RNG Benchmark")?;
    writeln!(out, "Seed: 0x{:016X}", seed)?;
    writeln!(out)?;
    writeln!(out, "{:>6}    {:>8}    {:>12}", "Size", "Time", "Throughput")?;
    writeln!(out, "{:>6}    {:>8}    {:>12}", "----", "----", "----------")?;

    for size in BENCH_SIZES {
        let mut buf = vec![0u8; size];
        let start = Instant::now();
        let n = src.read(&mut buf);
        let elapsed = start.elapsed();

        let mbps = n as f64 / elapsed.as_secs_f64().max(f64::MIN_POSITIVE) / 1024.0 / 1024.0;
        writeln!(
            out,
            "{:>6}    {:>8}    {:>12}",
            format_size(size),
            format_duration(elapsed),
            format_throughput(mbps)
        )?;
    }
    Ok(())
}

pub(crate) fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{} MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} B", bytes)
    }
}

pub(crate) fn format_duration(d: Duration) -> String {
    if d < Duration::from_micros(1) {
        format!("{:6} ns", d.as_nanos())
    } else if d < Duration::from_millis(1) {
        format!("{:6.2} µs", d.as_nanos() as f64 / 1_000.0)
    } else if d < Duration::from_secs(1) {
        format!("{:6.2} ms", d.as_nanos() as f64 / 1_000_000.0)
    } else {
        format!("{:6.2} s", d.as_secs_f64())
    }
}

pub(crate) fn format_throughput(mbps: f64) -> String {
    format!("{:9.2} MB/s", mbps)
}
