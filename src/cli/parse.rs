use clap::{ArgAction, Parser};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "rule30",
    version,
    about = "Stream pseudorandom bytes from a 256-bit Rule 30 cellular automaton",
    long_about = "Stream pseudorandom bytes from a 256-bit Rule 30 cellular automaton.\n\n\
                  A 64-bit seed initializes a circular 256-bit strip that evolves under\n\
                  radius-1 (left XOR (center OR right)) or radius-2 Rule 30. Each generation\n\
                  yields 32 bytes. Output is raw binary, suitable for piping into test suites.\n\n\
                  Not suitable for cryptographic use.",
    after_help = "Examples:\n  \
                  rule30 --seed 12345 --bytes 1048576 > random.bin\n  \
                  rule30 --bytes 0 | head -c 1073741824 > test.data\n  \
                  rule30 --radius 2 --benchmark"
)]
pub struct Cli {
    /// Seed value (0 derives one from the current time)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of bytes to generate (0 streams until the pipe closes)
    #[arg(long, default_value_t = 1024)]
    pub bytes: u64,

    /// Neighborhood radius of the evolution rule
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub radius: u8,

    /// Measure throughput instead of writing bytes
    #[arg(long)]
    pub benchmark: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
