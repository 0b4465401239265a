//! `rule30` command-line front end.
//!
//! Parses arguments, installs the stderr log subscriber and either streams
//! raw bytes to stdout or runs the throughput benchmark.

mod handlers;
pub mod parse;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use handlers::{benchmark, generate, resolve_seed};
pub use parse::Cli;

use crate::config::GeneratorConfig;

/// Runs the CLI with arguments from the process environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GeneratorConfig::new(resolve_seed(cli.seed)).with_radius(cli.radius)?;
    let mut rng = config.build();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.benchmark {
        return benchmark(&mut rng, config.seed, &mut out);
    }

    tracing::info!(
        seed = format_args!("0x{:016X}", config.seed),
        rule = %config.rule,
        bytes_per_generation = crate::Strip::BYTES,
        "generator initialized"
    );
    if cli.bytes == 0 {
        tracing::info!("streaming until the output closes");
    }
    let written = generate(&mut rng, cli.bytes, &mut out)?;
    tracing::info!(written, "generation finished");
    Ok(())
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects
/// info, debug or trace.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
