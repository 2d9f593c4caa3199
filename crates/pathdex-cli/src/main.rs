//! pathdex entry point.
//!
//! ```bash
//! cargo run -p pathdex-cli -- -m manifest.txt ls
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pathdex_cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so query output stays clean (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    pathdex_cli::run(Cli::parse())
}
