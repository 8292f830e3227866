//! Shared plumbing for the demonstration binaries.

pub mod fasta;

use anyhow::{Context, Result};
use seqview_framework::ByteStream;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Installs a compact stderr subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Opens `path` as a byte stream, or standard input when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<ByteStream<Box<dyn BufRead>>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };
    Ok(ByteStream::new(reader))
}
