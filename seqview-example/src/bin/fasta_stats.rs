//! FASTA statistics.
//! Streams a FASTA file (or stdin) and reports length and GC content per record.

use anyhow::{Context, Result};
use clap::Parser;
use seqview_example::fasta::{read_stats, truncate_to_width};
use seqview_example::{init_tracing, open_input};
use seqview_framework::LineMode;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "fasta-stats", about = "Per-record length and GC content of a FASTA file")]
struct Args {
    /// Input file; standard input when omitted
    input: Option<PathBuf>,

    /// Fail if the last line has no terminator
    #[arg(long)]
    require_eol: bool,

    /// Truncate record ids to at most this many bytes
    #[arg(long, value_name = "BYTES")]
    max_width: Option<usize>,

    /// Prefix each record with its index
    #[arg(short, long)]
    number: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut stream = open_input(args.input.as_deref())?;
    let mode = if args.require_eol {
        LineMode::REQUIRE_EOL
    } else {
        LineMode::empty()
    };

    let records = read_stats(&mut stream, mode).with_context(|| {
        let position = stream.position();
        format!("reading FASTA input near line {}", position.line)
    })?;

    for (index, record) in records.iter().enumerate() {
        let id = match args.max_width {
            Some(width) => truncate_to_width(&record.id, width)?,
            None => record.id.clone(),
        };
        if args.number {
            print!("{:>6}\t", index + 1);
        }
        println!("{id}\t{}\t{:.2}", record.length, record.gc_percent());
    }

    let total: usize = records.iter().map(|record| record.length).sum();
    info!(records = records.len(), bases = total, "done");
    Ok(())
}
