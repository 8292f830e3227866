//! Line splitter.
//! Prints the lines of a file (or stdin), optionally numbered and truncated, by
//! taking one line view after another from a single-pass byte stream.

use anyhow::{Context, Result};
use clap::Parser;
use seqview_example::{init_tracing, open_input};
use seqview_framework::{take, Cursor, LineCursor, LineMode};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "line-split", about = "Split input into lines using line views")]
struct Args {
    /// Input file; standard input when omitted
    input: Option<PathBuf>,

    /// Fail if the last line has no terminator
    #[arg(long)]
    require_eol: bool,

    /// Truncate every line to this many bytes
    #[arg(long, value_name = "BYTES")]
    max_width: Option<usize>,

    /// Prefix each line with its number
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

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;
    while stream.peek()?.is_some() {
        count += 1;
        let mut line = LineCursor::new(&mut stream, mode);
        let shown = match args.max_width {
            Some(width) => take(&mut line, width).materialize()?,
            None => (&mut line).materialize()?,
        };
        // Drain whatever the width cut off so the terminator is consumed.
        while line.next_item()?.is_some() {}

        if args.number {
            write!(out, "{count:>6}\t")?;
        }
        out.write_all(&shown)?;
        out.write_all(b"\n")
            .with_context(|| format!("writing line {count}"))?;
    }

    let position = stream.position();
    info!(lines = count, bytes = position.offset, "done");
    Ok(())
}
