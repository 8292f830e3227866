//! Pipe composition example.
//! Splits an in-memory FASTA-like buffer into records with line and bounded views.

use seqview_framework::{Cursor, Pipe, SinglePass, Take, TakeLine, TakeOrThrow};

fn main() -> seqview_framework::Result<()> {
    let input = ">chr1 primary\nACGTNNACGT\n>chr2\nTTAGGC\n";

    // Single-pass input: every line view consumes its terminator.
    let mut source = SinglePass::new(input.bytes());
    while source.peek()?.is_some() {
        let header = (&mut source).pipe(TakeLine).materialize_string()?;
        let sequence = (&mut source).pipe(TakeLine).materialize_string()?;
        println!("{header:<16} {sequence}");
    }

    // In-memory buffers: bounded views are slices of the original text.
    let head = input.pipe(TakeLine).pipe(Take(5)).materialize_string()?;
    println!("first id: {}", head.trim_start_matches('>'));

    match input.pipe(TakeOrThrow(1024)) {
        Ok(_) => println!("buffer holds at least 1024 bytes"),
        Err(err) => println!("bounded view rejected: {err}"),
    }

    Ok(())
}
