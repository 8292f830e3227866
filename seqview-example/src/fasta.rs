//! A minimal FASTA reader built from line views over a byte stream.

use anyhow::{bail, Result};
use seqview_common::Position;
use seqview_framework::{skip_line_terminator, take, ByteStream, Cursor, LineCursor, LineMode};
use std::io::BufRead;
use tracing::debug;

/// Summary of one FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStats {
    pub id: String,
    pub description: Option<String>,
    pub length: usize,
    pub gc: usize,
}

impl RecordStats {
    /// GC content as a percentage of the sequence length.
    pub fn gc_percent(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.gc as f64 * 100.0 / self.length as f64
        }
    }
}

/// Reads record summaries from a FASTA byte stream.
///
/// Sequence lines are counted as they stream past; no sequence is buffered.
pub fn read_stats<R: BufRead>(
    stream: &mut ByteStream<R>,
    mode: LineMode,
) -> Result<Vec<RecordStats>> {
    let mut records = Vec::new();
    loop {
        // Blank lines between records are allowed.
        while skip_line_terminator(stream)? > 0 {}
        match stream.peek()? {
            None => break,
            Some(b'>') => {}
            Some(_) => {
                let Position { line, column, .. } = stream.position();
                bail!("expected '>' at line {line}, column {column}");
            }
        }

        stream.advance()?;
        let header = header_line(stream, mode)?;
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => (id.to_string(), Some(rest.trim().to_string())),
            None => (header.clone(), None),
        };

        let mut length = 0;
        let mut gc = 0;
        while !matches!(stream.peek()?, None | Some(b'>')) {
            let mut line = LineCursor::new(&mut *stream, mode);
            while let Some(base) = line.next_item()? {
                length += 1;
                if matches!(base.to_ascii_uppercase(), b'G' | b'C' | b'S') {
                    gc += 1;
                }
            }
        }

        debug!(%id, length, "read record");
        records.push(RecordStats {
            id,
            description,
            length,
            gc,
        });
    }
    Ok(records)
}

/// Shortens `text` to at most `width` bytes without splitting a character.
pub fn truncate_to_width(text: &str, width: usize) -> Result<String> {
    let mut end = width.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    Ok(take(text, end).materialize_string()?)
}

fn header_line<R: BufRead>(stream: &mut ByteStream<R>, mode: LineMode) -> Result<String> {
    Ok(LineCursor::new(stream, mode).materialize_string()?)
}
