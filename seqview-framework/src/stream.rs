//! Single-pass byte cursor over buffered readers.

use crate::cursor::Cursor;
use seqview_common::{Capabilities, Position, Result};
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};

/// Reads bytes straight out of a reader's buffer, one at a time.
///
/// The stream tracks the line, column and offset of the next unread byte.
pub struct ByteStream<R> {
    reader: R,
    position: Position,
}

impl<R: BufRead> ByteStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: Position::new(),
        }
    }

    /// Position of the next byte to be read.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteStream<BufReader<R>> {
    /// Wraps an unbuffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R> fmt::Debug for ByteStream<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead> Cursor for ByteStream<R> {
    type Item = u8;

    fn peek(&mut self) -> Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn advance(&mut self) -> Result<()> {
        if let Some(byte) = self.peek()? {
            self.reader.consume(1);
            self.position.step(byte);
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SINGLE_PASS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_stream_reads_through() {
        let mut stream = ByteStream::new(&b"ab"[..]);
        assert_eq!(stream.next_item().unwrap(), Some(b'a'));
        assert_eq!(stream.next_item().unwrap(), Some(b'b'));
        assert_eq!(stream.next_item().unwrap(), None);
        assert_eq!(stream.position().offset, 2);
    }
}
