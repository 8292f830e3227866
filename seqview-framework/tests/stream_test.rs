use pretty_assertions::assert_eq;
use seqview_framework::{
    lines, take, take_line, take_line_or_throw, ByteStream, Cursor, Position, ViewError,
};
use std::io::{self, Read};

#[test]
fn test_byte_stream_is_single_pass() {
    let stream = ByteStream::new(&b"abc"[..]);
    assert!(stream.capabilities().is_input_only());
    assert_eq!(stream.remaining(), None);
}

#[test]
fn test_byte_stream_position() {
    let mut stream = ByteStream::new(&b"ab\ncd"[..]);
    assert_eq!(stream.position(), Position::new());
    stream.skip_n(4).unwrap();
    assert_eq!(stream.position(), Position::at(2, 2, 4));
    assert_eq!(stream.peek().unwrap(), Some(b'd'));
}

#[test]
fn test_byte_stream_lines() {
    let mut stream = ByteStream::new(&b">id\r\nACGT\n"[..]);
    assert_eq!(take_line(&mut stream).materialize_string().unwrap(), ">id");
    assert_eq!(take_line(&mut stream).materialize_string().unwrap(), "ACGT");
    assert_eq!(stream.peek().unwrap(), None);
    assert_eq!(stream.position().line, 3);
}

#[test]
fn test_byte_stream_take() {
    let mut stream = ByteStream::from_reader(&b"0123456789"[..]);
    assert_eq!(take(&mut stream, 3).materialize_string().unwrap(), "012");
    assert_eq!(stream.position().offset, 3);
}

#[test]
fn test_byte_stream_require_eol() {
    let mut stream = ByteStream::new(&b"done\npartial"[..]);
    assert_eq!(
        take_line_or_throw(&mut stream).materialize_string().unwrap(),
        "done"
    );
    let err = take_line_or_throw(&mut stream).materialize().unwrap_err();
    assert!(err.is_unexpected_end());
}

#[test]
fn test_byte_stream_lines_iterator() {
    let records: Vec<Vec<u8>> = lines(ByteStream::new(&b"a\nb\nc"[..]))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
}

/// Fails once with `Interrupted`, then with a hard error.
struct FlakyReader {
    calls: usize,
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        match self.calls {
            1 => Err(io::Error::new(io::ErrorKind::Interrupted, "again")),
            2 => {
                buf[0] = b'x';
                Ok(1)
            }
            _ => Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone")),
        }
    }
}

#[test]
fn test_byte_stream_retries_interrupted() {
    let mut stream = ByteStream::from_reader(FlakyReader { calls: 0 });
    assert_eq!(stream.next_item().unwrap(), Some(b'x'));
    let err = stream.peek().unwrap_err();
    match err {
        ViewError::Io(source) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_lines_stop_after_read_error() {
    let mut records = lines(ByteStream::from_reader(FlakyReader { calls: 0 }));
    assert!(matches!(records.next(), Some(Err(ViewError::Io(_)))));
    assert!(records.next().is_none());
}
