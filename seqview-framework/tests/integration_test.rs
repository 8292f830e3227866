//! End-to-end record reading the way a sequence-file parser drives the views.

use pretty_assertions::assert_eq;
use seqview_framework::{
    all, lines, skip_line_terminator, take, take_exactly_or_throw, take_line, Cursor, Forward,
    SinglePass, ViewError,
};

#[derive(Debug, PartialEq, Eq)]
struct Record {
    id: String,
    sequence: String,
}

/// Reads `>id` header lines followed by one sequence line each.
fn read_records<C>(mut source: C) -> Result<Vec<Record>, ViewError>
where
    C: Cursor<Item = u8>,
{
    let mut records = Vec::new();
    while source.peek()?.is_some() {
        let header = take_line(&mut source).materialize_string()?;
        let id = header.trim_start_matches('>').to_string();
        let sequence = take_line(&mut source).materialize_string()?;
        if !source.capabilities().is_input_only() {
            skip_line_terminator(&mut source)?;
        }
        records.push(Record { id, sequence });
    }
    Ok(records)
}

#[test]
fn test_records_from_single_pass() {
    let input = ">seq1\nACGT\n>seq2\r\nTTAG\n";
    let records = read_records(SinglePass::new(input.bytes())).unwrap();
    assert_eq!(
        records,
        vec![
            Record {
                id: "seq1".into(),
                sequence: "ACGT".into()
            },
            Record {
                id: "seq2".into(),
                sequence: "TTAG".into()
            },
        ]
    );
}

#[test]
fn test_fixed_width_fields() {
    // Fixed-width header: 4-byte tag, 3-byte count, then the payload line.
    let mut source = SinglePass::new("SEQ1003ACG\nrest".bytes());
    let tag = take_exactly_or_throw(&mut source, 4)
        .unwrap()
        .materialize_string()
        .unwrap();
    let count: usize = take(&mut source, 3)
        .materialize_string()
        .unwrap()
        .parse()
        .unwrap();
    let payload = take_line(&mut source).materialize_string().unwrap();
    assert_eq!(tag, "SEQ1");
    assert_eq!(count, 3);
    assert_eq!(payload, "ACG");
    assert_eq!(all(&mut source).materialize_string().unwrap(), "rest");
}

#[test]
fn test_truncated_fixed_width_field() {
    let mut source = SinglePass::new("SE".bytes());
    let err = take_exactly_or_throw(&mut source, 4)
        .unwrap()
        .materialize()
        .unwrap_err();
    assert!(err.is_unexpected_end());
}

#[test]
fn test_forward_and_single_pass_agree() {
    let input = "line one\nline two\r\n\nlast";
    let forward: Vec<String> = lines(Forward::new(input.bytes()))
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
        .collect::<Result<_, _>>()
        .unwrap();
    let single: Vec<String> = lines(SinglePass::new(input.bytes()))
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(forward, single);
    assert_eq!(forward, vec!["line one", "line two", "", "last"]);
}

#[test]
fn test_in_memory_buffer_without_copy() {
    let buffer = b"ACGTACGT\nGGCC".to_vec();
    let head = take(&buffer, 4);
    assert_eq!(head.as_slice().map(<[u8]>::as_ptr), Some(buffer.as_ptr()));
    assert_eq!(take_line(&buffer).materialize().unwrap(), b"ACGTACGT".to_vec());
}
