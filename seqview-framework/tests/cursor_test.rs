use seqview_framework::{
    BidirectionalCursor, Capabilities, Cursor, Forward, IndexCursor, RandomAccessCursor,
    Sequence, SinglePass, Traversal,
};
use std::collections::VecDeque;

#[test]
fn test_single_pass_peek_does_not_consume() {
    let mut cursor = SinglePass::new("hello".chars());
    assert_eq!(cursor.peek().unwrap(), Some('h'));
    assert_eq!(cursor.peek().unwrap(), Some('h'));
    assert_eq!(cursor.consumed(), 0); // Should not advance
}

#[test]
fn test_single_pass_advance() {
    let mut cursor = SinglePass::new("hi".chars());
    cursor.advance().unwrap();
    assert_eq!(cursor.peek().unwrap(), Some('i'));
    cursor.advance().unwrap();
    assert_eq!(cursor.peek().unwrap(), None);
    // Advancing at the end is a no-op
    cursor.advance().unwrap();
    assert_eq!(cursor.consumed(), 2);
}

#[test]
fn test_single_pass_capabilities() {
    let cursor = SinglePass::new(Vec::<u8>::new());
    let caps = cursor.capabilities();
    assert_eq!(caps.traversal(), Traversal::SinglePass);
    assert!(caps.is_input_only());
    assert!(!caps.is_const_iterable());
    assert_eq!(cursor.remaining(), None);
}

#[test]
fn test_cursor_and_sequence_agree_on_capabilities() {
    let cursor = Forward::new(vec![1u8, 2]);
    assert_eq!(cursor.capabilities(), cursor.sequence_capabilities());
    assert!(cursor.capabilities().is_forward());
}

#[test]
fn test_forward_restarts_independently() {
    let original = Forward::new(vec![1, 2, 3]);
    let a = original.clone();
    let mut b = original.clone();
    assert_eq!(a.materialize().unwrap(), vec![1, 2, 3]);
    b.advance().unwrap();
    assert_eq!(b.materialize().unwrap(), vec![2, 3]);
}

#[test]
fn test_skip_n() {
    let mut cursor = Forward::new("abcdef".chars());
    assert_eq!(cursor.skip_n(2).unwrap(), 2);
    assert_eq!(cursor.peek().unwrap(), Some('c'));
    assert_eq!(cursor.skip_n(10).unwrap(), 4);
    assert_eq!(cursor.peek().unwrap(), None);
}

#[test]
fn test_materialize_string() {
    let cursor = SinglePass::new("ok".bytes());
    assert_eq!(cursor.materialize_string().unwrap(), "ok");
}

#[test]
fn test_materialize_string_invalid_utf8() {
    let cursor = SinglePass::new(vec![0xffu8, 0xfe]);
    let err = cursor.materialize_string().unwrap_err();
    assert!(matches!(err, seqview_framework::ViewError::Utf8(_)));
}

#[test]
fn test_borrowed_cursor_advances_owner() {
    let mut source = SinglePass::new(vec![1, 2, 3]);
    {
        let mut borrowed = &mut source;
        assert_eq!(Cursor::next_item(&mut borrowed).unwrap(), Some(1));
    }
    assert_eq!(source.next_item().unwrap(), Some(2));
}

#[test]
fn test_index_cursor_random_access() {
    let deque: VecDeque<char> = "abcde".chars().collect();
    let mut cursor = IndexCursor::new(&deque, 1, 4);
    assert_eq!(cursor.capabilities(), Capabilities::RANDOM_ACCESS);
    assert_eq!(cursor.remaining(), Some(3));
    assert_eq!(RandomAccessCursor::get(&cursor, 2), Some('d'));
    assert_eq!(RandomAccessCursor::get(&cursor, 3), None);

    cursor.jump(2).unwrap();
    assert_eq!(cursor.peek().unwrap(), Some('d'));
    cursor.retreat().unwrap();
    assert_eq!(cursor.peek().unwrap(), Some('c'));
    assert_eq!(cursor.position(), 2);

    cursor.jump(100).unwrap();
    assert_eq!(cursor.peek().unwrap(), None);
    cursor.reset();
    assert_eq!(cursor.peek().unwrap(), Some('b'));
}
