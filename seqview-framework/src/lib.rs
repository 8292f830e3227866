//! Lazy, non-owning views over sequences.
//!
//! Any [`Sequence`] can be normalized with [`all`] into a [`View`], then
//! bounded with the [`take`] family or cut at its first line terminator with
//! [`take_line`]. Adaptors compose left to right through [`Pipe`].
//!
//! ```
//! use seqview_framework::{take_line, Cursor, SinglePass};
//!
//! let mut input = SinglePass::new("ACGT\nTTAG".bytes());
//! assert_eq!(take_line(&mut input).materialize_string().unwrap(), "ACGT");
//! assert_eq!(take_line(&mut input).materialize_string().unwrap(), "TTAG");
//! ```

pub mod adaptor;
pub mod cursor;
pub mod sequence;
pub mod source;
#[cfg(feature = "streaming")]
pub mod stream;
pub mod take;
pub mod take_line;
pub mod view;

pub use adaptor::{
    Adaptor, All, Pipe, Take, TakeExactly, TakeExactlyOrThrow, TakeLine, TakeLineOrThrow,
    TakeOrThrow, Then,
};
pub use cursor::{
    BidirectionalCursor, Cursor, IndexCursor, NoCursor, RandomAccess, RandomAccessCursor,
};
pub use seqview_common::{
    Capabilities, EndOfInput, Position, Representation, Result, Traversal, ViewError,
};
pub use sequence::{Sequence, Storage};
pub use source::{Forward, SinglePass};
#[cfg(feature = "streaming")]
pub use stream::ByteStream;
pub use take::{take, take_exactly, take_exactly_or_throw, take_or_throw, TakeCursor, TakeMode};
pub use take_line::{
    lines, skip_line_terminator, take_line, take_line_or_throw, LineCursor, LineElement,
    LineMode, Lines,
};
pub use view::{all, IndexRange, View};

static_assertions::assert_not_impl_any!(SinglePass<std::vec::IntoIter<u8>>: Clone);
static_assertions::assert_impl_all!(Forward<std::vec::IntoIter<u8>>: Clone);
static_assertions::assert_impl_all!(View<'static, u8>: Cursor, Sequence<'static>);
