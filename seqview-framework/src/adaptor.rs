//! Left-to-right composition of view adaptors.
//!
//! ```
//! use seqview_framework::adaptor::{Pipe, Take, TakeLine};
//! use seqview_framework::Cursor;
//!
//! let line = "header\nbody".pipe(Take(4)).pipe(TakeLine);
//! assert_eq!(line.materialize_string().unwrap(), "head");
//! ```

use crate::sequence::Sequence;
use crate::take::{take, take_exactly, take_exactly_or_throw, take_or_throw, TakeCursor};
use crate::take_line::{take_line, take_line_or_throw, LineCursor, LineElement};
use crate::view::{all, View};
use seqview_common::Result;

/// A view adaptor that can be applied to a sequence.
pub trait Adaptor<'a, S: Sequence<'a>> {
    type Output;

    fn apply(self, sequence: S) -> Self::Output;
}

/// Applies adaptors in reading order: `sequence.pipe(a).pipe(b)`.
pub trait Pipe: Sized {
    fn pipe<'a, A>(self, adaptor: A) -> A::Output
    where
        Self: Sequence<'a>,
        A: Adaptor<'a, Self>,
    {
        adaptor.apply(self)
    }
}

impl<S> Pipe for S {}

/// Adaptor form of [`all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct All;

/// Adaptor form of [`take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take(pub usize);

/// Adaptor form of [`take_exactly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeExactly(pub usize);

/// Adaptor form of [`take_or_throw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeOrThrow(pub usize);

/// Adaptor form of [`take_exactly_or_throw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeExactlyOrThrow(pub usize);

/// Adaptor form of [`take_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TakeLine;

/// Adaptor form of [`take_line_or_throw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TakeLineOrThrow;

impl<'a, S: Sequence<'a>> Adaptor<'a, S> for All {
    type Output = View<'a, S::Item, S::Cursor>;

    fn apply(self, sequence: S) -> Self::Output {
        all(sequence)
    }
}

impl<'a, S: Sequence<'a>> Adaptor<'a, S> for Take {
    type Output = View<'a, S::Item, TakeCursor<S::Cursor>>;

    fn apply(self, sequence: S) -> Self::Output {
        take(sequence, self.0)
    }
}

impl<'a, S: Sequence<'a>> Adaptor<'a, S> for TakeExactly {
    type Output = View<'a, S::Item, TakeCursor<S::Cursor>>;

    fn apply(self, sequence: S) -> Self::Output {
        take_exactly(sequence, self.0)
    }
}

impl<'a, S: Sequence<'a>> Adaptor<'a, S> for TakeOrThrow {
    type Output = Result<View<'a, S::Item, TakeCursor<S::Cursor>>>;

    fn apply(self, sequence: S) -> Self::Output {
        take_or_throw(sequence, self.0)
    }
}

impl<'a, S: Sequence<'a>> Adaptor<'a, S> for TakeExactlyOrThrow {
    type Output = Result<View<'a, S::Item, TakeCursor<S::Cursor>>>;

    fn apply(self, sequence: S) -> Self::Output {
        take_exactly_or_throw(sequence, self.0)
    }
}

impl<'a, S> Adaptor<'a, S> for TakeLine
where
    S: Sequence<'a>,
    S::Item: LineElement + Clone,
{
    type Output = LineCursor<View<'a, S::Item, S::Cursor>>;

    fn apply(self, sequence: S) -> Self::Output {
        take_line(sequence)
    }
}

impl<'a, S> Adaptor<'a, S> for TakeLineOrThrow
where
    S: Sequence<'a>,
    S::Item: LineElement + Clone,
{
    type Output = LineCursor<View<'a, S::Item, S::Cursor>>;

    fn apply(self, sequence: S) -> Self::Output {
        take_line_or_throw(sequence)
    }
}

/// Composition of two adaptors, applied first to last.
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B>(pub A, pub B);

impl<'a, S, A, B> Adaptor<'a, S> for Then<A, B>
where
    S: Sequence<'a>,
    A: Adaptor<'a, S>,
    A::Output: Sequence<'a>,
    B: Adaptor<'a, A::Output>,
{
    type Output = B::Output;

    fn apply(self, sequence: S) -> Self::Output {
        self.1.apply(self.0.apply(sequence))
    }
}
