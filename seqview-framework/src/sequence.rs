//! The interface a sequence exposes to the view adaptors.
//!
//! A [`Sequence`] reports its [`Capabilities`] and then hands over its raw
//! [`Storage`]. [`all`](crate::view::all) inspects both exactly once to pick
//! a representation.

use crate::cursor::{Cursor, IndexCursor, NoCursor, RandomAccess};
use crate::source::{Forward, SinglePass};
use crate::take::TakeCursor;
use crate::take_line::{LineCursor, LineElement};
use crate::view::View;
use seqview_common::Capabilities;
use std::collections::{linked_list, LinkedList, VecDeque};
use std::iter::Cloned;

/// Raw, non-owning access to the elements of a sequence.
pub enum Storage<'a, T, C> {
    /// The sequence already is a view.
    View(View<'a, T, C>),
    /// A shared borrow of contiguous memory. Text sequences hand out their bytes.
    Shared(&'a [T]),
    /// An exclusive borrow of contiguous memory.
    Exclusive(&'a mut [T]),
    /// Shared storage with constant-time indexing but no contiguous layout.
    Indexed(&'a dyn RandomAccess<Item = T>),
    /// Anything else is traversed through a cursor.
    Cursor(C),
}

/// A source of elements that can be normalized into a [`View`].
pub trait Sequence<'a>: Sized {
    type Item: 'a;
    type Cursor: Cursor<Item = Self::Item>;

    /// Describes the sequence before it is normalized. For cursors this is
    /// the same as [`Cursor::capabilities`].
    fn sequence_capabilities(&self) -> Capabilities;

    fn into_storage(self) -> Storage<'a, Self::Item, Self::Cursor>;
}

impl<'a, T: 'a> Sequence<'a> for &'a [T] {
    type Item = T;
    type Cursor = NoCursor<T>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::CONTIGUOUS
    }

    fn into_storage(self) -> Storage<'a, T, NoCursor<T>> {
        Storage::Shared(self)
    }
}

impl<'a, T: 'a, const N: usize> Sequence<'a> for &'a [T; N] {
    type Item = T;
    type Cursor = NoCursor<T>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::CONTIGUOUS
    }

    fn into_storage(self) -> Storage<'a, T, NoCursor<T>> {
        Storage::Shared(self.as_slice())
    }
}

impl<'a, T: 'a> Sequence<'a> for &'a Vec<T> {
    type Item = T;
    type Cursor = NoCursor<T>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::CONTIGUOUS
    }

    fn into_storage(self) -> Storage<'a, T, NoCursor<T>> {
        Storage::Shared(self.as_slice())
    }
}

impl<'a> Sequence<'a> for &'a str {
    type Item = u8;
    type Cursor = NoCursor<u8>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::TEXT
    }

    fn into_storage(self) -> Storage<'a, u8, NoCursor<u8>> {
        Storage::Shared(self.as_bytes())
    }
}

impl<'a> Sequence<'a> for &'a String {
    type Item = u8;
    type Cursor = NoCursor<u8>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::TEXT
    }

    fn into_storage(self) -> Storage<'a, u8, NoCursor<u8>> {
        Storage::Shared(self.as_bytes())
    }
}

impl<'a, T: 'a> Sequence<'a> for &'a mut [T] {
    type Item = T;
    type Cursor = NoCursor<T>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::CONTIGUOUS.writable()
    }

    fn into_storage(self) -> Storage<'a, T, NoCursor<T>> {
        Storage::Exclusive(self)
    }
}

impl<'a, T: 'a> Sequence<'a> for &'a mut Vec<T> {
    type Item = T;
    type Cursor = NoCursor<T>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::CONTIGUOUS.writable()
    }

    fn into_storage(self) -> Storage<'a, T, NoCursor<T>> {
        Storage::Exclusive(self.as_mut_slice())
    }
}

impl<'a, T: 'a> Sequence<'a> for &'a VecDeque<T> {
    type Item = T;
    type Cursor = NoCursor<T>;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::RANDOM_ACCESS
    }

    fn into_storage(self) -> Storage<'a, T, NoCursor<T>> {
        Storage::Indexed(self)
    }
}

impl<'a, T: Clone + 'a> Sequence<'a> for &'a LinkedList<T> {
    type Item = T;
    type Cursor = Forward<Cloned<linked_list::Iter<'a, T>>>;

    // The list could step backwards, but `Forward` wraps a plain iterator
    // that cannot retreat, so the view is advertised as forward only.
    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::FORWARD.with_size()
    }

    fn into_storage(self) -> Storage<'a, T, Self::Cursor> {
        Storage::Cursor(Forward::new(self.iter().cloned()))
    }
}

/// Borrowing a cursor lets a view traverse the caller's cursor in place.
///
/// This is how a single-pass source is shared between successive views: each
/// view consumes from the same handle.
impl<'a, C> Sequence<'a> for &'a mut C
where
    C: Cursor + ?Sized,
    C::Item: 'a,
{
    type Item = C::Item;
    type Cursor = &'a mut C;

    fn sequence_capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn into_storage(self) -> Storage<'a, C::Item, &'a mut C> {
        Storage::Cursor(self)
    }
}

impl<'a, T: 'a, C> Sequence<'a> for View<'a, T, C>
where
    C: Cursor<Item = T>,
{
    type Item = T;
    type Cursor = C;

    fn sequence_capabilities(&self) -> Capabilities {
        View::capabilities(self)
    }

    fn into_storage(self) -> Storage<'a, T, C> {
        Storage::View(self)
    }
}

macro_rules! cursor_sequence {
    ($(impl[$($generics:tt)*] $ty:ty where [$($bounds:tt)*];)*) => {
        $(
            impl<'a, $($generics)*> Sequence<'a> for $ty
            where
                $($bounds)*
            {
                type Item = <$ty as Cursor>::Item;
                type Cursor = $ty;

                fn sequence_capabilities(&self) -> Capabilities {
                    Cursor::capabilities(self)
                }

                fn into_storage(self) -> Storage<'a, Self::Item, $ty> {
                    Storage::Cursor(self)
                }
            }
        )*
    };
}

cursor_sequence! {
    impl[I] SinglePass<I> where [I: Iterator, I::Item: Clone + 'a];
    impl[I] Forward<I> where [I: Iterator + Clone, I::Item: Clone + 'a];
    impl['b, T] IndexCursor<'b, T> where [T: Clone + 'a];
    impl[C] TakeCursor<C> where [C: Cursor, C::Item: 'a];
    impl[C] LineCursor<C> where [C: Cursor, C::Item: LineElement + 'a];
}

#[cfg(feature = "streaming")]
impl<'a, R: std::io::BufRead> Sequence<'a> for crate::stream::ByteStream<R> {
    type Item = u8;
    type Cursor = Self;

    fn sequence_capabilities(&self) -> Capabilities {
        Capabilities::SINGLE_PASS
    }

    fn into_storage(self) -> Storage<'a, u8, Self> {
        Storage::Cursor(self)
    }
}
