use seqview_common::{Capabilities, Result};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

// Upper bound on the capacity reserved from a reported length.
const MAX_PREALLOCATION: usize = 1 << 16;

/// A traversal handle over a sequence.
///
/// `peek` reads the element under the cursor without moving it; `Ok(None)`
/// means the cursor has reached its end sentinel. Adaptors that bound a
/// sequence report a violated bound as an error from `peek`, at the element
/// where it was detected.
pub trait Cursor {
    type Item;

    /// Returns the element under the cursor, or `None` at the end.
    fn peek(&mut self) -> Result<Option<Self::Item>>;

    /// Steps past the element under the cursor. Does nothing at the end.
    fn advance(&mut self) -> Result<()>;

    /// Describes what the underlying sequence supports.
    fn capabilities(&self) -> Capabilities;

    /// Number of elements before the end sentinel, if known without traversal.
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Reads the element under the cursor and steps past it.
    fn next_item(&mut self) -> Result<Option<Self::Item>> {
        let item = self.peek()?;
        if item.is_some() {
            self.advance()?;
        }
        Ok(item)
    }

    /// Advances by up to `n` elements, returning how many were skipped.
    fn skip_n(&mut self, n: usize) -> Result<usize> {
        let mut count = 0;
        while count < n && self.next_item()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// Copies every remaining element into a vector.
    fn materialize(mut self) -> Result<Vec<Self::Item>>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(self.remaining().unwrap_or(0).min(MAX_PREALLOCATION));
        while let Some(item) = self.next_item()? {
            out.push(item);
        }
        Ok(out)
    }

    /// Copies every remaining byte into a `String`.
    fn materialize_string(self) -> Result<String>
    where
        Self: Sized,
        Self::Item: Into<u8>,
    {
        let bytes: Vec<u8> = self.materialize()?.into_iter().map(Into::into).collect();
        Ok(String::from_utf8(bytes)?)
    }
}

/// A cursor that can step backwards.
pub trait BidirectionalCursor: Cursor {
    fn retreat(&mut self) -> Result<()>;
}

/// A cursor that can read and jump at arbitrary offsets in constant time.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Reads the element `offset` positions past the cursor.
    fn get(&self, offset: usize) -> Option<Self::Item>;

    /// Moves the cursor forward by `n` elements at once, stopping at the end.
    fn jump(&mut self, n: usize) -> Result<()>;
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn peek(&mut self) -> Result<Option<Self::Item>> {
        (**self).peek()
    }

    fn advance(&mut self) -> Result<()> {
        (**self).advance()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }

    fn next_item(&mut self) -> Result<Option<Self::Item>> {
        (**self).next_item()
    }

    fn skip_n(&mut self, n: usize) -> Result<usize> {
        (**self).skip_n(n)
    }
}

/// Sized storage with constant-time indexing.
pub trait RandomAccess {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

/// A random-access cursor over type-erased indexed storage.
pub struct IndexCursor<'a, T: 'a> {
    source: &'a dyn RandomAccess<Item = T>,
    start: usize,
    pos: usize,
    end: usize,
}

impl<'a, T: 'a> IndexCursor<'a, T> {
    /// Creates a cursor over `[start, end)` of `source`, clamped to its length.
    pub fn new(source: &'a dyn RandomAccess<Item = T>, start: usize, end: usize) -> Self {
        let end = end.min(source.len());
        let start = start.min(end);
        Self {
            source,
            start,
            pos: start,
            end,
        }
    }

    /// Returns the absolute index of the cursor in the underlying storage.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to where it started.
    pub fn reset(&mut self) {
        self.pos = self.start;
    }
}

impl<T> Clone for IndexCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IndexCursor<'_, T> {}

impl<T> fmt::Debug for IndexCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexCursor")
            .field("start", &self.start)
            .field("pos", &self.pos)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Cursor for IndexCursor<'_, T> {
    type Item = T;

    fn peek(&mut self) -> Result<Option<T>> {
        Ok(RandomAccessCursor::get(self, 0))
    }

    fn advance(&mut self) -> Result<()> {
        if self.pos < self.end {
            self.pos += 1;
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::RANDOM_ACCESS
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.end - self.pos)
    }
}

impl<T: Clone> BidirectionalCursor for IndexCursor<'_, T> {
    fn retreat(&mut self) -> Result<()> {
        debug_assert!(self.pos > self.start, "retreat before the first element");
        if self.pos > self.start {
            self.pos -= 1;
        }
        Ok(())
    }
}

impl<T: Clone> RandomAccessCursor for IndexCursor<'_, T> {
    fn get(&self, offset: usize) -> Option<T> {
        let index = self.pos.checked_add(offset)?;
        if index < self.end {
            self.source.get(index).cloned()
        } else {
            None
        }
    }

    fn jump(&mut self, n: usize) -> Result<()> {
        self.pos = self.pos.saturating_add(n).min(self.end);
        Ok(())
    }
}

/// The cursor type of sequences that never need a generic cursor.
///
/// It has no values; a view over a slice or string names it as its
/// `Generic` parameter.
pub struct NoCursor<T> {
    never: Infallible,
    _marker: PhantomData<T>,
}

impl<T> NoCursor<T> {
    fn unreachable(&self) -> ! {
        let never = self.never;
        match never {}
    }
}

impl<T> Clone for NoCursor<T> {
    fn clone(&self) -> Self {
        self.unreachable()
    }
}

impl<T> fmt::Debug for NoCursor<T> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.unreachable()
    }
}

impl<T> Cursor for NoCursor<T> {
    type Item = T;

    fn peek(&mut self) -> Result<Option<T>> {
        self.unreachable()
    }

    fn advance(&mut self) -> Result<()> {
        self.unreachable()
    }

    fn capabilities(&self) -> Capabilities {
        self.unreachable()
    }
}
