//! Lazy, non-owning views and the identity adaptor [`all`].

use crate::cursor::{Cursor, NoCursor, RandomAccess};
use crate::sequence::{Sequence, Storage};
use seqview_common::{Capabilities, Representation, Result};
use std::fmt;
use tracing::trace;

/// A `[start, end)` window over type-erased random-access storage.
pub struct IndexRange<'a, T: 'a> {
    source: &'a dyn RandomAccess<Item = T>,
    start: usize,
    end: usize,
}

impl<'a, T: 'a> IndexRange<'a, T> {
    /// Creates a range over the whole of `source`.
    pub fn new(source: &'a dyn RandomAccess<Item = T>) -> Self {
        Self {
            source,
            start: 0,
            end: source.len(),
        }
    }

    /// Returns the first `n` elements of this range, clamped to its length.
    pub fn prefix(&self, n: usize) -> Self {
        Self {
            source: self.source,
            start: self.start,
            end: self.start + n.min(self.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the element at `index`, relative to the start of the range.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.len() {
            self.source.get(self.start + index)
        } else {
            None
        }
    }

    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.get(0).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        (self.start..self.end).filter_map(move |index| self.source.get(index))
    }

    /// Returns a random-access cursor over this range.
    pub fn cursor(&self) -> crate::cursor::IndexCursor<'a, T> {
        crate::cursor::IndexCursor::new(self.source, self.start, self.end)
    }

    fn step(&mut self) {
        if self.start < self.end {
            self.start += 1;
        }
    }
}

impl<T> Clone for IndexRange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IndexRange<'_, T> {}

impl<T> fmt::Debug for IndexRange<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// A lazy descriptor of a (sub)sequence.
///
/// The variant is chosen once, when the view is built, from the capabilities
/// of the underlying sequence. Shared variants copy only metadata; `SpanMut`
/// and single-pass `Generic` views are move-only.
pub enum View<'a, T, C = NoCursor<T>> {
    /// Read-only contiguous memory.
    Span(&'a [T]),
    /// Exclusively borrowed contiguous memory.
    SpanMut(&'a mut [T]),
    /// Random-access storage without contiguous layout.
    Index(IndexRange<'a, T>),
    /// The bytes of a UTF-8 string.
    Str(&'a [T]),
    /// Any other sequence, traversed through its cursor.
    Generic(C),
}

impl<'a, T, C> View<'a, T, C> {
    pub fn representation(&self) -> Representation {
        match self {
            View::Span(_) => Representation::ContiguousSpan,
            View::SpanMut(_) => Representation::MutableSpan,
            View::Index(_) => Representation::IndexRange,
            View::Str(_) => Representation::StringSlice,
            View::Generic(_) => Representation::Generic,
        }
    }

    /// Returns the viewed elements if they are laid out contiguously.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            View::Span(s) | View::Str(s) => Some(*s),
            View::SpanMut(s) => Some(&**s),
            View::Index(_) | View::Generic(_) => None,
        }
    }

    /// Returns the viewed elements mutably, for views over exclusive storage.
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        match self {
            View::SpanMut(s) => Some(&mut **s),
            _ => None,
        }
    }

    /// Duplicates the view. Views over exclusive storage cannot be duplicated.
    pub fn try_clone(&self) -> Option<Self>
    where
        C: Clone,
    {
        match self {
            View::Span(s) => Some(View::Span(*s)),
            View::SpanMut(_) => None,
            View::Index(range) => Some(View::Index(*range)),
            View::Str(s) => Some(View::Str(*s)),
            View::Generic(cursor) => Some(View::Generic(cursor.clone())),
        }
    }
}

impl<'a, T, C: Cursor<Item = T>> View<'a, T, C> {
    pub fn capabilities(&self) -> Capabilities {
        match self {
            View::Span(_) => Capabilities::CONTIGUOUS,
            View::SpanMut(_) => Capabilities::CONTIGUOUS.writable(),
            View::Index(_) => Capabilities::RANDOM_ACCESS,
            View::Str(_) => Capabilities::TEXT,
            View::Generic(cursor) => cursor.capabilities(),
        }
    }

    /// Number of elements in the view, if known without traversal.
    pub fn size(&self) -> Option<usize> {
        match self {
            View::Span(s) | View::Str(s) => Some(s.len()),
            View::SpanMut(s) => Some(s.len()),
            View::Index(range) => Some(range.len()),
            View::Generic(cursor) => cursor.remaining(),
        }
    }
}

impl<'a, C> View<'a, u8, C> {
    /// Returns the view as text if it holds valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_slice().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for View<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Span(s) => f.debug_tuple("Span").field(s).finish(),
            View::SpanMut(s) => f.debug_tuple("SpanMut").field(s).finish(),
            View::Index(range) => f.debug_tuple("Index").field(range).finish(),
            View::Str(s) => f.debug_tuple("Str").field(s).finish(),
            View::Generic(cursor) => f.debug_tuple("Generic").field(cursor).finish(),
        }
    }
}

impl<T, C> Cursor for View<'_, T, C>
where
    T: Clone,
    C: Cursor<Item = T>,
{
    type Item = T;

    fn peek(&mut self) -> Result<Option<T>> {
        Ok(match self {
            View::Span(s) | View::Str(s) => s.first().cloned(),
            View::SpanMut(s) => s.first().cloned(),
            View::Index(range) => range.first(),
            View::Generic(cursor) => return cursor.peek(),
        })
    }

    fn advance(&mut self) -> Result<()> {
        match self {
            View::Span(s) | View::Str(s) => {
                let current = *s;
                if !current.is_empty() {
                    *s = &current[1..];
                }
            }
            View::SpanMut(s) => {
                let current = std::mem::take(s);
                *s = if current.is_empty() {
                    current
                } else {
                    &mut current[1..]
                };
            }
            View::Index(range) => range.step(),
            View::Generic(cursor) => cursor.advance()?,
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        View::capabilities(self)
    }

    fn remaining(&self) -> Option<usize> {
        self.size()
    }

    fn next_item(&mut self) -> Result<Option<T>> {
        if let View::Generic(cursor) = self {
            return cursor.next_item();
        }
        let item = self.peek()?;
        if item.is_some() {
            self.advance()?;
        }
        Ok(item)
    }

    fn skip_n(&mut self, n: usize) -> Result<usize> {
        match self {
            View::Span(s) | View::Str(s) => {
                let current = *s;
                let count = n.min(current.len());
                *s = &current[count..];
                Ok(count)
            }
            View::SpanMut(s) => {
                let current = std::mem::take(s);
                let count = n.min(current.len());
                *s = &mut current[count..];
                Ok(count)
            }
            View::Index(range) => {
                let count = n.min(range.len());
                range.start += count;
                Ok(count)
            }
            View::Generic(cursor) => cursor.skip_n(n),
        }
    }

    fn materialize(self) -> Result<Vec<T>> {
        match self {
            View::Span(s) | View::Str(s) => Ok(s.to_vec()),
            View::SpanMut(s) => Ok(s.to_vec()),
            View::Index(range) => Ok(range.iter().cloned().collect()),
            View::Generic(cursor) => cursor.materialize(),
        }
    }
}

impl<T, C> Iterator for View<'_, T, C>
where
    T: Clone,
    C: Cursor<Item = T>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            View::Generic(cursor) => (0, cursor.remaining()),
            _ => {
                let len = self.size().unwrap_or(0);
                (len, Some(len))
            }
        }
    }
}

/// Normalizes any sequence into a view without copying elements.
///
/// A view is returned unchanged. Shared contiguous memory becomes a
/// [`View::Span`] (or [`View::Str`] for text), exclusive contiguous memory a
/// [`View::SpanMut`], sized random-access storage a [`View::Index`], and
/// everything else is wrapped as [`View::Generic`] around its cursor.
pub fn all<'a, S>(sequence: S) -> View<'a, S::Item, S::Cursor>
where
    S: Sequence<'a>,
{
    let capabilities = sequence.sequence_capabilities();
    let view = match sequence.into_storage() {
        Storage::View(view) => return view,
        Storage::Shared(s) if capabilities.is_text() => View::Str(s),
        Storage::Shared(s) => View::Span(s),
        Storage::Exclusive(s) => View::SpanMut(s),
        Storage::Indexed(source) => View::Index(IndexRange::new(source)),
        Storage::Cursor(cursor) => View::Generic(cursor),
    };
    trace!(
        representation = ?view.representation(),
        traversal = ?capabilities.traversal(),
        sized = capabilities.is_sized(),
        "normalized sequence into view"
    );
    view
}
