//! Bounded views: the first `n` elements of a sequence.
//!
//! [`take`] truncates silently when the sequence is shorter than `n`.
//! [`take_or_throw`] fails instead: at construction when the length is
//! known, otherwise when traversal reaches the end early. The `exactly`
//! variants additionally report their length as exactly `n`.

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::sequence::Sequence;
use crate::view::{all, View};
use bitflags::bitflags;
use seqview_common::{Capabilities, EndOfInput, Result, ViewError};
use tracing::{debug, trace};

bitflags! {
    /// Behaviour of a bounded view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TakeMode: u8 {
        /// Report the length as exactly the requested count.
        const EXACT = 1 << 0;
        /// Fail instead of truncating when the sequence is too short.
        const OR_THROW = 1 << 1;
    }
}

/// Cursor over at most `target` elements of an underlying cursor.
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    inner: C,
    pos: usize,
    target: usize,
    mode: TakeMode,
}

impl<C> TakeCursor<C> {
    pub fn new(inner: C, target: usize, mode: TakeMode) -> Self {
        Self {
            inner,
            pos: 0,
            target,
            mode,
        }
    }

    /// Number of elements already traversed.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn mode(&self) -> TakeMode {
        self.mode
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn left(&self) -> usize {
        self.target - self.pos
    }

    fn short_input(&self) -> ViewError {
        debug!(
            position = self.pos,
            target = self.target,
            "bounded view ran out of input"
        );
        ViewError::UnexpectedEndOfInput(EndOfInput::BeforeSize)
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn peek(&mut self) -> Result<Option<C::Item>> {
        if self.pos >= self.target {
            return Ok(None);
        }
        match self.inner.peek()? {
            Some(item) => Ok(Some(item)),
            None if self.mode.contains(TakeMode::OR_THROW) => Err(self.short_input()),
            None => Ok(None),
        }
    }

    fn advance(&mut self) -> Result<()> {
        // The position only counts elements the inner cursor really had.
        if self.peek()?.is_some() {
            self.inner.advance()?;
            self.pos += 1;
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        let caps = self.inner.capabilities();
        if self.mode.contains(TakeMode::EXACT) {
            caps.with_size()
        } else if self.inner.remaining().is_some() {
            caps
        } else {
            caps.without_size()
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.mode.contains(TakeMode::EXACT) {
            Some(self.left())
        } else {
            self.inner.remaining().map(|n| n.min(self.left()))
        }
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for TakeCursor<C> {
    fn retreat(&mut self) -> Result<()> {
        if self.pos > 0 {
            self.inner.retreat()?;
            self.pos -= 1;
        }
        Ok(())
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for TakeCursor<C> {
    fn get(&self, offset: usize) -> Option<C::Item> {
        if offset < self.left() {
            self.inner.get(offset)
        } else {
            None
        }
    }

    fn jump(&mut self, n: usize) -> Result<()> {
        let wanted = n.min(self.left());
        let available = match self.inner.remaining() {
            Some(left) => left.min(wanted),
            None => (0..wanted)
                .take_while(|&offset| self.inner.get(offset).is_some())
                .count(),
        };
        if available < wanted && self.mode.contains(TakeMode::OR_THROW) {
            return Err(self.short_input());
        }
        self.inner.jump(available)?;
        self.pos += available;
        Ok(())
    }
}

/// The first `n` elements of `sequence`, or all of it if it is shorter.
pub fn take<'a, S>(sequence: S, n: usize) -> View<'a, S::Item, TakeCursor<S::Cursor>>
where
    S: Sequence<'a>,
{
    let view = all(sequence);
    let n = clamp(&view, n);
    rebound(view, n, TakeMode::empty())
}

/// Like [`take`], but the view reports its length as exactly `n` elements,
/// clamped to the sequence length when that is known.
pub fn take_exactly<'a, S>(sequence: S, n: usize) -> View<'a, S::Item, TakeCursor<S::Cursor>>
where
    S: Sequence<'a>,
{
    let view = all(sequence);
    let n = clamp(&view, n);
    rebound(view, n, TakeMode::EXACT)
}

/// The first `n` elements of `sequence`, failing if it has fewer.
///
/// A sequence of known length is checked immediately; otherwise traversal
/// returns [`ViewError::UnexpectedEndOfInput`] where the input runs out.
pub fn take_or_throw<'a, S>(
    sequence: S,
    n: usize,
) -> Result<View<'a, S::Item, TakeCursor<S::Cursor>>>
where
    S: Sequence<'a>,
{
    let view = all(sequence);
    checked(&view, n)?;
    Ok(rebound(view, n, TakeMode::OR_THROW))
}

/// Like [`take_or_throw`], and the view reports its length as exactly `n`.
pub fn take_exactly_or_throw<'a, S>(
    sequence: S,
    n: usize,
) -> Result<View<'a, S::Item, TakeCursor<S::Cursor>>>
where
    S: Sequence<'a>,
{
    let view = all(sequence);
    checked(&view, n)?;
    Ok(rebound(view, n, TakeMode::EXACT | TakeMode::OR_THROW))
}

fn clamp<T, C: Cursor<Item = T>>(view: &View<'_, T, C>, n: usize) -> usize {
    match view.size() {
        Some(len) => n.min(len),
        None => n,
    }
}

fn checked<T, C: Cursor<Item = T>>(view: &View<'_, T, C>, n: usize) -> Result<()> {
    match view.size() {
        Some(available) if n > available => {
            debug!(requested = n, available, "bounded view longer than sequence");
            Err(ViewError::Length {
                requested: n,
                available,
            })
        }
        _ => Ok(()),
    }
}

/// Re-expresses a bounded view in the representation of its source.
fn rebound<'a, T, C>(view: View<'a, T, C>, n: usize, mode: TakeMode) -> View<'a, T, TakeCursor<C>>
where
    C: Cursor<Item = T>,
{
    let bounded = match view {
        View::Span(s) => View::Span(&s[..n.min(s.len())]),
        View::SpanMut(s) => {
            let len = s.len();
            View::SpanMut(&mut s[..n.min(len)])
        }
        View::Index(range) => View::Index(range.prefix(n)),
        View::Str(s) => View::Str(&s[..n.min(s.len())]),
        View::Generic(cursor) => View::Generic(TakeCursor::new(cursor, n, mode)),
    };
    trace!(
        representation = ?bounded.representation(),
        target = n,
        ?mode,
        "built bounded view"
    );
    bounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SinglePass;

    #[test]
    fn test_take_cursor_stops_at_target() {
        let mut cursor = TakeCursor::new(SinglePass::new(1..10), 2, TakeMode::empty());
        assert_eq!(cursor.next_item().unwrap(), Some(1));
        assert_eq!(cursor.next_item().unwrap(), Some(2));
        assert_eq!(cursor.next_item().unwrap(), None);
        assert_eq!(cursor.position(), 2);
        let mut inner = cursor.into_inner();
        assert_eq!(inner.next_item().unwrap(), Some(3));
    }

    #[test]
    fn test_take_cursor_or_throw() {
        let mut cursor = TakeCursor::new(SinglePass::new(vec![1]), 3, TakeMode::OR_THROW);
        assert_eq!(cursor.next_item().unwrap(), Some(1));
        let err = cursor.peek().unwrap_err();
        assert!(matches!(
            err,
            ViewError::UnexpectedEndOfInput(EndOfInput::BeforeSize)
        ));
    }

    #[test]
    fn test_take_cursor_advance_past_short_input() {
        let mut cursor = TakeCursor::new(SinglePass::new(vec![1]), 3, TakeMode::empty());
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.peek().unwrap(), None);
    }

    #[test]
    fn test_exact_mode_reports_size() {
        let cursor = TakeCursor::new(SinglePass::new(1..), 4, TakeMode::EXACT);
        assert_eq!(cursor.remaining(), Some(4));
        assert!(cursor.capabilities().is_sized());
        assert_eq!(cursor.mode(), TakeMode::EXACT);
        assert_eq!(cursor.target(), 4);
    }
}
