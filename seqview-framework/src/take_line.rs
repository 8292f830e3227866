//! Line views: the prefix of a sequence up to its first line terminator.
//!
//! CR, LF and CRLF all end a line. The terminator is never part of the line.
//! On a single-pass source the line view consumes the terminator as it
//! reaches it, so the next line view over the same handle starts on the
//! following line. On a forward source the terminator is left in place and
//! the caller skips it with [`skip_line_terminator`].

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::view::{all, View};
use bitflags::bitflags;
use seqview_common::{Capabilities, EndOfInput, Result, ViewError};
use tracing::{debug, trace};

/// Elements that can terminate a line.
pub trait LineElement {
    fn is_cr(&self) -> bool;

    fn is_lf(&self) -> bool;

    fn is_eol(&self) -> bool {
        self.is_cr() || self.is_lf()
    }
}

impl LineElement for u8 {
    fn is_cr(&self) -> bool {
        *self == b'\r'
    }

    fn is_lf(&self) -> bool {
        *self == b'\n'
    }
}

impl LineElement for char {
    fn is_cr(&self) -> bool {
        *self == '\r'
    }

    fn is_lf(&self) -> bool {
        *self == '\n'
    }
}

bitflags! {
    /// Behaviour of a line view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineMode: u8 {
        /// Fail if the input ends before a line terminator.
        const REQUIRE_EOL = 1 << 0;
    }
}

/// Cursor over one line of an underlying cursor.
#[derive(Debug, Clone)]
pub struct LineCursor<C> {
    inner: C,
    mode: LineMode,
    single_pass: bool,
    exhausted: bool,
}

impl<C: Cursor> LineCursor<C>
where
    C::Item: LineElement,
{
    pub fn new(inner: C, mode: LineMode) -> Self {
        let single_pass = inner.capabilities().is_input_only();
        Self {
            inner,
            mode,
            single_pass,
            exhausted: false,
        }
    }

    /// Returns true once a single-pass line has consumed its terminator or
    /// reached the end of input.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn finish(&mut self) -> Result<()> {
        skip_line_terminator(&mut self.inner)?;
        self.exhausted = true;
        Ok(())
    }
}

impl<C: Cursor> Cursor for LineCursor<C>
where
    C::Item: LineElement,
{
    type Item = C::Item;

    fn peek(&mut self) -> Result<Option<C::Item>> {
        if self.exhausted {
            return Ok(None);
        }
        match self.inner.peek()? {
            Some(item) if item.is_eol() => Ok(None),
            Some(item) => Ok(Some(item)),
            None if self.mode.contains(LineMode::REQUIRE_EOL) => Err(missing_terminator()),
            None => Ok(None),
        }
    }

    fn advance(&mut self) -> Result<()> {
        if self.exhausted {
            return Ok(());
        }
        match self.inner.peek()? {
            Some(item) if !item.is_eol() => {
                self.inner.advance()?;
                if self.single_pass && skip_line_terminator(&mut self.inner)? > 0 {
                    self.exhausted = true;
                }
            }
            None if self.mode.contains(LineMode::REQUIRE_EOL) => {
                return Err(missing_terminator());
            }
            // At the terminator or the end of input: only a single-pass
            // line moves past it.
            _ if self.single_pass => self.finish()?,
            _ => {}
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        self.inner.capabilities().sequential()
    }

    fn next_item(&mut self) -> Result<Option<C::Item>> {
        let item = self.peek()?;
        if item.is_some() || self.single_pass {
            self.advance()?;
        }
        Ok(item)
    }
}

impl<C: Cursor> Iterator for LineCursor<C>
where
    C::Item: LineElement,
{
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item().transpose()
    }
}

fn missing_terminator() -> ViewError {
    debug!("line view ran out of input before a terminator");
    ViewError::UnexpectedEndOfInput(EndOfInput::BeforeEndOfLine)
}

/// Skips one line terminator (CR, LF or CRLF) under the cursor.
///
/// Returns the number of elements skipped, zero if the cursor is not on a
/// terminator.
pub fn skip_line_terminator<C>(cursor: &mut C) -> Result<usize>
where
    C: Cursor + ?Sized,
    C::Item: LineElement,
{
    match cursor.peek()? {
        Some(item) if item.is_cr() => {
            cursor.advance()?;
            if matches!(cursor.peek()?, Some(next) if next.is_lf()) {
                cursor.advance()?;
                Ok(2)
            } else {
                Ok(1)
            }
        }
        Some(item) if item.is_lf() => {
            cursor.advance()?;
            Ok(1)
        }
        _ => Ok(0),
    }
}

fn line<'a, S>(sequence: S, mode: LineMode) -> LineCursor<View<'a, S::Item, S::Cursor>>
where
    S: Sequence<'a>,
    S::Item: LineElement + Clone,
{
    let view = all(sequence);
    let cursor = LineCursor::new(view, mode);
    trace!(
        single_pass = cursor.single_pass,
        ?mode,
        "built line view"
    );
    cursor
}

/// The elements of `sequence` up to, not including, the first line terminator.
///
/// If no terminator is found the whole sequence is the line. On a single-pass
/// sequence the terminator is consumed once the line has been read.
pub fn take_line<'a, S>(sequence: S) -> LineCursor<View<'a, S::Item, S::Cursor>>
where
    S: Sequence<'a>,
    S::Item: LineElement + Clone,
{
    line(sequence, LineMode::empty())
}

/// Like [`take_line`], but reaching the end of input before a terminator is
/// an [`EndOfInput::BeforeEndOfLine`] error.
pub fn take_line_or_throw<'a, S>(sequence: S) -> LineCursor<View<'a, S::Item, S::Cursor>>
where
    S: Sequence<'a>,
    S::Item: LineElement + Clone,
{
    line(sequence, LineMode::REQUIRE_EOL)
}

/// Iterator over the materialized lines of a cursor.
///
/// A single-pass source yields its lines by repeatedly taking a line from
/// the same handle. A forward source has each terminator skipped explicitly
/// after its line. Both give the same records.
#[derive(Debug)]
pub struct Lines<C> {
    source: C,
    mode: LineMode,
    failed: bool,
}

/// Iterates over the lines of `source`.
pub fn lines<C>(source: C) -> Lines<C>
where
    C: Cursor,
    C::Item: LineElement,
{
    Lines::with_mode(source, LineMode::empty())
}

impl<C> Lines<C>
where
    C: Cursor,
    C::Item: LineElement,
{
    pub fn with_mode(source: C, mode: LineMode) -> Self {
        Self {
            source,
            mode,
            failed: false,
        }
    }

    pub fn into_inner(self) -> C {
        self.source
    }

    fn read_line(&mut self) -> Result<Option<Vec<C::Item>>> {
        if self.source.peek()?.is_none() {
            return Ok(None);
        }
        let line = LineCursor::new(&mut self.source, self.mode).materialize()?;
        if !self.source.capabilities().is_input_only() {
            skip_line_terminator(&mut self.source)?;
        }
        Ok(Some(line))
    }
}

impl<C> Iterator for Lines<C>
where
    C: Cursor,
    C::Item: LineElement,
{
    type Item = Result<Vec<C::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = self.read_line().transpose();
        if matches!(line, Some(Err(_))) {
            self.failed = true;
        }
        line
    }
}

impl<C> std::iter::FusedIterator for Lines<C>
where
    C: Cursor,
    C::Item: LineElement,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SinglePass;

    #[test]
    fn test_skip_line_terminator() {
        let mut cursor = SinglePass::new(b"\r\n\n\rx".iter().copied());
        assert_eq!(skip_line_terminator(&mut cursor).unwrap(), 2);
        assert_eq!(skip_line_terminator(&mut cursor).unwrap(), 1);
        assert_eq!(skip_line_terminator(&mut cursor).unwrap(), 1);
        assert_eq!(skip_line_terminator(&mut cursor).unwrap(), 0);
        assert_eq!(cursor.peek().unwrap(), Some(b'x'));
    }

    #[test]
    fn test_char_line_element() {
        assert!('\r'.is_eol());
        assert!('\n'.is_lf());
        assert!(!'a'.is_eol());
    }

    #[test]
    fn test_single_pass_line_sets_exhausted() {
        let mut source = SinglePass::new("ab\ncd".chars());
        let mut line = LineCursor::new(&mut source, LineMode::empty());
        assert_eq!(line.next_item().unwrap(), Some('a'));
        assert!(!line.is_exhausted());
        assert_eq!(line.next_item().unwrap(), Some('b'));
        assert!(line.is_exhausted());
        assert_eq!(line.peek().unwrap(), None);
        assert_eq!(source.peek().unwrap(), Some('c'));
    }
}
