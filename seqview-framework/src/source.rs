//! Cursors built from plain Rust iterators.
//!
//! [`SinglePass`] models input that can only be read once, such as a socket
//! or a decompressor. [`Forward`] models a restartable source: cloning the
//! cursor gives an independent traversal.

use crate::cursor::Cursor;
use seqview_common::{Capabilities, Result};
use std::fmt;
use std::iter::Fuse;

/// A single-pass cursor over an iterator, with one element of lookahead.
pub struct SinglePass<I: Iterator> {
    iter: Fuse<I>,
    peeked: Option<I::Item>,
    consumed: usize,
}

impl<I: Iterator> SinglePass<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter().fuse(),
            peeked: None,
            consumed: 0,
        }
    }

    /// Number of elements consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn fill(&mut self) {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
    }
}

impl<I> fmt::Debug for SinglePass<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglePass")
            .field("peeked", &self.peeked)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

impl<I> Cursor for SinglePass<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn peek(&mut self) -> Result<Option<I::Item>> {
        self.fill();
        Ok(self.peeked.clone())
    }

    fn advance(&mut self) -> Result<()> {
        self.fill();
        if self.peeked.take().is_some() {
            self.consumed += 1;
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SINGLE_PASS
    }

    fn next_item(&mut self) -> Result<Option<I::Item>> {
        self.fill();
        let item = self.peeked.take();
        if item.is_some() {
            self.consumed += 1;
        }
        Ok(item)
    }
}

/// A forward cursor over a cloneable iterator.
pub struct Forward<I: Iterator> {
    iter: I,
    peeked: Option<Option<I::Item>>,
}

impl<I: Iterator + Clone> Forward<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
            peeked: None,
        }
    }

    fn exact_len(&self) -> Option<usize> {
        let pending = match &self.peeked {
            Some(Some(_)) => 1,
            Some(None) => return Some(0),
            None => 0,
        };
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower + pending),
            _ => None,
        }
    }
}

impl<I> Clone for Forward<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            peeked: self.peeked.clone(),
        }
    }
}

impl<I> fmt::Debug for Forward<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forward")
            .field("peeked", &self.peeked)
            .field("remaining", &self.exact_len())
            .finish_non_exhaustive()
    }
}

impl<I> Cursor for Forward<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    fn peek(&mut self) -> Result<Option<I::Item>> {
        let iter = &mut self.iter;
        Ok(self.peeked.get_or_insert_with(|| iter.next()).clone())
    }

    fn advance(&mut self) -> Result<()> {
        if self.peeked.take().is_none() {
            self.iter.next();
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        if self.exact_len().is_some() {
            Capabilities::FORWARD.with_size()
        } else {
            Capabilities::FORWARD
        }
    }

    fn remaining(&self) -> Option<usize> {
        self.exact_len()
    }

    fn next_item(&mut self) -> Result<Option<I::Item>> {
        Ok(match self.peeked.take() {
            Some(item) => item,
            None => self.iter.next(),
        })
    }
}
