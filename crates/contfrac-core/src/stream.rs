//! Single-slot lookahead streams.
//!
//! A [`Stream`] buffers exactly one term pulled from its producer. Looking at
//! that term is free; consuming it advances the producer and cannot be
//! undone. Streams are neither `Clone` nor shareable: every operation takes
//! them by value, so one producer always has one consumer.

use std::fmt;

use crate::{Error, Result};

enum Slot<M> {
    Charged(M),
    Faulted(Error),
    Exhausted,
}

/// A lazily evaluated term stream with one buffered head.
pub struct Stream<M> {
    source: Box<dyn Iterator<Item = Result<M>>>,
    slot: Slot<M>,
}

impl<M: 'static> Stream<M> {
    /// Wraps a producer, eagerly pulling its first term.
    pub fn new<I>(source: I) -> Self
    where
        I: Iterator<Item = Result<M>> + 'static,
    {
        let mut stream = Self {
            source: Box::new(source),
            slot: Slot::Exhausted,
        };
        stream.charge();
        stream
    }

    /// A stream over a fixed list of terms.
    pub fn from_terms<T>(terms: T) -> Self
    where
        T: IntoIterator<Item = M>,
        T::IntoIter: 'static,
    {
        Self::new(terms.into_iter().map(Ok))
    }

    /// A stream with no terms.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    fn charge(&mut self) {
        self.slot = match self.source.next() {
            Some(Ok(term)) => Slot::Charged(term),
            Some(Err(err)) => Slot::Faulted(err),
            None => Slot::Exhausted,
        };
    }

    /// Observes the buffered term without advancing.
    ///
    /// Returns `None` once the stream is exhausted, or when the next pull
    /// failed (the failure is reported by [`Stream::consume`]).
    #[must_use]
    pub fn head(&self) -> Option<&M> {
        match &self.slot {
            Slot::Charged(term) => Some(term),
            Slot::Faulted(_) | Slot::Exhausted => None,
        }
    }

    /// Returns true once every term has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.slot, Slot::Exhausted)
    }

    /// Takes the buffered term and pulls the next one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] when there is nothing left, or the
    /// producer's own error; after an error the stream stays exhausted.
    pub fn consume(&mut self) -> Result<M> {
        match std::mem::replace(&mut self.slot, Slot::Exhausted) {
            Slot::Charged(term) => {
                self.charge();
                Ok(term)
            }
            Slot::Faulted(err) => Err(err),
            Slot::Exhausted => Err(Error::Exhausted),
        }
    }

    /// Consumes up to `n` terms, stopping early at exhaustion.
    ///
    /// # Errors
    ///
    /// Propagates any producer error.
    pub fn take_terms(&mut self, n: usize) -> Result<Vec<M>> {
        let mut terms = Vec::with_capacity(n);
        while terms.len() < n {
            match self.consume() {
                Ok(term) => terms.push(term),
                Err(Error::Exhausted) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(terms)
    }
}

impl<M: 'static> Iterator for Stream<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.consume() {
            Err(Error::Exhausted) => None,
            other => Some(other),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Stream<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Stream");
        match &self.slot {
            Slot::Charged(term) => s.field("head", term),
            Slot::Faulted(err) => s.field("fault", err),
            Slot::Exhausted => s.field("head", &"exhausted"),
        };
        s.finish_non_exhaustive()
    }
}
