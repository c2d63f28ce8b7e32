// Fri Oct 16 2026 - Alex

use crate::pattern::{normalize, Pattern, ReducedPattern};
use crate::stream::{StreamError, WindowedScanner};
use std::io::{Read, Seek};
use std::iter::FusedIterator;

/// Where the next scan resumes after a hit at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Advance {
    /// Resume at `offset + 1`; matches may overlap.
    #[default]
    Overlapping,
    /// Resume at `offset + pattern.len()`; matches never overlap.
    Disjoint,
}

/// Lazily yields match offsets in strictly increasing order.
///
/// All-wildcard patterns always tile the stream (`0, len, 2 * len, ...`) whatever the
/// requested [`Advance`]. After an error the iterator is exhausted.
pub struct MatchIterator<'a, S> {
    scanner: &'a mut WindowedScanner,
    stream: &'a mut S,
    stream_len: u64,
    pattern: ReducedPattern<'a>,
    step: u64,
    next: Option<u64>,
}

impl<'a, S: Read + Seek> MatchIterator<'a, S> {
    pub fn new(
        scanner: &'a mut WindowedScanner,
        stream: &'a mut S,
        stream_len: u64,
        pattern: &'a Pattern,
        start: u64,
        advance: Advance,
    ) -> Self {
        let reduced = normalize(pattern);
        let step = if reduced.is_empty() || advance == Advance::Disjoint {
            pattern.len() as u64
        } else {
            1
        };

        Self {
            scanner,
            stream,
            stream_len,
            pattern: reduced,
            step,
            next: Some(start),
        }
    }

    pub fn resume_position(&self) -> Option<u64> {
        self.next
    }
}

impl<'a, S: Read + Seek> Iterator for MatchIterator<'a, S> {
    type Item = Result<u64, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next.take()?;

        match self.scanner.scan(self.stream, self.stream_len, &self.pattern, start) {
            Ok(Some(offset)) => {
                self.next = offset.checked_add(self.step);
                Some(Ok(offset))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<'a, S: Read + Seek> FusedIterator for MatchIterator<'a, S> {}
