// Fri Oct 16 2026 - Alex

use crate::pattern::Pattern;

/// What the bytes trimmed off a pattern's edges are known to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRun {
    /// Trimmed bytes repeat the first (or last) retained byte and still have to be
    /// verified against the stream.
    Repeated,
    /// Trimmed bytes are wildcard positions and match anything inside the stream.
    Wildcard,
}

/// A pattern with its redundant edge runs removed.
///
/// `skipped_from_start + len() + skipped_from_end` always equals the length of the
/// pattern it was built from. Offsets found for the reduced bytes are candidate
/// offsets; subtract `skipped_from_start` to get the offset of the full pattern.
#[derive(Debug, Clone, Copy)]
pub struct ReducedPattern<'a> {
    bytes: &'a [u8],
    wildcards: &'a [bool],
    skipped_from_start: usize,
    skipped_from_end: usize,
    edge: EdgeRun,
}

impl<'a> ReducedPattern<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn wildcards(&self) -> &'a [bool] {
        self.wildcards
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True only for all-wildcard patterns: every in-bounds position is a match.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn original_len(&self) -> usize {
        self.skipped_from_start + self.bytes.len() + self.skipped_from_end
    }

    pub fn skipped_from_start(&self) -> usize {
        self.skipped_from_start
    }

    pub fn skipped_from_end(&self) -> usize {
        self.skipped_from_end
    }

    pub fn edge(&self) -> EdgeRun {
        self.edge
    }

    pub fn needs_edge_probe(&self) -> bool {
        self.edge == EdgeRun::Repeated
            && (self.skipped_from_start > 0 || self.skipped_from_end > 0)
    }

    pub fn first_byte(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    pub fn last_byte(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    pub fn matches(&self, window: &[u8]) -> bool {
        if window.len() < self.bytes.len() {
            return false;
        }

        self.bytes.iter()
            .zip(self.wildcards.iter())
            .zip(window.iter())
            .all(|((&expected, &wildcard), &actual)| wildcard || expected == actual)
    }

    pub fn candidate_offset(&self, original: u64) -> u64 {
        original + self.skipped_from_start as u64
    }

    pub fn original_offset(&self, candidate: u64) -> u64 {
        candidate - self.skipped_from_start as u64
    }
}

pub fn normalize(pattern: &Pattern) -> ReducedPattern<'_> {
    let bytes = pattern.bytes();
    let wildcards = pattern.wildcards();
    let len = bytes.len();

    if pattern.has_wildcards() {
        let skipped_from_start = wildcards.iter().take_while(|&&w| w).count();
        if skipped_from_start == len {
            return ReducedPattern {
                bytes: &bytes[len..],
                wildcards: &wildcards[len..],
                skipped_from_start: len,
                skipped_from_end: 0,
                edge: EdgeRun::Wildcard,
            };
        }

        let skipped_from_end = wildcards.iter().rev().take_while(|&&w| w).count();
        let end = len - skipped_from_end;
        return ReducedPattern {
            bytes: &bytes[skipped_from_start..end],
            wildcards: &wildcards[skipped_from_start..end],
            skipped_from_start,
            skipped_from_end,
            edge: EdgeRun::Wildcard,
        };
    }

    let skipped_from_start = bytes.windows(2)
        .take_while(|pair| pair[0] == pair[1])
        .count();

    // Every byte identical: keep the last one and treat the rest as a leading run.
    let skipped_from_end = if skipped_from_start == len - 1 {
        0
    } else {
        bytes.windows(2)
            .rev()
            .take_while(|pair| pair[0] == pair[1])
            .count()
    };

    let end = len - skipped_from_end;
    ReducedPattern {
        bytes: &bytes[skipped_from_start..end],
        wildcards: &wildcards[skipped_from_start..end],
        skipped_from_start,
        skipped_from_end,
        edge: EdgeRun::Repeated,
    }
}
