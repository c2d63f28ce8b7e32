// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::pattern::Pattern;
use crate::stream::{
    self, check_fits, Advance, MatchIterator, StreamError, StreamMutator, WindowedScanner,
    DEFAULT_BUFFER_SIZE,
};
use crate::utils::scoped_timer;
use std::io::{Read, Seek, Write};

/// Find and replace fixed-length byte patterns inside a seekable stream.
///
/// The engine owns the stream for its lifetime (pass `&mut File` to keep ownership
/// with the caller). Every call is a fresh scan; nothing is remembered between calls
/// other than the reusable window buffer. Memory use is bounded by the buffer size
/// plus one pattern length, whatever the size of the stream.
///
/// Replace operations always write fixed-width and never change the stream length.
/// Multi-match writes are not transactional: an I/O error part way through leaves
/// the earlier writes in place.
pub struct Engine<S> {
    stream: S,
    scanner: WindowedScanner,
}

impl<S> Engine<S> {
    pub fn buffer_size(&self) -> usize {
        self.scanner.buffer_size()
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    fn check_pattern(&self, pattern: &Pattern) -> Result<(), StreamError> {
        if pattern.len() > self.buffer_size() {
            return Err(StreamError::invalid(format!(
                "Find size {} is too large for buffer size {}",
                pattern.len(),
                self.buffer_size()
            )));
        }
        Ok(())
    }
}

impl<S: Read + Seek> Engine<S> {
    pub fn new(stream: S) -> Result<Self, StreamError> {
        Self::with_buffer_size(stream, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_buffer_size(stream: S, buffer_size: usize) -> Result<Self, StreamError> {
        Ok(Self {
            stream,
            scanner: WindowedScanner::new(buffer_size)?,
        })
    }

    pub fn from_config(stream: S, config: &Config) -> Result<Self, StreamError> {
        Self::with_buffer_size(stream, config.buffer_size)
    }

    pub fn stream_len(&mut self) -> Result<u64, StreamError> {
        stream::stream_len(&mut self.stream)
    }

    /// Lazily iterates over the matches of `pattern` at or after `start`.
    pub fn matches<'a>(
        &'a mut self,
        pattern: &'a Pattern,
        start: u64,
        advance: Advance,
    ) -> Result<MatchIterator<'a, S>, StreamError> {
        self.check_pattern(pattern)?;
        let stream_len = self.stream_len()?;
        if start > stream_len {
            return Err(StreamError::OutOfRange {
                offset: start,
                len: 0,
                stream_len,
            });
        }

        Ok(MatchIterator::new(
            &mut self.scanner,
            &mut self.stream,
            stream_len,
            pattern,
            start,
            advance,
        ))
    }

    pub fn find_first(&mut self, pattern: &Pattern) -> Result<Option<u64>, StreamError> {
        self.find_from(pattern, 0)
    }

    pub fn find_from(&mut self, pattern: &Pattern, position: u64) -> Result<Option<u64>, StreamError> {
        log::debug!("find {} from {}", pattern, position);
        self.matches(pattern, position, Advance::Overlapping)?
            .next()
            .transpose()
    }

    pub fn find_n(&mut self, pattern: &Pattern, amount: usize) -> Result<Vec<u64>, StreamError> {
        self.find_n_from(pattern, 0, amount)
    }

    pub fn find_n_from(&mut self, pattern: &Pattern, position: u64, amount: usize) -> Result<Vec<u64>, StreamError> {
        log::debug!("find up to {} of {} from {}", amount, pattern, position);
        self.collect(pattern, position, Some(amount), Advance::Overlapping)
    }

    pub fn find_all(&mut self, pattern: &Pattern) -> Result<Vec<u64>, StreamError> {
        self.find_all_from(pattern, 0)
    }

    pub fn find_all_from(&mut self, pattern: &Pattern, position: u64) -> Result<Vec<u64>, StreamError> {
        let _timer = scoped_timer("find_all");
        log::debug!("find all of {} from {}", pattern, position);
        self.collect(pattern, position, None, Advance::Overlapping)
    }

    fn collect(
        &mut self,
        pattern: &Pattern,
        start: u64,
        amount: Option<usize>,
        advance: Advance,
    ) -> Result<Vec<u64>, StreamError> {
        self.check_pattern(pattern)?;

        if let Some(amount) = amount {
            let stream_len = self.stream_len()?;
            if amount as u64 > stream_len {
                return Err(StreamError::invalid(format!(
                    "amount {} should not exceed the {} bytes in the stream",
                    amount, stream_len
                )));
            }
        }

        let matches = self.matches(pattern, start, advance)?;
        match amount {
            Some(amount) => matches.take(amount).collect(),
            None => matches.collect(),
        }
    }
}

impl<S: Read + Write + Seek> Engine<S> {
    fn check_same_len(pattern: &Pattern, replacement: &Pattern) -> Result<(), StreamError> {
        if pattern.len() != replacement.len() {
            return Err(StreamError::invalid(format!(
                "Find and replace must be same length ({} != {})",
                pattern.len(),
                replacement.len()
            )));
        }
        Ok(())
    }

    fn patch_first(&mut self, pattern: &Pattern, patch: &Pattern) -> Result<Option<u64>, StreamError> {
        let found = self.matches(pattern, 0, Advance::Disjoint)?
            .next()
            .transpose()?;

        if let Some(offset) = found {
            let stream_len = self.stream_len()?;
            StreamMutator::new(&mut self.stream, stream_len).apply(offset, patch)?;
        }

        Ok(found)
    }

    fn patch_matches(
        &mut self,
        pattern: &Pattern,
        patch: &Pattern,
        amount: Option<usize>,
    ) -> Result<Vec<u64>, StreamError> {
        let offsets = self.collect(pattern, 0, amount, Advance::Disjoint)?;
        let stream_len = self.stream_len()?;

        // Nothing is written unless every write fits.
        for &offset in &offsets {
            check_fits(offset, patch.len(), stream_len)?;
        }

        let mut mutator = StreamMutator::new(&mut self.stream, stream_len);
        for &offset in &offsets {
            mutator.apply(offset, patch)?;
        }

        Ok(offsets)
    }

    pub fn replace_once(&mut self, pattern: &Pattern, replacement: &Pattern) -> Result<Option<u64>, StreamError> {
        Self::check_same_len(pattern, replacement)?;
        self.check_pattern(pattern)?;

        let found = self.patch_first(pattern, replacement)?;
        match found {
            Some(offset) => log::info!("replaced {} at {}", pattern, offset),
            None => log::debug!("{} not found", pattern),
        }
        Ok(found)
    }

    pub fn replace_n(
        &mut self,
        pattern: &Pattern,
        replacement: &Pattern,
        amount: usize,
    ) -> Result<Vec<u64>, StreamError> {
        Self::check_same_len(pattern, replacement)?;

        let offsets = self.patch_matches(pattern, replacement, Some(amount))?;
        log::info!("replaced {} of up to {} occurrences of {}", offsets.len(), amount, pattern);
        Ok(offsets)
    }

    pub fn replace_all(&mut self, pattern: &Pattern, replacement: &Pattern) -> Result<Vec<u64>, StreamError> {
        let _timer = scoped_timer("replace_all");
        Self::check_same_len(pattern, replacement)?;

        let offsets = self.patch_matches(pattern, replacement, None)?;
        log::info!("replaced {} occurrences of {}", offsets.len(), pattern);
        Ok(offsets)
    }

    /// Overwrites `insert` at the first match. `insert` may be longer or shorter than
    /// `pattern`, but must fit inside the stream.
    pub fn overwrite_first(&mut self, pattern: &Pattern, insert: &Pattern) -> Result<Option<u64>, StreamError> {
        self.check_pattern(pattern)?;

        let found = self.matches(pattern, 0, Advance::Disjoint)?
            .next()
            .transpose()?;

        if let Some(offset) = found {
            let stream_len = self.stream_len()?;
            check_fits(offset, insert.len(), stream_len)?;
            StreamMutator::new(&mut self.stream, stream_len).apply(offset, insert)?;
            log::info!("overwrote {} bytes at {}", insert.len(), offset);
        }

        Ok(found)
    }

    pub fn overwrite_n(&mut self, pattern: &Pattern, insert: &Pattern, amount: usize) -> Result<Vec<u64>, StreamError> {
        let offsets = self.patch_matches(pattern, insert, Some(amount))?;
        log::info!("overwrote {} bytes at {} positions", insert.len(), offsets.len());
        Ok(offsets)
    }

    pub fn overwrite_all(&mut self, pattern: &Pattern, insert: &Pattern) -> Result<Vec<u64>, StreamError> {
        let _timer = scoped_timer("overwrite_all");
        let offsets = self.patch_matches(pattern, insert, None)?;
        log::info!("overwrote {} bytes at {} positions", insert.len(), offsets.len());
        Ok(offsets)
    }

    /// Writes `insert` at an explicit offset; wildcard positions keep their bytes.
    pub fn paste_at(&mut self, offset: u64, insert: &Pattern) -> Result<(), StreamError> {
        let stream_len = self.stream_len()?;
        StreamMutator::new(&mut self.stream, stream_len).apply(offset, insert)?;
        log::info!("pasted {} bytes at {}", insert.len(), offset);
        Ok(())
    }
}
