// Fri Oct 16 2026 - Alex

use crate::pattern::Pattern;
use crate::stream::StreamError;
use std::io::{Seek, SeekFrom, Write};

pub fn check_fits(offset: u64, len: usize, stream_len: u64) -> Result<(), StreamError> {
    let fits = offset <= stream_len
        && offset
            .checked_add(len as u64)
            .map_or(false, |end| end <= stream_len);

    if fits {
        Ok(())
    } else {
        Err(StreamError::OutOfRange {
            offset,
            len: len as u64,
            stream_len,
        })
    }
}

/// Fixed-width, in-place writes. Never grows the stream.
pub struct StreamMutator<'a, S> {
    stream: &'a mut S,
    stream_len: u64,
}

impl<'a, S: Write + Seek> StreamMutator<'a, S> {
    pub fn new(stream: &'a mut S, stream_len: u64) -> Self {
        Self { stream, stream_len }
    }

    pub fn stream_len(&self) -> u64 {
        self.stream_len
    }

    pub fn overwrite(&mut self, offset: u64, bytes: &[u8]) -> Result<(), StreamError> {
        check_fits(offset, bytes.len(), self.stream_len)?;

        self.stream.seek(SeekFrom::Start(offset))?;
        self.stream.write_all(bytes)?;
        self.stream.flush()?;
        Ok(())
    }

    /// Writes `bytes` at `offset`, leaving every position flagged in `mask` untouched.
    pub fn overwrite_masked(&mut self, offset: u64, bytes: &[u8], mask: &[bool]) -> Result<(), StreamError> {
        if bytes.len() != mask.len() {
            return Err(StreamError::invalid("wildcard mask and sequence bytes must be same length"));
        }
        check_fits(offset, bytes.len(), self.stream_len)?;

        let mut index = 0;
        while index < bytes.len() {
            if mask[index] {
                index += 1;
                continue;
            }

            let run_end = mask[index..].iter()
                .position(|&wildcard| wildcard)
                .map_or(bytes.len(), |relative| index + relative);

            self.stream.seek(SeekFrom::Start(offset + index as u64))?;
            self.stream.write_all(&bytes[index..run_end])?;
            index = run_end;
        }

        self.stream.flush()?;
        Ok(())
    }

    pub fn apply(&mut self, offset: u64, patch: &Pattern) -> Result<(), StreamError> {
        if patch.has_wildcards() {
            self.overwrite_masked(offset, patch.bytes(), patch.wildcards())
        } else {
            self.overwrite(offset, patch.bytes())
        }
    }
}
