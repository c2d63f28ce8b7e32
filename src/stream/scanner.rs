// Fri Oct 16 2026 - Alex

use crate::pattern::ReducedPattern;
use crate::stream::StreamError;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

pub const DEFAULT_BUFFER_SIZE: usize = u16::MAX as usize;
pub const MIN_BUFFER_SIZE: usize = 2;

/// Finds reduced patterns in a seekable stream using a bounded, reusable window.
///
/// Each window holds up to `buffer_size + pattern_len - 1` bytes, and consecutive
/// windows overlap by `pattern_len - 1` bytes so a match straddling two reads is
/// still seen whole by one of them.
#[derive(Debug)]
pub struct WindowedScanner {
    buffer_size: usize,
    window: Vec<u8>,
    probe: Vec<u8>,
}

impl WindowedScanner {
    pub fn new(buffer_size: usize) -> Result<Self, StreamError> {
        if buffer_size < MIN_BUFFER_SIZE {
            return Err(StreamError::invalid(format!(
                "buffer size {} is less than {} bytes",
                buffer_size, MIN_BUFFER_SIZE
            )));
        }

        Ok(Self {
            buffer_size,
            window: Vec::new(),
            probe: Vec::new(),
        })
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn window_capacity(&self, pattern_len: usize) -> usize {
        self.buffer_size + pattern_len.saturating_sub(1)
    }

    /// Returns the offset of the first occurrence of the full (unreduced) pattern that
    /// starts at or after `start`.
    pub fn scan<S: Read + Seek>(
        &mut self,
        stream: &mut S,
        stream_len: u64,
        pattern: &ReducedPattern<'_>,
        start: u64,
    ) -> Result<Option<u64>, StreamError> {
        let original_len = pattern.original_len();
        if original_len > self.buffer_size {
            return Err(StreamError::invalid(format!(
                "Find size {} is too large for buffer size {}",
                original_len, self.buffer_size
            )));
        }

        match start.checked_add(original_len as u64) {
            Some(end) if end <= stream_len => {}
            _ => return Ok(None),
        }

        let (anchor, needle_len) = match pattern.first_byte() {
            Some(anchor) => (anchor, pattern.len()),
            // Nothing left to compare; any in-bounds start is a match.
            None => return Ok(Some(start)),
        };

        // Candidates are clamped so both edge runs always lie inside the stream.
        let limit = stream_len - pattern.skipped_from_end() as u64;
        let mut position = pattern.candidate_offset(start);

        let capacity = self.window_capacity(needle_len);
        if self.window.len() < capacity {
            self.window.resize(capacity, 0);
        }

        while position + needle_len as u64 <= limit {
            let want = (limit - position).min(capacity as u64) as usize;
            stream.seek(SeekFrom::Start(position))?;
            let bytes_read = read_full(stream, &mut self.window[..want])?;
            log::trace!("window at {} ({} of {} bytes)", position, bytes_read, want);

            if bytes_read < needle_len {
                break;
            }

            let last = bytes_read - needle_len;
            let mut index = 0;
            while index <= last {
                let found = match self.window[index..=last].iter().position(|&b| b == anchor) {
                    Some(relative) => index + relative,
                    None => break,
                };
                index = found + 1;

                if !pattern.matches(&self.window[found..found + needle_len]) {
                    continue;
                }

                let candidate = position + found as u64;
                if pattern.needs_edge_probe()
                    && !self.edges_match(stream, pattern, candidate, position, bytes_read)?
                {
                    log::trace!("edge probe rejected candidate at {}", candidate);
                    continue;
                }

                return Ok(Some(pattern.original_offset(candidate)));
            }

            position += (last + 1) as u64;
        }

        Ok(None)
    }

    fn edges_match<S: Read + Seek>(
        &mut self,
        stream: &mut S,
        pattern: &ReducedPattern<'_>,
        candidate: u64,
        window_start: u64,
        window_len: usize,
    ) -> Result<bool, StreamError> {
        let (first, last) = match (pattern.first_byte(), pattern.last_byte()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(true),
        };

        let lead = pattern.skipped_from_start();
        if lead > 0 {
            let offset = candidate - lead as u64;
            if !self.run_matches(stream, offset, lead, first, window_start, window_len)? {
                return Ok(false);
            }
        }

        let trail = pattern.skipped_from_end();
        if trail > 0 {
            let offset = candidate + pattern.len() as u64;
            if !self.run_matches(stream, offset, trail, last, window_start, window_len)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    // Checks that `len` bytes at `offset` all equal `byte`, from the window when possible.
    fn run_matches<S: Read + Seek>(
        &mut self,
        stream: &mut S,
        offset: u64,
        len: usize,
        byte: u8,
        window_start: u64,
        window_len: usize,
    ) -> Result<bool, StreamError> {
        let end = offset + len as u64;
        if offset >= window_start && end <= window_start + window_len as u64 {
            let from = (offset - window_start) as usize;
            return Ok(self.window[from..from + len].iter().all(|&b| b == byte));
        }

        if self.probe.len() < len {
            self.probe.resize(len, 0);
        }
        stream.seek(SeekFrom::Start(offset))?;
        if read_full(stream, &mut self.probe[..len])? < len {
            return Ok(false);
        }

        Ok(self.probe[..len].iter().all(|&b| b == byte))
    }
}

pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{normalize, Pattern, PatternBuilder};
    use crate::test_utils::{legacy_find_all, naive_positions, proptest_cases, ChunkedReader};
    use proptest::prelude::*;
    use std::io::Cursor;

    const A: u8 = 0xAA;
    const B: u8 = 0xBB;

    fn scan_at(data: &[u8], pattern: &Pattern, buffer_size: usize, start: u64) -> Option<u64> {
        let mut scanner = WindowedScanner::new(buffer_size).unwrap();
        let mut stream = Cursor::new(data.to_vec());
        scanner
            .scan(&mut stream, data.len() as u64, &normalize(pattern), start)
            .unwrap()
    }

    fn scan_all(data: &[u8], pattern: &Pattern, buffer_size: usize) -> Vec<u64> {
        let mut scanner = WindowedScanner::new(buffer_size).unwrap();
        let mut stream = Cursor::new(data.to_vec());
        let reduced = normalize(pattern);
        let mut found = Vec::new();
        let mut start = 0;
        while let Some(offset) = scanner
            .scan(&mut stream, data.len() as u64, &reduced, start)
            .unwrap()
        {
            found.push(offset);
            start = offset + 1;
        }
        found
    }

    #[test]
    fn test_rejects_tiny_buffer() {
        assert!(WindowedScanner::new(1).unwrap_err().is_invalid_argument());
        assert!(WindowedScanner::new(2).is_ok());
    }

    #[test]
    fn test_rejects_pattern_larger_than_buffer() {
        let pattern = Pattern::from_bytes(&[1, 2, 3, 4, 5]).unwrap();
        let mut scanner = WindowedScanner::new(4).unwrap();
        let mut stream = Cursor::new(vec![0u8; 16]);
        let err = scanner.scan(&mut stream, 16, &normalize(&pattern), 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_finds_first_occurrence() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x03, 0x04, 0x07, 0x08];
        let pattern = Pattern::from_bytes(&[0x03, 0x04]).unwrap();
        for buffer_size in 2..=16 {
            assert_eq!(scan_at(&data, &pattern, buffer_size, 0), Some(2));
            assert_eq!(scan_at(&data, &pattern, buffer_size, 3), Some(6));
            assert_eq!(scan_at(&data, &pattern, buffer_size, 7), None);
        }
    }

    #[test]
    fn test_match_straddling_window_boundary() {
        let buffer_size = 8;
        let mut data = vec![0u8; buffer_size * 2];
        data[buffer_size - 2..buffer_size + 2].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let pattern = Pattern::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

        assert_eq!(scan_at(&data, &pattern, buffer_size, 0), Some(buffer_size as u64 - 2));
    }

    #[test]
    fn test_match_at_stream_end() {
        let data = [0x00, 0x00, 0x00, 0x07, 0x08];
        let pattern = Pattern::from_bytes(&[0x07, 0x08]).unwrap();
        assert_eq!(scan_at(&data, &pattern, 2, 0), Some(3));
    }

    #[test]
    fn test_start_past_end_is_not_found() {
        let data = [0x07, 0x08];
        let pattern = Pattern::from_bytes(&[0x07]).unwrap();
        assert_eq!(scan_at(&data, &pattern, 4, 2), None);
        assert_eq!(scan_at(&data, &pattern, 4, u64::MAX), None);
        assert_eq!(scan_at(&[], &pattern, 4, 0), None);
    }

    #[test]
    fn test_reported_offset_includes_trimmed_prefix() {
        let data = [B, A, A, A, B, 0x00];
        let pattern = Pattern::from_bytes(&[A, A, A, B]).unwrap();
        assert_eq!(scan_at(&data, &pattern, 8, 0), Some(1));
    }

    #[test]
    fn test_short_leading_run_is_rejected() {
        let data = [B, A, B, A, A, B];
        let pattern = Pattern::from_bytes(&[A, A, A, B]).unwrap();
        assert_eq!(scan_at(&data, &pattern, 8, 0), None);
    }

    #[test]
    fn test_short_trailing_run_is_rejected() {
        let data = [A, B, B, 0x00, A, B, B, B];
        let pattern = Pattern::from_bytes(&[A, B, B, B]).unwrap();
        assert_eq!(scan_at(&data, &pattern, 8, 0), Some(4));
    }

    #[test]
    fn test_leading_run_probed_outside_window() {
        let data = [0x00, A, A, A, B];
        let pattern = Pattern::from_bytes(&[A, A, A, B]).unwrap();
        assert_eq!(scan_at(&data, &pattern, 4, 0), Some(1));
    }

    #[test]
    fn test_identical_byte_pattern() {
        let data = [A, 0x00, A, A, 0x00, A, A, A];
        let pattern = Pattern::from_bytes(&[A, A, A]).unwrap();
        assert_eq!(scan_all(&data, &pattern, 3), vec![5]);

        let pattern = Pattern::from_bytes(&[A, A]).unwrap();
        assert_eq!(scan_all(&data, &pattern, 2), vec![2, 5, 6]);
    }

    #[test]
    fn test_wildcard_pattern() {
        let data = [0x48, 0x11, 0x5C, 0x48, 0x22, 0x5D, 0x48, 0x33, 0x5C];
        let pattern = PatternBuilder::new().byte(0x48).wildcard().byte(0x5C).build().unwrap();
        assert_eq!(scan_all(&data, &pattern, 3), vec![0, 6]);
    }

    #[test]
    fn test_wildcard_edges_shift_reported_offset() {
        let data = [0x01, 0x02, 0x90, 0x03, 0x04];
        let pattern = PatternBuilder::new().wildcards(2).byte(0x90).wildcard().build().unwrap();
        assert_eq!(scan_at(&data, &pattern, 4, 0), Some(0));
        assert_eq!(scan_at(&data, &pattern, 4, 1), None);
    }

    #[test]
    fn test_all_wildcards_match_at_start() {
        let pattern = PatternBuilder::new().wildcards(3).build().unwrap();
        let data = [0u8; 7];
        assert_eq!(scan_at(&data, &pattern, 4, 0), Some(0));
        assert_eq!(scan_at(&data, &pattern, 4, 4), Some(4));
        assert_eq!(scan_at(&data, &pattern, 4, 5), None);
    }

    #[test]
    fn test_short_reads_are_refilled() {
        let data: Vec<u8> = (0..64u8).collect();
        let pattern = Pattern::from_bytes(&[30, 31, 32]).unwrap();
        let mut scanner = WindowedScanner::new(16).unwrap();
        let mut stream = ChunkedReader::new(data, 3);
        let found = scanner.scan(&mut stream, 64, &normalize(&pattern), 0).unwrap();
        assert_eq!(found, Some(30));
    }

    fn pattern_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<bool>)> {
        (1usize..6).prop_flat_map(|len| {
            (
                prop::collection::vec(0u8..3, len),
                prop::collection::vec(prop::bool::weighted(0.25), len),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(proptest_cases(64)))]

        #[test]
        fn exact_scan_matches_oracles(
            data in prop::collection::vec(0u8..3, 0..96),
            needle in prop::collection::vec(0u8..3, 1..6),
            buffer_size in 6usize..20,
        ) {
            let pattern = Pattern::new(needle).unwrap();
            let expected = naive_positions(&data, &pattern);
            let legacy = legacy_find_all(&mut Cursor::new(data.clone()), &pattern, buffer_size);
            prop_assert_eq!(&legacy, &expected);
            prop_assert_eq!(scan_all(&data, &pattern, buffer_size), expected);
        }

        #[test]
        fn wildcard_scan_matches_naive(
            data in prop::collection::vec(0u8..3, 0..96),
            (bytes, wildcards) in pattern_strategy(),
            buffer_size in 6usize..20,
        ) {
            let pattern = Pattern::with_wildcards(bytes, wildcards).unwrap();
            prop_assume!(!pattern.is_all_wildcards());
            prop_assert_eq!(scan_all(&data, &pattern, buffer_size), naive_positions(&data, &pattern));
        }
    }
}
