// Sat Oct 17 2026 - Alex

use crate::pattern::Pattern;
use std::io::{Cursor, Read, Seek, SeekFrom};

pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

pub fn proptest_cases(default: u32) -> u32 {
    env_u32("PROPTEST_CASES").unwrap_or(default).max(1)
}

/// Every offset where `pattern` matches `data`, overlapping matches included.
pub fn naive_positions(data: &[u8], pattern: &Pattern) -> Vec<u64> {
    if data.len() < pattern.len() {
        return Vec::new();
    }

    data.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| pattern.matches(window))
        .map(|(offset, _)| offset as u64)
        .collect()
}

/// Single-pass windowed scan with no edge reduction and no resumable advance.
pub fn legacy_find_all<S: Read + Seek>(stream: &mut S, pattern: &Pattern, buffer_size: usize) -> Vec<u64> {
    let len = pattern.len();
    let stream_len = stream.seek(SeekFrom::End(0)).unwrap();
    let mut buffer = vec![0u8; buffer_size + len - 1];
    let mut found = Vec::new();
    let mut position = 0u64;

    stream.seek(SeekFrom::Start(0)).unwrap();
    loop {
        let bytes_read = crate::stream::scanner::read_full(stream, &mut buffer).unwrap();
        if bytes_read < len {
            break;
        }

        for i in 0..=bytes_read - len {
            if pattern.matches(&buffer[i..i + len]) {
                found.push(position + i as u64);
            }
        }

        position += (bytes_read - len + 1) as u64;
        if position + len as u64 > stream_len {
            break;
        }
        stream.seek(SeekFrom::Start(position)).unwrap();
    }

    found
}

/// A stream that never hands out more than `chunk` bytes per read call.
pub struct ChunkedReader {
    inner: Cursor<Vec<u8>>,
    chunk: usize,
}

impl ChunkedReader {
    pub fn new(data: Vec<u8>, chunk: usize) -> Self {
        Self {
            inner: Cursor::new(data),
            chunk,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let len = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..len])
    }
}

impl Seek for ChunkedReader {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}
