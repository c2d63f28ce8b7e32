// Fri Oct 16 2026 - Alex

use crate::pattern::error::PatternError;
use std::fmt;

/// A fixed-length byte sequence where any position may be a single-byte wildcard.
///
/// `wildcards[i] == true` means position `i` matches any byte value.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    wildcards: Vec<bool>,
}

impl Pattern {
    pub fn new(bytes: Vec<u8>) -> Result<Self, PatternError> {
        let wildcards = vec![false; bytes.len()];
        Self::with_wildcards(bytes, wildcards)
    }

    pub fn with_wildcards(bytes: Vec<u8>, wildcards: Vec<bool>) -> Result<Self, PatternError> {
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        if bytes.len() != wildcards.len() {
            return Err(PatternError::MaskLengthMismatch {
                bytes: bytes.len(),
                mask: wildcards.len(),
            });
        }

        Ok(Self { bytes, wildcards })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PatternError> {
        Self::new(bytes.to_vec())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn wildcards(&self) -> &[bool] {
        &self.wildcards
    }

    pub fn has_wildcards(&self) -> bool {
        self.wildcards.iter().any(|&w| w)
    }

    pub fn is_all_wildcards(&self) -> bool {
        self.wildcards.iter().all(|&w| w)
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }

        self.bytes.iter()
            .zip(self.wildcards.iter())
            .zip(data.iter())
            .all(|((pattern_byte, &wildcard), &data_byte)| {
                wildcard || *pattern_byte == data_byte
            })
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes.iter()
            .zip(self.wildcards.iter())
            .map(|(b, &w)| {
                if w {
                    "??".to_string()
                } else {
                    format!("{:02X}", b)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

// Bytes under a wildcard carry no meaning, so they are ignored.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.wildcards == other.wildcards
            && self.bytes.iter()
                .zip(other.bytes.iter())
                .zip(self.wildcards.iter())
                .all(|((a, b), &w)| w || a == b)
    }
}

impl Eq for Pattern {}

pub struct PatternBuilder {
    bytes: Vec<u8>,
    wildcards: Vec<bool>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            wildcards: Vec::new(),
        }
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.bytes.push(b);
        self.wildcards.push(false);
        self
    }

    pub fn bytes(mut self, bs: &[u8]) -> Self {
        for &b in bs {
            self.bytes.push(b);
            self.wildcards.push(false);
        }
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.bytes.push(0);
        self.wildcards.push(true);
        self
    }

    pub fn wildcards(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.bytes.push(0);
            self.wildcards.push(true);
        }
        self
    }

    pub fn build(self) -> Result<Pattern, PatternError> {
        Pattern::with_wildcards(self.bytes, self.wildcards)
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}
