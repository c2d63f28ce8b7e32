// Fri Oct 16 2026 - Alex

use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Out of range: {len} bytes at offset {offset} do not fit a stream of {stream_len} bytes")]
    OutOfRange { offset: u64, len: u64, stream_len: u64 },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreamError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Pattern(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
