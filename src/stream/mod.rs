// Fri Oct 16 2026 - Alex

pub mod error;
pub mod matcher;
pub mod mutator;
pub mod scanner;

pub use error::StreamError;
pub use matcher::{Advance, MatchIterator};
pub use mutator::{check_fits, StreamMutator};
pub use scanner::{WindowedScanner, DEFAULT_BUFFER_SIZE, MIN_BUFFER_SIZE};

use std::io::{Seek, SeekFrom};

pub fn stream_len<S: Seek>(stream: &mut S) -> Result<u64, StreamError> {
    Ok(stream.seek(SeekFrom::End(0))?)
}
