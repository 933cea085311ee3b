//! Byte-pattern search over seekable streams.
//!
//! The scan is deliberately naive: a window the size of the pattern is read,
//! compared, and on mismatch the stream is rewound by `len - 1` bytes so the
//! next window starts one byte later. Worst case is O(n·m), which is fine for
//! the short magic strings and markers this is used to locate.

use std::io::{ErrorKind, SeekFrom};

use crate::ReadSeek;
use crate::error::{Error, Result};

/// Scan `reader` forward from its current position for `pattern`.
///
/// Returns the absolute offset immediately after the first match, or `None`
/// once the stream runs out (including a final window shorter than the
/// pattern). On `None` the reader is left at end-of-stream.
///
/// Real I/O failures are returned as [`Error::Io`]; reaching the end of the
/// stream is never an error.
pub fn seek_to(reader: &mut dyn ReadSeek, pattern: &[u8]) -> Result<Option<u64>> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }

    let size = pattern.len();
    let rewind = 1 - size as i64;
    let mut window = vec![0u8; size];

    loop {
        let n = read_window(reader, &mut window)?;
        if n < size {
            return Ok(None);
        }
        if window == pattern {
            return Ok(Some(reader.stream_position()?));
        }
        if rewind != 0 {
            reader.seek(SeekFrom::Current(rewind))?;
        }
    }
}

/// Fill `buf` from `reader`, tolerating short reads.
///
/// Returns the number of bytes actually read; less than `buf.len()` only at
/// end-of-stream.
fn read_window(reader: &mut dyn ReadSeek, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
