use bytefind_utils::debug;

use crate::error::{Error, Result};

pub mod positions;

pub use positions::positions;

/// First index of `tgt` in `bytes`, scanning from the front.
#[must_use]
#[inline]
pub fn find_byte(tgt: u8, bytes: &[u8]) -> Option<usize> {
    for (ind, byte) in bytes.iter().enumerate() {
        if byte == &tgt {
            return Some(ind);
        }
    }
    None
}

/// Like [`find_byte`] but only the first `len` bytes are looked at.
/// A `len` past the end of `bytes` is an error rather than a short scan.
#[inline]
pub fn find_bounded(tgt: u8, bytes: &[u8], len: usize) -> Result<Option<usize>> {
    let Some(bounded) = bytes.get(..len) else {
        debug!("Search length {len} rejected, buffer has {} bytes", bytes.len());
        return Err(Error::LengthOutOfBounds {
            length: len,
            available: bytes.len(),
        });
    };
    Ok(find_byte(tgt, bounded))
}

/// First index at or after `offset` holding `tgt`, relative to the start of `bytes`.
#[inline]
pub fn find_from(tgt: u8, bytes: &[u8], offset: usize) -> Result<Option<usize>> {
    let Some(tail) = bytes.get(offset..) else {
        debug!("Search offset {offset} rejected, buffer has {} bytes", bytes.len());
        return Err(Error::OffsetOutOfBounds {
            offset,
            available: bytes.len(),
        });
    };
    Ok(find_byte(tgt, tail).map(|ind| offset + ind))
}

/// First index where `needle` starts in `haystack`.
/// An empty needle matches at 0.
#[must_use]
pub fn find_in_haystack(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let Some((&first, rest)) = needle.split_first() else {
        return Some(0);
    };
    let last_start = haystack.len().checked_sub(needle.len())?;
    let mut start = 0;
    while start <= last_start {
        let candidate = start + find_byte(first, &haystack[start..=last_start])?;
        if &haystack[candidate + 1..candidate + needle.len()] == rest {
            return Some(candidate);
        }
        start = candidate + 1;
    }
    None
}
