use crate::error::Result;
use crate::result::SearchResult;
use crate::search::{find_bounded, find_byte, find_from, positions};

/// Holds the byte to look for so the same search can be run over many buffers.
/// Keeps no reference to any buffer between calls.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ByteFinder {
    target: u8,
}

impl ByteFinder {
    #[must_use]
    pub const fn new(target: u8) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> u8 {
        self.target
    }

    #[must_use]
    #[inline]
    pub fn find_in(&self, bytes: &[u8]) -> SearchResult {
        find_byte(self.target, bytes).into()
    }

    /// Scans the first `length` bytes of `bytes`.
    #[inline]
    pub fn find(&self, bytes: &[u8], length: usize) -> Result<SearchResult> {
        Ok(find_bounded(self.target, bytes, length)?.into())
    }

    #[inline]
    pub fn find_from(&self, bytes: &[u8], offset: usize) -> Result<SearchResult> {
        Ok(find_from(self.target, bytes, offset)?.into())
    }

    #[inline]
    pub fn positions<const N: usize>(&self, bytes: &[u8]) -> Result<heapless::Vec<usize, N>> {
        positions(self.target, bytes)
    }
}
