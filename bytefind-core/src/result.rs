use crate::error::{Error, Result};

/// Sentinel used by index-returning callers for "no match".
pub const NOT_FOUND_SENTINEL: isize = -1;

/// Outcome of a single first-match search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SearchResult {
    Found(usize),
    NotFound,
}

impl SearchResult {
    #[must_use]
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            SearchResult::Found(ind) => Some(ind),
            SearchResult::NotFound => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// Index as a signed integer, `-1` when nothing matched.
    #[inline]
    pub fn to_sentinel(self) -> Result<isize> {
        match self {
            SearchResult::Found(ind) => Ok(isize::try_from(ind)?),
            SearchResult::NotFound => Ok(NOT_FOUND_SENTINEL),
        }
    }

    #[inline]
    pub fn from_sentinel(raw: isize) -> Result<Self> {
        if raw == NOT_FOUND_SENTINEL {
            return Ok(SearchResult::NotFound);
        }
        usize::try_from(raw)
            .map(SearchResult::Found)
            .map_err(|_| Error::InvalidSentinel(raw))
    }
}

impl From<Option<usize>> for SearchResult {
    #[inline]
    fn from(ind: Option<usize>) -> Self {
        ind.map_or(SearchResult::NotFound, SearchResult::Found)
    }
}

impl From<SearchResult> for Option<usize> {
    #[inline]
    fn from(res: SearchResult) -> Self {
        res.index()
    }
}
