use core::fmt::Formatter;
use core::num::TryFromIntError;

use bytefind_utils::from_error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    LengthOutOfBounds { length: usize, available: usize },
    OffsetOutOfBounds { offset: usize, available: usize },
    HeaplessPush(usize),
    InvalidSentinel(isize),
    IndexConversion(TryFromIntError),
}
from_error!(TryFromIntError, Error, IndexConversion);

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::LengthOutOfBounds { length, available } => f.write_fmt(format_args!(
                "Search length {length} exceeds buffer of {available} bytes"
            )),
            Error::OffsetOutOfBounds { offset, available } => f.write_fmt(format_args!(
                "Search offset {offset} is past the end of a buffer of {available} bytes"
            )),
            Error::HeaplessPush(u) => f.write_fmt(format_args!(
                "Failed to push to heapless datastructure, limit was {u}"
            )),
            Error::InvalidSentinel(s) => f.write_fmt(format_args!(
                "Invalid search result sentinel {s}, expected -1 or a non-negative index"
            )),
            Error::IndexConversion(e) => f.write_fmt(format_args!(
                "Failed to convert match index to a sentinel {e}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_length_out_of_bounds() {
        let e = Error::LengthOutOfBounds {
            length: 8,
            available: 3,
        };
        assert_eq!("Search length 8 exceeds buffer of 3 bytes", e.to_string());
    }

    #[test]
    fn converts_int_error() {
        let raw = isize::try_from(usize::MAX).unwrap_err();
        let e: Error = raw.into();
        assert!(matches!(e, Error::IndexConversion(_)));
    }
}
