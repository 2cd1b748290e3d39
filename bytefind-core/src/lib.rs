#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod finder;
pub mod result;
pub mod search;
pub mod util;

pub use error::{Error, Result};
pub use finder::ByteFinder;
pub use result::{SearchResult, NOT_FOUND_SENTINEL};

/// Lowest index below `length` where `buffer` holds `target`.
/// `length` may not exceed `buffer.len()`.
#[inline]
pub fn find(buffer: &[u8], length: usize, target: u8) -> Result<SearchResult> {
    ByteFinder::new(target).find(buffer, length)
}
