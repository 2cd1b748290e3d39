#![no_std]

mod macros;

#[doc(hidden)]
pub use unix_print;
