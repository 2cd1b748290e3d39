use bytefind_utils::debug;

use crate::error::Result;
use crate::push_heapless;
use crate::search::find_byte;

/// Every offset of `tgt` in `bytes`, ascending.
/// Fails once more than `N` matches have been seen.
pub fn positions<const N: usize>(tgt: u8, bytes: &[u8]) -> Result<heapless::Vec<usize, N>> {
    let mut found: heapless::Vec<usize, N> = heapless::Vec::new();
    let mut offset = 0;
    while let Some(ind) = find_byte(tgt, &bytes[offset..]) {
        if let Err(e) = push_heapless!(found, offset + ind) {
            debug!("Match at {} does not fit, limit {}", offset + ind, N);
            return Err(e);
        }
        offset += ind + 1;
    }
    Ok(found)
}
