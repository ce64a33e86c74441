//! Total order over encoded records.
//!
//! Network records sort IPv4 before IPv6 (by record width), then by address
//! bytes, then by prefix length. The variant tag never takes part.
//! Hardware records sort by raw bytes.

use crate::error::{AddrError, Result};
use std::cmp::Ordering;

/// Compare two network records.
///
/// Both must be well-formed records (see [`crate::codec`]). Records of an
/// unknown width fall back to a plain byte comparison.
pub fn compare_network_records(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        // width is the family: 7 byte IPv4 before 19 byte IPv6
        return a.len().cmp(&b.len());
    }
    let width = match a.len() {
        7 => 4,
        19 => 16,
        _ => return a.cmp(b),
    };
    a[..width]
        .cmp(&b[..width])
        .then_with(|| a[width].cmp(&b[width]))
}

/// Compare two hardware records of the same width.
pub fn compare_hardware_records(a: &[u8], b: &[u8]) -> Result<Ordering> {
    if a.len() != b.len() || !(a.len() == 6 || a.len() == 8) {
        return Err(AddrError::PreconditionViolation(format!(
            "hardware records must both be 6 or 8 bytes, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.cmp(b))
}

/// Map an [`Ordering`] to `-1`, `0` or `1`.
pub fn ordering_to_int(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
