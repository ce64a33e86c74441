//! Prefix length to netmask/hostmask conversion.
//!
//! IPv4 masks are plain `u32` values; IPv6 masks are built byte-wise as
//! `[u8; 16]` so the boundary byte gets a partial pattern.

use crate::error::{AddrError, Result};

/// Maximum prefix length for IPv4 (32 bits).
pub const IPV4_MAX_PREFIX: u8 = 32;

/// Maximum prefix length for IPv6 (128 bits).
pub const IPV6_MAX_PREFIX: u8 = 128;

fn check_prefix(len: u8, max: u8) -> Result<()> {
    if len > max {
        Err(AddrError::invalid_network(
            format!("/{len}"),
            format!("prefix length must be between 0 and {max}"),
        ))
    } else {
        Ok(())
    }
}

/// Convert a prefix length to an IPv4 netmask.
///
/// # Examples
/// ```
/// use network_address::mask::netmask_v4;
/// assert_eq!(netmask_v4(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn netmask_v4(len: u8) -> Result<u32> {
    check_prefix(len, IPV4_MAX_PREFIX)?;
    // shift in 64 bits so /0 does not shift a u32 by 32
    let right_len = IPV4_MAX_PREFIX - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Ok(mask as u32)
}

/// Convert a prefix length to an IPv4 hostmask (complement of the netmask).
pub fn hostmask_v4(len: u8) -> Result<u32> {
    Ok(!netmask_v4(len)?)
}

/// Convert a prefix length to an IPv6 netmask.
pub fn netmask_v6(len: u8) -> Result<[u8; 16]> {
    check_prefix(len, IPV6_MAX_PREFIX)?;
    let full_bytes = (len / 8) as usize;
    let remaining_bits = len % 8;

    let mut mask = [0u8; 16];
    for byte in mask.iter_mut().take(full_bytes) {
        *byte = 0xFF;
    }
    if remaining_bits > 0 {
        mask[full_bytes] = 0xFF << (8 - remaining_bits);
    }
    Ok(mask)
}

/// Convert a prefix length to an IPv6 hostmask (complement of the netmask).
pub fn hostmask_v6(len: u8) -> Result<[u8; 16]> {
    let mut mask = netmask_v6(len)?;
    for byte in mask.iter_mut() {
        *byte = !*byte;
    }
    Ok(mask)
}

/// True if any bit beyond `len` is set in the IPv4 address.
pub fn has_host_bits_v4(addr: u32, len: u8) -> Result<bool> {
    Ok(addr & hostmask_v4(len)? != 0)
}

/// True if any bit beyond `len` is set in the IPv6 address.
pub fn has_host_bits_v6(addr: &[u8; 16], len: u8) -> Result<bool> {
    let hostmask = hostmask_v6(len)?;
    Ok(addr.iter().zip(hostmask.iter()).any(|(a, m)| a & m != 0))
}

/// Byte-wise AND of two 16-byte values.
pub(crate) fn and_v6(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = a[i] & b[i];
    }
    out
}

/// Byte-wise OR of two 16-byte values.
pub(crate) fn or_v6(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = a[i] | b[i];
    }
    out
}
