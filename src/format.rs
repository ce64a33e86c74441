//! Text rendering of network values.
//!
//! IPv6 addresses are written fully expanded (8 groups of 4 lowercase hex
//! digits) in every form except [`format_abbreviated`], which applies
//! RFC 5952 zero compression.

use crate::codec::write_bytes;
use crate::error::Result;
use crate::models::{NetworkAddr, Variant};
use itertools::Itertools;
use std::net::{IpAddr, Ipv6Addr};

/// Longest text any format produces, with room to spare
/// (expanded IPv6 `/128` is 43 bytes).
pub const MAX_TEXT_LEN: usize = 64;

/// Write an IPv6 address as 8 groups of 4 hex digits.
pub fn format_ipv6_full(addr: &Ipv6Addr) -> String {
    addr.segments().iter().map(|s| format!("{s:04x}")).join(":")
}

/// Write an IPv6 address in RFC 5952 form.
///
/// Leading zeros are dropped in each group and the longest run of two or
/// more zero groups (leftmost on a tie) becomes `::`.
pub fn format_ipv6_compressed(addr: &Ipv6Addr) -> String {
    #[derive(Copy, Clone, Default)]
    struct Span {
        start: usize,
        len: usize,
    }

    let segments = addr.segments();
    let mut longest = Span::default();
    let mut current = Span::default();
    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current.len == 0 {
                current.start = i;
            }
            current.len += 1;
            if current.len > longest.len {
                longest = current;
            }
        } else {
            current = Span::default();
        }
    }

    let hex = |chunk: &[u16]| chunk.iter().map(|s| format!("{s:x}")).join(":");
    if longest.len > 1 {
        format!(
            "{}::{}",
            hex(&segments[..longest.start]),
            hex(&segments[longest.start + longest.len..])
        )
    } else {
        hex(&segments)
    }
}

fn format_ip(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => format_ipv6_full(v6),
    }
}

/// Address and prefix, always with `/prefix`.
///
/// # Examples
/// ```
/// use network_address::format::format_canonical;
/// let net = "10.0.0.1".parse().unwrap();
/// assert_eq!(format_canonical(&net), "10.0.0.1/32");
/// ```
pub fn format_canonical(net: &NetworkAddr) -> String {
    format!("{}/{}", format_ip(&net.ip()), net.prefix())
}

/// Address only.
pub fn format_host(net: &NetworkAddr) -> String {
    format_ip(&net.ip())
}

/// Like [`format_canonical`] but without `/32` or `/128` on host values.
pub fn format_display(net: &NetworkAddr) -> String {
    if net.is_host() {
        format_host(net)
    } else {
        format_canonical(net)
    }
}

/// Shortened network form.
///
/// IPv4 shows only the octets the prefix touches (at least one), e.g.
/// `10.1.0.0/16` becomes `10.1/16`. IPv6 is RFC 5952 compressed.
pub fn format_abbreviated(net: &NetworkAddr) -> String {
    match net.ip() {
        IpAddr::V4(v4) => {
            let significant = (net.prefix() as usize).div_ceil(8).max(1);
            let octets = v4.octets().iter().take(significant).join(".");
            format!("{octets}/{}", net.prefix())
        }
        IpAddr::V6(v6) => format!("{}/{}", format_ipv6_compressed(&v6), net.prefix()),
    }
}

/// Abbreviated text by variant: strict values use [`format_abbreviated`],
/// permissive values [`format_display`] so host bits are never dropped.
pub fn abbrev(net: &NetworkAddr) -> String {
    match net.variant() {
        Variant::Strict => format_abbreviated(net),
        Variant::Permissive => format_display(net),
    }
}

/// Copy rendered text into a caller buffer.
pub fn write_text(text: &str, out: &mut [u8]) -> Result<usize> {
    write_bytes(text.as_bytes(), out)
}
