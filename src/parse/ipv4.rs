//! Dotted-decimal IPv4 parser.

use crate::error::{AddrError, Result};
use std::net::Ipv4Addr;

const FAMILY: &str = "IPv4";

/// Parse `a.b.c.d` into an [`Ipv4Addr`].
///
/// Exactly four groups of ASCII decimal digits, each in `0..=255`.
///
/// # Examples
/// ```
/// use network_address::parse::parse_ipv4;
/// assert_eq!(parse_ipv4("192.168.1.5").unwrap().octets(), [192, 168, 1, 5]);
/// assert!(parse_ipv4("192.168.1").is_err());
/// ```
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr> {
    let groups: Vec<&str> = input.split('.').collect();
    if groups.len() != 4 {
        return Err(AddrError::parse(
            FAMILY,
            input,
            format!("expected 4 octets, got {}", groups.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (i, group) in groups.iter().enumerate() {
        octets[i] = parse_octet(group).map_err(|reason| AddrError::parse(FAMILY, input, reason))?;
    }
    log::trace!("parse_ipv4({input}) -> {octets:?}");
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> std::result::Result<u8, String> {
    if group.is_empty() {
        return Err("empty octet".to_string());
    }
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("octet \"{group}\" is not a decimal number"));
    }
    // strip leading zeros so a long zero run cannot overflow
    let digits = group.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    if digits.len() > 3 {
        return Err(format!("octet \"{group}\" is out of range"));
    }
    digits
        .parse::<u16>()
        .ok()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| format!("octet \"{group}\" is out of range"))
}
