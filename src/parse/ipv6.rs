//! Colon-hex IPv6 parser with `::` zero compression.

use crate::error::{AddrError, Result};
use std::net::Ipv6Addr;

const FAMILY: &str = "IPv6";
const SEGMENTS: usize = 8;

/// Parse an IPv6 literal into an [`Ipv6Addr`].
///
/// Groups are 1 to 4 hex digits. At most one `::` may appear and it must
/// stand for at least one zero group; without it exactly 8 groups are needed.
///
/// # Examples
/// ```
/// use network_address::parse::parse_ipv6;
/// let addr = parse_ipv6("2001:db8::1").unwrap();
/// assert_eq!(addr.segments(), [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]);
/// ```
pub fn parse_ipv6(input: &str) -> Result<Ipv6Addr> {
    let err = |reason: String| AddrError::parse(FAMILY, input, reason);

    if input.is_empty() {
        return Err(err("empty address".to_string()));
    }

    let mut segments = [0u16; SEGMENTS];
    match input.find("::") {
        Some(pos) => {
            let (left, right) = (&input[..pos], &input[pos + 2..]);
            if right.contains("::") {
                return Err(err("more than one \"::\"".to_string()));
            }
            let left = parse_groups(left).map_err(err)?;
            let right = parse_groups(right).map_err(err)?;
            if left.len() + right.len() > SEGMENTS - 1 {
                return Err(err(format!(
                    "\"::\" used with {} explicit groups",
                    left.len() + right.len()
                )));
            }
            segments[..left.len()].copy_from_slice(&left);
            segments[SEGMENTS - right.len()..].copy_from_slice(&right);
        }
        None => {
            let groups = parse_groups(input).map_err(err)?;
            if groups.len() != SEGMENTS {
                return Err(err(format!(
                    "expected 8 groups, got {}",
                    groups.len()
                )));
            }
            segments.copy_from_slice(&groups);
        }
    }

    log::trace!("parse_ipv6({input}) -> {segments:x?}");
    Ok(Ipv6Addr::from(segments))
}

/// Parse a colon-separated run of groups. An empty string is zero groups.
fn parse_groups(part: &str) -> std::result::Result<Vec<u16>, String> {
    if part.is_empty() {
        return Ok(Vec::new());
    }
    let groups: Vec<&str> = part.split(':').collect();
    if groups.len() > SEGMENTS {
        return Err(format!("too many groups ({})", groups.len()));
    }
    groups.into_iter().map(parse_group).collect()
}

fn parse_group(group: &str) -> std::result::Result<u16, String> {
    if group.is_empty() {
        return Err("empty group".to_string());
    }
    if group.len() > 4 {
        return Err(format!("group \"{group}\" has more than 4 hex digits"));
    }
    if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("group \"{group}\" is not hexadecimal"));
    }
    u16::from_str_radix(group, 16).map_err(|e| format!("group \"{group}\": {e}"))
}
