//! Entry points for a hosting database, one per value kind.
//!
//! Each function takes raw input and a caller-owned output slot and returns
//! the number of bytes written. On error nothing is written, so the caller
//! reports a zero-length result. Null handling and type registration stay
//! with the host.

use crate::codec::{encode, split_prefix};
use crate::compare::{compare_hardware_records, compare_network_records};
use crate::error::{AddrError, Result};
use crate::format::{
    format_abbreviated, format_canonical, format_display, format_host, write_text,
};
use crate::models::{Kind, MacAddr, MacAddr8, NetworkAddr, Variant};
use std::cmp::Ordering;

/// Parse `text` as `kind` and write its record into `out`.
///
/// `cidr` input must carry an explicit `/prefix`.
pub fn encode_kind(kind: Kind, text: &str, out: &mut [u8]) -> Result<usize> {
    let written = match kind {
        Kind::Cidr => {
            if split_prefix(text.trim()).1.is_none() {
                return Err(AddrError::parse(
                    "CIDR",
                    text,
                    "missing \"/prefix\" length",
                ));
            }
            encode(text, Variant::Strict)?.write_record(out)
        }
        Kind::Inet => encode(text, Variant::Permissive)?.write_record(out),
        Kind::MacAddr => text.parse::<MacAddr>()?.write_record(out),
        Kind::MacAddr8 => text.parse::<MacAddr8>()?.write_record(out),
    };
    if let Err(e) = &written {
        log::debug!("encode_kind({kind}, {text}) failed: {e}");
    }
    written
}

/// Render a `kind` record as text into `out`.
///
/// `inet` uses the display form (no `/32` or `/128` on hosts); `cidr`
/// always shows the prefix.
pub fn decode_kind(kind: Kind, record: &[u8], out: &mut [u8]) -> Result<usize> {
    let text = match kind {
        Kind::Cidr => format_canonical(&NetworkAddr::from_record(record)?),
        Kind::Inet => format_display(&NetworkAddr::from_record(record)?),
        Kind::MacAddr => MacAddr::from_slice(record)?.to_string(),
        Kind::MacAddr8 => MacAddr8::from_slice(record)?.to_string(),
    };
    write_text(&text, out)
}

fn read_network(kind: Kind, record: &[u8]) -> Result<NetworkAddr> {
    match kind.variant() {
        Some(_) => NetworkAddr::from_record(record),
        None => Err(AddrError::PreconditionViolation(format!(
            "{kind} is not a network kind"
        ))),
    }
}

/// Canonical text of a network record, always with `/prefix`.
pub fn text_kind(kind: Kind, record: &[u8], out: &mut [u8]) -> Result<usize> {
    write_text(&format_canonical(&read_network(kind, record)?), out)
}

/// Address of a network record without its prefix.
pub fn host_kind(kind: Kind, record: &[u8], out: &mut [u8]) -> Result<usize> {
    write_text(&format_host(&read_network(kind, record)?), out)
}

/// Abbreviated text of a network record. `cidr` drops the octets past the
/// prefix; `inet` keeps the whole address and uses the display form.
pub fn abbrev_kind(kind: Kind, record: &[u8], out: &mut [u8]) -> Result<usize> {
    let net = read_network(kind, record)?;
    let text = match kind {
        Kind::Cidr => format_abbreviated(&net),
        _ => format_display(&net),
    };
    write_text(&text, out)
}

/// Compare two records of `kind`.
pub fn compare_kind(kind: Kind, a: &[u8], b: &[u8]) -> Result<Ordering> {
    match kind {
        Kind::Cidr | Kind::Inet => Ok(compare_network_records(a, b)),
        Kind::MacAddr if a.len() != MacAddr::LEN => Err(AddrError::PreconditionViolation(
            format!("MACADDR record must be 6 bytes, got {}", a.len()),
        )),
        Kind::MacAddr8 if a.len() != MacAddr8::LEN => Err(AddrError::PreconditionViolation(
            format!("MACADDR8 record must be 8 bytes, got {}", a.len()),
        )),
        Kind::MacAddr | Kind::MacAddr8 => compare_hardware_records(a, b),
    }
}
