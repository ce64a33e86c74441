//! Text to value encoding and the fixed-width record layout.
//!
//! Network records:
//!
//! | family | bytes | layout |
//! |--------|-------|--------|
//! | IPv4   | 7     | address (4, big-endian), prefix, family tag `2`, variant tag |
//! | IPv6   | 19    | address (16), prefix, family tag `10`, variant tag |
//!
//! Variant tags are `0x01` for strict and `0x02` for permissive. Hardware
//! records are the raw 6 or 8 address bytes.

use crate::error::{AddrError, Result};
use crate::models::{Family, MacAddr, MacAddr8, NetworkAddr, Variant};
use crate::parse::{parse_ipv4, parse_ipv6};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Largest record any kind encodes to (IPv6 network record).
pub const MAX_RECORD_LEN: usize = 19;

/// Split `addr/prefix` on the last `/`.
pub fn split_prefix(text: &str) -> (&str, Option<&str>) {
    match text.rfind('/') {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    }
}

fn parse_prefix(text: &str, prefix: &str, family: Family) -> Result<u8> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddrError::parse(
            "prefix",
            text,
            format!("prefix length \"{prefix}\" is not a decimal number"),
        ));
    }
    let max = family.max_prefix();
    let digits = prefix.trim_start_matches('0');
    let value = if digits.is_empty() {
        0
    } else if digits.len() > 3 {
        u16::MAX
    } else {
        digits.parse::<u16>().unwrap_or(u16::MAX)
    };
    if value > max as u16 {
        return Err(AddrError::invalid_network(
            text,
            format!("prefix length must be between 0 and {max}"),
        ));
    }
    Ok(value as u8)
}

fn reason_of(err: AddrError) -> String {
    match err {
        AddrError::Parse { reason, .. } => reason,
        other => other.to_string(),
    }
}

/// Parse an address literal, trying IPv4 first and IPv6 second.
///
/// When both fail the error carries both reasons.
pub fn parse_ip(addr: &str) -> Result<IpAddr> {
    let v4_err = match parse_ipv4(addr) {
        Ok(v4) => return Ok(IpAddr::V4(v4)),
        Err(e) => e,
    };
    match parse_ipv6(addr) {
        Ok(v6) => Ok(IpAddr::V6(v6)),
        Err(v6_err) => Err(AddrError::NoFamilyMatched {
            input: addr.to_string(),
            ipv4: reason_of(v4_err),
            ipv6: reason_of(v6_err),
        }),
    }
}

/// Encode `address[/prefix]` as a network value of the given variant.
///
/// A missing prefix defaults to the full address width. For
/// [`Variant::Strict`] any host bit set beyond the prefix is an
/// [`AddrError::InvalidNetwork`], never silently masked.
///
/// # Examples
/// ```
/// use network_address::codec::encode;
/// use network_address::models::Variant;
///
/// let net = encode("192.168.1.5/24", Variant::Permissive).unwrap();
/// assert_eq!(net.prefix(), 24);
/// assert!(encode("192.168.1.5/24", Variant::Strict).is_err());
/// ```
pub fn encode(text: &str, variant: Variant) -> Result<NetworkAddr> {
    let text = text.trim();
    let (addr, prefix) = split_prefix(text);
    let ip = parse_ip(addr)?;
    let family = crate::models::family_of(&ip);
    let prefix = match prefix {
        Some(p) => parse_prefix(text, p, family)?,
        None => family.max_prefix(),
    };
    log::debug!("encode({text}, {variant:?}) -> {family} /{prefix}");

    NetworkAddr::new(ip, prefix, variant).map_err(|e| match e {
        AddrError::InvalidNetwork { reason, .. } => AddrError::invalid_network(text, reason),
        other => other,
    })
}

/// Copy `bytes` into `out`, failing without writing if it does not fit.
pub fn write_bytes(bytes: &[u8], out: &mut [u8]) -> Result<usize> {
    if out.len() < bytes.len() {
        return Err(AddrError::BufferTooSmall {
            needed: bytes.len(),
            available: out.len(),
        });
    }
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

impl NetworkAddr {
    /// Encode to the 7 or 19 byte record.
    pub fn to_record(&self) -> Vec<u8> {
        let mut record = Vec::with_capacity(self.family().record_len());
        record.extend_from_slice(&self.octets());
        record.push(self.prefix());
        record.push(self.family().tag());
        record.push(self.variant().tag());
        record
    }

    /// Write the record into `out`, returning the number of bytes written.
    pub fn write_record(&self, out: &mut [u8]) -> Result<usize> {
        write_bytes(&self.to_record(), out)
    }

    /// Decode a record produced by [`NetworkAddr::to_record`].
    ///
    /// The family comes from the record length and must agree with the family
    /// tag. The prefix range is re-validated; host bits of a strict record are
    /// not, so stored values such as `10.0.0.1/0` still decode.
    pub fn from_record(record: &[u8]) -> Result<NetworkAddr> {
        let family = match record.len() {
            7 => Family::V4,
            19 => Family::V6,
            n => {
                return Err(AddrError::corrupt(format!(
                    "network record must be 7 or 19 bytes, got {n}"
                )))
            }
        };
        let width = record.len() - 3;
        let (prefix, family_tag, variant_tag) =
            (record[width], record[width + 1], record[width + 2]);

        if Family::from_tag(family_tag) != Some(family) {
            return Err(AddrError::corrupt(format!(
                "family tag {family_tag} does not match {} byte {family} record",
                record.len()
            )));
        }
        let variant = Variant::from_tag(variant_tag)
            .ok_or_else(|| AddrError::corrupt(format!("unknown variant tag {variant_tag:#04x}")))?;

        let ip = match family {
            Family::V4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(&record[..4]);
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            Family::V6 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(&record[..16]);
                IpAddr::V6(Ipv6Addr::from(octets))
            }
        };
        log::trace!("from_record({record:02x?}) -> {ip} /{prefix} {variant:?}");

        NetworkAddr::restore(ip, prefix, variant).map_err(|e| AddrError::corrupt(e.to_string()))
    }
}

impl MacAddr {
    pub fn write_record(&self, out: &mut [u8]) -> Result<usize> {
        write_bytes(&self.0, out)
    }
}

impl MacAddr8 {
    pub fn write_record(&self, out: &mut [u8]) -> Result<usize> {
        write_bytes(&self.0, out)
    }
}

/// Family of a network record, from its length and family tag.
pub fn record_family(record: &[u8]) -> Result<Family> {
    NetworkAddr::from_record(record).map(|net| net.family())
}
