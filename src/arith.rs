//! Derived network arithmetic.
//!
//! Every operation builds a new value; inputs are never changed. The record
//! forms decode a record, apply the typed operation and write the result
//! record into a caller buffer.

use crate::codec::write_bytes;
use crate::error::{AddrError, Result};
use crate::mask::{and_v6, hostmask_v4, hostmask_v6, netmask_v4, netmask_v6, or_v6};
use crate::models::{MacAddr, NetworkAddr, Variant};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Compute a new address from the old one and its prefix, per family.
fn map_addr(
    net: &NetworkAddr,
    prefix: u8,
    v4: impl Fn(u32, u8) -> Result<u32>,
    v6: impl Fn([u8; 16], u8) -> Result<[u8; 16]>,
) -> Result<IpAddr> {
    Ok(match net.ip() {
        IpAddr::V4(addr) => IpAddr::V4(Ipv4Addr::from(v4(u32::from(addr), prefix)?)),
        IpAddr::V6(addr) => IpAddr::V6(Ipv6Addr::from(v6(addr.octets(), prefix)?)),
    })
}

/// Netmask of the network as a permissive host value (`/32` or `/128`).
pub fn netmask_of(net: &NetworkAddr) -> Result<NetworkAddr> {
    let ip = map_addr(net, net.prefix(), |_, p| netmask_v4(p), |_, p| netmask_v6(p))?;
    Ok(NetworkAddr::host(ip))
}

/// Hostmask of the network as a permissive host value (`/32` or `/128`).
pub fn hostmask_of(net: &NetworkAddr) -> Result<NetworkAddr> {
    let ip = map_addr(net, net.prefix(), |_, p| hostmask_v4(p), |_, p| hostmask_v6(p))?;
    Ok(NetworkAddr::host(ip))
}

/// Broadcast address: all host bits set, prefix kept, permissive.
pub fn broadcast_of(net: &NetworkAddr) -> Result<NetworkAddr> {
    let ip = map_addr(
        net,
        net.prefix(),
        |a, p| Ok(a | hostmask_v4(p)?),
        |a, p| Ok(or_v6(&a, &hostmask_v6(p)?)),
    )?;
    NetworkAddr::new(ip, net.prefix(), Variant::Permissive)
}

/// Network part: all host bits cleared, prefix kept, strict.
pub fn network_of(net: &NetworkAddr) -> Result<NetworkAddr> {
    let ip = map_addr(
        net,
        net.prefix(),
        |a, p| Ok(a & netmask_v4(p)?),
        |a, p| Ok(and_v6(&a, &netmask_v6(p)?)),
    )?;
    NetworkAddr::new(ip, net.prefix(), Variant::Strict)
}

/// Replace the prefix length.
///
/// With [`Variant::Permissive`] the address is kept as is. With
/// [`Variant::Strict`] the address is re-masked to the new prefix so the
/// result has no host bits set.
pub fn with_prefix(net: &NetworkAddr, new_prefix: u8, variant: Variant) -> Result<NetworkAddr> {
    let max = net.family().max_prefix();
    if new_prefix > max {
        return Err(AddrError::invalid_network(
            format!("{net} -> /{new_prefix}"),
            format!("prefix length must be between 0 and {max}"),
        ));
    }
    let ip = match variant {
        Variant::Permissive => net.ip(),
        Variant::Strict => map_addr(
            net,
            new_prefix,
            |a, p| Ok(a & netmask_v4(p)?),
            |a, p| Ok(and_v6(&a, &netmask_v6(p)?)),
        )?,
    };
    log::debug!("with_prefix({net}, {new_prefix}, {variant:?}) -> {ip}/{new_prefix}");
    NetworkAddr::new(ip, new_prefix, variant)
}

/// Keep the OUI of a MAC address, zeroing the last 3 bytes.
pub fn truncate_oui(mac: &MacAddr) -> MacAddr {
    mac.truncate()
}

/// `4` for IPv4, `6` for IPv6.
pub fn family(net: &NetworkAddr) -> u8 {
    net.family().number()
}

/// Prefix length.
pub fn masklen(net: &NetworkAddr) -> u8 {
    net.prefix()
}

fn map_record(
    record: &[u8],
    out: &mut [u8],
    op: impl FnOnce(&NetworkAddr) -> Result<NetworkAddr>,
) -> Result<usize> {
    let net = NetworkAddr::from_record(record)?;
    let result = op(&net)?;
    result.write_record(out)
}

/// [`netmask_of`] over records.
pub fn netmask_record(record: &[u8], out: &mut [u8]) -> Result<usize> {
    map_record(record, out, netmask_of)
}

/// [`hostmask_of`] over records.
pub fn hostmask_record(record: &[u8], out: &mut [u8]) -> Result<usize> {
    map_record(record, out, hostmask_of)
}

/// [`broadcast_of`] over records.
pub fn broadcast_record(record: &[u8], out: &mut [u8]) -> Result<usize> {
    map_record(record, out, broadcast_of)
}

/// [`network_of`] over records.
pub fn network_record(record: &[u8], out: &mut [u8]) -> Result<usize> {
    map_record(record, out, network_of)
}

/// [`with_prefix`] over records. A negative or oversized length is an
/// [`AddrError::InvalidNetwork`].
pub fn set_masklen_record(
    record: &[u8],
    new_prefix: i32,
    variant: Variant,
    out: &mut [u8],
) -> Result<usize> {
    map_record(record, out, |net| {
        let prefix = u8::try_from(new_prefix).map_err(|_| {
            AddrError::invalid_network(
                format!("{net} -> /{new_prefix}"),
                format!(
                    "prefix length must be between 0 and {}",
                    net.family().max_prefix()
                ),
            )
        })?;
        with_prefix(net, prefix, variant)
    })
}

/// [`truncate_oui`] over a 6-byte record. An 8-byte record is a caller bug.
pub fn truncate_oui_record(record: &[u8], out: &mut [u8]) -> Result<usize> {
    if record.len() != MacAddr::LEN {
        return Err(AddrError::PreconditionViolation(format!(
            "OUI truncation needs a 6 byte MAC record, got {} bytes",
            record.len()
        )));
    }
    let mac = MacAddr::from_slice(record)?;
    write_bytes(&truncate_oui(&mac).0, out)
}

/// [`family`] over a record.
pub fn family_record(record: &[u8]) -> Result<u8> {
    NetworkAddr::from_record(record).map(|net| family(&net))
}

/// [`masklen`] over a record.
pub fn masklen_record(record: &[u8]) -> Result<u8> {
    NetworkAddr::from_record(record).map(|net| masklen(&net))
}
