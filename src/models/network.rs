//! IPv4/IPv6 network address value with prefix length and variant.

use super::{Family, Variant};
use crate::error::{AddrError, Result};
use crate::mask::{has_host_bits_v4, has_host_bits_v6, netmask_v4, netmask_v6};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An IP address with a prefix length, tagged strict (`cidr`) or permissive (`inet`).
///
/// Values can only be built through [`NetworkAddr::new`] (or the codec), so the
/// prefix is always in range and a strict value never has host bits set.
///
/// Equality, ordering and hashing ignore the variant: IPv4 sorts before IPv6,
/// then by address, then by prefix length.
#[derive(Debug, Copy, Clone)]
pub struct NetworkAddr {
    ip: IpAddr,
    prefix: u8,
    variant: Variant,
}

impl NetworkAddr {
    /// Build a network value, validating the prefix range and, for
    /// [`Variant::Strict`], that no host bit is set.
    pub fn new(ip: IpAddr, prefix: u8, variant: Variant) -> Result<NetworkAddr> {
        let net = NetworkAddr::restore(ip, prefix, variant)?;
        if variant == Variant::Strict && host_bits_set(&ip, prefix)? {
            return Err(AddrError::invalid_network(
                format!("{ip}/{prefix}"),
                "value has bits set to right of mask",
            ));
        }
        Ok(net)
    }

    /// Rebuild a stored value. Only the prefix range is checked; the strict
    /// host-bit rule is enforced when a value is first built, not on read.
    pub(crate) fn restore(ip: IpAddr, prefix: u8, variant: Variant) -> Result<NetworkAddr> {
        let family = family_of(&ip);
        if prefix > family.max_prefix() {
            return Err(AddrError::invalid_network(
                format!("{ip}/{prefix}"),
                format!(
                    "prefix length must be between 0 and {}",
                    family.max_prefix()
                ),
            ));
        }
        Ok(NetworkAddr {
            ip,
            prefix,
            variant,
        })
    }

    /// Permissive host value with a full-width prefix.
    pub fn host(ip: IpAddr) -> NetworkAddr {
        NetworkAddr {
            prefix: family_of(&ip).max_prefix(),
            ip,
            variant: Variant::Permissive,
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn family(&self) -> Family {
        family_of(&self.ip)
    }

    pub fn is_strict(&self) -> bool {
        self.variant == Variant::Strict
    }

    /// True when the prefix covers the whole address (`/32` or `/128`).
    pub fn is_host(&self) -> bool {
        self.prefix == self.family().max_prefix()
    }

    /// Address bytes, most significant first (4 or 16 bytes).
    pub fn octets(&self) -> Vec<u8> {
        match self.ip {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// Check if `other` lies inside this network.
    ///
    /// Both must be the same family and `other` must have an equal or longer prefix.
    pub fn contains(&self, other: &NetworkAddr) -> bool {
        if self.family() != other.family() || other.prefix < self.prefix {
            return false;
        }
        match (self.ip, other.ip) {
            (IpAddr::V4(net), IpAddr::V4(addr)) => match netmask_v4(self.prefix) {
                Ok(mask) => u32::from(net) & mask == u32::from(addr) & mask,
                Err(_) => false,
            },
            (IpAddr::V6(net), IpAddr::V6(addr)) => match netmask_v6(self.prefix) {
                Ok(mask) => {
                    let (net, addr) = (net.octets(), addr.octets());
                    (0..16).all(|i| net[i] & mask[i] == addr[i] & mask[i])
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

pub(crate) fn family_of(ip: &IpAddr) -> Family {
    match ip {
        IpAddr::V4(_) => Family::V4,
        IpAddr::V6(_) => Family::V6,
    }
}

pub(crate) fn host_bits_set(ip: &IpAddr, prefix: u8) -> Result<bool> {
    match ip {
        IpAddr::V4(v4) => has_host_bits_v4(u32::from(*v4), prefix),
        IpAddr::V6(v6) => has_host_bits_v6(&v6.octets(), prefix),
    }
}

impl From<Ipv4Addr> for NetworkAddr {
    fn from(addr: Ipv4Addr) -> NetworkAddr {
        NetworkAddr::host(IpAddr::V4(addr))
    }
}

impl From<Ipv6Addr> for NetworkAddr {
    fn from(addr: Ipv6Addr) -> NetworkAddr {
        NetworkAddr::host(IpAddr::V6(addr))
    }
}

impl FromStr for NetworkAddr {
    type Err = AddrError;

    /// Parse with the permissive (`inet`) rules.
    fn from_str(s: &str) -> Result<NetworkAddr> {
        crate::codec::encode(s, Variant::Permissive)
    }
}

impl std::fmt::Display for NetworkAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&crate::format::format_canonical(self))
    }
}

impl Serialize for NetworkAddr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&crate::format::format_canonical(self))
    }
}

impl<'de> Deserialize<'de> for NetworkAddr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkAddr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e: AddrError| de::Error::custom(format!("invalid network address: {e}")))
    }
}

impl PartialEq for NetworkAddr {
    fn eq(&self, other: &NetworkAddr) -> bool {
        self.ip == other.ip && self.prefix == other.prefix
    }
}

impl Eq for NetworkAddr {}

impl Hash for NetworkAddr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ip.hash(state);
        self.prefix.hash(state);
    }
}

impl PartialOrd for NetworkAddr {
    fn partial_cmp(&self, other: &NetworkAddr) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NetworkAddr {
    fn cmp(&self, other: &NetworkAddr) -> Ordering {
        // IpAddr orders V4 before V6, then by address bytes
        self.ip
            .cmp(&other.ip)
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}
