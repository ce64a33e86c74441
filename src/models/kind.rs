//! Address family, validation variant and storable kind tags.

use crate::error::AddrError;
use crate::mask::{IPV4_MAX_PREFIX, IPV6_MAX_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IP address family of a network record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Family tag byte stored in the record.
    pub const fn tag(self) -> u8 {
        match self {
            Family::V4 => 2,
            Family::V6 => 10,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Family> {
        match tag {
            2 => Some(Family::V4),
            10 => Some(Family::V6),
            _ => None,
        }
    }

    /// Address width in bits, which is also the maximum prefix length.
    pub const fn max_prefix(self) -> u8 {
        match self {
            Family::V4 => IPV4_MAX_PREFIX,
            Family::V6 => IPV6_MAX_PREFIX,
        }
    }

    /// `4` or `6`, as reported by the `family()` extractor.
    pub const fn number(self) -> u8 {
        match self {
            Family::V4 => 4,
            Family::V6 => 6,
        }
    }

    /// Width in bytes of the encoded network record.
    pub const fn record_len(self) -> usize {
        match self {
            Family::V4 => 7,
            Family::V6 => 19,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Validation discipline of an IP network record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Host bits must be zero (`cidr`).
    Strict,
    /// Host bits may be set (`inet`).
    Permissive,
}

impl Variant {
    pub const fn tag(self) -> u8 {
        match self {
            Variant::Strict => 0x01,
            Variant::Permissive => 0x02,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Variant> {
        match tag {
            0x01 => Some(Variant::Strict),
            0x02 => Some(Variant::Permissive),
            _ => None,
        }
    }
}

/// The four value kinds a hosting database registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Cidr,
    Inet,
    MacAddr,
    MacAddr8,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Cidr, Kind::Inet, Kind::MacAddr, Kind::MacAddr8];

    /// Validation variant for the network kinds, `None` for hardware kinds.
    pub const fn variant(self) -> Option<Variant> {
        match self {
            Kind::Cidr => Some(Variant::Strict),
            Kind::Inet => Some(Variant::Permissive),
            Kind::MacAddr | Kind::MacAddr8 => None,
        }
    }

    /// Largest record this kind can encode to.
    pub const fn max_record_len(self) -> usize {
        match self {
            Kind::Cidr | Kind::Inet => Family::V6.record_len(),
            Kind::MacAddr => 6,
            Kind::MacAddr8 => 8,
        }
    }

    pub const fn type_name(self) -> &'static str {
        match self {
            Kind::Cidr => "CIDR",
            Kind::Inet => "INET",
            Kind::MacAddr => "MACADDR",
            Kind::MacAddr8 => "MACADDR8",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for Kind {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Kind, AddrError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cidr" => Ok(Kind::Cidr),
            "inet" => Ok(Kind::Inet),
            "macaddr" | "mac" => Ok(Kind::MacAddr),
            "macaddr8" | "mac8" => Ok(Kind::MacAddr8),
            other => Err(AddrError::PreconditionViolation(format!(
                "unknown kind \"{other}\", expected one of cidr, inet, macaddr, macaddr8"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tags() {
        assert_eq!(Family::from_tag(Family::V4.tag()), Some(Family::V4));
        assert_eq!(Family::from_tag(Family::V6.tag()), Some(Family::V6));
        assert_eq!(Family::from_tag(4), None);
        assert_eq!(Family::V4.number(), 4);
        assert_eq!(Family::V6.max_prefix(), 128);
        assert!(Family::V4 < Family::V6);
    }

    #[test]
    fn test_variant_tags() {
        assert_eq!(Variant::from_tag(0x01), Some(Variant::Strict));
        assert_eq!(Variant::from_tag(0x02), Some(Variant::Permissive));
        assert_eq!(Variant::from_tag(0x00), None);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("cidr".parse::<Kind>().unwrap(), Kind::Cidr);
        assert_eq!("INET".parse::<Kind>().unwrap(), Kind::Inet);
        assert_eq!(" macaddr8 ".parse::<Kind>().unwrap(), Kind::MacAddr8);
        assert!("ipaddr".parse::<Kind>().is_err());
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_variant() {
        assert_eq!(Kind::Cidr.variant(), Some(Variant::Strict));
        assert_eq!(Kind::Inet.variant(), Some(Variant::Permissive));
        assert_eq!(Kind::MacAddr.variant(), None);
        assert_eq!(Kind::Inet.max_record_len(), 19);
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(serde_json::to_string(&Kind::MacAddr8).unwrap(), "\"macaddr8\"");
        let kind: Kind = serde_json::from_str("\"cidr\"").unwrap();
        assert_eq!(kind, Kind::Cidr);
    }
}
