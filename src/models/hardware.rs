//! Hardware address values: 6-byte MAC and 8-byte EUI-64.

use crate::error::{AddrError, Result};
use crate::parse::parse_hardware;
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 6-byte MAC address. Orders by raw bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr(pub [u8; 6]);

/// 8-byte EUI-64 address. Orders by raw bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr8(pub [u8; 8]);

fn write_hex_bytes(f: &mut fmt::Formatter, bytes: &[u8]) -> fmt::Result {
    write!(f, "{}", bytes.iter().map(|b| format!("{b:02x}")).join(":"))
}

impl MacAddr {
    pub const LEN: usize = 6;

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Organizationally unique identifier (first 3 bytes).
    pub fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Copy with the last 3 bytes zeroed, keeping the manufacturer OUI.
    pub fn truncate(&self) -> MacAddr {
        let mut bytes = self.0;
        bytes[3..].fill(0);
        MacAddr(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<MacAddr> {
        let arr: [u8; 6] = bytes.try_into().map_err(|_| {
            AddrError::corrupt(format!("MAC record must be 6 bytes, got {}", bytes.len()))
        })?;
        Ok(MacAddr(arr))
    }
}

impl MacAddr8 {
    pub const LEN: usize = 8;

    pub fn octets(&self) -> [u8; 8] {
        self.0
    }

    pub fn from_slice(bytes: &[u8]) -> Result<MacAddr8> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| {
            AddrError::corrupt(format!(
                "EUI-64 record must be 8 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(MacAddr8(arr))
    }
}

impl FromStr for MacAddr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<MacAddr> {
        Ok(MacAddr(parse_hardware::<6>(s.trim())?))
    }
}

impl FromStr for MacAddr8 {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<MacAddr8> {
        Ok(MacAddr8(parse_hardware::<8>(s.trim())?))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_hex_bytes(f, &self.0)
    }
}

impl fmt::Display for MacAddr8 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_hex_bytes(f, &self.0)
    }
}

macro_rules! string_serde {
    ($ty:ty, $what:literal) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<$ty, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse()
                    .map_err(|e: AddrError| de::Error::custom(format!("invalid {}: {e}", $what)))
            }
        }
    };
}

string_serde!(MacAddr, "MAC address");
string_serde!(MacAddr8, "EUI-64 address");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_display() {
        let mac: MacAddr = "08-00-2B-01-02-03".parse().unwrap();
        assert_eq!(mac.to_string(), "08:00:2b:01:02:03");
        let mac8: MacAddr8 = "0800.2b01.0203.0405".parse().unwrap();
        assert_eq!(mac8.to_string(), "08:00:2b:01:02:03:04:05");
    }

    #[test]
    fn test_mac_truncate() {
        let mac: MacAddr = "08:00:2b:01:02:03".parse().unwrap();
        assert_eq!(mac.truncate().to_string(), "08:00:2b:00:00:00");
        assert_eq!(mac.oui(), [0x08, 0x00, 0x2b]);
        // input untouched
        assert_eq!(mac.to_string(), "08:00:2b:01:02:03");
    }

    #[test]
    fn test_mac_cmp() {
        let a: MacAddr = "08:00:2b:01:02:03".parse().unwrap();
        let b: MacAddr = "08:00:2b:01:02:04".parse().unwrap();
        let c: MacAddr = "ff:00:00:00:00:00".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, "08002b010203".parse().unwrap());
    }

    #[test]
    fn test_from_slice() {
        assert!(MacAddr::from_slice(&[1, 2, 3, 4, 5, 6]).is_ok());
        assert!(MacAddr::from_slice(&[1, 2, 3, 4, 5]).is_err());
        assert!(MacAddr8::from_slice(&[0; 8]).is_ok());
        assert!(MacAddr8::from_slice(&[0; 6]).is_err());
    }

    #[test]
    fn test_mac_serde() {
        let mac: MacAddr = "08:00:2b:01:02:03".parse().unwrap();
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"08:00:2b:01:02:03\"");
        let back: MacAddr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mac);
        assert!(serde_json::from_str::<MacAddr8>("\"08:00:2b\"").is_err());
    }
}
