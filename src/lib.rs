//! Text and binary codec for network address values.
//!
//! IPv4/IPv6 host addresses and networks (`inet`, `cidr`) are parsed from
//! their usual text forms and stored as compact records of 7 or 19 bytes.
//! 6 and 8 byte MAC addresses (`macaddr`, `macaddr8`) are stored raw.
//! Records have a total order, and there is a small set of mask and
//! prefix operations on top of them.
//!
//! ```
//! use network_address::{encode, format_canonical, Variant};
//! let net = encode("192.168.1.5/24", Variant::Permissive).unwrap();
//! assert_eq!(format_canonical(&net), "192.168.1.5/24");
//! assert_eq!(net.to_record(), vec![192, 168, 1, 5, 24, 2, 2]);
//! ```

pub mod arith;
pub mod boundary;
pub mod cli;
pub mod codec;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod mask;
pub mod models;
pub mod parse;

pub use boundary::{abbrev_kind, compare_kind, decode_kind, encode_kind, host_kind, text_kind};
pub use codec::{encode, MAX_RECORD_LEN};
pub use error::{AddrError, Result};
pub use format::{
    abbrev, format_abbreviated, format_canonical, format_display, format_host, MAX_TEXT_LEN,
};
pub use models::{Family, Kind, MacAddr, MacAddr8, NetworkAddr, Variant};
