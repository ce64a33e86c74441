//! Text to numeric address parsing.
//!
//! Each parser takes an address without any `/prefix` suffix and returns the
//! family's numeric form. Prefix handling and validation policy live in the codec.
//! - [`ipv4`] - dotted-decimal IPv4
//! - [`ipv6`] - colon-hex IPv6 with `::` compression
//! - [`hardware`] - 6 and 8 byte hardware (MAC / EUI-64) addresses

mod hardware;
mod ipv4;
mod ipv6;

pub use hardware::{parse_hardware, strip_separators};
pub use ipv4::parse_ipv4;
pub use ipv6::parse_ipv6;
