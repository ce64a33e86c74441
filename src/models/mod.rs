//! Typed address values.
//!
//! This module contains the value types every operation works on:
//! - [`Family`], [`Variant`] and [`Kind`] - tags carried by encoded records
//! - [`NetworkAddr`] - IPv4/IPv6 address with prefix length
//! - [`MacAddr`] and [`MacAddr8`] - hardware addresses

mod hardware;
mod kind;
mod network;

pub use hardware::{MacAddr, MacAddr8};
pub use kind::{Family, Kind, Variant};
pub use network::NetworkAddr;
pub(crate) use network::family_of;
