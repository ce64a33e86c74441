//! Command-line front-end for the `netaddr` binary.

use crate::arith::{broadcast_of, hostmask_of, netmask_of, network_of, truncate_oui};
use crate::boundary::{compare_kind, decode_kind, encode_kind};
use crate::codec::MAX_RECORD_LEN;
use crate::compare::ordering_to_int;
use crate::config::Config;
use crate::error::AddrError;
use crate::format::{
    abbrev, format_abbreviated, format_canonical, format_display, format_host, MAX_TEXT_LEN,
};
use crate::models::{Kind, MacAddr, MacAddr8, NetworkAddr};
use crate::parse::strip_separators;
use clap::{Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use std::cmp::Ordering;
use std::error::Error;

/// Convert network address literals to and from fixed-width binary records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode literals and print their records as hex
    Encode {
        /// cidr, inet, macaddr or macaddr8 (defaults to NETADDR_DEFAULT_KIND)
        #[arg(short, long)]
        kind: Option<Kind>,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Decode hex records back to text
    Decode {
        #[arg(short, long)]
        kind: Option<Kind>,
        #[arg(required = true)]
        records: Vec<String>,
    },
    /// Print every rendering and derived value of each literal
    Show {
        /// One JSON object per literal
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Sort literals in record order
    Sort {
        #[arg(short, long)]
        kind: Option<Kind>,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Compare two literals, printing -1, 0 or 1
    Compare {
        #[arg(short, long)]
        kind: Option<Kind>,
        left: String,
        right: String,
    },
    /// Check whether a network contains an address or smaller network
    Contains { network: String, address: String },
}

/// Lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).join("")
}

/// Parse hex digits, ignoring `:`, `-` and `.` separators.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, String> {
    let digits =
        strip_separators(text).map_err(|c| format!("unexpected character '{c}' in hex"))?;
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| e.to_string()))
        .collect()
}

/// `xx:xx:xx:xx:xx:xx` notation. With 8 groups this is also a valid IPv6
/// literal, and is read as EUI-64.
fn looks_like_hardware(input: &str) -> bool {
    let groups: Vec<&str> = input.split([':', '-']).collect();
    matches!(groups.len(), 6 | 8) && groups.iter().all(|g| g.len() == 2)
}

fn describe_network(net: &NetworkAddr) -> Result<Vec<(&'static str, String)>, AddrError> {
    let network = network_of(net)?;
    Ok(vec![
        ("family", net.family().to_string()),
        ("canonical", format_canonical(net)),
        ("host", format_host(net)),
        ("display", format_display(net)),
        ("abbreviated", abbrev(net)),
        ("masklen", net.prefix().to_string()),
        ("netmask", format_host(&netmask_of(net)?)),
        ("hostmask", format_host(&hostmask_of(net)?)),
        ("broadcast", format_display(&broadcast_of(net)?)),
        ("network", format_canonical(&network)),
        ("network_abbreviated", format_abbreviated(&network)),
        ("record", to_hex(&net.to_record())),
    ])
}

fn describe_hardware(input: &str) -> Option<Vec<(&'static str, String)>> {
    if let Ok(mac) = input.parse::<MacAddr>() {
        return Some(vec![
            ("family", "MAC".to_string()),
            ("canonical", mac.to_string()),
            ("oui", truncate_oui(&mac).to_string()),
            ("record", to_hex(&mac.octets())),
        ]);
    }
    let mac8 = input.parse::<MacAddr8>().ok()?;
    Some(vec![
        ("family", "EUI-64".to_string()),
        ("canonical", mac8.to_string()),
        ("record", to_hex(&mac8.octets())),
    ])
}

/// Label/value rows describing a literal, for the `show` command.
pub fn describe(input: &str) -> Result<Vec<(&'static str, String)>, Box<dyn Error>> {
    if looks_like_hardware(input) {
        if let Some(rows) = describe_hardware(input) {
            return Ok(rows);
        }
    }
    match input.parse::<NetworkAddr>() {
        Ok(net) => Ok(describe_network(&net)?),
        Err(e) => match describe_hardware(input) {
            Some(rows) => Ok(rows),
            None => Err(format!("not a MAC or EUI-64 address either: {e}").into()),
        },
    }
}

/// `show --json` output: the input plus one field per row.
pub fn rows_to_json(input: &str, rows: &[(&'static str, String)]) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    object.insert("input".to_string(), input.into());
    for (label, value) in rows {
        object.insert(label.to_string(), value.as_str().into());
    }
    serde_json::Value::Object(object)
}

fn encode_record(kind: Kind, input: &str) -> Result<Vec<u8>, AddrError> {
    let mut buf = [0u8; MAX_RECORD_LEN];
    let n = encode_kind(kind, input, &mut buf)?;
    Ok(buf[..n].to_vec())
}

fn encode_hex(kind: Kind, input: &str) -> Result<String, Box<dyn Error>> {
    Ok(to_hex(&encode_record(kind, input)?))
}

fn decode_hex(kind: Kind, record: &str) -> Result<String, Box<dyn Error>> {
    let bytes = parse_hex(record)?;
    let mut buf = [0u8; MAX_TEXT_LEN];
    let n = decode_kind(kind, &bytes, &mut buf)?;
    Ok(String::from_utf8(buf[..n].to_vec())?)
}

/// Sort literals of `kind` with the record comparator. Failed inputs are
/// returned separately with their error.
pub fn sort_literals(kind: Kind, inputs: &[String]) -> (Vec<String>, Vec<(String, String)>) {
    let mut records = Vec::new();
    let mut failed = Vec::new();
    for input in inputs {
        match encode_record(kind, input) {
            Ok(record) => records.push(record),
            Err(e) => failed.push((input.clone(), e.to_string())),
        }
    }
    // every record came from encode_kind, so the width precondition holds
    records.sort_by(|a, b| compare_kind(kind, a, b).unwrap_or(Ordering::Equal));

    let mut sorted = Vec::with_capacity(records.len());
    for record in &records {
        let mut buf = [0u8; MAX_TEXT_LEN];
        match decode_kind(kind, record, &mut buf) {
            Ok(n) => sorted.push(String::from_utf8_lossy(&buf[..n]).into_owned()),
            Err(e) => failed.push((to_hex(record), e.to_string())),
        }
    }
    (sorted, failed)
}

/// Compare two literals of `kind`. A rejected literal is returned with its error.
pub fn compare_literals<'a>(
    kind: Kind,
    left: &'a str,
    right: &'a str,
) -> Result<Ordering, (&'a str, AddrError)> {
    let a = encode_record(kind, left).map_err(|e| (left, e))?;
    let b = encode_record(kind, right).map_err(|e| (right, e))?;
    compare_kind(kind, &a, &b).map_err(|e| (left, e))
}

/// Whether `network` contains `address`, both read as `inet`.
pub fn contains_literal<'a>(
    network: &'a str,
    address: &'a str,
) -> Result<bool, (&'a str, AddrError)> {
    let net: NetworkAddr = network.parse().map_err(|e| (network, e))?;
    let addr: NetworkAddr = address.parse().map_err(|e| (address, e))?;
    let inside = net.contains(&addr);
    log::debug!("contains({net}, {addr}) = {inside}");
    Ok(inside)
}

fn report_failure(input: &str, err: &dyn std::fmt::Display) {
    log::warn!("rejected {input}: {err}");
    eprintln!("{} {input}: {err}", "ERROR".red());
}

/// Run one command. Returns `Ok(false)` if any input was rejected.
pub fn run(args: &Args, config: &Config) -> Result<bool, Box<dyn Error>> {
    if args.no_color || !config.color {
        colored::control::set_override(false);
    }
    let mut all_ok = true;

    match &args.command {
        Command::Encode { kind, inputs } => {
            let kind = kind.unwrap_or(config.default_kind);
            for input in inputs {
                match encode_hex(kind, input) {
                    Ok(hex) => println!("{input} {} {}", "->".blue(), hex),
                    Err(e) => {
                        report_failure(input, &e);
                        all_ok = false;
                    }
                }
            }
        }
        Command::Decode { kind, records } => {
            let kind = kind.unwrap_or(config.default_kind);
            for record in records {
                match decode_hex(kind, record) {
                    Ok(text) => println!("{record} {} {}", "->".blue(), text),
                    Err(e) => {
                        report_failure(record, &e);
                        all_ok = false;
                    }
                }
            }
        }
        Command::Show { json, inputs } => {
            for input in inputs {
                match describe(input) {
                    Ok(rows) if *json => println!("{}", rows_to_json(input, &rows)),
                    Ok(rows) => {
                        println!("{}", input.bold());
                        for (label, value) in rows {
                            println!("  {} {value}", format!("{label:<20}").green());
                        }
                    }
                    Err(e) => {
                        report_failure(input, &e);
                        all_ok = false;
                    }
                }
            }
        }
        Command::Sort { kind, inputs } => {
            let kind = kind.unwrap_or(config.default_kind);
            let (sorted, failed) = sort_literals(kind, inputs);
            for (input, err) in &failed {
                report_failure(input, err);
            }
            all_ok = failed.is_empty();
            for text in sorted {
                println!("{text}");
            }
        }
        Command::Compare { kind, left, right } => {
            let kind = kind.unwrap_or(config.default_kind);
            match compare_literals(kind, left, right) {
                Ok(ord) => println!("{}", ordering_to_int(ord)),
                Err((input, e)) => {
                    report_failure(input, &e);
                    all_ok = false;
                }
            }
        }
        Command::Contains { network, address } => match contains_literal(network, address) {
            Ok(inside) => println!("{inside}"),
            Err((input, e)) => {
                report_failure(input, &e);
                all_ok = false;
            }
        },
    }
    Ok(all_ok)
}
