//! Integration tests for network-address
//!
//! These tests drive the kind-level entry points with the literals in
//! `src/tests/test_data/literals.json` and check the documented scenarios.

use network_address::arith::{broadcast_of, netmask_of, network_of, truncate_oui};
use network_address::compare::compare_network_records;
use network_address::mask::{hostmask_v4, hostmask_v6, netmask_v4, netmask_v6};
use network_address::{
    compare_kind, decode_kind, encode, encode_kind, format_canonical, format_display,
    format_host, AddrError, Kind, MacAddr, Variant, MAX_RECORD_LEN, MAX_TEXT_LEN,
};
use serde::Deserialize;
use std::cmp::Ordering;

const LITERALS: &str = "src/tests/test_data/literals.json";

#[derive(Debug, Deserialize)]
struct ValidCase {
    kind: Kind,
    input: String,
    record: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct InvalidCase {
    kind: Kind,
    input: String,
    error: String,
}

#[derive(Debug, Deserialize)]
struct Literals {
    valid: Vec<ValidCase>,
    invalid: Vec<InvalidCase>,
}

fn read_literals() -> Literals {
    let data = std::fs::read_to_string(LITERALS).expect("Failed to read literal fixture");
    serde_json::from_str(&data).expect("Failed to parse literal fixture")
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn encode_vec(kind: Kind, text: &str) -> Result<Vec<u8>, AddrError> {
    let mut buf = [0u8; MAX_RECORD_LEN];
    let n = encode_kind(kind, text, &mut buf)?;
    Ok(buf[..n].to_vec())
}

fn decode_string(kind: Kind, record: &[u8]) -> Result<String, AddrError> {
    let mut buf = [0u8; MAX_TEXT_LEN];
    let n = decode_kind(kind, record, &mut buf)?;
    Ok(String::from_utf8(buf[..n].to_vec()).expect("decoded text is ascii"))
}

#[test]
fn test_valid_literals() {
    let literals = read_literals();
    assert!(literals.valid.len() > 10, "Fixture should have valid literals");

    for case in &literals.valid {
        let record = encode_vec(case.kind, &case.input)
            .unwrap_or_else(|e| panic!("{} {:?}: {e}", case.kind, case.input));
        assert_eq!(hex(&record), case.record, "record of {:?}", case.input);
        assert_eq!(
            decode_string(case.kind, &record).unwrap(),
            case.text,
            "text of {:?}",
            case.input
        );
        // decoded text encodes back to the same record
        assert_eq!(encode_vec(case.kind, &case.text).unwrap(), record);
    }
}

#[test]
fn test_invalid_literals() {
    let literals = read_literals();

    for case in &literals.invalid {
        let err = encode_vec(case.kind, &case.input)
            .expect_err(&format!("{} {:?} should fail", case.kind, case.input));
        let matched = match case.error.as_str() {
            "parse" => matches!(err, AddrError::Parse { .. }),
            "no_family" => matches!(err, AddrError::NoFamilyMatched { .. }),
            "invalid_network" => matches!(err, AddrError::InvalidNetwork { .. }),
            other => panic!("unknown error class {other} in fixture"),
        };
        assert!(matched, "{:?}: expected {}, got {err:?}", case.input, case.error);
        assert!(err.is_input_error());
    }
}

#[test]
fn test_sorted_order() {
    let literals = read_literals();
    let mut records: Vec<Vec<u8>> = literals
        .valid
        .iter()
        .filter(|c| matches!(c.kind, Kind::Inet | Kind::Cidr))
        .map(|c| encode_vec(c.kind, &c.input).unwrap())
        .collect();
    records.sort_by(|a, b| compare_network_records(a, b));

    // every IPv4 record before every IPv6 record
    let first_v6 = records.iter().position(|r| r.len() == 19).unwrap();
    assert!(records[..first_v6].iter().all(|r| r.len() == 7));
    assert!(records[first_v6..].iter().all(|r| r.len() == 19));

    for a in &records {
        assert_eq!(compare_kind(Kind::Inet, a, a).unwrap(), Ordering::Equal);
        for b in &records {
            let ab = compare_network_records(a, b);
            assert_eq!(ab, compare_network_records(b, a).reverse());
            for c in &records {
                if ab != Ordering::Greater && compare_network_records(b, c) != Ordering::Greater {
                    assert_ne!(compare_network_records(a, c), Ordering::Greater);
                }
            }
        }
    }
}

#[test]
fn test_strict_invariant() {
    let literals = read_literals();
    for case in literals.valid.iter().filter(|c| c.kind == Kind::Cidr) {
        let net = encode(&case.input, Variant::Strict).unwrap();
        assert_eq!(network_of(&net).unwrap(), net, "{}", case.input);
    }
    assert!(matches!(
        encode("192.168.1.5/24", Variant::Strict),
        Err(AddrError::InvalidNetwork { .. })
    ));
    assert!(encode("192.168.1.0/24", Variant::Strict).is_ok());
}

#[test]
fn test_mask_complement() {
    for p in 0..=32u8 {
        let (net, host) = (netmask_v4(p).unwrap(), hostmask_v4(p).unwrap());
        assert_eq!(net | host, u32::MAX);
        assert_eq!(net & host, 0);
    }
    for p in 0..=128u8 {
        let net = u128::from_be_bytes(netmask_v6(p).unwrap());
        let host = u128::from_be_bytes(hostmask_v6(p).unwrap());
        assert_eq!(net | host, u128::MAX);
        assert_eq!(net & host, 0);
    }
    assert!(netmask_v4(33).is_err());
    assert!(netmask_v6(129).is_err());
}

#[test]
fn test_network_of_idempotent() {
    for text in ["192.168.1.5/24", "10.255.0.1/9", "2001:db8::1/64", "::1/0"] {
        let net = encode(text, Variant::Permissive).unwrap();
        let once = network_of(&net).unwrap();
        assert_eq!(network_of(&once).unwrap(), once, "{text}");
    }
}

#[test]
fn test_scenarios() {
    // 1
    let net = encode("192.168.1.5/24", Variant::Permissive).unwrap();
    assert_eq!(net.to_record().len(), 7);
    assert_eq!(net.prefix(), 24);
    assert_eq!(format_display(&net), "192.168.1.5/24");

    // 2
    let host = encode("192.168.1.5", Variant::Permissive).unwrap();
    assert_eq!(host.prefix(), 32);
    assert_eq!(format_display(&host), "192.168.1.5");
    assert_eq!(format_canonical(&host), "192.168.1.5/32");

    // 3
    assert!(matches!(
        encode("192.168.1.5/24", Variant::Strict),
        Err(AddrError::InvalidNetwork { .. })
    ));

    // 4
    let v6 = encode("2001:db8::1/64", Variant::Permissive).unwrap();
    assert_eq!(
        format_host(&netmask_of(&v6).unwrap()),
        "ffff:ffff:ffff:ffff:0000:0000:0000:0000"
    );

    // 5
    assert_eq!(format_display(&broadcast_of(&net).unwrap()), "192.168.1.255/24");

    // 6
    let mac: MacAddr = "08:00:2b:01:02:03".parse().unwrap();
    assert_eq!(truncate_oui(&mac).to_string(), "08:00:2b:00:00:00");
}
