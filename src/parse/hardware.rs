//! Hardware address parser for 6-byte (MAC) and 8-byte (EUI-64) forms.

use crate::error::{AddrError, Result};

fn family_name(width: usize) -> &'static str {
    if width == 8 {
        "EUI-64"
    } else {
        "MAC"
    }
}

/// Remove accepted separators (`:`, `-`, `.`) and return the hex digits.
///
/// Any character that is neither a separator nor a hex digit is rejected.
pub fn strip_separators(input: &str) -> std::result::Result<String, char> {
    let mut cleaned = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            ':' | '-' | '.' => continue,
            c if c.is_ascii_hexdigit() => cleaned.push(c.to_ascii_lowercase()),
            c => return Err(c),
        }
    }
    Ok(cleaned)
}

/// Parse a hardware address of `N` bytes, most significant byte first.
///
/// Separator placement is free: `08:00:2b:01:02:03`, `0800.2b01.0203` and
/// `08002b010203` all give the same bytes.
///
/// # Examples
/// ```
/// use network_address::parse::parse_hardware;
/// let mac: [u8; 6] = parse_hardware("08-00-2b-01-02-03").unwrap();
/// assert_eq!(mac, [0x08, 0x00, 0x2b, 0x01, 0x02, 0x03]);
/// ```
pub fn parse_hardware<const N: usize>(input: &str) -> Result<[u8; N]> {
    let family = family_name(N);
    let cleaned = strip_separators(input)
        .map_err(|c| AddrError::parse(family, input, format!("unexpected character '{c}'")))?;

    if cleaned.len() != N * 2 {
        return Err(AddrError::parse(
            family,
            input,
            format!("expected {} hex digits, got {}", N * 2, cleaned.len()),
        ));
    }

    let mut bytes = [0u8; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let pair = &cleaned[i * 2..i * 2 + 2];
        *byte = u8::from_str_radix(pair, 16)
            .map_err(|e| AddrError::parse(family, input, format!("byte \"{pair}\": {e}")))?;
    }
    log::trace!("parse_hardware::<{N}>({input}) -> {bytes:02x?}");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("08:00:2B-01.02").unwrap(), "08002b0102");
        assert_eq!(strip_separators("08 00").unwrap_err(), ' ');
        assert_eq!(strip_separators("0g").unwrap_err(), 'g');
    }

    #[test]
    fn test_parse_hardware_6() {
        let expected = [0x08, 0x00, 0x2b, 0x01, 0x02, 0x03];
        for input in [
            "08:00:2b:01:02:03",
            "08-00-2b-01-02-03",
            "08002b:010203",
            "08002b-010203",
            "0800.2b01.0203",
            "0800-2b01-0203",
            "08002b010203",
            "08:00:2B:01:02:03",
        ] {
            let mac: [u8; 6] = parse_hardware(input).unwrap();
            assert_eq!(mac, expected, "input {input}");
        }
    }

    #[test]
    fn test_parse_hardware_8() {
        let mac: [u8; 8] = parse_hardware("08:00:2b:01:02:03:04:05").unwrap();
        assert_eq!(mac, [0x08, 0x00, 0x2b, 0x01, 0x02, 0x03, 0x04, 0x05]);
        let mac: [u8; 8] = parse_hardware("0800.2b01.0203.0405").unwrap();
        assert_eq!(mac, [0x08, 0x00, 0x2b, 0x01, 0x02, 0x03, 0x04, 0x05]);
    }

    #[test]
    fn test_parse_hardware_wrong_length() {
        assert!(parse_hardware::<6>("08:00:2b:01:02").is_err());
        assert!(parse_hardware::<6>("08:00:2b:01:02:03:04:05").is_err());
        assert!(parse_hardware::<8>("08:00:2b:01:02:03").is_err());
        assert!(parse_hardware::<6>("").is_err());
        // odd digit count
        assert!(parse_hardware::<6>("8:00:2b:01:02:03").is_err());
    }

    #[test]
    fn test_parse_hardware_bad_chars() {
        let err = parse_hardware::<6>("08:00:2b:01:02:0z").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid MAC literal \"08:00:2b:01:02:0z\": unexpected character 'z'"
        );
        assert!(parse_hardware::<6>("08 00 2b 01 02 03").is_err());
    }
}
