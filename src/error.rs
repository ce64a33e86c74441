//! Error types for address parsing, encoding and arithmetic.

use thiserror::Error;

/// Errors returned by every fallible operation in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Input text does not match the grammar of the requested family.
    #[error("invalid {family} literal \"{input}\": {reason}")]
    Parse {
        family: &'static str,
        input: String,
        reason: String,
    },

    /// Neither the IPv4 nor the IPv6 grammar accepted the address.
    #[error("invalid network address \"{input}\": not IPv4 ({ipv4}), not IPv6 ({ipv6})")]
    NoFamilyMatched {
        input: String,
        ipv4: String,
        ipv6: String,
    },

    /// Address parses but violates the strict zero-host-bits rule, or the
    /// prefix length is outside the family's range.
    #[error("invalid network {input}: {reason}")]
    InvalidNetwork { input: String, reason: String },

    /// Destination buffer cannot hold the result.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Encoded record is not one this crate produces.
    #[error("corrupt record: {reason}")]
    CorruptRecord { reason: String },

    /// Operation called on a value of the wrong shape or family.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

impl AddrError {
    pub(crate) fn parse(family: &'static str, input: &str, reason: impl Into<String>) -> Self {
        AddrError::Parse {
            family,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_network(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AddrError::InvalidNetwork {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        AddrError::CorruptRecord {
            reason: reason.into(),
        }
    }

    /// True for errors caused by bad input text rather than a caller bug.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AddrError::Parse { .. }
                | AddrError::NoFamilyMatched { .. }
                | AddrError::InvalidNetwork { .. }
        )
    }
}

/// Result type alias using [`AddrError`].
pub type Result<T> = std::result::Result<T, AddrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = AddrError::parse("IPv4", "1.2.3", "expected 4 octets, got 3");
        assert_eq!(
            e.to_string(),
            "invalid IPv4 literal \"1.2.3\": expected 4 octets, got 3"
        );

        let e = AddrError::BufferTooSmall {
            needed: 7,
            available: 4,
        };
        assert_eq!(e.to_string(), "buffer too small: need 7 bytes, have 4");
    }

    #[test]
    fn test_is_input_error() {
        assert!(AddrError::invalid_network("10.0.0.1/8", "host bits set").is_input_error());
        assert!(!AddrError::corrupt("bad family tag").is_input_error());
        assert!(!AddrError::PreconditionViolation("x".into()).is_input_error());
    }
}
