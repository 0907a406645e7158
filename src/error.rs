//! Error kinds reported by the calculator.
//!
//! Every calculator function returns these by value; nothing panics on bad input.

use thiserror::Error;

/// Why a CIDR input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// The input was not a string (only reachable through JSON values).
    #[error("input is not a string")]
    InvalidType,

    /// The input has no `/` separating address and prefix length.
    #[error("missing prefix length, expected A.B.C.D/P")]
    MissingPrefix,

    /// The input has the right shape but a part of it is invalid.
    #[error("malformed address: {0}")]
    Malformed(String),
}

impl CidrError {
    /// Short name of the error kind, used as a column value in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CidrError::InvalidType => "InvalidType",
            CidrError::MissingPrefix => "MissingPrefix",
            CidrError::Malformed(_) => "Malformed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(CidrError::InvalidType.kind(), "InvalidType");
        assert_eq!(CidrError::MissingPrefix.kind(), "MissingPrefix");
        assert_eq!(CidrError::Malformed("x".into()).kind(), "Malformed");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CidrError::Malformed("octet 366 is outside 0..=255".into()).to_string(),
            "malformed address: octet 366 is outside 0..=255"
        );
        assert_eq!(
            CidrError::MissingPrefix.to_string(),
            "missing prefix length, expected A.B.C.D/P"
        );
    }
}
