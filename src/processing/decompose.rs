//! Splitting a CIDR string into its address and prefix parts.
//!
//! These do not validate; run [`crate::validate`] first.

use crate::error::CidrError;

/// The text before the first `/`, or all of `raw` when there is none.
pub fn extract_address(raw: &str) -> &str {
    raw.split_once('/').map_or(raw, |(address, _)| address)
}

/// The integer after the first `/`.
pub fn extract_prefix_length(raw: &str) -> Result<u8, CidrError> {
    let (_, prefix) = raw.split_once('/').ok_or(CidrError::MissingPrefix)?;
    prefix
        .trim()
        .parse()
        .map_err(|_| CidrError::Malformed(format!("prefix length {prefix:?} is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_address() {
        assert_eq!(extract_address("91.124.230.205/30"), "91.124.230.205");
        assert_eq!(extract_address("91.124.230.205"), "91.124.230.205");
    }

    #[test]
    fn test_extract_prefix_length() {
        assert_eq!(extract_prefix_length("91.124.230.205/30"), Ok(30));
        assert_eq!(extract_prefix_length("91.124.230.205/0"), Ok(0));
        assert_eq!(
            extract_prefix_length("91.124.230.205"),
            Err(CidrError::MissingPrefix)
        );
        assert!(extract_prefix_length("91.124.230.205/x").is_err());
    }

    #[test]
    fn test_no_range_check() {
        // Out of range octets pass through untouched.
        assert_eq!(extract_address("366.1.1.1/40"), "366.1.1.1");
        assert_eq!(extract_prefix_length("366.1.1.1/40"), Ok(40));
    }
}
