//! Input validation for `A.B.C.D/P` strings.

use crate::error::CidrError;
use crate::models::{CidrAddress, MAX_LENGTH};
use serde_json::Value;

/// Check that `raw` is a CIDR string with 4 octets in 0..=255 and a prefix in 0..=32.
///
/// # Examples
/// ```
/// use ip_calc::{validate, CidrError};
/// assert_eq!(validate("230.248.10.10/20"), Ok(()));
/// assert_eq!(validate("230.248.10.10"), Err(CidrError::MissingPrefix));
/// ```
pub fn validate(raw: &str) -> Result<(), CidrError> {
    parse(raw).map(|_| ())
}

/// Like [`validate`], for input that may not be a string at all.
pub fn validate_value(value: &Value) -> Result<(), CidrError> {
    match value {
        Value::String(raw) => validate(raw),
        other => {
            log::trace!("validate_value() rejected non-string {other}");
            Err(CidrError::InvalidType)
        }
    }
}

/// Parse a full CIDR string. The prefix is checked before the octets.
pub(crate) fn parse(raw: &str) -> Result<CidrAddress, CidrError> {
    let raw = raw.trim();
    let (address, prefix) = raw.split_once('/').ok_or(CidrError::MissingPrefix)?;
    let prefix_len = parse_prefix(prefix)?;
    let octets = parse_octets(address)?;
    log::trace!("parse({raw}) octets={octets:?} prefix_len={prefix_len}");
    CidrAddress::new(octets, prefix_len)
}

fn parse_prefix(prefix: &str) -> Result<u8, CidrError> {
    let value: i64 = prefix.trim().parse().map_err(|_| {
        CidrError::Malformed(format!("prefix length {prefix:?} is not a number"))
    })?;
    u8::try_from(value)
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or_else(|| {
            CidrError::Malformed(format!(
                "prefix length {value} is outside 0..={MAX_LENGTH}"
            ))
        })
}

/// Split a dotted address into exactly 4 decimal octets.
pub(crate) fn parse_octets(address: &str) -> Result<[u8; 4], CidrError> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return Err(CidrError::Malformed(format!(
            "expected 4 octets in {address:?}, found {}",
            parts.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        let value: i64 = part.trim().parse().map_err(|_| {
            CidrError::Malformed(format!("octet {part:?} is not a number"))
        })?;
        *octet = u8::try_from(value)
            .map_err(|_| CidrError::Malformed(format!("octet {value} is outside 0..=255")))?;
    }
    Ok(octets)
}
