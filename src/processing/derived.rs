//! Network, broadcast and usable-range facts derived from a raw CIDR string.
//!
//! Each function re-derives its inputs from `raw` instead of sharing parsed
//! state. None of them run [`crate::validate`]; invalid input gives an `Err`
//! or a meaningless value, never a panic.

use super::binary::{
    combine_binary, from_binary, to_binary_mask, to_binary_octets, to_inverted_mask, BitOp,
};
use super::decompose::{extract_address, extract_prefix_length};
use super::validate::parse_octets;
use crate::error::CidrError;
use crate::models::MAX_LENGTH;

/// Binary address AND binary mask, decoded to dotted decimal.
///
/// # Examples
/// ```
/// use ip_calc::network_address;
/// assert_eq!(network_address("91.124.230.205/30").unwrap(), "91.124.230.204");
/// ```
pub fn network_address(raw: &str) -> Result<String, CidrError> {
    let binary_ip = to_binary_octets(extract_address(raw))?;
    let binary_mask = to_binary_mask(extract_prefix_length(raw)?)?;
    from_binary(&combine_binary(&binary_ip, &binary_mask, BitOp::And)?)
}

/// Binary address OR inverted mask, decoded to dotted decimal.
pub fn broadcast_address(raw: &str) -> Result<String, CidrError> {
    let binary_ip = to_binary_octets(extract_address(raw))?;
    let inverted_mask = to_inverted_mask(extract_prefix_length(raw)?)?;
    from_binary(&combine_binary(&binary_ip, &inverted_mask, BitOp::Or)?)
}

/// Network address with the last octet plus one, whatever the prefix.
pub fn first_usable_address(raw: &str) -> Result<String, CidrError> {
    let network = parse_octets(&network_address(raw)?)?;
    Ok(shift_last_octet(network, 1))
}

/// Broadcast address with the last octet minus two, whatever the prefix.
pub fn penultimate_usable_address(raw: &str) -> Result<String, CidrError> {
    let broadcast = parse_octets(&broadcast_address(raw)?)?;
    Ok(shift_last_octet(broadcast, -2))
}

/// `2^(32 - prefix) - 2`.
///
/// ```
/// use ip_calc::usable_host_count;
/// assert_eq!(usable_host_count("91.124.230.205/0").unwrap(), 4294967294);
/// assert_eq!(usable_host_count("91.124.230.205/32").unwrap(), -1);
/// ```
pub fn usable_host_count(raw: &str) -> Result<i64, CidrError> {
    let prefix_len = extract_prefix_length(raw)?;
    if prefix_len > MAX_LENGTH {
        return Err(CidrError::Malformed(format!(
            "prefix length {prefix_len} is outside 0..={MAX_LENGTH}"
        )));
    }
    Ok(host_count(prefix_len))
}

pub(crate) fn host_count(prefix_len: u8) -> i64 {
    (1i64 << (MAX_LENGTH - prefix_len)) - 2
}

/// Dotted decimal with `delta` added to the last octet, not clamped to 0..=255.
pub(crate) fn shift_last_octet(octets: [u8; 4], delta: i16) -> String {
    let [a, b, c, d] = octets;
    format!("{a}.{b}.{c}.{}", i16::from(d) + delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CidrAddress;

    const RAW: &str = "91.124.230.205/30";

    #[test]
    fn test_known_values() {
        assert_eq!(network_address(RAW).unwrap(), "91.124.230.204");
        assert_eq!(broadcast_address(RAW).unwrap(), "91.124.230.207");
        assert_eq!(first_usable_address(RAW).unwrap(), "91.124.230.205");
        assert_eq!(penultimate_usable_address(RAW).unwrap(), "91.124.230.205");
        assert_eq!(usable_host_count(RAW).unwrap(), 2);
        assert_eq!(usable_host_count("91.124.230.205/0").unwrap(), 4294967294);
    }

    #[test]
    fn test_host_counts() {
        assert_eq!(host_count(24), 254);
        assert_eq!(host_count(30), 2);
        assert_eq!(host_count(31), 0);
        assert_eq!(host_count(32), -1);
        assert!(usable_host_count("1.2.3.4/33").is_err());
    }

    #[test]
    fn test_short_last_octet() {
        assert_eq!(first_usable_address("10.0.0.7/29").unwrap(), "10.0.0.1");
        assert_eq!(penultimate_usable_address("10.0.0.7/29").unwrap(), "10.0.0.5");
        assert_eq!(penultimate_usable_address("10.0.0.7/32").unwrap(), "10.0.0.5");
    }

    #[test]
    fn test_degenerate_ranges_run_unconditionally() {
        assert_eq!(first_usable_address("10.0.0.255/32").unwrap(), "10.0.0.256");
        assert_eq!(penultimate_usable_address("10.0.0.0/32").unwrap(), "10.0.0.-2");
    }

    #[test]
    fn test_string_and_integer_paths_agree() {
        for raw in [
            "91.124.230.205/30",
            "10.20.30.40/0",
            "10.20.30.40/1",
            "172.16.255.1/12",
            "192.168.1.130/25",
            "255.255.255.255/32",
            "0.0.0.0/31",
        ] {
            let cidr: CidrAddress = raw.parse().unwrap();
            assert_eq!(network_address(raw).unwrap(), cidr.network().to_string());
            assert_eq!(broadcast_address(raw).unwrap(), cidr.broadcast().to_string());
            assert_eq!(first_usable_address(raw).unwrap(), cidr.first_usable());
            assert_eq!(
                penultimate_usable_address(raw).unwrap(),
                cidr.penultimate_usable()
            );
            assert_eq!(usable_host_count(raw).unwrap(), cidr.usable_hosts());
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(network_address(RAW), network_address(RAW));
        assert_eq!(broadcast_address(RAW), broadcast_address(RAW));
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        assert_eq!(network_address("10.0.0.1"), Err(CidrError::MissingPrefix));
        assert!(broadcast_address("10.0.1/24").is_err());
    }
}
