//! Address class and private range checks.

use super::decompose::extract_address;
use super::validate::parse_octets;
use crate::error::CidrError;
use crate::models::IpClass;

/// Class of the address in `raw`, `None` when the first octet is 0.
pub fn ip_class(raw: &str) -> Result<Option<IpClass>, CidrError> {
    let octets = parse_octets(extract_address(raw))?;
    Ok(class_of(octets[0]))
}

/// Whether the address in `raw` falls in 10/8, 172.16/12 or 192.168/16.
pub fn is_private(raw: &str) -> Result<bool, CidrError> {
    let octets = parse_octets(extract_address(raw))?;
    Ok(is_private_octets(octets))
}

pub(crate) fn class_of(first_octet: u8) -> Option<IpClass> {
    IpClass::ALL
        .into_iter()
        .find(|class| class.first_octets().contains(&first_octet))
}

pub(crate) fn is_private_octets(octets: [u8; 4]) -> bool {
    match octets {
        [10, ..] => true,
        [172, 16..=31, ..] => true,
        [192, 168, ..] => true,
        _ => false,
    }
}
