//! IPv4 address in CIDR notation.
//!
//! Provides [`CidrAddress`], the parsed form of `A.B.C.D/P`, with every derived
//! subnet fact available as a method.

use super::IpClass;
use crate::error::CidrError;
use crate::processing::{binary, classify, derived, validate};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// IPv4 address with its prefix length.
///
/// Both fields are checked on construction, so the methods never fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CidrAddress {
    octets: [u8; 4],
    prefix_len: u8,
}

impl CidrAddress {
    /// Create a new [`CidrAddress`] from its parts.
    ///
    /// # Examples
    /// ```
    /// use ip_calc::models::CidrAddress;
    /// let cidr = CidrAddress::new([10, 0, 0, 1], 8).unwrap();
    /// assert_eq!(cidr.to_string(), "10.0.0.1/8");
    /// assert!(CidrAddress::new([10, 0, 0, 1], 33).is_err());
    /// ```
    pub fn new(octets: [u8; 4], prefix_len: u8) -> Result<CidrAddress, CidrError> {
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::Malformed(format!(
                "prefix length {prefix_len} is outside 0..={MAX_LENGTH}"
            )));
        }
        Ok(CidrAddress { octets, prefix_len })
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The address part without the prefix.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }

    /// Subnet mask as u32, `prefix_len` leading ones.
    pub fn mask(&self) -> u32 {
        binary::mask_bits(self.prefix_len)
    }

    /// Subnet mask in dotted decimal, e.g. `255.255.255.252` for /30.
    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask())
    }

    /// Address as four 8-bit groups joined by `.`.
    pub fn binary_address(&self) -> String {
        binary::render_bits(u32::from(self.addr()))
    }

    pub fn binary_mask(&self) -> String {
        binary::render_bits(self.mask())
    }

    /// Complement of [`CidrAddress::binary_mask`], the host bits set.
    pub fn inverted_mask(&self) -> String {
        binary::render_bits(!self.mask())
    }

    /// Address with all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr()) & self.mask())
    }

    /// Address with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()) | !self.mask())
    }

    /// Network address with the last octet plus one.
    ///
    /// /31 and /32 are not special-cased, so `x.y.z.255/32` gives `x.y.z.256`.
    pub fn first_usable(&self) -> String {
        derived::shift_last_octet(self.network().octets(), 1)
    }

    /// Broadcast address with the last octet minus two.
    pub fn penultimate_usable(&self) -> String {
        derived::shift_last_octet(self.broadcast().octets(), -2)
    }

    /// `2^(32 - prefix_len) - 2`, which is 0 for /31 and -1 for /32.
    pub fn usable_hosts(&self) -> i64 {
        derived::host_count(self.prefix_len)
    }

    pub fn class(&self) -> Option<IpClass> {
        classify::class_of(self.octets[0])
    }

    pub fn is_private(&self) -> bool {
        classify::is_private_octets(self.octets)
    }
}

impl FromStr for CidrAddress {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate::parse(s)
    }
}

impl std::fmt::Display for CidrAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix_len)
    }
}

impl Serialize for CidrAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrAddress {
    fn deserialize<D>(deserializer: D) -> Result<CidrAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
