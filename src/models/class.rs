//! Classful address categories.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Legacy address class, keyed on the first octet.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
}

impl IpClass {
    pub const ALL: [IpClass; 5] = [IpClass::A, IpClass::B, IpClass::C, IpClass::D, IpClass::E];

    /// First-octet values belonging to this class.
    pub fn first_octets(&self) -> RangeInclusive<u8> {
        match self {
            IpClass::A => 1..=127,
            IpClass::B => 128..=191,
            IpClass::C => 192..=223,
            IpClass::D => 224..=239,
            IpClass::E => 240..=255,
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letter = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
        };
        f.write_str(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_cover_1_to_255() {
        let covered: usize = IpClass::ALL.iter().map(|c| c.first_octets().count()).sum();
        assert_eq!(covered, 255);
        assert!(IpClass::ALL.iter().all(|c| !c.first_octets().contains(&0)));
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(IpClass::C.to_string(), "C");
        assert_eq!(serde_json::to_string(&IpClass::E).unwrap(), "\"E\"");
    }
}
