//! Summary of every derived fact for one CIDR input.

use super::{CidrAddress, IpClass};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// All subnet facts derived from a [`CidrAddress`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubnetReport {
    /// The parsed input.
    pub cidr: CidrAddress,
    pub address: Ipv4Addr,
    pub prefix_len: u8,
    pub binary_address: String,
    pub binary_mask: String,
    pub inverted_mask: String,
    /// Mask in dotted decimal.
    pub subnet_mask: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// Network + 1 on the last octet, may leave 0..=255 for /31 and /32.
    pub first_usable: String,
    /// Broadcast - 2 on the last octet, same caveat.
    pub penultimate_usable: String,
    /// Negative for /32.
    pub usable_hosts: i64,
    /// `None` when the first octet is 0.
    pub class: Option<IpClass>,
    pub private: bool,
}

impl From<CidrAddress> for SubnetReport {
    fn from(cidr: CidrAddress) -> Self {
        SubnetReport {
            cidr,
            address: cidr.addr(),
            prefix_len: cidr.prefix_len(),
            binary_address: cidr.binary_address(),
            binary_mask: cidr.binary_mask(),
            inverted_mask: cidr.inverted_mask(),
            subnet_mask: cidr.subnet_mask(),
            network: cidr.network(),
            broadcast: cidr.broadcast(),
            first_usable: cidr.first_usable(),
            penultimate_usable: cidr.penultimate_usable(),
            usable_hosts: cidr.usable_hosts(),
            class: cidr.class(),
            private: cidr.is_private(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_cidr() {
        let cidr: CidrAddress = "91.124.230.205/30".parse().unwrap();
        let report = SubnetReport::from(cidr);
        assert_eq!(report.network, Ipv4Addr::new(91, 124, 230, 204));
        assert_eq!(report.broadcast, Ipv4Addr::new(91, 124, 230, 207));
        assert_eq!(report.subnet_mask, Ipv4Addr::new(255, 255, 255, 252));
        assert_eq!(report.usable_hosts, 2);
        assert_eq!(report.class, Some(IpClass::A));
        assert!(!report.private);
    }

    #[test]
    fn test_report_json_fields() {
        let cidr: CidrAddress = "0.1.2.3/31".parse().unwrap();
        let value = serde_json::to_value(SubnetReport::from(cidr)).unwrap();
        assert_eq!(value["cidr"], "0.1.2.3/31");
        assert_eq!(value["network"], "0.1.2.2");
        assert_eq!(value["usable_hosts"], 0);
        assert!(value["class"].is_null());
        assert_eq!(value["private"], false);
    }
}
