//! Domain models for the address calculator.
//!
//! - [`CidrAddress`] - IPv4 address with prefix length, parsed once
//! - [`IpClass`] - classful address category
//! - [`SubnetReport`] - every derived fact for one input

mod cidr;
mod class;
mod report;

pub use cidr::{CidrAddress, MAX_LENGTH};
pub use class::IpClass;
pub use report::SubnetReport;
