//! Address calculations.
//!
//! Pure functions over raw `A.B.C.D/P` strings, in dependency order:
//! - [`validate`] - input validation
//! - [`decompose`] - address and prefix extraction
//! - [`binary`] - binary renderings of address and masks
//! - [`derived`] - network, broadcast, usable range and host count
//! - [`classify`] - address class and private ranges

pub(crate) mod binary;
pub(crate) mod classify;
pub(crate) mod decompose;
pub(crate) mod derived;
pub(crate) mod validate;

// Re-export public functions
pub use binary::{
    binary_mask_from_raw, combine_binary, from_binary, to_binary_mask, to_binary_octets,
    to_inverted_mask, BitOp,
};
pub use classify::{ip_class, is_private};
pub use decompose::{extract_address, extract_prefix_length};
pub use derived::{
    broadcast_address, first_usable_address, network_address, penultimate_usable_address,
    usable_host_count,
};
pub use validate::{validate, validate_value};
