//! Binary renderings of addresses and masks.
//!
//! Every rendering is four 8-bit groups joined by `.`, 35 characters long.

use super::decompose::extract_prefix_length;
use super::validate::parse_octets;
use crate::error::CidrError;
use crate::models::MAX_LENGTH;
use itertools::Itertools;

/// Bitwise operation applied position by position in [`combine_binary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BitOp {
    And,
    Or,
}

/// Render a dotted decimal address as dotted binary.
///
/// # Examples
/// ```
/// use ip_calc::to_binary_octets;
/// assert_eq!(
///     to_binary_octets("91.124.230.205").unwrap(),
///     "01011011.01111100.11100110.11001101"
/// );
/// ```
pub fn to_binary_octets(address: &str) -> Result<String, CidrError> {
    let octets = parse_octets(address)?;
    Ok(render_bits(u32::from_be_bytes(octets)))
}

/// Mask with the first `prefix_len` of 32 bits set.
pub fn to_binary_mask(prefix_len: u8) -> Result<String, CidrError> {
    check_prefix_len(prefix_len)?;
    Ok(render_bits(mask_bits(prefix_len)))
}

/// Mask with the first `prefix_len` bits clear and the host bits set.
pub fn to_inverted_mask(prefix_len: u8) -> Result<String, CidrError> {
    check_prefix_len(prefix_len)?;
    Ok(render_bits(!mask_bits(prefix_len)))
}

/// The binary mask for the prefix of a raw CIDR string.
pub fn binary_mask_from_raw(raw: &str) -> Result<String, CidrError> {
    to_binary_mask(extract_prefix_length(raw)?)
}

/// Decode dotted binary back to dotted decimal. Inverse of [`to_binary_octets`].
///
/// Each of the 4 groups must be exactly 8 characters of `0` and `1`.
pub fn from_binary(binary_row: &str) -> Result<String, CidrError> {
    let groups: Vec<&str> = binary_row.split('.').collect();
    if groups.len() != 4 {
        return Err(CidrError::Malformed(format!(
            "expected 4 binary groups in {binary_row:?}, found {}",
            groups.len()
        )));
    }
    let octets = groups
        .iter()
        .map(|group| {
            let is_bits = group.len() == 8 && group.bytes().all(|b| b == b'0' || b == b'1');
            is_bits
                .then(|| u8::from_str_radix(group, 2).ok())
                .flatten()
                .ok_or_else(|| {
                    CidrError::Malformed(format!("{group:?} is not an 8-bit binary group"))
                })
        })
        .collect::<Result<Vec<u8>, CidrError>>()?;
    Ok(octets.iter().join("."))
}

/// Combine two dotted binary strings bit by bit; separators must line up.
pub fn combine_binary(left: &str, right: &str, op: BitOp) -> Result<String, CidrError> {
    if left.len() != right.len() {
        return Err(CidrError::Malformed(format!(
            "binary strings differ in length: {} and {}",
            left.len(),
            right.len()
        )));
    }
    left.chars()
        .zip(right.chars())
        .map(|pair| match pair {
            ('.', '.') => Ok('.'),
            (l @ ('0' | '1'), r @ ('0' | '1')) => {
                let (l, r) = (l == '1', r == '1');
                let bit = match op {
                    BitOp::And => l && r,
                    BitOp::Or => l || r,
                };
                Ok(if bit { '1' } else { '0' })
            }
            (l, r) => Err(CidrError::Malformed(format!(
                "cannot combine {l:?} with {r:?}"
            ))),
        })
        .collect()
}

pub(crate) fn render_bits(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .join(".")
}

/// `prefix_len` leading ones; callers keep `prefix_len <= 32`.
pub(crate) fn mask_bits(prefix_len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(prefix_len);
    u32::MAX.checked_shl(u32::from(right_len)).unwrap_or(0)
}

fn check_prefix_len(prefix_len: u8) -> Result<(), CidrError> {
    if prefix_len > MAX_LENGTH {
        Err(CidrError::Malformed(format!(
            "prefix length {prefix_len} is outside 0..={MAX_LENGTH}"
        )))
    } else {
        Ok(())
    }
}
