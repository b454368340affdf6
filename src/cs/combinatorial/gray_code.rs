//! Reflected binary Gray code, as digit sequences or packed into integers.
//!
//! Consecutive codes (including last back to first) differ in exactly one
//! digit.

use super::levels::{last_level, prepended};
use crate::error::{Error, Result};

/// Largest length `gray_code_values` can pack into a `u64` index range.
const MAX_PACKED_LENGTH: i64 = 63;

/// Returns all `2^length` binary sequences of `length` digits in reflected
/// Gray code order.
///
/// Level `k + 1` is the previous level with `0` prefixed, followed by the
/// previous level in reverse with `1` prefixed.
///
/// # Examples
/// ```
/// use combinatorics::gray_code_order;
///
/// let codes = gray_code_order(2).unwrap();
/// assert_eq!(codes, vec![vec![0, 0], vec![0, 1], vec![1, 1], vec![1, 0]]);
/// assert!(gray_code_order(0).is_err());
/// ```
pub fn gray_code_order(length: i64) -> Result<Vec<Vec<u8>>> {
    if length < 1 {
        return Err(Error::EmptyGrayCode { length });
    }
    log::debug!("building gray code of length {}", length);
    let seed = vec![vec![0u8], vec![1u8]];
    Ok(last_level(seed, length as usize, |prev| {
        let zeros = prev.iter().map(|code| prepended(&0, code));
        let ones = prev.iter().rev().map(|code| prepended(&1, code));
        zeros.chain(ones).collect()
    }))
}

/// Returns the codes of `gray_code_order(length)` with exactly
/// `number_of_ones` ones, keeping their relative order.
///
/// # Examples
/// ```
/// use combinatorics::gray_code_order_having_ones;
///
/// let codes = gray_code_order_having_ones(3, 2).unwrap();
/// assert_eq!(codes, vec![vec![0, 1, 1], vec![1, 1, 0], vec![1, 0, 1]]);
/// assert!(gray_code_order_having_ones(3, 4).is_err());
/// ```
pub fn gray_code_order_having_ones(length: i64, number_of_ones: i64) -> Result<Vec<Vec<u8>>> {
    if number_of_ones < 0 || number_of_ones > length {
        return Err(Error::OnesOutOfRange {
            ones: number_of_ones,
            length,
        });
    }
    let codes = gray_code_order(length)?;
    Ok(codes
        .into_iter()
        .filter(|code| hamming_weight(code) == number_of_ones as usize)
        .collect())
}

/// Returns the Gray codes of `length` bits as integers via `i ^ (i >> 1)`.
///
/// The most significant bit corresponds to the first digit of the matching
/// entry in `gray_code_order`. Lengths above 63 are rejected.
///
/// # Examples
/// ```
/// use combinatorics::gray_code_values;
///
/// assert_eq!(gray_code_values(2).unwrap(), vec![0, 1, 3, 2]);
/// ```
pub fn gray_code_values(length: i64) -> Result<Vec<u64>> {
    if length < 1 {
        return Err(Error::EmptyGrayCode { length });
    }
    if length > MAX_PACKED_LENGTH {
        return Err(Error::GrayCodeTooLong {
            length,
            max: MAX_PACKED_LENGTH,
        });
    }
    let size = 1u64 << length;
    Ok((0..size).map(|i| i ^ (i >> 1)).collect())
}

fn hamming_weight(code: &[u8]) -> usize {
    code.iter().filter(|&&digit| digit == 1).count()
}
