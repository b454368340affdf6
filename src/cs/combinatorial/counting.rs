//! Closed-form counts of permutations, subsets and combinations.
//!
//! All results are `u128`. Products wrap on overflow instead of panicking, so
//! counts for large inputs are meaningless but never abort the caller.

use num_integer::Integer;

use crate::error::{non_negative, Error, Result};

/// Computes `n!`.
///
/// # Examples
/// ```
/// use combinatorics::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::NegativeFactorial(n));
    }
    Ok((2..=n as u128).fold(1u128, |acc, k| acc.wrapping_mul(k)))
}

/// Number of ordered arrangements of `length` slots drawn from
/// `number_of_elements` elements.
///
/// With replacement this is `n^length` (so `0^0 = 1`); without replacement it
/// is `n! / (n - length)!` and `length` may not exceed `n`.
///
/// # Examples
/// ```
/// use combinatorics::number_of_permutations;
///
/// assert_eq!(number_of_permutations(2, 3, true).unwrap(), 8);
/// assert_eq!(number_of_permutations(4, 3, false).unwrap(), 24);
/// assert!(number_of_permutations(3, 4, false).is_err());
/// ```
pub fn number_of_permutations(
    number_of_elements: i64,
    length: i64,
    with_replacement: bool,
) -> Result<u128> {
    let n = non_negative("number of elements", number_of_elements)?;
    let r = non_negative("length", length)?;
    if with_replacement {
        return Ok(wrapping_power(n as u128, r as u128));
    }
    if r > n {
        return Err(Error::LengthExceedsElements {
            length,
            available: n,
        });
    }
    Ok(falling_factorial(n as u128, r as u128))
}

/// Number of subsets of a set with `number_of_elements` elements, optionally
/// leaving out the empty set.
///
/// # Examples
/// ```
/// use combinatorics::number_of_subsets;
///
/// assert_eq!(number_of_subsets(3, true).unwrap(), 8);
/// assert_eq!(number_of_subsets(3, false).unwrap(), 7);
/// ```
pub fn number_of_subsets(number_of_elements: i64, allow_empty_set: bool) -> Result<u128> {
    let n = non_negative("number of elements", number_of_elements)?;
    let total = wrapping_power(2, n as u128);
    if allow_empty_set {
        Ok(total)
    } else {
        Ok(total.wrapping_sub(1))
    }
}

/// Number of unordered selections of `length` elements out of
/// `number_of_elements`.
///
/// Without replacement this is the binomial coefficient `C(n, length)`; with
/// replacement it is the multiset coefficient `C(n + length - 1, length)`.
///
/// # Examples
/// ```
/// use combinatorics::number_of_combinations;
///
/// assert_eq!(number_of_combinations(4, 3, false).unwrap(), 4);
/// assert_eq!(number_of_combinations(3, 2, true).unwrap(), 6);
/// ```
pub fn number_of_combinations(
    number_of_elements: i64,
    length: i64,
    with_replacement: bool,
) -> Result<u128> {
    let n = non_negative("number of elements", number_of_elements)? as u128;
    let r = non_negative("length", length)? as u128;
    if with_replacement {
        if r == 0 {
            return Ok(1);
        }
        return Ok(binomial(n + r - 1, r));
    }
    if r > n {
        return Err(Error::LengthExceedsElements {
            length,
            available: n as usize,
        });
    }
    Ok(binomial(n, r))
}

/// `base^exp` modulo `2^128`, for exponents of any size.
fn wrapping_power(base: u128, exp: u128) -> u128 {
    if let Ok(small) = u32::try_from(exp) {
        return base.wrapping_pow(small);
    }
    match base {
        0 | 1 => base,
        _ => {
            let mut acc = 1u128;
            let mut square = base;
            let mut rest = exp;
            while rest > 0 {
                if rest & 1 == 1 {
                    acc = acc.wrapping_mul(square);
                }
                square = square.wrapping_mul(square);
                rest >>= 1;
            }
            acc
        }
    }
}

/// `n * (n - 1) * ... * (n - r + 1)`, i.e. `n! / (n - r)!` for `r <= n`.
fn falling_factorial(n: u128, r: u128) -> u128 {
    (n - r + 1..=n).fold(1u128, |acc, k| acc.wrapping_mul(k))
}

/// `C(n, r)` for `r <= n`, or 0 when `r > n`.
///
/// Each step multiplies by `(n - i)` and divides by `(i + 1)`; the partial
/// result is always an integer, so dividing out the gcd first keeps the
/// intermediate product no larger than the next coefficient.
fn binomial(n: u128, r: u128) -> u128 {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut acc = 1u128;
    for i in 0..r {
        let divisor = i + 1;
        let g = acc.gcd(&divisor);
        let factor = (n - i) / (divisor / g);
        acc = (acc / g).wrapping_mul(factor);
    }
    acc
}
