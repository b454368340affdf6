use super::distinct::distinct_elements;
use super::levels::{last_level, prepended};
use crate::error::{non_negative, Error, Result};

/// Enumerates the ordered arrangements of `length` slots filled from
/// `elements`.
///
/// Candidates are taken from `elements` as given, in input order, so a value
/// repeated in the input is offered once per occurrence. Without replacement
/// a candidate is rejected when the tuple being extended already contains it,
/// and `length` may not exceed the number of distinct elements. Tuples grow by
/// prepending, which yields lexicographic order with respect to input
/// position. A `length` of 0 yields a single empty arrangement.
///
/// # Examples
/// ```
/// use combinatorics::enumerate_permutations;
///
/// let perms = enumerate_permutations(&['a', 'b', 'c'], 2, false).unwrap();
/// assert_eq!(perms, vec![
///     vec!['a', 'b'],
///     vec!['a', 'c'],
///     vec!['b', 'a'],
///     vec!['b', 'c'],
///     vec!['c', 'a'],
///     vec!['c', 'b'],
/// ]);
/// ```
pub fn enumerate_permutations<T: PartialEq + Clone>(
    elements: &[T],
    length: i64,
    with_replacement: bool,
) -> Result<Vec<Vec<T>>> {
    let slots = non_negative("length", length)?;
    let available = distinct_elements(elements).len();
    if !with_replacement && slots > available {
        return Err(Error::LengthExceedsElements { length, available });
    }
    log::debug!(
        "enumerating permutations: {} elements ({} distinct), length {}, with replacement: {}",
        elements.len(),
        available,
        slots,
        with_replacement
    );
    if slots == 0 {
        return Ok(vec![Vec::new()]);
    }

    let seed = elements.iter().map(|x| vec![x.clone()]).collect();
    let result = last_level(seed, slots, |prev| {
        let mut level = Vec::new();
        for next in elements {
            for tuple in prev {
                if with_replacement || !tuple.contains(next) {
                    level.push(prepended(next, tuple));
                }
            }
        }
        level
    });
    log::debug!("enumerated {} permutations", result.len());
    Ok(result)
}
