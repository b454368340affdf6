use super::distinct::{distinct_elements, rank_of};
use super::levels::{appended, last_level, Level};
use crate::error::{non_negative, Error, Result};

/// Extends every tuple of `prev` with each distinct element ranked after the
/// tuple's last element (or at the same rank when `allow_repeat` is set).
///
/// Keeping ranks non-decreasing along a tuple is what makes every selection
/// appear exactly once.
pub(crate) fn extend_by_rank<T: PartialEq + Clone>(
    prev: &Level<T>,
    distinct: &[T],
    allow_repeat: bool,
) -> Level<T> {
    let mut level = Vec::new();
    for tuple in prev {
        let last = match tuple.last().and_then(|x| rank_of(distinct, x)) {
            Some(rank) => rank,
            None => continue,
        };
        let start = if allow_repeat { last } else { last + 1 };
        for next in distinct.iter().skip(start) {
            level.push(appended(tuple, next));
        }
    }
    level
}

/// Enumerates the unordered selections of `length` elements.
///
/// Each selection is listed once, with its elements in first-occurrence
/// order of the input. Without replacement `length` may not exceed the
/// number of distinct elements; with replacement an element may be picked
/// repeatedly. A `length` of 0 yields a single empty selection.
///
/// # Examples
/// ```
/// use combinatorics::enumerate_combinations;
///
/// let combos = enumerate_combinations(&['a', 'b', 'c'], 2, false).unwrap();
/// assert_eq!(combos, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
///
/// let combos = enumerate_combinations(&['a', 'b'], 2, true).unwrap();
/// assert_eq!(combos, vec![vec!['a', 'a'], vec!['a', 'b'], vec!['b', 'b']]);
/// ```
pub fn enumerate_combinations<T: PartialEq + Clone>(
    elements: &[T],
    length: i64,
    with_replacement: bool,
) -> Result<Vec<Vec<T>>> {
    if length == 0 {
        return Ok(vec![Vec::new()]);
    }
    let size = non_negative("length", length)?;
    let distinct = distinct_elements(elements);
    if !with_replacement && size > distinct.len() {
        return Err(Error::LengthExceedsElements {
            length,
            available: distinct.len(),
        });
    }
    log::debug!(
        "enumerating combinations: {} distinct elements, length {}, with replacement: {}",
        distinct.len(),
        size,
        with_replacement
    );

    let seed = distinct.iter().map(|x| vec![x.clone()]).collect();
    let result = last_level(seed, size, |prev| {
        extend_by_rank(prev, &distinct, with_replacement)
    });
    log::debug!("enumerated {} combinations", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::combinatorial::counting::number_of_combinations;

    const ELEMENTS: [char; 3] = ['a', 'b', 'c'];

    #[test]
    fn test_full_length_returns_input() {
        let combos = enumerate_combinations(&ELEMENTS, 3, false).unwrap();
        assert_eq!(combos, vec![ELEMENTS.to_vec()]);
    }

    #[test]
    fn test_pairs_without_replacement() {
        let combos = enumerate_combinations(&ELEMENTS, 2, false).unwrap();
        assert_eq!(combos, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
    }

    #[test]
    fn test_pairs_with_replacement() {
        let combos = enumerate_combinations(&ELEMENTS, 2, true).unwrap();
        assert_eq!(
            combos,
            vec![
                vec!['a', 'a'],
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['b', 'b'],
                vec!['b', 'c'],
                vec!['c', 'c'],
            ]
        );
    }

    #[test]
    fn test_zero_length() {
        let empty: Vec<Vec<char>> = vec![vec![]];
        assert_eq!(enumerate_combinations(&ELEMENTS, 0, false).unwrap(), empty);
        assert_eq!(enumerate_combinations(&ELEMENTS, 0, true).unwrap(), empty);
    }

    #[test]
    fn test_negative_length() {
        assert!(enumerate_combinations(&ELEMENTS, -1, false).is_err());
        assert!(enumerate_combinations(&ELEMENTS, -1, true).is_err());
    }

    #[test]
    fn test_length_exceeds_distinct() {
        assert!(enumerate_combinations(&ELEMENTS, 5, false).is_err());
        let doubled = [ELEMENTS, ELEMENTS].concat();
        assert!(enumerate_combinations(&doubled, 5, false).is_err());
    }

    #[test]
    fn test_with_replacement_longer_than_input() {
        let combos = enumerate_combinations(&[1, 2], 4, true).unwrap();
        assert_eq!(combos.len() as u128, number_of_combinations(2, 4, true).unwrap());
        assert_eq!(combos[0], vec![1, 1, 1, 1]);
        assert_eq!(combos[4], vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_duplicates_in_input_are_collapsed() {
        let combos = enumerate_combinations(&[2, 1, 2, 1], 2, false).unwrap();
        assert_eq!(combos, vec![vec![2, 1]]);
    }

    #[test]
    fn test_empty_input_with_replacement() {
        assert!(enumerate_combinations::<u8>(&[], 2, true).unwrap().is_empty());
    }

    #[test]
    fn test_counts_match_formula() {
        let elements: Vec<u32> = (0..6).collect();
        for r in 0..=6i64 {
            let without = enumerate_combinations(&elements, r, false).unwrap();
            assert_eq!(
                without.len() as u128,
                number_of_combinations(6, r, false).unwrap()
            );
            let with = enumerate_combinations(&elements, r, true).unwrap();
            assert_eq!(with.len() as u128, number_of_combinations(6, r, true).unwrap());
        }
    }
}
