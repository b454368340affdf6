use super::combinations::extend_by_rank;
use super::distinct::distinct_elements;
use super::levels::build_levels;

/// Enumerates every subset of the distinct values of `elements`.
///
/// Subsets are grouped by size, smallest first, and within a size listed in
/// first-occurrence order. The empty subset leads the result when
/// `allow_empty_set` is true.
///
/// # Examples
/// ```
/// use combinatorics::enumerate_subsets;
///
/// let subsets = enumerate_subsets(&[1, 2, 3], false);
/// assert_eq!(subsets, vec![
///     vec![1], vec![2], vec![3],
///     vec![1, 2], vec![1, 3], vec![2, 3],
///     vec![1, 2, 3],
/// ]);
/// ```
pub fn enumerate_subsets<T: PartialEq + Clone>(
    elements: &[T],
    allow_empty_set: bool,
) -> Vec<Vec<T>> {
    let distinct = distinct_elements(elements);
    log::debug!(
        "enumerating subsets of {} distinct elements, empty set allowed: {}",
        distinct.len(),
        allow_empty_set
    );

    let seed = distinct.iter().map(|x| vec![x.clone()]).collect();
    let levels = build_levels(seed, distinct.len(), |prev| {
        extend_by_rank(prev, &distinct, false)
    });

    let mut subsets = Vec::new();
    if allow_empty_set {
        subsets.push(Vec::new());
    }
    subsets.extend(levels.into_iter().flatten());
    log::debug!("enumerated {} subsets", subsets.len());
    subsets
}
