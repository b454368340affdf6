/// Returns the distinct values of `elements` in order of first appearance.
///
/// Only `PartialEq` is required, so the check is quadratic; inputs to the
/// enumeration functions are small anyway.
///
/// # Examples
/// ```
/// use combinatorics::distinct_elements;
///
/// assert_eq!(distinct_elements(&['b', 'a', 'b', 'c', 'a']), vec!['b', 'a', 'c']);
/// ```
pub fn distinct_elements<T: PartialEq + Clone>(elements: &[T]) -> Vec<T> {
    let mut distinct: Vec<T> = Vec::with_capacity(elements.len());
    for element in elements {
        if !distinct.contains(element) {
            distinct.push(element.clone());
        }
    }
    distinct
}

/// Position of `element` within a deduplicated sequence.
pub(crate) fn rank_of<T: PartialEq>(distinct: &[T], element: &T) -> Option<usize> {
    distinct.iter().position(|x| x == element)
}
