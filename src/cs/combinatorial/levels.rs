//! Level-by-level tuple construction shared by the enumeration functions.
//!
//! Level `k` holds every valid tuple of length `k + 1`. Each level is derived
//! only from the one before it, so a candidate is validated against the tuple
//! it extends rather than by rescanning finished results.

/// A level: tuples that all have the same length.
pub(crate) type Level<T> = Vec<Vec<T>>;

/// Builds `depth` levels starting from `seed`.
///
/// `extend` receives the previous level and must return the next one. The
/// returned vector has `depth` entries (or none when `depth == 0`); `seed` is
/// the first of them.
pub(crate) fn build_levels<T, F>(seed: Level<T>, depth: usize, mut extend: F) -> Vec<Level<T>>
where
    F: FnMut(&Level<T>) -> Level<T>,
{
    if depth == 0 {
        return Vec::new();
    }
    let mut levels = Vec::with_capacity(depth);
    levels.push(seed);
    while levels.len() < depth {
        let next = extend(&levels[levels.len() - 1]);
        log::trace!("level {} holds {} tuples", levels.len() + 1, next.len());
        levels.push(next);
    }
    levels
}

/// Builds `depth` levels and keeps only the last one.
pub(crate) fn last_level<T, F>(seed: Level<T>, depth: usize, extend: F) -> Level<T>
where
    F: FnMut(&Level<T>) -> Level<T>,
{
    build_levels(seed, depth, extend).pop().unwrap_or_default()
}

/// Appends `next` to a copy of `prefix`.
pub(crate) fn appended<T: Clone>(prefix: &[T], next: &T) -> Vec<T> {
    let mut tuple = Vec::with_capacity(prefix.len() + 1);
    tuple.extend_from_slice(prefix);
    tuple.push(next.clone());
    tuple
}

/// Prepends `next` to a copy of `suffix`.
pub(crate) fn prepended<T: Clone>(next: &T, suffix: &[T]) -> Vec<T> {
    let mut tuple = Vec::with_capacity(suffix.len() + 1);
    tuple.push(next.clone());
    tuple.extend_from_slice(suffix);
    tuple
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubling(prev: &Level<u8>) -> Level<u8> {
        prev.iter()
            .flat_map(|t| [appended(t, &0), appended(t, &1)])
            .collect()
    }

    #[test]
    fn test_build_levels_depth() {
        let levels = build_levels(vec![vec![0], vec![1]], 3, doubling);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].len(), 2);
        assert_eq!(levels[1].len(), 4);
        assert_eq!(levels[2].len(), 8);
        assert!(levels[2].iter().all(|t| t.len() == 3));
    }

    #[test]
    fn test_build_levels_zero_depth() {
        assert!(build_levels(vec![vec![0u8]], 0, doubling).is_empty());
        assert!(last_level(vec![vec![0u8]], 0, doubling).is_empty());
    }

    #[test]
    fn test_last_level() {
        let last = last_level(vec![vec![0], vec![1]], 2, doubling);
        assert_eq!(last, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_appended_and_prepended() {
        assert_eq!(appended(&[1, 2], &3), vec![1, 2, 3]);
        assert_eq!(prepended(&0, &[1, 2]), vec![0, 1, 2]);
    }
}
