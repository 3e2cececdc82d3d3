//! Bubble sort with pass counting.

/// Sort `items` ascending in place.
///
/// Returns how many full passes made at least one swap, i.e. the pass
/// (counted from 1) after which the slice was already sorted; 0 for an
/// already sorted slice.
///
/// ```
/// use rust_war::perm::bubble_sort;
///
/// let mut values = [1, 2, 3, 7, 4, 5, 6, 0];
/// assert_eq!(bubble_sort(&mut values), 7);
/// assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) -> usize {
    let mut passes = 0;

    loop {
        let mut swapped = false;
        for i in 1..items.len() {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            return passes;
        }
        passes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_already_sorted() {
        let mut values = [0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(bubble_sort(&mut values), 0);
    }

    #[test]
    fn test_one_pass() {
        let mut values = [0, 1, 2, 3, 7, 4, 5, 6];
        assert_eq!(bubble_sort(&mut values), 1);
        assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_smallest_last() {
        let mut values = [1, 2, 3, 7, 4, 5, 6, 0];
        assert_eq!(bubble_sort(&mut values), 7);
    }

    #[test]
    fn test_trivial_slices() {
        let mut empty: [u32; 0] = [];
        assert_eq!(bubble_sort(&mut empty), 0);

        let mut single = [5];
        assert_eq!(bubble_sort(&mut single), 0);
    }

    #[test]
    fn test_sorts_random_permutation() {
        let mut perm = GameRng::new(12).permutation(100).unwrap();
        let passes = bubble_sort(&mut perm);

        assert_eq!(perm, (0..100).collect::<Vec<_>>());
        assert!(passes < 100);
    }
}
