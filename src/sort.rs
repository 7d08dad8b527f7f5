//! In-place quicksort and the duplicate scan used at set construction.
//!
//! [`quick_sort_by`] is a partition-based quicksort over a mutable slice:
//!
//! - Three-way partition into elements less than, equal to, and greater
//!   than the pivot; the equal block is never revisited, so runs of equal
//!   keys (repeated `NaN`, duplicate-heavy input) finish in linear time
//! - Median-of-three pivot selection, so already sorted input stays
//!   O(n log n)
//! - Insertion sort for ranges shorter than [`INSERTION_SORT_THRESHOLD`]
//! - Recursion into the smaller partition only, so stack depth is O(log n)
//!
//! The sort is not stable. Sets never contain equal elements, so the
//! difference is not observable for them.
//!
//! # Examples
//!
//! ```rust
//! use treje::sort::{has_adjacent_duplicates, quick_sort};
//!
//! let mut values = vec![5, 4, 2, 9, 4];
//! quick_sort(&mut values);
//! assert_eq!(values, vec![2, 4, 4, 5, 9]);
//! assert!(has_adjacent_duplicates(&values));
//! ```

use crate::element::Element;
use std::cmp::Ordering;

/// Ranges shorter than this are finished with insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Sorts `slice` ascending under [`Element::compare`].
///
/// # Complexity
///
/// O(n log n) expected, O(log n) auxiliary stack.
#[inline]
pub fn quick_sort<T: Element>(slice: &mut [T]) {
    quick_sort_by(slice, T::compare);
}

/// Sorts `slice` with the given comparator.
///
/// The comparator must describe a total order; with an inconsistent
/// comparator the result is unspecified but the call still terminates.
///
/// # Examples
///
/// ```rust
/// use treje::sort::quick_sort_by;
///
/// let mut words = vec!["fig", "apple", "pear"];
/// quick_sort_by(&mut words, |left, right| right.cmp(left));
/// assert_eq!(words, vec!["pear", "fig", "apple"]);
/// ```
pub fn quick_sort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(slice, &mut compare);
}

fn quick_sort_range<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() >= INSERTION_SORT_THRESHOLD {
        let (less, greater) = partition(slice, compare);
        let (left, rest) = std::mem::take(&mut slice).split_at_mut(less);
        let right = &mut rest[greater - less..];

        if left.len() < right.len() {
            quick_sort_range(left, compare);
            slice = right;
        } else {
            quick_sort_range(right, compare);
            slice = left;
        }
    }
    insertion_sort(slice, compare);
}

/// Partitions `slice` around a median-of-three pivot.
///
/// Returns `(less, greater)` such that `slice[..less]` compares less than
/// the pivot, `slice[less..greater]` equal to it, and `slice[greater..]`
/// greater. The equal block always holds at least the pivot.
///
/// Requires `slice.len() >= 3`.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    move_median_to_end(slice, compare);
    let last = slice.len() - 1;
    slice.swap(0, last);

    // slice[less] is always an element equal to the pivot.
    let mut less = 0;
    let mut index = 1;
    let mut greater = slice.len();
    while index < greater {
        match compare(&slice[index], &slice[less]) {
            Ordering::Less => {
                slice.swap(less, index);
                less += 1;
                index += 1;
            }
            Ordering::Greater => {
                greater -= 1;
                slice.swap(index, greater);
            }
            Ordering::Equal => index += 1,
        }
    }
    (less, greater)
}

fn move_median_to_end<T, F>(slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let low = 0;
    let middle = slice.len() / 2;
    let high = slice.len() - 1;

    if compare(&slice[middle], &slice[low]) == Ordering::Less {
        slice.swap(middle, low);
    }
    if compare(&slice[high], &slice[low]) == Ordering::Less {
        slice.swap(high, low);
    }
    // low now holds the minimum of the three; the median is min(middle, high).
    if compare(&slice[middle], &slice[high]) == Ordering::Less {
        slice.swap(middle, high);
    }
}

fn insertion_sort<T, F>(slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for unsorted in 1..slice.len() {
        let mut index = unsorted;
        while index > 0 && compare(&slice[index - 1], &slice[index]) == Ordering::Greater {
            slice.swap(index - 1, index);
            index -= 1;
        }
    }
}

/// Returns `true` if any two neighbouring elements are equal.
///
/// On a sorted slice this detects every duplicate in O(n).
#[inline]
pub fn has_adjacent_duplicates<T: PartialEq>(sorted: &[T]) -> bool {
    sorted.windows(2).any(|window| window[0] == window[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_sorted_by_compare<T: Element>(slice: &[T]) -> bool {
        slice
            .windows(2)
            .all(|window| window[0].compare(&window[1]) != Ordering::Greater)
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![1])]
    #[case::two_reversed(vec![2, 1])]
    #[case::small_mixed(vec![5, 4, 2, 9])]
    #[case::with_duplicates(vec![2, 4, 5, 4, 2])]
    #[case::already_sorted((0..100).collect())]
    #[case::reverse_sorted((0..100).rev().collect())]
    #[case::all_equal(vec![7; 40])]
    #[case::negative((-50..50).map(|value| (value * 37) % 101).collect())]
    fn test_quick_sort_matches_std_sort(#[case] input: Vec<i32>) {
        let mut expected = input.clone();
        expected.sort_unstable();

        let mut actual = input;
        quick_sort(&mut actual);

        assert_eq!(actual, expected);
    }

    #[rstest]
    fn test_quick_sort_large_sorted_input_does_not_overflow_stack() {
        let mut values: Vec<u64> = (0..200_000).collect();
        quick_sort(&mut values);
        assert!(is_sorted_by_compare(&values));
    }

    fn count_comparisons<T: Element>(slice: &mut [T]) -> usize {
        let mut comparisons = 0;
        quick_sort_by(slice, |left, right| {
            comparisons += 1;
            left.compare(right)
        });
        comparisons
    }

    #[rstest]
    #[case::equal_integers(vec![42_i64; 100_000])]
    #[case::two_values((0..100_000).map(|index| index % 2).collect())]
    fn test_quick_sort_equal_keys_take_linear_comparisons(#[case] mut values: Vec<i64>) {
        let length = values.len();
        let comparisons = count_comparisons(&mut values);

        assert!(is_sorted_by_compare(&values));
        assert!(comparisons < 4 * length, "{comparisons} comparisons for {length} elements");
    }

    #[rstest]
    fn test_quick_sort_repeated_nan_takes_linear_comparisons() {
        let mut values = vec![f64::NAN; 100_000];
        let comparisons = count_comparisons(&mut values);

        assert!(values.iter().all(|value| value.is_nan()));
        assert!(comparisons < 2 * values.len());
    }

    #[rstest]
    fn test_quick_sort_distinct_keys_stay_n_log_n() {
        let mut values: Vec<u64> = (0..100_000_u64)
            .map(|index| index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .collect();
        let comparisons = count_comparisons(&mut values);

        assert!(is_sorted_by_compare(&values));
        // 100_000 * log2(100_000) is about 1.7 million.
        assert!(comparisons < 5_000_000, "{comparisons} comparisons");
    }

    #[rstest]
    fn test_quick_sort_floats_with_nan() {
        let mut values = vec![3.0_f64, f64::NAN, -1.0, 0.0, -0.0, 2.5];
        quick_sort(&mut values);

        assert!(is_sorted_by_compare(&values));
        assert!(values[values.len() - 1].is_nan());
        assert_eq!(values[0], -1.0);
    }

    #[rstest]
    fn test_quick_sort_strings() {
        let mut words: Vec<String> = ["delta", "alpha", "charlie", "bravo"]
            .into_iter()
            .map(String::from)
            .collect();
        quick_sort(&mut words);
        assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[rstest]
    fn test_quick_sort_by_descending() {
        let mut values: Vec<i16> = (0..50).collect();
        quick_sort_by(&mut values, |left, right| right.cmp(left));

        let expected: Vec<i16> = (0..50).rev().collect();
        assert_eq!(values, expected);
    }

    #[rstest]
    #[case::empty(vec![], false)]
    #[case::single(vec![1], false)]
    #[case::distinct(vec![1, 2, 3], false)]
    #[case::adjacent(vec![1, 2, 2, 3], true)]
    #[case::non_adjacent(vec![1, 2, 1], false)]
    fn test_has_adjacent_duplicates(#[case] input: Vec<i32>, #[case] expected: bool) {
        assert_eq!(has_adjacent_duplicates(&input), expected);
    }

    #[rstest]
    fn test_has_adjacent_duplicates_treats_signed_zero_as_equal() {
        let mut values = vec![0.0_f32, 1.0, -0.0];
        quick_sort(&mut values);
        assert!(has_adjacent_duplicates(&values));
    }
}
