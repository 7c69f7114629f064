mod algorithms;

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    QuickSortMedian3,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::InsertionSort, SortAlgorithm::QuickSortMedian3];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::QuickSortMedian3 => "quick_sort_median3",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges of at most this many elements are finished by the insertion pass.
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 16,
};

/// Sorts the slice in ascending order, in place.
///
/// Quicksort with a median-of-three pivot and Hoare partitioning; ranges of at most
/// [`TUNED_PARAMS`]`.insertion_threshold` elements are finished with insertion sort.
/// The sort is unstable, never allocates, and recursion depth is *O*(log *n*).
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
/// hybrid_sort::sort(&mut v);
/// assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with(SortAlgorithm::QuickSortMedian3, v);
}

/// Sorts the slice with a comparator function.
///
/// The comparator must define a total order. If it doesn't, the resulting order is
/// unspecified, but the call still terminates and `v` remains a permutation of its input.
///
/// ```
/// let mut floats = [5.5, 2.2, 8.8, 1.1, 9.9, 3.3];
/// hybrid_sort::sort_by(&mut floats, |a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(floats, [1.1, 2.2, 3.3, 5.5, 8.8, 9.9]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    algorithms::quick_sort_median3::sort(v, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts the slice with a key extraction function. The key is recomputed on every
/// comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    algorithms::quick_sort_median3::sort(v, &mut |a: &T, b: &T| f(a).lt(&f(b)));
}

pub fn sort_with<T>(algo: SortAlgorithm, v: &mut [T])
where
    T: Ord,
{
    let is_less = &mut |a: &T, b: &T| a.lt(b);
    match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(v, is_less),
        SortAlgorithm::QuickSortMedian3 => algorithms::quick_sort_median3::sort(v, is_less),
    }
}
