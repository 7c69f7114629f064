use crate::TUNED_PARAMS;

use super::common;

pub fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort(v, is_less);
}

/// Partitions ranges longer than the insertion threshold and leaves the rest to the
/// insertion pass.
///
/// Only the smaller half is sorted recursively; the larger half is handled by the next
/// loop iteration, which keeps the stack depth logarithmic in `v.len()`.
fn quick_sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > TUNED_PARAMS.insertion_threshold {
        common::median_of_three(v, is_less);
        let mid = common::partition_hoare(v, is_less);

        // The pivot at `mid` is already in its final place.
        let (left, rest) = v.split_at_mut(mid);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, is_less);
            v = right;
        } else {
            quick_sort(right, is_less);
            v = left;
        }
    }

    common::insertion_sort(v, is_less);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn count_comparisons(v: &mut [u32]) -> usize {
        let count = Cell::new(0_usize);
        sort(v, &mut |a: &u32, b: &u32| {
            count.set(count.get() + 1);
            a < b
        });
        count.get()
    }

    #[test]
    fn threshold_boundary() {
        let threshold = TUNED_PARAMS.insertion_threshold;
        for len in [threshold - 1, threshold, threshold + 1, threshold + 2] {
            let mut v = (0..len as u32).rev().collect::<Vec<_>>();
            sort(&mut v, &mut |a: &u32, b: &u32| a < b);
            assert_eq!(v, (0..len as u32).collect::<Vec<_>>(), "len={len}");
        }
    }

    #[test]
    fn sorted_and_reversed_inputs_stay_n_log_n() {
        const LEN: u32 = 1000;
        // n log2 n is about 10_000 here; a degenerate pivot would need ~500_000.
        const BUDGET: usize = 20_000;

        let mut ascending = (0..LEN).collect::<Vec<_>>();
        let comparisons = count_comparisons(&mut ascending);
        assert!(ascending.is_sorted());
        assert!(comparisons < BUDGET, "ascending: {comparisons} comparisons");

        let mut descending = (1..=LEN).rev().collect::<Vec<_>>();
        let comparisons = count_comparisons(&mut descending);
        assert_eq!(descending, (1..=LEN).collect::<Vec<_>>());
        assert!(comparisons < BUDGET, "descending: {comparisons} comparisons");
    }

    #[test]
    fn all_equal_terminates() {
        let mut v = vec![7_u32; 1000];
        let comparisons = count_comparisons(&mut v);
        assert!(v.iter().all(|&x| x == 7));
        assert!(comparisons < 20_000, "{comparisons} comparisons");
    }

    #[test]
    fn long_reversed_input() {
        let mut v = (0..100_000_u32).rev().collect::<Vec<_>>();
        sort(&mut v, &mut |a: &u32, b: &u32| a < b);
        assert!(v.iter().copied().eq(0..100_000_u32));
    }
}
