//! Input shapes for exercising sorts. All generators are deterministic in `len`.

use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::rng_for;

const RANDOM_SALT: u64 = 0x0001;
const UNIFORM_SALT: u64 = 0x0002;
const SWAPS_SALT: u64 = 0x0003;

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng_for(len, RANDOM_SALT);
    (0..len).map(|_| rng.random::<i32>()).collect()
}

/// Values drawn from `range`; a narrow range gives many duplicates.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    debug_assert!(!range.is_empty());
    let mut rng = rng_for(len, UNIFORM_SALT);
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    (0..half as i32).chain((0..(len - half) as i32).rev()).collect()
}

/// `runs` ascending runs of roughly equal length, concatenated.
pub fn saw(len: usize, runs: usize) -> Vec<i32> {
    let run_len = len.div_ceil(runs.max(1)).max(1);
    (0..len).map(|i| (i % run_len) as i32).collect()
}

/// Ascending input with about one percent of positions swapped at random.
pub fn nearly_sorted(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    if len < 2 {
        return v;
    }
    let mut rng = rng_for(len, SWAPS_SALT);
    for _ in 0..(len / 100).max(1) {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        v.swap(a, b);
    }
    v
}

/// A random permutation of `0..len`.
pub fn shuffled(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    v.shuffle(&mut rng_for(len, RANDOM_SALT));
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match() {
        for len in [0_usize, 1, 2, 7, 16, 17, 100] {
            assert_eq!(random(len).len(), len);
            assert_eq!(random_uniform(len, 0..4).len(), len);
            assert_eq!(ascending(len).len(), len);
            assert_eq!(descending(len).len(), len);
            assert_eq!(all_equal(len).len(), len);
            assert_eq!(pipe_organ(len).len(), len);
            assert_eq!(saw(len, 3).len(), len);
            assert_eq!(nearly_sorted(len).len(), len);
            assert_eq!(shuffled(len).len(), len);
        }
    }

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(random(500), random(500));
        assert_eq!(shuffled(500), shuffled(500));
    }

    #[test]
    fn shapes() {
        assert_eq!(pipe_organ(7), [0, 1, 2, 3, 2, 1, 0]);
        assert_eq!(saw(6, 2), [0, 1, 2, 0, 1, 2]);
        assert!(random_uniform(200, 0..4).iter().all(|x| (0..4).contains(x)));

        let mut v = shuffled(300);
        v.sort_unstable();
        assert_eq!(v, ascending(300));
    }
}
