/// Sorts `v` by sinking each element left past its greater neighbours.
///
/// Only adjacent swaps are used, so the pass is stable and a panicking `is_less` still
/// leaves `v` a permutation of its input.
#[inline]
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Orders the first, middle and last elements of `v` in place, then moves their median
/// to the last slot. Returns the index of the pivot, which is always `v.len() - 1`.
///
/// After the call the middle slot holds a value not less than the pivot, which bounds
/// the first left scan of [`partition_hoare`].
#[inline]
pub fn median_of_three<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let mid = (v.len() - 1) / 2;
    let last = v.len() - 1;

    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if is_less(&v[last], &v[0]) {
        v.swap(0, last);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);
    }

    v.swap(mid, last);
    last
}

/// Hoare partition around the pivot stored in the last slot of `v`.
///
/// Returns the final index `p` of the pivot: `v[..p]` holds elements not greater than
/// it and `v[p + 1..]` elements not less than it. Equal elements may end up on either
/// side.
#[inline]
pub fn partition_hoare<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let last = v.len() - 1;
    let (rest, tail) = v.split_at_mut(last);
    let pivot = &tail[0];

    let mut i = 0usize;
    let mut j = last - 1;

    loop {
        // The pivot slot is not part of `rest`, so the left scan is bounded explicitly.
        while i < last && is_less(&rest[i], pivot) {
            i += 1;
        }

        while j > 0 && is_less(pivot, &rest[j]) {
            j -= 1;
        }

        if i >= j {
            break;
        }

        rest.swap(i, j);
        i += 1;
        j -= 1;
    }

    v.swap(i, last);
    i
}
