use super::common;

pub fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    common::insertion_sort(v, is_less);
}
