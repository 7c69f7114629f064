pub mod common;
pub mod insertion_sort;
pub mod quick_sort_median3;
