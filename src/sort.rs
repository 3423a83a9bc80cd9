//! Generic in-place merge sort.
//!
//! The ordering utility behind every solver's end-time sort. Top-down
//! divide-and-conquer with an O(n) merge into temporary buffers sized to
//! the two halves being merged.
//!
//! # Contract
//! Rearranges the slice into non-decreasing comparator order. Total for any
//! finite input, including empty, singleton, already-sorted, and
//! reverse-sorted slices. Stability among equal keys is **not** guaranteed;
//! callers must not depend on tie order.
//!
//! # Complexity
//! O(n log n) comparisons, O(n) auxiliary space.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 2.3 (Merge Sort)

use std::cmp::Ordering;

/// Sorts a slice in place into non-decreasing comparator order.
///
/// The comparator must describe a total order (a correct comparator is a
/// precondition, not something this function checks).
pub fn sort_by<T, F>(items: &mut [T], compare: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    merge_sort(items, &compare);
}

fn merge_sort<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], compare);
    merge_sort(&mut items[mid..], compare);
    merge(items, mid, compare);
}

/// Merges two sorted halves `items[..mid]` and `items[mid..]`.
fn merge<T, F>(items: &mut [T], mid: usize, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) != Ordering::Greater {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        items[k] = left[i].clone();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        items[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}
