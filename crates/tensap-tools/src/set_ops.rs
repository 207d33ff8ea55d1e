//! Set operations on duplicate-free integer arrays
//!
//! Both operations assume each input holds no repeated values. The
//! precondition is not checked: use [`is_duplicate_free`] when the caller
//! cannot guarantee it.

use scirs2_core::ndarray_ext::{Array1, ArrayView1};
use std::collections::HashSet;
use std::hash::Hash;

/// Sorted intersection of two duplicate-free arrays
///
/// The inputs are concatenated and sorted; a value equal to its successor
/// must then come from both inputs, so it is a common element. Each common
/// value appears once in the result, in ascending order.
///
/// If one input contains repeated values the result is unspecified.
///
/// # Complexity
///
/// Time: O((n + m) log(n + m))
/// Space: O(n + m)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::fast_intersect;
///
/// let a = array![7u64, 1, 5, 3];
/// let b = array![3u64, 4, 5];
/// let common = fast_intersect(&a.view(), &b.view());
/// assert_eq!(common.to_vec(), vec![3, 5]);
/// ```
pub fn fast_intersect<T>(a: &ArrayView1<T>, b: &ArrayView1<T>) -> Array1<T>
where
    T: Copy + Ord,
{
    let mut merged: Vec<T> = Vec::with_capacity(a.len() + b.len());
    merged.extend(a.iter().copied());
    merged.extend(b.iter().copied());
    merged.sort_unstable();

    let common: Vec<T> = merged
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();

    log::trace!(
        "fast_intersect: {} x {} -> {} common values",
        a.len(),
        b.len(),
        common.len()
    );

    Array1::from_vec(common)
}

/// Elements of `a` that do not appear in `b`, in the order of `a`
///
/// Membership in `b` is answered with a hash lookup, so the cost is linear
/// in the size of both inputs. An empty `b` returns `a` unchanged.
///
/// # Complexity
///
/// Time: O(n + m)
/// Space: O(m)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::fast_setdiff;
///
/// let a = array![1u64, 3, 5, 7];
/// let b = array![5u64, 3];
/// let rest = fast_setdiff(&a.view(), &b.view());
/// assert_eq!(rest.to_vec(), vec![1, 7]);
/// ```
pub fn fast_setdiff<T>(a: &ArrayView1<T>, b: &ArrayView1<T>) -> Array1<T>
where
    T: Copy + Eq + Hash,
{
    if b.is_empty() {
        return a.to_owned();
    }

    let excluded: HashSet<T> = b.iter().copied().collect();
    let kept: Vec<T> = a.iter().copied().filter(|v| !excluded.contains(v)).collect();

    log::trace!(
        "fast_setdiff: {} - {} -> {} values kept",
        a.len(),
        b.len(),
        kept.len()
    );

    Array1::from_vec(kept)
}

/// Whether an array holds no repeated values
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::is_duplicate_free;
///
/// assert!(is_duplicate_free(&array![4u64, 1, 9].view()));
/// assert!(!is_duplicate_free(&array![4u64, 1, 4].view()));
/// ```
pub fn is_duplicate_free<T>(a: &ArrayView1<T>) -> bool
where
    T: Copy + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(a.len());
    a.iter().all(|v| seen.insert(*v))
}
