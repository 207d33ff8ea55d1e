//! Mixed-radix linear indexing
//!
//! Converts between a flat index and per-axis coordinates in a grid whose
//! axes have arbitrary extents. A base-b representation with d digits is the
//! special case of a grid with `d` axes of extent `b`.

use crate::error::{ToolsError, ToolsResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis ordering used when linearizing a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexOrder {
    /// Last axis varies fastest (C order)
    #[default]
    RowMajor,
    /// First axis varies fastest (Fortran order)
    ColumnMajor,
}

/// Number of cells in a grid, or `None` if it exceeds `u64`
///
/// An empty shape describes a single cell.
pub fn grid_size(shape: &[u64]) -> Option<u64> {
    shape
        .iter()
        .try_fold(1u64, |acc, &extent| acc.checked_mul(extent))
}

fn check_extents(shape: &[u64]) -> ToolsResult<()> {
    if shape.contains(&0) {
        return Err(ToolsError::invalid_shape(shape, "extents must be positive"));
    }
    Ok(())
}

/// Per-axis coordinates of a flat index
///
/// # Errors
///
/// - [`ToolsError::InvalidShape`] if an extent is zero
/// - [`ToolsError::IndexOutOfBounds`] if `index` is not inside the grid
///
/// # Examples
///
/// ```
/// use tensap_tools::{unravel_index, IndexOrder};
///
/// let coords = unravel_index(5, &[2, 3], IndexOrder::RowMajor).unwrap();
/// assert_eq!(coords, vec![1, 2]);
///
/// let coords = unravel_index(5, &[2, 3], IndexOrder::ColumnMajor).unwrap();
/// assert_eq!(coords, vec![1, 2]);
///
/// let coords = unravel_index(3, &[2, 3], IndexOrder::ColumnMajor).unwrap();
/// assert_eq!(coords, vec![1, 1]);
/// ```
pub fn unravel_index(index: u64, shape: &[u64], order: IndexOrder) -> ToolsResult<Vec<u64>> {
    check_extents(shape)?;
    if let Some(size) = grid_size(shape) {
        if index >= size {
            return Err(ToolsError::IndexOutOfBounds { index, size });
        }
    }

    let mut coords = vec![0u64; shape.len()];
    let mut remaining = index;
    let mut place = |axis: usize| {
        coords[axis] = remaining % shape[axis];
        remaining /= shape[axis];
    };

    match order {
        IndexOrder::RowMajor => (0..shape.len()).rev().for_each(&mut place),
        IndexOrder::ColumnMajor => (0..shape.len()).for_each(&mut place),
    }

    Ok(coords)
}

/// Flat index of per-axis coordinates
///
/// Inverse of [`unravel_index`] for the same shape and order.
///
/// # Errors
///
/// - [`ToolsError::ShapeMismatch`] if `coords` and `shape` differ in length
/// - [`ToolsError::InvalidShape`] if an extent is zero
/// - [`ToolsError::CoordinateOutOfBounds`] if a coordinate is not below its extent
/// - [`ToolsError::Overflow`] if the flat index does not fit in `u64`
///
/// # Examples
///
/// ```
/// use tensap_tools::{ravel_multi_index, IndexOrder};
///
/// assert_eq!(ravel_multi_index(&[1, 2], &[2, 3], IndexOrder::RowMajor).unwrap(), 5);
/// assert_eq!(ravel_multi_index(&[1, 1], &[2, 3], IndexOrder::ColumnMajor).unwrap(), 3);
/// assert!(ravel_multi_index(&[2, 0], &[2, 3], IndexOrder::RowMajor).is_err());
/// ```
pub fn ravel_multi_index(coords: &[u64], shape: &[u64], order: IndexOrder) -> ToolsResult<u64> {
    if coords.len() != shape.len() {
        return Err(ToolsError::ShapeMismatch {
            expected: shape.len(),
            actual: coords.len(),
        });
    }
    check_extents(shape)?;

    for (axis, (&coordinate, &extent)) in coords.iter().zip(shape).enumerate() {
        if coordinate >= extent {
            return Err(ToolsError::CoordinateOutOfBounds {
                axis,
                coordinate,
                extent,
            });
        }
    }

    // Horner scheme, slowest axis first
    let accumulate = |acc: Option<u64>, axis: usize| {
        acc.and_then(|acc| acc.checked_mul(shape[axis]))
            .and_then(|acc| acc.checked_add(coords[axis]))
    };
    let index = match order {
        IndexOrder::RowMajor => (0..shape.len()).fold(Some(0u64), accumulate),
        IndexOrder::ColumnMajor => (0..shape.len()).rev().fold(Some(0u64), accumulate),
    };

    index.ok_or_else(|| ToolsError::overflow("ravel_multi_index"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(&[2, 3, 4]), Some(24));
        assert_eq!(grid_size(&[]), Some(1));
        assert_eq!(grid_size(&[u64::MAX, 2]), None);
    }

    #[test]
    fn test_unravel_row_major_matches_c_order() {
        let shape = [2, 3, 4];
        let mut expected = Vec::new();
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    expected.push(vec![i, j, k]);
                }
            }
        }

        for (flat, coords) in expected.iter().enumerate() {
            let got = unravel_index(flat as u64, &shape, IndexOrder::RowMajor).unwrap();
            assert_eq!(&got, coords);
        }
    }

    #[test]
    fn test_unravel_column_major_matches_fortran_order() {
        let shape = [2, 3, 4];
        let mut expected = Vec::new();
        for k in 0..4 {
            for j in 0..3 {
                for i in 0..2 {
                    expected.push(vec![i, j, k]);
                }
            }
        }

        for (flat, coords) in expected.iter().enumerate() {
            let got = unravel_index(flat as u64, &shape, IndexOrder::ColumnMajor).unwrap();
            assert_eq!(&got, coords);
        }
    }

    #[test]
    fn test_unravel_out_of_bounds() {
        let err = unravel_index(6, &[2, 3], IndexOrder::RowMajor).unwrap_err();
        assert_eq!(err, ToolsError::IndexOutOfBounds { index: 6, size: 6 });
    }

    #[test]
    fn test_unravel_zero_extent() {
        let err = unravel_index(0, &[2, 0], IndexOrder::RowMajor).unwrap_err();
        assert!(matches!(err, ToolsError::InvalidShape { .. }));
    }

    #[test]
    fn test_unravel_empty_shape() {
        assert_eq!(
            unravel_index(0, &[], IndexOrder::RowMajor).unwrap(),
            Vec::<u64>::new()
        );
        assert!(unravel_index(1, &[], IndexOrder::RowMajor).is_err());
    }

    #[test]
    fn test_unravel_huge_grid() {
        let shape = [u64::MAX, u64::MAX];
        let coords = unravel_index(u64::MAX, &shape, IndexOrder::ColumnMajor).unwrap();
        assert_eq!(coords, vec![0, 1]);
    }

    #[test]
    fn test_ravel_inverts_unravel() {
        let shape = [3, 1, 5, 2];
        for order in [IndexOrder::RowMajor, IndexOrder::ColumnMajor] {
            for flat in 0..30 {
                let coords = unravel_index(flat, &shape, order).unwrap();
                assert_eq!(ravel_multi_index(&coords, &shape, order).unwrap(), flat);
            }
        }
    }

    #[test]
    fn test_ravel_shape_mismatch() {
        let err = ravel_multi_index(&[0, 0], &[2, 2, 2], IndexOrder::RowMajor).unwrap_err();
        assert_eq!(
            err,
            ToolsError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_ravel_coordinate_out_of_bounds() {
        let err = ravel_multi_index(&[0, 4], &[2, 3], IndexOrder::ColumnMajor).unwrap_err();
        assert_eq!(
            err,
            ToolsError::CoordinateOutOfBounds {
                axis: 1,
                coordinate: 4,
                extent: 3
            }
        );
    }

    #[test]
    fn test_ravel_overflow() {
        let shape = [u64::MAX, u64::MAX];
        let err = ravel_multi_index(&[0, 2], &shape, IndexOrder::ColumnMajor).unwrap_err();
        assert!(matches!(err, ToolsError::Overflow { .. }));
    }
}
