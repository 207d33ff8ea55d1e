//! Base-b digit representations of non-negative integers
//!
//! An integer `i` in `[0, b^d - 1]` is represented by the digit vector
//! `[i_1, ..., i_d]` with `i = sum_k i_k * b^(d-k)`, most significant digit
//! first. A set of integers maps to a digit matrix with one row per integer.
//!
//! Both directions go through the mixed-radix helpers in [`crate::indexing`]:
//! the integer is a flat index into a grid of `d` axes of extent `b`, read in
//! column-major order, and the coordinates are reversed so the slowest axis
//! comes first.

use crate::error::{ToolsError, ToolsResult};
use crate::indexing::{grid_size, ravel_multi_index, unravel_index, IndexOrder};
use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView1, ArrayView2, Axis};

fn check_base(base: u64) -> ToolsResult<()> {
    if base < 2 {
        return Err(ToolsError::invalid_base(base));
    }
    Ok(())
}

/// Minimum number of base-`base` digits needed to represent `max_value`
///
/// Returns the smallest `d >= 1` with `base^d > max_value`, found by integer
/// multiplication so exact powers of the base are handled without rounding.
///
/// # Errors
///
/// [`ToolsError::InvalidBase`] if `base < 2`.
///
/// # Examples
///
/// ```
/// use tensap_tools::num_digits;
///
/// assert_eq!(num_digits(5, 2).unwrap(), 3);
/// assert_eq!(num_digits(8, 2).unwrap(), 4);
/// assert_eq!(num_digits(0, 10).unwrap(), 1);
/// assert_eq!(num_digits(999, 10).unwrap(), 3);
/// assert_eq!(num_digits(1000, 10).unwrap(), 4);
/// ```
pub fn num_digits(max_value: u64, base: u64) -> ToolsResult<usize> {
    check_base(base)?;

    let mut digits = 1usize;
    let mut capacity = base;
    while capacity <= max_value {
        digits += 1;
        match capacity.checked_mul(base) {
            Some(next) => capacity = next,
            // base^digits exceeds u64, so every value fits
            None => break,
        }
    }

    Ok(digits)
}

/// Base-b digit matrix of a set of integers
///
/// Row `k` of the result is the representation of `values[k]`, most
/// significant digit first. When `digits` is `None` it is inferred with
/// [`num_digits`] from the largest value.
///
/// # Errors
///
/// - [`ToolsError::InvalidBase`] if `base < 2`
/// - [`ToolsError::InvalidDimension`] if `digits == Some(0)`
/// - [`ToolsError::EmptyInput`] if `values` is empty and `digits` is `None`
/// - [`ToolsError::IntegerOutOfRange`] if a value is `>= base^digits`
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::integer2baseb;
///
/// let digits = integer2baseb(&array![5u64, 2].view(), 2, None).unwrap();
/// assert_eq!(digits, array![[1u64, 0, 1], [0, 1, 0]]);
///
/// let digits = integer2baseb(&array![7u64].view(), 3, Some(4)).unwrap();
/// assert_eq!(digits, array![[0u64, 0, 2, 1]]);
/// ```
pub fn integer2baseb(
    values: &ArrayView1<u64>,
    base: u64,
    digits: Option<usize>,
) -> ToolsResult<Array2<u64>> {
    check_base(base)?;

    let digits = match digits {
        Some(0) => {
            return Err(ToolsError::invalid_dimension(
                0,
                "at least one digit is required",
            ))
        }
        Some(d) => d,
        None => {
            let max_value = values
                .iter()
                .copied()
                .max()
                .ok_or_else(|| ToolsError::empty_input("integer2baseb", "values"))?;
            let d = num_digits(max_value, base)?;
            log::debug!(
                "integer2baseb: inferred {} digits in base {} for max value {}",
                d,
                base,
                max_value
            );
            d
        }
    };

    let shape = vec![base; digits];
    let capacity = grid_size(&shape);

    let mut result = Array2::<u64>::zeros((values.len(), digits));
    for (row, &value) in values.iter().enumerate() {
        if capacity.is_some_and(|cap| value >= cap) {
            return Err(ToolsError::integer_out_of_range(value, base, digits));
        }

        let coords = unravel_index(value, &shape, IndexOrder::ColumnMajor)?;
        for (column, &digit) in coords.iter().rev().enumerate() {
            result[[row, column]] = digit;
        }
    }

    Ok(result)
}

/// Base-b digits of a single integer, as a 1×d matrix
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::integer2baseb_scalar;
///
/// let digits = integer2baseb_scalar(255, 16, None).unwrap();
/// assert_eq!(digits, array![[15u64, 15]]);
/// ```
pub fn integer2baseb_scalar(
    value: u64,
    base: u64,
    digits: Option<usize>,
) -> ToolsResult<Array2<u64>> {
    let values = [value];
    integer2baseb(&ArrayView1::from(&values[..]), base, digits)
}

/// Integers encoded by the rows of a base-b digit matrix
///
/// Each row holds `d` digits in `[0, base-1]`, most significant first. The
/// result has one integer per row.
///
/// # Errors
///
/// - [`ToolsError::InvalidBase`] if `base < 2`
/// - [`ToolsError::InvalidDimension`] if the matrix has no columns
/// - [`ToolsError::DigitOutOfRange`] if a digit is `>= base`
/// - [`ToolsError::Overflow`] if an encoded integer does not fit in `u64`
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::baseb2integer;
///
/// let values = baseb2integer(&array![[1u64, 0, 1], [1, 1, 1]].view(), 2).unwrap();
/// assert_eq!(values.to_vec(), vec![5, 7]);
///
/// assert!(baseb2integer(&array![[1u64, 2]].view(), 2).is_err());
/// ```
pub fn baseb2integer(digits: &ArrayView2<u64>, base: u64) -> ToolsResult<Array1<u64>> {
    check_base(base)?;

    let d = digits.ncols();
    if d == 0 {
        return Err(ToolsError::invalid_dimension(
            0,
            "digit rows must not be empty",
        ));
    }

    let shape = vec![base; d];
    let mut values = Vec::with_capacity(digits.nrows());
    for (row, digit_row) in digits.outer_iter().enumerate() {
        if let Some((column, &digit)) = digit_row.iter().enumerate().find(|&(_, &v)| v >= base) {
            return Err(ToolsError::digit_out_of_range(digit, base, row, column));
        }

        let coords: Vec<u64> = digit_row.iter().rev().copied().collect();
        let value =
            ravel_multi_index(&coords, &shape, IndexOrder::ColumnMajor).map_err(|err| match err {
                ToolsError::Overflow { .. } => ToolsError::overflow("baseb2integer"),
                other => other,
            })?;
        values.push(value);
    }

    Ok(Array1::from_vec(values))
}

/// Integer encoded by a single digit row, as a length-1 array
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tensap_tools::baseb2integer_row;
///
/// let values = baseb2integer_row(&array![2u64, 1].view(), 3).unwrap();
/// assert_eq!(values.to_vec(), vec![7]);
/// ```
pub fn baseb2integer_row(digits: &ArrayView1<u64>, base: u64) -> ToolsResult<Array1<u64>> {
    baseb2integer(&digits.view().insert_axis(Axis(0)), base)
}
