//! Error types for set and base-b operations
//!
//! All failures here are about invalid numeric domains: a base below 2, a
//! digit count of zero, an integer that does not fit in the requested number
//! of digits, or a digit outside `[0, b-1]`.
//!
//! # Examples
//!
//! ```
//! use tensap_tools::error::{ToolsError, ToolsResult};
//!
//! fn check_base(base: u64) -> ToolsResult<()> {
//!     if base < 2 {
//!         return Err(ToolsError::invalid_base(base));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_base(1).is_err());
//! assert!(check_base(2).is_ok());
//! ```

use thiserror::Error;

/// Error type for set and base-b operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolsError {
    /// Radix below 2
    #[error("Invalid base {base}: must be >= 2")]
    InvalidBase { base: u64 },

    /// Digit count that cannot describe a representation
    #[error("Invalid dimension {dimension}: {reason}")]
    InvalidDimension { dimension: usize, reason: String },

    /// Grid shape with a zero extent
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<u64>, reason: String },

    /// Integer not representable with the given number of digits
    #[error("Integer {value} is not representable with {digits} digits in base {base}")]
    IntegerOutOfRange { value: u64, base: u64, digits: usize },

    /// Digit outside `[0, base-1]`
    #[error("Digit {digit} at row {row}, column {column} is out of range for base {base}")]
    DigitOutOfRange {
        digit: u64,
        base: u64,
        row: usize,
        column: usize,
    },

    /// Flat index past the end of the grid
    #[error("Index {index} is out of bounds for grid of size {size}")]
    IndexOutOfBounds { index: u64, size: u64 },

    /// Coordinate past the extent of its axis
    #[error("Coordinate {coordinate} on axis {axis} is out of bounds for extent {extent}")]
    CoordinateOutOfBounds {
        axis: usize,
        coordinate: u64,
        extent: u64,
    },

    /// Number of coordinates differs from the number of axes
    #[error("Shape mismatch: expected {expected} axes, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Empty input where a value is required
    #[error("{operation}: empty input not allowed for parameter '{parameter}'")]
    EmptyInput {
        operation: String,
        parameter: String,
    },

    /// Result does not fit in a `u64`
    #[error("{operation}: result overflows u64")]
    Overflow { operation: String },
}

/// Result type for set and base-b operations
pub type ToolsResult<T> = Result<T, ToolsError>;

impl ToolsError {
    /// Create an invalid base error
    pub fn invalid_base(base: u64) -> Self {
        ToolsError::InvalidBase { base }
    }

    /// Create an invalid dimension error
    pub fn invalid_dimension(dimension: usize, reason: impl Into<String>) -> Self {
        ToolsError::InvalidDimension {
            dimension,
            reason: reason.into(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(shape: &[u64], reason: impl Into<String>) -> Self {
        ToolsError::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }

    /// Create an integer out of range error
    pub fn integer_out_of_range(value: u64, base: u64, digits: usize) -> Self {
        ToolsError::IntegerOutOfRange {
            value,
            base,
            digits,
        }
    }

    /// Create a digit out of range error
    pub fn digit_out_of_range(digit: u64, base: u64, row: usize, column: usize) -> Self {
        ToolsError::DigitOutOfRange {
            digit,
            base,
            row,
            column,
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        ToolsError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        ToolsError::Overflow {
            operation: operation.into(),
        }
    }

    /// Whether the error reports a value outside its representable range
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ToolsError::IntegerOutOfRange { .. }
                | ToolsError::DigitOutOfRange { .. }
                | ToolsError::IndexOutOfBounds { .. }
                | ToolsError::CoordinateOutOfBounds { .. }
                | ToolsError::Overflow { .. }
        )
    }
}
