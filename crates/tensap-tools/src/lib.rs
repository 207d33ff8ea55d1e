//! # tensap-tools
//!
//! Integer helpers shared by the tensor approximation crates.
//!
//! ## Overview
//!
//! - **Set operations** - sorted intersection and order-preserving difference of
//!   duplicate-free integer arrays ([`fast_intersect`], [`fast_setdiff`])
//! - **Base-b encoding** - integers to fixed-length digit vectors and back
//!   ([`integer2baseb`], [`baseb2integer`])
//! - **Mixed-radix indexing** - flat index to per-axis coordinates in a grid of
//!   arbitrary extents ([`unravel_index`], [`ravel_multi_index`])
//!
//! All functions are pure and stateless: they read their inputs, allocate the
//! result and return. They are safe to call from several threads at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::array;
//! use tensap_tools::{baseb2integer, fast_intersect, fast_setdiff, integer2baseb};
//!
//! let a = array![1u64, 3, 5, 7];
//! let b = array![3u64, 4, 5];
//! assert_eq!(fast_intersect(&a.view(), &b.view()).to_vec(), vec![3, 5]);
//! assert_eq!(fast_setdiff(&a.view(), &b.view()).to_vec(), vec![1, 7]);
//!
//! // 5 = 1*4 + 0*2 + 1, three digits inferred
//! let digits = integer2baseb(&array![5u64].view(), 2, None).unwrap();
//! assert_eq!(digits, array![[1u64, 0, 1]]);
//! assert_eq!(baseb2integer(&digits.view(), 2).unwrap().to_vec(), vec![5]);
//! ```
//!
//! ## Preconditions
//!
//! The set operations assume each input is free of repeated values and do
//! not check it. [`is_duplicate_free`] is available for callers that need to.
//!
//! ## Error Handling
//!
//! Base-b and indexing functions return [`ToolsResult`]. Range violations
//! (an integer too large for its digit count, a digit not below the base) are
//! reported, never wrapped.
//!
//! ## Features
//!
//! - `serde` - Serialize/Deserialize for [`IndexOrder`]
//!
//! ## SciRS2 Integration
//!
//! Arrays come from `scirs2_core::ndarray_ext`. Direct use of `ndarray` is
//! not permitted.

#![deny(warnings)]

pub mod base_b;
pub mod error;
pub mod indexing;
pub mod set_ops;


// Re-exports
pub use base_b::*;
pub use error::{ToolsError, ToolsResult};
pub use indexing::*;
pub use set_ops::*;
