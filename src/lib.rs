//! # treje
//!
//! Generic sets over scalar primitives, stored as a contiguous sequence.
//!
//! ## Overview
//!
//! - **Ordered sets**: [`OrderedSet`](set::OrderedSet) over signed and
//!   unsigned integers, `f32`, `f64` and `String`, with mutation, membership
//!   and set algebra (union, intersection, difference, symmetric difference,
//!   subset and equality tests)
//! - **Sorting**: a hand-rolled quicksort used for the duplicate check at
//!   construction
//! - **Errors**: every failure is a [`SetError`](error::SetError) value
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events when an operation is rejected (default)
//! - `serde`: `Serialize`/`Deserialize` for `OrderedSet`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use treje::prelude::*;
//!
//! let mut left = OrderedSet::with_elements([5, 4, 2, 9])?;
//! let right = OrderedSet::with_elements([5, 4, 7, 10])?;
//!
//! assert_eq!(left.intersect(&right).to_vec()?, vec![4, 5]);
//! assert_eq!(left.sort().to_vec()?, vec![2, 4, 5, 9]);
//! assert_eq!(
//!     OrderedSet::with_elements([2, 4, 5, 4, 2]).unwrap_err(),
//!     SetError::DuplicateElements
//! );
//! # Ok::<(), SetError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use treje::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::{Element, Numeric};
    pub use crate::error::SetError;
    pub use crate::set::*;
}

pub mod element;
pub mod error;
pub mod set;
pub mod sort;
