//! Sets of scalar elements backed by a contiguous sequence.
//!
//! - [`OrderedSet`]: the generic set engine
//! - [`Int8Set`] ... [`StringSet`]: one alias per supported scalar type
//!
//! # Mutation and Results
//!
//! An `OrderedSet` is mutated in place. Every operation that can fail
//! returns a [`SetError`](crate::error::SetError) instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use treje::error::SetError;
//! use treje::set::{Int8Set, StringSet};
//!
//! let mut numbers = Int8Set::with_elements([5, 4, 2, 9]).unwrap();
//! assert_eq!(numbers.pop(), Ok(9));
//! assert_eq!(numbers.to_vec().unwrap(), vec![5, 4, 2]);
//!
//! let empty = Int8Set::new();
//! assert_eq!(empty.min(), Err(SetError::EmptySet));
//!
//! let mut words = StringSet::new();
//! words.add("pear".to_string()).unwrap();
//! assert!(words.has(&"pear".to_string()));
//! ```

mod aliases;
mod ordered_set;

pub use aliases::Float32Set;
pub use aliases::Float64Set;
pub use aliases::Int8Set;
pub use aliases::Int16Set;
pub use aliases::Int32Set;
pub use aliases::Int64Set;
pub use aliases::IntSet;
pub use aliases::StringSet;
pub use aliases::Uint8Set;
pub use aliases::Uint16Set;
pub use aliases::Uint32Set;
pub use aliases::Uint64Set;
pub use aliases::UintSet;
pub use ordered_set::OrderedSet;
