//! Error types for set operations.
//!
//! Every fallible operation on [`OrderedSet`](crate::set::OrderedSet) reports
//! its failure as a [`SetError`] value. Nothing in this crate panics on bad
//! input; callers decide whether to proceed.

use std::fmt;

/// Represents the reasons a set operation can be rejected.
///
/// # Examples
///
/// ```rust
/// use treje::error::SetError;
/// use treje::set::OrderedSet;
///
/// let mut set: OrderedSet<i32> = OrderedSet::new();
/// assert_eq!(set.remove(&1), Err(SetError::EmptySet));
/// assert_eq!(format!("{}", SetError::EmptySet), "set is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The operation requires at least one element, but the set is empty.
    EmptySet,
    /// The element passed to `remove` is not in the set.
    ElementNotExist,
    /// The element passed to `add` is already in the set.
    AlreadyExists {
        /// The rejected element, rendered with its `Display` form.
        element: String,
    },
    /// Construction or union would introduce a duplicate element.
    DuplicateElements,
    /// The index passed to `pop_at` is past the end of the set.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the set at the time of the call.
        length: usize,
    },
    /// `copy` was called on an empty set.
    CopyFromEmpty,
}

impl SetError {
    /// Records the rejection of `operation` and hands the error back.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn rejected(self, operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, error = %self, "set operation rejected");
        self
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySet => write!(formatter, "set is empty"),
            Self::ElementNotExist => write!(formatter, "element does not exist in the set"),
            Self::AlreadyExists { element } => {
                write!(formatter, "{element} already exists in the set")
            }
            Self::DuplicateElements => write!(formatter, "set has duplicates"),
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index out of range: the length is {length} but the index is {index}"
            ),
            Self::CopyFromEmpty => write!(formatter, "cannot copy an empty slice"),
        }
    }
}

impl std::error::Error for SetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_set(SetError::EmptySet, "set is empty")]
    #[case::element_not_exist(SetError::ElementNotExist, "element does not exist in the set")]
    #[case::already_exists(
        SetError::AlreadyExists { element: "42".to_string() },
        "42 already exists in the set"
    )]
    #[case::duplicate_elements(SetError::DuplicateElements, "set has duplicates")]
    #[case::index_out_of_range(
        SetError::IndexOutOfRange { index: 7, length: 3 },
        "index out of range: the length is 3 but the index is 7"
    )]
    #[case::copy_from_empty(SetError::CopyFromEmpty, "cannot copy an empty slice")]
    fn test_display(#[case] error: SetError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_rejected_returns_same_error() {
        let error = SetError::DuplicateElements.rejected("union");
        assert_eq!(error, SetError::DuplicateElements);
    }

    #[rstest]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SetError::EmptySet);
    }
}
