//! Set of unique scalar elements backed by a contiguous sequence.
//!
//! This module provides [`OrderedSet`], a mutable collection that stores its
//! elements in a `Vec` and implements set algebra with linear scans and a
//! merge-style intersection over sorted copies.
//!
//! # Order
//!
//! "Ordered" is a mode, not an invariant. Elements keep insertion order until
//! [`OrderedSet::sort`] or [`OrderedSet::reverse_sort`] is called, and
//! `add`, `discard` and `union` append or remove without re-sorting.
//! Operations that need sorted input sort a private copy.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity          |
//! |------------------------|---------------------|
//! | `with_elements`        | O(n log n)          |
//! | `add`                  | O(n)                |
//! | `remove` / `discard`   | O(n)                |
//! | `pop`                  | O(1)                |
//! | `pop_at`               | O(n)                |
//! | `has`                  | O(n)                |
//! | `union`                | O(n * m)            |
//! | `intersect`            | O(n log n + m log m)|
//! | `difference`           | O(n * m)            |
//! | `symmetric_difference` | O(n * m)            |
//! | `is_subset_of`         | O(n * m)            |
//! | `equals`               | O(n * m)            |
//! | `min` / `max` / `sum`  | O(n)                |
//! | `sort`                 | O(n log n)          |
//! | `concat`               | O(total length)     |
//!
//! # Examples
//!
//! ```rust
//! use treje::set::OrderedSet;
//!
//! let mut set = OrderedSet::with_elements([5, 4, 2, 9]).unwrap();
//! assert_eq!(set.to_vec().unwrap(), vec![5, 4, 2, 9]);
//!
//! set.sort();
//! assert_eq!(set.to_vec().unwrap(), vec![2, 4, 5, 9]);
//!
//! let other = OrderedSet::with_elements([5, 4, 7, 10]).unwrap();
//! assert_eq!(set.intersect(&other).to_vec().unwrap(), vec![4, 5]);
//!
//! assert_eq!(set.pop(), Ok(9));
//! ```

use crate::element::{Element, Numeric};
use crate::error::SetError;
use crate::sort::{has_adjacent_duplicates, quick_sort};
use std::cmp::Ordering;
use std::fmt;

/// A set of unique scalar elements stored in a contiguous sequence.
///
/// The set owns its elements exclusively; cloning copies the sequence.
/// No two elements compare equal under `==` after any public operation
/// returns.
///
/// # Type Parameters
///
/// * `T` - The element type, one of the scalar primitives implementing
///   [`Element`].
///
/// # Examples
///
/// ```rust
/// use treje::error::SetError;
/// use treje::set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.add("banana".to_string()).unwrap();
/// set.add("apple".to_string()).unwrap();
///
/// assert!(set.has(&"apple".to_string()));
/// assert_eq!(
///     set.add("apple".to_string()),
///     Err(SetError::AlreadyExists { element: "apple".to_string() })
/// );
/// ```
#[derive(Clone)]
pub struct OrderedSet<T: Element> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync, Clone, Default);

impl<T: Element> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::set::OrderedSet;
    ///
    /// let set: OrderedSet<u8> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a set from the given elements, keeping their order.
    ///
    /// With two or more elements, a working copy is sorted with
    /// [`quick_sort`] and scanned for equal neighbours. The constructed set
    /// keeps the input order, not the sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DuplicateElements`] if any value appears twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::error::SetError;
    /// use treje::set::OrderedSet;
    ///
    /// let set = OrderedSet::with_elements([5, 4, 2, 9]).unwrap();
    /// assert_eq!(set.to_vec().unwrap(), vec![5, 4, 2, 9]);
    ///
    /// let duplicated = OrderedSet::with_elements([2, 4, 5, 4, 2]);
    /// assert_eq!(duplicated.unwrap_err(), SetError::DuplicateElements);
    /// ```
    pub fn with_elements<I>(elements: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        if elements.len() < 2 {
            return Ok(Self { elements });
        }

        let mut working = elements.clone();
        quick_sort(&mut working);
        if has_adjacent_duplicates(&working) {
            return Err(SetError::DuplicateElements.rejected("with_elements"));
        }

        Ok(Self { elements })
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if any element equals `element`.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan.
    #[inline]
    #[must_use]
    pub fn has(&self, element: &T) -> bool {
        self.elements.iter().any(|item| item == element)
    }

    /// Appends `element` if it is not already present.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::AlreadyExists`] if an equal element is present;
    /// the set is left unchanged.
    pub fn add(&mut self, element: T) -> Result<(), SetError> {
        if self.has(&element) {
            return Err(SetError::AlreadyExists {
                element: element.to_string(),
            }
            .rejected("add"));
        }

        self.elements.push(element);
        Ok(())
    }

    /// Removes `element`, reporting its absence.
    ///
    /// # Errors
    ///
    /// - [`SetError::EmptySet`] if the set is empty
    /// - [`SetError::ElementNotExist`] if no element equals `element`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::error::SetError;
    /// use treje::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_elements([1, 2, 3]).unwrap();
    /// assert_eq!(set.remove(&2), Ok(()));
    /// assert_eq!(set.remove(&2), Err(SetError::ElementNotExist));
    /// ```
    pub fn remove(&mut self, element: &T) -> Result<(), SetError> {
        if self.is_empty() {
            return Err(SetError::EmptySet.rejected("remove"));
        }

        let original_length = self.len();
        self.discard(element);
        if self.len() == original_length {
            return Err(SetError::ElementNotExist.rejected("remove"));
        }
        Ok(())
    }

    /// Removes the first element equal to `element`; does nothing if absent.
    pub fn discard(&mut self, element: &T) {
        if let Some(position) = self.elements.iter().position(|item| item == element) {
            self.elements.remove(position);
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptySet`] if the set is empty.
    pub fn pop(&mut self) -> Result<T, SetError> {
        self.elements
            .pop()
            .ok_or_else(|| SetError::EmptySet.rejected("pop"))
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// - [`SetError::EmptySet`] if the set is empty
    /// - [`SetError::IndexOutOfRange`] if `index >= self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::error::SetError;
    /// use treje::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_elements([5, 4, 2, 9]).unwrap();
    /// assert_eq!(set.pop_at(1), Ok(4));
    /// assert_eq!(
    ///     set.pop_at(3),
    ///     Err(SetError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn pop_at(&mut self, index: usize) -> Result<T, SetError> {
        if self.is_empty() {
            return Err(SetError::EmptySet.rejected("pop_at"));
        }
        if index >= self.len() {
            return Err(SetError::IndexOutOfRange {
                index,
                length: self.len(),
            }
            .rejected("pop_at"));
        }

        Ok(self.elements.remove(index))
    }

    /// Appends every element of `other`, failing on the first one already
    /// present.
    ///
    /// This operation is **not atomic**: elements of `other` that precede the
    /// duplicate stay appended when the error is returned. Treat an error as
    /// "partially applied", or use [`OrderedSet::union_atomic`].
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DuplicateElements`] if any element of `other` is
    /// already in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::error::SetError;
    /// use treje::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_elements([1, 2]).unwrap();
    /// let other = OrderedSet::with_elements([3, 2, 4]).unwrap();
    ///
    /// assert_eq!(set.union(&other), Err(SetError::DuplicateElements));
    /// assert_eq!(set.to_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn union(&mut self, other: &Self) -> Result<(), SetError> {
        #[cfg(feature = "tracing")]
        let original_length = self.len();

        for element in &other.elements {
            if self.has(element) {
                #[cfg(feature = "tracing")]
                if self.len() > original_length {
                    tracing::warn!(
                        applied = self.len() - original_length,
                        "union stopped at a duplicate after appending elements"
                    );
                }
                return Err(SetError::DuplicateElements.rejected("union"));
            }
            self.elements.push(element.clone());
        }
        Ok(())
    }

    /// Appends every element of `other`, or nothing at all.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DuplicateElements`] if any element of `other` is
    /// already in the set; the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::error::SetError;
    /// use treje::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_elements([1, 2]).unwrap();
    /// let other = OrderedSet::with_elements([3, 2, 4]).unwrap();
    ///
    /// assert_eq!(set.union_atomic(&other), Err(SetError::DuplicateElements));
    /// assert_eq!(set.to_vec().unwrap(), vec![1, 2]);
    /// ```
    pub fn union_atomic(&mut self, other: &Self) -> Result<(), SetError> {
        if other.elements.iter().any(|element| self.has(element)) {
            return Err(SetError::DuplicateElements.rejected("union_atomic"));
        }

        self.elements.extend_from_slice(&other.elements);
        Ok(())
    }

    /// Returns a new set with the elements present in both sets.
    ///
    /// Both operands are copied and sorted ascending, then merged with two
    /// pointers. Neither `self` nor `other` is reordered; call
    /// [`OrderedSet::sort`] first if a sorted view of the operands is wanted.
    /// The result is in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n log n + m log m) for the sorts, O(n + m) for the merge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::set::OrderedSet;
    ///
    /// let left = OrderedSet::with_elements([5, 4, 2, 9]).unwrap();
    /// let right = OrderedSet::with_elements([5, 4, 7, 10]).unwrap();
    ///
    /// let common = left.intersect(&right);
    /// assert_eq!(common.to_vec().unwrap(), vec![4, 5]);
    /// assert_eq!(left.to_vec().unwrap(), vec![5, 4, 2, 9]);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let left = self.sorted_elements();
        let right = other.sorted_elements();

        Self {
            elements: intersection_slices(&left, &right),
        }
    }

    /// Returns a new set with the elements of `self` that are not in `other`,
    /// in the order they appear in `self`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| !other.has(element))
                .cloned()
                .collect(),
        }
    }

    /// Returns a new set with the elements that are in exactly one of the two
    /// sets.
    ///
    /// The result lists `self.difference(other)` first, followed by
    /// `other.difference(self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::set::OrderedSet;
    ///
    /// let left = OrderedSet::with_elements([1, 2, 3]).unwrap();
    /// let right = OrderedSet::with_elements([4, 3, 2]).unwrap();
    ///
    /// let exclusive = left.symmetric_difference(&right);
    /// assert_eq!(exclusive.to_vec().unwrap(), vec![1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut elements = self.difference(other).elements;
        elements.extend(other.difference(self).elements);
        Self { elements }
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.elements.iter().all(|element| other.has(element))
    }

    /// Returns `true` if each set is a subset of the other.
    ///
    /// Order is irrelevant.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the smallest element under [`Element::compare`].
    ///
    /// Found with a linear scan; the receiver is not sorted or reordered.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptySet`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::error::SetError;
    /// use treje::set::OrderedSet;
    ///
    /// let set = OrderedSet::with_elements([5_i8, -4, 2]).unwrap();
    /// assert_eq!(set.min(), Ok(&-4));
    ///
    /// let empty: OrderedSet<i8> = OrderedSet::new();
    /// assert_eq!(empty.min(), Err(SetError::EmptySet));
    /// ```
    pub fn min(&self) -> Result<&T, SetError> {
        self.elements
            .iter()
            .min_by(|left, right| left.compare(right))
            .ok_or_else(|| SetError::EmptySet.rejected("min"))
    }

    /// Returns the largest element under [`Element::compare`].
    ///
    /// Like [`OrderedSet::min`], this leaves the current order untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptySet`] if the set is empty.
    pub fn max(&self) -> Result<&T, SetError> {
        self.elements
            .iter()
            .max_by(|left, right| left.compare(right))
            .ok_or_else(|| SetError::EmptySet.rejected("max"))
    }

    /// Sorts the elements ascending in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_elements([5, 4, 2, 9]).unwrap();
    /// assert_eq!(set.sort().to_vec().unwrap(), vec![2, 4, 5, 9]);
    /// assert_eq!(set.reverse_sort().to_vec().unwrap(), vec![9, 5, 4, 2]);
    /// ```
    pub fn sort(&mut self) -> &mut Self {
        self.elements.sort_by(T::compare);
        self
    }

    /// Sorts the elements descending in place.
    pub fn reverse_sort(&mut self) -> &mut Self {
        self.elements.sort_by(|left, right| right.compare(left));
        self
    }

    /// Returns an independent copy of the set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::CopyFromEmpty`] if the set is empty.
    pub fn copy(&self) -> Result<Self, SetError> {
        if self.is_empty() {
            return Err(SetError::CopyFromEmpty.rejected("copy"));
        }
        Ok(self.clone())
    }

    /// Returns the elements in their current order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptySet`] if the set is empty.
    pub fn to_vec(&self) -> Result<Vec<T>, SetError> {
        if self.is_empty() {
            return Err(SetError::EmptySet.rejected("to_vec"));
        }
        Ok(self.elements.clone())
    }

    fn sorted_elements(&self) -> Vec<T> {
        let mut sorted = self.elements.clone();
        sorted.sort_by(T::compare);
        sorted
    }
}

impl<T: Numeric> OrderedSet<T> {
    /// Returns the total of all elements, widened to [`Numeric::Total`].
    ///
    /// An empty set sums to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::set::OrderedSet;
    ///
    /// let empty: OrderedSet<u8> = OrderedSet::new();
    /// assert_eq!(empty.sum(), 0);
    ///
    /// let set = OrderedSet::with_elements([250_u8, 10]).unwrap();
    /// assert_eq!(set.sum(), 260);
    ///
    /// let set = OrderedSet::with_elements([0.5_f32, 1.25]).unwrap();
    /// assert_eq!(set.sum(), 1.75);
    /// ```
    #[must_use]
    pub fn sum(&self) -> T::Total {
        self.elements
            .iter()
            .fold(T::Total::default(), |total, &element| total + element.widen())
    }
}

impl OrderedSet<String> {
    /// Joins the elements with `separator` in their current order.
    ///
    /// An empty set yields an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treje::set::StringSet;
    ///
    /// let mut set = StringSet::with_elements(["pear", "apple"].map(String::from)).unwrap();
    /// assert_eq!(set.concat(", "), "pear, apple");
    /// assert_eq!(set.sort().concat("-"), "apple-pear");
    /// assert_eq!(StringSet::new().concat(", "), "");
    /// ```
    #[must_use]
    pub fn concat(&self, separator: &str) -> String {
        self.elements.join(separator)
    }
}

impl<T: Element> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> TryFrom<Vec<T>> for OrderedSet<T> {
    type Error = SetError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::with_elements(elements)
    }
}

impl<T: Element> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Element> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

/// Computes the common elements of two ascending slices.
///
/// Advances the pointer on the smaller element; on equality, appends the
/// element unless it equals the last one appended, then advances both.
///
/// # Preconditions
///
/// Both slices must be sorted ascending under [`Element::compare`].
///
/// # Complexity
///
/// O(n + m) where n = `left.len()`, m = `right.len()`.
fn intersection_slices<T: Element>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        let left_element = &left[left_index];
        let right_element = &right[right_index];

        if left_element == right_element {
            if result.last() != Some(left_element) {
                result.push(left_element.clone());
            }
            left_index += 1;
            right_index += 1;
        } else if left_element.compare(right_element) == Ordering::Less {
            left_index += 1;
        } else {
            right_index += 1;
        }
    }

    result
}

// =============================================================================
// Serde support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Element + serde::Serialize> serde::Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedSetVisitor<T>
where
    T: Element + serde::Deserialize<'de>,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of unique elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        OrderedSet::with_elements(elements).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: Element + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
