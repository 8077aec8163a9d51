//! Hash-backed Set
//!
//! An unordered collection of unique elements. The key set of the
//! underlying hash table is the set's contents, so duplicates collapse on
//! insertion and membership queries are O(1) expected.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use hashbrown::{DefaultHashBuilder, HashSet};

use crate::sets::iter::{IntoIter, Iter};
use crate::traits::Element;

/// Unordered set of unique elements
///
/// Iteration order is unspecified and may differ between two calls on the
/// same set. Compare sets with `==`, which ignores order, never by
/// comparing [`Set::to_vec`] outputs element by element.
///
/// A `Set` is an owned value. Mutation is shared by lending `&mut Set`;
/// an independent copy is made with [`Clone`].
///
/// # Type Parameters
/// - `T`: The element type, which must be [`Element`] (`Hash + Eq`)
/// - `S`: The hasher builder (defaults to hashbrown's default hasher)
///
/// # Example
/// ```rust
/// use uniqset::prelude::*;
///
/// let mut features = Set::from_values(["gps", "wifi", "gps"]);
/// assert_eq!(features.len(), 2);
///
/// features.add("bluetooth");
/// assert!(features.contains_all(["gps", "bluetooth"]));
///
/// assert!(features.remove("wifi"));
/// assert!(!features.remove("wifi"));
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    /// Elements in the set
    inner: HashSet<T, S>,
}

impl<T> Set<T, DefaultHashBuilder> {
    /// Creates a new empty set
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// let set = Set::<u32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }

    /// Creates a new empty set with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }
}

impl<T: Element> Set<T, DefaultHashBuilder> {
    /// Creates a set from a sequence of values
    ///
    /// The table is pre-sized from the iterator's size hint. Duplicates
    /// among `values` collapse to a single element.
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// let set = Set::from_values([1, 2, 3, 4, 3, 1]);
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set, Set::from_values([4, 3, 2, 1]));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_with_hasher(values, DefaultHashBuilder::default())
    }
}

impl<T, S> Set<T, S> {
    /// Creates a new empty set that hashes with `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Creates a new empty set with the given capacity and hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// let mut set = Set::new();
    /// assert_eq!(set.len(), 0);
    /// set.add(42);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks if the set is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Removes every element, keeping the allocated table
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements in unspecified order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.inner.iter())
    }

    /// Returns a reference to the set's hasher builder
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }
}

impl<T, S> Set<T, S>
where
    T: Element,
    S: BuildHasher,
{
    /// Creates a set from a sequence of values using `hasher`
    pub fn from_values_with_hasher<I>(values: I, hasher: S) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        let mut set = Self::with_capacity_and_hasher(lower, hasher);
        set.add_all(values);
        set
    }

    /// Inserts a value into the set
    ///
    /// # Returns
    /// true if the value was newly inserted, false if it was already present
    /// (the set is unchanged in that case)
    pub fn add(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    /// Inserts every value; values already present are no-ops
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.inner.insert(value);
        }
    }

    /// Inserts every element of `other` into this set (union in place)
    ///
    /// `other` is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// let mut set = Set::from_values([1, 2, 3, 4, 5]);
    /// set.add_set(&Set::from_values([3, 4, 5, 6, 7, 8]));
    /// assert_eq!(set, Set::from_values(1..=8));
    /// ```
    pub fn add_set<S2>(&mut self, other: &Set<T, S2>)
    where
        T: Clone,
    {
        self.inner.reserve(other.len());
        self.add_all(other.iter().cloned());
    }

    /// Checks if the set contains a value
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Checks if the set contains every given value
    ///
    /// Stops at the first absent value. An empty sequence yields true.
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// let set: Set<u32> = Set::from_values([1, 2, 3]);
    /// assert!(set.contains_all([1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// assert!(set.contains_all(core::iter::empty::<u32>()));
    /// ```
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .all(|value| self.inner.contains(Borrow::<T>::borrow(&value)))
    }

    /// Removes a value from the set
    ///
    /// # Returns
    /// true if the value was present before the call
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value)
    }

    /// Removes every given value that is present; absent values are ignored
    pub fn remove_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for value in values {
            self.inner.remove(Borrow::<T>::borrow(&value));
        }
    }

    /// Keeps only the elements for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(keep);
    }

    /// Checks if every element of this set is also in `other`
    pub fn is_subset<S2>(&self, other: &Set<T, S2>) -> bool
    where
        S2: BuildHasher,
    {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Checks if every element of `other` is also in this set
    pub fn is_superset<S2>(&self, other: &Set<T, S2>) -> bool
    where
        S2: BuildHasher,
    {
        other.is_subset(self)
    }

    /// Returns a new set holding the elements of both sets
    pub fn union<S2>(&self, other: &Set<T, S2>) -> Self
    where
        T: Clone,
        S: Clone,
    {
        let mut result = self.clone();
        result.add_set(other);
        result
    }

    /// Returns the elements as a vector, in unspecified order
    ///
    /// The vector has exactly [`Set::len`] entries, one per element.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        values.extend(self.iter().cloned());
        values
    }

    /// Consumes the set and returns its elements, in unspecified order
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, S: Default> Default for Set<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S, S2> PartialEq<Set<T, S2>> for Set<T, S>
where
    T: Element,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &Set<T, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Element, S: BuildHasher> Eq for Set<T, S> {}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Element,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values_with_hasher(iter, S::default())
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T, DefaultHashBuilder> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Element,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Element + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.inner.into_iter())
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sorted(mut values: Vec<i32>) -> Vec<i32> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_new_set() {
        let set = Set::<i32>::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.to_vec().is_empty());
    }

    #[test]
    fn test_from_values_collapses_duplicates() {
        let set = Set::from_values([1, 2, 3, 4, 3, 1]);
        assert_eq!(set.len(), 4);
        assert_eq!(sorted(set.to_vec()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_values_empty_and_single() {
        let empty = Set::from_values(Vec::<i32>::new());
        assert!(empty.is_empty());

        let single = Set::from_values([1]);
        assert_eq!(single.len(), 1);
        assert!(single.contains(&1));
    }

    #[test]
    fn test_add() {
        let mut set = Set::new();

        assert!(set.add(1));
        assert!(set.contains(&1));

        // Already present
        assert!(!set.add(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_all() {
        let mut set = Set::from_values([2, 3, 4]);
        set.add_all([1, 3, 5]);
        assert_eq!(set, Set::from_values([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_add_set() {
        let mut set = Set::from_values([1, 2, 3, 4, 5]);
        let other = Set::from_values([3, 4, 5, 6, 7, 8]);
        set.add_set(&other);

        assert_eq!(set, Set::from_values([1, 2, 3, 4, 5, 6, 7, 8]));
        // Source set is untouched
        assert_eq!(other, Set::from_values([3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_add_empty_set() {
        let mut set = Set::from_values([1, 2]);
        set.add_set(&Set::new());
        assert_eq!(set, Set::from_values([1, 2]));
    }

    #[test]
    fn test_contains() {
        let set = Set::from_values([1, 2, 3]);
        assert!(set.contains(&2));
        assert!(!set.contains(&4));
        assert!(!Set::<i32>::new().contains(&1));
    }

    #[test]
    fn test_contains_borrowed_form() {
        let set = Set::from_values([alloc::string::String::from("a")]);
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
    }

    #[test]
    fn test_contains_all() {
        let set = Set::from_values([1, 2, 3, 4]);
        assert!(set.contains_all([1, 2]));
        assert!(set.contains_all(&[4, 3, 2, 1]));
        assert!(!set.contains_all([1, 5]));
        assert!(!set.contains_all([5, 1]));
    }

    #[test]
    fn test_contains_all_empty_input() {
        let empty: [i32; 0] = [];
        assert!(Set::from_values([1]).contains_all(empty));
        assert!(Set::<i32>::new().contains_all(empty));
    }

    #[test]
    fn test_remove() {
        let mut set = Set::from_values([1, 2, 3]);

        assert!(set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 2);

        assert!(!set.remove(&2));
        assert!(!set.remove(&42));
        assert_eq!(set, Set::from_values([1, 3]));
    }

    #[test]
    fn test_remove_all() {
        let mut set = Set::from_values([1, 2, 3, 4, 5, 6]);
        set.remove_all([1, 2, 3, 5]);
        assert_eq!(set, Set::from_values([4, 6]));
    }

    #[test]
    fn test_remove_all_ignores_absent() {
        let mut set = Set::from_values([1, 2, 3]);
        set.remove_all(&[3, 7, 9]);
        assert_eq!(set, Set::from_values([1, 2]));

        let mut empty = Set::<i32>::new();
        empty.remove_all([1]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_to_vec_and_into_vec() {
        let set = Set::from_values([5, 1, 3]);
        assert_eq!(set.to_vec().len(), set.len());
        assert_eq!(sorted(set.to_vec()), vec![1, 3, 5]);
        assert_eq!(sorted(set.into_vec()), vec![1, 3, 5]);
    }

    #[test]
    fn test_subset_superset() {
        let small = Set::from_values([1, 2]);
        let large = Set::from_values([1, 2, 3]);

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(large.is_superset(&small));
        assert!(Set::<i32>::new().is_subset(&small));
    }

    #[test]
    fn test_union() {
        let a = Set::from_values([1, 2]);
        let b = Set::from_values([2, 3]);
        let union = a.union(&b);

        assert_eq!(union, Set::from_values([1, 2, 3]));
        assert_eq!(a, Set::from_values([1, 2]));
    }

    #[test]
    fn test_eq_ignores_order_and_history() {
        let mut a = Set::new();
        a.add_all([3, 2, 1, 9]);
        a.remove(&9);
        let b = Set::from_values([1, 2, 3]);

        assert_eq!(a, b);
        assert_ne!(a, Set::from_values([1, 2]));
        assert_ne!(a, Set::from_values([1, 2, 4]));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Set::from_values([1, 2]);
        let mut copy = original.clone();
        copy.add(3);

        assert!(!original.contains(&3));
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_retain_and_clear() {
        let mut set = Set::from_values(1..=10);
        set.retain(|value| value % 2 == 0);
        assert_eq!(set, Set::from_values([2, 4, 6, 8, 10]));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_collect_and_extend() {
        let mut set: Set<i32> = [1, 2, 2].into_iter().collect();
        set.extend([3, 1]);
        set.extend(&[4, 4]);
        assert_eq!(set, Set::from([1, 2, 3, 4]));
    }

    #[test]
    fn test_iteration_visits_each_element_once() {
        let set = Set::from_values([10, 20, 30]);
        let mut seen = Vec::new();
        for value in &set {
            seen.push(*value);
        }
        assert_eq!(sorted(seen), vec![10, 20, 30]);
    }

    #[test]
    fn test_debug_format() {
        let set = Set::from_values([7]);
        assert_eq!(alloc::format!("{set:?}"), "{7}");
        assert_eq!(alloc::format!("{:?}", Set::<i32>::new()), "{}");
    }

    #[test]
    fn test_with_capacity() {
        let set = Set::<u64>::with_capacity(32);
        assert!(set.capacity() >= 32);
        assert!(set.is_empty());
    }
}
