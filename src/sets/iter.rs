//! Set iterators
//!
//! Thin wrappers over the hash table's iterators so the backing table stays
//! an implementation detail. Both yield elements in unspecified order.

use core::fmt;
use core::iter::FusedIterator;

use hashbrown::hash_set;

/// Borrowing iterator over the elements of a [`Set`](crate::sets::Set)
pub struct Iter<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: hash_set::Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator over the elements of a [`Set`](crate::sets::Set)
pub struct IntoIter<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: hash_set::IntoIter<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
