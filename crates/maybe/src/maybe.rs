//! `Maybe<T>`: a value of type `T`, or nothing.

use crate::error::{Error, Result, EMPTY_MAYBE_HAS_NO_VALUE};
use crate::shape::{Shape, Shaped};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

/// Either empty or holding exactly one value. State is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Maybe<T> {
    Empty,
    Valued(T),
}

impl<T> Maybe<T> {
    #[inline]
    pub fn empty() -> Self {
        Maybe::Empty
    }

    #[inline]
    pub fn of(value: T) -> Self {
        Maybe::Valued(value)
    }

    /// Wraps a possibly absent value, rejecting `None`.
    pub fn try_of(value: Option<T>) -> Result<Self> {
        value.map(Maybe::Valued).ok_or(Error::ArgumentInvalid("value"))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Empty)
    }

    /// Borrows the contained value. An empty `Maybe` has none to give.
    pub fn value(&self) -> Result<&T> {
        match self {
            Maybe::Valued(v) => Ok(v),
            Maybe::Empty => Err(Error::InvalidState(EMPTY_MAYBE_HAS_NO_VALUE)),
        }
    }

    pub fn into_value(self) -> Result<T> {
        match self {
            Maybe::Valued(v) => Ok(v),
            Maybe::Empty => Err(Error::InvalidState(EMPTY_MAYBE_HAS_NO_VALUE)),
        }
    }

    /// Returns the contained value, or `default` when empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Valued(v) => v,
            Maybe::Empty => default,
        }
    }

    #[inline]
    pub fn value_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Maybe::Valued(v) => v,
            Maybe::Empty => default(),
        }
    }

    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Maybe::Valued(v) => Some(v),
            Maybe::Empty => None,
        }
    }

    /// A fresh zero-or-one element view; each call starts over.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_option().into_iter() }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Empty
    }
}

// Empty hashes a fixed constant; Valued hashes only its value.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Empty => 0u64.hash(state),
            Maybe::Valued(v) => v.hash(state),
        }
    }
}

impl<T> Shaped for Maybe<T> {
    fn shape(&self) -> Shape {
        match self {
            Maybe::Empty => Shape::Empty,
            Maybe::Valued(_) => Shape::Valued,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Valued(v),
            None => Maybe::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Valued(v) => Some(v),
            Maybe::Empty => None,
        }
    }
}

/// Borrowing iterator over a `Maybe`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    pub(crate) inner: core::option::IntoIter<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a `Maybe`.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    pub(crate) inner: core::option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: Option::<T>::from(self).into_iter() }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
