// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `Vector`
//!

use std::iter::FromIterator;

use num_traits::{One, Zero};

use crate::imp_prelude::*;

/// # Constructor Methods for Owned Vectors
///
/// Every constructor allocates a buffer of exactly the requested length.
impl<A> Vector<A> {
    /// Create a vector from a `Vec` (no copying needed).
    ///
    /// ```rust
    /// use linvec::Vector;
    ///
    /// let vector = Vector::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(vector.len(), 4);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        VecBase::from_data(OwnedRepr::from(v))
    }

    /// Create a vector of length `n` filled with `A::default()`.
    ///
    /// ```rust
    /// use linvec::Vector;
    ///
    /// let mask = Vector::<bool>::with_len(3);
    /// assert_eq!(mask.as_slice(), &[false, false, false]);
    /// ```
    pub fn with_len(n: usize) -> Self
    where
        A: Clone + Default,
    {
        Self::from_vec(vec![A::default(); n])
    }

    /// Create a vector of length `n` with every element set to `value`.
    ///
    /// ```rust
    /// use linvec::Vector;
    ///
    /// let v = Vector::constant(3, f64::INFINITY);
    /// assert!(!v.all_finite());
    /// ```
    pub fn constant(n: usize, value: A) -> Self
    where
        A: Clone,
    {
        Self::from_vec(vec![value; n])
    }

    /// Create a vector of length `n` filled with zeros.
    ///
    /// ```rust
    /// use linvec::Vector;
    ///
    /// let v = Vector::<f64>::zeros(3);
    /// assert_eq!(v.norm(), 0.);
    /// ```
    pub fn zeros(n: usize) -> Self
    where
        A: Clone + Zero,
    {
        Self::constant(n, A::zero())
    }

    /// Create a vector of length `n` filled with ones.
    pub fn ones(n: usize) -> Self
    where
        A: Clone + One,
    {
        Self::constant(n, A::one())
    }

    /// Create a vector of length `n` with elements `f(0), f(1), ...`.
    ///
    /// ```rust
    /// use linvec::{vector, Vector};
    ///
    /// let v = Vector::from_fn(4, |i| (i * i) as f64);
    /// assert_eq!(v, vector![0., 1., 4., 9.]);
    /// ```
    pub fn from_fn<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize) -> A,
    {
        Self::from_vec((0..n).map(f).collect())
    }
}

/// An empty vector.
impl<A> Default for Vector<A> {
    fn default() -> Self {
        VecBase::from_data(OwnedRepr::from(Vec::new()))
    }
}

impl<A> From<Vec<A>> for Vector<A> {
    fn from(v: Vec<A>) -> Self {
        Self::from_vec(v)
    }
}

impl<A> From<Box<[A]>> for Vector<A> {
    fn from(v: Box<[A]>) -> Self {
        Self::from_vec(v.into_vec())
    }
}

impl<A, const N: usize> From<[A; N]> for Vector<A> {
    fn from(xs: [A; N]) -> Self {
        Self::from_vec(Vec::from(xs))
    }
}

impl<A> FromIterator<A> for Vector<A> {
    /// Create a vector from an iterable.
    ///
    /// ```rust
    /// use linvec::{vector, Vector};
    ///
    /// let v: Vector<i32> = (0..5).map(|x| x * x).collect();
    /// assert_eq!(v, vector![0, 1, 4, 9, 16]);
    /// ```
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::from_vec(iterable.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories() {
        assert_eq!(Vector::<f32>::zeros(2).as_slice(), &[0., 0.]);
        assert_eq!(Vector::<i64>::ones(3).as_slice(), &[1, 1, 1]);
        assert_eq!(Vector::constant(2, 7u8).as_slice(), &[7, 7]);
        assert!(Vector::<f64>::zeros(0).is_empty());
        assert!(Vector::<f64>::default().is_empty());
        assert_eq!(Vector::from([1, 2]).len(), 2);
    }
}
