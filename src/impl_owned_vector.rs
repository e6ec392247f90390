// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem;

use crate::imp_prelude::*;

/// Methods specific to `Vector`.
///
/// ***See also all methods for [`VecBase`]***
impl<A> Vector<A> {
    /// Return a vector with the same elements as `self`, as a `Vec`.
    ///
    /// No copying takes place.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// assert_eq!(vector![1, 2, 3].into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_vec(self) -> Vec<A> {
        self.data.into_vec()
    }

    /// Change the length of the vector to `n`.
    ///
    /// When `n` differs from the current length, the buffer is reallocated
    /// and **all** elements are reset to `A::default()`; the previous
    /// contents are not preserved. When `n` equals the current length this
    /// is a no-op: neither the buffer nor its contents change.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let mut a = vector![1., 2., 3.];
    /// a.resize(3);
    /// assert_eq!(a, vector![1., 2., 3.]);
    /// a.resize(2);
    /// assert_eq!(a, vector![0., 0.]);
    /// ```
    pub fn resize(&mut self, n: usize)
    where
        A: Clone + Default,
    {
        if n != self.len() {
            self.data.reallocate(n);
        }
    }

    /// Exchange the buffers of `self` and `other`.
    ///
    /// No elements are copied and this never panics.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let mut a = vector![1, 2];
    /// let mut b = vector![3, 4, 5];
    /// let pa = a.as_ptr();
    /// a.swap(&mut b);
    /// assert_eq!(a, vector![3, 4, 5]);
    /// assert_eq!(b.as_ptr(), pa);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }
}

impl<A> IntoIterator for Vector<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
