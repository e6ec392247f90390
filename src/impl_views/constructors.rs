// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::imp_prelude::*;

/// Methods for read-only vector views.
impl<'a, A, M> VecView<'a, A, M>
where
    M: Mode,
{
    /// Create a read-only vector view borrowing its data from a slice.
    ///
    /// ```
    /// use linvec::VecView;
    ///
    /// let data = [1., 2., 3.];
    /// let v = VecView::<f64>::from_slice(&data);
    /// assert_eq!(v.as_ptr(), data.as_ptr());
    /// ```
    #[inline]
    pub fn from_slice(xs: &'a [A]) -> Self {
        VecBase::from_data(ViewRepr::new(xs))
    }

    /// Create a read-only vector view from a pointer and a length.
    ///
    /// This is the adapter for buffers owned on the other side of a foreign
    /// function boundary: nothing is copied or reallocated, and the view
    /// reads the caller's memory directly. Indexed access is still bounds
    /// checked against `len`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that, for the lifetime `'a`:
    ///
    /// * if `len > 0`, `ptr` is non-null and aligned, and points to `len`
    ///   consecutive initialized elements of type `A` (when `len == 0`,
    ///   `ptr` is not read and may be null),
    /// * the memory is not written to through any other pointer,
    /// * `len * size_of::<A>()` does not exceed `isize::MAX`.
    ///
    /// ```
    /// use linvec::VecView;
    ///
    /// let buffer = vec![3., 4.];
    /// let v = unsafe { VecView::<f64>::from_raw_parts(buffer.as_ptr(), buffer.len()) };
    /// assert_eq!(v.norm(), 5.);
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const A, len: usize) -> Self {
        if len == 0 {
            return Self::from_slice(&[]);
        }
        Self::from_slice(slice::from_raw_parts(ptr, len))
    }
}

/// Methods for read-write vector views.
impl<'a, A, M> VecViewMut<'a, A, M>
where
    M: Mode,
{
    /// Create a read-write vector view borrowing its data from a slice.
    #[inline]
    pub fn from_slice_mut(xs: &'a mut [A]) -> Self {
        VecBase::from_data(ViewRepr::new(xs))
    }

    /// Create a read-write vector view from a pointer and a length.
    ///
    /// Writes through the view land directly in the caller's buffer.
    ///
    /// # Safety
    ///
    /// The caller must ensure that, for the lifetime `'a`:
    ///
    /// * if `len > 0`, `ptr` is non-null and aligned, and points to `len`
    ///   consecutive initialized elements of type `A` (when `len == 0`,
    ///   `ptr` is not read and may be null),
    /// * the memory is not accessed through any other pointer,
    /// * `len * size_of::<A>()` does not exceed `isize::MAX`.
    ///
    /// ```
    /// use linvec::VecViewMut;
    ///
    /// let mut buffer = vec![1., 2.];
    /// let mut v = unsafe { VecViewMut::<f64>::from_raw_parts(buffer.as_mut_ptr(), 2) };
    /// v.set_constant(7.);
    /// assert_eq!(buffer, [7., 7.]);
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut A, len: usize) -> Self {
        if len == 0 {
            return Self::from_slice_mut(&mut []);
        }
        Self::from_slice_mut(slice::from_raw_parts_mut(ptr, len))
    }
}
