// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, IndexMut};
use std::slice;

use num_traits::Zero;

use crate::error::{self, LenError};
use crate::imp_prelude::*;

/// # Methods For All Vectors
impl<A, S, M> VecBase<S, M>
where
    S: Data<Elem = A>,
    M: Mode,
{
    /// Return the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.data._data_slice().len()
    }

    /// Return whether the vector has any elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the vector's elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        self.data._data_slice()
    }

    /// Return a pointer to the first element in the vector.
    ///
    /// Views created from a vector share its pointer; no view ever copies.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const A {
        self.as_slice().as_ptr()
    }

    /// Return an iterator of references to the elements of the vector.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.as_slice().iter()
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 2., 3.];
    /// assert_eq!(a.get(2), Some(&3.));
    /// assert_eq!(a.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&A> {
        self.as_slice().get(index)
    }

    /// Return a read-only view of the vector, keeping its mode.
    #[inline]
    pub fn view(&self) -> VecView<'_, A, M> {
        VecView::from_data(ViewRepr::new(self.as_slice()))
    }

    /// Return a read-only elementwise view of the vector.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 2., 3.];
    /// let b = vector![2., 2., 2.];
    /// assert_eq!(a.elementwise() / b.elementwise(), vector![0.5, 1., 1.5]);
    /// ```
    #[inline]
    pub fn elementwise(&self) -> VecView<'_, A, Elementwise> {
        VecView::from_data(ViewRepr::new(self.as_slice()))
    }

    /// Return a read-only strict (linear algebra) view of the vector.
    #[inline]
    pub fn strict(&self) -> VecView<'_, A, Strict> {
        VecView::from_data(ViewRepr::new(self.as_slice()))
    }

    /// Return an owned copy of the vector.
    pub fn to_owned(&self) -> Vector<A>
    where
        A: Clone,
    {
        Vector::from_vec(self.as_slice().to_vec())
    }

    /// Return a view of the first `n` elements.
    ///
    /// **Panics** if `n` is greater than the length.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1, 2, 3, 4];
    /// assert_eq!(a.top_rows(3), vector![1, 2, 3]);
    /// assert!(a.top_rows(0).is_empty());
    /// ```
    #[track_caller]
    pub fn top_rows(&self, n: usize) -> VecView<'_, A, M> {
        match self.try_top_rows(n) {
            Ok(v) => v,
            Err(_) => error::sub_len_out_of_bounds("top_rows", n, self.len()),
        }
    }

    /// Return a view of the last `n` elements.
    ///
    /// **Panics** if `n` is greater than the length.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1, 2, 3, 4];
    /// assert_eq!(a.bottom_rows(3), vector![2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn bottom_rows(&self, n: usize) -> VecView<'_, A, M> {
        match self.try_bottom_rows(n) {
            Ok(v) => v,
            Err(_) => error::sub_len_out_of_bounds("bottom_rows", n, self.len()),
        }
    }

    /// Return a view of the first `n` elements, or an error if `n` is
    /// greater than the length.
    pub fn try_top_rows(&self, n: usize) -> Result<VecView<'_, A, M>, LenError> {
        error::check_sub_len(n, self.len())?;
        Ok(VecView::from_data(ViewRepr::new(&self.as_slice()[..n])))
    }

    /// Return a view of the last `n` elements, or an error if `n` is
    /// greater than the length.
    pub fn try_bottom_rows(&self, n: usize) -> Result<VecView<'_, A, M>, LenError> {
        let len = self.len();
        error::check_sub_len(n, len)?;
        Ok(VecView::from_data(ViewRepr::new(&self.as_slice()[len - n..])))
    }

    /// Call `f` by reference on each element and create a new vector
    /// with the new values.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 2., 3.];
    /// assert_eq!(a.map(|x| x * 2.), vector![2., 4., 6.]);
    /// ```
    pub fn map<'a, B, F>(&'a self, f: F) -> Vector<B>
    where
        F: FnMut(&'a A) -> B,
        A: 'a,
    {
        self.as_slice().iter().map(f).collect()
    }
}

/// # Methods For Vectors With Writable Elements
impl<A, S, M> VecBase<S, M>
where
    S: DataMut<Elem = A>,
    M: Mode,
{
    /// Return the vector's elements as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        self.data._data_slice_mut()
    }

    /// Return a mutable pointer to the first element in the vector.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut A {
        self.as_slice_mut().as_mut_ptr()
    }

    /// Return an iterator of mutable references to the elements of the vector.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A> {
        self.as_slice_mut().iter_mut()
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut A> {
        self.as_slice_mut().get_mut(index)
    }

    /// Return a read-write view of the vector, keeping its mode.
    #[inline]
    pub fn view_mut(&mut self) -> VecViewMut<'_, A, M> {
        VecViewMut::from_data(ViewRepr::new(self.as_slice_mut()))
    }

    /// Return a read-write elementwise view of the vector.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let mut a = vector![1., 2., 3.];
    /// let b = vector![2., 2., 0.5];
    /// let mut v = a.elementwise_mut();
    /// v *= &b.elementwise();
    /// assert_eq!(a, vector![2., 4., 1.5]);
    /// ```
    #[inline]
    pub fn elementwise_mut(&mut self) -> VecViewMut<'_, A, Elementwise> {
        VecViewMut::from_data(ViewRepr::new(self.as_slice_mut()))
    }

    /// Return a read-write strict (linear algebra) view of the vector.
    #[inline]
    pub fn strict_mut(&mut self) -> VecViewMut<'_, A, Strict> {
        VecViewMut::from_data(ViewRepr::new(self.as_slice_mut()))
    }

    /// Return a read-write view of the first `n` elements.
    ///
    /// **Panics** if `n` is greater than the length.
    #[track_caller]
    pub fn top_rows_mut(&mut self, n: usize) -> VecViewMut<'_, A, M> {
        let len = self.len();
        if error::check_sub_len(n, len).is_err() {
            error::sub_len_out_of_bounds("top_rows_mut", n, len);
        }
        VecViewMut::from_data(ViewRepr::new(&mut self.as_slice_mut()[..n]))
    }

    /// Return a read-write view of the last `n` elements.
    ///
    /// **Panics** if `n` is greater than the length.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let mut a = vector![1, 2, 3, 4];
    /// a.bottom_rows_mut(2).set_zero();
    /// assert_eq!(a, vector![1, 2, 0, 0]);
    /// ```
    #[track_caller]
    pub fn bottom_rows_mut(&mut self, n: usize) -> VecViewMut<'_, A, M> {
        let len = self.len();
        if error::check_sub_len(n, len).is_err() {
            error::sub_len_out_of_bounds("bottom_rows_mut", n, len);
        }
        VecViewMut::from_data(ViewRepr::new(&mut self.as_slice_mut()[len - n..]))
    }

    /// Set all elements to `value`.
    pub fn set_constant(&mut self, value: A)
    where
        A: Clone,
    {
        self.as_slice_mut().fill(value);
    }

    /// Set all elements to zero.
    pub fn set_zero(&mut self)
    where
        A: Clone + Zero,
    {
        self.set_constant(A::zero());
    }

    /// Copy the elements of `rhs` into `self`, in order.
    ///
    /// A `Vector` destination is resized to the length of `rhs` first
    /// (reallocating only if the lengths differ). A view destination never
    /// changes length.
    ///
    /// The source may have any mode.
    ///
    /// **Panics** if `self` is a view and the lengths differ.
    ///
    /// ```
    /// use linvec::{vector, Vector};
    ///
    /// let mut a = Vector::<f64>::zeros(3);
    /// let b = vector![1., 2.];
    /// a.assign(&b.view());
    /// assert_eq!(a, b);
    /// ```
    #[track_caller]
    pub fn assign<S2, M2>(&mut self, rhs: &VecBase<S2, M2>)
    where
        A: Clone,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        if self.data._assign_slice(rhs.as_slice()).is_err() {
            error::assert_same_len("assign", self.len(), rhs.len());
        }
    }

    /// Copy the elements of `rhs` into `self`, in order, or return an error
    /// if `self` is a view of a different length than `rhs`.
    ///
    /// A `Vector` destination never fails; it is resized instead.
    pub fn try_assign<S2, M2>(&mut self, rhs: &VecBase<S2, M2>) -> Result<(), LenError>
    where
        A: Clone,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        self.data._assign_slice(rhs.as_slice())
    }

    /// Modify the vector in place by calling `f` by mutable reference on
    /// each element.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut A),
    {
        self.as_slice_mut().iter_mut().for_each(f);
    }

    /// Update `self` in place, pairing each element with the corresponding
    /// element of `rhs`.
    #[track_caller]
    pub(crate) fn zip_mut_with<B, F>(&mut self, op: &str, rhs: &[B], f: F)
    where
        F: FnMut(&mut A, &B),
    {
        crate::error::assert_same_len(op, self.len(), rhs.len());
        crate::numeric_util::zip_mut_with(self.as_slice_mut(), rhs, f);
    }
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<A, S, M> Index<usize> for VecBase<S, M>
where
    S: Data<Elem = A>,
    M: Mode,
{
    type Output = A;
    #[inline]
    fn index(&self, index: usize) -> &A {
        &self.as_slice()[index]
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<A, S, M> IndexMut<usize> for VecBase<S, M>
where
    S: DataMut<Elem = A>,
    M: Mode,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A {
        &mut self.as_slice_mut()[index]
    }
}

impl<'a, S, M> IntoIterator for &'a VecBase<S, M>
where
    S: Data,
    M: Mode,
{
    type Item = &'a S::Elem;
    type IntoIter = slice::Iter<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S, M> IntoIterator for &'a mut VecBase<S, M>
where
    S: DataMut,
    M: Mode,
{
    type Item = &'a mut S::Elem;
    type IntoIter = slice::IterMut<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::imp_prelude::*;
    use crate::{vector, ErrorKind};

    #[test]
    fn sub_views_share_the_buffer() {
        let a = vector![1, 2, 3, 4, 5];
        let top = a.top_rows(2);
        let bottom = a.bottom_rows(3);
        assert_eq!(top.as_ptr(), a.as_ptr());
        assert_eq!(bottom.as_ptr(), a.as_slice()[2..].as_ptr());
    }

    #[test]
    fn try_sub_views() {
        let a = vector![1, 2, 3];
        assert_eq!(a.try_top_rows(4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(a.try_bottom_rows(4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(a.try_bottom_rows(3).unwrap(), a.view());
    }

    #[test]
    #[should_panic(expected = "top_rows")]
    fn top_rows_out_of_bounds() {
        let a = vector![1, 2, 3];
        let _ = a.top_rows(4);
    }

    #[test]
    fn try_assign_view() {
        let mut a = vector![0, 0, 0];
        let b = vector![1, 2];
        let err = a.view_mut().try_assign(&b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleLength);
        a.top_rows_mut(2).try_assign(&b).unwrap();
        assert_eq!(a, vector![1, 2, 0]);
    }

    #[test]
    fn index_and_iter() {
        let mut a = Vector::from_vec(vec![1., 2., 3.]);
        a[1] = 5.;
        assert_eq!(a[1], 5.);
        for x in &mut a {
            *x += 1.;
        }
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![2., 6., 4.]);
        assert_eq!(a.get_mut(3), None);
    }

    #[test]
    fn into_iter_by_reference() {
        fn count_positive<S, M>(v: &VecBase<S, M>) -> usize
        where
            S: Data<Elem = i32>,
            M: Mode,
        {
            let mut n = 0;
            for &x in v {
                if x > 0 {
                    n += 1;
                }
            }
            n
        }

        fn negate_all<S, M>(v: &mut VecBase<S, M>)
        where
            S: DataMut<Elem = i32>,
            M: Mode,
        {
            for x in v {
                *x = -*x;
            }
        }

        let mut a = vector![1, -2, 3, 0];
        assert_eq!(count_positive(&a), 2);
        assert_eq!(count_positive(&a.elementwise()), 2);
        negate_all(&mut a.bottom_rows_mut(2));
        assert_eq!(a, vector![1, -2, -3, 0]);
        negate_all(&mut a);
        assert_eq!(count_positive(&a.top_rows(2)), 1);
    }
}
