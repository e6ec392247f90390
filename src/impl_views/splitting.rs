// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error;
use crate::imp_prelude::*;

/// Methods for read-only vector views.
impl<'a, A, M> VecView<'a, A, M>
where
    M: Mode,
{
    /// Split the view at `index` and return one view strictly before the
    /// split and one view after the split.
    ///
    /// Both views keep the full lifetime `'a` and the mode of `self`. This
    /// is the same partition as `.top_rows(index)` followed by
    /// `.bottom_rows(len - index)`.
    ///
    /// **Panics** if `index` is greater than the length.
    ///
    /// ```text
    ///         ┌─────┬─────┬─────┬─────┐
    ///         │ a₀  │ a₁  │ a₂  │ a₃  │
    ///         └─────┴─────┴─────┴─────┘
    ///         0     1     2     3     4 ← possible split_at indices.
    /// ```
    ///
    /// Note that we split “before” an element index, and that both 0 and
    /// the endpoint are valid split indices.
    ///
    /// ```
    /// use linvec::{aview, vector};
    ///
    /// let a = aview(&[0, 1, 2, 3]);
    /// let (v1, v2) = a.split_at(1);
    /// assert_eq!(v1, vector![0]);
    /// assert_eq!(v2, vector![1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn split_at(self, index: usize) -> (Self, Self) {
        let len = self.len();
        if error::check_sub_len(index, len).is_err() {
            error::sub_len_out_of_bounds("split_at", index, len);
        }
        let (left, right) = self.into_slice().split_at(index);
        (VecView::from_slice(left), VecView::from_slice(right))
    }
}

/// Methods for read-write vector views.
impl<'a, A, M> VecViewMut<'a, A, M>
where
    M: Mode,
{
    /// Split the view at `index` and return one read-write view strictly
    /// before the split and one after the split.
    ///
    /// The two views do not overlap, so both may be written at the same
    /// time.
    ///
    /// **Panics** if `index` is greater than the length.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let mut a = vector![1., 2., 3., 4.];
    /// let (mut x, mut y) = a.view_mut().split_at(2);
    /// x += &y.view();
    /// y.set_zero();
    /// assert_eq!(a, vector![4., 6., 0., 0.]);
    /// ```
    #[track_caller]
    pub fn split_at(self, index: usize) -> (Self, Self) {
        let len = self.len();
        if error::check_sub_len(index, len).is_err() {
            error::sub_len_out_of_bounds("split_at", index, len);
        }
        let (left, right) = self.into_slice().split_at_mut(index);
        (VecViewMut::from_slice_mut(left), VecViewMut::from_slice_mut(right))
    }
}

#[cfg(test)]
mod tests {
    use crate::{aview, vector, Vector};

    #[test]
    fn split_endpoints() {
        let a = vector![1, 2, 3];
        let (l, r) = a.view().split_at(0);
        assert!(l.is_empty());
        assert_eq!(r, a);
        let (l, r) = a.view().split_at(3);
        assert_eq!(l, a);
        assert!(r.is_empty());
    }

    #[test]
    #[should_panic(expected = "split_at")]
    fn split_out_of_bounds() {
        let _ = aview(&[1, 2]).split_at(3);
    }

    #[test]
    fn split_mut_disjoint() {
        let mut a = Vector::from_fn(5, |i| i as i32);
        {
            let (mut l, mut r) = a.view_mut().split_at(2);
            l.set_constant(-1);
            r[0] = 10;
        }
        assert_eq!(a, vector![-1, -1, 10, 3, 4]);
    }
}
