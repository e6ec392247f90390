// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Add, Div, Mul};

use num_traits::{Float, Signed, Zero};

use crate::error;
use crate::imp_prelude::*;
use crate::impl_ops::{zip_broadcast, BroadcastOperand};
use crate::numeric_util;
use crate::{LinalgScalar, MaxMin, VecFloat};

/// # Numerical Methods For All Vectors
///
/// These methods exist in every mode. Binary methods accept a right hand
/// side of any mode, since the method name already says what is computed.
impl<A, S, M> VecBase<S, M>
where
    S: Data<Elem = A>,
    M: Mode,
{
    /// Perform the dot product of `self` and `rhs`.
    ///
    /// The products are accumulated from the first element to the last.
    ///
    /// **Panics** if the lengths are not equal.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 2., 3.];
    /// let b = vector![4., 5., 6.];
    /// assert_eq!(a.dot(&b), 32.);
    /// assert_eq!(a.top_rows(2).dot(&b.bottom_rows(2)), 17.);
    /// ```
    #[track_caller]
    pub fn dot<S2, M2>(&self, rhs: &VecBase<S2, M2>) -> A
    where
        A: LinalgScalar,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        error::assert_same_len("dot", self.len(), rhs.len());
        numeric_util::dot(self.as_slice(), rhs.as_slice())
    }

    /// Return the squared euclidean norm, `self.dot(self)`.
    pub fn squared_norm(&self) -> A
    where
        A: LinalgScalar,
    {
        numeric_util::dot(self.as_slice(), self.as_slice())
    }

    /// Return the euclidean norm.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let v = vector![3., 4.];
    /// assert_eq!(v.norm(), 5.);
    /// assert_eq!(v.squared_norm(), 25.);
    /// ```
    pub fn norm(&self) -> A
    where
        A: VecFloat,
    {
        self.squared_norm().sqrt()
    }

    /// Return `true` if no element is NaN or infinite.
    ///
    /// An empty vector is finite.
    pub fn all_finite(&self) -> bool
    where
        A: Float,
    {
        self.iter().all(|x| x.is_finite())
    }

    /// Return the maximum absolute value of the elements, or zero for an
    /// empty vector.
    ///
    /// NaN elements are skipped, see [`MaxMin`]; use
    /// [`.all_finite()`](Self::all_finite) to detect them.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// assert_eq!(vector![1., -7., 3.].norm_inf(), 7.);
    /// assert_eq!(vector![-2, 1].norm_inf(), 2);
    /// ```
    pub fn norm_inf(&self) -> A
    where
        A: LinalgScalar + Signed + MaxMin,
    {
        self.iter().fold(A::zero(), |acc, x| acc.max_elem(x.abs()))
    }

    /// Return the sum of the absolute values of the elements.
    pub fn norm_1(&self) -> A
    where
        A: Signed,
    {
        self.iter().fold(A::zero(), |acc, x| acc + x.abs())
    }

    /// Return the sum of all elements, accumulated from first to last.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// assert_eq!(vector![1, 2, 3].sum(), 6);
    /// ```
    pub fn sum(&self) -> A
    where
        A: Clone + Add<Output = A> + Zero,
    {
        self.iter().fold(A::zero(), |acc, x| acc + x.clone())
    }

    /// Return the elementwise product of `self` and `rhs`.
    ///
    /// **Panics** if the lengths are not equal.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 2., 3.];
    /// let b = vector![2., 0.5, -1.];
    /// assert_eq!(a.cwise_product(&b), vector![2., 1., -3.]);
    /// ```
    #[track_caller]
    pub fn cwise_product<S2, M2>(&self, rhs: &VecBase<S2, M2>) -> Vector<A>
    where
        A: Clone + Mul<Output = A>,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        self.zip_with("cwise_product", rhs, |x, y| x.clone() * y.clone())
    }

    /// Return the elementwise quotient of `self` and `rhs`.
    ///
    /// **Panics** if the lengths are not equal.
    #[track_caller]
    pub fn cwise_quotient<S2, M2>(&self, rhs: &VecBase<S2, M2>) -> Vector<A>
    where
        A: Clone + Div<Output = A>,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        self.zip_with("cwise_quotient", rhs, |x, y| x.clone() / y.clone())
    }

    /// Return the elementwise maximum of `self` and `rhs`.
    ///
    /// **Panics** if the lengths are not equal.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 5., f64::NAN];
    /// let b = vector![4., 2., 0.];
    /// assert_eq!(a.cwise_max(&b), vector![4., 5., 0.]);
    /// ```
    #[track_caller]
    pub fn cwise_max<S2, M2>(&self, rhs: &VecBase<S2, M2>) -> Vector<A>
    where
        A: Clone + MaxMin,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        self.zip_with("cwise_max", rhs, |x, y| x.clone().max_elem(y.clone()))
    }

    /// Return the elementwise minimum of `self` and `rhs`.
    ///
    /// **Panics** if the lengths are not equal.
    #[track_caller]
    pub fn cwise_min<S2, M2>(&self, rhs: &VecBase<S2, M2>) -> Vector<A>
    where
        A: Clone + MaxMin,
        S2: Data<Elem = A>,
        M2: Mode,
    {
        self.zip_with("cwise_min", rhs, |x, y| x.clone().min_elem(y.clone()))
    }

    /// Return the elementwise maximum of `self` and the scalar `x`.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// assert_eq!(vector![-1, 3].cwise_max_scalar(0), vector![0, 3]);
    /// ```
    pub fn cwise_max_scalar(&self, x: A) -> Vector<A>
    where
        A: Clone + MaxMin,
    {
        self.map(|y| y.clone().max_elem(x.clone()))
    }

    /// Return the elementwise minimum of `self` and the scalar `x`.
    pub fn cwise_min_scalar(&self, x: A) -> Vector<A>
    where
        A: Clone + MaxMin,
    {
        self.map(|y| y.clone().min_elem(x.clone()))
    }

    /// Return the elementwise absolute value.
    pub fn cwise_abs(&self) -> Vector<A>
    where
        A: Signed,
    {
        self.map(|x| x.abs())
    }

    /// Elementwise `self < rhs`, where `rhs` is a vector of the same length
    /// or a scalar.
    ///
    /// **Panics** if `rhs` is a vector of a different length.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1, 5, 3];
    /// assert_eq!(a.elem_lt(3), vector![true, false, false]);
    /// assert_eq!(a.elem_lt(&vector![2, 2, 4]), vector![true, false, true]);
    /// ```
    #[track_caller]
    pub fn elem_lt<O>(&self, rhs: O) -> Vector<bool>
    where
        A: PartialOrd,
        O: BroadcastOperand<A>,
    {
        zip_broadcast("elem_lt", self.as_slice(), &rhs, |x, y| x < y)
    }

    /// Elementwise `self <= rhs`, where `rhs` is a vector of the same length
    /// or a scalar.
    ///
    /// **Panics** if `rhs` is a vector of a different length.
    #[track_caller]
    pub fn elem_le<O>(&self, rhs: O) -> Vector<bool>
    where
        A: PartialOrd,
        O: BroadcastOperand<A>,
    {
        zip_broadcast("elem_le", self.as_slice(), &rhs, |x, y| x <= y)
    }

    /// Elementwise `self > rhs`, where `rhs` is a vector of the same length
    /// or a scalar.
    ///
    /// **Panics** if `rhs` is a vector of a different length.
    #[track_caller]
    pub fn elem_gt<O>(&self, rhs: O) -> Vector<bool>
    where
        A: PartialOrd,
        O: BroadcastOperand<A>,
    {
        zip_broadcast("elem_gt", self.as_slice(), &rhs, |x, y| x > y)
    }

    /// Elementwise `self >= rhs`, where `rhs` is a vector of the same length
    /// or a scalar.
    ///
    /// **Panics** if `rhs` is a vector of a different length.
    #[track_caller]
    pub fn elem_ge<O>(&self, rhs: O) -> Vector<bool>
    where
        A: PartialOrd,
        O: BroadcastOperand<A>,
    {
        zip_broadcast("elem_ge", self.as_slice(), &rhs, |x, y| x >= y)
    }

    #[track_caller]
    fn zip_with<S2, M2, F>(&self, op: &str, rhs: &VecBase<S2, M2>, f: F) -> Vector<A>
    where
        S2: Data<Elem = A>,
        M2: Mode,
        F: FnMut(&A, &A) -> A,
    {
        error::assert_same_len(op, self.len(), rhs.len());
        Vector::from_vec(numeric_util::zip_map(self.as_slice(), rhs.as_slice(), f))
    }
}

/// # Elementwise Equality
///
/// Only elementwise vectors compare per element; strict vectors implement
/// `PartialEq` instead.
impl<A, S> VecBase<S, Elementwise>
where
    S: Data<Elem = A>,
{
    /// Elementwise `self == rhs`, where `rhs` is a vector of the same length
    /// or a scalar.
    ///
    /// **Panics** if `rhs` is a vector of a different length.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let a = vector![1., 2., 3.];
    /// let b = vector![1., 0., 3.];
    /// assert_eq!(a.elementwise().elem_eq(&b), vector![true, false, true]);
    /// assert_eq!(a.elementwise().elem_ne(2.), vector![true, false, true]);
    /// ```
    #[track_caller]
    pub fn elem_eq<O>(&self, rhs: O) -> Vector<bool>
    where
        A: PartialEq,
        O: BroadcastOperand<A>,
    {
        zip_broadcast("elem_eq", self.as_slice(), &rhs, |x, y| x == y)
    }

    /// Elementwise `self != rhs`, where `rhs` is a vector of the same length
    /// or a scalar.
    ///
    /// **Panics** if `rhs` is a vector of a different length.
    #[track_caller]
    pub fn elem_ne<O>(&self, rhs: O) -> Vector<bool>
    where
        A: PartialEq,
        O: BroadcastOperand<A>,
    {
        zip_broadcast("elem_ne", self.as_slice(), &rhs, |x, y| x != y)
    }
}
