// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::Signed;

use crate::imp_prelude::*;
use crate::{BroadcastOperand, LinalgScalar, MaxMin};

/// Create a [**`Vector`**](type.Vector.html) with the given elements.
///
/// ```
/// use linvec::vector;
///
/// let a = vector![1., 2., 3., 4.];
/// assert_eq!(a.len(), 4);
///
/// let empty = vector![0u8; 0];
/// assert!(empty.is_empty());
/// ```
///
/// This macro uses `vec![]`, and has the same ownership semantics;
/// elements are moved into the resulting `Vector`.
#[macro_export]
macro_rules! vector {
    ($elem:expr; $n:expr) => {{
        $crate::Vector::from_vec(vec![$elem; $n])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::Vector::from_vec(vec![$($x,)*])
    }};
}

/// Create a read-only vector view borrowing `xs`.
///
/// ```
/// use linvec::aview;
///
/// let data = [3., 4.];
/// assert_eq!(aview(&data).norm(), 5.);
/// ```
pub fn aview<A>(xs: &[A]) -> VecView<'_, A> {
    VecView::from_slice(xs)
}

/// Create a read-write vector view borrowing `xs`.
///
/// ```
/// use linvec::aview_mut;
///
/// let mut data = [0; 4];
/// aview_mut(&mut data).bottom_rows_mut(2).set_constant(5);
/// assert_eq!(data, [0, 0, 5, 5]);
/// ```
pub fn aview_mut<A>(xs: &mut [A]) -> VecViewMut<'_, A> {
    VecViewMut::from_slice_mut(xs)
}

/// Return the dot product of `a` and `b`, in any modes.
///
/// **Panics** if the lengths are not equal.
#[track_caller]
pub fn dot<A, S, S2, M, M2>(a: &VecBase<S, M>, b: &VecBase<S2, M2>) -> A
where
    A: LinalgScalar,
    S: Data<Elem = A>,
    S2: Data<Elem = A>,
    M: Mode,
    M2: Mode,
{
    a.dot(b)
}

/// Return the maximum absolute value of the elements of `v`, or zero if
/// `v` is empty.
pub fn norm_inf<A, S, M>(v: &VecBase<S, M>) -> A
where
    A: LinalgScalar + Signed + MaxMin,
    S: Data<Elem = A>,
    M: Mode,
{
    v.norm_inf()
}

/// Return the sum of the absolute values of the elements of `v`.
pub fn norm_1<A, S, M>(v: &VecBase<S, M>) -> A
where
    A: Signed,
    S: Data<Elem = A>,
    M: Mode,
{
    v.norm_1()
}

/// Pick `then[i]` where `mask[i]` is `true` and `otherwise[i]` (or the
/// scalar `otherwise`) elsewhere.
///
/// **Panics** if the operand lengths differ from the mask length.
///
/// ```
/// use linvec::{select, vector};
///
/// let x = vector![-1., 2., -3.];
/// let clipped = select(&x.elem_gt(0.), &x, 0.);
/// assert_eq!(clipped, vector![0., 2., 0.]);
/// ```
#[track_caller]
pub fn select<U, S, S2, M, M2, O>(mask: &VecBase<S, M>, then: &VecBase<S2, M2>, otherwise: O) -> Vector<U>
where
    U: Clone,
    S: Data<Elem = bool>,
    S2: Data<Elem = U>,
    M: Mode,
    M2: Mode,
    O: BroadcastOperand<U>,
{
    mask.select(then, otherwise)
}
