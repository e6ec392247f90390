// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_complex::Complex;

use crate::error;
use crate::imp_prelude::*;
use crate::numeric_util;

/// Elements that can be used as direct operands in arithmetic with vectors.
///
/// For example, `f64` is a `ScalarOperand` which means that for a vector `a`,
/// arithmetic like `&a * 2.0`, and, `a / 2.`, and `a *= 3.` are allowed in
/// every mode.
///
/// In the description below, let `A` be a vector or vector view,
/// let `B` be an owned vector,
/// and let `C` be a vector with mutable data.
///
/// `ScalarOperand` determines for which scalars `K` operations `&A @ K`, and `B @ K`,
/// and `C @= K` are defined, as ***right hand side operands***, for `*` and
/// `/` (denoted `@`).
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same numeric types, allowing `K * &A` and `K * B`.
///
/// This trait ***does not*** limit which elements can be stored in a vector in general.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

/// Right hand side of a comparison or of `select`: either a vector of the
/// same length, or a scalar that is broadcast to every position.
///
/// Implemented for references to vectors and views, for read-only views by
/// value, and for every [`ScalarOperand`].
///
/// ***Note:*** `BroadcastOperand` is not an extension interface.
pub trait BroadcastOperand<A> {
    #[doc(hidden)]
    fn _operand(&self) -> Operand<'_, A>;

    private_decl! {}
}

#[doc(hidden)]
pub enum Operand<'a, A> {
    Vector(&'a [A]),
    Scalar(&'a A),
}

impl<A> BroadcastOperand<A> for A
where
    A: ScalarOperand,
{
    fn _operand(&self) -> Operand<'_, A> {
        Operand::Scalar(self)
    }

    private_impl! {}
}

impl<'a, A, S, M> BroadcastOperand<A> for &'a VecBase<S, M>
where
    S: Data<Elem = A>,
    M: Mode,
{
    fn _operand(&self) -> Operand<'_, A> {
        Operand::Vector(self.as_slice())
    }

    private_impl! {}
}

impl<'a, A, M> BroadcastOperand<A> for VecView<'a, A, M>
where
    M: Mode,
{
    fn _operand(&self) -> Operand<'_, A> {
        Operand::Vector(self.as_slice())
    }

    private_impl! {}
}

/// Apply `f` to each element of `lhs` and the matching element of `rhs`
/// (or the scalar `rhs`), collecting the results.
#[track_caller]
pub(crate) fn zip_broadcast<A, B, C, O, F>(op: &str, lhs: &[A], rhs: &O, mut f: F) -> Vector<C>
where
    O: BroadcastOperand<B>,
    F: FnMut(&A, &B) -> C,
{
    match rhs._operand() {
        Operand::Vector(ys) => {
            error::assert_same_len(op, lhs.len(), ys.len());
            Vector::from_vec(numeric_util::zip_map(lhs, ys, f))
        }
        Operand::Scalar(y) => lhs.iter().map(|x| f(x, y)).collect(),
    }
}

/// Vector-by-vector operators. The mode argument is either `M`, for an
/// operator available in every mode, or `Elementwise`.
macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr, <$($m:ident)?>, $mode:ty) => (
/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `Vector`.
///
/// Both operands must have the same mode.
///
/// **Panics** if the lengths are not equal.
impl<'a, 'b, A, S, S2 $(, $m)?> $trt<&'b VecBase<S2, $mode>> for &'a VecBase<S, $mode>
where
    A: Clone + $trt<A, Output=A>,
    S: Data<Elem=A>,
    S2: Data<Elem=A>,
    $($m: Mode,)?
{
    type Output = Vector<A>;
    #[track_caller]
    fn $mth(self, rhs: &'b VecBase<S2, $mode>) -> Vector<A> {
        error::assert_same_len(stringify!($operator), self.len(), rhs.len());
        Vector::from_vec(numeric_util::zip_map(self.as_slice(), rhs.as_slice(),
                                               |x, y| x.clone() $operator y.clone()))
    }
}

/// Perform elementwise
#[doc=$doc]
/// between views `self` and `rhs`,
/// and return the result as a new `Vector`.
///
/// **Panics** if the lengths are not equal.
impl<'a, 'b, A $(, $m)?> $trt<VecView<'b, A, $mode>> for VecView<'a, A, $mode>
where
    A: Clone + $trt<A, Output=A>,
    $($m: Mode,)?
{
    type Output = Vector<A>;
    #[track_caller]
    fn $mth(self, rhs: VecView<'b, A, $mode>) -> Vector<A> {
        &self $operator &rhs
    }
}
    );
);

/// Operators consuming an owned vector, which is always strict.
macro_rules! impl_owned_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result.
///
/// The result reuses the buffer of `self`.
///
/// **Panics** if the lengths are not equal.
impl<'a, A, S2> $trt<&'a VecBase<S2, Strict>> for Vector<A>
where
    A: Clone + $trt<A, Output=A>,
    S2: Data<Elem=A>,
{
    type Output = Vector<A>;
    #[track_caller]
    fn $mth(mut self, rhs: &'a VecBase<S2, Strict>) -> Vector<A> {
        self.zip_mut_with(stringify!($operator), rhs.as_slice(), |x, y| {
            *x = x.clone() $operator y.clone();
        });
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result.
///
/// **Panics** if the lengths are not equal.
impl<A> $trt<Vector<A>> for Vector<A>
where
    A: Clone + $trt<A, Output=A>,
{
    type Output = Vector<A>;
    #[track_caller]
    fn $mth(self, rhs: Vector<A>) -> Vector<A> {
        self $operator &rhs
    }
}
    );
);

/// Scalar operators, available in every mode.
macro_rules! impl_scalar_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between reference `self` and the scalar `x`,
/// and return the result as a new `Vector`.
impl<'a, A, S, M, B> $trt<B> for &'a VecBase<S, M>
where
    A: Clone + $trt<B, Output=A>,
    S: Data<Elem=A>,
    M: Mode,
    B: ScalarOperand,
{
    type Output = Vector<A>;
    fn $mth(self, x: B) -> Vector<A> {
        self.map(move |elt| elt.clone() $operator x.clone())
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result (based on `self`).
impl<A, B> $trt<B> for Vector<A>
where
    A: Clone + $trt<B, Output=A>,
    B: ScalarOperand,
{
    type Output = Vector<A>;
    fn $mth(mut self, x: B) -> Vector<A> {
        self.map_inplace(move |elt| {
            *elt = elt.clone() $operator x.clone();
        });
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the view `self` and the scalar `x`,
/// and return the result as a new `Vector`.
impl<'a, A, M, B> $trt<B> for VecView<'a, A, M>
where
    A: Clone + $trt<B, Output=A>,
    M: Mode,
    B: ScalarOperand,
{
    type Output = Vector<A>;
    fn $mth(self, x: B) -> Vector<A> {
        &self $operator x
    }
}
    );
);

mod arithmetic_ops {
    use super::*;

    use std::ops::*;

    impl_binary_op!(Add, +, add, "addition", <M>, M);
    impl_binary_op!(Sub, -, sub, "subtraction", <M>, M);
    impl_binary_op!(Mul, *, mul, "multiplication", <>, Elementwise);
    impl_binary_op!(Div, /, div, "division", <>, Elementwise);

    impl_owned_binary_op!(Add, +, add, "addition");
    impl_owned_binary_op!(Sub, -, sub, "subtraction");

    impl_scalar_op!(Mul, *, mul, "multiplication");
    impl_scalar_op!(Div, /, div, "division");

    // Scalar on the left: `K * v` computes `v * K`.
    macro_rules! impl_scalar_lhs_op {
        ($($scalar:ty),*) => {$(
            impl<'a, S, M> Mul<&'a VecBase<S, M>> for $scalar
            where
                S: Data<Elem = $scalar>,
                M: Mode,
            {
                type Output = Vector<$scalar>;
                fn mul(self, rhs: &'a VecBase<S, M>) -> Vector<$scalar> {
                    rhs * self
                }
            }

            impl Mul<Vector<$scalar>> for $scalar {
                type Output = Vector<$scalar>;
                fn mul(self, rhs: Vector<$scalar>) -> Vector<$scalar> {
                    rhs * self
                }
            }

            impl<'a, M> Mul<VecView<'a, $scalar, M>> for $scalar
            where
                M: Mode,
            {
                type Output = Vector<$scalar>;
                fn mul(self, rhs: VecView<'a, $scalar, M>) -> Vector<$scalar> {
                    rhs * self
                }
            }
        )*};
    }

    impl_scalar_lhs_op!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
    impl_scalar_lhs_op!(f32, f64, Complex<f32>, Complex<f64>);

    /// Negate each element and return the result as a new `Vector`.
    impl<'a, A, S, M> Neg for &'a VecBase<S, M>
    where
        A: Clone + Neg<Output = A>,
        S: Data<Elem = A>,
        M: Mode,
    {
        type Output = Vector<A>;
        fn neg(self) -> Vector<A> {
            self.map(|elt| -elt.clone())
        }
    }

    /// Negate each element in place and return the result.
    impl<A> Neg for Vector<A>
    where
        A: Clone + Neg<Output = A>,
    {
        type Output = Self;
        fn neg(mut self) -> Self {
            self.map_inplace(|elt| {
                *elt = -elt.clone();
            });
            self
        }
    }

    /// Negate each element and return the result as a new `Vector`.
    impl<'a, A, M> Neg for VecView<'a, A, M>
    where
        A: Clone + Neg<Output = A>,
        M: Mode,
    {
        type Output = Vector<A>;
        fn neg(self) -> Vector<A> {
            -&self
        }
    }
}

mod assign_ops {
    use super::*;

    use std::ops::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $operator:tt, $doc:expr, <$($m:ident)?>, $mode:ty) => {
    #[doc=$doc]
    /// If their lengths disagree, this is a contract violation.
    ///
    /// **Panics** if the lengths are not equal.
    impl<'a, A, S, S2 $(, $m)?> $trt<&'a VecBase<S2, $mode>> for VecBase<S, $mode>
    where
        A: Clone + $trt<A>,
        S: DataMut<Elem = A>,
        S2: Data<Elem = A>,
        $($m: Mode,)?
    {
        #[track_caller]
        fn $method(&mut self, rhs: &VecBase<S2, $mode>) {
            self.zip_mut_with(stringify!($operator), rhs.as_slice(), |x, y| {
                x.$method(y.clone());
            });
        }
    }

    #[doc=$doc]
    /// **Panics** if the lengths are not equal.
    impl<'a, A, S $(, $m)?> $trt<VecView<'a, A, $mode>> for VecBase<S, $mode>
    where
        A: Clone + $trt<A>,
        S: DataMut<Elem = A>,
        $($m: Mode,)?
    {
        #[track_caller]
        fn $method(&mut self, rhs: VecView<'a, A, $mode>) {
            *self $operator &rhs;
        }
    }
        };
    }

    macro_rules! impl_scalar_assign_op {
        ($trt:ident, $method:ident, $doc:expr) => {
    #[doc=$doc]
    impl<A, S, M, B> $trt<B> for VecBase<S, M>
    where
        A: $trt<B>,
        S: DataMut<Elem = A>,
        M: Mode,
        B: ScalarOperand,
    {
        fn $method(&mut self, rhs: B) {
            self.map_inplace(move |elt| {
                elt.$method(rhs.clone());
            });
        }
    }
        };
    }

    impl_assign_op!(AddAssign, add_assign, +=,
                    "Perform `self += rhs` as elementwise addition (in place).\n", <M>, M);
    impl_assign_op!(SubAssign, sub_assign, -=,
                    "Perform `self -= rhs` as elementwise subtraction (in place).\n", <M>, M);
    impl_assign_op!(MulAssign, mul_assign, *=,
                    "Perform `self *= rhs` as elementwise multiplication (in place).\n", <>, Elementwise);
    impl_assign_op!(DivAssign, div_assign, /=,
                    "Perform `self /= rhs` as elementwise division (in place).\n", <>, Elementwise);

    impl_scalar_assign_op!(MulAssign, mul_assign,
                           "Perform `self *= rhs` for a scalar `rhs` (in place).");
    impl_scalar_assign_op!(DivAssign, div_assign,
                           "Perform `self /= rhs` for a scalar `rhs` (in place).");
}

mod comparison_ops {
    use super::*;

    /// Return `true` if every element of `self` equals the matching element
    /// of `rhs`.
    ///
    /// Only strict vectors compare as a whole; elementwise views use
    /// [`.elem_eq()`](VecBase::elem_eq) instead.
    ///
    /// **Panics** if the lengths are not equal.
    impl<A, B, S, S2> PartialEq<VecBase<S2, Strict>> for VecBase<S, Strict>
    where
        A: PartialEq<B>,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
    {
        #[track_caller]
        fn eq(&self, rhs: &VecBase<S2, Strict>) -> bool {
            error::assert_same_len("==", self.len(), rhs.len());
            numeric_util::all_eq(self.as_slice(), rhs.as_slice())
        }
    }

    /// Return `true` if every element of `self` equals the matching element
    /// of `rhs`.
    ///
    /// **Panics** if the lengths are not equal.
    #[allow(clippy::unconditional_recursion)] // false positive
    impl<'a, A, B, S, S2> PartialEq<&'a VecBase<S2, Strict>> for VecBase<S, Strict>
    where
        A: PartialEq<B>,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
    {
        #[track_caller]
        fn eq(&self, rhs: &&VecBase<S2, Strict>) -> bool {
            *self == **rhs
        }
    }

    /// Return `true` if every element of `self` equals the matching element
    /// of `rhs`.
    ///
    /// **Panics** if the lengths are not equal.
    #[allow(clippy::unconditional_recursion)] // false positive
    impl<'a, A, B, S, S2> PartialEq<VecBase<S2, Strict>> for &'a VecBase<S, Strict>
    where
        A: PartialEq<B>,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
    {
        #[track_caller]
        fn eq(&self, rhs: &VecBase<S2, Strict>) -> bool {
            **self == *rhs
        }
    }

    impl<S> Eq for VecBase<S, Strict>
    where
        S: Data,
        S::Elem: Eq,
    {
    }
}
