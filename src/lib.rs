// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "linvec"]
#![doc(html_root_url = "https://docs.rs/linvec/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
    clippy::from_iter_instead_of_collect, // using from_iter is good style
)]
#![doc(test(attr(deny(warnings))))]
#![doc(test(attr(allow(unused_variables))))]
#![doc(test(attr(allow(deprecated))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `linvec` crate provides a one-dimensional numeric container,
//! [`Vector`], together with lightweight borrowed views, [`VecView`] and
//! [`VecViewMut`], over the same contiguous element layout.
//!
//! - An owned [`Vector`] allocates and exclusively owns its buffer.
//!   Operations on it run the same code as operations on a view of it.
//! - A view borrows a contiguous buffer it does not own. It never allocates,
//!   never changes length, and cannot outlive what it borrows.
//! - Views carry a *mode* marker at the type level:
//!   + [`Strict`] views expose whole-vector linear algebra: `dot`, `+`, `-`,
//!     norms and `==` returning a single `bool`.
//!   + [`Elementwise`] views additionally expose elementwise `*` and `/`
//!     between vectors and per-element equality returning a boolean mask.
//!
//!   Switching modes is an explicit, zero-cost relabeling
//!   ([`.elementwise()`](VecBase::elementwise), [`.strict()`](VecBase::strict)).
//! - Length mismatches and out-of-range sub-vector requests are contract
//!   violations and **panic**. The `try_*` methods return a [`LenError`]
//!   instead, for input coming from untrusted sources.
//!
//! ```
//! use linvec::prelude::*;
//!
//! let a = vector![1., 2., 3.];
//! let b = vector![4., 5., 6.];
//!
//! assert_eq!(a.dot(&b), 32.);
//! assert_eq!(&a + &b, vector![5., 7., 9.]);
//!
//! // elementwise multiplication needs an elementwise view
//! let p = a.elementwise() * b.elementwise();
//! assert_eq!(p, vector![4., 10., 18.]);
//!
//! // masks and select
//! let mask = a.elem_gt(1.5);
//! assert_eq!(mask.select(&a, 0.), vector![0., 2., 3.]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `approx`: implementations of `approx`'s `AbsDiffEq`, `RelativeEq` and
//!   `UlpsEq` for strict vectors and views, and inherent `abs_diff_eq` /
//!   `relative_eq` methods that compare any modes.
//! - `serde`: serialization of vectors and views with `serde`.

#[macro_use]
mod private;

mod aliases;
pub mod config;
mod data_repr;
mod data_traits;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod impl_owned_vector;
mod impl_views;
mod linalg_traits;
mod mode;
mod numeric;
mod numeric_util;
pub mod prelude;
mod vector_approx;
#[cfg(feature = "serde")]
mod vector_serde;
mod vectorformat;

use std::marker::PhantomData;

pub use crate::aliases::*;
pub use crate::data_repr::{OwnedRepr, ViewRepr};
pub use crate::data_traits::{Data, DataMut};
pub use crate::error::{ErrorKind, LenError};
pub use crate::free_functions::*;
pub use crate::impl_ops::{BroadcastOperand, ScalarOperand};
pub use crate::linalg_traits::{LinalgScalar, MaxMin, VecFloat};
pub use crate::mode::{Elementwise, Mode, Strict};
pub use crate::vectorformat::PRINT_ELEMENTS_LIMIT;

/// A contiguous one-dimensional vector, either owned or a view.
///
/// `VecBase` is generic over the data representation `S` and the arithmetic
/// mode `M`. It is not used directly; use one of the aliases:
///
/// - [`Vector<A>`](Vector): owns its elements, always in [`Strict`] mode.
/// - [`VecView<'a, A, M>`](VecView): a read-only view.
/// - [`VecViewMut<'a, A, M>`](VecViewMut): a read-write view.
///
/// ## Ownership
///
/// The representation decides what the vector may do: every vector can be
/// read, vectors with [`DataMut`] data can be written, and only `Vector`
/// can be resized. Views are created from a vector (or from another view)
/// with [`.view()`](Self::view), [`.view_mut()`](Self::view_mut),
/// [`.top_rows()`](Self::top_rows) and friends, without copying.
///
/// ## Modes
///
/// The mode parameter decides which operators are visible. It has no runtime
/// representation at all, so relabeling a view with
/// [`.elementwise()`](Self::elementwise) or [`.strict()`](Self::strict) only
/// changes its type.
///
/// ```compile_fail
/// use linvec::vector;
///
/// let a = vector![1., 2.];
/// let b = vector![3., 4.];
/// // vector-by-vector multiplication is not a strict operation
/// let _ = &a * &b;
/// ```
///
/// ```compile_fail
/// use linvec::vector;
///
/// let a = vector![1., 2.];
/// let b = vector![3., 4.];
/// // mixing modes needs an explicit relabeling
/// let _ = &a.elementwise() + &b;
/// ```
///
/// ```compile_fail
/// use linvec::vector;
///
/// let a = vector![1., 2.];
/// let b = vector![3., 4.];
/// // a whole-vector `==` only exists in strict mode
/// let _ = a.elementwise() == b.elementwise();
/// ```
pub struct VecBase<S, M = Strict> {
    /// Data buffer / ownership information.
    data: S,
    /// Type-level mode tag; never stored.
    mode: PhantomData<M>,
}

/// An owned vector.
///
/// The vector owns its data and always has the [`Strict`] mode. Use
/// [`.elementwise()`](VecBase::elementwise) to get an elementwise view of it.
pub type Vector<A> = VecBase<OwnedRepr<A>, Strict>;

/// A read-only vector view.
///
/// A view borrows its elements, is `Copy`, and never outlives its source.
pub type VecView<'a, A, M = Strict> = VecBase<ViewRepr<&'a [A]>, M>;

/// A read-write vector view.
///
/// Assignment through a view never changes its length: the source must
/// have exactly as many elements.
pub type VecViewMut<'a, A, M = Strict> = VecBase<ViewRepr<&'a mut [A]>, M>;

impl<S, M> VecBase<S, M> {
    #[inline(always)]
    pub(crate) fn from_data(data: S) -> Self {
        VecBase {
            data,
            mode: PhantomData,
        }
    }
}

impl<S, M> Clone for VecBase<S, M>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        VecBase::from_data(self.data.clone())
    }

    /// `Vector` implements `.clone_from()` to reuse its allocation when the
    /// lengths already agree.
    fn clone_from(&mut self, other: &Self) {
        self.data.clone_from(&other.data);
    }
}

impl<S, M> Copy for VecBase<S, M> where S: Copy {}

mod imp_prelude {
    pub use crate::data_traits::{Data, DataMut};
    pub use crate::mode::{Elementwise, Mode, Strict};
    pub use crate::{OwnedRepr, VecBase, VecView, VecViewMut, Vector, ViewRepr};
}
