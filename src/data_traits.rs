// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The data (inner representation) traits for linvec

use crate::error::{self, ErrorKind, LenError};
use crate::{OwnedRepr, ViewRepr};

/// Vector representation trait.
///
/// For a vector whose elements can be read.
///
/// ***Note:*** `Data` is not an extension interface at this point.
/// Traits in Rust can serve many different roles. This trait is public because
/// it is used as a bound on public methods.
pub trait Data: Sized {
    /// The vector element type.
    type Elem;

    #[doc(hidden)]
    fn _data_slice(&self) -> &[Self::Elem];

    private_decl! {}
}

/// Vector representation trait.
///
/// For a vector with writable elements.
///
/// ***Internal trait, see `Data`.***
pub trait DataMut: Data {
    #[doc(hidden)]
    fn _data_slice_mut(&mut self) -> &mut [Self::Elem];

    /// Copy `src` into the representation.
    ///
    /// Views require `src` to have exactly their length; an owned
    /// representation reallocates to the length of `src` instead.
    #[doc(hidden)]
    fn _assign_slice(&mut self, src: &[Self::Elem]) -> Result<(), LenError>
    where
        Self::Elem: Clone,
    {
        let dst = self._data_slice_mut();
        if dst.len() != src.len() {
            return Err(error::from_kind(ErrorKind::IncompatibleLength));
        }
        dst.clone_from_slice(src);
        Ok(())
    }
}

impl<A> Data for OwnedRepr<A> {
    type Elem = A;

    #[inline]
    fn _data_slice(&self) -> &[A] {
        self.as_slice()
    }

    private_impl! {}
}

impl<A> DataMut for OwnedRepr<A> {
    #[inline]
    fn _data_slice_mut(&mut self) -> &mut [A] {
        self.as_mut_slice()
    }

    fn _assign_slice(&mut self, src: &[A]) -> Result<(), LenError>
    where
        A: Clone,
    {
        if self.len() == src.len() {
            self.as_mut_slice().clone_from_slice(src);
        } else {
            *self = OwnedRepr::from(src.to_vec());
        }
        Ok(())
    }
}

impl<'a, A> Data for ViewRepr<&'a [A]> {
    type Elem = A;

    #[inline]
    fn _data_slice(&self) -> &[A] {
        self.slice()
    }

    private_impl! {}
}

impl<'a, A> Data for ViewRepr<&'a mut [A]> {
    type Elem = A;

    #[inline]
    fn _data_slice(&self) -> &[A] {
        self.slice()
    }

    private_impl! {}
}

impl<'a, A> DataMut for ViewRepr<&'a mut [A]> {
    #[inline]
    fn _data_slice_mut(&mut self) -> &mut [A] {
        self.slice_mut()
    }
}
