// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Owned vector representation.
///
/// *Don’t use this type directly—use the type alias
/// [`Vector`](crate::Vector) for the owned vector type!*
// Exactly `len` elements, no spare capacity.
#[derive(Debug)]
pub struct OwnedRepr<A>(Box<[A]>);

impl<A> OwnedRepr<A> {
    pub(crate) fn from(v: Vec<A>) -> Self {
        OwnedRepr(v.into_boxed_slice())
    }

    pub(crate) fn into_vec(self) -> Vec<A> {
        self.0.into_vec()
    }

    pub(crate) fn as_slice(&self) -> &[A] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [A] {
        &mut self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Replace the buffer with a fresh allocation of `len` default elements.
    pub(crate) fn reallocate(&mut self, len: usize)
    where
        A: Clone + Default,
    {
        self.0 = vec![A::default(); len].into_boxed_slice();
    }
}

impl<A> Clone for OwnedRepr<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        OwnedRepr(self.0.clone())
    }

    fn clone_from(&mut self, other: &Self) {
        if self.len() == other.len() {
            self.0.clone_from_slice(&other.0);
        } else {
            self.0 = other.0.clone();
        }
    }
}

impl<A> Default for OwnedRepr<A> {
    fn default() -> Self {
        OwnedRepr(Box::default())
    }
}

/// Vector view representation.
///
/// *Don’t use this type directly—use the type aliases
/// [`VecView`](crate::VecView) / [`VecViewMut`](crate::VecViewMut) for the
/// vector view types!*
///
/// `A` is `&'a [T]` for read-only views and `&'a mut [T]` for read-write
/// views.
#[derive(Copy, Clone, Debug)]
pub struct ViewRepr<A> {
    slice: A,
}

impl<A> ViewRepr<A> {
    #[inline(always)]
    pub(crate) fn new(slice: A) -> Self {
        ViewRepr { slice }
    }

    #[inline(always)]
    pub(crate) fn into_inner(self) -> A {
        self.slice
    }
}

impl<'a, A> ViewRepr<&'a [A]> {
    #[inline(always)]
    pub(crate) fn slice(&self) -> &'a [A] {
        self.slice
    }
}

impl<'a, A> ViewRepr<&'a mut [A]> {
    #[inline(always)]
    pub(crate) fn slice(&self) -> &[A] {
        self.slice
    }

    #[inline(always)]
    pub(crate) fn slice_mut(&mut self) -> &mut [A] {
        self.slice
    }
}
