// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::imp_prelude::*;

/// Methods for read-only vector views.
impl<'a, A, M> VecView<'a, A, M>
where
    M: Mode,
{
    /// Convert the view into a `VecView<'b, A, M>` where `'b` is a lifetime
    /// outlived by `'a'`.
    pub fn reborrow<'b>(self) -> VecView<'b, A, M>
    where
        'a: 'b,
    {
        VecBase::from_data(ViewRepr::new(self.into_slice()))
    }

    /// Return the view's data as a slice.
    ///
    /// Note that while the method is similar to [`VecBase::as_slice()`], this
    /// method transfers the view's lifetime to the slice.
    pub fn into_slice(self) -> &'a [A] {
        self.data.into_inner()
    }

    /// Relabel the view as elementwise; no data is touched.
    pub fn into_elementwise(self) -> VecView<'a, A, Elementwise> {
        VecBase::from_data(self.data)
    }

    /// Relabel the view as strict; no data is touched.
    pub fn into_strict(self) -> VecView<'a, A, Strict> {
        VecBase::from_data(self.data)
    }
}

/// Methods for read-write vector views.
impl<'a, A, M> VecViewMut<'a, A, M>
where
    M: Mode,
{
    /// Convert the view into a `VecViewMut<'b, A, M>` where `'b` is a
    /// lifetime outlived by `'a'`.
    pub fn reborrow<'b>(self) -> VecViewMut<'b, A, M>
    where
        'a: 'b,
    {
        VecBase::from_data(ViewRepr::new(self.into_slice()))
    }

    /// Return the view's data as a mutable slice, with the view's lifetime.
    pub fn into_slice(self) -> &'a mut [A] {
        self.data.into_inner()
    }

    /// Convert into a read-only view with the same lifetime and mode.
    ///
    /// The reverse conversion does not exist.
    pub fn into_view(self) -> VecView<'a, A, M> {
        let slice: &'a [A] = self.into_slice();
        VecBase::from_data(ViewRepr::new(slice))
    }

    /// Relabel the view as elementwise; no data is touched.
    pub fn into_elementwise(self) -> VecViewMut<'a, A, Elementwise> {
        VecBase::from_data(self.data)
    }

    /// Relabel the view as strict; no data is touched.
    pub fn into_strict(self) -> VecViewMut<'a, A, Strict> {
        VecBase::from_data(self.data)
    }
}

/// Implementation of `VecView::from(&S)` where `S` is a slice, an array or
/// a `Vec`.
impl<'a, A, M, Slice: ?Sized> From<&'a Slice> for VecView<'a, A, M>
where
    Slice: AsRef<[A]>,
    M: Mode,
{
    fn from(slice: &'a Slice) -> Self {
        VecView::from_slice(slice.as_ref())
    }
}

/// Implementation of `VecViewMut::from(&mut S)` where `S` is a slice.
impl<'a, A, M, Slice: ?Sized> From<&'a mut Slice> for VecViewMut<'a, A, M>
where
    Slice: AsMut<[A]>,
    M: Mode,
{
    fn from(slice: &'a mut Slice) -> Self {
        VecViewMut::from_slice_mut(slice.as_mut())
    }
}

/// Implementation of `VecView::from(&V)` where `V` is a vector or view.
///
/// A read-only view can be made from any vector, including a mutable one.
impl<'a, A, S, M> From<&'a VecBase<S, M>> for VecView<'a, A, M>
where
    S: Data<Elem = A>,
    M: Mode,
{
    fn from(v: &'a VecBase<S, M>) -> Self {
        v.view()
    }
}

/// Implementation of `VecViewMut::from(&mut V)` where `V` is a vector or a
/// read-write view.
impl<'a, A, S, M> From<&'a mut VecBase<S, M>> for VecViewMut<'a, A, M>
where
    S: DataMut<Elem = A>,
    M: Mode,
{
    fn from(v: &'a mut VecBase<S, M>) -> Self {
        v.view_mut()
    }
}

/// A read-write view converts into a read-only view with the same lifetime.
impl<'a, A, M> From<VecViewMut<'a, A, M>> for VecView<'a, A, M>
where
    M: Mode,
{
    fn from(v: VecViewMut<'a, A, M>) -> Self {
        v.into_view()
    }
}

impl<'a, A, M> IntoIterator for VecView<'a, A, M>
where
    M: Mode,
{
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter()
    }
}

impl<'a, A, M> IntoIterator for VecViewMut<'a, A, M>
where
    M: Mode,
{
    type Item = &'a mut A;
    type IntoIter = std::slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}
