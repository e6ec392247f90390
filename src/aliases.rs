// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type aliases for common vector kinds
//!

use crate::{Elementwise, VecView, VecViewMut, Vector};

/// Boolean mask vector, as produced by the elementwise comparisons
pub type Mask = Vector<bool>;

/// read-only elementwise view
pub type ElemView<'a, A> = VecView<'a, A, Elementwise>;
/// read-write elementwise view
pub type ElemViewMut<'a, A> = VecViewMut<'a, A, Elementwise>;
