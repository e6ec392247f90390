// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! linvec prelude.
//!
//! This module contains the most used types, type aliases, traits, functions,
//! and macros that you can import easily as a group.
//!
//! ```
//! use linvec::prelude::*;
//!
//! let v: Vector<f64> = vector![1., 2.];
//! let e: ElemView<'_, f64> = v.elementwise();
//! assert_eq!(e.len(), 2);
//! ```

#[doc(no_inline)]
pub use crate::{VecBase, VecView, VecViewMut, Vector};

#[doc(no_inline)]
pub use crate::{ElemView, ElemViewMut, Mask};

#[doc(no_inline)]
pub use crate::{Elementwise, Mode, Strict};

#[doc(no_inline)]
pub use crate::{aview, aview_mut, dot, norm_1, norm_inf, select};

pub use crate::vector;

#[doc(no_inline)]
pub use crate::{LinalgScalar, ScalarOperand, VecFloat};
