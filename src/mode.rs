// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arithmetic mode markers.

use std::fmt;

/// Arithmetic mode of a vector or view.
///
/// The mode is a type-level tag only: it selects which operator
/// implementations are visible and is never stored.
///
/// ***Note:*** `Mode` is not an extension interface; it is implemented by
/// [`Strict`] and [`Elementwise`] only.
pub trait Mode: 'static + Copy + fmt::Debug {
    /// Name of the mode, used by `Debug` formatting.
    const NAME: &'static str;
    private_decl! {}
}

/// Linear algebra mode.
///
/// Strict vectors support whole-vector operations: `dot`, `+`, `-`, the
/// norms, multiplication by a scalar, and `==` comparing all elements at
/// once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strict;

/// Elementwise (broadcast) mode.
///
/// In addition to the strict operations, elementwise views support `*` and
/// `/` between two vectors and elementwise equality returning a mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Elementwise;

impl Mode for Strict {
    const NAME: &'static str = "Strict";
    private_impl! {}
}

impl Mode for Elementwise {
    const NAME: &'static str = "Elementwise";
    private_impl! {}
}
