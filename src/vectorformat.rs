// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::imp_prelude::*;

/// Default threshold, below this element count, we don't elide elements
/// when printing; above it, only the first and last `PRINT_ELEMENTS_LIMIT`
/// elements are shown.
///
/// Use the alternate flag (`{:#}`) to print every element.
pub const PRINT_ELEMENTS_LIMIT: usize = 6;

const ELLIPSIS: &str = "...";

fn format_vector<A, F>(xs: &[A], f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let n = xs.len();
    let elide = !f.alternate() && n > 2 * PRINT_ELEMENTS_LIMIT + 1;
    f.write_str("[")?;
    for (i, elt) in xs.iter().enumerate() {
        if elide && i >= PRINT_ELEMENTS_LIMIT && i < n - PRINT_ELEMENTS_LIMIT {
            if i == PRINT_ELEMENTS_LIMIT {
                write!(f, ", {}", ELLIPSIS)?;
            }
            continue;
        }
        if i > 0 {
            f.write_str(", ")?;
        }
        format(elt, f)?;
    }
    f.write_str("]")
}

/// Format the vector using `Display` and apply the formatting parameters used
/// to each element.
///
/// Long vectors are elided unless the alternate flag is given.
impl<A: fmt::Display, S, M: Mode> fmt::Display for VecBase<S, M>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_vector(self.as_slice(), f, <_>::fmt)
    }
}

/// Format the vector using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The length and the mode are appended.
impl<A: fmt::Debug, S, M: Mode> fmt::Debug for VecBase<S, M>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_vector(self.as_slice(), f, <_>::fmt)?;
        write!(f, " len={}, mode={}", self.len(), M::NAME)
    }
}

/// Format the vector using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerExp, S, M: Mode> fmt::LowerExp for VecBase<S, M>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_vector(self.as_slice(), f, <_>::fmt)
    }
}

/// Format the vector using `UpperExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::UpperExp, S, M: Mode> fmt::UpperExp for VecBase<S, M>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_vector(self.as_slice(), f, <_>::fmt)
    }
}

/// Format the vector using `LowerHex` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerHex, S, M: Mode> fmt::LowerHex for VecBase<S, M>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_vector(self.as_slice(), f, <_>::fmt)
    }
}

/// Format the vector using `Binary` and apply the formatting parameters used
/// to each element.
impl<A: fmt::Binary, S, M: Mode> fmt::Binary for VecBase<S, M>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_vector(self.as_slice(), f, <_>::fmt)
    }
}
