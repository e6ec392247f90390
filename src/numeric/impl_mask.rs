// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error;
use crate::imp_prelude::*;
use crate::impl_ops::{BroadcastOperand, Operand};

/// # Methods For Boolean Masks
///
/// Masks are produced by the elementwise comparisons, for example
/// [`.elem_lt()`](VecBase::elem_lt).
impl<S, M> VecBase<S, M>
where
    S: Data<Elem = bool>,
    M: Mode,
{
    /// Pick `then[i]` where the mask is `true` and `otherwise[i]` where it
    /// is `false`.
    ///
    /// `otherwise` is either a vector or a scalar that is used for every
    /// `false` position. The result has the length of the mask.
    ///
    /// **Panics** if `then` (or a vector `otherwise`) has a different
    /// length than the mask.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let mask = vector![true, false, true];
    /// let a = vector![1, 2, 3];
    /// let b = vector![10, 20, 30];
    /// assert_eq!(mask.select(&a, &b), vector![1, 20, 3]);
    /// assert_eq!(mask.select(&a, 0), vector![1, 0, 3]);
    /// ```
    #[track_caller]
    pub fn select<U, S2, M2, O>(&self, then: &VecBase<S2, M2>, otherwise: O) -> Vector<U>
    where
        U: Clone,
        S2: Data<Elem = U>,
        M2: Mode,
        O: BroadcastOperand<U>,
    {
        error::assert_same_len("select", self.len(), then.len());
        let pairs = self.iter().zip(then.as_slice());
        match otherwise._operand() {
            Operand::Vector(ys) => {
                error::assert_same_len("select", self.len(), ys.len());
                pairs
                    .zip(ys)
                    .map(|((&m, x), y)| if m { x.clone() } else { y.clone() })
                    .collect()
            }
            Operand::Scalar(y) => pairs
                .map(|(&m, x)| if m { x.clone() } else { y.clone() })
                .collect(),
        }
    }

    /// Return `true` if every element of the mask is `true`.
    ///
    /// An empty mask returns `true`.
    pub fn all(&self) -> bool {
        self.iter().all(|&m| m)
    }

    /// Return `true` if any element of the mask is `true`.
    pub fn any(&self) -> bool {
        self.iter().any(|&m| m)
    }

    /// Return the number of `true` elements.
    ///
    /// ```
    /// use linvec::vector;
    ///
    /// let v = vector![0.5, -1., 2., -3.];
    /// assert_eq!(v.elem_lt(0.).count_true(), 2);
    /// ```
    pub fn count_true(&self) -> usize {
        self.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vector, Vector};

    #[test]
    fn select_view_operands() {
        let mask = vector![false, true];
        let a = vector![1., 2., 3., 4.];
        let r = mask.view().select(&a.top_rows(2), a.bottom_rows(2));
        assert_eq!(r, vector![3., 2.]);
    }

    #[test]
    fn empty_mask() {
        let mask = Vector::<bool>::with_len(0);
        let a = Vector::<i32>::zeros(0);
        assert!(mask.select(&a, 1).is_empty());
        assert!(mask.all());
        assert!(!mask.any());
        assert_eq!(mask.count_true(), 0);
    }

    #[test]
    #[should_panic(expected = "select")]
    fn select_length_mismatch() {
        let mask = vector![true, false];
        let _ = mask.select(&vector![1, 2], &vector![1, 2, 3]);
    }
}
