// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numeric configuration bundles.
//!
//! Code that is generic over its numeric backend (a solver, a problem
//! definition) takes one type parameter `C: Config` instead of separate
//! parameters for the scalar and vector types, and names its types through
//! the aliases in this module.
//!
//! ```
//! use linvec::config::{self, Config, DefaultConfig, RealVector, RealView};
//!
//! fn clip_to_box<C: Config>(x: RealView<'_, C>, upper: RealView<'_, C>) -> RealVector<C> {
//!     x.cwise_min(&upper)
//! }
//!
//! let x = RealVector::<DefaultConfig>::from_vec(vec![1., 5.]);
//! let ub = RealVector::<DefaultConfig>::constant(2, 2.);
//! assert_eq!(clip_to_box::<DefaultConfig>(x.view(), ub.view()), linvec::vector![1., 2.]);
//! assert!(config::inf::<DefaultConfig>().is_infinite());
//! ```

use std::fmt;

use crate::{VecFloat, VecView, VecViewMut, Vector};

/// A bundle of the numeric types used by a backend.
///
/// ***Note:*** only the real scalar type is configurable; the vector and
/// view types follow from it.
pub trait Config: 'static + Copy + fmt::Debug + Default {
    /// Real scalar type.
    type Real: VecFloat;
}

/// Double precision configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultConfig;

/// Single precision configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SingleConfig;

impl Config for DefaultConfig {
    type Real = f64;
}

impl Config for SingleConfig {
    type Real = f32;
}

/// Real scalar type of the configuration `C`
pub type Real<C> = <C as Config>::Real;
/// Owned real vector of the configuration `C`
pub type RealVector<C> = Vector<Real<C>>;
/// Read-only real vector view of the configuration `C`
pub type RealView<'a, C> = VecView<'a, Real<C>>;
/// Read-write real vector view of the configuration `C`
pub type RealViewMut<'a, C> = VecViewMut<'a, Real<C>>;

/// Positive infinity in the real type of `C`, used for unbounded box
/// constraints.
pub fn inf<C: Config>() -> Real<C> {
    <Real<C> as num_traits::Float>::infinity()
}

/// Quiet NaN in the real type of `C`, used to mark values that have not
/// been computed yet.
pub fn nan<C: Config>() -> Real<C> {
    <Real<C> as num_traits::Float>::nan()
}

/// An empty vector, standing for an absent optional argument.
pub fn null_vector<C: Config>() -> RealVector<C> {
    Vector::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_double() {
        let x: RealVector<SingleConfig> = Vector::constant(2, -inf::<SingleConfig>());
        assert!(!x.all_finite());
        assert_eq!(std::mem::size_of::<Real<SingleConfig>>(), 4);
        assert!(nan::<DefaultConfig>().is_nan());
        assert!(null_vector::<DefaultConfig>().is_empty());
    }
}
