// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Slice kernels shared by vectors and views.
//!
//! Callers check lengths; the kernels only `debug_assert` them.

use crate::LinalgScalar;

/// Compute the dot product, accumulating left to right.
///
/// `xs` and `ys` must be the same length
pub fn dot<A>(xs: &[A], ys: &[A]) -> A
where
    A: LinalgScalar,
{
    debug_assert_eq!(xs.len(), ys.len());
    let mut sum = A::zero();
    for (&x, &y) in xs.iter().zip(ys) {
        sum = sum + x * y;
    }
    sum
}

/// Compute pairwise equality
///
/// `xs` and `ys` must be the same length
pub fn all_eq<A, B>(xs: &[A], ys: &[B]) -> bool
where
    A: PartialEq<B>,
{
    debug_assert_eq!(xs.len(), ys.len());
    xs.iter().zip(ys).all(|(x, y)| x == y)
}

/// Apply `f` pairwise, collecting the results.
///
/// `xs` and `ys` must be the same length
pub fn zip_map<A, B, C, F>(xs: &[A], ys: &[B], mut f: F) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    debug_assert_eq!(xs.len(), ys.len());
    xs.iter().zip(ys).map(|(x, y)| f(x, y)).collect()
}

/// Apply `f` pairwise, updating `xs` in place.
///
/// `xs` and `ys` must be the same length
pub fn zip_mut_with<A, B, F>(xs: &mut [A], ys: &[B], mut f: F)
where
    F: FnMut(&mut A, &B),
{
    debug_assert_eq!(xs.len(), ys.len());
    for (x, y) in xs.iter_mut().zip(ys) {
        f(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_left_to_right() {
        assert_eq!(dot(&[1., 2., 3.], &[4., 5., 6.]), 32.);
        assert_eq!(dot::<i32>(&[], &[]), 0);
        // 1e17 + 1 - 1e17 is 0 in f64 when summed in order
        assert_eq!(dot(&[1e17, 1., -1e17], &[1., 1., 1.]), 0.);
    }

    #[test]
    fn eq_and_zip() {
        assert!(all_eq(&[1, 2], &[1, 2]));
        assert!(!all_eq(&[1, 2], &[1, 3]));
        assert_eq!(zip_map(&[1, 2], &[10, 20], |a, b| a + b), vec![11, 22]);
        let mut xs = [1, 2, 3];
        zip_mut_with(&mut xs, &[1, 1, 1], |x, y| *x -= *y);
        assert_eq!(xs, [0, 1, 2]);
    }
}
