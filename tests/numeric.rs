#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use linvec::prelude::*;
use linvec_gen::VectorBuilder;

#[test]
fn norms_of_three_four() {
    let v = vector![3., 4.];
    assert_eq!(v.norm(), 5.);
    assert_eq!(v.squared_norm(), 25.);
    assert_eq!(v.view().norm_inf(), 4.);
    assert_eq!(v.elementwise().norm_1(), 7.);
}

#[test]
fn single_precision() {
    let v = vector![3f32, 4.];
    assert_eq!(v.norm(), 5f32);
    let w = &v * 0.5f32;
    assert_eq!(w, vector![1.5f32, 2.]);
}

#[test]
fn dot_is_symmetric() {
    let a = VectorBuilder::new(10).start(-3).build::<f64>();
    let b = a.cwise_product(&a).map(|x| x.sqrt());
    assert_eq!(a.dot(&b), b.dot(&a));
    assert_eq!(dot(&a.top_rows(4), &b.bottom_rows(4)), b.bottom_rows(4).dot(&a.top_rows(4)));
}

#[test]
fn norm_matches_squared_norm() {
    let a = VectorBuilder::new(17).start(-8).build::<f64>() * 0.1;
    assert_abs_diff_eq!(a.norm() * a.norm(), a.squared_norm(), epsilon = 1e-12);
    assert_abs_diff_eq!(a.norm_1(), 7.2, epsilon = 1e-12);
    assert_abs_diff_eq!(a.norm_inf(), 0.8, epsilon = 1e-12);
}

#[test]
fn integer_reductions() {
    let a = vector![-3i64, 1, 2];
    assert_eq!(a.dot(&a), 14);
    assert_eq!(a.squared_norm(), 14);
    assert_eq!(a.sum(), 0);
    assert_eq!(a.norm_inf(), 3);
    assert_eq!(norm_1(&a), 6);
}

#[test]
fn all_finite_detects_nan_and_inf() {
    let mut a = Vector::<f64>::zeros(4);
    assert!(a.all_finite());
    a[2] = f64::INFINITY;
    assert!(!a.all_finite());
    assert!(a.top_rows(2).all_finite());
    a[2] = f64::NAN;
    assert!(!a.bottom_rows(2).all_finite());
    // NaN flows through arithmetic
    let b = &a + &Vector::<f64>::ones(4);
    assert!(b[2].is_nan());
}
