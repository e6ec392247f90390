#![allow(clippy::float_cmp)]

use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq, AbsDiffEq, RelativeEq};

use linvec::prelude::*;
use linvec_gen::{ElementGenerator, VectorBuilder};

#[test]
fn rounding_in_arithmetic() {
    let a = vector![0.1 + 0.2, 1.];
    let b = vector![0.3, 1.];
    assert_ne!(a, b);
    assert_abs_diff_eq!(a, b, epsilon = 1e-15);
    assert_relative_eq!(a, b);
    assert_ulps_eq!(a, b);
}

#[test]
fn strict_views_compare_with_owned() {
    let a = VectorBuilder::new(8).start(-4).build::<f64>() * 0.1;
    let b = a.map(|x| x / 3. * 3.);
    assert_abs_diff_eq!(a.view(), b, epsilon = 1e-15);
    assert_abs_diff_eq!(a.top_rows(5), b.top_rows(5), epsilon = 1e-15);
    assert!(a.bottom_rows(2).abs_diff_eq(&b.bottom_rows(2), 1e-15));
}

#[test]
fn modes_compare_through_inherent_methods() {
    let a = vector![0.1 + 0.2, 1.];
    let b = vector![0.3, 1.];
    assert!(a.abs_diff_eq(&b.elementwise(), 1e-15));
    assert!(a.elementwise().abs_diff_eq(&b.elementwise(), 1e-15));
    assert!(a.elementwise().relative_eq(&b, 1e-15, 1e-15));
    assert!(!a.elementwise().abs_diff_eq(&(&b * 2.), 1e-15));
}

#[test]
fn different_lengths_are_unequal() {
    let a = vector![1., 2., 3.];
    assert!(!a.abs_diff_eq(&vector![1., 2.], 1.));
    assert!(!a.elementwise().relative_eq(&a.top_rows(2), 1., 1.));
    assert_abs_diff_ne!(a, vector![1., 2.]);
}

#[test]
fn norm_of_alternating_sequence() {
    let a = VectorBuilder::new(6)
        .start(1)
        .generator(ElementGenerator::Alternating)
        .build::<f64>();
    // 1, 0, 3, -2, 5, -4
    assert_eq!(a.squared_norm(), 55.);
    assert_abs_diff_eq!(a.norm(), 55f64.sqrt(), epsilon = 1e-14);
    let unit = &a / a.norm();
    assert_abs_diff_eq!(unit.norm(), 1., epsilon = 1e-14);
}

#[test]
fn single_precision_tolerance() {
    let a = VectorBuilder::new(4).build::<f32>() * 0.1f32;
    let b = vector![0f32, 0.1, 0.2, 0.3];
    assert_relative_eq!(a, b, max_relative = 1e-6);
    let strict_b = b.view();
    assert!(AbsDiffEq::abs_diff_eq(&a, &strict_b, 1e-6));
    assert!(RelativeEq::relative_eq(&a.view(), &b, 1e-6, 1e-6));
}
