use linvec::prelude::*;
use linvec::PRINT_ELEMENTS_LIMIT;

#[test]
fn formatting() {
    let a = vector![1., 2., 3., 4.];
    assert_eq!(format!("{}", a), "[1, 2, 3, 4]");
    assert_eq!(format!("{:4}", a), "[   1,    2,    3,    4]");
    assert_eq!(format!("{:.2}", a.top_rows(2)), "[1.00, 2.00]");
    assert_eq!(format!("{:e}", vector![1500.]), "[1.5e3]");
    assert_eq!(format!("{:E}", vector![1500.]), "[1.5E3]");
    assert_eq!(format!("{:b}", vector![5u8, 2]), "[101, 10]");
    assert_eq!(format!("{:02x}", vector![10u8, 255]), "[0a, ff]");
    assert_eq!(format!("{}", vector![true, false]), "[true, false]");
}

#[test]
fn debug_format() {
    let a = vector![1, 2];
    assert_eq!(format!("{:?}", a), "[1, 2] len=2, mode=Strict");
    assert_eq!(format!("{:?}", a.elementwise()), "[1, 2] len=2, mode=Elementwise");
    let mut b = a.clone();
    assert_eq!(format!("{:?}", b.view_mut()), "[1, 2] len=2, mode=Strict");
}

#[test]
fn long_vectors_are_elided() {
    let n = 2 * PRINT_ELEMENTS_LIMIT + 2;
    let a = Vector::from_fn(n, |i| i);
    let s = format!("{}", a);
    assert_eq!(s.matches(", ").count(), 2 * PRINT_ELEMENTS_LIMIT);
    assert!(s.contains(", ..., "));
    assert!(s.starts_with("[0, 1,"));
    assert!(s.ends_with(&format!("{}]", n - 1)));

    let full = format!("{:#}", a);
    assert_eq!(full.matches(", ").count(), n - 1);

    let short = Vector::from_fn(2 * PRINT_ELEMENTS_LIMIT + 1, |i| i);
    assert!(!format!("{}", short).contains("..."));
}
