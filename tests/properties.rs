use linvec::prelude::*;

use quickcheck::{quickcheck, TestResult};

fn pair(xs: &[i16], ys: &[i16]) -> (Vector<i64>, Vector<i64>) {
    let n = xs.len().min(ys.len());
    let a = xs[..n].iter().map(|&x| x as i64).collect();
    let b = ys[..n].iter().map(|&y| y as i64).collect();
    (a, b)
}

fn small_floats(xs: &[i16]) -> Vector<f64> {
    xs.iter().map(|&x| x as f64 / 16.).collect()
}

quickcheck! {
    fn add_then_sub_is_identity(xs: Vec<i16>, ys: Vec<i16>) -> bool {
        let (a, b) = pair(&xs, &ys);
        (&a + &b) - &b == a
    }

    fn dot_is_symmetric(xs: Vec<i16>, ys: Vec<i16>) -> bool {
        let (a, b) = pair(&xs, &ys);
        a.dot(&b) == b.dot(&a) && dot(&a.view(), &b.elementwise()) == a.dot(&b)
    }

    fn norm_squared_is_squared_norm(xs: Vec<i16>) -> bool {
        let v = small_floats(&xs);
        let n = v.norm();
        let sq = v.squared_norm();
        (n * n - sq).abs() <= 1e-9 * (1. + sq)
    }

    fn zeros_are_finite(n: u8) -> bool {
        let z = Vector::<f64>::zeros(n as usize);
        z.all_finite() && z.norm() == 0. && z.norm_inf() == 0.
    }

    fn select_picks_elementwise(mask: Vec<bool>, xs: Vec<i16>, ys: Vec<i16>) -> TestResult {
        let n = mask.len();
        if xs.len() < n || ys.len() < n {
            return TestResult::discard();
        }
        let mask = Vector::from_vec(mask);
        let a = Vector::from_vec(xs[..n].to_vec());
        let b = Vector::from_vec(ys[..n].to_vec());
        let r = mask.select(&a, &b);
        let ok = (0..n).all(|i| r[i] == if mask[i] { a[i] } else { b[i] });
        TestResult::from_bool(ok && r.len() == n)
    }

    fn top_and_bottom_rows_partition(xs: Vec<i16>, k: usize) -> bool {
        let v = Vector::from_vec(xs);
        let len = v.len();
        let n = if len == 0 { 0 } else { k % (len + 1) };
        [0, n, len].iter().all(|&n| {
            let joined: Vector<i16> = v.top_rows(n).iter()
                .chain(v.bottom_rows(len - n).iter())
                .cloned()
                .collect();
            joined == v
        })
    }

    fn resize_keeps_or_resets(xs: Vec<i16>, n: u8) -> bool {
        let mut v = Vector::from_vec(xs.clone());
        let n = n as usize;
        v.resize(n);
        if n == xs.len() {
            v.as_slice() == &xs[..]
        } else {
            v.len() == n && v.iter().all(|&x| x == 0)
        }
    }

    fn comparisons_partition(xs: Vec<i16>, t: i16) -> bool {
        let v = Vector::from_vec(xs);
        let lt = v.elem_lt(t);
        let ge = v.elem_ge(t);
        let eq = v.elementwise().elem_eq(t);
        let le = v.elem_le(t);
        (0..v.len()).all(|i| lt[i] != ge[i] && le[i] == (lt[i] || eq[i]))
            && lt.count_true() + ge.count_true() == v.len()
    }

    fn cwise_max_min_bracket(xs: Vec<i16>, ys: Vec<i16>) -> bool {
        let (a, b) = pair(&xs, &ys);
        let hi = a.cwise_max(&b);
        let lo = a.cwise_min(&b);
        (&hi + &lo) == (&a + &b) && lo.elem_le(&hi).all()
    }
}
