//! A small box-constrained quadratic program written against the
//! configuration aliases, the way a solver backend uses the crate.
//!
//!     minimize  ½ xᵀQx + cᵀx
//!      s.t.     lb ≤ x ≤ ub

use approx::assert_abs_diff_eq;
use linvec::config::{self, Config, DefaultConfig, Real, RealVector, RealView, RealViewMut, SingleConfig};
use linvec::prelude::*;

struct BoxQp<C: Config> {
    /// rows of the Hessian
    q: Vec<RealVector<C>>,
    c: RealVector<C>,
    lb: RealVector<C>,
    ub: RealVector<C>,
}

impl<C: Config> BoxQp<C> {
    fn eval_objective(&self, x: RealView<'_, C>) -> Real<C> {
        let mut qx = RealVector::<C>::zeros(x.len());
        self.hessian_product(x, qx.view_mut());
        let half = real::<C>(0.5);
        half * x.dot(&qx) + self.c.dot(&x)
    }

    fn hessian_product(&self, x: RealView<'_, C>, mut out: RealViewMut<'_, C>) {
        for (i, row) in self.q.iter().enumerate() {
            out[i] = row.dot(&x);
        }
    }

    fn eval_objective_gradient(&self, x: RealView<'_, C>, mut grad: RealViewMut<'_, C>) {
        self.hessian_product(x, grad.view_mut());
        grad += &self.c;
    }

    fn project(&self, x: RealView<'_, C>) -> RealVector<C> {
        x.cwise_max(&self.lb).cwise_min(&self.ub)
    }

    fn solve(&self, step: Real<C>, iterations: usize) -> RealVector<C> {
        let n = self.c.len();
        let mut x = RealVector::<C>::zeros(n);
        let mut grad = RealVector::<C>::zeros(n);
        for _ in 0..iterations {
            self.eval_objective_gradient(x.view(), grad.view_mut());
            let trial = &x - &(&grad * step);
            x.assign(&self.project(trial.view()));
        }
        x
    }
}

fn real<C: Config>(x: f64) -> Real<C> {
    num_traits::cast(x).unwrap()
}

fn problem<C: Config>(upper: Real<C>) -> BoxQp<C> {
    let r = real::<C>;
    BoxQp {
        q: vec![vector![r(3.), r(-1.)], vector![r(-1.), r(3.)]],
        c: vector![r(-1.), r(-1.)],
        lb: RealVector::<C>::constant(2, -config::inf::<C>()),
        ub: vector![upper, config::inf::<C>()],
    }
}

#[test]
fn unconstrained_minimum() {
    let qp = problem::<DefaultConfig>(f64::INFINITY);
    let x = qp.solve(0.25, 200);
    assert_abs_diff_eq!(x[0], 0.5, epsilon = 1e-10);
    assert_abs_diff_eq!(x[1], 0.5, epsilon = 1e-10);
    assert_abs_diff_eq!(qp.eval_objective(x.view()), -0.5, epsilon = 1e-10);
}

#[test]
fn active_upper_bound() {
    let qp = problem::<DefaultConfig>(0.25);
    let x = qp.solve(0.25, 200);
    assert_abs_diff_eq!(x[0], 0.25, epsilon = 1e-10);
    assert_abs_diff_eq!(x[1], 1.25 / 3., epsilon = 1e-10);

    let mut grad = RealVector::<DefaultConfig>::zeros(2);
    qp.eval_objective_gradient(x.view(), grad.view_mut());
    // the first gradient component pushes against the bound
    assert!(grad[0] < 0.);
    assert_eq!(x.elem_ge(&qp.ub), vector![true, false]);
}

#[test]
fn single_precision_backend() {
    let qp = problem::<SingleConfig>(f32::INFINITY);
    let x = qp.solve(0.25, 100);
    assert!(x.all_finite());
    assert_abs_diff_eq!(x[0], 0.5f32, epsilon = 1e-5);
}

#[test]
fn foreign_buffers() {
    let qp = problem::<DefaultConfig>(f64::INFINITY);
    // buffers owned by a caller on the other side of an FFI boundary
    let x_buf = [1.0f64, 2.0];
    let mut g_buf = [0.0f64; 2];
    let x = unsafe { RealView::<DefaultConfig>::from_raw_parts(x_buf.as_ptr(), x_buf.len()) };
    let g = unsafe { RealViewMut::<DefaultConfig>::from_raw_parts(g_buf.as_mut_ptr(), g_buf.len()) };
    qp.eval_objective_gradient(x, g);
    assert_eq!(g_buf, [3. - 2. - 1., -1. + 6. - 1.]);
    assert_eq!(qp.eval_objective(x), 0.5 * (3. - 4. + 12.) - 3.);
}
