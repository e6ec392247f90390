#[cfg(feature = "approx")]
mod approx_methods {
    use crate::imp_prelude::*;

    impl<A, S, M> VecBase<S, M>
    where
        S: Data<Elem = A>,
        M: Mode,
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two vectors.
        ///
        /// The modes of `self` and `other` may differ. Vectors of different
        /// lengths are never equal.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<S2, M2>(&self, other: &VecBase<S2, M2>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
            M2: Mode,
        {
            <VecView<'_, A, Strict> as ::approx::AbsDiffEq<_>>::abs_diff_eq(
                &self.strict(),
                &other.strict(),
                epsilon,
            )
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<S2, M2>(
            &self,
            other: &VecBase<S2, M2>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool
        where
            A: ::approx::RelativeEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
            M2: Mode,
        {
            <VecView<'_, A, Strict> as ::approx::RelativeEq<_>>::relative_eq(
                &self.strict(),
                &other.strict(),
                epsilon,
                max_relative,
            )
        }
    }
}

macro_rules! impl_approx_traits {
    ($approx:ident, $doc:expr) => {
        mod $approx {
            use crate::imp_prelude::*;
            use $approx::{AbsDiffEq, RelativeEq, UlpsEq};

            #[doc = $doc]
            impl<A, B, S, S2> AbsDiffEq<VecBase<S2, Strict>> for VecBase<S, Strict>
            where
                A: AbsDiffEq<B>,
                A::Epsilon: Clone,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                type Epsilon = A::Epsilon;

                fn default_epsilon() -> A::Epsilon {
                    A::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &VecBase<S2, Strict>, epsilon: A::Epsilon) -> bool {
                    if self.len() != other.len() {
                        return false;
                    }

                    self.iter()
                        .zip(other)
                        .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
                }
            }

            #[doc = $doc]
            impl<A, B, S, S2> RelativeEq<VecBase<S2, Strict>> for VecBase<S, Strict>
            where
                A: RelativeEq<B>,
                A::Epsilon: Clone,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                fn default_max_relative() -> A::Epsilon {
                    A::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &VecBase<S2, Strict>,
                    epsilon: A::Epsilon,
                    max_relative: A::Epsilon,
                ) -> bool {
                    if self.len() != other.len() {
                        return false;
                    }

                    self.iter().zip(other).all(move |(a, b)| {
                        A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
                    })
                }
            }

            #[doc = $doc]
            impl<A, B, S, S2> UlpsEq<VecBase<S2, Strict>> for VecBase<S, Strict>
            where
                A: UlpsEq<B>,
                A::Epsilon: Clone,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                fn default_max_ulps() -> u32 {
                    A::default_max_ulps()
                }

                fn ulps_eq(
                    &self,
                    other: &VecBase<S2, Strict>,
                    epsilon: A::Epsilon,
                    max_ulps: u32,
                ) -> bool {
                    if self.len() != other.len() {
                        return false;
                    }

                    self.iter()
                        .zip(other)
                        .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
                }
            }

            #[cfg(test)]
            mod tests {
                use crate::prelude::*;
                use $approx::{
                    assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne,
                    assert_ulps_eq, assert_ulps_ne,
                };

                #[test]
                fn abs_diff_eq() {
                    let a: Vector<f32> = vector![0., 2., -0.000010001, 100000000.];
                    let mut b: Vector<f32> = vector![0., 1., -0.000010002, 100000001.];
                    assert_abs_diff_ne!(a, b);
                    b[1] = 2.;
                    assert_abs_diff_eq!(a, b);

                    // Check epsilon.
                    assert_abs_diff_eq!(vector![0.0f32], vector![1e-40f32], epsilon = 1e-40f32);
                    assert_abs_diff_ne!(vector![0.0f32], vector![1e-40f32], epsilon = 1e-41f32);

                    // Different lengths compare unequal without panicking.
                    let c = vector![1f32, 2.];
                    assert_abs_diff_ne!(a, c);
                }

                #[test]
                fn relative_eq() {
                    let a: Vector<f32> = vector![1., 2., -0.000010001, 100000000.];
                    let mut b: Vector<f32> = vector![1., 1., -0.000010002, 100000001.];
                    assert_relative_ne!(a, b);
                    b[1] = 2.;
                    assert_relative_eq!(a, b);

                    assert_relative_eq!(a.view(), b.top_rows(4));

                    // The inherent methods relabel both sides as strict.
                    assert!(a.elementwise().relative_eq(&b.view(), 1e-6, 1e-6));
                    assert!(!a.elementwise().abs_diff_eq(&b.top_rows(3), 1.));
                }

                #[test]
                fn ulps_eq() {
                    let a: Vector<f32> = vector![1., 2., -0.000010001, 100000000.];
                    let mut b: Vector<f32> = vector![1., 1., -0.000010002, 100000001.];
                    assert_ulps_ne!(a, b);
                    b[1] = 2.;
                    assert_ulps_eq!(a, b);

                    let c = vector![1f32, 2.];
                    assert_ulps_ne!(a, c);
                }
            }
        }
    };
}

#[cfg(feature = "approx")]
impl_approx_traits!(approx, "**Requires crate feature `\"approx\"`.**");
