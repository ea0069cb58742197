//! Property-based tests for the algebraic carriers.
//!
//! Strategies stick to integer-valued floats in a small range so that every
//! law can be checked with exact equality.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::lift::{FnElem, Pointwise};
    use crate::real::RealField;
    use crate::traits::{AdditiveGroup, Ring, VectorSpace};

    // Strategy for exactly-representable reals
    fn small_real() -> impl Strategy<Value = f64> {
        (-1000i64..1000i64).prop_map(|n| n as f64)
    }

    proptest! {
        // Additive group laws

        #[test]
        fn real_add_commutative(a in small_real(), b in small_real()) {
            let reals = RealField::<f64>::new();
            prop_assert_eq!(reals.add(&a, &b), reals.add(&b, &a));
        }

        #[test]
        fn real_add_associative(a in small_real(), b in small_real(), c in small_real()) {
            let reals = RealField::<f64>::new();
            prop_assert_eq!(
                reals.add(&reals.add(&a, &b), &c),
                reals.add(&a, &reals.add(&b, &c))
            );
        }

        #[test]
        fn real_zero_is_identity(a in small_real()) {
            let reals = RealField::<f64>::new();
            prop_assert_eq!(reals.add(&a, &reals.zero()), a);
        }

        #[test]
        fn real_neg_is_inverse(a in small_real()) {
            let reals = RealField::<f64>::new();
            prop_assert_eq!(reals.add(&a, &reals.neg(&a)), reals.zero());
        }

        // Ring laws

        #[test]
        fn real_mul_distributes_over_add(a in small_real(), b in small_real(), c in small_real()) {
            let reals = RealField::<f64>::new();
            prop_assert_eq!(
                reals.mul(&a, &reals.add(&b, &c)),
                reals.add(&reals.mul(&a, &b), &reals.mul(&a, &c))
            );
        }

        #[test]
        fn real_sub_is_add_neg(a in small_real(), b in small_real()) {
            let reals = RealField::<f64>::new();
            prop_assert_eq!(reals.sub(&a, &b), reals.add(&a, &reals.neg(&b)));
        }

        // Pointwise lift laws, sampled at a point

        #[test]
        fn lifted_add_agrees_with_base(a in small_real(), b in small_real(), x in small_real()) {
            let reals = RealField::<f64>::new();
            let ops = Pointwise::<f64, _>::new(reals);

            let f = FnElem::new(move |t: &f64| a * t);
            let g = FnElem::new(move |t: &f64| b + t);

            let lhs = ops.add(&f, &g).eval(&x);
            let rhs = reals.add(&f.eval(&x), &g.eval(&x));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn lifted_scale_distributes_over_add(w in small_real(), a in small_real(), x in small_real()) {
            let reals = RealField::<f64>::new();
            let ops = Pointwise::<f64, _>::new(reals);

            let f = FnElem::new(move |t: &f64| a * t);
            let g = FnElem::new(move |t: &f64| t - a);

            let lhs = ops.scale(&w, &ops.add(&f, &g));
            let rhs = ops.add(&ops.scale(&w, &f), &ops.scale(&w, &g));
            prop_assert_eq!(lhs.eval(&x), rhs.eval(&x));
        }

        #[test]
        fn lifted_sum_agrees_with_fold(a in small_real(), b in small_real(), x in small_real()) {
            let reals = RealField::<f64>::new();
            let ops = Pointwise::<f64, _>::new(reals);

            let fs = [
                FnElem::new(move |t: &f64| a + t),
                FnElem::new(move |t: &f64| b * t),
                FnElem::new(|_: &f64| 1.0),
            ];

            let total = ops.sum(&fs).eval(&x);
            let folded = fs.iter().fold(0.0, |acc, f| acc + f.eval(&x));
            prop_assert_eq!(total, folded);
        }
    }
}
