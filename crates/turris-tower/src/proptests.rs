//! Property-based tests for tower algebra laws.
//!
//! Towers have no equality, so laws are compared by sampling the value and
//! the first few derivative levels along a fixed direction. Strategies use
//! integer-valued floats so comparisons are exact.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algebra::{TowerRing, TowerSpace};
    use crate::construct::{constant, identity};
    use crate::tower::Tower;
    use turris_algebra::{AdditiveGroup, RealField, Ring, VectorSpace};

    fn small_real() -> impl Strategy<Value = f64> {
        (-100i64..100i64).prop_map(|n| n as f64)
    }

    fn reals() -> RealField {
        RealField::new()
    }

    fn real_ring() -> TowerRing<f64, RealField, RealField> {
        TowerRing::new(reals(), reals())
    }

    /// Samples a tower as value plus two derivative levels in direction 1.
    fn sample(t: &Tower<f64, f64>) -> Vec<f64> {
        t.derivatives(2, &1.0)
    }

    proptest! {
        #[test]
        fn constant_towers_vanish_at_every_order(b in small_real()) {
            let c: Tower<f64, f64> = constant(&reals(), b);
            prop_assert_eq!(c.derivatives(4, &1.0), vec![b, 0.0, 0.0, 0.0, 0.0]);
        }

        #[test]
        fn tower_add_commutative(a in small_real(), b in small_real()) {
            let ring = real_ring();
            let id = identity(&reals());
            let x = ring.mul(&id(&a), &id(&a));
            let y = id(&b);

            prop_assert_eq!(sample(&ring.add(&x, &y)), sample(&ring.add(&y, &x)));
        }

        #[test]
        fn tower_zero_is_identity(a in small_real()) {
            let ring = real_ring();
            let x = identity(&reals())(&a);

            prop_assert_eq!(sample(&ring.add(&x, &ring.zero())), sample(&x));
        }

        #[test]
        fn tower_neg_is_inverse(a in small_real()) {
            let ring = real_ring();
            let x = identity(&reals())(&a);

            prop_assert_eq!(
                sample(&ring.add(&x, &ring.neg(&x))),
                vec![0.0, 0.0, 0.0]
            );
        }

        #[test]
        fn tower_mul_distributes_over_add(a in small_real(), b in small_real(), c in small_real()) {
            let ring = real_ring();
            let id = identity(&reals());
            let (x, y, z) = (id(&a), id(&b), id(&c));

            let lhs = ring.mul(&x, &ring.add(&y, &z));
            let rhs = ring.add(&ring.mul(&x, &y), &ring.mul(&x, &z));
            prop_assert_eq!(sample(&lhs), sample(&rhs));
        }

        #[test]
        fn tower_scale_distributes_over_add(w in small_real(), a in small_real(), b in small_real()) {
            let space: TowerSpace<f64, RealField> = TowerSpace::new(reals());
            let id = identity(&reals());
            let scalar = id(&w);
            let (x, y) = (id(&a), id(&b));

            let lhs = space.scale(&scalar, &space.add(&x, &y));
            let rhs = space.add(&space.scale(&scalar, &x), &space.scale(&scalar, &y));
            prop_assert_eq!(sample(&lhs), sample(&rhs));
        }

        #[test]
        fn tower_leibniz_matches_the_calculus_answer(a in small_real()) {
            let ring = real_ring();
            let x = identity(&reals())(&a);
            let square = ring.mul(&x, &x);

            // x² has derivatives a², 2a, 2, 0, ...
            prop_assert_eq!(
                square.derivatives(3, &1.0),
                vec![a * a, 2.0 * a, 2.0, 0.0]
            );
        }

        #[test]
        fn tower_sum_agrees_with_folded_add(a in small_real(), b in small_real(), c in small_real()) {
            let ring = real_ring();
            let id = identity(&reals());
            let xs = [id(&a), ring.mul(&id(&b), &id(&b)), id(&c)];

            let folded = ring.add(&ring.add(&xs[0], &xs[1]), &xs[2]);
            prop_assert_eq!(sample(&ring.sum(&xs)), sample(&folded));
        }
    }
}
