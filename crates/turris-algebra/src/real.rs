//! The real field.
//!
//! The one concrete algebra shipped with the library, generic over the
//! floating-point representation. Everything else in Turris works against
//! the traits, so this mainly serves tests, benches, and as the worked
//! example for writing a carrier.

use std::marker::PhantomData;

use num_traits::Float;

use crate::traits::{AdditiveGroup, InnerSpace, Ring, VectorSpace};

/// The field of real numbers, represented by a floating-point type.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealField<F = f64>(PhantomData<F>);

impl<F> RealField<F> {
    /// Creates the real field carrier.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F: Float> AdditiveGroup for RealField<F> {
    type Elem = F;

    fn zero(&self) -> F {
        F::zero()
    }

    fn add(&self, x: &F, y: &F) -> F {
        *x + *y
    }

    fn neg(&self, x: &F) -> F {
        -*x
    }

    fn sum(&self, xs: &[F]) -> F {
        xs.iter().fold(F::zero(), |acc, x| acc + *x)
    }
}

impl<F: Float> Ring for RealField<F> {
    /// Converts an `f64` into the representation type.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no representation in `F`. This cannot happen for
    /// the standard float types.
    fn from_f64(&self, x: f64) -> F {
        F::from(x).expect("scalar not representable in this float type")
    }

    fn sub(&self, x: &F, y: &F) -> F {
        *x - *y
    }

    fn mul(&self, x: &F, y: &F) -> F {
        *x * *y
    }
}

impl<F: Float> VectorSpace for RealField<F> {
    type Scalar = F;

    fn scale(&self, w: &F, v: &F) -> F {
        *w * *v
    }
}

impl<F: Float> InnerSpace for RealField<F> {
    fn dot(&self, x: &F, y: &F) -> F {
        *x * *y
    }
}
