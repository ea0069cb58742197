//! # Turris
//!
//! Exact, arbitrary-order forward-mode automatic differentiation expressed
//! purely algebraically.
//!
//! Every differentiable quantity is a *differential tower*: a value paired
//! with a closure that, given a perturbation direction, yields the next
//! tower in the hierarchy. Supplying an algebra for your scalar or vector
//! type (an implementation of the carrier traits in [`algebra`]) gives you
//! differentiable counterparts of its operations for free, closed under
//! addition, negation, scaling, and ring multiplication — with the chain
//! rule available for composing whole differentiable maps.
//!
//! ## Quick start
//!
//! ```
//! use turris::prelude::*;
//!
//! let reals = RealField::<f64>::new();
//! let ring: TowerRing<f64, _, _> = TowerRing::new(reals, reals);
//!
//! // Differentiate x³ - 2x at x = 2, direction 1
//! let x = identity(&reals)(&2.0);
//! let y = ring.sub(
//!     &ring.mul(&ring.mul(&x, &x), &x),
//!     &ring.mul(&ring.from_f64(2.0), &x),
//! );
//!
//! // value 4, then 3x² - 2 = 10, 6x = 12, 6, 0
//! assert_eq!(y.derivatives(4, &1.0), vec![4.0, 10.0, 12.0, 6.0, 0.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use turris_algebra as algebra;
pub use turris_tower as tower;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use turris_algebra::{
        AdditiveGroup, BasedSpace, FnElem, InnerSpace, Pointwise, RealField, Ring, VectorSpace,
    };
    pub use turris_tower::{
        chain, chain1, constant, coordinate, identity, linear, zero, DiffFn, Tower, TowerRing,
        TowerSpace,
    };
}
