//! # turris-tower
//!
//! Differential towers: exact, arbitrary-order forward-mode automatic
//! differentiation over caller-supplied algebras.
//!
//! A [`Tower`] pairs a value with a closure that, given a perturbation
//! direction, yields the next tower level — the directional derivative,
//! itself a full tower. No level exists until its `diff` is invoked, so a
//! tower is conceptually infinite but realized lazily, and the cost of an
//! expression is proportional to the derivative orders actually requested.
//!
//! The crate provides:
//! - The tower type and its structural combinators ([`tower`])
//! - Base constructors for constant, zero, linear, identity, and coordinate
//!   towers ([`construct`])
//! - Closure algebras that wrap a caller ring or vector space into the same
//!   kind of algebra whose elements are towers ([`algebra`])
//! - Chain-rule composition of differentiable maps ([`chain`])
//!
//! ## Example
//!
//! ```
//! use turris_algebra::{RealField, Ring};
//! use turris_tower::{identity, TowerRing};
//!
//! let reals = RealField::<f64>::new();
//! let ring: TowerRing<f64, _, _> = TowerRing::new(reals, reals);
//!
//! // x² at x = 3, differentiated in direction 1
//! let x = identity(&reals)(&3.0);
//! let y = ring.mul(&x, &x);
//!
//! assert_eq!(*y.value(), 9.0);
//! assert_eq!(*y.diff(&1.0).value(), 6.0);
//! assert_eq!(*y.diff(&1.0).diff(&1.0).value(), 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod chain;
pub mod construct;
pub mod tower;

#[cfg(test)]
mod proptests;

pub use algebra::{TowerRing, TowerSpace};
pub use chain::{chain, chain1};
pub use construct::{constant, coordinate, identity, linear, zero};
pub use tower::{DiffFn, Tower};
