//! # turris-algebra
//!
//! Algebraic capability traits for the Turris differential tower library.
//!
//! This crate provides:
//! - Operation-carrier traits: [`AdditiveGroup`], [`Ring`], [`VectorSpace`],
//!   [`InnerSpace`], [`BasedSpace`]
//! - Pointwise lifts turning an algebra on values into the same algebra on
//!   functions: [`Pointwise`], [`FnElem`]
//! - The real field [`RealField`], the trivial concrete instantiation
//!
//! ## Carriers, not element traits
//!
//! An algebra here is a *value* (usually zero-sized) whose methods operate
//! on an associated element type. This lets closure constructors in
//! `turris-tower` build new algebras out of existing ones at runtime, and
//! lets derivative closures capture the algebra they were built from.
//!
//! ## Trait hierarchy
//!
//! ```text
//! AdditiveGroup
//!  ├── Ring
//!  └── VectorSpace
//!       ├── InnerSpace
//!       └── BasedSpace
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lift;
pub mod real;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use lift::{FnElem, Pointwise};
pub use real::RealField;
pub use traits::{AdditiveGroup, BasedSpace, InnerSpace, Ring, VectorSpace};
