//! Base tower constructors.
//!
//! Every constructor takes the carrier of the value algebra so that its
//! derivative closures can produce zero towers of the right algebra.

use std::rc::Rc;

use turris_algebra::AdditiveGroup;

use crate::tower::{DiffFn, Tower};

/// The constant tower: value `b`, zero derivative at every order.
pub fn constant<A, Op>(op: &Op, b: Op::Elem) -> Tower<A, Op::Elem>
where
    A: 'static,
    Op: AdditiveGroup + 'static,
    Op::Elem: 'static,
{
    let op = op.clone();
    Tower::new(b, move |_| zero(&op))
}

/// The zero tower: `constant(op, op.zero())`.
pub fn zero<A, Op>(op: &Op) -> Tower<A, Op::Elem>
where
    A: 'static,
    Op: AdditiveGroup + 'static,
    Op::Elem: 'static,
{
    constant(op, op.zero())
}

/// The differentiable map of a linear function.
///
/// The derivative of a linear map is the map itself evaluated at the
/// perturbation, constant with respect to the base point, so every
/// derivative beyond the first is exactly zero.
pub fn linear<A, Op>(op: &Op, f: impl Fn(&A) -> Op::Elem + 'static) -> DiffFn<A, Op::Elem>
where
    A: 'static,
    Op: AdditiveGroup + 'static,
    Op::Elem: 'static,
{
    let op = op.clone();
    let f: Rc<dyn Fn(&A) -> Op::Elem> = Rc::new(f);
    Rc::new(move |u: &A| {
        let op = op.clone();
        let f = Rc::clone(&f);
        Tower::new(f(u), move |du| constant(&op, f(du)))
    })
}

/// The identity map as a differentiable map.
pub fn identity<Op>(op: &Op) -> DiffFn<Op::Elem, Op::Elem>
where
    Op: AdditiveGroup + 'static,
    Op::Elem: 'static,
{
    linear(op, |x: &Op::Elem| x.clone())
}

/// Projection of the `i`th coordinate of a sequence, as a differentiable
/// map.
///
/// # Panics
///
/// The returned map panics with an index-out-of-range error when applied
/// to a sequence (or perturbation) shorter than `i + 1` elements.
pub fn coordinate<Op>(op: &Op, i: usize) -> DiffFn<Vec<Op::Elem>, Op::Elem>
where
    Op: AdditiveGroup + 'static,
    Op::Elem: 'static,
{
    linear(op, move |xs: &Vec<Op::Elem>| xs[i].clone())
}
