//! Chain-rule composition of differentiable maps.

use std::rc::Rc;

use turris_algebra::{AdditiveGroup, VectorSpace};

use crate::algebra::TowerSpace;
use crate::tower::{DiffFn, Tower};

type DerivativeFn<A, Op> =
    dyn Fn(&Tower<A, <Op as AdditiveGroup>::Elem>) -> Tower<A, <Op as VectorSpace>::Scalar>;

/// Wraps a plain scalar function into a differentiable one, given its
/// derivative as a tower-to-scalar-tower map.
///
/// `f` is applied to the tower's value; the derivative along `da` is
/// `df(x) · x.diff(da)`, realized through the lifted space's `scale`, so
/// the chain rule holds at every order.
pub fn chain1<A, Op>(
    op: &Op,
    f: impl Fn(&Op::Elem) -> Op::Elem + 'static,
    df: impl Fn(&Tower<A, Op::Elem>) -> Tower<A, Op::Scalar> + 'static,
) -> impl Fn(&Tower<A, Op::Elem>) -> Tower<A, Op::Elem>
where
    A: 'static,
    Op: VectorSpace + 'static,
    Op::Elem: 'static,
    Op::Scalar: 'static,
{
    let lifted: TowerSpace<A, Op> = TowerSpace::new(op.clone());
    let f = Rc::new(f);
    let df: Rc<DerivativeFn<A, Op>> = Rc::new(df);
    move |x: &Tower<A, Op::Elem>| {
        let value = f(x.value());
        let lifted = lifted.clone();
        let df = Rc::clone(&df);
        let x = x.clone();
        Tower::new(value, move |da| lifted.scale(&df(&x), &x.diff(da)))
    }
}

/// Composes two differentiable maps: `chain(f, g)` is `f` after `g`.
///
/// The result's value is `f(g(a)).value`; its derivative map is the
/// composition of the two derivative maps one level down, so every
/// requested order composes the derivative functions at that order rather
/// than expanding a formula. The recursion unfolds lazily and terminates
/// whenever the caller stops requesting further levels.
pub fn chain<A, B, C>(f: DiffFn<B, C>, g: DiffFn<A, B>) -> DiffFn<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Rc::new(move |a0: &A| {
        let dg = g(a0);
        let df = f(dg.value());
        let deeper = chain(df.diff_fn(), dg.diff_fn());
        Tower::from_parts(df.into_value(), deeper)
    })
}
