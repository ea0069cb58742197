//! Closure algebras: the same kind of algebra, with towers as elements.
//!
//! Given a caller ring or vector space, these carriers rebuild the full
//! structure on `Tower` elements, so any expression formed from the
//! algebra's operations remains a fully differentiable tower by
//! construction. Multiplication and scaling realize the Leibniz rule
//! through each carrier's own addition; carriers are value-semantic, so
//! the clone captured by a derivative closure denotes the same algebra.

use std::marker::PhantomData;

use turris_algebra::{AdditiveGroup, Ring, VectorSpace};

use crate::construct;
use crate::tower::Tower;

/// A ring of differential towers over a caller-supplied ring.
///
/// `N` supplies the ring operations on values; `V` supplies the vector
/// space (over the same element type) that zero and constant towers are
/// built from.
pub struct TowerRing<A, N, V> {
    num: N,
    vec: V,
    _direction: PhantomData<fn(&A)>,
}

impl<A, N: Clone, V: Clone> Clone for TowerRing<A, N, V> {
    fn clone(&self) -> Self {
        Self {
            num: self.num.clone(),
            vec: self.vec.clone(),
            _direction: PhantomData,
        }
    }
}

impl<A, N, V> TowerRing<A, N, V> {
    /// Wraps a ring and a compatible vector space into a ring of towers.
    pub const fn new(num: N, vec: V) -> Self {
        Self {
            num,
            vec,
            _direction: PhantomData,
        }
    }
}

impl<A, N, V> AdditiveGroup for TowerRing<A, N, V>
where
    A: 'static,
    N: Ring + 'static,
    V: VectorSpace<Elem = N::Elem> + 'static,
    N::Elem: 'static,
{
    type Elem = Tower<A, N::Elem>;

    fn zero(&self) -> Self::Elem {
        construct::zero(&self.vec)
    }

    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        let num = self.num.clone();
        x.zip_linear(y, move |a, b| num.add(a, b))
    }

    fn neg(&self, x: &Self::Elem) -> Self::Elem {
        let num = self.num.clone();
        x.map(move |a| num.neg(a))
    }

    fn sum(&self, xs: &[Self::Elem]) -> Self::Elem {
        let values: Vec<_> = xs.iter().map(|x| x.value().clone()).collect();
        let this = self.clone();
        let xs = xs.to_vec();
        Tower::new(self.num.sum(&values), move |da| {
            let next: Vec<_> = xs.iter().map(|x| x.diff(da)).collect();
            this.sum(&next)
        })
    }
}

impl<A, N, V> Ring for TowerRing<A, N, V>
where
    A: 'static,
    N: Ring + 'static,
    V: VectorSpace<Elem = N::Elem> + 'static,
    N::Elem: 'static,
{
    fn from_f64(&self, x: f64) -> Self::Elem {
        construct::constant(&self.vec, self.num.from_f64(x))
    }

    fn sub(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        let num = self.num.clone();
        x.zip_linear(y, move |a, b| num.sub(a, b))
    }

    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        let num = self.num.clone();
        let this = self.clone();
        x.zip_leibniz(y, move |a, b| num.mul(a, b), move |p, q| this.add(p, q))
    }
}

/// A vector space of differential towers over a caller-supplied one.
///
/// Scalars become towers too, and scaling obeys the Leibniz rule
/// `d(w·v) = dw·v + w·dv` at every order.
pub struct TowerSpace<A, Op> {
    op: Op,
    _direction: PhantomData<fn(&A)>,
}

impl<A, Op: Clone> Clone for TowerSpace<A, Op> {
    fn clone(&self) -> Self {
        Self {
            op: self.op.clone(),
            _direction: PhantomData,
        }
    }
}

impl<A, Op> TowerSpace<A, Op> {
    /// Wraps a vector space into a vector space of towers.
    pub const fn new(op: Op) -> Self {
        Self {
            op,
            _direction: PhantomData,
        }
    }
}

impl<A, Op> AdditiveGroup for TowerSpace<A, Op>
where
    A: 'static,
    Op: VectorSpace + 'static,
    Op::Elem: 'static,
{
    type Elem = Tower<A, Op::Elem>;

    fn zero(&self) -> Self::Elem {
        construct::zero(&self.op)
    }

    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        let op = self.op.clone();
        x.zip_linear(y, move |a, b| op.add(a, b))
    }

    fn neg(&self, x: &Self::Elem) -> Self::Elem {
        let op = self.op.clone();
        x.map(move |a| op.neg(a))
    }

    fn sum(&self, xs: &[Self::Elem]) -> Self::Elem {
        let values: Vec<_> = xs.iter().map(|x| x.value().clone()).collect();
        let this = self.clone();
        let xs = xs.to_vec();
        Tower::new(self.op.sum(&values), move |da| {
            let next: Vec<_> = xs.iter().map(|x| x.diff(da)).collect();
            this.sum(&next)
        })
    }
}

impl<A, Op> VectorSpace for TowerSpace<A, Op>
where
    A: 'static,
    Op: VectorSpace + 'static,
    Op::Elem: 'static,
    Op::Scalar: 'static,
{
    type Scalar = Tower<A, Op::Scalar>;

    fn scale(&self, w: &Self::Scalar, v: &Self::Elem) -> Self::Elem {
        let op = self.op.clone();
        let this = self.clone();
        w.zip_leibniz(v, move |a, b| op.scale(a, b), move |p, q| this.add(p, q))
    }
}
