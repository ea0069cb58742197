//! Pointwise lifts: an algebra on values becomes an algebra on functions.
//!
//! Given operations on `V`, [`Pointwise`] provides the same operations on
//! functions `A -> V` by acting on the results: `(f + g)(x) = f(x) + g(x)`,
//! `zero` is the constant-zero function, and so on. The lifts preserve the
//! algebraic laws of the wrapped carrier; that is the caller's obligation
//! when supplying the carrier, not separately checked here.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::traits::{AdditiveGroup, BasedSpace, VectorSpace};

/// A function considered as an element of a vector space.
///
/// Wraps an `Rc`-shared closure so that function elements are cloneable
/// values, as the carrier traits require.
pub struct FnElem<A, V> {
    f: Rc<dyn Fn(&A) -> V>,
}

impl<A, V> Clone for FnElem<A, V> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<A, V> FnElem<A, V> {
    /// Wraps a closure as a function element.
    pub fn new(f: impl Fn(&A) -> V + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Evaluates the function at a point.
    #[must_use]
    pub fn eval(&self, x: &A) -> V {
        (self.f)(x)
    }
}

/// Lifts a carrier on `V` to a carrier on functions `A -> V`.
pub struct Pointwise<A, Op> {
    op: Op,
    _domain: PhantomData<fn(&A)>,
}

impl<A, Op: Clone> Clone for Pointwise<A, Op> {
    fn clone(&self) -> Self {
        Self {
            op: self.op.clone(),
            _domain: PhantomData,
        }
    }
}

impl<A, Op> Pointwise<A, Op> {
    /// Lifts `op` to act pointwise on functions into its element type.
    pub const fn new(op: Op) -> Self {
        Self {
            op,
            _domain: PhantomData,
        }
    }

    /// The carrier being lifted.
    pub const fn base(&self) -> &Op {
        &self.op
    }
}

impl<A, Op> AdditiveGroup for Pointwise<A, Op>
where
    A: 'static,
    Op: AdditiveGroup + 'static,
    Op::Elem: 'static,
{
    type Elem = FnElem<A, Op::Elem>;

    fn zero(&self) -> Self::Elem {
        let op = self.op.clone();
        FnElem::new(move |_| op.zero())
    }

    fn add(&self, f: &Self::Elem, g: &Self::Elem) -> Self::Elem {
        let op = self.op.clone();
        let (f, g) = (f.clone(), g.clone());
        FnElem::new(move |x| op.add(&f.eval(x), &g.eval(x)))
    }

    fn neg(&self, f: &Self::Elem) -> Self::Elem {
        let op = self.op.clone();
        let f = f.clone();
        FnElem::new(move |x| op.neg(&f.eval(x)))
    }

    fn sum(&self, fs: &[Self::Elem]) -> Self::Elem {
        let op = self.op.clone();
        let fs = fs.to_vec();
        FnElem::new(move |x| {
            let at_x: Vec<_> = fs.iter().map(|f| f.eval(x)).collect();
            op.sum(&at_x)
        })
    }
}

impl<A, Op> VectorSpace for Pointwise<A, Op>
where
    A: 'static,
    Op: VectorSpace + 'static,
    Op::Elem: 'static,
    Op::Scalar: 'static,
{
    type Scalar = Op::Scalar;

    fn scale(&self, w: &Self::Scalar, f: &Self::Elem) -> Self::Elem {
        let op = self.op.clone();
        let (w, f) = (w.clone(), f.clone());
        FnElem::new(move |y| op.scale(&w, &f.eval(y)))
    }
}

impl<A, Op> BasedSpace for Pointwise<A, Op>
where
    A: 'static,
    Op: BasedSpace + 'static,
    Op::Elem: 'static,
    Op::Scalar: 'static,
{
    /// Evaluation point paired with a basis element of the result space.
    type Basis = (A, Op::Basis);

    fn decompose(&self, f: &Self::Elem, key: &Self::Basis) -> Self::Scalar {
        let (a, b) = key;
        self.op.decompose(&f.eval(a), b)
    }
}
