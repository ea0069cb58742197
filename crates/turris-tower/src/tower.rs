//! The differential tower and its structural combinators.

use std::rc::Rc;

/// A differentiable map: given a point of type `A`, produces the tower of
/// the map's value and derivatives at that point.
pub type DiffFn<A, B> = Rc<dyn Fn(&A) -> Tower<A, B>>;

/// A value together with all of its directional derivatives, on demand.
///
/// `value` is the current-order result; `diff` maps a perturbation
/// direction to the next tower level, the directional derivative in that
/// direction. Repeated application yields arbitrarily many derivative
/// orders. Towers are immutable: every `diff` call allocates a fresh node,
/// so towers may be freely aliased and shared.
pub struct Tower<A, B> {
    value: B,
    diff: DiffFn<A, B>,
}

impl<A, B: Clone> Clone for Tower<A, B> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            diff: Rc::clone(&self.diff),
        }
    }
}

impl<A, B> Tower<A, B> {
    /// Builds a tower from a value and its derivative closure.
    pub fn new(value: B, diff: impl Fn(&A) -> Tower<A, B> + 'static) -> Self {
        Self {
            value,
            diff: Rc::new(diff),
        }
    }

    /// Builds a tower from a value and an already-shared derivative map.
    pub fn from_parts(value: B, diff: DiffFn<A, B>) -> Self {
        Self { value, diff }
    }

    /// The current-order value.
    pub fn value(&self) -> &B {
        &self.value
    }

    /// Consumes the tower, returning the current-order value.
    pub fn into_value(self) -> B {
        self.value
    }

    /// The directional derivative along `da`, as the next tower level.
    #[must_use]
    pub fn diff(&self, da: &A) -> Tower<A, B> {
        (self.diff)(da)
    }

    /// The derivative map of this level, shared.
    #[must_use]
    pub fn diff_fn(&self) -> DiffFn<A, B> {
        Rc::clone(&self.diff)
    }
}

impl<A: 'static, B: Clone + 'static> Tower<A, B> {
    /// Applies `f` at every level of the tower.
    ///
    /// No chain rule is applied for `f` itself, so this is only valid for
    /// operations that commute trivially with differentiation, such as
    /// additive negation. Using a non-linear `f` silently yields an
    /// incorrect derivative.
    pub fn map<C: 'static>(&self, f: impl Fn(&B) -> C + 'static) -> Tower<A, C> {
        let f: Rc<dyn Fn(&B) -> C> = Rc::new(f);
        map_levels(&f, self)
    }

    /// Combines two towers under an operation that is its own derivative
    /// rule, such as addition: the derivative combines the sub-derivatives
    /// under the same `f2`.
    pub fn zip_linear<C, D>(
        &self,
        other: &Tower<A, C>,
        f2: impl Fn(&B, &C) -> D + 'static,
    ) -> Tower<A, D>
    where
        C: Clone + 'static,
        D: 'static,
    {
        let f2: Rc<dyn Fn(&B, &C) -> D> = Rc::new(f2);
        zip_linear_levels(&f2, self, other)
    }

    /// Combines two towers under a bilinear operation via the Leibniz rule:
    /// `d(x·y) = dx·y + x·dy`, applied recursively at every order.
    ///
    /// `add` is the addition of the result algebra.
    pub fn zip_leibniz<C, D>(
        &self,
        other: &Tower<A, C>,
        f2: impl Fn(&B, &C) -> D + 'static,
        add: impl Fn(&Tower<A, D>, &Tower<A, D>) -> Tower<A, D> + 'static,
    ) -> Tower<A, D>
    where
        C: Clone + 'static,
        D: 'static,
    {
        let f2: Rc<dyn Fn(&B, &C) -> D> = Rc::new(f2);
        let add: Rc<AddFn<A, D>> = Rc::new(add);
        zip_leibniz_levels(&f2, &add, self, other)
    }

    /// Samples the first `n + 1` values along a repeated direction:
    /// the value, then the 1st through `n`th directional derivatives.
    pub fn derivatives(&self, n: usize, da: &A) -> Vec<B> {
        let mut out = Vec::with_capacity(n + 1);
        let mut level = self.clone();
        out.push(level.value.clone());
        for _ in 0..n {
            level = level.diff(da);
            out.push(level.value.clone());
        }
        out
    }
}

type AddFn<A, D> = dyn Fn(&Tower<A, D>, &Tower<A, D>) -> Tower<A, D>;

fn map_levels<A, B, C>(f: &Rc<dyn Fn(&B) -> C>, x: &Tower<A, B>) -> Tower<A, C>
where
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    let value = f(x.value());
    let f = Rc::clone(f);
    let x = x.clone();
    Tower::new(value, move |da| map_levels(&f, &x.diff(da)))
}

fn zip_linear_levels<A, B, C, D>(
    f2: &Rc<dyn Fn(&B, &C) -> D>,
    x: &Tower<A, B>,
    y: &Tower<A, C>,
) -> Tower<A, D>
where
    A: 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
{
    let value = f2(x.value(), y.value());
    let f2 = Rc::clone(f2);
    let (x, y) = (x.clone(), y.clone());
    Tower::new(value, move |da| {
        zip_linear_levels(&f2, &x.diff(da), &y.diff(da))
    })
}

fn zip_leibniz_levels<A, B, C, D>(
    f2: &Rc<dyn Fn(&B, &C) -> D>,
    add: &Rc<AddFn<A, D>>,
    x: &Tower<A, B>,
    y: &Tower<A, C>,
) -> Tower<A, D>
where
    A: 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
{
    let value = f2(x.value(), y.value());
    let f2 = Rc::clone(f2);
    let add = Rc::clone(add);
    let (x, y) = (x.clone(), y.clone());
    Tower::new(value, move |da| {
        let dx_y = zip_leibniz_levels(&f2, &add, &x.diff(da), &y);
        let x_dy = zip_leibniz_levels(&f2, &add, &x, &y.diff(da));
        add(&dx_y, &x_dy)
    })
}
