//! Algebraic capability traits.
//!
//! Each trait is an *operation carrier*: a cloneable value whose methods
//! implement one algebraic structure over an associated element type. The
//! stated laws are trusted contracts, not runtime-verified; a carrier that
//! violates them silently produces mathematically wrong results downstream.

/// An abelian group under addition.
///
/// # Laws
///
/// - `add` is associative and commutative
/// - `zero()` is the identity: `add(x, zero()) == x`
/// - `neg` is the inverse: `add(x, neg(x)) == zero()`
/// - `sum` agrees with folding `add` over the slice starting from `zero()`,
///   in any order (commutativity assumed)
pub trait AdditiveGroup: Clone {
    /// The element type the operations act on.
    type Elem: Clone;

    /// The additive identity.
    fn zero(&self) -> Self::Elem;

    /// Adds two elements.
    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// The additive inverse.
    fn neg(&self, x: &Self::Elem) -> Self::Elem;

    /// Sums a slice of elements.
    fn sum(&self, xs: &[Self::Elem]) -> Self::Elem {
        xs.iter().fold(self.zero(), |acc, x| self.add(&acc, x))
    }
}

/// A commutative ring compatible with the additive group.
///
/// # Laws
///
/// - `mul` is associative, commutative, and distributes over `add`
/// - `sub(x, y) == add(x, neg(y))`
/// - `from_f64` is a ring homomorphism from the scalars on the values it
///   can represent exactly
///
/// No multiplicative inverses are required.
pub trait Ring: AdditiveGroup {
    /// Embeds a scalar into the ring.
    fn from_f64(&self, x: f64) -> Self::Elem;

    /// Subtracts `y` from `x`.
    fn sub(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem {
        self.add(x, &self.neg(y))
    }

    /// Multiplies two elements.
    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;
}

/// A vector space (or module) over a scalar type.
///
/// # Laws
///
/// `scale` distributes over `add` in both arguments:
/// `scale(w, add(x, y)) == add(scale(w, x), scale(w, y))` and likewise for
/// addition of scalars.
pub trait VectorSpace: AdditiveGroup {
    /// The scalar type acting on the elements.
    type Scalar: Clone;

    /// Scales an element by a scalar.
    fn scale(&self, w: &Self::Scalar, v: &Self::Elem) -> Self::Elem;
}

/// A vector space with an inner product.
///
/// # Laws
///
/// `dot` is symmetric and bilinear.
pub trait InnerSpace: VectorSpace {
    /// The inner product of two elements.
    fn dot(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Scalar;
}

/// A vector space with a basis, supporting coordinate extraction.
pub trait BasedSpace: VectorSpace {
    /// The type indexing basis elements.
    type Basis;

    /// The coordinate of `v` along the basis element `b`.
    fn decompose(&self, v: &Self::Elem, b: &Self::Basis) -> Self::Scalar;
}
