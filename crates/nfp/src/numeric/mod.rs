//! The numeric kernel (C1): an ordered field of coordinates reached only through
//! tolerance predicates. Two backends are provided: [`FloatKernel`], a fixed
//! absolute+relative epsilon over `f64`, and [`RationalKernel`], exact arithmetic
//! over arbitrary-precision rationals. Raw `==`/`<`/`>` on coordinates is never
//! used outside this module; every other component takes a `&impl CoordKernel`
//! and calls `equals`/`smaller`/`larger`.
//!
//! `sqrt`/`acos` (needed for inner-angle comparisons in C4) are bridged through
//! `to_f64` regardless of backend: the behavioural contract depends on a total
//! order over angle values, which only a floating approximation can give cheaply.

mod float_kernel;
mod rational_kernel;

pub use float_kernel::FloatKernel;
pub use rational_kernel::RationalKernel;

use std::cmp::Ordering;
use std::fmt::Debug;

/// An ordered field of coordinates, reached only through tolerance predicates.
pub trait CoordKernel: Clone + Debug {
    /// The underlying coordinate representation (`f64` or an exact rational).
    type Coord: Clone + Debug;

    fn zero(&self) -> Self::Coord;
    fn from_f64(&self, v: f64) -> Self::Coord;
    fn to_f64(&self, a: &Self::Coord) -> f64;

    fn add(&self, a: &Self::Coord, b: &Self::Coord) -> Self::Coord;
    fn sub(&self, a: &Self::Coord, b: &Self::Coord) -> Self::Coord;
    fn neg(&self, a: &Self::Coord) -> Self::Coord;
    fn mul(&self, a: &Self::Coord, b: &Self::Coord) -> Self::Coord;
    /// Exact/backend-native division. Intersection arithmetic (C3/C5) relies on
    /// this to stay exact under the rational backend.
    fn div(&self, a: &Self::Coord, b: &Self::Coord) -> Self::Coord;

    fn equals(&self, a: &Self::Coord, b: &Self::Coord) -> bool;
    fn smaller(&self, a: &Self::Coord, b: &Self::Coord) -> bool;
    fn larger(&self, a: &Self::Coord, b: &Self::Coord) -> bool {
        self.smaller(b, a)
    }

    /// Sign of `a` under tolerance, used by the alignment predicate (cross-product sign).
    fn sign(&self, a: &Self::Coord) -> Ordering {
        let z = self.zero();
        if self.equals(a, &z) {
            Ordering::Equal
        } else if self.smaller(a, &z) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
