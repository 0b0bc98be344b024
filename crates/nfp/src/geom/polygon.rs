use crate::numeric::CoordKernel;

use super::{Point, Ring};

/// An outer ring plus zero or more inner rings (holes).
#[derive(Clone, Debug)]
pub struct Polygon<K: CoordKernel> {
    pub outer: Ring<K>,
    pub holes: Vec<Ring<K>>,
}

impl<K: CoordKernel> Polygon<K> {
    pub fn new(outer: Ring<K>, holes: Vec<Ring<K>>) -> Self {
        Self { outer, holes }
    }

    pub fn translated(&self, k: &K, delta: &Point<K>) -> Self {
        Self {
            outer: self.outer.translated(k, delta),
            holes: self.holes.iter().map(|h| h.translated(k, delta)).collect(),
        }
    }

    pub fn translate_in_place(&mut self, k: &K, delta: &Point<K>) {
        self.outer.translate_in_place(k, delta);
        for h in self.holes.iter_mut() {
            h.translate_in_place(k, delta);
        }
    }

    /// Every ring, outer first then holes in order. Used by the pre-translation
    /// bounds scan and by validity checks.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<K>> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }
}
