use crate::numeric::CoordKernel;

use super::{Point, Segment};

/// A closed sequence of points with `first == last`; winding is fixed by the
/// caller (outer CCW, inner CW). Internally the closing duplicate is stored
/// explicitly, matching the WKT convention this crate reads and writes, but
/// every indexing method here works on the `len()` *distinct* vertices.
#[derive(Clone, Debug)]
pub struct Ring<K: CoordKernel> {
    /// Includes the repeated closing point: `points[0] == points[points.len()-1]`.
    pub points: Vec<Point<K>>,
}

impl<K: CoordKernel> Ring<K> {
    /// Builds a ring from distinct vertices, appending the closing duplicate.
    pub fn from_vertices(vertices: Vec<Point<K>>) -> Self {
        let mut points = vertices;
        if let Some(first) = points.first().cloned() {
            points.push(first);
        }
        Self { points }
    }

    /// Number of distinct vertices (excludes the closing duplicate).
    pub fn len(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vertex(&self, i: usize) -> &Point<K> {
        &self.points[i % self.len()]
    }

    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.len()
    }

    pub fn prev_index(&self, i: usize) -> usize {
        (i + self.len() - 1) % self.len()
    }

    pub fn edge(&self, i: usize) -> Segment<K> {
        Segment::new(self.vertex(i).clone(), self.vertex(self.next_index(i)).clone())
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Point<K>> {
        self.points[..self.len()].iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment<K>> + '_ {
        (0..self.len()).map(move |i| self.edge(i))
    }

    pub fn unmark_all(&self) {
        for p in self.vertices() {
            p.marked.set(false);
        }
    }

    pub fn translated(&self, k: &K, delta: &Point<K>) -> Self {
        let verts: Vec<_> = self.vertices().map(|p| p.translated(k, delta)).collect();
        Self::from_vertices(verts)
    }

    pub fn translate_in_place(&mut self, k: &K, delta: &Point<K>) {
        for p in self.points.iter_mut() {
            *p = p.translated(k, delta);
        }
    }

    /// Closure check required by invariant 1 of the testable-properties list:
    /// `ring.first == ring.last` under tolerance.
    pub fn is_closed(&self, k: &K) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.eq_tol(k, b),
            _ => false,
        }
    }
}
