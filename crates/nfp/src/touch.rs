//! Touching-point finder (C3). Scans every (edge, vertex) and vertex-vertex
//! pair between two rings and emits one contact per index pair, preferring
//! `VERTEX` over `B_ON_A` over `A_ON_B` — matching the priority order the
//! orbiting-slide algorithm this engine descends from uses to avoid emitting
//! two contacts for what is really one touch.

use crate::geom::{intersects_segment_point, CoordKernel, Ring};

/// A contact currently in effect between ringA and ringB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchingPoint {
    /// `ringA[iA]` and `ringB[iB]` coincide.
    Vertex { i_a: usize, i_b: usize },
    /// `ringB[iB]` lies on edge `(ringA[iA-1], ringA[iA])`.
    BOnA { i_a: usize, i_b: usize },
    /// `ringA[iA]` lies on edge `(ringB[iB-1], ringB[iB])`.
    AOnB { i_a: usize, i_b: usize },
}

/// Enumerate every contact between `ring_a` and `ring_b` at their current
/// positions. Ordering is iteration order; downstream components must not
/// assume anything about it (§4.1).
pub fn find_touching_points<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
) -> Vec<TouchingPoint> {
    let mut touches = Vec::new();
    for i in 0..ring_a.len() {
        let next_i = ring_a.next_index(i);
        for j in 0..ring_b.len() {
            let next_j = ring_b.next_index(j);
            if ring_a.vertex(i).eq_tol(k, ring_b.vertex(j)) {
                touches.push(TouchingPoint::Vertex { i_a: i, i_b: j });
                continue;
            }
            if !ring_a.vertex(next_i).eq_tol(k, ring_b.vertex(j))
                && intersects_segment_point(k, &ring_a.edge(i), ring_b.vertex(j))
            {
                touches.push(TouchingPoint::BOnA {
                    i_a: next_i,
                    i_b: j,
                });
                continue;
            }
            if !ring_b.vertex(next_j).eq_tol(k, ring_a.vertex(i))
                && intersects_segment_point(k, &ring_b.edge(j), ring_a.vertex(i))
            {
                touches.push(TouchingPoint::AOnB {
                    i_a: i,
                    i_b: next_j,
                });
            }
        }
    }
    touches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point, Ring};
    use crate::numeric::FloatKernel;

    fn square(side: f64, ox: f64, oy: f64) -> Ring<FloatKernel> {
        Ring::from_vertices(vec![
            Point::new(ox, oy),
            Point::new(ox + side, oy),
            Point::new(ox + side, oy + side),
            Point::new(ox, oy + side),
        ])
    }

    #[test]
    fn shared_vertex_is_detected() {
        let k = FloatKernel::default();
        let a = square(10.0, 0.0, 0.0);
        let b = square(5.0, 10.0, 0.0);
        let touches = find_touching_points(&k, &a, &b);
        assert!(touches
            .iter()
            .any(|t| matches!(t, TouchingPoint::Vertex { .. })));
    }

    #[test]
    fn vertex_on_edge_is_detected() {
        let k = FloatKernel::default();
        let a = square(10.0, 0.0, 0.0);
        // B's bottom edge sits flush on A's top edge, offset so no vertex coincides.
        let b = square(4.0, 3.0, 10.0);
        let touches = find_touching_points(&k, &a, &b);
        assert!(touches
            .iter()
            .any(|t| matches!(t, TouchingPoint::BOnA { .. })));
    }
}
