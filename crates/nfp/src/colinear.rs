//! Co-linear vertex removal (C9 step 1): a precondition for C4's angle tests,
//! which assume every vertex is a genuine corner.

use crate::geom::{alignment, Alignment, CoordKernel, Ring, Segment};

/// Drops every vertex that lies exactly on the segment joining its neighbours
/// (alignment `On`), so the ring keeps only genuine corners.
pub fn remove_colinear<K: CoordKernel>(k: &K, ring: &Ring<K>) -> Ring<K> {
    let n = ring.len();
    if n <= 3 {
        return ring.clone();
    }
    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let prev = ring.vertex(ring.prev_index(i));
        let cur = ring.vertex(i);
        let next = ring.vertex(ring.next_index(i));
        let through = Segment::new(prev.clone(), next.clone());
        if alignment(k, &through, cur) != Alignment::On {
            kept.push(cur.clone());
        }
    }
    if kept.len() < 3 {
        return ring.clone();
    }
    Ring::from_vertices(kept)
}
