//! Vector trimmer (C5): shortens a chosen translation so the slide stops
//! exactly at the next boundary contact instead of overshooting into A.

use crate::geom::{segment_intersection, CoordKernel, Point, Ring, Segment};
use crate::vector::TranslationVector;

/// Shorten `tv` so that translating B by the result produces a new contact
/// with A rather than driving B through it. Two symmetric passes: A's
/// vertices projected backwards through `tv` against B's boundary, then B's
/// vertices projected forwards through `tv` against A's boundary (§4.3).
pub fn trim_vector<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    tv: &TranslationVector<K>,
) -> TranslationVector<K> {
    let mut shortest = tv.edge.length(k);
    let mut trimmed = tv.clone();

    // Pass 1: A's vertices against B, using the negated translation.
    let neg_v = tv.v.neg(k);
    for p_a in ring_a.vertices() {
        let far = p_a.translated(k, &neg_v);
        let proj = Segment::new(p_a.clone(), far);
        if let Some((p_i, seg_i)) = shortest_new_contact(k, ring_b, &proj, p_a) {
            let len = seg_i.length(k);
            if len > tol_floor(k) && len < shortest {
                shortest = len;
                trimmed = TranslationVector::new(p_a.sub(k, &p_i), seg_i, tv.from_a, tv.tag);
            }
        }
    }

    // Pass 2: B's vertices against A, using the translation as-is.
    for p_b in ring_b.vertices() {
        let far = p_b.translated(k, &tv.v);
        let proj = Segment::new(p_b.clone(), far);
        if let Some((p_i, seg_i)) = shortest_new_contact(k, ring_a, &proj, p_b) {
            let len = seg_i.length(k);
            if len > tol_floor(k) && len < shortest {
                shortest = len;
                trimmed = TranslationVector::new(p_i.sub(k, p_b), seg_i, tv.from_a, tv.tag);
            }
        }
    }

    trimmed
}

/// Finds the closest intersection of `proj` with `ring`'s edges that is not
/// the ring's own vertex (that would just be re-discovering the current
/// touch). Returns the intersection point and the segment from `origin` to
/// it. If `proj` only grazes `ring` at a single point, that point is the
/// current contact and is skipped (the whole projection is skipped).
fn shortest_new_contact<K: CoordKernel>(
    k: &K,
    ring: &Ring<K>,
    proj: &Segment<K>,
    origin: &Point<K>,
) -> Option<(Point<K>, Segment<K>)> {
    let mut hits: Vec<Point<K>> = Vec::new();
    for edge in ring.edges() {
        if let Some(pt) = segment_intersection(k, proj, &edge) {
            if !hits.iter().any(|h| h.eq_tol(k, &pt)) {
                hits.push(pt);
            }
        }
    }
    if hits.len() <= 1 {
        return None;
    }
    let mut best: Option<(Point<K>, f64)> = None;
    for pt in hits {
        if ring.vertices().any(|v| v.eq_tol(k, &pt)) {
            continue;
        }
        let seg = Segment::new(origin.clone(), pt.clone());
        let len = seg.length(k);
        if best.as_ref().map(|(_, l)| len < *l).unwrap_or(true) {
            best = Some((pt, len));
        }
    }
    best.map(|(pt, _)| {
        let seg = Segment::new(origin.clone(), pt.clone());
        (pt, seg)
    })
}

fn tol_floor<K: CoordKernel>(k: &K) -> f64 {
    // Any backend-specific epsilon collapses to this floating floor once the
    // length is bridged to f64; see the numeric-kernel module docs.
    let _ = k;
    1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::numeric::FloatKernel;

    #[test]
    fn trim_shortens_toward_next_contact() {
        let k = FloatKernel::default();
        let ring_a = Ring::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let ring_b = Ring::from_vertices(vec![
            Point::new(0.0, -3.0),
            Point::new(3.0, -3.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        // An overlong upward slide should be trimmed to stop where B's top
        // edge first meets A's bottom edge, i.e. essentially no travel since
        // they already touch along y=0.
        let tv = TranslationVector::new(
            Point::new(0.0, 20.0),
            Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 20.0)),
            true,
            "test",
        );
        let trimmed = trim_vector(&k, &ring_a, &ring_b, &tv);
        assert!(trimmed.length(&k) <= tv.length(&k));
    }
}
