//! Start-translation search (C8): finds initial translations for the outer
//! loop, for interlock loops, and for holes; detects perfect fits. Consumes
//! A's `marked` vertex flags so repeated calls (one per interlock/hole found)
//! don't retry an already-failed starting vertex.

use crate::geom::{covered_by, overlaps, point_in_ring, CoordKernel, Point, PointPosition, Ring, Segment};
use crate::trim::trim_vector;
use crate::vector::TranslationVector;

#[derive(Clone, Debug)]
pub enum SearchStartResult<K: CoordKernel> {
    /// B's translated boundary coincides vertex-for-vertex with a sub-boundary
    /// of A; `t` is the translation that achieves it.
    Fit(Point<K>),
    /// A legal, not-yet-recorded starting configuration; `t` is the translation.
    Found(Point<K>),
    NotFound,
}

/// Search for a starting translation of `ring_b` against `ring_a`.
///
/// `already_recorded` holds every B-reference point already present in the
/// NFP being built, so a repeat placement is skipped (§4.6 step 3).
pub fn search_start_translation<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    already_recorded: &[Point<K>],
    inside: bool,
) -> SearchStartResult<K> {
    for i_a in 0..ring_a.len() {
        let p_a = ring_a.vertex(i_a).clone();
        if p_a.is_marked() {
            continue;
        }
        p_a.mark();

        for p_b in ring_b.vertices() {
            let t = p_a.sub(k, p_b);
            let translated_b = ring_b.translated(k, &t);

            if is_perfect_fit(k, &translated_b, ring_a) {
                return SearchStartResult::Fit(t);
            }
            if let Some(found_t) = check_found(k, ring_a, &translated_b, &t, already_recorded, inside) {
                return SearchStartResult::Found(found_t);
            }

            // Probe slide: try one step further along A's next edge from p_a.
            let next_a = ring_a.vertex(ring_a.next_index(i_a)).clone();
            let probe = TranslationVector::new(
                next_a.sub(k, &p_a),
                Segment::new(p_a.clone(), next_a),
                true,
                "search_start_probe",
            );
            let trimmed = trim_vector(k, ring_a, &translated_b, &probe);
            let t2 = t.add(k, &trimmed.v);
            let translated_b2 = ring_b.translated(k, &t2);

            if is_perfect_fit(k, &translated_b2, ring_a) {
                return SearchStartResult::Fit(t2);
            }
            if let Some(found_t) = check_found(k, ring_a, &translated_b2, &t2, already_recorded, inside)
            {
                return SearchStartResult::Found(found_t);
            }
        }
    }
    SearchStartResult::NotFound
}

fn is_perfect_fit<K: CoordKernel>(k: &K, translated_b: &Ring<K>, ring_a: &Ring<K>) -> bool {
    translated_b
        .vertices()
        .all(|vb| ring_a.vertices().any(|va| va.eq_tol(k, vb)))
}

fn check_found<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    translated_b: &Ring<K>,
    t: &Point<K>,
    already_recorded: &[Point<K>],
    inside: bool,
) -> Option<Point<K>> {
    let mut b_inside: Option<bool> = None;
    for v in translated_b.vertices() {
        match point_in_ring(k, ring_a, v) {
            PointPosition::Inside => b_inside = Some(true),
            PointPosition::Outside => {
                b_inside = Some(false);
                break;
            }
            PointPosition::OnBoundary => {}
        }
    }
    if b_inside != Some(inside) {
        return None;
    }
    if overlaps(k, ring_a, translated_b) {
        return None;
    }
    if covered_by(k, translated_b, ring_a) || covered_by(k, ring_a, translated_b) {
        return None;
    }
    let reference = translated_b.vertex(0);
    if already_recorded.iter().any(|r| r.eq_tol(k, reference)) {
        return None;
    }
    Some(t.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FloatKernel;

    #[test]
    fn congruent_squares_find_a_perfect_fit() {
        let k = FloatKernel::default();
        let ring_a = Ring::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let ring_b = ring_a.clone();
        let result = search_start_translation(&k, &ring_a, &ring_b, &[], false);
        assert!(matches!(result, SearchStartResult::Fit(_)));
    }
}
