//! Feasible-translation generator (C4): from each touching point, derive
//! candidate translation vectors and the touch-edge pairs used to filter out
//! the ones that would immediately drive B into A.

use crate::geom::{alignment, inner_angle, touches, Alignment, CoordKernel, Point, Ring, Segment};
use crate::touch::TouchingPoint;
use crate::trim::trim_vector;
use crate::vector::TranslationVector;

/// A touch-edge pair recorded while processing one touching point, used only
/// by the filtering step below.
struct TouchEdges<K: CoordKernel> {
    s: Segment<K>,
    t: Segment<K>,
}

/// Generate the feasible translation vectors for the current configuration of
/// `ring_a`/`ring_b`, given the touches C3 found.
pub fn find_feasible_translation_vectors<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    touchers: &[TouchingPoint],
) -> Vec<TranslationVector<K>> {
    let mut candidates: Vec<TranslationVector<K>> = Vec::new();
    let mut touch_edges: Vec<TouchEdges<K>> = Vec::new();

    for touch in touchers {
        match *touch {
            TouchingPoint::Vertex { i_a, i_b } => {
                emit_vertex_touch(k, ring_a, ring_b, i_a, i_b, &mut candidates, &mut touch_edges);
            }
            TouchingPoint::BOnA { i_a, i_b } => {
                emit_b_on_a(k, ring_a, ring_b, i_a, i_b, &mut candidates, &mut touch_edges);
            }
            TouchingPoint::AOnB { i_a, i_b } => {
                emit_a_on_b(k, ring_a, ring_b, i_a, i_b, &mut candidates, &mut touch_edges);
            }
        }
    }

    dedup(k, &mut candidates);
    candidates.retain(|cand| is_feasible(k, ring_a, ring_b, cand, &touch_edges));
    candidates
}

fn emit_vertex_touch<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    i_a: usize,
    i_b: usize,
    candidates: &mut Vec<TranslationVector<K>>,
    touch_edges: &mut Vec<TouchEdges<K>>,
) {
    let v_a = ring_a.vertex(i_a).clone();
    let prev_a = ring_a.vertex(ring_a.prev_index(i_a)).clone();
    let next_a = ring_a.vertex(ring_a.next_index(i_a)).clone();
    let v_b = ring_b.vertex(i_b).clone();
    let prev_b = ring_b.vertex(ring_b.prev_index(i_b)).clone();
    let next_b = ring_b.vertex(ring_b.next_index(i_b)).clone();

    let a1 = Segment::new(v_a.clone(), next_a.clone());
    let a2 = Segment::new(v_a.clone(), prev_a.clone());
    let b1 = Segment::new(v_b.clone(), next_b.clone());
    let b2 = Segment::new(v_b.clone(), prev_b.clone());

    for (s, t) in [
        (a1.clone(), b1.clone()),
        (a1.clone(), b2.clone()),
        (a2.clone(), b1.clone()),
        (a2.clone(), b2.clone()),
    ] {
        touch_edges.push(TouchEdges { s, t });
    }

    // a1 vs b1.end
    match alignment(k, &a1, &b1.second) {
        Alignment::Left => candidates.push(TranslationVector::new(
            b1.first.sub(k, &b1.second),
            b1.clone(),
            false,
            "vertex:a1-b1:left",
        )),
        Alignment::Right | Alignment::On => candidates.push(TranslationVector::new(
            a1.second.sub(k, &a1.first),
            a1.clone(),
            true,
            "vertex:a1-b1:right",
        )),
    }

    // a1 vs b2.end
    match alignment(k, &a1, &b2.second) {
        Alignment::Left => {} // not feasible: discard
        Alignment::Right | Alignment::On => candidates.push(TranslationVector::new(
            a1.second.sub(k, &a1.first),
            a1.clone(),
            true,
            "vertex:a1-b2",
        )),
    }

    // a2 vs b1.end: LEFT, RIGHT, and ON all emit the same candidate.
    candidates.push(TranslationVector::new(
        b1.first.sub(k, &b1.second),
        b1,
        false,
        "vertex:a2-b1",
    ));
}

fn emit_b_on_a<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    i_a: usize,
    i_b: usize,
    candidates: &mut Vec<TranslationVector<K>>,
    touch_edges: &mut Vec<TouchEdges<K>>,
) {
    let v_a = ring_a.vertex(i_a).clone();
    let prev_a = ring_a.vertex(ring_a.prev_index(i_a)).clone();
    let v_b = ring_b.vertex(i_b).clone();
    let prev_b = ring_b.vertex(ring_b.prev_index(i_b)).clone();
    let next_b = ring_b.vertex(ring_b.next_index(i_b)).clone();

    let vb_to_va = Segment::new(v_b.clone(), v_a.clone());
    let vb_to_prev_a = Segment::new(v_b.clone(), prev_a);
    let vb_to_prev_b = Segment::new(v_b.clone(), prev_b);
    let vb_to_next_b = Segment::new(v_b.clone(), next_b);

    for (s, t) in [
        (vb_to_va.clone(), vb_to_prev_b.clone()),
        (vb_to_va.clone(), vb_to_next_b.clone()),
        (vb_to_prev_a.clone(), vb_to_prev_b.clone()),
        (vb_to_prev_a.clone(), vb_to_next_b.clone()),
    ] {
        touch_edges.push(TouchEdges { s, t });
    }

    candidates.push(TranslationVector::new(
        v_a.sub(k, &v_b),
        Segment::new(v_b, v_a),
        true,
        "b_on_a",
    ));
}

fn emit_a_on_b<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    i_a: usize,
    i_b: usize,
    candidates: &mut Vec<TranslationVector<K>>,
    touch_edges: &mut Vec<TouchEdges<K>>,
) {
    let v_a = ring_a.vertex(i_a).clone();
    let prev_a = ring_a.vertex(ring_a.prev_index(i_a)).clone();
    let next_a = ring_a.vertex(ring_a.next_index(i_a)).clone();
    let v_b = ring_b.vertex(i_b).clone();
    let prev_b = ring_b.vertex(ring_b.prev_index(i_b)).clone();

    let va_to_vb = Segment::new(v_a.clone(), v_b.clone());
    let va_to_prev_a = Segment::new(v_a.clone(), prev_a);
    let va_to_next_a = Segment::new(v_a.clone(), next_a);
    let va_to_prev_b = Segment::new(v_a.clone(), prev_b);

    for (s, t) in [
        (va_to_vb.clone(), va_to_prev_a.clone()),
        (va_to_vb.clone(), va_to_next_a.clone()),
        (va_to_prev_b.clone(), va_to_prev_a.clone()),
        (va_to_prev_b.clone(), va_to_next_a.clone()),
    ] {
        touch_edges.push(TouchEdges { s, t });
    }

    candidates.push(TranslationVector::new(
        v_a.sub(k, &v_b),
        Segment::new(v_a, v_b),
        false,
        "a_on_b",
    ));
}

fn dedup<K: CoordKernel>(k: &K, candidates: &mut Vec<TranslationVector<K>>) {
    let mut unique: Vec<TranslationVector<K>> = Vec::new();
    for cand in candidates.drain(..) {
        if !unique.iter().any(|u| u.eq_tol(k, &cand)) {
            unique.push(cand);
        }
    }
    *candidates = unique;
}

/// Tests `cand` against every recorded touch-edge pair; `false` means discard.
fn is_feasible<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    cand: &TranslationVector<K>,
    touch_edges: &[TouchEdges<K>],
) -> bool {
    let n_e = cand.edge.direction(k).normalize(k);
    let origin = Point::new(k.zero(), k.zero());
    let e_seg = Segment::new(origin, n_e.clone());
    let n_v = cand.v.normalize(k);
    let sliding_into_touch = n_e.eq_tol(k, &n_v);

    for te in touch_edges {
        let n_f = te.s.direction(k).normalize(k);
        let n_s = te.t.direction(k).normalize(k);
        let a1 = alignment(k, &e_seg, &n_f);
        let a2 = alignment(k, &e_seg, &n_s);

        if a1 == a2 && a1 != Alignment::On {
            let df = inner_angle(k, &n_e, &n_f);
            let ds = inner_angle(k, &n_e, &n_s);
            if (df - ds).abs() <= 1e-9 {
                let trimmed = trim_vector(k, ring_a, ring_b, cand);
                let moved_b = ring_b.translated(k, &trimmed.v);
                let legal = touches(k, ring_a, &moved_b) && !covered_by_either(k, ring_a, &moved_b);
                if !legal {
                    return false;
                }
            } else if sliding_into_touch {
                if ds > df && df != 0.0 {
                    return false;
                }
            } else if ds < df && ds != 0.0 {
                return false;
            }
        }
    }
    true
}

fn covered_by_either<K: CoordKernel>(k: &K, ring_a: &Ring<K>, ring_b: &Ring<K>) -> bool {
    crate::geom::covered_by(k, ring_b, ring_a) || crate::geom::covered_by(k, ring_a, ring_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::numeric::FloatKernel;
    use crate::touch::find_touching_points;

    fn square(side: f64, ox: f64, oy: f64) -> Ring<FloatKernel> {
        Ring::from_vertices(vec![
            Point::new(ox, oy),
            Point::new(ox + side, oy),
            Point::new(ox + side, oy + side),
            Point::new(ox, oy + side),
        ])
    }

    #[test]
    fn touching_squares_yield_nonempty_candidates() {
        let k = FloatKernel::default();
        let ring_a = square(10.0, 0.0, 0.0);
        let ring_b = square(5.0, 10.0, 0.0);
        let touches = find_touching_points(&k, &ring_a, &ring_b);
        assert!(!touches.is_empty());
        let cands = find_feasible_translation_vectors(&k, &ring_a, &ring_b, &touches);
        assert!(!cands.is_empty());
    }
}
