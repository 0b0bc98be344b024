//! Predicates built on top of [`Point`]/[`Segment`]/[`Ring`]/[`Polygon`]:
//! alignment (left/right/on), inner angle, point-in-ring classification, and
//! the touches/intersects/overlaps/covered-by/within family C4 and C8 need to
//! classify a candidate placement of B against A.

use std::cmp::Ordering;

use crate::numeric::CoordKernel;

use super::{Point, Polygon, Ring, Segment};

/// Which side of a directed edge a probe point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    On,
}

/// Cross-product sign of `edge.direction()` against `probe - edge.first`.
pub fn alignment<K: CoordKernel>(k: &K, edge: &Segment<K>, probe: &Point<K>) -> Alignment {
    let dir = edge.direction(k);
    let to_probe = probe.sub(k, &edge.first);
    match k.sign(&dir.cross(k, &to_probe)) {
        Ordering::Greater => Alignment::Left,
        Ordering::Less => Alignment::Right,
        Ordering::Equal => Alignment::On,
    }
}

/// Inner angle at the origin between two vectors, in `[0, pi]`. Always bridged
/// through `f64`: see the numeric-kernel module docs on why `acos` never
/// participates in tolerance-exact comparisons directly.
pub fn inner_angle<K: CoordKernel>(k: &K, u: &Point<K>, v: &Point<K>) -> f64 {
    let lu = u.length(k);
    let lv = v.length(k);
    if lu <= f64::EPSILON || lv <= f64::EPSILON {
        return 0.0;
    }
    let (ux, uy) = u.to_f64(k);
    let (vx, vy) = v.to_f64(k);
    let cos_theta = ((ux * vx + uy * vy) / (lu * lv)).clamp(-1.0, 1.0);
    cos_theta.acos()
}

/// True when `p` lies on the closed segment `seg` (collinear and within bounds).
pub fn intersects_segment_point<K: CoordKernel>(k: &K, seg: &Segment<K>, p: &Point<K>) -> bool {
    let dir = seg.direction(k);
    let to_p = p.sub(k, &seg.first);
    if !k.equals(&dir.cross(k, &to_p), &k.zero()) {
        return false;
    }
    let dot_span = dir.dot(k, &dir);
    let dot_proj = dir.dot(k, &to_p);
    !k.smaller(&dot_proj, &k.zero()) && !k.larger(&dot_proj, &dot_span)
}

/// Proper intersection point of two segments, if one exists (parametric form,
/// exact under the rational backend since only `+ - * /` on coordinates are
/// used). Collinear-overlap pairs return `None`; callers that care about that
/// case test membership with [`intersects_segment_point`] first.
pub fn segment_intersection<K: CoordKernel>(
    k: &K,
    a: &Segment<K>,
    b: &Segment<K>,
) -> Option<Point<K>> {
    let d1 = a.direction(k);
    let d2 = b.direction(k);
    let denom = d1.cross(k, &d2);
    if k.equals(&denom, &k.zero()) {
        return None;
    }
    let diff = b.first.sub(k, &a.first);
    let t = k.div(&diff.cross(k, &d2), &denom);
    let u = k.div(&diff.cross(k, &d1), &denom);
    let zero = k.zero();
    let one = k.from_f64(1.0);
    if k.smaller(&t, &zero) || k.larger(&t, &one) || k.smaller(&u, &zero) || k.larger(&u, &one) {
        return None;
    }
    Some(Point::new(
        k.add(&a.first.x, &k.mul(&t, &d1.x)),
        k.add(&a.first.y, &k.mul(&t, &d1.y)),
    ))
}

/// Classification of a point against a ring's interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointPosition {
    Inside,
    OnBoundary,
    Outside,
}

/// Ray-casting point-in-ring test with boundary detection via tolerance.
pub fn point_in_ring<K: CoordKernel>(k: &K, ring: &Ring<K>, p: &Point<K>) -> PointPosition {
    for edge in ring.edges() {
        if intersects_segment_point(k, &edge, p) {
            return PointPosition::OnBoundary;
        }
    }
    let mut inside = false;
    let n = ring.len();
    for i in 0..n {
        let vi = ring.vertex(i);
        let vj = ring.vertex(ring.next_index(i));
        let (xi, yi) = vi.to_f64(k);
        let (xj, yj) = vj.to_f64(k);
        let (px, py) = p.to_f64(k);
        let crosses_y = (yi > py) != (yj > py);
        if crosses_y {
            let x_at_y = xi + (py - yi) / (yj - yi) * (xj - xi);
            if px < x_at_y {
                inside = !inside;
            }
        }
    }
    if inside {
        PointPosition::Inside
    } else {
        PointPosition::Outside
    }
}

/// Point-in-polygon: inside the outer ring and not inside (or on the boundary
/// of) any hole.
pub fn point_in_polygon<K: CoordKernel>(k: &K, poly: &Polygon<K>, p: &Point<K>) -> PointPosition {
    let outer = point_in_ring(k, &poly.outer, p);
    if outer != PointPosition::Inside {
        return outer;
    }
    for hole in &poly.holes {
        match point_in_ring(k, hole, p) {
            PointPosition::Inside => return PointPosition::Outside,
            PointPosition::OnBoundary => return PointPosition::OnBoundary,
            PointPosition::Outside => {}
        }
    }
    PointPosition::Inside
}

/// `true` when every vertex of `inner` is strictly inside `outer` and no edge
/// of `inner` crosses an edge of `outer`.
///
/// All of `within`/`covered_by`/`touches`/`overlaps` work ring-to-ring: C3–C8
/// are always given a single ring of A (its outer ring, or one hole at a
/// time — never both at once), so the hole-aware [`point_in_polygon`] variants
/// exist only for C9's full-polygon bookkeeping.
pub fn within<K: CoordKernel>(k: &K, inner: &Ring<K>, outer: &Ring<K>) -> bool {
    for v in inner.vertices() {
        if point_in_ring(k, outer, v) != PointPosition::Inside {
            return false;
        }
    }
    !any_edge_crosses(k, inner, outer)
}

/// `true` when `inner` lies within-or-on `outer`: `within` relaxed to allow
/// boundary contact.
pub fn covered_by<K: CoordKernel>(k: &K, inner: &Ring<K>, outer: &Ring<K>) -> bool {
    for v in inner.vertices() {
        if point_in_ring(k, outer, v) == PointPosition::Outside {
            return false;
        }
    }
    !any_edge_crosses(k, inner, outer)
}

/// `true` when `a` and `b` share at least one boundary point while their
/// interiors remain disjoint.
pub fn touches<K: CoordKernel>(k: &K, a: &Ring<K>, b: &Ring<K>) -> bool {
    if overlaps(k, a, b) {
        return false;
    }
    for va in a.vertices() {
        if point_in_ring(k, b, va) == PointPosition::OnBoundary {
            return true;
        }
    }
    for vb in b.vertices() {
        if point_in_ring(k, a, vb) == PointPosition::OnBoundary {
            return true;
        }
    }
    false
}

/// `true` when the interiors of `a` and `b` have nonempty intersection.
pub fn overlaps<K: CoordKernel>(k: &K, a: &Ring<K>, b: &Ring<K>) -> bool {
    for v in a.vertices() {
        if point_in_ring(k, b, v) == PointPosition::Inside {
            return true;
        }
    }
    for v in b.vertices() {
        if point_in_ring(k, a, v) == PointPosition::Inside {
            return true;
        }
    }
    for ea in a.edges() {
        for eb in b.edges() {
            if segment_intersection(k, &ea, &eb).is_some() {
                return true;
            }
        }
    }
    false
}

fn any_edge_crosses<K: CoordKernel>(k: &K, a: &Ring<K>, b: &Ring<K>) -> bool {
    for ea in a.edges() {
        for eb in b.edges() {
            if let Some(pt) = segment_intersection(k, &ea, &eb) {
                let shared_endpoint = ea.first.eq_tol(k, &pt)
                    || ea.second.eq_tol(k, &pt)
                    || eb.first.eq_tol(k, &pt)
                    || eb.second.eq_tol(k, &pt);
                if !shared_endpoint {
                    return true;
                }
            }
        }
    }
    false
}

/// `true` when the interiors of the two full polygons (outer ring minus
/// holes) intersect. Used only by C9's post-slide overlap check, where A may
/// carry holes that C3–C8 never see simultaneously with the outer ring.
pub fn poly_overlaps<K: CoordKernel>(k: &K, a: &Polygon<K>, b: &Polygon<K>) -> bool {
    for v in a.outer.vertices() {
        if point_in_polygon(k, b, v) == PointPosition::Inside {
            return true;
        }
    }
    for v in b.outer.vertices() {
        if point_in_polygon(k, a, v) == PointPosition::Inside {
            return true;
        }
    }
    overlaps(k, &a.outer, &b.outer)
}
