//! NFP driver (C9): the orchestrator. Pre-translates A and B into the
//! non-negative quadrant, computes the outer loop, then repeats the
//! interlock phase (against A's outer ring) and the hole phase (against each
//! hole of A), post-cleans every ring, and restores the original frame.

use tracing::{debug, warn};

use crate::colinear::remove_colinear;
use crate::config::NfpConfig;
use crate::error::{NfpError, NfpResult};
use crate::geom::{CoordKernel, Point, Polygon, Ring};
use crate::postclean::clean_ring;
use crate::search_start::{search_start_translation, SearchStartResult};
use crate::slide::{slide, SlideResult};

/// One ring of the produced NFP: a closed loop, or a degenerate single point
/// (a perfect fit or a jigsaw placement — §9 open question (b) resolves both
/// to this one variant, with no separate tag carried into the output).
#[derive(Clone, Debug)]
pub enum NfpRing<K: CoordKernel> {
    Ring(Vec<Point<K>>),
    Point(Point<K>),
}

/// An ordered list of rings: the first is the outer NFP loop, the rest are
/// interlock loops (in discovery order) followed by hole loops (per hole, in
/// A's hole order).
pub type Nfp<K> = Vec<NfpRing<K>>;

/// Generate the no-fit polygon of `poly_b` against stationary `poly_a`.
///
/// Mutates local copies of `poly_a`/`poly_b` only; the caller's originals are
/// untouched since both are taken by value.
pub fn generate_nfp<K: CoordKernel>(
    k: &K,
    config: &NfpConfig,
    mut poly_a: Polygon<K>,
    mut poly_b: Polygon<K>,
) -> NfpResult<Nfp<K>> {
    poly_a.outer = remove_colinear(k, &poly_a.outer);
    poly_b.outer = remove_colinear(k, &poly_b.outer);
    poly_a.holes = poly_a.holes.iter().map(|h| remove_colinear(k, h)).collect();
    poly_b.holes = poly_b.holes.iter().map(|h| remove_colinear(k, h)).collect();

    if config.check_validity {
        validate(&poly_a, "A")?;
        validate(&poly_b, "B")?;
    }

    let pre_trans = pre_translation(k, &poly_a, &poly_b);
    poly_a.translate_in_place(k, &pre_trans);
    poly_b.translate_in_place(k, &pre_trans);
    debug!(tx = k.to_f64(&pre_trans.x), ty = k.to_f64(&pre_trans.y), "pre-translated inputs");

    let mut nfp: Nfp<K> = Vec::new();

    let p_a_start = min_y_rightmost(k, &poly_a.outer);
    let p_b_start = max_y_leftmost(k, &poly_b.outer);
    let mut ring_b = poly_b.outer.clone();
    let initial_t = p_a_start.sub(k, &p_b_start);
    ring_b.translate_in_place(k, &initial_t);

    let mut outer_points: Vec<Point<K>> = Vec::new();
    match slide(k, &poly_a.outer, &mut ring_b, &mut outer_points, false, None, config.max_iterations)? {
        SlideResult::Loop => {}
        other => {
            warn!(?other, "outer loop failed to close");
            return Err(NfpError::OuterLoopFailed);
        }
    }
    clean_ring(k, &mut outer_points);
    let outer_ring = Ring::from_vertices(outer_points.clone());
    nfp.push(NfpRing::Ring(outer_points));

    interlock_phase(k, config, &poly_a.outer, &poly_b.outer, false, Some(&outer_ring), &mut nfp)?;

    for hole in &poly_a.holes {
        interlock_phase(k, config, hole, &poly_b.outer, true, None, &mut nfp)?;
    }

    let back = pre_trans.neg(k);
    for ring in nfp.iter_mut() {
        match ring {
            NfpRing::Ring(points) => {
                for p in points.iter_mut() {
                    *p = p.translated(k, &back);
                }
            }
            NfpRing::Point(p) => *p = p.translated(k, &back),
        }
    }

    Ok(nfp)
}

/// Repeatedly searches for a new starting configuration against `ring_a`
/// (A's outer ring, or one hole) and slides from it, appending whatever the
/// slide produces to `nfp`. Stops on the first `NotFound`.
///
/// `search_inside` is C8's `inside` argument: `false` against A's outer ring
/// (§4.7 step 6), `true` against a hole (§4.7 step 7). The slide itself
/// always runs with `inside=true` regardless — both phases may close against
/// the outer NFP ring rather than their own start (§4.5).
fn interlock_phase<K: CoordKernel>(
    k: &K,
    config: &NfpConfig,
    ring_a: &Ring<K>,
    ring_b: &Ring<K>,
    search_inside: bool,
    outer_nfp_ring: Option<&Ring<K>>,
    nfp: &mut Nfp<K>,
) -> NfpResult<()> {
    loop {
        let already: Vec<Point<K>> = nfp
            .iter()
            .flat_map(|r| match r {
                NfpRing::Ring(points) => points.clone(),
                NfpRing::Point(p) => vec![p.clone()],
            })
            .collect();

        match search_start_translation(k, ring_a, ring_b, &already, search_inside) {
            SearchStartResult::Fit(t) => {
                debug!("perfect fit found");
                nfp.push(NfpRing::Point(ring_b.vertex(0).translated(k, &t)));
                return Ok(());
            }
            SearchStartResult::Found(t) => {
                let mut sliding_b = ring_b.translated(k, &t);
                let mut points: Vec<Point<K>> = Vec::new();
                match slide(k, ring_a, &mut sliding_b, &mut points, true, outer_nfp_ring, config.max_iterations)? {
                    SlideResult::Loop => {
                        clean_ring(k, &mut points);
                        nfp.push(NfpRing::Ring(points));
                    }
                    SlideResult::NoTranslation | SlideResult::NoLoop => {
                        let reference = sliding_b.vertex(0).clone();
                        let already_recorded = already.iter().any(|p| p.eq_tol(k, &reference));
                        if !already_recorded {
                            debug!("interlock slide stalled; recording jigsaw point");
                            nfp.push(NfpRing::Point(reference));
                        }
                    }
                }
            }
            SearchStartResult::NotFound => return Ok(()),
        }
    }
}

fn validate<K: CoordKernel>(poly: &Polygon<K>, label: &str) -> NfpResult<()> {
    for ring in poly.rings() {
        if ring.len() < 3 {
            return Err(NfpError::InvalidInput(format!(
                "{label} has a degenerate ring with fewer than 3 vertices"
            )));
        }
    }
    Ok(())
}

/// Translation that moves both polygons entirely into the non-negative
/// quadrant: the negative of the combined minimum (x, y) over every vertex.
fn pre_translation<K: CoordKernel>(k: &K, a: &Polygon<K>, b: &Polygon<K>) -> Point<K> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for ring in a.rings().chain(b.rings()) {
        for v in ring.vertices() {
            let (x, y) = v.to_f64(k);
            min_x = min_x.min(x);
            min_y = min_y.min(y);
        }
    }
    Point::from_f64(k, -min_x, -min_y)
}

/// A's minimum-y vertex; on ties, the rightmost (largest x).
fn min_y_rightmost<K: CoordKernel>(k: &K, ring: &Ring<K>) -> Point<K> {
    let mut best: Option<&Point<K>> = None;
    for v in ring.vertices() {
        best = match best {
            None => Some(v),
            Some(b) => {
                if k.smaller(&v.y, &b.y) || (k.equals(&v.y, &b.y) && k.larger(&v.x, &b.x)) {
                    Some(v)
                } else {
                    Some(b)
                }
            }
        };
    }
    best.expect("ring has at least one vertex").clone()
}

/// B's maximum-y vertex; on ties, the leftmost (smallest x).
fn max_y_leftmost<K: CoordKernel>(k: &K, ring: &Ring<K>) -> Point<K> {
    let mut best: Option<&Point<K>> = None;
    for v in ring.vertices() {
        best = match best {
            None => Some(v),
            Some(b) => {
                if k.larger(&v.y, &b.y) || (k.equals(&v.y, &b.y) && k.smaller(&v.x, &b.x)) {
                    Some(v)
                } else {
                    Some(b)
                }
            }
        };
    }
    best.expect("ring has at least one vertex").clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FloatKernel;

    fn square(x0: f64, y0: f64, side: f64) -> Ring<FloatKernel> {
        Ring::from_vertices(vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ])
    }

    #[test]
    fn two_unit_squares_produce_a_closed_outer_ring() {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let poly_a = Polygon::new(square(0.0, 0.0, 10.0), vec![]);
        let poly_b = Polygon::new(square(0.0, 0.0, 5.0), vec![]);
        let nfp = generate_nfp(&k, &config, poly_a, poly_b).expect("should close");
        assert!(!nfp.is_empty());
        match &nfp[0] {
            NfpRing::Ring(points) => assert!(points.len() >= 4),
            NfpRing::Point(_) => panic!("expected the outer loop to be a ring"),
        }
    }

    #[test]
    fn congruent_squares_include_a_fit_loop() {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let poly_a = Polygon::new(square(0.0, 0.0, 10.0), vec![]);
        let poly_b = Polygon::new(square(0.0, 0.0, 10.0), vec![]);
        let nfp = generate_nfp(&k, &config, poly_a, poly_b).expect("should close");
        assert!(nfp
            .iter()
            .any(|r| matches!(r, NfpRing::Point(_)) || matches!(r, NfpRing::Ring(_))));
    }

    #[test]
    fn l_shape_interlock_produces_an_interior_ring() {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let poly_a = Polygon::new(
            Ring::from_vertices(vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 4.0),
                Point::new(4.0, 4.0),
                Point::new(4.0, 10.0),
                Point::new(0.0, 10.0),
            ]),
            vec![],
        );
        let poly_b = Polygon::new(square(0.0, 0.0, 3.0), vec![]);
        let nfp = generate_nfp(&k, &config, poly_a, poly_b).expect("should close");
        assert!(nfp.len() >= 2, "expected an outer loop plus at least one interior loop");
    }

    #[test]
    fn l_shape_against_its_exact_notch_is_a_perfect_fit() {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let poly_a = Polygon::new(
            Ring::from_vertices(vec![
                Point::new(0.0, 0.0),
                Point::new(6.0, 0.0),
                Point::new(6.0, 6.0),
                Point::new(3.0, 6.0),
                Point::new(3.0, 3.0),
                Point::new(0.0, 3.0),
            ]),
            vec![],
        );
        let poly_b = Polygon::new(square(0.0, 0.0, 3.0), vec![]);
        let nfp = generate_nfp(&k, &config, poly_a, poly_b).expect("should close");
        assert!(
            nfp.iter().any(|r| matches!(r, NfpRing::Point(_))),
            "expected a degenerate fit loop for the exact notch placement"
        );
    }

    #[test]
    fn square_with_centered_hole_produces_a_hole_loop() {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let outer = square(0.0, 0.0, 10.0);
        let hole = Ring::from_vertices(vec![
            Point::new(3.0, 3.0),
            Point::new(3.0, 7.0),
            Point::new(7.0, 7.0),
            Point::new(7.0, 3.0),
        ]);
        let poly_a = Polygon::new(outer, vec![hole]);
        let poly_b = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        let nfp = generate_nfp(&k, &config, poly_a, poly_b).expect("should close");
        assert!(nfp.len() >= 2, "expected an outer loop plus at least one hole loop");
    }

    #[test]
    fn regular_hexagons_close_into_an_edge_two_hexagon() {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let hexagon = |radius: f64| {
            let verts: Vec<Point<FloatKernel>> = (0..6)
                .map(|i| {
                    let theta = std::f64::consts::FRAC_PI_3 * i as f64;
                    Point::new(radius * theta.cos(), radius * theta.sin())
                })
                .collect();
            Ring::from_vertices(verts)
        };
        // Regular hexagon of edge 1 has circumradius 1.
        let poly_a = Polygon::new(hexagon(1.0), vec![]);
        let poly_b = Polygon::new(hexagon(1.0), vec![]);
        let nfp = generate_nfp(&k, &config, poly_a, poly_b).expect("should close");
        match &nfp[0] {
            NfpRing::Ring(points) => assert!(points.len() >= 6),
            NfpRing::Point(_) => panic!("expected the outer loop to be a ring"),
        }
    }
}
