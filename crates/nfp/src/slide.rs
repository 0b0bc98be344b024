//! Slide loop (C7): drives one closed NFP ring from an initial touching
//! configuration, iterating C3 → C4 → C6 → C5 → translate until the ring
//! closes or the slide can no longer continue.

use crate::error::{NfpError, NfpResult};
use crate::feasible::find_feasible_translation_vectors;
use crate::geom::{overlaps, point_in_ring, CoordKernel, Point, PointPosition, Ring};
use crate::select::select_next_translation_vector;
use crate::touch::find_touching_points;
use crate::trim::trim_vector;
use crate::vector::History;

/// Outcome of one `slide` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideResult {
    /// The ring closed: B's reference point returned to its start (or, for an
    /// interior slide, touched the already-produced outer ring).
    Loop,
    /// C4 returned no feasible candidates; the ring did not close.
    NoLoop,
    /// C6 could not select a candidate (its `INVALID` sentinel).
    NoTranslation,
}

/// Drive one NFP ring. `ring_b` is translated in place as the slide proceeds;
/// `nfp_points` accumulates B's reference point at each step. `outer_nfp_ring`
/// is the already-closed outer loop, consulted only when `inside` is set (an
/// interlock or hole loop may close by touching it instead of returning to
/// its own start).
pub fn slide<K: CoordKernel>(
    k: &K,
    ring_a: &Ring<K>,
    ring_b: &mut Ring<K>,
    nfp_points: &mut Vec<Point<K>>,
    inside: bool,
    outer_nfp_ring: Option<&Ring<K>>,
    max_iterations: usize,
) -> NfpResult<SlideResult> {
    let reference_start = ring_b.vertex(0).clone();
    let mut history: History<K> = History::new();
    let mut iteration = 0usize;

    loop {
        nfp_points.push(ring_b.vertex(0).clone());

        let touchers = find_touching_points(k, ring_a, ring_b);
        if touchers.is_empty() {
            return Err(NfpError::NoTouch { iteration });
        }

        let candidates = find_feasible_translation_vectors(k, ring_a, ring_b, &touchers);
        if candidates.is_empty() {
            return Ok(SlideResult::NoLoop);
        }

        let Some(next) = select_next_translation_vector(k, &candidates, &history) else {
            return Ok(SlideResult::NoTranslation);
        };

        let trimmed = trim_vector(k, ring_a, ring_b, &next);
        // The untrimmed vector is what history tracks (§4.5 step 5): the
        // selector's loop-avoidance policy reasons about which *edges* have
        // been tried, not about how far each trimmed slide actually went.
        history.push(next);

        ring_b.translate_in_place(k, &trimmed.v);
        if overlaps(k, ring_a, ring_b) {
            return Err(NfpError::SlideOverlap { iteration });
        }

        iteration += 1;
        if max_iterations != 0 && iteration >= max_iterations {
            return Err(NfpError::NumericInstability(format!(
                "slide exceeded max_iterations={max_iterations}"
            )));
        }

        let first = ring_b.vertex(0);
        if first.eq_tol(k, &reference_start) {
            return Ok(SlideResult::Loop);
        }
        if inside {
            if let Some(outer) = outer_nfp_ring {
                if point_in_ring(k, outer, first) == PointPosition::OnBoundary {
                    return Ok(SlideResult::Loop);
                }
            }
        }
    }
}
