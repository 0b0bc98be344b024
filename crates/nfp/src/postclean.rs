//! Ring post-cleaner (C10): removes numerical-jitter oscillations and
//! consecutive duplicate points from a finished NFP ring.
//!
//! The repeating-pattern pass is a direct port of the original orbiting-slide
//! engine's collapse loop (window size `i`, counting consecutive matches
//! `ring[j] == ring[j-i]`, collapsing once the count reaches `i` and exceeds
//! 2): the index arithmetic below mirrors it rather than a cleaner from-spec
//! reimplementation, since that is the part of the algorithm most sensitive to
//! getting the off-by-one collapse boundary right.

use crate::geom::CoordKernel;
use crate::geom::Point;

/// Repeating-pattern removal + consecutive-duplicate compaction (§4.8),
/// applied in place to the vertex list of one finished NFP ring (closing
/// duplicate already stripped by the caller).
pub fn clean_ring<K: CoordKernel>(k: &K, points: &mut Vec<Point<K>>) {
    loop {
        let before = points.len();
        remove_repeating_patterns(k, points);
        if points.len() == before {
            break;
        }
    }
    compact_consecutive_duplicates(k, points);
}

fn remove_repeating_patterns<K: CoordKernel>(k: &K, ring: &mut Vec<Point<K>>) {
    let mut len = ring.len();
    if len == 0 {
        return;
    }
    let max_window = len / 2;
    for i in 1..=max_window {
        if i >= len {
            break;
        }
        let mut counter: usize = 0;
        let mut j = i;
        while j < len {
            if ring[j].eq_tol(k, &ring[j - i]) {
                counter += 1;
            } else {
                counter = 0;
            }
            if counter > 2 && counter == i {
                counter = 0;
                let tail: Vec<Point<K>> = ring[j..len].to_vec();
                let dest = j - i;
                for (offset, p) in tail.into_iter().enumerate() {
                    ring[dest + offset] = p;
                }
                len -= i;
                j -= i;
            }
            j += 1;
        }
        ring.truncate(len);
    }
}

fn compact_consecutive_duplicates<K: CoordKernel>(k: &K, ring: &mut Vec<Point<K>>) {
    let mut out: Vec<Point<K>> = Vec::with_capacity(ring.len());
    for p in ring.drain(..) {
        match out.last() {
            Some(last) if last.eq_tol(k, &p) => {}
            _ => out.push(p),
        }
    }
    // A ring reduced to a closing wrap-around duplicate (first == last with
    // nothing in between) collapses to the degenerate one-point case.
    if out.len() > 1 {
        if let (Some(first), Some(last)) = (out.first().cloned(), out.last()) {
            if first.eq_tol(k, last) {
                out.pop();
            }
        }
    }
    *ring = out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FloatKernel;

    fn pt(x: f64, y: f64) -> Point<FloatKernel> {
        Point::new(x, y)
    }

    #[test]
    fn collapses_a_period_three_run_repeated_more_than_twice() {
        let k = FloatKernel::default();
        // counter > 2 && counter == i can only fire for window sizes i >= 3,
        // so a period-1 or period-2 oscillation is never collapsed by this
        // pass (that asymmetry is inherited from the ported algorithm, not a
        // bug here) — exercise it instead with a period-3 run repeated three
        // times over.
        let mut ring = vec![
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 0.0),
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 0.0),
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 0.0),
        ];
        remove_repeating_patterns(&k, &mut ring);
        assert!(ring.len() < 9);
    }

    #[test]
    fn compacts_consecutive_duplicates() {
        let k = FloatKernel::default();
        let mut ring = vec![pt(0.0, 0.0), pt(0.0, 0.0), pt(0.0, 0.0), pt(1.0, 0.0)];
        compact_consecutive_duplicates(&k, &mut ring);
        assert_eq!(ring.len(), 2);
    }
}
