use super::*;
use crate::numeric::FloatKernel;

fn square(k: &FloatKernel, side: f64) -> Polygon<FloatKernel> {
    let verts = vec![
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side, side),
        Point::new(0.0, side),
    ];
    let _ = k;
    Polygon::new(Ring::from_vertices(verts), Vec::new())
}

#[test]
fn ring_closes_and_indexes_modulo_len() {
    let k = FloatKernel::default();
    let sq = square(&k, 10.0);
    assert_eq!(sq.outer.len(), 4);
    assert!(sq.outer.is_closed(&k));
    assert!(sq.outer.vertex(4).eq_tol(&k, sq.outer.vertex(0)));
}

#[test]
fn alignment_detects_left_right_on() {
    let k = FloatKernel::default();
    let edge = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(alignment(&k, &edge, &Point::new(5.0, 1.0)), Alignment::Left);
    assert_eq!(alignment(&k, &edge, &Point::new(5.0, -1.0)), Alignment::Right);
    assert_eq!(alignment(&k, &edge, &Point::new(5.0, 0.0)), Alignment::On);
}

#[test]
fn point_in_ring_classifies_inside_outside_boundary() {
    let k = FloatKernel::default();
    let sq = square(&k, 10.0);
    assert_eq!(
        point_in_ring(&k, &sq.outer, &Point::new(5.0, 5.0)),
        PointPosition::Inside
    );
    assert_eq!(
        point_in_ring(&k, &sq.outer, &Point::new(20.0, 5.0)),
        PointPosition::Outside
    );
    assert_eq!(
        point_in_ring(&k, &sq.outer, &Point::new(0.0, 5.0)),
        PointPosition::OnBoundary
    );
}

#[test]
fn segment_intersection_finds_proper_crossing() {
    let k = FloatKernel::default();
    let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
    let pt = segment_intersection(&k, &a, &b).expect("segments cross at center");
    assert!(pt.eq_tol(&k, &Point::new(5.0, 5.0)));
}

#[test]
fn overlapping_squares_detected() {
    let k = FloatKernel::default();
    let a = square(&k, 10.0);
    let mut b = square(&k, 10.0);
    b.translate_in_place(&k, &Point::new(5.0, 5.0));
    assert!(overlaps(&k, &a.outer, &b.outer));
}

#[test]
fn touching_squares_not_overlapping() {
    let k = FloatKernel::default();
    let a = square(&k, 10.0);
    let mut b = square(&k, 10.0);
    b.translate_in_place(&k, &Point::new(10.0, 0.0));
    assert!(!overlaps(&k, &a.outer, &b.outer));
    assert!(touches(&k, &a.outer, &b.outer));
}
