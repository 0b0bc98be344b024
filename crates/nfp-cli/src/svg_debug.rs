//! Debug SVG dumps (C11), gated by the `NFP_DEBUG` environment variable so a
//! normal `nfp` invocation never pays for it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use svg::node::element::{Circle, Polygon as SvgPolygon};
use svg::Document;

use nfp::{CoordKernel, Nfp, NfpRing, Point, Polygon};

const DEBUG_ENV: &str = "NFP_DEBUG";

pub fn enabled() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}

pub fn dump<K: CoordKernel>(
    path: &Path,
    k: &K,
    poly_a: &Polygon<K>,
    poly_b: &Polygon<K>,
    nfp: &Nfp<K>,
) -> Result<()> {
    let mut doc = Document::new().set("viewBox", (-200, -200, 800, 800));
    doc = doc.add(ring_polygon(k, poly_a.outer.vertices(), "none", "black"));
    for hole in &poly_a.holes {
        doc = doc.add(ring_polygon(k, hole.vertices(), "none", "gray"));
    }
    doc = doc.add(ring_polygon(k, poly_b.outer.vertices(), "none", "steelblue"));
    for ring in nfp {
        match ring {
            NfpRing::Ring(points) => {
                doc = doc.add(ring_polygon(k, points.iter(), "none", "crimson"))
            }
            NfpRing::Point(p) => doc = doc.add(reference_dot(k, p)),
        }
    }
    fs::write(path, doc.to_string()).with_context(|| format!("writing {}", path.display()))
}

fn ring_polygon<'a, K: nfp::CoordKernel>(
    k: &K,
    points: impl Iterator<Item = &'a Point<K>>,
    fill: &str,
    stroke: &str,
) -> SvgPolygon
where
    K: 'a,
{
    let coords = points
        .map(|p| {
            let (x, y) = p.to_f64(k);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    SvgPolygon::new()
        .set("points", coords)
        .set("fill", fill)
        .set("stroke", stroke)
        .set("stroke-width", 1)
}

fn reference_dot<K: nfp::CoordKernel>(k: &K, p: &Point<K>) -> Circle {
    let (x, y) = p.to_f64(k);
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", 2)
        .set("fill", "darkorange")
}
