//! WKT adapters (C11). Reads an outer-CCW/holes-CW polygon from a `.wkt`
//! file; writes an NFP as one WKT geometry per line (closed rings as
//! `POLYGON`, degenerate loops as `POINT`), matching the order
//! `generate_nfp` returns: outer loop, then interlocks, then hole loops.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use geo_types::{Coord, LineString, Point as GeoPoint, Polygon as GeoPolygon};
use wkt::{ToWkt, TryFromWkt};

use nfp::{CoordKernel, Nfp, NfpRing, Point, Polygon, Ring};

/// Reads a polygon's vertices through `K::from_f64`, so the rational backend
/// gets exact coordinates built from the same decimal text the float backend
/// parses (the backends diverge in how they compute the NFP, not in how WKT
/// text is read).
pub fn read_polygon<K: CoordKernel>(path: &Path, k: &K) -> Result<Polygon<K>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let geo_poly = GeoPolygon::<f64>::try_from_wkt_str(text.trim())
        .map_err(|e| anyhow!("parsing WKT polygon from {}: {e}", path.display()))?;
    Ok(to_nfp_polygon(k, &geo_poly))
}

fn to_nfp_polygon<K: CoordKernel>(k: &K, geo_poly: &GeoPolygon<f64>) -> Polygon<K> {
    let outer = to_nfp_ring(k, geo_poly.exterior());
    let holes = geo_poly.interiors().iter().map(|h| to_nfp_ring(k, h)).collect();
    Polygon::new(outer, holes)
}

fn to_nfp_ring<K: CoordKernel>(k: &K, line: &LineString<f64>) -> Ring<K> {
    let coords = &line.0;
    let distinct = if coords.len() > 1 && coords.first() == coords.last() {
        &coords[..coords.len() - 1]
    } else {
        &coords[..]
    };
    let verts = distinct
        .iter()
        .map(|c| Point::from_f64(k, c.x, c.y))
        .collect();
    Ring::from_vertices(verts)
}

/// Writes one geometry per line, in the order produced by `generate_nfp`.
/// Coordinates are bridged back through `K::to_f64` for formatting; Rust's
/// default `f64` formatting round-trips exactly, comfortably exceeding the
/// 12-significant-digit floor the floating backend promises, and the
/// rational backend's exactness lives in the computation rather than in this
/// text rendering.
pub fn write_nfp<K: CoordKernel>(path: &Path, nfp: &Nfp<K>, k: &K) -> Result<()> {
    let mut out = String::new();
    for ring in nfp {
        match ring {
            NfpRing::Ring(points) => out.push_str(&ring_to_wkt(k, points)),
            NfpRing::Point(p) => {
                let (x, y) = p.to_f64(k);
                out.push_str(&GeoPoint::new(x, y).wkt_string());
            }
        }
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

fn ring_to_wkt<K: CoordKernel>(k: &K, points: &[Point<K>]) -> String {
    let mut coords: Vec<Coord<f64>> = points
        .iter()
        .map(|p| {
            let (x, y) = p.to_f64(k);
            Coord { x, y }
        })
        .collect();
    if coords.first() != coords.last() {
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }
    }
    GeoPolygon::new(LineString::new(coords), vec![]).wkt_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_a_square_without_the_closing_duplicate() {
        let k = FloatKernel::default();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))").unwrap();
        let poly = read_polygon(file.path(), &k).unwrap();
        assert_eq!(poly.outer.len(), 4);
    }
}
