//! No-fit-polygon computation by orbiting slide.
//!
//! `generate_nfp` drives stationary polygon A and orbiting polygon B through
//! C9's pre-translation, outer-loop slide, interlock phase, and hole phase,
//! returning an ordered list of rings: the outer NFP loop first, then
//! interior loops (interlocks, then per-hole loops) in discovery order.

mod colinear;
mod config;
mod driver;
mod error;
mod feasible;
mod geom;
#[cfg(test)]
mod invariants;
mod numeric;
mod postclean;
mod search_start;
mod select;
mod slide;
mod touch;
mod trim;
mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{Backend, NfpConfig};
pub use driver::{generate_nfp, Nfp, NfpRing};
pub use error::{NfpError, NfpResult};
pub use geom::{
    alignment, covered_by, inner_angle, intersects_segment_point, overlaps, point_in_polygon,
    point_in_ring, poly_overlaps, segment_intersection, touches, within, Alignment, Point,
    PointPosition, Polygon, Ring, Segment,
};
pub use numeric::{CoordKernel, FloatKernel, RationalKernel};
pub use touch::TouchingPoint;
pub use vector::{History, TranslationVector};

/// Common imports for callers that only need the top-level entry point and
/// the float backend.
pub mod prelude {
    pub use crate::{
        generate_nfp, Backend, CoordKernel, FloatKernel, Nfp, NfpConfig, NfpError, NfpRing, Point,
        Polygon, Ring, Segment,
    };
}
