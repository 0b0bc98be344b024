//! The `TranslationVector` and `History` types shared by C4 (generator), C5
//! (trimmer), and C6 (selector).

use crate::geom::{CoordKernel, Point, Segment};

/// A candidate (or chosen, or trimmed) translation to apply to B.
///
/// `edge` is the directed edge the vector originates from — used by the
/// selector for length comparisons and by the trimmer for the projected
/// segment's start point. `from_a` distinguishes edges of A (sliding
/// "against" A) from edges of B (sliding "along" B); `tag` is a short,
/// human-readable label useful in `tracing` events and debug dumps.
#[derive(Clone, Debug)]
pub struct TranslationVector<K: CoordKernel> {
    pub v: Point<K>,
    pub edge: Segment<K>,
    pub from_a: bool,
    pub tag: &'static str,
}

impl<K: CoordKernel> TranslationVector<K> {
    pub fn new(v: Point<K>, edge: Segment<K>, from_a: bool, tag: &'static str) -> Self {
        Self {
            v,
            edge,
            from_a,
            tag,
        }
    }

    /// Two vectors compare equal when both `v` and `edge` compare equal (§3).
    pub fn eq_tol(&self, k: &K, other: &Self) -> bool {
        self.v.eq_tol(k, &other.v) && self.edge.eq_undirected(k, &other.edge)
    }

    pub fn length(&self, k: &K) -> f64 {
        self.v.length(k)
    }
}

/// Translation vectors emitted so far in the current slide. Supports
/// first-occurrence `find` and `count` under tolerance equality (§3, §4.4).
#[derive(Clone, Debug, Default)]
pub struct History<K: CoordKernel> {
    entries: Vec<TranslationVector<K>>,
}

impl<K: CoordKernel> History<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, v: TranslationVector<K>) {
        self.entries.push(v);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, k: &K, v: &TranslationVector<K>) -> Option<usize> {
        self.entries.iter().position(|e| e.eq_tol(k, v))
    }

    pub fn count(&self, k: &K, v: &TranslationVector<K>) -> usize {
        self.entries.iter().filter(|e| e.eq_tol(k, v)).count()
    }

    /// Index of the most recent occurrence of `v`, used by the selector's
    /// "least recently used" tie-break.
    pub fn last_index(&self, k: &K, v: &TranslationVector<K>) -> Option<usize> {
        self.entries.iter().rposition(|e| e.eq_tol(k, v))
    }
}
