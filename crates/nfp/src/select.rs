//! Next-vector selector (C6): a history-aware policy that picks one
//! candidate per iteration while avoiding infinite oscillation.

use crate::geom::CoordKernel;
use crate::vector::{History, TranslationVector};

/// Choose one candidate from `candidates`, or `None` (the spec's `INVALID`
/// sentinel) if no translation is possible.
pub fn select_next_translation_vector<K: CoordKernel>(
    k: &K,
    candidates: &[TranslationVector<K>],
    history: &History<K>,
) -> Option<TranslationVector<K>> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return Some(candidates[0].clone());
    }
    if history.len() <= 1 {
        return Some(longest(k, candidates));
    }

    let non_hist: Vec<&TranslationVector<K>> = candidates
        .iter()
        .filter(|c| history.find(k, c).is_none())
        .collect();
    let working: Vec<&TranslationVector<K>> = if non_hist.is_empty() {
        candidates.iter().collect()
    } else {
        non_hist
    };

    let mut sorted = working.clone();
    sorted.sort_by(|a, b| {
        a.length(k)
            .partial_cmp(&b.length(k))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for cand in sorted.iter().rev() {
        if history.count(k, cand) < 2 {
            return Some((*cand).clone());
        }
    }

    // No candidate is under the traversal-twice cap: fall back to the least
    // used, breaking ties by largest age (least recently used).
    let mut best: Option<(&TranslationVector<K>, usize, usize)> = None;
    for cand in &working {
        let count = history.count(k, cand);
        let age = history
            .last_index(k, cand)
            .map(|idx| history.len() - idx)
            .unwrap_or(history.len());
        let better = match best {
            None => true,
            Some((_, best_count, best_age)) => {
                count < best_count || (count == best_count && age > best_age)
            }
        };
        if better {
            best = Some((cand, count, age));
        }
    }
    best.map(|(cand, _, _)| cand.clone())
}

fn longest<K: CoordKernel>(k: &K, candidates: &[TranslationVector<K>]) -> TranslationVector<K> {
    candidates
        .iter()
        .max_by(|a, b| {
            a.length(k)
                .partial_cmp(&b.length(k))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("candidates is non-empty")
        .clone()
}
