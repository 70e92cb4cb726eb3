//! Weighted sampling from an unnormalized discrete distribution.
//!
//! Roulette-wheel selection over candidates sorted by descending score.
//! Candidates with a zero score are never returned.

use crate::types::NodeId;
use rand::Rng;

/// Draw one candidate with probability proportional to its score.
///
/// `candidates` pairs a node with its score. Scores that are negative or
/// NaN count as zero. The slice is reordered in place (descending score,
/// ties by ascending node) so callers can reuse one buffer across draws.
///
/// Returns `None` when no candidate has a positive score, or when the
/// scores sum to infinity. Callers decide the fallback policy.
pub fn sample<R: Rng + ?Sized>(candidates: &mut [(NodeId, f64)], rng: &mut R) -> Option<NodeId> {
    for candidate in candidates.iter_mut() {
        if candidate.1.is_nan() || candidate.1 < 0.0 {
            candidate.1 = 0.0;
        }
    }
    let denominator: f64 = candidates.iter().map(|&(_, score)| score).sum();
    if denominator <= 0.0 || !denominator.is_finite() {
        return None;
    }

    candidates.sort_by(|x, y| y.1.total_cmp(&x.1).then(x.0.cmp(&y.0)));

    let x: f64 = rng.gen();
    Some(select(candidates, denominator, x))
}

/// Walk the sorted candidates and return the one whose cumulative interval
/// `[running, running + p)` contains `x`.
///
/// Rounding can leave the cumulative total just under 1.0 with `x` past it.
/// In that case the last positive-score candidate in sort order is returned.
fn select(sorted: &[(NodeId, f64)], denominator: f64, x: f64) -> NodeId {
    let mut running = 0.0;
    let mut last_positive = sorted[0].0;
    for &(node, score) in sorted {
        if score <= 0.0 {
            break;
        }
        let p = score / denominator;
        if running <= x && x < running + p {
            return node;
        }
        running += p;
        last_positive = node;
    }
    last_positive
}
