//! Overlap resolution: pick one span per contested region.
//!
//! Candidates are swept in (start asc, length desc, rank asc) order. A span
//! that starts at or after the end of the last accepted span is accepted.
//! An overlapping span replaces the last accepted one only when it has a
//! strictly better rank, or the same rank and a strictly greater length;
//! otherwise it is dropped. Accepted spans are pairwise disjoint.

use std::cmp::Ordering;

use super::scan::Span;

fn sweep_order(a: &Span, b: &Span) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.category.rank().cmp(&b.category.rank()))
}

fn displaces(candidate: &Span, accepted: &Span) -> bool {
    let (cr, ar) = (candidate.category.rank(), accepted.category.rank());
    cr < ar || (cr == ar && candidate.len() > accepted.len())
}

/// Reduce overlapping candidates to a deterministic, disjoint selection.
pub fn resolve(mut candidates: Vec<Span>) -> Vec<Span> {
    // Stable sort keeps identical (start, len, rank) candidates in scan order.
    candidates.sort_by(sweep_order);

    let mut accepted: Vec<Span> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match accepted.last_mut() {
            Some(last) if candidate.start < last.end => {
                if displaces(&candidate, last) {
                    *last = candidate;
                }
            }
            _ => accepted.push(candidate),
        }
    }

    accepted
}

/// True when no two spans share a byte.
pub fn is_disjoint(spans: &[Span]) -> bool {
    let mut sorted: Vec<&Span> = spans.iter().collect();
    sorted.sort_by_key(|s| s.start);
    sorted.windows(2).all(|w| w[0].end <= w[1].start)
}
