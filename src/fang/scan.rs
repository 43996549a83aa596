//! Candidate span collection over a text buffer.

use serde::{Deserialize, Serialize};

use super::category::{Category, Direction};
use super::patterns;

/// One matched indicator occurrence over the original input.
///
/// `start..end` is a half-open byte range on char boundaries of the scanned
/// text, and `text` is exactly that slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub category: Category,
    pub text: String,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Run every pattern registered for `direction` over `text`.
///
/// Each category is matched independently, so spans of different categories
/// may overlap while spans of one category never do. Output is grouped by
/// category in registry order, ascending by offset within a category.
pub fn scan(text: &str, direction: Direction) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::new();
    if text.is_empty() {
        return out;
    }

    for (category, re) in patterns::registry(direction) {
        for m in re.find_iter(text) {
            if m.start() == m.end() {
                continue;
            }
            out.push(Span {
                start: m.start(),
                end: m.end(),
                category,
                text: m.as_str().to_string(),
            });
        }
    }

    out
}
