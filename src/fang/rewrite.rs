//! Splicing replacements into the original text.

use serde::{Deserialize, Serialize};

use super::scan::Span;

/// A resolved span and what to put in its place.
///
/// `replacement` is `None` when the span is kept verbatim (an indicator
/// that was already defanged).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub span: Span,
    pub replacement: Option<String>,
}

impl Edit {
    /// Text that ends up in the output for this span.
    pub fn output(&self) -> &str {
        self.replacement.as_deref().unwrap_or(&self.span.text)
    }

    pub fn is_change(&self) -> bool {
        self.replacement
            .as_deref()
            .is_some_and(|r| r != self.span.text)
    }
}

/// Apply disjoint edits to `text`.
///
/// Edits are applied right to left so that every pending edit's offsets
/// still refer to untouched text when it is spliced.
pub fn rewrite(text: &str, edits: &[Edit]) -> String {
    let mut order: Vec<&Edit> = edits.iter().filter(|e| e.replacement.is_some()).collect();
    order.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut out = text.to_string();
    for edit in order {
        if let Some(replacement) = &edit.replacement {
            out.replace_range(edit.span.start..edit.span.end, replacement);
        }
    }
    out
}
