//! Defanging and refanging of network indicators embedded in free text.
//!
//! A pass runs in four stages over a single input string:
//! `scan` collects candidate spans for every category of one direction,
//! `resolve` keeps one span per overlapping region, each kept span is
//! transformed, and `rewrite` splices the results back right to left.
//! Text outside the kept spans is copied unchanged.
//!
//! ```
//! assert_eq!(
//!     iocfang::defang("see https://sub.example.com/x"),
//!     "see hxxps://sub[.]example[.]com/x"
//! );
//! assert_eq!(iocfang::refang("ip 1[.]2[.]3[.]4"), "ip 1.2.3.4");
//! ```

pub mod category;
mod config;
pub mod patterns;
pub mod resolve;
pub mod rewrite;
pub mod scan;
pub mod transform;

pub use category::{Category, Direction, IndicatorKind};
pub use config::FangConfig;
pub use rewrite::Edit;
pub use scan::Span;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FangError, Result};

/// Structured result of one rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FangReport {
    pub direction: Direction,
    pub output: String,
    /// Resolved spans in ascending offset order.
    pub edits: Vec<Edit>,
}

impl FangReport {
    /// Number of spans whose text actually changed.
    pub fn changed(&self) -> usize {
        self.edits.iter().filter(|e| e.is_change()).count()
    }
}

fn edit_for(span: Span, direction: Direction) -> Edit {
    let replacement = match direction {
        Direction::Defang if transform::is_defanged(&span.text) => {
            trace!(category = %span.category, start = span.start, "span already defanged");
            None
        }
        Direction::Defang => Some(transform::defang(span.category, &span.text)),
        Direction::Refang => Some(transform::refang(&span.text)),
    };
    Edit { span, replacement }
}

/// Turn resolved spans into edits for `direction`.
pub fn plan(resolved: Vec<Span>, direction: Direction) -> Vec<Edit> {
    resolved
        .into_iter()
        .map(|span| edit_for(span, direction))
        .collect()
}

fn run(text: &str, direction: Direction, candidates: Vec<Span>) -> FangReport {
    let candidate_count = candidates.len();
    let resolved = resolve::resolve(candidates);
    let edits = plan(resolved, direction);
    let output = rewrite::rewrite(text, &edits);
    debug!(
        direction = %direction,
        input_bytes = text.len(),
        candidates = candidate_count,
        kept = edits.len(),
        "rewrite pass complete"
    );
    FangReport {
        direction,
        output,
        edits,
    }
}

/// Rewrite `text` in the given direction without any budget.
pub fn transform(text: &str, direction: Direction) -> FangReport {
    let _span = crate::span_trace!("fang", direction = %direction).entered();
    run(text, direction, scan::scan(text, direction))
}

/// Rewrite `text` in the given direction, enforcing the limits in `cfg`.
///
/// On error no output is produced.
pub fn transform_with(text: &str, direction: Direction, cfg: &FangConfig) -> Result<FangReport> {
    let _span = crate::span_trace!("fang", direction = %direction).entered();
    if text.len() > cfg.max_input_bytes {
        return Err(FangError::ResourceExhausted {
            resource: "input_bytes".to_string(),
            used: text.len(),
            limit: cfg.max_input_bytes,
        });
    }
    let candidates = scan::scan(text, direction);
    if candidates.len() > cfg.max_candidates {
        return Err(FangError::ResourceExhausted {
            resource: "candidates".to_string(),
            used: candidates.len(),
            limit: cfg.max_candidates,
        });
    }
    Ok(run(text, direction, candidates))
}

/// Defang every URL, email, IPv4 address and domain in `text`.
pub fn defang(text: &str) -> String {
    transform(text, Direction::Defang).output
}

/// Restore every defanged URL, email, IPv4 address and domain in `text`.
pub fn refang(text: &str) -> String {
    transform(text, Direction::Refang).output
}
