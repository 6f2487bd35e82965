//! # textdiffer
//!
//! Word-level text diffing. Two texts are split into lossless tokens (runs of
//! whitespace and non-whitespace by default), aligned with a longest common
//! subsequence, and returned as an ordered list of `common` / `added` /
//! `removed` segments ready for rendering.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into comparison units without dropping anything
//! - **LcsAlgorithm**: Classify every token using an LCS alignment
//! - **DiffEngine**: Apply configuration (granularity, input bound, coalescing)
//! - **Renderers / DiffView**: Display a diff, or the raw texts when none is available
//!
//! ## Example
//!
//! ```rust
//! use textdiffer_core::{compute_diff, SegmentKind};
//!
//! let diff = compute_diff("the quick fox", "the slow fox");
//! assert_eq!(diff.old_text(), "the quick fox");
//! assert_eq!(diff.new_text(), "the slow fox");
//! assert!(diff.segments.iter().any(|s| s.kind == SegmentKind::Added && s.text == "slow"));
//! ```

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod document;
pub mod engine;
pub mod error;
pub mod render;
pub mod tokenizers;
pub mod view;

// Re-export main types
pub use config::{DiffConfig, DiffOptions, Granularity, DEFAULT_MAX_TOKENS};
pub use diff::{DiffResult, DiffSegment, DiffStatistics, SegmentKind};
pub use document::TextDocument;
pub use engine::DiffEngine;
pub use error::{DiffError, Side};
pub use render::{HtmlRenderer, InlineMarkupRenderer, Renderer};
pub use view::DiffView;

/// Main entry point for computing diffs between two texts
///
/// Either argument may be absent (`None`), in which case it is treated as
/// the empty text. The call is pure and cannot fail.
///
/// No token bound is applied and the LCS table takes O(m·n) memory, so
/// callers must bound their input or use [`DiffEngine::try_diff`] /
/// [`DiffView`] instead.
///
/// # Example
///
/// ```rust
/// use textdiffer_core::compute_diff;
///
/// let result = compute_diff(None::<&str>, None::<&str>);
/// assert!(result.is_empty());
/// ```
pub fn compute_diff<'a, 'b>(
    old: impl Into<TextDocument<'a>>,
    new: impl Into<TextDocument<'b>>,
) -> DiffResult {
    DiffEngine::default().diff(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_diff() {
        let result = compute_diff("hello world", "hello rust");
        assert!(!result.changed_segments().is_empty());
    }

    #[test]
    fn test_null_inputs() {
        assert!(compute_diff(None::<&str>, None::<&str>).is_empty());
        assert!(compute_diff("", "").is_empty());
    }

    #[test]
    fn test_owned_inputs() {
        let old = String::from("a b");
        let result = compute_diff(&old, Some(String::from("a c")));
        assert_eq!(result.new_text(), "a c");
    }
}
