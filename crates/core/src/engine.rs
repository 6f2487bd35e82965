//! Main diff engine that orchestrates the diff process

use crate::algorithm::{DiffAlgorithm, LcsAlgorithm};
use crate::config::DiffConfig;
use crate::diff::{coalesce_segments, DiffResult};
use crate::document::TextDocument;
use crate::error::{DiffError, Side};
use crate::tokenizers::Token;

/// The main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the diff between two documents, enforcing the token bound.
    ///
    /// 1. Tokenize both documents
    /// 2. Reject either side if it exceeds `max_tokens`
    /// 3. Run the LCS diff
    /// 4. Optionally merge adjacent segments of the same kind
    pub fn try_diff<'a, 'b>(
        &self,
        old: impl Into<TextDocument<'a>>,
        new: impl Into<TextDocument<'b>>,
    ) -> Result<DiffResult, DiffError> {
        let (old, new): (TextDocument, TextDocument) = (old.into(), new.into());
        let (old_tokens, new_tokens) = self.tokenize(&old, &new);

        if let Some(limit) = self.config.max_tokens {
            check_limit(Side::Old, &old_tokens, limit)?;
            check_limit(Side::New, &new_tokens, limit)?;
        }

        Ok(self.run(&old_tokens, &new_tokens))
    }

    /// Compute the diff between two documents.
    ///
    /// Never fails: the token bound is not applied here, so callers diffing
    /// untrusted input should prefer `try_diff`.
    pub fn diff<'a, 'b>(
        &self,
        old: impl Into<TextDocument<'a>>,
        new: impl Into<TextDocument<'b>>,
    ) -> DiffResult {
        let (old, new): (TextDocument, TextDocument) = (old.into(), new.into());
        let (old_tokens, new_tokens) = self.tokenize(&old, &new);
        self.run(&old_tokens, &new_tokens)
    }

    fn tokenize(&self, old: &TextDocument<'_>, new: &TextDocument<'_>) -> (Vec<Token>, Vec<Token>) {
        let tokenizer = self.config.tokenizer();
        let old_tokens = tokenizer.tokenize(old.as_str());
        let new_tokens = tokenizer.tokenize(new.as_str());

        tracing::debug!(
            tokenizer = tokenizer.name(),
            old_tokens = old_tokens.len(),
            new_tokens = new_tokens.len(),
            "tokenized documents"
        );

        (old_tokens, new_tokens)
    }

    fn run(&self, old: &[Token], new: &[Token]) -> DiffResult {
        let segments = LcsAlgorithm::new().compute(old, new);

        if self.config.coalesce {
            DiffResult::new(coalesce_segments(segments))
        } else {
            DiffResult::new(segments)
        }
    }
}

fn check_limit(side: Side, tokens: &[Token], limit: usize) -> Result<(), DiffError> {
    if tokens.len() > limit {
        return Err(DiffError::InputTooLarge {
            side,
            tokens: tokens.len(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Granularity;
    use crate::diff::{DiffSegment, SegmentKind};

    #[test]
    fn test_basic_diff() {
        let engine = DiffEngine::default();
        let result = engine.diff("hello world", "hello rust");

        assert!(!result.is_identical());
        assert_eq!(result.statistics.added, 1);
        assert_eq!(result.statistics.removed, 1);
    }

    #[test]
    fn test_identical_text() {
        let engine = DiffEngine::default();
        let result = engine.diff("hello world", "hello world");

        assert!(result.is_identical());
        assert_eq!(result.statistics.change_ratio, 0.0);
        assert_eq!(result.old_text(), "hello world");
    }

    #[test]
    fn test_accepts_absent_documents() {
        let engine = DiffEngine::default();
        let result = engine.diff(None::<&str>, Some("new text"));

        assert_eq!(result.new_text(), "new text");
        assert!(result.segments.iter().all(|s| s.kind == SegmentKind::Added));
    }

    #[test]
    fn test_limit_enforced() {
        let engine = DiffEngine::new(DiffConfig::new().with_max_tokens(3));

        // "a b" is three tokens
        assert!(engine.try_diff("a b", "a c").is_ok());

        let err = engine.try_diff("a b", "a b c").unwrap_err();
        assert!(matches!(
            err,
            DiffError::InputTooLarge {
                side: Side::New,
                tokens: 5,
                limit: 3
            }
        ));

        let err = engine.try_diff("a b c", "").unwrap_err();
        assert!(matches!(err, DiffError::InputTooLarge { side: Side::Old, .. }));
    }

    #[test]
    fn test_diff_ignores_limit() {
        let engine = DiffEngine::new(DiffConfig::new().with_max_tokens(1));
        let result = engine.diff("a b c", "a b d");

        assert_eq!(result.new_text(), "a b d");
    }

    #[test]
    fn test_coalesce() {
        let engine = DiffEngine::new(DiffConfig::new().with_coalesce(true));
        let result = engine.diff("keep this part", "keep that bit");

        assert_eq!(
            result.segments,
            vec![
                DiffSegment::common("keep "),
                DiffSegment::removed("this"),
                DiffSegment::added("that"),
                DiffSegment::common(" "),
                DiffSegment::removed("part"),
                DiffSegment::added("bit"),
            ]
        );
    }

    #[test]
    fn test_character_granularity() {
        let engine = DiffEngine::new(
            DiffConfig::new()
                .with_granularity(Granularity::Character)
                .with_coalesce(true),
        );
        let result = engine.diff("color", "colour");

        assert_eq!(
            result.segments,
            vec![
                DiffSegment::common("colo"),
                DiffSegment::added("u"),
                DiffSegment::common("r"),
            ]
        );
    }
}
