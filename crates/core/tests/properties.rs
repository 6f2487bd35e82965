//! Property-based tests for the word-level diff
//!
//! These tests use proptest to check the reconstruction guarantees over
//! arbitrary inputs: small alphabets to force many equal tokens and ties,
//! and arbitrary unicode to exercise whitespace classification.

use proptest::prelude::*;
use textdiffer_core::algorithm::LcsTable;
use textdiffer_core::tokenizers::{Tokenizer, WhitespaceTokenizer};
use textdiffer_core::{compute_diff, DiffConfig, DiffEngine, DiffResult, Granularity, SegmentKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn prose() -> impl Strategy<Value = String> {
    // few distinct words so alignments are ambiguous
    "([ab]{1,2}|[ \t\n]{1,2}){0,12}"
}

fn concat(result: &DiffResult, keep: impl Fn(SegmentKind) -> bool) -> String {
    result
        .segments
        .iter()
        .filter(|s| keep(s.kind))
        .map(|s| s.text.as_str())
        .collect()
}

// =============================================================================
// Reconstruction
// =============================================================================

proptest! {
    #[test]
    fn prop_reconstructs_old(a in prose(), b in prose()) {
        let result = compute_diff(a.as_str(), b.as_str());
        prop_assert_eq!(concat(&result, |k| k != SegmentKind::Added), a);
    }

    #[test]
    fn prop_reconstructs_new(a in prose(), b in prose()) {
        let result = compute_diff(a.as_str(), b.as_str());
        prop_assert_eq!(concat(&result, |k| k != SegmentKind::Removed), b);
    }

    #[test]
    fn prop_reconstructs_unicode(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let result = compute_diff(a.as_str(), b.as_str());
        prop_assert_eq!(result.old_text(), a);
        prop_assert_eq!(result.new_text(), b);
    }

    #[test]
    fn prop_reconstructs_for_every_granularity(a in prose(), b in prose()) {
        for granularity in [Granularity::Whitespace, Granularity::Word, Granularity::Character] {
            let engine = DiffEngine::new(DiffConfig::new().with_granularity(granularity));
            let result = engine.diff(a.as_str(), b.as_str());
            prop_assert_eq!(result.old_text(), a.clone());
            prop_assert_eq!(result.new_text(), b.clone());
        }
    }

    // =========================================================================
    // Identity and empty sides
    // =========================================================================

    #[test]
    fn prop_identity_is_all_common(a in "\\PC{0,32}") {
        let result = compute_diff(a.as_str(), a.as_str());
        prop_assert!(result.segments.iter().all(|s| s.kind == SegmentKind::Common));
        prop_assert_eq!(result.old_text(), a);
    }

    #[test]
    fn prop_empty_old_is_all_added(b in prose()) {
        let result = compute_diff("", b.as_str());
        prop_assert!(result.segments.iter().all(|s| s.kind == SegmentKind::Added));
        prop_assert_eq!(result.new_text(), b);
    }

    #[test]
    fn prop_empty_new_is_all_removed(a in prose()) {
        let result = compute_diff(a.as_str(), "");
        prop_assert!(result.segments.iter().all(|s| s.kind == SegmentKind::Removed));
        prop_assert_eq!(result.old_text(), a);
    }

    // =========================================================================
    // Determinism, minimality and coalescing
    // =========================================================================

    #[test]
    fn prop_deterministic(a in prose(), b in prose()) {
        let first = compute_diff(a.as_str(), b.as_str());
        let second = compute_diff(a.as_str(), b.as_str());
        prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn prop_common_segments_form_an_lcs(a in prose(), b in prose()) {
        let old = WhitespaceTokenizer.tokenize(&a);
        let new = WhitespaceTokenizer.tokenize(&b);
        let result = compute_diff(a.as_str(), b.as_str());

        prop_assert_eq!(result.statistics.common, LcsTable::build(&old, &new).map_or(0, |t| t.lcs_len() as usize));
        prop_assert_eq!(result.statistics.common + result.statistics.removed, old.len());
        prop_assert_eq!(result.statistics.common + result.statistics.added, new.len());
    }

    #[test]
    fn prop_coalesced_preserves_texts(a in prose(), b in prose()) {
        let merged = compute_diff(a.as_str(), b.as_str()).coalesced();
        prop_assert_eq!(merged.old_text(), a);
        prop_assert_eq!(merged.new_text(), b);
        prop_assert!(merged.segments.windows(2).all(|w| w[0].kind != w[1].kind));
    }

    #[test]
    fn prop_limit_matches_token_counts(a in prose(), b in prose(), limit in 0usize..16) {
        let engine = DiffEngine::new(DiffConfig::new().with_max_tokens(limit));
        let old_len = WhitespaceTokenizer.tokenize(&a).len();
        let new_len = WhitespaceTokenizer.tokenize(&b).len();

        let outcome = engine.try_diff(a.as_str(), b.as_str());
        prop_assert_eq!(outcome.is_ok(), old_len <= limit && new_len <= limit);
    }
}
