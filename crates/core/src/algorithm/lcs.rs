use crate::algorithm::{DiffAlgorithm, LcsTable};
use crate::diff::{DiffSegment, SegmentKind};
use crate::tokenizers::Token;

/// Word-level LCS diff.
///
/// When an insertion and a deletion are equally good at the same point the
/// backtrack consumes the new side first, so in the final left-to-right
/// output a removed token precedes the added token that replaces it.
#[derive(Debug, Clone, Default)]
pub struct LcsAlgorithm;

impl LcsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsAlgorithm {
    fn compute(&self, old: &[Token], new: &[Token]) -> Vec<DiffSegment> {
        let Some(table) = LcsTable::build(old, new) else {
            tracing::warn!(
                old_tokens = old.len(),
                new_tokens = new.len(),
                "lcs table too large, marking everything as replaced"
            );
            return replace_all(old, new);
        };
        tracing::trace!(
            old_tokens = old.len(),
            new_tokens = new.len(),
            lcs = table.lcs_len(),
            "built lcs table"
        );
        backtrack(&table, old, new)
    }

    fn name(&self) -> &str {
        "lcs"
    }
}

/// Every old token removed, then every new token added.
///
/// Still reconstructs both documents; used when no table can be built.
pub fn replace_all(old: &[Token], new: &[Token]) -> Vec<DiffSegment> {
    old.iter()
        .map(|t| DiffSegment::new(SegmentKind::Removed, t.text.as_str()))
        .chain(new.iter().map(|t| DiffSegment::new(SegmentKind::Added, t.text.as_str())))
        .collect()
}

/// Walk `table` from the bottom-right corner back to the origin and emit
/// segments in document order.
///
/// If the table does not cover the token slices the walk stops at the first
/// missing cell and the segments collected so far are returned.
pub fn backtrack(table: &LcsTable, old: &[Token], new: &[Token]) -> Vec<DiffSegment> {
    let mut segments = Vec::with_capacity(old.len() + new.len());
    let mut i = old.len();
    let mut j = new.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1].text == new[j - 1].text {
            segments.push(DiffSegment::common(old[i - 1].text.as_str()));
            i -= 1;
            j -= 1;
            continue;
        }

        let left = if j > 0 { table.get(i, j - 1) } else { None };
        let up = if i > 0 { table.get(i - 1, j) } else { None };

        match (left, up) {
            (Some(_), None) if i == 0 => {
                segments.push(DiffSegment::added(new[j - 1].text.as_str()));
                j -= 1;
            }
            (Some(left), Some(up)) if left >= up => {
                segments.push(DiffSegment::added(new[j - 1].text.as_str()));
                j -= 1;
            }
            (None, Some(_)) if j == 0 => {
                segments.push(DiffSegment::removed(old[i - 1].text.as_str()));
                i -= 1;
            }
            (Some(left), Some(up)) if left < up => {
                segments.push(DiffSegment::removed(old[i - 1].text.as_str()));
                i -= 1;
            }
            _ => {
                tracing::warn!(
                    i,
                    j,
                    emitted = segments.len(),
                    "lcs table does not match token sequences, returning partial diff"
                );
                break;
            }
        }
    }

    segments.reverse();
    segments
}
