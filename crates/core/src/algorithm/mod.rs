//! Diff algorithms implementation
//!
//! Provides the `DiffAlgorithm` trait and the longest-common-subsequence
//! table the word-level diff is built on.
pub mod lcs;

pub use lcs::{backtrack, replace_all, LcsAlgorithm};

use crate::diff::DiffSegment;
use crate::tokenizers::Token;

/// Trait for diff algorithms
pub trait DiffAlgorithm: Send + Sync {
    /// Compute diff between two token sequences
    fn compute(&self, old: &[Token], new: &[Token]) -> Vec<DiffSegment>;

    fn name(&self) -> &str;
}

/// Dynamic-programming table of LCS lengths.
///
/// Cell `(i, j)` holds the length of the longest common subsequence of the
/// first `i` old tokens and the first `j` new tokens. Stored row-major in a
/// single buffer of `(rows) * (cols)` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Fill the table for `old` against `new`, comparing tokens by text.
    ///
    /// Returns `None` when the cell count does not fit in `usize`.
    pub fn build(old: &[Token], new: &[Token]) -> Option<Self> {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut cells = vec![0u32; cell_count(old.len(), new.len())?];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if old[i - 1].text == new[j - 1].text {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Some(Self { rows, cols, cells })
    }

    /// Cell `(i, j)`, `None` outside the table
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j).copied()
        } else {
            None
        }
    }

    /// Length of the LCS of the full sequences
    pub fn lcs_len(&self) -> u32 {
        self.cells.last().copied().unwrap_or(0)
    }

    /// `(rows, cols)`, i.e. `(old.len() + 1, new.len() + 1)` for a built table
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Cells needed for a table over `old_len` and `new_len` tokens
pub fn cell_count(old_len: usize, new_len: usize) -> Option<usize> {
    old_len
        .checked_add(1)?
        .checked_mul(new_len.checked_add(1)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tokenizers::{Tokenizer, WhitespaceTokenizer};

    pub fn create_tokens(text: &str) -> Vec<Token> {
        WhitespaceTokenizer.tokenize(text)
    }

    #[test]
    fn test_table_dimensions() {
        let table = LcsTable::build(&create_tokens("a b"), &create_tokens("a")).unwrap();
        assert_eq!(table.dimensions(), (4, 2));
        assert_eq!(table.get(0, 0), Some(0));
        assert_eq!(table.get(4, 0), None);
    }

    #[test]
    fn test_lcs_length() {
        let old = create_tokens("the quick brown fox");
        let new = create_tokens("the slow brown fox");
        let table = LcsTable::build(&old, &new).unwrap();

        // "the", " ", " ", "brown", " ", "fox"
        assert_eq!(table.lcs_len(), 6);
    }

    #[test]
    fn test_lcs_of_empty() {
        let table = LcsTable::build(&[], &create_tokens("a b")).unwrap();
        assert_eq!(table.lcs_len(), 0);
        assert_eq!(LcsTable::build(&[], &[]).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_cell_count_overflow() {
        assert_eq!(cell_count(0, 0), Some(1));
        assert_eq!(cell_count(2, 3), Some(12));
        assert_eq!(cell_count(usize::MAX, 0), None);
        assert_eq!(cell_count(usize::MAX / 2, 2), None);
    }
}
