//! Diff result types and structures

use crate::error::DiffError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present in both documents
    Common,
    /// Only in the new document
    Added,
    /// Only in the old document
    Removed,
}

impl SegmentKind {
    /// Whether the segment belongs to the old document
    pub fn in_old(self) -> bool {
        matches!(self, SegmentKind::Common | SegmentKind::Removed)
    }

    /// Whether the segment belongs to the new document
    pub fn in_new(self) -> bool {
        matches!(self, SegmentKind::Common | SegmentKind::Added)
    }

    pub fn is_change(self) -> bool {
        self != SegmentKind::Common
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Common => "common",
            SegmentKind::Added => "added",
            SegmentKind::Removed => "removed",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified span of output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn common(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Common, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, text)
    }

    /// Get a human-readable description of this segment
    pub fn description(&self) -> String {
        match self.kind {
            SegmentKind::Common => format!("Common: {:?}", self.text),
            SegmentKind::Added => format!("Added: {:?}", self.text),
            SegmentKind::Removed => format!("Removed: {:?}", self.text),
        }
    }
}

/// Statistics about the diff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffStatistics {
    /// Bytes in the old document
    pub old_length: usize,

    /// Bytes in the new document
    pub new_length: usize,

    pub common: usize,
    pub added: usize,
    pub removed: usize,

    /// Share of segments that are changes (0.0 to 1.0)
    pub change_ratio: f64,
}

impl DiffStatistics {
    /// Tally the segments of a finished diff
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut stats = Self::default();

        for segment in segments {
            match segment.kind {
                SegmentKind::Common => {
                    stats.common += 1;
                    stats.old_length += segment.text.len();
                    stats.new_length += segment.text.len();
                }
                SegmentKind::Added => {
                    stats.added += 1;
                    stats.new_length += segment.text.len();
                }
                SegmentKind::Removed => {
                    stats.removed += 1;
                    stats.old_length += segment.text.len();
                }
            }
        }

        let total = stats.total_segments();
        stats.change_ratio = if total > 0 {
            (stats.added + stats.removed) as f64 / total as f64
        } else {
            0.0
        };

        stats
    }

    pub fn total_segments(&self) -> usize {
        self.common + self.added + self.removed
    }
}

/// Complete diff result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Ordered segments, left to right
    pub segments: Vec<DiffSegment>,

    pub statistics: DiffStatistics,
}

impl DiffResult {
    pub fn new(segments: Vec<DiffSegment>) -> Self {
        let statistics = DiffStatistics::from_segments(&segments);
        Self {
            segments,
            statistics,
        }
    }

    /// Rebuild the old document from common and removed segments
    pub fn old_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind.in_old())
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Rebuild the new document from common and added segments
    pub fn new_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind.in_new())
            .map(|s| s.text.as_str())
            .collect()
    }

    /// True when nothing was added or removed
    pub fn is_identical(&self) -> bool {
        self.segments.iter().all(|s| !s.kind.is_change())
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Get only the changed segments (exclude Common)
    pub fn changed_segments(&self) -> Vec<&DiffSegment> {
        self.segments.iter().filter(|s| s.kind.is_change()).collect()
    }

    /// Merge adjacent segments of the same kind.
    ///
    /// Both reconstructions are unchanged; renderers get one span per run
    /// instead of one per token.
    pub fn coalesced(&self) -> DiffResult {
        DiffResult::new(coalesce_segments(self.segments.iter().cloned()))
    }

    pub fn into_segments(self) -> Vec<DiffSegment> {
        self.segments
    }

    /// Serialize the segments as a JSON array of `{ kind, text }`
    pub fn to_json(&self) -> Result<String, DiffError> {
        Ok(serde_json::to_string(&self.segments)?)
    }

    /// Get a summary of the diff
    pub fn summary(&self) -> String {
        format!(
            "Diff Summary: {} common, {} added, {} removed. Change: {:.1}%",
            self.statistics.common,
            self.statistics.added,
            self.statistics.removed,
            self.statistics.change_ratio * 100.0
        )
    }
}

impl IntoIterator for DiffResult {
    type Item = DiffSegment;
    type IntoIter = std::vec::IntoIter<DiffSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffSegment;
    type IntoIter = std::slice::Iter<'a, DiffSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diff Result ===")?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "\nSegments:")?;

        for (i, segment) in self.segments.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, segment.description())?;
        }

        Ok(())
    }
}

pub(crate) fn coalesce_segments(segments: impl IntoIterator<Item = DiffSegment>) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::new();

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.kind == segment.kind => last.text.push_str(&segment.text),
            _ => merged.push(segment),
        }
    }

    merged
}
