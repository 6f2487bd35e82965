//! Guarded diff for display
//!
//! A view never fails: if the engine refuses the input, the two texts are
//! kept so they can still be shown side by side without annotation.

use crate::diff::DiffResult;
use crate::document::TextDocument;
use crate::engine::DiffEngine;
use crate::render::Renderer;

/// Either an annotated diff or the raw texts with the reason none was made
#[derive(Debug, Clone, PartialEq)]
pub enum DiffView {
    Annotated(DiffResult),
    Unavailable {
        old: String,
        new: String,
        reason: String,
    },
}

impl DiffView {
    /// Run `engine.try_diff` and fall back to the unannotated texts on error
    pub fn build<'a, 'b>(
        engine: &DiffEngine,
        old: impl Into<TextDocument<'a>>,
        new: impl Into<TextDocument<'b>>,
    ) -> Self {
        let (old, new): (TextDocument, TextDocument) = (old.into(), new.into());

        match engine.try_diff(old.as_str(), new.as_str()) {
            Ok(result) => DiffView::Annotated(result),
            Err(err) => {
                tracing::warn!(error = %err, "diff unavailable, showing texts unannotated");
                DiffView::Unavailable {
                    old: old.as_str().to_string(),
                    new: new.as_str().to_string(),
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DiffView::Annotated(_))
    }

    pub fn result(&self) -> Option<&DiffResult> {
        match self {
            DiffView::Annotated(result) => Some(result),
            DiffView::Unavailable { .. } => None,
        }
    }

    pub fn render(&self, renderer: &dyn Renderer) -> String {
        match self {
            DiffView::Annotated(result) => renderer.render(&result.segments),
            DiffView::Unavailable { old, new, .. } => renderer.render_unavailable(old, new),
        }
    }
}
