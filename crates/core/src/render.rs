//! Rendering of diff segments
//!
//! Renderers turn a segment sequence into display text. Common text is
//! always emitted verbatim (after escaping, for HTML); only changed text is
//! decorated.

use crate::diff::{DiffSegment, SegmentKind};

/// Trait for segment renderers
pub trait Renderer: Send + Sync {
    /// Render an annotated diff
    fn render(&self, segments: &[DiffSegment]) -> String;

    /// Render both texts without annotation, used when no diff is available
    fn render_unavailable(&self, old: &str, new: &str) -> String;

    fn name(&self) -> &str;
}

/// Plain-text renderer using `[-removed-]` and `{+added+}` markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMarkupRenderer {
    pub removed_open: String,
    pub removed_close: String,
    pub added_open: String,
    pub added_close: String,
}

impl Default for InlineMarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineMarkupRenderer {
    pub fn new() -> Self {
        Self {
            removed_open: "[-".to_string(),
            removed_close: "-]".to_string(),
            added_open: "{+".to_string(),
            added_close: "+}".to_string(),
        }
    }

    pub fn with_removed_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.removed_open = open.into();
        self.removed_close = close.into();
        self
    }

    pub fn with_added_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.added_open = open.into();
        self.added_close = close.into();
        self
    }
}

impl Renderer for InlineMarkupRenderer {
    fn render(&self, segments: &[DiffSegment]) -> String {
        let mut output = String::new();

        for segment in segments {
            match segment.kind {
                SegmentKind::Common => output.push_str(&segment.text),
                SegmentKind::Removed => {
                    output.push_str(&self.removed_open);
                    output.push_str(&segment.text);
                    output.push_str(&self.removed_close);
                }
                SegmentKind::Added => {
                    output.push_str(&self.added_open);
                    output.push_str(&segment.text);
                    output.push_str(&self.added_close);
                }
            }
        }

        output
    }

    fn render_unavailable(&self, old: &str, new: &str) -> String {
        format!("--- old\n{}\n+++ new\n{}\n", old, new)
    }

    fn name(&self) -> &str {
        "inline"
    }
}

/// HTML renderer: `<del>` for removed, `<ins>` for added, escaped text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
    /// Prefix for the `class` attribute, e.g. `"diff"` gives `class="diff-added"`
    pub class_prefix: Option<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    fn open_tag(&self, tag: &str, kind: SegmentKind) -> String {
        match &self.class_prefix {
            Some(prefix) => format!("<{} class=\"{}-{}\">", tag, escape_html(prefix), kind),
            None => format!("<{}>", tag),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, segments: &[DiffSegment]) -> String {
        let mut output = String::new();

        for segment in segments {
            let text = escape_html(&segment.text);
            match segment.kind {
                SegmentKind::Common => output.push_str(&text),
                SegmentKind::Removed => {
                    output.push_str(&self.open_tag("del", segment.kind));
                    output.push_str(&text);
                    output.push_str("</del>");
                }
                SegmentKind::Added => {
                    output.push_str(&self.open_tag("ins", segment.kind));
                    output.push_str(&text);
                    output.push_str("</ins>");
                }
            }
        }

        output
    }

    fn render_unavailable(&self, old: &str, new: &str) -> String {
        format!(
            "<div class=\"diff-unavailable\"><pre class=\"diff-old\">{}</pre><pre class=\"diff-new\">{}</pre></div>",
            escape_html(old),
            escape_html(new)
        )
    }

    fn name(&self) -> &str {
        "html"
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
