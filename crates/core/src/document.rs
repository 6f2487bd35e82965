//! Input documents
//!
//! A `TextDocument` is one side of a comparison. Absent input (`None`) is
//! treated as the empty document so the diff can always be computed while
//! the text being edited is transiently missing.

use std::borrow::Cow;
use std::fmt;

/// One immutable version of a text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDocument<'a> {
    text: Cow<'a, str>,
}

impl<'a> TextDocument<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into() }
    }

    /// The empty document
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_owned(self) -> TextDocument<'static> {
        TextDocument {
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl<'a> From<&'a str> for TextDocument<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a String> for TextDocument<'a> {
    fn from(text: &'a String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<String> for TextDocument<'static> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<'a> From<Cow<'a, str>> for TextDocument<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::new(text)
    }
}

impl<'a, T> From<Option<T>> for TextDocument<'a>
where
    T: Into<TextDocument<'a>>,
{
    fn from(text: Option<T>) -> Self {
        text.map(Into::into).unwrap_or_default()
    }
}

impl AsRef<str> for TextDocument<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TextDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
