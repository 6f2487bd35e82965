//! Configuration for the diff engine

use crate::error::DiffError;
use crate::tokenizers::{CharacterTokenizer, Tokenizer, WhitespaceTokenizer, WordTokenizer};
use serde::{Deserialize, Serialize};

/// Token bound used by the bounded presets.
///
/// The LCS table is `(m + 1) * (n + 1)` cells, so 4096 tokens per side keeps
/// it at roughly 64 MiB in the worst case.
pub const DEFAULT_MAX_TOKENS: usize = 4096;

/// Unit of comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Alternating whitespace / non-whitespace runs (default)
    #[default]
    Whitespace,
    /// Words, numbers, punctuation and whitespace as separate runs
    Word,
    /// Single characters
    Character,
}

impl Granularity {
    pub fn tokenizer(self) -> Box<dyn Tokenizer> {
        match self {
            Granularity::Whitespace => Box::new(WhitespaceTokenizer::new()),
            Granularity::Word => Box::new(WordTokenizer::new()),
            Granularity::Character => Box::new(CharacterTokenizer::new()),
        }
    }
}

/// Configuration for diff computation
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {
    /// Tokenizer to use; whitespace runs when unset
    pub tokenizer: Option<Box<dyn Tokenizer>>,

    /// Maximum tokens per document accepted by `DiffEngine::try_diff`
    pub max_tokens: Option<usize>,

    /// Merge adjacent segments of the same kind
    pub coalesce: bool,
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set the tokenizer from a granularity
    pub fn with_granularity(self, granularity: Granularity) -> Self {
        self.with_tokenizer(granularity.tokenizer())
    }

    /// Bound the number of tokens per document
    pub fn with_max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = Some(limit);
        self
    }

    /// Remove the token bound
    pub fn unbounded(mut self) -> Self {
        self.max_tokens = None;
        self
    }

    /// Set whether adjacent segments of the same kind are merged
    pub fn with_coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Default tokenizer with the default token bound
    pub fn bounded() -> Self {
        Self::new().with_max_tokens(DEFAULT_MAX_TOKENS)
    }

    /// Bounded and coalesced, for rendering
    pub fn display() -> Self {
        Self::bounded().with_coalesce(true)
    }

    pub(crate) fn tokenizer(&self) -> Box<dyn Tokenizer> {
        self.tokenizer
            .clone()
            .unwrap_or_else(|| Box::new(WhitespaceTokenizer::new()))
    }
}

/// Plain-data form of `DiffConfig`, loadable from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    pub granularity: Granularity,
    pub max_tokens: Option<usize>,
    pub coalesce: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            coalesce: false,
        }
    }
}

impl DiffOptions {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, DiffError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, DiffError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_config(self) -> DiffConfig {
        DiffConfig {
            tokenizer: Some(self.granularity.tokenizer()),
            max_tokens: self.max_tokens,
            coalesce: self.coalesce,
        }
    }
}

impl From<DiffOptions> for DiffConfig {
    fn from(options: DiffOptions) -> Self {
        options.into_config()
    }
}
