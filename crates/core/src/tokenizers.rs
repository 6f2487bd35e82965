//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the built-in implementations used to
//! split a document into comparison units. Every tokenizer here is lossless:
//! concatenating the token texts reproduces the input byte for byte, which is
//! what lets a diff be turned back into either document.

/// Broad class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of non-whitespace (whitespace tokenizer) or letters (word tokenizer)
    Word,
    /// A run of whitespace, kept verbatim
    Whitespace,
    /// A run of ASCII punctuation
    Punctuation,
    /// A run of numeric characters
    Number,
    /// A single character
    Character,
}

/// A single comparison unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, exactly as it appears in the source
    pub text: String,

    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens.
    ///
    /// Implementations must never emit empty tokens and the token texts must
    /// concatenate back to `text`.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").field("name", &self.name()).finish()
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Splits text into alternating runs of whitespace and non-whitespace.
///
/// `"the  quick fox"` becomes `["the", "  ", "quick", " ", "fox"]`.
///
/// Whitespace is `char::is_whitespace` (Unicode `White_Space`), not the
/// JavaScript `\s` class: U+0085 counts as whitespace here and U+FEFF does not.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_runs(text, |ch| {
            if ch.is_whitespace() {
                TokenKind::Whitespace
            } else {
                TokenKind::Word
            }
        })
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Word tokenizer: separates words, numbers, punctuation and whitespace runs.
///
/// Unlike a search tokenizer nothing is dropped, so `"fox, jumps"` yields
/// `["fox", ",", " ", "jumps"]` and a changed comma does not mark the word
/// next to it as changed.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_runs(text, classify_char)
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Character-level tokenizer (one token per `char`)
#[derive(Debug, Clone, Default)]
pub struct CharacterTokenizer;

impl CharacterTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.chars()
            .map(|ch| Token::new(ch, TokenKind::Character))
            .collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

fn classify_char(ch: char) -> TokenKind {
    if ch.is_whitespace() {
        TokenKind::Whitespace
    } else if ch.is_ascii_punctuation() {
        TokenKind::Punctuation
    } else if ch.is_numeric() {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

/// Split `text` into maximal runs of characters sharing the same kind.
fn split_runs(text: &str, classify: impl Fn(char) -> TokenKind) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, TokenKind)> = None;

    for (pos, ch) in text.char_indices() {
        let kind = classify(ch);
        match current {
            Some((_, prev)) if prev == kind => {}
            Some((start, prev)) => {
                tokens.push(Token::new(&text[start..pos], prev));
                current = Some((pos, kind));
            }
            None => current = Some((pos, kind)),
        }
    }

    if let Some((start, kind)) = current {
        tokens.push(Token::new(&text[start..], kind));
    }

    tokens
}
