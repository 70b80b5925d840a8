//! Token type returned by engine-side analyze calls.
//!
//! # Examples
//!
//! ```
//! use fess_suggest::analysis::token::AnalyzeToken;
//!
//! let token = AnalyzeToken::with_offsets("hello", 0, 0, 5);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.end_offset, 5);
//! ```

use serde::{Deserialize, Serialize};

/// A single token produced by an engine-side analyzer.
///
/// Analyze responses are ordered sequences of these; only the shape matters
/// to this library, the linguistic content is entirely up to the analyzer
/// configuration held by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeToken {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,
}

impl AnalyzeToken {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        AnalyzeToken {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with explicit offsets into the original text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        AnalyzeToken {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = AnalyzeToken::new("suggest", 2);
        assert_eq!(token.text, "suggest");
        assert_eq!(token.position, 2);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = AnalyzeToken::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_token_serialization() {
        let token = AnalyzeToken::with_offsets("東京", 0, 0, 6);
        let json = serde_json::to_string(&token).unwrap();
        let back: AnalyzeToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
