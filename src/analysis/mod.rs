//! Text analysis seams for fess-suggest.
//!
//! Tokenization itself runs engine-side; this module only carries the token
//! shape returned by analyze calls and the analyzer abstraction suggest
//! sources are written against.

pub mod analyzer;
pub mod token;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
