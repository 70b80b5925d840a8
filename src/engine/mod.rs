//! Search engine seam for fess-suggest.
//!
//! The suggest library never talks to an index engine directly; it goes
//! through the [`SearchEngine`] trait, which covers the handful of admin
//! operations the settings layer needs. Every call is bounded by a
//! caller-supplied timeout and returns synchronously.
//!
//! [`MemoryEngine`] is the in-process implementation used for embedding and
//! testing; bindings for a real engine live outside this crate.

pub mod memory;

pub use memory::MemoryEngine;

use std::time::Duration;

use serde_json::Value;

use crate::analysis::token::AnalyzeToken;
use crate::error::Result;

/// A trait for engines that host the suggest analyzer index.
///
/// Implementations map their wire-level failures onto
/// [`SuggestError`](crate::error::SuggestError); a tokenize call naming an
/// unconfigured analyzer must yield
/// [`SuggestError::UnknownAnalyzer`](crate::error::SuggestError::UnknownAnalyzer)
/// so callers can tell it apart from transport failures.
pub trait SearchEngine: Send + Sync + std::fmt::Debug {
    /// Check whether the named index exists.
    fn index_exists(&self, index: &str, timeout: Duration) -> Result<bool>;

    /// Create (or update) the named index from a raw JSON settings document,
    /// with an optional raw JSON mapping document.
    fn create_index(
        &self,
        index: &str,
        settings: &str,
        mapping: Option<&str>,
        timeout: Duration,
    ) -> Result<()>;

    /// Delete the named index.
    fn delete_index(&self, index: &str, timeout: Duration) -> Result<()>;

    /// Get the settings document of the named index.
    fn index_settings(&self, index: &str, timeout: Duration) -> Result<Value>;

    /// Tokenize `text` with the named analyzer of the named index.
    fn analyze(
        &self,
        index: &str,
        analyzer: &str,
        text: &str,
        timeout: Duration,
    ) -> Result<Vec<AnalyzeToken>>;
}
