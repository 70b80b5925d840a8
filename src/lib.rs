//! # Fess Suggest
//!
//! Suggest support library for the Fess search server.
//!
//! ## Features
//!
//! - Deterministic analyzer naming across 47 languages and five roles
//! - Idempotent provisioning of the analyzer settings index from templates
//! - Live validation of the analyzer configuration held by the engine
//! - Pluggable engine backends behind a synchronous trait
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use fess_suggest::engine::MemoryEngine;
//! use fess_suggest::settings::{AnalyzerRole, AnalyzerSettings, SuggestSettings};
//!
//! let engine = Arc::new(MemoryEngine::new());
//! let settings = AnalyzerSettings::new(engine, SuggestSettings::default(), "fess_suggest");
//!
//! settings.init().unwrap();
//! assert_eq!(settings.analyzer_settings_index_name(), "fess_suggest_analyzer");
//! assert_eq!(
//!     settings.analyzer_name(AnalyzerRole::Contents, "ja"),
//!     "contents_analyzer_ja"
//! );
//! ```

pub mod analysis;
pub mod engine;
pub mod error;
pub mod settings;

pub mod prelude {
    pub use crate::analysis::analyzer::{DefaultContentsAnalyzer, SuggestAnalyzer};
    pub use crate::analysis::token::AnalyzeToken;
    pub use crate::engine::{MemoryEngine, SearchEngine};
    pub use crate::error::{Result, SuggestError};
    pub use crate::settings::{AnalyzerRole, AnalyzerSettings, SuggestSettings};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
