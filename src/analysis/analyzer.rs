//! Analyzer abstraction for suggest sources.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::token::AnalyzeToken;
use crate::engine::SearchEngine;
use crate::error::{Result, SuggestError};
use crate::settings::{AnalyzerRole, SuggestSettings};

/// Trait for analyzers that turn document text into suggest tokens.
///
/// Implementations are free to run analysis anywhere; the default one defers
/// to the analyzers configured in the engine's suggest analyzer index.
pub trait SuggestAnalyzer: Send + Sync {
    /// Analyze the given text with the contents analyzer for `lang`.
    fn analyze(&self, text: &str, lang: &str) -> Result<Vec<AnalyzeToken>>;

    /// Analyze the given text with the contents-reading analyzer for `lang`.
    ///
    /// When the reading variant is not configured for `lang`, falls back to
    /// [`analyze`](Self::analyze) with the same arguments instead of failing
    /// the caller. Every other failure propagates.
    fn analyze_and_reading(&self, text: &str, lang: &str) -> Result<Vec<AnalyzeToken>>;
}

/// Analyzer backed by the engine-side contents analyzers.
///
/// Issues one tokenize round-trip per call in the success path; the
/// reading-variant fallback costs a second one.
pub struct DefaultContentsAnalyzer {
    engine: Arc<dyn SearchEngine>,
    settings: SuggestSettings,
    index_name: String,
}

impl DefaultContentsAnalyzer {
    /// Create a new contents analyzer against the given analyzer index.
    pub fn new<S: Into<String>>(
        engine: Arc<dyn SearchEngine>,
        settings: SuggestSettings,
        index_name: S,
    ) -> Self {
        DefaultContentsAnalyzer {
            engine,
            settings,
            index_name: index_name.into(),
        }
    }
}

impl SuggestAnalyzer for DefaultContentsAnalyzer {
    fn analyze(&self, text: &str, lang: &str) -> Result<Vec<AnalyzeToken>> {
        let analyzer = AnalyzerRole::Contents.analyzer_name(lang);
        self.engine.analyze(
            &self.index_name,
            &analyzer,
            text,
            self.settings.indices_timeout,
        )
    }

    fn analyze_and_reading(&self, text: &str, lang: &str) -> Result<Vec<AnalyzeToken>> {
        let analyzer = AnalyzerRole::ContentsReading.analyzer_name(lang);
        match self.engine.analyze(
            &self.index_name,
            &analyzer,
            text,
            self.settings.indices_timeout,
        ) {
            Err(SuggestError::UnknownAnalyzer { name }) => {
                debug!(analyzer = %name, "reading analyzer not configured, falling back to contents analyzer");
                self.analyze(text, lang)
            }
            other => other,
        }
    }
}

impl std::fmt::Debug for DefaultContentsAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultContentsAnalyzer")
            .field("index_name", &self.index_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;

    fn engine_with_analyzers(names: &[&str]) -> Arc<MemoryEngine> {
        let engine = Arc::new(MemoryEngine::new());
        let timeout = SuggestSettings::default().indices_timeout;
        engine
            .create_index("suggest_analyzer", "{}", None, timeout)
            .unwrap();
        for name in names {
            engine.register_analyzer("suggest_analyzer", name).unwrap();
        }
        engine
    }

    #[test]
    fn test_analyze_returns_tokens() {
        let engine = engine_with_analyzers(&["contents_analyzer_en"]);
        let analyzer = DefaultContentsAnalyzer::new(
            engine,
            SuggestSettings::default(),
            "suggest_analyzer",
        );

        let tokens = analyzer.analyze("hello world", "en").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_analyze_and_reading_falls_back() {
        // contents_reading_analyzer_en is missing, contents_analyzer_en exists
        let engine = engine_with_analyzers(&["contents_analyzer_en"]);
        let analyzer = DefaultContentsAnalyzer::new(
            engine,
            SuggestSettings::default(),
            "suggest_analyzer",
        );

        let direct = analyzer.analyze("text", "en").unwrap();
        let fallback = analyzer.analyze_and_reading("text", "en").unwrap();
        assert_eq!(fallback, direct);
    }

    #[test]
    fn test_analyze_and_reading_prefers_reading_variant() {
        let engine =
            engine_with_analyzers(&["contents_analyzer_en", "contents_reading_analyzer_en"]);
        let analyzer = DefaultContentsAnalyzer::new(
            engine,
            SuggestSettings::default(),
            "suggest_analyzer",
        );

        let tokens = analyzer.analyze_and_reading("hello world", "en").unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_other_engine_errors_propagate() {
        // No index at all: the engine rejects the call before analyzer lookup.
        let engine = Arc::new(MemoryEngine::new());
        let analyzer = DefaultContentsAnalyzer::new(
            engine,
            SuggestSettings::default(),
            "suggest_analyzer",
        );

        match analyzer.analyze_and_reading("text", "en") {
            Err(SuggestError::Engine(_)) => {}
            other => panic!("expected engine error, got {other:?}"),
        }
    }
}
