//! In-memory engine implementation for testing and embedding.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use parking_lot::RwLock;
use serde_json::Value;

use crate::analysis::token::AnalyzeToken;
use crate::engine::SearchEngine;
use crate::error::{Result, SuggestError};

/// An in-memory search engine.
///
/// Holds index settings and the set of analyzer names each index has
/// configured. Analyzer names are picked up from the `analysis.analyzer`
/// section of created settings documents; analyzers configured out-of-band
/// can be added with [`register_analyzer`](MemoryEngine::register_analyzer).
///
/// `analyze` splits on whitespace regardless of the analyzer name, so probes
/// and adapter calls have an observable token stream without any linguistic
/// machinery behind them.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    indices: RwLock<HashMap<String, IndexState>>,
    create_calls: RwLock<usize>,
}

#[derive(Debug)]
struct IndexState {
    settings: Value,
    mapping: Option<Value>,
    analyzers: HashSet<String>,
}

impl MemoryEngine {
    /// Create a new empty engine.
    pub fn new() -> Self {
        MemoryEngine::default()
    }

    /// Number of create-index calls issued so far.
    pub fn create_calls(&self) -> usize {
        *self.create_calls.read()
    }

    /// Mapping document of an existing index, if one was supplied.
    pub fn index_mapping(&self, index: &str) -> Result<Option<Value>> {
        let indices = self.indices.read();
        let state = indices
            .get(index)
            .ok_or_else(|| SuggestError::engine(format!("no such index: {index}")))?;
        Ok(state.mapping.clone())
    }

    /// Register an analyzer name on an existing index.
    pub fn register_analyzer(&self, index: &str, analyzer: &str) -> Result<()> {
        let mut indices = self.indices.write();
        let state = indices
            .get_mut(index)
            .ok_or_else(|| SuggestError::engine(format!("no such index: {index}")))?;
        state.analyzers.insert(analyzer.to_string());
        Ok(())
    }

    /// Analyzer names found in the `analysis.analyzer` section of a settings
    /// document, at the top level or under an `index` wrapper.
    fn analyzer_names_of(settings: &Value) -> HashSet<String> {
        settings
            .pointer("/analysis/analyzer")
            .or_else(|| settings.pointer("/index/analysis/analyzer"))
            .and_then(Value::as_object)
            .map(|analyzers| analyzers.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl SearchEngine for MemoryEngine {
    fn index_exists(&self, index: &str, _timeout: Duration) -> Result<bool> {
        Ok(self.indices.read().contains_key(index))
    }

    fn create_index(
        &self,
        index: &str,
        settings: &str,
        mapping: Option<&str>,
        _timeout: Duration,
    ) -> Result<()> {
        let settings: Value = serde_json::from_str(settings)?;
        let mapping: Option<Value> = mapping.map(serde_json::from_str).transpose()?;
        let analyzers = Self::analyzer_names_of(&settings);

        let mut indices = self.indices.write();
        match indices.get_mut(index) {
            // Re-creation acts as an upsert: the suggest settings layer pushes
            // updated analyzer configuration through the same create call.
            Some(state) => {
                state.settings = settings;
                if mapping.is_some() {
                    state.mapping = mapping;
                }
                state.analyzers.extend(analyzers);
            }
            None => {
                indices.insert(
                    index.to_string(),
                    IndexState {
                        settings,
                        mapping,
                        analyzers,
                    },
                );
            }
        }
        *self.create_calls.write() += 1;
        Ok(())
    }

    fn delete_index(&self, index: &str, _timeout: Duration) -> Result<()> {
        let mut indices = self.indices.write();
        indices
            .remove(index)
            .ok_or_else(|| SuggestError::engine(format!("no such index: {index}")))?;
        Ok(())
    }

    fn index_settings(&self, index: &str, _timeout: Duration) -> Result<Value> {
        let indices = self.indices.read();
        let state = indices
            .get(index)
            .ok_or_else(|| SuggestError::engine(format!("no such index: {index}")))?;
        Ok(state.settings.clone())
    }

    fn analyze(
        &self,
        index: &str,
        analyzer: &str,
        text: &str,
        _timeout: Duration,
    ) -> Result<Vec<AnalyzeToken>> {
        let indices = self.indices.read();
        let state = indices
            .get(index)
            .ok_or_else(|| SuggestError::engine(format!("no such index: {index}")))?;
        if !state.analyzers.contains(analyzer) {
            return Err(SuggestError::unknown_analyzer(analyzer));
        }

        let tokens = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| {
                let start = word.as_ptr() as usize - text.as_ptr() as usize;
                AnalyzeToken::with_offsets(word, position, start, start + word.len())
            })
            .collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[test]
    fn test_create_and_exists() {
        let engine = MemoryEngine::new();
        assert!(!engine.index_exists("suggest_analyzer", TIMEOUT).unwrap());

        engine
            .create_index("suggest_analyzer", "{}", None, TIMEOUT)
            .unwrap();
        assert!(engine.index_exists("suggest_analyzer", TIMEOUT).unwrap());
        assert_eq!(engine.create_calls(), 1);
    }

    #[test]
    fn test_analyzers_from_settings_document() {
        let engine = MemoryEngine::new();
        let settings = r#"{
            "analysis": {
                "analyzer": {
                    "contents_analyzer": { "tokenizer": "standard" },
                    "contents_analyzer_ja": { "tokenizer": "japanese_tokenizer" }
                }
            }
        }"#;
        engine
            .create_index("suggest_analyzer", settings, None, TIMEOUT)
            .unwrap();

        let tokens = engine
            .analyze("suggest_analyzer", "contents_analyzer_ja", "a b", TIMEOUT)
            .unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_unknown_analyzer() {
        let engine = MemoryEngine::new();
        engine
            .create_index("suggest_analyzer", "{}", None, TIMEOUT)
            .unwrap();

        match engine.analyze("suggest_analyzer", "reading_analyzer_xx", "text", TIMEOUT) {
            Err(SuggestError::UnknownAnalyzer { name }) => {
                assert_eq!(name, "reading_analyzer_xx");
            }
            other => panic!("expected unknown analyzer, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_index_is_engine_error() {
        let engine = MemoryEngine::new();
        match engine.analyze("nope", "contents_analyzer", "text", TIMEOUT) {
            Err(SuggestError::Engine(_)) => {}
            other => panic!("expected engine error, got {other:?}"),
        }
    }

    #[test]
    fn test_token_positions_and_offsets() {
        let engine = MemoryEngine::new();
        engine
            .create_index("idx", "{}", None, TIMEOUT)
            .unwrap();
        engine.register_analyzer("idx", "contents_analyzer").unwrap();

        let tokens = engine
            .analyze("idx", "contents_analyzer", "hello  world", TIMEOUT)
            .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_delete_index() {
        let engine = MemoryEngine::new();
        engine
            .create_index("idx", "{}", None, TIMEOUT)
            .unwrap();
        engine.delete_index("idx", TIMEOUT).unwrap();
        assert!(!engine.index_exists("idx", TIMEOUT).unwrap());

        match engine.delete_index("idx", TIMEOUT) {
            Err(SuggestError::Engine(_)) => {}
            other => panic!("expected engine error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_settings_payload() {
        let engine = MemoryEngine::new();
        match engine.create_index("idx", "not json", None, TIMEOUT) {
            Err(SuggestError::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
    }
}
