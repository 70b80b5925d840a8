//! Analyzer settings for the suggest index.
//!
//! The engine executes analysis; this module owns everything around that:
//! the naming scheme tying the 47 supported languages to the five analyzer
//! roles, provisioning of the backing index the analyzer definitions live
//! in, and validation that the engine actually has every expected analyzer
//! configured.
//!
//! # Examples
//!
//! ```
//! use fess_suggest::settings::{AnalyzerRole, is_supported_language};
//!
//! assert!(is_supported_language("ja"));
//! assert_eq!(
//!     AnalyzerRole::Contents.analyzer_name("ja"),
//!     "contents_analyzer_ja"
//! );
//! assert_eq!(AnalyzerRole::Contents.analyzer_name("xx"), "contents_analyzer");
//! ```

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analysis::analyzer::DefaultContentsAnalyzer;
use crate::engine::SearchEngine;
use crate::error::{Result, SuggestError};
use crate::settings::SuggestSettings;

/// Languages with dedicated analyzer definitions in the suggest index.
pub const SUPPORTED_LANGUAGES: [&str; 47] = [
    "ar", "bg", "bn", "ca", "cs", "da", "de", "el", "en", "es", "et", "fa", "fi", "fr", "gu",
    "he", "hi", "hr", "hu", "id", "it", "ja", "ko", "lt", "lv", "mk", "ml", "nl", "no", "pa",
    "pl", "pt", "ro", "ru", "si", "sq", "sv", "ta", "te", "th", "tl", "tr", "uk", "ur", "vi",
    "zh-cn", "zh-tw",
];

/// Suffix appended to the settings index name to derive the analyzer index
/// name. External tooling inspecting the index out-of-band relies on it.
const ANALYZER_SETTINGS_INDEX_SUFFIX: &str = "_analyzer";

/// Placeholder replaced with the configured dictionary path when the
/// settings template is loaded.
const DICTIONARY_PATH_PLACEHOLDER: &str = "${fess.dictionary.path}";

const INDEX_SETTINGS_RESOURCE: &str = "suggest_indices/suggest_analyzer.json";
const INDEX_MAPPING_RESOURCE: &str = "suggest_indices/analyzer/mapping-default.json";

const DEFAULT_INDEX_SETTINGS: &str =
    include_str!("../../resources/suggest_indices/suggest_analyzer.json");
const DEFAULT_INDEX_MAPPING: &str =
    include_str!("../../resources/suggest_indices/analyzer/mapping-default.json");

/// Check whether `lang` has dedicated analyzer definitions.
///
/// Blank input is never supported.
pub fn is_supported_language(lang: &str) -> bool {
    !lang.trim().is_empty() && SUPPORTED_LANGUAGES.contains(&lang)
}

/// The five functional roles an analyzer serves in the suggest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerRole {
    /// Reading conversion (e.g. kana readings for Japanese input).
    Reading,
    /// Reading-based term extraction.
    ReadingTerm,
    /// Query/term normalization.
    Normalize,
    /// Content tokenization.
    Contents,
    /// Content tokenization with reading output.
    ContentsReading,
}

impl AnalyzerRole {
    /// Every role, in probe order.
    pub const ALL: [AnalyzerRole; 5] = [
        AnalyzerRole::Reading,
        AnalyzerRole::ReadingTerm,
        AnalyzerRole::Normalize,
        AnalyzerRole::Contents,
        AnalyzerRole::ContentsReading,
    ];

    /// Canonical base name of this role.
    pub fn base_name(&self) -> &'static str {
        match self {
            AnalyzerRole::Reading => "reading_analyzer",
            AnalyzerRole::ReadingTerm => "reading_term_analyzer",
            AnalyzerRole::Normalize => "normalize_analyzer",
            AnalyzerRole::Contents => "contents_analyzer",
            AnalyzerRole::ContentsReading => "contents_reading_analyzer",
        }
    }

    /// Analyzer identifier for this role and language.
    ///
    /// Supported languages get a `_<lang>` suffix; a blank or unknown code
    /// resolves to the role's default identifier rather than an error, so
    /// callers can pass through whatever language tag a document carries.
    pub fn analyzer_name(&self, lang: &str) -> String {
        if is_supported_language(lang) {
            format!("{}_{}", self.base_name(), lang)
        } else {
            self.base_name().to_string()
        }
    }
}

/// Manages the analyzer definitions backing the suggest feature.
///
/// The definitions live in a dedicated index named
/// `<settings_index_name>_analyzer`. [`init`](AnalyzerSettings::init)
/// provisions it idempotently from packaged templates;
/// [`check_analyzer`](AnalyzerSettings::check_analyzer) probes the live
/// engine for every expected role/language combination.
pub struct AnalyzerSettings {
    engine: Arc<dyn SearchEngine>,
    settings: SuggestSettings,
    analyzer_settings_index_name: String,
}

impl AnalyzerSettings {
    /// Create analyzer settings bound to the given engine.
    pub fn new(
        engine: Arc<dyn SearchEngine>,
        settings: SuggestSettings,
        settings_index_name: &str,
    ) -> Self {
        AnalyzerSettings {
            engine,
            settings,
            analyzer_settings_index_name: create_analyzer_settings_index_name(settings_index_name),
        }
    }

    /// Ensure the analyzer settings index exists, creating it on first use.
    ///
    /// Loads the settings template, substitutes the dictionary path, and
    /// issues a single index-creation call when the index is absent; a
    /// present index is left untouched. Template load failures abort with a
    /// settings error; engine failures propagate unchanged.
    pub fn init(&self) -> Result<()> {
        let timeout = self.settings.indices_timeout;
        if self
            .engine
            .index_exists(&self.analyzer_settings_index_name, timeout)?
        {
            debug!(
                index = %self.analyzer_settings_index_name,
                "analyzer settings index already exists"
            );
            return Ok(());
        }

        let index_settings = self.load_index_settings()?;
        let index_mapping = self.load_index_mapping()?;
        self.engine.create_index(
            &self.analyzer_settings_index_name,
            &index_settings,
            Some(&index_mapping),
            timeout,
        )?;
        info!(
            index = %self.analyzer_settings_index_name,
            "created analyzer settings index"
        );
        Ok(())
    }

    /// Name of the backing analyzer settings index.
    pub fn analyzer_settings_index_name(&self) -> &str {
        &self.analyzer_settings_index_name
    }

    /// Analyzer identifier for the given role and language.
    pub fn analyzer_name(&self, role: AnalyzerRole, lang: &str) -> String {
        role.analyzer_name(lang)
    }

    /// Push an updated analyzer settings document to the engine.
    pub fn update_analyzer(&self, settings: &Value) -> Result<()> {
        self.engine.create_index(
            &self.analyzer_settings_index_name,
            &settings.to_string(),
            None,
            self.settings.indices_timeout,
        )
    }

    /// Delete the analyzer settings index.
    pub fn delete_analyzer_settings(&self) -> Result<()> {
        self.engine
            .delete_index(&self.analyzer_settings_index_name, self.settings.indices_timeout)
    }

    /// Probe the engine for every expected analyzer and report the
    /// identifiers it has no configuration for.
    ///
    /// Scans all supported languages across all five roles (235 probes,
    /// parallel per language). An unknown-analyzer rejection records the
    /// identifier and the scan continues; any other failure propagates.
    pub fn check_analyzer(&self) -> Result<HashSet<String>> {
        const PROBE_TEXT: &str = "text";
        let timeout = self.settings.indices_timeout;

        let missing: Vec<Vec<String>> = SUPPORTED_LANGUAGES
            .par_iter()
            .map(|lang| {
                let mut undefined = Vec::new();
                for role in AnalyzerRole::ALL {
                    let name = role.analyzer_name(lang);
                    match self.engine.analyze(
                        &self.analyzer_settings_index_name,
                        &name,
                        PROBE_TEXT,
                        timeout,
                    ) {
                        Ok(_) => {}
                        Err(SuggestError::UnknownAnalyzer { .. }) => undefined.push(name),
                        Err(e) => return Err(e),
                    }
                }
                Ok(undefined)
            })
            .collect::<Result<_>>()?;

        let undefined: HashSet<String> = missing.into_iter().flatten().collect();
        if !undefined.is_empty() {
            warn!(
                count = undefined.len(),
                "suggest index is missing analyzer definitions"
            );
        }
        Ok(undefined)
    }

    /// Analyzer names configured on the backing index, read from its
    /// settings document.
    pub fn analyzer_names(&self) -> Result<HashSet<String>> {
        let settings = self
            .engine
            .index_settings(&self.analyzer_settings_index_name, self.settings.indices_timeout)?;
        let names = settings
            .pointer("/analysis/analyzer")
            .or_else(|| settings.pointer("/index/analysis/analyzer"))
            .and_then(Value::as_object)
            .map(|analyzers| analyzers.keys().cloned().collect())
            .unwrap_or_default();
        Ok(names)
    }

    /// Contents analyzer executing against the backing index.
    pub fn contents_analyzer(&self) -> DefaultContentsAnalyzer {
        DefaultContentsAnalyzer::new(
            Arc::clone(&self.engine),
            self.settings.clone(),
            &self.analyzer_settings_index_name,
        )
    }

    fn load_index_settings(&self) -> Result<String> {
        let template = self.load_resource(INDEX_SETTINGS_RESOURCE, DEFAULT_INDEX_SETTINGS)?;
        Ok(template.replace(DICTIONARY_PATH_PLACEHOLDER, &self.settings.dictionary_path))
    }

    fn load_index_mapping(&self) -> Result<String> {
        self.load_resource(INDEX_MAPPING_RESOURCE, DEFAULT_INDEX_MAPPING)
    }

    /// Load a template resource, preferring the configured resource
    /// directory over the packaged default.
    fn load_resource(&self, name: &str, packaged: &str) -> Result<String> {
        match &self.settings.resource_dir {
            Some(dir) => {
                let path = dir.join(name);
                fs::read_to_string(&path).map_err(|e| {
                    SuggestError::settings(format!("failed to read {}: {e}", path.display()))
                })
            }
            None => Ok(packaged.to_string()),
        }
    }
}

impl std::fmt::Debug for AnalyzerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerSettings")
            .field("index_name", &self.analyzer_settings_index_name)
            .finish()
    }
}

/// Derive the analyzer settings index name from the settings index name.
fn create_analyzer_settings_index_name(settings_index_name: &str) -> String {
    format!("{settings_index_name}{ANALYZER_SETTINGS_INDEX_SUFFIX}")
}
