//! Settings layer for the suggest feature.
//!
//! [`SuggestSettings`] carries the runtime configuration shared by every
//! engine call; [`AnalyzerSettings`](analyzer::AnalyzerSettings) manages the
//! analyzer index built from it.

pub mod analyzer;

// Re-export commonly used types
pub use analyzer::{
    AnalyzerRole, AnalyzerSettings, SUPPORTED_LANGUAGES, is_supported_language,
};

use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for suggest settings operations.
#[derive(Debug, Clone)]
pub struct SuggestSettings {
    /// Deadline applied to every engine admin call.
    pub indices_timeout: Duration,

    /// Dictionary path substituted into the settings template
    /// (`${fess.dictionary.path}`).
    pub dictionary_path: String,

    /// Directory to load template resources from instead of the packaged
    /// defaults.
    pub resource_dir: Option<PathBuf>,
}

impl SuggestSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        SuggestSettings::default()
    }

    /// Set the deadline applied to engine admin calls.
    pub fn with_indices_timeout(mut self, timeout: Duration) -> Self {
        self.indices_timeout = timeout;
        self
    }

    /// Set the dictionary path substituted into the settings template.
    pub fn with_dictionary_path<S: Into<String>>(mut self, path: S) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Load template resources from the given directory instead of the
    /// packaged defaults.
    pub fn with_resource_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }
}

impl Default for SuggestSettings {
    fn default() -> Self {
        SuggestSettings {
            indices_timeout: Duration::from_secs(10),
            dictionary_path: std::env::var("FESS_DICTIONARY_PATH").unwrap_or_default(),
            resource_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let settings = SuggestSettings::new()
            .with_indices_timeout(Duration::from_secs(30))
            .with_dictionary_path("/opt/dict")
            .with_resource_dir("/etc/fess");

        assert_eq!(settings.indices_timeout, Duration::from_secs(30));
        assert_eq!(settings.dictionary_path, "/opt/dict");
        assert_eq!(settings.resource_dir, Some(PathBuf::from("/etc/fess")));
    }
}
