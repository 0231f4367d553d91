/*!
 * Mock service implementations for testing.
 *
 * - `MockTranslator::working()` - Always succeeds, tagging the text with the target language
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::unavailable()` - Always fails as if the service were down
 * - `MockDetector::fixed(lang)` - Always detects the same language
 * - `MockDetector::failing()` - Always fails with an error
 *
 * Every call is recorded so tests can assert on what was requested.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{LanguageDetector, LanguageTranslator};

/// A recorded translation request
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateCall {
    /// The text to translate
    pub text: String,
    /// Target language
    pub target_lang: String,
    /// Source language
    pub source_lang: String,
}

/// Behavior mode for the mock translator
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with `"[target] text"`
    Working,
    /// Looks the text up in a phrase table, falling back to `Working` output
    Phrasebook(HashMap<(String, String), String>),
    /// Always fails with an error
    Failing,
    /// Always fails as if the service could not be reached
    Unavailable,
}

/// Mock translator for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Requests received so far
    calls: Arc<Mutex<Vec<TranslateCall>>>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock translator whose service is unreachable
    pub fn unavailable() -> Self {
        Self::new(MockBehavior::Unavailable)
    }

    /// Create a mock translator answering from a phrase table
    ///
    /// Entries are `(text, target_lang, translation)`.
    pub fn phrasebook(entries: &[(&str, &str, &str)]) -> Self {
        let table = entries
            .iter()
            .map(|(text, target, translation)| {
                ((text.to_string(), target.to_string()), translation.to_string())
            })
            .collect();
        Self::new(MockBehavior::Phrasebook(table))
    }

    /// Requests received so far
    pub fn calls(&self) -> Vec<TranslateCall> {
        self.calls.lock().clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl LanguageTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<String, ProviderError> {
        self.calls.lock().push(TranslateCall {
            text: text.to_string(),
            target_lang: target_lang.to_string(),
            source_lang: source_lang.to_string(),
        });

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", target_lang, text)),
            MockBehavior::Phrasebook(table) => Ok(table
                .get(&(text.to_string(), target_lang.to_string()))
                .cloned()
                .unwrap_or_else(|| format!("[{}] {}", target_lang, text))),
            MockBehavior::Failing => Err(ProviderError::TranslationFailed {
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
                message: "Simulated translation failure".to_string(),
            }),
            MockBehavior::Unavailable => Err(ProviderError::Unavailable(
                "Simulated translation service outage".to_string(),
            )),
        }
    }
}

/// Mock language detector
#[derive(Debug, Clone)]
pub struct MockDetector {
    /// Detected language, or `None` to fail
    lang: Option<String>,
    /// Texts received so far
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDetector {
    /// Create a detector that always answers `lang`
    pub fn fixed(lang: &str) -> Self {
        Self {
            lang: Some(lang.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a detector that always errors
    pub fn failing() -> Self {
        Self {
            lang: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of texts inspected so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl LanguageDetector for MockDetector {
    async fn detect(&self, text: &str) -> Result<String, ProviderError> {
        self.calls.lock().push(text.to_string());

        self.lang
            .clone()
            .ok_or_else(|| ProviderError::DetectionFailed("Simulated detection failure".to_string()))
    }
}
