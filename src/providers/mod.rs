/*!
 * Service seams for language detection and machine translation.
 *
 * The transformers never detect or translate anything themselves; the host
 * injects implementations of these traits:
 * - `LanguageDetector`: text -> language tag
 * - `LanguageTranslator`: text + target + source -> translated text
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

pub mod mock;

/// Language detection service
#[async_trait]
pub trait LanguageDetector: Send + Sync + Debug {
    /// Detect the language of `text`
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - A language tag such as `"es-es"`, or an error
    async fn detect(&self, text: &str) -> Result<String, ProviderError>;
}

/// Machine translation service
#[async_trait]
pub trait LanguageTranslator: Send + Sync + Debug {
    /// Translate `text` from `source_lang` into `target_lang`
    ///
    /// Note the argument order: target before source.
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target_lang` - Language to translate into
    /// * `source_lang` - Language the text is in
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<String, ProviderError>;
}
