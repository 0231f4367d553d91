/*!
 * Utterance translation stage.
 *
 * Runs before intent parsing. When the session language is one the host
 * cannot handle, the first utterance is translated into the internal
 * language and the session is switched over, leaving a note in the context
 * so the dialog stage can translate the reply back.
 */

use async_trait::async_trait;
use log::{error, info, warn};
use std::sync::Arc;

use crate::app_config::{SharedConfig, UtteranceTranslatorConfig};
use crate::errors::TransformError;
use crate::language_utils::{describe_lang, normalize_lang_tag};
use crate::providers::{LanguageDetector, LanguageTranslator};
use crate::session::SessionManager;

use super::{TransformContext, Transformer};

/// Translates incoming utterances into the host's internal language
#[derive(Debug)]
pub struct UtteranceTranslator {
    /// Plugin options
    config: UtteranceTranslatorConfig,
    /// Live host configuration
    host_config: SharedConfig,
    /// Ambient session accessor
    sessions: SessionManager,
    /// Language detection service
    detector: Arc<dyn LanguageDetector>,
    /// Translation service
    translator: Arc<dyn LanguageTranslator>,
}

impl UtteranceTranslator {
    /// Create a new utterance translator
    pub fn new(
        config: UtteranceTranslatorConfig,
        host_config: SharedConfig,
        sessions: SessionManager,
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn LanguageTranslator>,
    ) -> Self {
        Self {
            config,
            host_config,
            sessions,
            detector,
            translator,
        }
    }

    /// Plugin options
    pub fn config(&self) -> &UtteranceTranslatorConfig {
        &self.config
    }

    /// Language the host processes utterances in
    pub fn internal_lang(&self) -> String {
        self.host_config.internal_lang()
    }

    /// Languages that pass through untranslated
    pub fn valid_langs(&self) -> Vec<String> {
        self.host_config.valid_langs(self.config.translate_secondary_langs)
    }
}

#[async_trait]
impl Transformer for UtteranceTranslator {
    type Input = Vec<String>;
    type Output = Vec<String>;

    fn name(&self) -> &str {
        &self.config.name
    }

    fn priority(&self) -> u32 {
        self.config.priority
    }

    /// Only the first utterance is inspected. The returned list is the
    /// untranslated input; the translation is left in
    /// `context.translated_utterance`.
    async fn transform(
        &self,
        utterances: Vec<String>,
        context: Option<TransformContext>,
    ) -> Result<(Vec<String>, TransformContext), TransformError> {
        let mut context = context.unwrap_or_default();
        let utterance = utterances.first().ok_or(TransformError::EmptyInput)?;
        let mut session = self.sessions.resolve(context.session.as_ref())?;

        context.was_translated = false;
        context.translated_utterance = None;

        // Chat-style clients let users write in any language, so the session
        // language can be wrong
        if self.config.verify_lang {
            let detected = normalize_lang_tag(&self.detector.detect(utterance).await?);
            context.detected_lang = Some(detected.clone());

            if session.lang != detected {
                warn!("Specified lang: {} but detected {}", session.lang, detected);
                let valid_langs = self.valid_langs();
                if self.config.ignore_invalid && !valid_langs.contains(&detected) {
                    error!(
                        "Ignoring lang detection, {} not in valid languages: {:?}",
                        detected, valid_langs
                    );
                } else {
                    session.lang = detected;
                }
            }
        }

        if !self.valid_langs().contains(&session.lang) {
            let internal_lang = self.internal_lang();
            let translated = self
                .translator
                .translate(utterance, &internal_lang, &session.lang)
                .await?;
            info!(
                "Translated utterance from {} to {}: {}",
                describe_lang(&session.lang),
                describe_lang(&internal_lang),
                translated
            );
            context.was_translated = true;
            context.translated_utterance = Some(translated);

            if self.config.bidirectional {
                context.output_lang = Some(session.lang.clone());
                context.translate_dialogs = true;
            }

            session.lang = internal_lang;
        }

        context.set_session(&session)?;

        Ok((utterances, context))
    }
}
