/*!
 * Dialog translation stage.
 *
 * Runs after the host has produced a reply. Translates the reply into the
 * language the user should receive it in, taken from a forced per-session
 * override first and from the flags the utterance stage left in the context
 * otherwise.
 */

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::{DialogTranslatorConfig, SharedConfig};
use crate::bus::{FORCE_OUTPUT_LANG, Message, MessageHandler, RESET_OUTPUT_LANG};
use crate::errors::TransformError;
use crate::language_utils::{describe_lang, normalize_lang_tag};
use crate::providers::LanguageTranslator;
use crate::session::SessionManager;

use super::{OutputLangStore, TransformContext, Transformer};

/// Translates outgoing dialog into the user's language
#[derive(Debug)]
pub struct DialogTranslator {
    /// Plugin options
    config: DialogTranslatorConfig,
    /// Live host configuration
    host_config: SharedConfig,
    /// Ambient session accessor
    sessions: SessionManager,
    /// Translation service
    translator: Arc<dyn LanguageTranslator>,
    /// Forced output languages, owned by the host
    output_langs: OutputLangStore,
}

impl DialogTranslator {
    /// Create a new dialog translator
    pub fn new(
        config: DialogTranslatorConfig,
        host_config: SharedConfig,
        sessions: SessionManager,
        translator: Arc<dyn LanguageTranslator>,
        output_langs: OutputLangStore,
    ) -> Self {
        Self {
            config,
            host_config,
            sessions,
            translator,
            output_langs,
        }
    }

    /// Forced output languages this stage consults
    pub fn output_langs(&self) -> &OutputLangStore {
        &self.output_langs
    }

    /// Handle `ovos.language.output.force`: pin the sender's output language
    pub fn handle_output_lang(&self, message: &Message) -> Result<(), TransformError> {
        let session = self.sessions.resolve_message(message)?;
        let lang = message.require_str("lang")?;
        self.output_langs.force(&session.session_id, lang);
        Ok(())
    }

    /// Handle `ovos.language.output.reset`: drop the sender's override if any
    pub fn handle_reset_output_lang(&self, message: &Message) -> Result<(), TransformError> {
        let session = self.sessions.resolve_message(message)?;
        self.output_langs.reset(&session.session_id);
        Ok(())
    }
}

impl MessageHandler for DialogTranslator {
    fn events(&self) -> &'static [&'static str] {
        &[FORCE_OUTPUT_LANG, RESET_OUTPUT_LANG]
    }

    fn handle(&self, message: &Message) -> Result<(), TransformError> {
        match message.msg_type.as_str() {
            FORCE_OUTPUT_LANG => self.handle_output_lang(message),
            RESET_OUTPUT_LANG => self.handle_reset_output_lang(message),
            other => Err(TransformError::UnhandledEvent(other.to_string())),
        }
    }
}

#[async_trait]
impl Transformer for DialogTranslator {
    type Input = String;
    type Output = String;

    fn name(&self) -> &str {
        &self.config.name
    }

    fn priority(&self) -> u32 {
        self.config.priority
    }

    async fn transform(
        &self,
        dialog: String,
        context: Option<TransformContext>,
    ) -> Result<(String, TransformContext), TransformError> {
        let mut context = context.unwrap_or_default();
        let mut session = self.sessions.resolve(context.session.as_ref())?;

        // A forced language wins over whatever the utterance stage decided
        if let Some(lang) = self.output_langs.get(&session.session_id) {
            context.translate_dialogs = true;
            context.output_lang = Some(lang);
        }

        if !context.translate_dialogs {
            return Ok((dialog, context));
        }

        let lang = context
            .output_lang
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(normalize_lang_tag)
            .unwrap_or_else(|| self.host_config.internal_lang());

        if lang == session.lang {
            debug!("Dialog already in {}, not translating", lang);
            return Ok((dialog, context));
        }

        let translated = self
            .translator
            .translate(&dialog, &lang, &session.lang)
            .await?;
        info!(
            "Translated dialog from {} to {}: {}",
            describe_lang(&session.lang),
            describe_lang(&lang),
            translated
        );

        session.lang = lang;
        context.was_translated = true;
        context.set_session(&session)?;

        Ok((translated, context))
    }
}
