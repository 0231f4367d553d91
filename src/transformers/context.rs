/*!
 * Typed coordination channel between the transformers.
 *
 * The host hands the same context from the utterance stage to the dialog
 * stage of a turn. It serializes to JSON with the key names hosts already
 * exchange, and keeps any keys it does not know about in `extra`.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SessionError;
use crate::session::Session;

/// Per-turn context shared by the utterance and dialog transformers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformContext {
    /// Whether the last stage translated its input
    #[serde(default)]
    pub was_translated: bool,

    /// Language reported by the detector, when detection ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_lang: Option<String>,

    /// Language replies should be delivered in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_lang: Option<String>,

    /// Whether the dialog stage should translate replies
    #[serde(default)]
    pub translate_dialogs: bool,

    /// Serialized session of the turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,

    /// First utterance after translation into the internal language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_utterance: Option<String>,

    /// Host keys unrelated to translation
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransformContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context carrying a session
    pub fn with_session(session: &Session) -> Result<Self, SessionError> {
        let mut context = Self::new();
        context.set_session(session)?;
        Ok(context)
    }

    /// Store the serialized session, replacing any previous one
    pub fn set_session(&mut self, session: &Session) -> Result<(), SessionError> {
        self.session = Some(session.serialize()?);
        Ok(())
    }

    /// Rebuild the session carried by this context, if any
    pub fn session(&self) -> Result<Option<Session>, SessionError> {
        self.session.as_ref().map(Session::deserialize).transpose()
    }

    /// Parse a context from its JSON form
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// JSON form of the context
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
