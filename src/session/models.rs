/*!
 * Session model.
 *
 * The host owns sessions; the transformers only read one out of its
 * serialized form, change its language and write it back.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::SessionError;
use crate::language_utils::normalize_lang_tag;

/// Per-conversation state relevant to translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session ID
    pub session_id: String,
    /// Active working language for the turn
    pub lang: String,
    /// Host-owned fields, kept intact across a round trip
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Create a session with a fresh id
    pub fn new(lang: &str) -> Self {
        Self::with_id(&Uuid::new_v4().to_string(), lang)
    }

    /// Create a session with a known id
    pub fn with_id(session_id: &str, lang: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            lang: normalize_lang_tag(lang),
            extra: Map::new(),
        }
    }

    /// Serialized form stored in contexts and bus messages
    pub fn serialize(&self) -> Result<Value, SessionError> {
        serde_json::to_value(self).map_err(SessionError::Serialize)
    }

    /// Rebuild a session from its serialized form
    pub fn deserialize(data: &Value) -> Result<Self, SessionError> {
        let mut session = serde_json::from_value::<Session>(data.clone())
            .map_err(SessionError::Deserialize)?;
        session.lang = normalize_lang_tag(&session.lang);
        Ok(session)
    }
}
