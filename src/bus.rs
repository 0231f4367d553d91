/*!
 * Message bus types.
 *
 * The bus transport belongs to the host. This module only defines the message
 * shape the handlers receive and the events the transformers subscribe to.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::TransformError;

/// Force the output language of the sending session (`data.lang`)
pub const FORCE_OUTPUT_LANG: &str = "ovos.language.output.force";

/// Drop a forced output language for the sending session
pub const RESET_OUTPUT_LANG: &str = "ovos.language.output.reset";

/// A message delivered by the bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Event name
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Event payload
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Routing context; a serialized session travels under `session`
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl Message {
    /// Create a message with an empty context
    pub fn new(msg_type: &str, data: Map<String, Value>) -> Self {
        Self {
            msg_type: msg_type.to_string(),
            data,
            context: Map::new(),
        }
    }

    /// Attach a serialized session to the message context
    pub fn with_session(mut self, session: Value) -> Self {
        self.context.insert("session".to_string(), session);
        self
    }

    /// Required string field of the payload
    pub fn require_str(&self, key: &str) -> Result<&str, TransformError> {
        self.data
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| TransformError::MissingMessageData(key.to_string()))
    }
}

/// Something the host bus can route events to
pub trait MessageHandler {
    /// Event names this handler subscribes to
    fn events(&self) -> &'static [&'static str];

    /// Handle one message whose type is listed in `events`
    fn handle(&self, message: &Message) -> Result<(), TransformError>;
}
