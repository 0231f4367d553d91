/*!
 * Ambient session tracking.
 *
 * This module handles:
 * - Holding the host's current session
 * - Resolving the session of a turn from its serialized form when present
 * - Resolving the session that sent a bus message
 */

use log::debug;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use crate::app_config::SharedConfig;
use crate::bus::Message;
use crate::errors::SessionError;

use super::models::Session;

/// Id of the session used when the host supplies none
pub const DEFAULT_SESSION_ID: &str = "default";

/// Ambient session accessor shared between the host and the transformers
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Current session
    current: Arc<RwLock<Session>>,
}

impl SessionManager {
    /// Create a session manager around the given current session
    pub fn new(session: Session) -> Self {
        Self {
            current: Arc::new(RwLock::new(session)),
        }
    }

    /// Create a session manager whose default session speaks the internal language
    pub fn from_config(config: &SharedConfig) -> Self {
        Self::new(Session::with_id(DEFAULT_SESSION_ID, &config.internal_lang()))
    }

    /// Copy of the current session
    pub fn get(&self) -> Session {
        self.current.read().clone()
    }

    /// Replace the current session
    pub fn set_current(&self, session: Session) {
        debug!("Current session is now {}", session.session_id);
        *self.current.write() = session;
    }

    /// Deserialize `serialized` when present, otherwise fall back to the current session
    pub fn resolve(&self, serialized: Option<&Value>) -> Result<Session, SessionError> {
        match serialized {
            Some(data) => Session::deserialize(data),
            None => Ok(self.get()),
        }
    }

    /// Session that sent a bus message
    pub fn resolve_message(&self, message: &Message) -> Result<Session, SessionError> {
        self.resolve(message.context.get("session"))
    }
}
