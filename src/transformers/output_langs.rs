/*!
 * Session-scoped output language overrides.
 *
 * Overrides are set and cleared by bus events and outlive individual turns.
 * The host owns the store and hands clones to whoever needs it.
 */

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::language_utils::normalize_lang_tag;

/// Forced output language per session id
#[derive(Debug, Clone, Default)]
pub struct OutputLangStore {
    langs: Arc<RwLock<HashMap<String, String>>>,
}

impl OutputLangStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the output language of a session
    pub fn force(&self, session_id: &str, lang: &str) {
        let lang = normalize_lang_tag(lang);
        debug!("Forcing output language {} for session {}", lang, session_id);
        self.langs.write().insert(session_id.to_string(), lang);
    }

    /// Drop the override of a session; returns the removed language, if any
    pub fn reset(&self, session_id: &str) -> Option<String> {
        let removed = self.langs.write().remove(session_id);
        if let Some(lang) = &removed {
            debug!("Cleared output language {} for session {}", lang, session_id);
        }
        removed
    }

    /// Forced output language of a session
    pub fn get(&self, session_id: &str) -> Option<String> {
        self.langs.read().get(session_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.langs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.langs.read().is_empty()
    }

    /// Drop every override
    pub fn clear(&self) {
        self.langs.write().clear();
    }
}
