/*!
 * Session handling for the transformers.
 *
 * This module provides:
 * - The per-conversation `Session` and its serialized form
 * - The ambient current session used when a turn carries none
 * - Session resolution from a transform context or a bus message
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::{DEFAULT_SESSION_ID, SessionManager};
pub use models::Session;
