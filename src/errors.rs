/*!
 * Error types for the bidi_translate crate.
 *
 * This module contains custom error types for the different seams of the
 * transformers, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors reported by the injected detection/translation services
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Language detection failed
    #[error("Language detection failed: {0}")]
    DetectionFailed(String),

    /// Translation failed
    #[error("Translation failed ({source_lang} -> {target_lang}): {message}")]
    TranslationFailed {
        /// Language the text was in
        source_lang: String,
        /// Language the text was requested in
        target_lang: String,
        /// Error message from the service
        message: String,
    },

    /// The service could not be reached at all
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while moving a session in or out of its serialized form
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to deserialize session: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("Failed to serialize session: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors returned by the transformers and their bus handlers
#[derive(Error, Debug)]
pub enum TransformError {
    /// Error from a detection or translation service
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error with the session carried in the context or message
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// No utterance was supplied
    #[error("No utterances to transform")]
    EmptyInput,

    /// A bus message is missing a required data field
    #[error("Message is missing required data: {0}")]
    MissingMessageData(String),

    /// A bus message was routed to a handler that does not subscribe to it
    #[error("Unhandled event: {0}")]
    UnhandledEvent(String),
}
