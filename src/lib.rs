/*!
 * # bidi_translate - bidirectional translation for voice assistant pipelines
 *
 * Two transformer stages that let a host whose intent parsing and dialog
 * generation run in one internal language talk to users in any language.
 *
 * ## Features
 *
 * - Translate incoming utterances into the internal language when the
 *   session language is not supported
 * - Optionally verify the session language with a language detector
 * - Translate replies back into the user's language
 * - Force or reset a session's output language over the message bus
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Host configuration and plugin options
 * - `transformers`: The pipeline stages:
 *   - `transformers::utterance`: Utterance translation
 *   - `transformers::dialog`: Dialog translation and output-language events
 *   - `transformers::context`: Typed per-turn context shared by both stages
 *   - `transformers::output_langs`: Session-scoped output-language overrides
 * - `session`: Session model and ambient session access
 * - `providers`: Detection and translation service traits, plus mocks
 * - `bus`: Bus message type and event names
 * - `language_utils`: Language tag utilities
 * - `errors`: Custom error types
 *
 * Detection, translation, the bus transport and session persistence are
 * supplied by the host.
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod bus;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod session;
pub mod transformers;

// Re-export main types for easier usage
pub use app_config::{Config, DialogTranslatorConfig, SharedConfig, UtteranceTranslatorConfig};
pub use bus::{Message, MessageHandler};
pub use errors::{ProviderError, SessionError, TransformError};
pub use providers::{LanguageDetector, LanguageTranslator};
pub use session::{Session, SessionManager};
pub use transformers::{
    DialogTranslator, OutputLangStore, TransformContext, Transformer, UtteranceTranslator,
};
