/*!
 * Utterance and dialog transformers.
 *
 * Both run once per turn inside the host pipeline:
 * - `UtteranceTranslator` brings user input into a language the host supports
 * - `DialogTranslator` brings replies back into the language the user should hear
 *
 * They never call each other; `TransformContext` carries their flags across
 * the turn and `OutputLangStore` carries bus-driven overrides across turns.
 */

use async_trait::async_trait;

use crate::errors::TransformError;

pub mod context;
pub mod dialog;
pub mod output_langs;
pub mod utterance;

pub use context::TransformContext;
pub use dialog::DialogTranslator;
pub use output_langs::OutputLangStore;
pub use utterance::UtteranceTranslator;

/// A pipeline stage that rewrites its input and the turn context
#[async_trait]
pub trait Transformer: Send + Sync {
    /// What the stage receives
    type Input: Send;

    /// What the stage hands back to the host
    type Output: Send;

    /// Plugin name the host registers the stage under
    fn name(&self) -> &str;

    /// Position in the host's chain of stages
    fn priority(&self) -> u32;

    /// Run the stage
    ///
    /// # Arguments
    /// * `input` - The stage input
    /// * `context` - The turn context; `None` starts from an empty one
    async fn transform(
        &self,
        input: Self::Input,
        context: Option<TransformContext>,
    ) -> Result<(Self::Output, TransformContext), TransformError>;
}
