/*!
 * Integration tests for output language overrides driven by bus events,
 * which persist across turns until reset.
 */

use bidi_translate::app_config::UtteranceTranslatorConfig;
use bidi_translate::bus::MessageHandler;
use bidi_translate::transformers::Transformer;

use crate::common::{context_for, force_message, pipeline, reset_message, session_lang, utterances};

#[tokio::test]
async fn test_forcedLang_shouldApplyOnEveryTurnUntilReset() {
    let p = pipeline(UtteranceTranslatorConfig::default());
    p.dialog.handle(&force_message("s1", "fr-fr")).unwrap();

    for _ in 0..2 {
        let (_, context) = p
            .utterance
            .transform(utterances("hello"), Some(context_for("s1", "en-us")))
            .await
            .unwrap();
        let (dialog, context) = p
            .dialog
            .transform("hi".to_string(), Some(context))
            .await
            .unwrap();

        assert_eq!(dialog, "[fr-fr] hi");
        assert_eq!(session_lang(&context), "fr-fr");
    }

    p.dialog.handle(&reset_message("s1")).unwrap();

    let (_, context) = p
        .utterance
        .transform(utterances("hello"), Some(context_for("s1", "en-us")))
        .await
        .unwrap();
    let (dialog, context) = p
        .dialog
        .transform("hi".to_string(), Some(context))
        .await
        .unwrap();

    assert_eq!(dialog, "hi");
    assert!(!context.was_translated);
    assert_eq!(p.translator.call_count(), 2);
}

#[tokio::test]
async fn test_forcedLang_shouldWinOverUtteranceStageOutputLang() {
    let p = pipeline(UtteranceTranslatorConfig::default());
    p.dialog.handle(&force_message("s1", "it-it")).unwrap();

    let (_, context) = p
        .utterance
        .transform(utterances("hola"), Some(context_for("s1", "es-es")))
        .await
        .unwrap();
    assert_eq!(context.output_lang.as_deref(), Some("es-es"));

    let (dialog, context) = p
        .dialog
        .transform("hello".to_string(), Some(context))
        .await
        .unwrap();

    assert_eq!(dialog, "[it-it] hello");
    assert_eq!(context.output_lang.as_deref(), Some("it-it"));
}

#[tokio::test]
async fn test_overrideStore_ownedByHost_shouldBeSharedWithDialogStage() {
    let p = pipeline(UtteranceTranslatorConfig::default());

    // The host may set overrides without going through the bus
    p.output_langs.force("s2", "nl-nl");

    let (dialog, _) = p
        .dialog
        .transform("hello".to_string(), Some(context_for("s2", "en-us")))
        .await
        .unwrap();
    assert_eq!(dialog, "[nl-nl] hello");

    p.dialog.handle(&reset_message("s2")).unwrap();
    assert!(p.output_langs.is_empty());
}
