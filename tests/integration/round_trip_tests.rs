/*!
 * Integration tests running the utterance stage and then the dialog stage
 * over the same context, the way a host pipeline does within one turn.
 */

use bidi_translate::app_config::UtteranceTranslatorConfig;
use bidi_translate::providers::mock::MockTranslator;
use bidi_translate::transformers::{TransformContext, Transformer};
use serde_json::json;

use crate::common::{context_for, host_config, pipeline, pipeline_with, session_lang, utterances};

#[tokio::test]
async fn test_roundTrip_withSpanishUser_shouldAnswerInSpanish() {
    let translator = MockTranslator::phrasebook(&[
        ("hola", "en-us", "hello"),
        ("hello", "es-es", "hola"),
    ]);
    let p = pipeline_with(
        host_config(),
        UtteranceTranslatorConfig::default(),
        translator,
        "es-es",
    );

    let (returned, context) = p
        .utterance
        .transform(utterances("hola"), Some(context_for("s1", "es-es")))
        .await
        .unwrap();

    assert_eq!(returned, utterances("hola"));
    assert_eq!(context.translated_utterance.as_deref(), Some("hello"));
    assert_eq!(session_lang(&context), "en-us");
    assert_eq!(context.output_lang.as_deref(), Some("es-es"));
    assert!(context.translate_dialogs);

    let (dialog, context) = p
        .dialog
        .transform("hello".to_string(), Some(context))
        .await
        .unwrap();

    assert_eq!(dialog, "hola");
    assert_eq!(session_lang(&context), "es-es");
    assert!(context.was_translated);
    assert_eq!(p.translator.call_count(), 2);
}

#[tokio::test]
async fn test_roundTrip_withSupportedLang_shouldNotTranslateEitherWay() {
    let p = pipeline(UtteranceTranslatorConfig::default());

    let (_, context) = p
        .utterance
        .transform(utterances("hello"), Some(context_for("s1", "en-us")))
        .await
        .unwrap();
    let (dialog, context) = p
        .dialog
        .transform("hi there".to_string(), Some(context))
        .await
        .unwrap();

    assert_eq!(dialog, "hi there");
    assert!(!context.was_translated);
    assert_eq!(session_lang(&context), "en-us");
    assert_eq!(p.translator.call_count(), 0);
}

#[tokio::test]
async fn test_roundTrip_withoutBidirectional_shouldAnswerInInternalLang() {
    let p = pipeline(UtteranceTranslatorConfig {
        bidirectional: false,
        ..UtteranceTranslatorConfig::default()
    });

    let (_, context) = p
        .utterance
        .transform(utterances("hallo"), Some(context_for("s1", "de-de")))
        .await
        .unwrap();
    let (dialog, _) = p
        .dialog
        .transform("hello".to_string(), Some(context))
        .await
        .unwrap();

    assert_eq!(dialog, "hello");
    assert_eq!(p.translator.call_count(), 1);
}

#[tokio::test]
async fn test_roundTrip_throughJson_shouldKeepHostKeysAndFlags() {
    let p = pipeline(UtteranceTranslatorConfig::default());

    let mut context = context_for("s1", "es-es");
    context
        .extra
        .insert("client_name".to_string(), json!("chat-bridge"));

    let (_, context) = p
        .utterance
        .transform(utterances("hola"), Some(context))
        .await
        .unwrap();

    // The host hands the context between stages as JSON
    let wire = context.to_value().unwrap();
    assert_eq!(wire["translate_dialogs"], json!(true));
    assert_eq!(wire["output_lang"], json!("es-es"));
    assert_eq!(wire["session"]["lang"], json!("en-us"));
    let context = TransformContext::from_value(wire).unwrap();

    let (dialog, context) = p
        .dialog
        .transform("hello".to_string(), Some(context))
        .await
        .unwrap();

    assert_eq!(dialog, "[es-es] hello");
    assert_eq!(context.extra["client_name"], json!("chat-bridge"));
}
