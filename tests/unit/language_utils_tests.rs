/*!
 * Tests for language tag utility functions
 */

use bidi_translate::language_utils::{
    describe_lang, get_language_name, normalize_lang_tag, primary_subtag,
    validate_lang_tag,
};

#[test]
fn test_normalizeLangTag_withVariousForms_shouldNormalize() {
    assert_eq!(normalize_lang_tag("en-US"), "en-us");
    assert_eq!(normalize_lang_tag("pt_BR"), "pt-br");
    assert_eq!(normalize_lang_tag(" ES-es "), "es-es");
    assert_eq!(normalize_lang_tag("de"), "de");
}

#[test]
fn test_primarySubtag_shouldStripRegion() {
    assert_eq!(primary_subtag("en-us"), "en");
    assert_eq!(primary_subtag("PT_br"), "pt");
    assert_eq!(primary_subtag("fr"), "fr");
}

#[test]
fn test_validateLangTag_withKnownAndUnknownCodes_shouldValidate() {
    assert!(validate_lang_tag("en-us").is_ok());
    assert!(validate_lang_tag("es").is_ok());
    assert!(validate_lang_tag("deu-de").is_ok());

    assert!(validate_lang_tag("xx-yy").is_err());
    assert!(validate_lang_tag("").is_err());
    assert!(validate_lang_tag("e").is_err());
}

#[test]
fn test_getLanguageName_withValidTags_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en-us").unwrap(), "English");
    assert_eq!(get_language_name("es-es").unwrap(), "Spanish");
    assert!(get_language_name("xx").is_err());
}

#[test]
fn test_describeLang_shouldFallBackToTag() {
    assert_eq!(describe_lang("fr-fr"), "French (fr-fr)");
    assert_eq!(describe_lang("xx-yy"), "xx-yy");
}
