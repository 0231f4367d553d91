use anyhow::{Result, anyhow};
use isolang::Language;

// Language utilities for BCP-47 style tags such as `en-us` or `pt_BR`.
// Tags arrive from configuration, detectors and bus events in whatever casing
// each of them prefers and are normalized here before being compared.

/// Normalize a language tag: trim, lowercase and use `-` as the subtag separator
pub fn normalize_lang_tag(tag: &str) -> String {
    tag.trim().to_lowercase().replace('_', "-")
}

/// Primary language subtag of a tag (`"en"` for `"en-us"`)
pub fn primary_subtag(tag: &str) -> String {
    let normalized = normalize_lang_tag(tag);
    match normalized.split_once('-') {
        Some((primary, _)) => primary.to_string(),
        None => normalized,
    }
}

/// Resolve the ISO 639 language behind a tag's primary subtag
fn resolve_language(tag: &str) -> Option<Language> {
    let primary = primary_subtag(tag);
    match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
}

/// Validate that the primary subtag is a known ISO 639-1 or ISO 639-3 code
pub fn validate_lang_tag(tag: &str) -> Result<()> {
    resolve_language(tag)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language tag: {}", tag))
}

/// Get the English language name for a tag, used in log messages
pub fn get_language_name(tag: &str) -> Result<String> {
    let lang = resolve_language(tag)
        .ok_or_else(|| anyhow!("Failed to get language from tag: {}", tag))?;

    Ok(lang.to_name().to_string())
}

/// Human readable label for logs: `"Spanish (es-es)"`, or the bare tag if unknown
pub fn describe_lang(tag: &str) -> String {
    match get_language_name(tag) {
        Ok(name) => format!("{} ({})", name, tag),
        Err(_) => tag.to_string(),
    }
}
