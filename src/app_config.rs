use anyhow::{Context, Result, anyhow};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::language_utils::{normalize_lang_tag, validate_lang_tag};

/// Application configuration module
/// This module holds the host configuration both transformers read on every
/// turn, plus the per-plugin options each transformer is constructed with.
/// Represents the host configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Internal language the host's NLU and dialog generation operate in
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Languages the host supports natively besides the internal one
    #[serde(default)]
    pub secondary_langs: Vec<String>,

    /// Log level the host should apply when it installs its logger
    ///
    /// The library only emits through the `log` facade and never installs
    /// a logger itself; see `LogLevel::to_level_filter`.
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter a host passes to `log::set_max_level` or its logger builder
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Options of the utterance translation plugin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UtteranceTranslatorConfig {
    // @field: Plugin name
    #[serde(default = "default_utterance_plugin_name")]
    pub name: String,

    // @field: Position in the host's transformer chain
    #[serde(default = "default_priority")]
    pub priority: u32,

    /// Ask the dialog transformer to translate replies back to the user's language
    #[serde(default = "default_true")]
    pub bidirectional: bool,

    /// Run language detection on every utterance and trust it over the session
    #[serde(default)]
    pub verify_lang: bool,

    /// Keep the session language when detection yields an unsupported language
    #[serde(default, rename = "ignore_invalid_langs")]
    pub ignore_invalid: bool,

    /// Translate secondary languages too, leaving only the internal one valid
    #[serde(default)]
    pub translate_secondary_langs: bool,
}

impl Default for UtteranceTranslatorConfig {
    fn default() -> Self {
        Self {
            name: default_utterance_plugin_name(),
            priority: default_priority(),
            bidirectional: true,
            verify_lang: false,
            ignore_invalid: false,
            translate_secondary_langs: false,
        }
    }
}

/// Options of the dialog translation plugin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DialogTranslatorConfig {
    // @field: Plugin name
    #[serde(default = "default_dialog_plugin_name")]
    pub name: String,

    // @field: Position in the host's transformer chain
    #[serde(default = "default_priority")]
    pub priority: u32,
}

impl Default for DialogTranslatorConfig {
    fn default() -> Self {
        Self {
            name: default_dialog_plugin_name(),
            priority: default_priority(),
        }
    }
}

fn default_lang() -> String {
    "en-us".to_string()
}

fn default_priority() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_utterance_plugin_name() -> String {
    "ovos-utterance-translation-plugin".to_string()
}

fn default_dialog_plugin_name() -> String {
    "ovos-dialog-translation-plugin".to_string()
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse a configuration from JSON text, normalizing its language tags
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)
            .map_err(|e| anyhow!("Failed to parse configuration: {}", e))?;
        config.normalize();
        Ok(config)
    }

    /// Normalize every configured language tag in place
    pub fn normalize(&mut self) {
        self.lang = normalize_lang_tag(&self.lang);
        self.secondary_langs = self
            .secondary_langs
            .iter()
            .map(|l| normalize_lang_tag(l))
            .collect();
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        validate_lang_tag(&self.lang)
            .with_context(|| "Internal language is not a known language")?;

        for lang in &self.secondary_langs {
            validate_lang_tag(lang)
                .with_context(|| format!("Secondary language {} is not a known language", lang))?;
        }

        Ok(())
    }

    /// Internal language plus secondary languages, deduplicated, in configuration order
    pub fn supported_langs(&self) -> Vec<String> {
        let mut langs = vec![normalize_lang_tag(&self.lang)];
        for lang in &self.secondary_langs {
            let lang = normalize_lang_tag(lang);
            if !langs.contains(&lang) {
                langs.push(lang);
            }
        }
        langs
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            lang: default_lang(),
            secondary_langs: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}

/// Live handle on the host configuration
///
/// Both transformers hold a clone and read through it on every access, so an
/// update made by the host is seen on the next turn without rebuilding them.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<Config>>,
}

impl SharedConfig {
    /// Wrap a configuration in a shared handle
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Replace the configuration
    pub fn set(&self, mut config: Config) {
        config.normalize();
        *self.inner.write() = config;
    }

    /// Apply an in-place change to the configuration
    pub fn update<F: FnOnce(&mut Config)>(&self, f: F) {
        let mut config = self.inner.write();
        f(&mut config);
        config.normalize();
    }

    /// Internal language, normalized
    pub fn internal_lang(&self) -> String {
        normalize_lang_tag(&self.inner.read().lang)
    }

    /// Languages that need no translation
    ///
    /// With `translate_secondary` set only the internal language is valid.
    pub fn valid_langs(&self, translate_secondary: bool) -> Vec<String> {
        let config = self.inner.read();
        if translate_secondary {
            vec![normalize_lang_tag(&config.lang)]
        } else {
            config.supported_langs()
        }
    }
}
