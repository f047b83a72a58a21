//! Translation table and persisted language preference.
//!
//! Lookups fall back to the key itself, never to another language, so a
//! missing Hindi string shows up as its key rather than silently as English.

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{OfflineStore, LANGUAGE_KEY};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Exact tag match; anything else is unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    /// Short label used by the language switcher
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::En => "En",
            Self::Hi => "हि",
        }
    }

    fn table(self) -> &'static HashMap<&'static str, &'static str> {
        match self {
            Self::En => &EN,
            Self::Hi => &HI,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_tag(s.trim()).ok_or_else(|| format!("unsupported language '{s}' (use en or hi)"))
    }
}

static EN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::EN.iter().copied().collect());
static HI: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::HI.iter().copied().collect());

/// Localized string for `key`, or `key` itself when the table lacks it.
pub fn translate(language: Language, key: &str) -> &str {
    language.table().get(key).copied().unwrap_or(key)
}

/// String-tag variant of [`translate`]; unknown tags also fall back to `key`.
pub fn translate_tag<'a>(tag: &str, key: &'a str) -> &'a str {
    Language::from_tag(tag).map_or(key, |language| translate(language, key))
}

/// The active UI language, persisted under `<ns>-language`.
#[derive(Clone)]
pub struct LanguagePreference {
    store: OfflineStore,
    current: Language,
}

impl LanguagePreference {
    /// Read the stored tag; missing or unrecognized values fall back to the
    /// default language without error.
    pub fn load(store: OfflineStore) -> Self {
        let current = match store.load_text(LANGUAGE_KEY) {
            Ok(Some(tag)) => Language::from_tag(&tag).unwrap_or_else(|| {
                tracing::debug!("Ignoring unrecognized stored language '{}'", tag);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(error) => {
                tracing::warn!("Failed to read stored language: {}", error);
                Language::default()
            }
        };
        Self { store, current }
    }

    pub const fn current(&self) -> Language {
        self.current
    }

    /// Switch language and persist the choice.
    ///
    /// The in-memory language changes even if the write fails.
    pub fn set(&mut self, language: Language) -> Result<()> {
        self.current = language;
        self.store.save_text(LANGUAGE_KEY, language.tag())
    }

    /// Translate `key` in the current language
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.current, key)
    }
}
