//! Localization lookup.
//!
//! Translation tables are flat `key = "text"` TOML files compiled into the
//! binary. [`Locale`] is the reactive handle components read from; any
//! view that calls [`Locale::t`] inside a reactive closure re-renders when
//! the language changes.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use leptos::logging::warn;
use leptos::prelude::*;

use crate::config::i18n::{EN_TABLE, LANGUAGE_KEY, ZH_TABLE};
use crate::core::storage::KeyValueStore;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Short language code used for persistence.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a language code. Region suffixes are ignored (`zh-CN` -> `Zh`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

type Table = HashMap<String, String>;

fn parse_table(name: &str, source: &str) -> Table {
    toml::from_str(source).unwrap_or_else(|e| {
        warn!("Ignoring malformed translation table '{}': {}", name, e);
        Table::new()
    })
}

static TABLES: LazyLock<HashMap<Language, Table>> = LazyLock::new(|| {
    HashMap::from([
        (Language::En, parse_table("en", EN_TABLE)),
        (Language::Zh, parse_table("zh", ZH_TABLE)),
    ])
});

/// Look up `key` for `language`.
///
/// Falls back to English, then to the key itself.
pub fn translate(language: Language, key: &str) -> String {
    let lookup = |lang: Language| TABLES.get(&lang).and_then(|t| t.get(key)).cloned();
    lookup(language)
        .or_else(|| lookup(Language::En))
        .unwrap_or_else(|| key.to_string())
}

/// Reactive localization context.
#[derive(Clone, Copy)]
pub struct Locale {
    language: RwSignal<Language>,
    store: StoredValue<Arc<dyn KeyValueStore>>,
}

impl Locale {
    /// Restore the saved language from `store`, defaulting to English.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let language = store
            .get_item(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();

        Self {
            language: RwSignal::new(language),
            store: StoredValue::new(store),
        }
    }

    /// Current language (tracked).
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Translate `key` in the current language (tracked).
    pub fn t(&self, key: &str) -> String {
        translate(self.language.get(), key)
    }

    /// Switch language and persist the choice.
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        let saved = self
            .store
            .with_value(|store| store.set_item(LANGUAGE_KEY, language.code()));
        if let Err(e) = saved {
            warn!("Failed to save language preference: {}", e);
        }
    }

    /// Switch to the other supported language.
    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }
}
