//! Internationalization (i18n) module for Kalasetu.
//!
//! This module provides language tag detection, dictionary resolution and
//! translation lookup for the dashboard UI.
//!
//! # Overview
//!
//! The i18n system supports:
//! - **Closed tag set**: supported languages form the [`LanguageTag`] enum;
//!   an unsupported language is a type-level impossibility, not a runtime error
//! - **Tag Detection**: auto-detects the system language from environment
//!   variables (`LC_ALL`, `LC_MESSAGES`, `LANG`), defaulting to English
//! - **Dictionary Resolution**: [`resolve`] returns the complete, immutable
//!   [`Dictionary`] for a tag — the same `'static` reference on every call
//! - **Translation Lookup**: [`t`], [`t_fmt`] and [`t_fmt1`] helpers for
//!   translation access with English fallback
//!
//! # Catalog Files
//!
//! Catalogs are embedded YAML documents under `locales/{code}.yml`
//! (`locales/en.yml`, `locales/hi.yml`). Each file contains a nested structure
//! that is flattened into dot-notation keys:
//!
//! ```yaml
//! en:
//!   dashboard:
//!     event:
//!       upcoming: "Upcoming"
//! ```
//!
//! This becomes accessible as `dashboard.event.upcoming`. Keys are grouped by
//! feature area: `nav`, `common`, `auth`, `dashboard`, `admin`.
//!
//! # Usage
//!
//! ```rust
//! use kalasetu::i18n::{self, LanguageTag};
//!
//! let dict = i18n::resolve(LanguageTag::En);
//! let label = i18n::t(dict, "dashboard.event.upcoming");
//! let more = i18n::t_fmt1(dict, "common.more_tags", 2);
//! ```
//!
//! # Error Handling
//!
//! - [`resolve`] cannot fail: both catalogs are embedded and pre-built on
//!   first access
//! - Missing translation keys fall back to English, then to the key itself
//!   (for debugging), with debug-level log messages
//! - Override catalogs loaded from disk report errors as `Result` and never
//!   crash the application

mod catalog;
mod detection;
mod loader;
pub mod translations;

pub use catalog::{REQUIRED_KEYS, resolve};
pub use detection::detect_system_tag;
pub use loader::{load_catalog_file, load_override_dir};
pub use translations::{Dictionary, TranslationMap};

/// Supported display language, as a closed set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    /// English (fallback language).
    #[default]
    En,
    /// Hindi.
    Hi,
}

impl LanguageTag {
    /// All supported tags, in catalog order.
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// What: BCP 47-style language code for this tag.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// What: Parse a language code into a tag.
    ///
    /// Inputs:
    /// - `code`: Language code, optionally with region/encoding suffix
    ///   (e.g., "hi", "hi-IN", "en_US.UTF-8")
    ///
    /// Output:
    /// - `Some(tag)` when the primary subtag is supported, `None` otherwise
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    /// What: The next tag in catalog order, wrapping around.
    ///
    /// Used by the dashboard's language toggle key.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// What: Get a translation for a given key from a dictionary.
///
/// Inputs:
/// - `dict`: Dictionary for the active language
/// - `key`: Dot-notation key (e.g., "dashboard.event.upcoming")
///
/// Output:
/// - Translated string, or the key itself if no catalog has it
///
/// Details:
/// - Falls back to the embedded English catalog when the active language is
///   missing the key
pub fn t(dict: &Dictionary, key: &str) -> String {
    if let Some(text) = dict.get(key) {
        return text.to_string();
    }
    if dict.tag() != LanguageTag::En
        && let Some(text) = resolve(LanguageTag::En).get(key)
    {
        tracing::debug!(
            "Translation key '{}' not found for '{}', using English fallback",
            key,
            dict.tag()
        );
        return text.to_string();
    }
    tracing::debug!(
        "Missing translation key: '{}'. Returning key as-is. Please add this key to the catalogs.",
        key
    );
    key.to_string()
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `dict`: Dictionary for the active language
/// - `key`: Dot-notation key
/// - `args`: Format arguments (as Display trait objects)
///
/// Output:
/// - Formatted translated string
///
/// Details:
/// - Replaces placeholders in order: first {} gets first arg, etc.
pub fn t_fmt(dict: &Dictionary, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = t(dict, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// What: Get a translation with a single format argument (convenience).
pub fn t_fmt1<T: std::fmt::Display>(dict: &Dictionary, key: &str, arg: T) -> String {
    t_fmt(dict, key, &[&arg])
}
