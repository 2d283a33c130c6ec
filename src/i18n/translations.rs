//! Dictionary type and raw translation map.

use std::collections::HashMap;

use crate::i18n::LanguageTag;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// The complete set of display strings for one language tag.
///
/// Immutable after construction; renderers and views borrow it for the
/// duration of a call and never retain it beyond that.
#[derive(Clone, Debug)]
pub struct Dictionary {
    /// Language this dictionary was built for.
    tag: LanguageTag,
    /// Flattened key/value entries.
    entries: TranslationMap,
}

impl Dictionary {
    /// What: Construct a dictionary from already-flattened entries.
    #[must_use]
    pub const fn new(tag: LanguageTag, entries: TranslationMap) -> Self {
        Self { tag, entries }
    }

    /// Language this dictionary serves.
    #[must_use]
    pub const fn tag(&self) -> LanguageTag {
        self.tag
    }

    /// What: Direct lookup of a dot-notation key.
    ///
    /// Output:
    /// - `Some(text)` when the key exists in this catalog, `None` otherwise
    ///
    /// Details:
    /// - No fallback is applied here; use [`crate::i18n::t`] for
    ///   English-then-key fallback behavior
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in this catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: Build a copy of this dictionary with entries layered on top.
    ///
    /// Inputs:
    /// - `overrides`: Entries that replace or extend the base catalog
    ///
    /// Output:
    /// - An owned dictionary for the same tag
    ///
    /// Details:
    /// - Used when the operator supplies a catalog override directory; the
    ///   embedded catalog stays untouched
    #[must_use]
    pub fn with_overrides(&self, overrides: TranslationMap) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides);
        Self {
            tag: self.tag,
            entries,
        }
    }
}
