//! Core application state for the Kalasetu dashboard.
//!
//! [`AppState`] owns the entity list shown on screen, the active language,
//! the per-language dictionaries (embedded catalogs plus any operator
//! overrides), list selection, and the per-card local like toggles. It is
//! mutated only by the event layer and read by the UI layer.

use std::collections::HashMap;

use ratatui::widgets::ListState;

use crate::cards::{ActionKind, LikeToggle, RenderOptions};
use crate::i18n::{self, Dictionary, LanguageTag, TranslationMap};
use crate::model::{EntityId, EntityRecord};

/// Central mutable state of the dashboard.
pub struct AppState {
    /// Active display language.
    tag: LanguageTag,
    /// One merged dictionary per supported language.
    dictionaries: HashMap<LanguageTag, Dictionary>,
    /// Records shown in the entity list, in fixture order.
    pub entities: Vec<EntityRecord>,
    /// Selection state of the entity list widget.
    pub list_state: ListState,
    /// Whether cards expose their actions row.
    pub show_actions: bool,
    /// Local like fallback, one toggle per card instance.
    like_toggles: HashMap<EntityId, LikeToggle>,
}

impl AppState {
    /// What: Build the dashboard state.
    ///
    /// Inputs:
    /// - `tag`: Initial display language
    /// - `entities`: Records to list
    /// - `overrides`: Catalog override entries per language (may be empty)
    ///
    /// Details:
    /// - Dictionaries for every supported language are materialized up front
    ///   so a language toggle is a plain map lookup
    #[must_use]
    pub fn new(
        tag: LanguageTag,
        entities: Vec<EntityRecord>,
        overrides: Vec<(LanguageTag, TranslationMap)>,
    ) -> Self {
        let mut override_map: HashMap<LanguageTag, TranslationMap> =
            overrides.into_iter().collect();
        let mut dictionaries = HashMap::new();
        for lang in LanguageTag::ALL {
            let base = i18n::resolve(lang);
            let dict = override_map
                .remove(&lang)
                .map_or_else(|| base.clone(), |extra| base.with_overrides(extra));
            dictionaries.insert(lang, dict);
        }

        let mut list_state = ListState::default();
        if !entities.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            tag,
            dictionaries,
            entities,
            list_state,
            show_actions: true,
            like_toggles: HashMap::new(),
        }
    }

    /// Active display language.
    #[must_use]
    pub const fn tag(&self) -> LanguageTag {
        self.tag
    }

    /// Dictionary for the active language.
    ///
    /// Every supported language was materialized in [`AppState::new`], so
    /// this cannot miss; the embedded English catalog covers a (impossible)
    /// gap anyway.
    #[must_use]
    pub fn dict(&self) -> &Dictionary {
        self.dictionaries
            .get(&self.tag)
            .unwrap_or_else(|| i18n::resolve(LanguageTag::En))
    }

    /// What: Switch to the next supported language.
    pub const fn cycle_language(&mut self) {
        self.tag = self.tag.cycled();
    }

    /// Currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&EntityRecord> {
        self.list_state
            .selected()
            .and_then(|i| self.entities.get(i))
    }

    /// What: Move the selection down, clamping at the last entry.
    pub fn select_next(&mut self) {
        if self.entities.is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| (i + 1).min(self.entities.len() - 1));
        self.list_state.select(Some(next));
    }

    /// What: Move the selection up, clamping at the first entry.
    pub fn select_prev(&mut self) {
        if self.entities.is_empty() {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// What: Dispatch a like for the selected card.
    ///
    /// Details:
    /// - The demo registers no callbacks, so this exercises the local
    ///   fallback: the card instance's toggle flips
    pub fn like_selected(&mut self) {
        let Some(id) = self.selected().map(|r| r.id().clone()) else {
            return;
        };
        self.like_toggles.entry(id.clone()).or_default();
        let Some(dict) = self.dictionaries.get(&self.tag) else {
            return;
        };
        if let Some(toggle) = self.like_toggles.get(&id) {
            RenderOptions::new(dict).dispatch(ActionKind::Like, &id, toggle);
        }
    }

    /// Whether the card instance for an entity is locally liked.
    #[must_use]
    pub fn is_liked(&self, id: &EntityId) -> bool {
        self.like_toggles.get(id).is_some_and(LikeToggle::is_liked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn sample_state() -> AppState {
        AppState::new(LanguageTag::En, fixtures::sample_entities(), Vec::new())
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut app = sample_state();
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_prev();
        assert_eq!(app.list_state.selected(), Some(0));

        for _ in 0..100 {
            app.select_next();
        }
        assert_eq!(app.list_state.selected(), Some(app.entities.len() - 1));
    }

    #[test]
    fn like_selected_uses_the_local_fallback_per_instance() {
        let mut app = sample_state();
        let first_id = app.entities[0].id().clone();
        let second_id = app.entities[1].id().clone();

        app.like_selected();
        assert!(app.is_liked(&first_id));
        assert!(!app.is_liked(&second_id));

        app.like_selected();
        assert!(!app.is_liked(&first_id));
    }

    #[test]
    fn cycle_language_switches_dictionaries() {
        let mut app = sample_state();
        assert_eq!(app.dict().tag(), LanguageTag::En);
        app.cycle_language();
        assert_eq!(app.tag(), LanguageTag::Hi);
        assert_eq!(app.dict().tag(), LanguageTag::Hi);
    }

    #[test]
    fn overrides_layer_on_top_of_embedded_catalogs() {
        let mut extra = TranslationMap::new();
        extra.insert("common.like".to_string(), "Appreciate".to_string());
        let app = AppState::new(
            LanguageTag::En,
            Vec::new(),
            vec![(LanguageTag::En, extra)],
        );
        assert_eq!(app.dict().get("common.like"), Some("Appreciate"));
        // Untouched keys still come from the embedded catalog.
        assert_eq!(app.dict().get("common.share"), Some("Share"));
    }
}
