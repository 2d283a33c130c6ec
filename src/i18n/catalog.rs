//! Embedded catalogs and the dictionary resolver.

use std::sync::OnceLock;

use crate::i18n::LanguageTag;
use crate::i18n::translations::{Dictionary, TranslationMap};

/// Embedded English catalog (fallback language).
const CATALOG_EN: &str = include_str!("../../locales/en.yml");
/// Embedded Hindi catalog.
const CATALOG_HI: &str = include_str!("../../locales/hi.yml");

/// The documented key set every catalog must cover.
///
/// Grouped by feature area: navigation, common actions, auth, dashboard and
/// admin. The completeness test asserts a non-empty value for each key in
/// every supported language.
pub const REQUIRED_KEYS: &[&str] = &[
    "nav.home",
    "nav.explore",
    "nav.services",
    "nav.resources",
    "nav.events",
    "nav.community",
    "common.like",
    "common.liked",
    "common.comment",
    "common.share",
    "common.flag",
    "common.download",
    "common.download_pending",
    "common.connect",
    "common.search",
    "common.cancel",
    "common.close",
    "common.more_tags",
    "common.free",
    "common.by",
    "auth.sign_in",
    "auth.sign_out",
    "auth.register",
    "auth.email",
    "auth.password",
    "auth.display_name",
    "auth.errors.required",
    "auth.errors.email_invalid",
    "auth.errors.too_short",
    "auth.errors.too_long",
    "dashboard.title",
    "dashboard.welcome",
    "dashboard.sections.profiles",
    "dashboard.sections.services",
    "dashboard.sections.resources",
    "dashboard.sections.posts",
    "dashboard.sections.events",
    "dashboard.labels.craft",
    "dashboard.labels.likes",
    "dashboard.labels.comments",
    "dashboard.labels.downloads",
    "dashboard.labels.file_size",
    "dashboard.labels.price",
    "dashboard.labels.location",
    "dashboard.labels.starts",
    "dashboard.labels.ends",
    "dashboard.event.upcoming",
    "dashboard.event.ongoing",
    "dashboard.event.past",
    "dashboard.hints.quit",
    "dashboard.hints.navigate",
    "dashboard.hints.language",
    "dashboard.hints.actions",
    "dashboard.hints.like",
    "admin.title",
    "admin.approve",
    "admin.reject",
    "admin.pending_queue",
    "admin.flagged_content",
];

static DICT_EN: OnceLock<Dictionary> = OnceLock::new();
static DICT_HI: OnceLock<Dictionary> = OnceLock::new();

/// What: Resolve the dictionary for a language tag.
///
/// Inputs:
/// - `tag`: One of the supported language tags
///
/// Output:
/// - The complete, immutable dictionary for that tag; the same `'static`
///   reference on every call
///
/// Details:
/// - Dictionaries are built once from the embedded catalogs on first access
/// - No failure mode: the tag set is closed and both catalogs are embedded
pub fn resolve(tag: LanguageTag) -> &'static Dictionary {
    match tag {
        LanguageTag::En => DICT_EN.get_or_init(|| build_dictionary(tag, CATALOG_EN)),
        LanguageTag::Hi => DICT_HI.get_or_init(|| build_dictionary(tag, CATALOG_HI)),
    }
}

/// What: Build a dictionary from embedded catalog YAML.
///
/// Details:
/// - An embedded catalog failing to parse indicates a packaging defect; the
///   error is logged and an empty catalog substituted so lookups degrade to
///   English/key fallback instead of aborting
fn build_dictionary(tag: LanguageTag, yaml: &str) -> Dictionary {
    let entries = parse_catalog_yaml(yaml).unwrap_or_else(|e| {
        tracing::error!("Embedded catalog for '{}' is invalid: {}", tag, e);
        TranslationMap::new()
    });
    tracing::debug!(
        "Built dictionary for '{}' with {} translation keys",
        tag,
        entries.len()
    );
    Dictionary::new(tag, entries)
}

/// What: Parse catalog YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: Catalog file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// # Errors
/// - Returns `Err` when the YAML content cannot be parsed
///
/// Details:
/// - Expects a single top-level language key (e.g., "hi:")
/// - Flattens the nested structure into dot-notation keys
pub(crate) fn parse_catalog_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = TranslationMap::new();

    // Skip the top-level language key and flatten everything beneath it.
    if let Some(root) = doc.as_mapping() {
        for (_lang_key, lang_value) in root {
            flatten_yaml_value(lang_value, "", &mut translations);
        }
    }

    Ok(translations)
}

/// What: Recursively flatten a YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "dashboard.labels")
/// - `translations`: Map to populate
///
/// Details:
/// - Nested maps become dot-notation keys (e.g., dashboard.labels.price)
/// - Scalars are stringified; sequences are preserved as YAML text
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Sequence(_) => {
            if let Ok(yaml_str) = serde_norway::to_string(value) {
                translations.insert(prefix.to_string(), yaml_str.trim().to_string());
            }
        }
        _ => {
            let val_str = value.as_str().map_or_else(
                || {
                    value.as_i64().map_or_else(
                        || {
                            value.as_f64().map_or_else(
                                || value.as_bool().map_or_else(String::new, |b| b.to_string()),
                                |n| n.to_string(),
                            )
                        },
                        |n| n.to_string(),
                    )
                },
                std::string::ToString::to_string,
            );
            translations.insert(prefix.to_string(), val_str);
        }
    }
}
