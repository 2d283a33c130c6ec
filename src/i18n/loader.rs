//! Catalog override loading from disk.
//!
//! The embedded catalogs are always the base; an operator may point the demo
//! binary at a directory of replacement YAML catalogs (`en.yml`, `hi.yml`) to
//! adjust wording without rebuilding. Loading failures are reported, logged by
//! the caller, and never fatal.

use std::fs;
use std::path::Path;

use crate::i18n::LanguageTag;
use crate::i18n::catalog::parse_catalog_yaml;
use crate::i18n::translations::TranslationMap;

/// What: Load a catalog override file for one language tag.
///
/// Inputs:
/// - `tag`: Language the file is for
/// - `dir`: Directory containing `{code}.yml` files
///
/// Output:
/// - `Result<TranslationMap, String>` with flattened entries or an error
///
/// # Errors
/// - Returns `Err` when the file does not exist in the directory
/// - Returns `Err` when the file cannot be read (I/O error)
/// - Returns `Err` when the file is empty
/// - Returns `Err` when the YAML content cannot be parsed
pub fn load_catalog_file(tag: LanguageTag, dir: &Path) -> Result<TranslationMap, String> {
    let file_path = dir.join(format!("{}.yml", tag.code()));

    if !file_path.exists() {
        return Err(format!(
            "Catalog file not found: {}. Expected one file per language code.",
            file_path.display()
        ));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read catalog file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Catalog file is empty: {}", file_path.display()));
    }

    parse_catalog_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse catalog file {}: {}. Please check YAML syntax.",
            file_path.display(),
            e
        )
    })
}

/// What: Load override entries for every supported tag, tolerating gaps.
///
/// Inputs:
/// - `dir`: Override directory
///
/// Output:
/// - One `(tag, entries)` pair per file that loaded successfully
///
/// Details:
/// - A missing or broken file only disables overrides for that language; the
///   embedded catalog still serves it
pub fn load_override_dir(dir: &Path) -> Vec<(LanguageTag, TranslationMap)> {
    let mut loaded = Vec::new();
    for tag in LanguageTag::ALL {
        match load_catalog_file(tag, dir) {
            Ok(entries) => {
                tracing::debug!(
                    "Loaded catalog override for '{}' with {} keys",
                    tag,
                    entries.len()
                );
                loaded.push((tag, entries));
            }
            Err(e) => {
                tracing::warn!("Skipping catalog override for '{}': {}", tag, e);
            }
        }
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_catalog_file_reads_and_flattens() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let yaml_content = r#"
en:
  common:
    like: "Appreciate"
"#;
        fs::write(temp_dir.path().join("en.yml"), yaml_content)
            .expect("Failed to write test catalog file");

        let result = load_catalog_file(LanguageTag::En, temp_dir.path())
            .expect("Failed to load test catalog file");
        assert_eq!(result.get("common.like"), Some(&"Appreciate".to_string()));
    }

    #[test]
    fn load_catalog_file_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let result = load_catalog_file(LanguageTag::Hi, temp_dir.path());
        assert!(result.expect_err("missing file must error").contains("not found"));
    }

    #[test]
    fn load_catalog_file_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        fs::write(temp_dir.path().join("en.yml"), "").expect("Failed to write empty test file");

        let result = load_catalog_file(LanguageTag::En, temp_dir.path());
        assert!(result.expect_err("empty file must error").contains("empty"));
    }

    #[test]
    fn load_override_dir_tolerates_partial_coverage() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let yaml_content = r#"
hi:
  common:
    like: "सराहना"
"#;
        fs::write(temp_dir.path().join("hi.yml"), yaml_content)
            .expect("Failed to write test catalog file");

        let loaded = load_override_dir(temp_dir.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, LanguageTag::Hi);
    }
}
