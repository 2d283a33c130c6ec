//! System language detection utilities.

use std::env;

use crate::i18n::LanguageTag;

/// What: Detect the display language from environment variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Some(tag)` when a supported language is configured, `None` otherwise
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in priority order
/// - Maps full locale strings like "hi_IN.UTF-8" onto the closed tag set
/// - Returns `None` for unset or unsupported locales; callers default to
///   English
pub fn detect_system_tag() -> Option<LanguageTag> {
    let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &locale_vars {
        if let Ok(locale_str) = env::var(var_name)
            && !locale_str.trim().is_empty()
        {
            return LanguageTag::from_code(&locale_str);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide; keep it in one test to avoid
    // interference between parallel test threads.
    #[test]
    fn detect_system_tag_honors_variable_priority() {
        let original_lang = env::var("LANG").ok();
        let original_lc_all = env::var("LC_ALL").ok();
        let original_lc_messages = env::var("LC_MESSAGES").ok();

        unsafe {
            env::set_var("LANG", "hi_IN.UTF-8");
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
        }
        assert_eq!(detect_system_tag(), Some(LanguageTag::Hi));

        unsafe {
            env::set_var("LC_ALL", "en_US.UTF-8");
        }
        // LC_ALL wins over LANG.
        assert_eq!(detect_system_tag(), Some(LanguageTag::En));

        unsafe {
            env::set_var("LC_ALL", "fr_FR.UTF-8");
        }
        // Set but unsupported: not detectable.
        assert_eq!(detect_system_tag(), None);

        unsafe {
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
            env::remove_var("LANG");
        }
        assert_eq!(detect_system_tag(), None);

        unsafe {
            if let Some(val) = original_lang {
                env::set_var("LANG", val);
            } else {
                env::remove_var("LANG");
            }
            if let Some(val) = original_lc_all {
                env::set_var("LC_ALL", val);
            } else {
                env::remove_var("LC_ALL");
            }
            if let Some(val) = original_lc_messages {
                env::set_var("LC_MESSAGES", val);
            } else {
                env::remove_var("LC_MESSAGES");
            }
        }
    }
}
