//! Command-line argument parsing for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::i18n::{LanguageTag, detect_system_tag};

/// Kalasetu - a terminal dashboard prototype for a maker discovery platform
#[derive(Parser, Debug)]
#[command(name = "kalasetu")]
#[command(version)]
#[command(about = "Browse maker profiles, services, resources, posts and events", long_about = None)]
pub struct Args {
    /// Display language (en, hi); defaults to the system locale
    #[arg(long)]
    pub locale: Option<String>,

    /// Load entity records from a JSON file instead of the embedded samples
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Directory with catalog override files (en.yml, hi.yml)
    #[arg(long)]
    pub locale_dir: Option<PathBuf>,

    /// Start with card action rows hidden
    #[arg(long)]
    pub hide_actions: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level from arguments.
///
/// Details:
/// - The verbose flag overrides the `--log-level` argument
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Resolve the display language from arguments and environment.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - A supported language tag, never failing
///
/// Details:
/// - Priority: `--locale` -> system locale -> English
/// - An unsupported `--locale` value logs a warning and falls through to
///   detection
#[must_use]
pub fn resolve_tag(args: &Args) -> LanguageTag {
    if let Some(code) = &args.locale {
        if let Some(tag) = LanguageTag::from_code(code) {
            return tag;
        }
        tracing::warn!(
            "Unsupported --locale '{}'. Supported: en, hi. Using system locale or default.",
            code
        );
    }
    detect_system_tag().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_locale(locale: Option<&str>) -> Args {
        Args {
            locale: locale.map(ToString::to_string),
            fixtures: None,
            locale_dir: None,
            hide_actions: false,
            log_level: "info".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn verbose_overrides_log_level() {
        let mut args = args_with_locale(None);
        assert_eq!(determine_log_level(&args), "info");
        args.verbose = true;
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    fn explicit_supported_locale_wins() {
        assert_eq!(resolve_tag(&args_with_locale(Some("hi"))), LanguageTag::Hi);
        assert_eq!(
            resolve_tag(&args_with_locale(Some("en-GB"))),
            LanguageTag::En
        );
    }
}
