// SPDX-License-Identifier: MPL-2.0
//! Text front-end: wires the preference store, the localization service and
//! the dashboard report together.

pub mod paths;
pub mod report;
pub mod sample;

use crate::domain::navigation::Page;
use crate::error::Result;
use crate::i18n::{Language, LocaleCatalog, Localization};
use crate::storage::{FileStore, MemoryStore, PreferenceStore};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Startup options parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Switch to (and persist) this language before rendering.
    pub lang: Option<Language>,
    pub config_dir: Option<String>,
    /// Date treated as "today"; defaults to the current UTC date.
    pub today: Option<NaiveDate>,
    /// Print the supported languages instead of the dashboard.
    pub list_languages: bool,
}

/// Resolves the preference file, falling back to a session-only store when
/// no config directory exists.
pub fn open_store(flags: &Flags) -> Box<dyn PreferenceStore> {
    paths::init_cli_override(flags.config_dir.clone());
    match FileStore::in_config_dir(None) {
        Some(store) => {
            tracing::debug!("using preferences at {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("no config directory available; language choice will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// Renders the requested output over `store`.
pub fn run<S: PreferenceStore>(flags: &Flags, store: S) -> Result<String> {
    let catalog = Arc::new(LocaleCatalog::embedded()?);
    let mut l10n = Localization::new(catalog, store);

    if let Some(language) = flags.lang {
        l10n.set_language(language);
    }

    if flags.list_languages {
        return Ok(list_languages(&l10n));
    }

    let today = flags.today.unwrap_or_else(|| Utc::now().date_naive());
    let snapshot = sample::demo_snapshot(today);
    Ok(report::render_dashboard(
        &l10n,
        &snapshot,
        sample::midnight(today),
        Page::Dashboard,
    ))
}

fn list_languages<S: PreferenceStore>(l10n: &Localization<S>) -> String {
    Language::ALL
        .iter()
        .map(|&language| {
            let marker = if language == l10n.language() { '*' } else { ' ' };
            format!(
                "{marker} {} {} ({})",
                language.code(),
                language.native_name(),
                l10n.tr_in(language, "app.name")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LANGUAGE_STORAGE_KEY;

    #[test]
    fn list_marks_the_persisted_language() {
        let store = MemoryStore::with_entry(LANGUAGE_STORAGE_KEY, "hi");
        let flags = Flags {
            list_languages: true,
            ..Flags::default()
        };
        let output = run(&flags, store).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  en English (FarmFlow)");
        assert!(lines[1].starts_with("* hi हिन्दी"));
        assert!(lines[2].starts_with("  kn ಕನ್ನಡ"));
    }

    #[test]
    fn lang_flag_switches_before_rendering() {
        let flags = Flags {
            lang: Some(Language::Kannada),
            today: NaiveDate::from_ymd_opt(2024, 5, 10),
            ..Flags::default()
        };
        let output = run(&flags, MemoryStore::new()).unwrap();
        assert!(output.starts_with("ಫಾರ್ಮ್‌ಫ್ಲೋ"));
    }
}
