// SPDX-License-Identifier: MPL-2.0
//! The localization service: active language, persistence, lookup.

use super::{Language, LocaleCatalog};
use crate::config::LANGUAGE_STORAGE_KEY;
use crate::storage::PreferenceStore;
use std::sync::Arc;

/// Owns the active language and resolves translation keys against it.
///
/// The preference store is read once, in [`Localization::new`]; every
/// [`Localization::set_language`] writes through to it. Each instance owns
/// its store, so independent instances never observe each other's changes.
pub struct Localization<S> {
    catalog: Arc<LocaleCatalog>,
    store: S,
    language: Language,
}

impl<S: PreferenceStore> Localization<S> {
    /// Restores the persisted language from `store`, or uses the baseline.
    pub fn new(catalog: Arc<LocaleCatalog>, store: S) -> Self {
        let language = restore_language(&store);
        Self {
            catalog,
            store,
            language,
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the active language and persists the choice.
    ///
    /// A storage failure is logged and otherwise ignored: the new language
    /// stays active for this session.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(err) = self.store.set(LANGUAGE_STORAGE_KEY, language.code()) {
            tracing::warn!("failed to persist language '{}': {err}", language.code());
        }
    }

    /// Resolves a dotted `key` in the active language, or returns `key`.
    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        self.tr_in(self.language, key)
    }

    /// Resolves a dotted `key` in `language`, or returns `key`.
    pub fn tr_in<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.catalog.lookup(language, key).unwrap_or(key)
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives back the store, e.g. to build a fresh service over it.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn restore_language<S: PreferenceStore>(store: &S) -> Language {
    match store.get(LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
            tracing::debug!("ignoring unsupported persisted language '{code}'");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(err) => {
            tracing::warn!("failed to read persisted language: {err}");
            Language::default()
        }
    }
}
