// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! # Features
//!
//! - English, Hindi and Kannada catalogs embedded in the binary
//! - Dotted-key lookup (`weather.humidity`) over nested catalog tables
//! - Language choice persisted through a [`PreferenceStore`](crate::storage::PreferenceStore)
//! - Unresolved keys render as the key itself, never as an error
//!
//! # Example
//!
//! ```
//! use farmflow::i18n::{Language, LocaleCatalog, Localization};
//! use farmflow::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(LocaleCatalog::embedded().unwrap());
//! let mut l10n = Localization::new(catalog, MemoryStore::new());
//! assert_eq!(l10n.tr("nav.weather"), "Weather");
//!
//! l10n.set_language(Language::Hindi);
//! assert_eq!(l10n.tr("nav.weather"), "मौसम");
//! assert_eq!(l10n.tr("nav.unknown"), "nav.unknown");
//! ```

pub mod catalog;
pub mod language;
pub mod localization;

pub use catalog::{LocaleCatalog, Node};
pub use language::Language;
pub use localization::Localization;
