// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and fixed constants.
//!
//! # Categories
//!
//! - **Preferences**: Storage key and baseline language
//! - **Harvest**: Day length and near-harvest window
//! - **Crops**: Fallback health values for partially known crops
//! - **Weather**: Fallback readings for absent measurements

// ==========================================================================
// Preference Defaults
// ==========================================================================

/// Key under which the active language code is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "farmflow_language";

/// Baseline language code used when nothing valid is persisted.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

// ==========================================================================
// Harvest Defaults
// ==========================================================================

/// Milliseconds in one day, the unit of the harvest countdown.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// A crop due within this many days (exclusive of zero) is near harvest.
pub const NEAR_HARVEST_WINDOW_DAYS: i64 = 7;

// ==========================================================================
// Crop Defaults
// ==========================================================================

/// Health score shown for a crop without a recorded score.
pub const DEFAULT_HEALTH_SCORE: u8 = 85;

// ==========================================================================
// Weather Defaults
// ==========================================================================

/// Rainfall shown when no measurement exists (mm).
pub const DEFAULT_RAINFALL_MM: f64 = 0.0;

/// Sea-level standard pressure shown when no measurement exists (hPa).
pub const DEFAULT_PRESSURE_HPA: f64 = 1013.0;

/// Visibility shown when no measurement exists (km).
pub const DEFAULT_VISIBILITY_KM: f64 = 10.0;

/// UV index shown when no measurement exists.
pub const DEFAULT_UV_INDEX: f64 = 5.0;
