// SPDX-License-Identifier: MPL-2.0
//! `farmflow` is the core of a localized farm-management dashboard.
//!
//! It provides translation lookup over embedded English, Hindi and Kannada
//! catalogs, a persisted language preference, and the pure rules that turn
//! raw farm data (harvest dates, health scores, counts) into display states.

#![doc(html_root_url = "https://docs.rs/farmflow/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod storage;
