// SPDX-License-Identifier: MPL-2.0
//! Domain layer - derived presentation rules.
//!
//! Every function here is pure and stateless: raw values (dates, scores,
//! counts) go in, small categorical results come out. Nothing in this layer
//! knows about translation or rendering; labels are returned as catalog keys.
//!
//! # Modules
//!
//! - [`activity`]: Alert and task filters, priority tints
//! - [`crop`]: Crop records and their card state
//! - [`harvest`]: Harvest countdown classification ([`HarvestUrgency`](harvest::HarvestUrgency))
//! - [`health`]: Health categories and their display table
//! - [`navigation`]: Drawer and bottom-bar item tables
//! - [`stats`]: Summary metrics and the stat grid
//! - [`variant`]: Stat variants and their threshold rules
//! - [`weather`]: Weather condition table and reading defaults

pub mod activity;
pub mod crop;
pub mod harvest;
pub mod health;
pub mod navigation;
pub mod stats;
pub mod variant;
pub mod weather;

pub use harvest::{harvest_urgency, HarvestUrgency};
pub use health::{HealthStatus, HealthStyle};
pub use stats::{percentage, FarmStats, StatsGrid};
pub use variant::{Threshold, ThresholdRule, Variant};
