// SPDX-License-Identifier: MPL-2.0
//! Harvest countdown classification.

use crate::config::{MILLIS_PER_DAY, NEAR_HARVEST_WINDOW_DAYS};
use chrono::{DateTime, Utc};

/// How close a crop is to its expected harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestUrgency {
    /// No expected harvest date is known.
    Unset,
    /// The expected date has passed by `days`.
    Overdue { days: u32 },
    /// Due within the near-harvest window (1 to 7 days).
    NearHarvest { days_left: u32 },
    /// Due today or further out than the window.
    OnTrack { days_left: u32 },
}

impl HarvestUrgency {
    /// The number shown next to the countdown label.
    pub fn display_days(self) -> u32 {
        match self {
            HarvestUrgency::Unset => 0,
            HarvestUrgency::Overdue { days } => days,
            HarvestUrgency::NearHarvest { days_left } | HarvestUrgency::OnTrack { days_left } => {
                days_left
            }
        }
    }

    pub fn is_overdue(self) -> bool {
        matches!(self, HarvestUrgency::Overdue { .. })
    }

    pub fn is_near_harvest(self) -> bool {
        matches!(self, HarvestUrgency::NearHarvest { .. })
    }

    /// Catalog key of the countdown label.
    pub fn label_key(self) -> &'static str {
        if self.is_overdue() {
            "crops.days_overdue"
        } else {
            "crops.days_left"
        }
    }

    /// Text tint token; `None` for unflagged countdowns.
    pub fn tint(self) -> Option<&'static str> {
        match self {
            HarvestUrgency::Overdue { .. } => Some("text-destructive"),
            HarvestUrgency::NearHarvest { .. } => Some("text-warning"),
            HarvestUrgency::Unset | HarvestUrgency::OnTrack { .. } => None,
        }
    }
}

/// Whole days from `now` until `expected`, rounded up.
pub fn days_until(expected: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = expected.signed_duration_since(now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Classifies a crop's harvest countdown.
///
/// Zero days remaining classifies as [`HarvestUrgency::OnTrack`], neither
/// overdue nor near harvest.
pub fn harvest_urgency(expected: Option<DateTime<Utc>>, now: DateTime<Utc>) -> HarvestUrgency {
    let Some(expected) = expected else {
        return HarvestUrgency::Unset;
    };
    let days = days_until(expected, now);
    let magnitude = u32::try_from(days.unsigned_abs()).unwrap_or(u32::MAX);
    if days < 0 {
        HarvestUrgency::Overdue { days: magnitude }
    } else if days > 0 && days <= NEAR_HARVEST_WINDOW_DAYS {
        HarvestUrgency::NearHarvest {
            days_left: magnitude,
        }
    } else {
        HarvestUrgency::OnTrack {
            days_left: magnitude,
        }
    }
}
