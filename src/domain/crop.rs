// SPDX-License-Identifier: MPL-2.0
//! Crop records as shown on the crop health cards.

use super::harvest::{harvest_urgency, HarvestUrgency};
use super::health::HealthStatus;
use crate::config::DEFAULT_HEALTH_SCORE;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropType {
    Cereals,
    Vegetables,
    Fruits,
    CashCrops,
    Other,
}

impl CropType {
    pub fn as_str(self) -> &'static str {
        match self {
            CropType::Cereals => "cereals",
            CropType::Vegetables => "vegetables",
            CropType::Fruits => "fruits",
            CropType::CashCrops => "cash_crops",
            CropType::Other => "other",
        }
    }
}

/// A crop as known to the dashboard; any field may still be unrecorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    pub id: String,
    pub name: String,
    pub crop_type: CropType,
    pub field_id: String,
    pub status: Option<HealthStatus>,
    /// 0-100.
    pub health_score: Option<u8>,
    pub sowing_date: Option<NaiveDate>,
    pub expected_harvest: Option<DateTime<Utc>>,
    pub photo_count: usize,
}

/// Display-ready view of a [`Crop`] at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropCardState {
    pub status: HealthStatus,
    pub health_score: u8,
    pub harvest: HarvestUrgency,
}

impl Crop {
    /// Fills display defaults (status good, score 85) and classifies the
    /// harvest countdown against `now`.
    pub fn card_state(&self, now: DateTime<Utc>) -> CropCardState {
        CropCardState {
            status: self.status.unwrap_or(HealthStatus::Good),
            health_score: self.health_score.unwrap_or(DEFAULT_HEALTH_SCORE),
            harvest: harvest_urgency(self.expected_harvest, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bare_crop() -> Crop {
        Crop {
            id: "1".into(),
            name: "Rice Field A".into(),
            crop_type: CropType::Cereals,
            field_id: "A".into(),
            status: None,
            health_score: None,
            sowing_date: None,
            expected_harvest: None,
            photo_count: 0,
        }
    }

    #[test]
    fn unrecorded_fields_use_display_defaults() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let state = bare_crop().card_state(now);
        assert_eq!(state.status, HealthStatus::Good);
        assert_eq!(state.health_score, 85);
        assert_eq!(state.harvest, HarvestUrgency::Unset);
    }

    #[test]
    fn recorded_fields_pass_through() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let crop = Crop {
            status: Some(HealthStatus::Warning),
            health_score: Some(0),
            expected_harvest: Some(Utc.with_ymd_and_hms(2024, 4, 30, 0, 0, 0).unwrap()),
            ..bare_crop()
        };
        let state = crop.card_state(now);
        assert_eq!(state.status, HealthStatus::Warning);
        assert_eq!(state.health_score, 0);
        assert_eq!(state.harvest, HarvestUrgency::Overdue { days: 10 });
    }

    #[test]
    fn crop_type_names() {
        assert_eq!(CropType::CashCrops.as_str(), "cash_crops");
        assert_eq!(CropType::Vegetables.as_str(), "vegetables");
    }
}
