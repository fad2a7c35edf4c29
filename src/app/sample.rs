// SPDX-License-Identifier: MPL-2.0
//! Bundled demo farm used by the text front-end.
//!
//! Dates are expressed relative to `today` so the report always shows one
//! crop overdue, one near harvest and one on track.

use crate::domain::activity::{Alert, Priority, TaskStatus, WorkTask};
use crate::domain::crop::{Crop, CropType};
use crate::domain::stats::{FarmStats, StatKind, Trend};
use crate::domain::weather::{WeatherCondition, WeatherReading};
use crate::domain::HealthStatus;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// Everything the dashboard report shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: FarmStats,
    pub trends: Vec<(StatKind, Trend)>,
    pub weather: WeatherReading,
    pub crops: Vec<Crop>,
    pub alerts: Vec<Alert>,
    pub tasks: Vec<WorkTask>,
}

/// Start of `date` in UTC.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn shift(today: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        today.checked_sub_days(magnitude)
    } else {
        today.checked_add_days(magnitude)
    };
    shifted.unwrap_or(today)
}

pub fn demo_snapshot(today: NaiveDate) -> DashboardSnapshot {
    let crop = |id: &str,
                field_id: &str,
                name: &str,
                crop_type: CropType,
                status: HealthStatus,
                score: u8,
                sown: i64,
                harvest: i64| Crop {
        id: id.to_string(),
        name: name.to_string(),
        crop_type,
        field_id: field_id.to_string(),
        status: Some(status),
        health_score: Some(score),
        sowing_date: Some(shift(today, sown)),
        expected_harvest: Some(midnight(shift(today, harvest))),
        photo_count: 0,
    };

    let task = |id: &str, description: &str, priority: Priority, status: TaskStatus| WorkTask {
        id: id.to_string(),
        description: description.to_string(),
        priority,
        due: today,
        status,
    };

    DashboardSnapshot {
        stats: FarmStats {
            total_crops: 24,
            healthy_crops: 20,
            total_workers: 8,
            active_workers: 7,
            total_fields: 5,
            average_health: 87.0,
            alerts: 3,
            tasks: 5,
            farm_status: HealthStatus::Excellent,
        },
        trends: vec![
            (StatKind::TotalCrops, Trend::up(12)),
            (StatKind::ActiveWorkers, Trend::up(5)),
            (StatKind::TotalFields, Trend::up(0)),
            (StatKind::HealthScore, Trend::up(8)),
            (StatKind::CropHealth, Trend::up(15)),
        ],
        weather: WeatherReading {
            temperature: 28.0,
            humidity: 65.0,
            wind_speed: 12.0,
            condition: Some(WeatherCondition::Sunny),
            rainfall: Some(0.0),
            pressure: Some(1013.0),
            visibility: Some(10.0),
            uv_index: Some(6.0),
        },
        crops: vec![
            crop("1", "A", "Rice Field A", CropType::Cereals, HealthStatus::Good, 92, -115, 5),
            crop("2", "B", "Tomato Field B", CropType::Vegetables, HealthStatus::Warning, 75, -88, -2),
            crop("3", "C", "Wheat Field C", CropType::Cereals, HealthStatus::Excellent, 96, -120, 40),
        ],
        alerts: vec![
            Alert {
                id: "1".into(),
                title: "Heavy Rain Expected".into(),
                message: "Heavy rainfall predicted for next 2 days. Consider protecting crops."
                    .into(),
                priority: Priority::High,
                is_read: false,
            },
            Alert {
                id: "2".into(),
                title: "Pest Alert - Field B".into(),
                message: "Tomato plants showing signs of aphid infestation.".into(),
                priority: Priority::Medium,
                is_read: false,
            },
            Alert {
                id: "3".into(),
                title: "Fertilizer Application Due".into(),
                message: "Rice Field A fertilizer application scheduled for tomorrow.".into(),
                priority: Priority::Low,
                is_read: true,
            },
        ],
        tasks: vec![
            task("1", "Apply fertilizer to Rice Field A", Priority::High, TaskStatus::Pending),
            task("2", "Inspect tomato plants for pests", Priority::Medium, TaskStatus::InProgress),
            task("3", "Water wheat crop", Priority::Low, TaskStatus::Completed),
        ],
    }
}
