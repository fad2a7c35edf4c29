// SPDX-License-Identifier: MPL-2.0
//! Farm summary metrics and the stat cards derived from them.

use super::health::HealthStatus;
use super::variant::{self, Variant};
use std::fmt;

/// Raw counts behind the dashboard's stat grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmStats {
    pub total_crops: u32,
    pub healthy_crops: u32,
    pub total_workers: u32,
    pub active_workers: u32,
    pub total_fields: u32,
    /// Mean crop health score (0-100).
    pub average_health: f64,
    pub alerts: u32,
    pub tasks: u32,
    pub farm_status: HealthStatus,
}

/// `part` as a whole percentage of `whole`, rounded half away from zero.
///
/// An empty `whole` yields 0.
pub fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

/// Which metric a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    TotalCrops,
    ActiveWorkers,
    TotalFields,
    HealthScore,
    ActiveAlerts,
    PendingTasks,
    CropHealth,
    FarmStatus,
}

impl StatKind {
    pub fn title_key(self) -> &'static str {
        match self {
            StatKind::TotalCrops => "dashboard.total_crops",
            StatKind::ActiveWorkers => "dashboard.active_workers",
            StatKind::TotalFields => "dashboard.total_fields",
            StatKind::HealthScore => "dashboard.health_score",
            StatKind::ActiveAlerts => "dashboard.active_alerts",
            StatKind::PendingTasks => "dashboard.pending_tasks",
            StatKind::CropHealth => "dashboard.crop_health",
            StatKind::FarmStatus => "dashboard.farm_status",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatKind::TotalCrops | StatKind::CropHealth => "sprout",
            StatKind::ActiveWorkers => "users",
            StatKind::TotalFields => "map-pin",
            StatKind::HealthScore => "activity",
            StatKind::ActiveAlerts => "alert-triangle",
            StatKind::PendingTasks | StatKind::FarmStatus => "check-circle",
        }
    }
}

/// The headline value of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count(u32),
    Fraction { part: u32, whole: u32 },
    Percent(f64),
    /// A catalog key to be translated by the renderer.
    Label(&'static str),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Fraction { part, whole } => write!(f, "{part}/{whole}"),
            StatValue::Percent(p) => write!(f, "{p}%"),
            StatValue::Label(key) => f.write_str(key),
        }
    }
}

/// Month-over-month change shown under a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trend {
    pub percent: i32,
    pub is_positive: bool,
}

impl Trend {
    pub fn up(percent: i32) -> Self {
        Self {
            percent,
            is_positive: true,
        }
    }

    /// Magnitude as displayed; direction is carried by `is_positive`.
    pub fn magnitude(self) -> u32 {
        self.percent.unsigned_abs()
    }

    pub fn tint(self) -> &'static str {
        if self.is_positive {
            "text-success"
        } else {
            "text-destructive"
        }
    }
}

/// One card of the stat grid.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub kind: StatKind,
    pub value: StatValue,
    /// Text placed before the translated subtitle (a count or percentage).
    pub subtitle_lead: Option<String>,
    pub subtitle_key: &'static str,
    pub variant: Variant,
    pub trend: Option<Trend>,
}

/// The eight dashboard cards, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsGrid {
    pub cards: Vec<StatCard>,
}

impl StatsGrid {
    pub fn from_stats(stats: &FarmStats) -> Self {
        let attendance = percentage(stats.active_workers, stats.total_workers);
        let healthy_ratio = percentage(stats.healthy_crops, stats.total_crops);

        let card = |kind: StatKind,
                    value: StatValue,
                    subtitle_lead: Option<String>,
                    subtitle_key: &'static str,
                    variant: Variant| StatCard {
            kind,
            value,
            subtitle_lead,
            subtitle_key,
            variant,
            trend: None,
        };

        let cards = vec![
            card(
                StatKind::TotalCrops,
                StatValue::Count(stats.total_crops),
                Some(stats.healthy_crops.to_string()),
                "common.healthy_crops",
                Variant::Success,
            ),
            card(
                StatKind::ActiveWorkers,
                StatValue::Fraction {
                    part: stats.active_workers,
                    whole: stats.total_workers,
                },
                Some(format!("{attendance}%")),
                "common.attendance",
                variant::ATTENDANCE.evaluate(f64::from(attendance)),
            ),
            card(
                StatKind::TotalFields,
                StatValue::Count(stats.total_fields),
                None,
                "common.managed_fields",
                Variant::Default,
            ),
            card(
                StatKind::HealthScore,
                StatValue::Percent(stats.average_health),
                None,
                "common.average_crop_health",
                variant::AVERAGE_HEALTH.evaluate(stats.average_health),
            ),
            card(
                StatKind::ActiveAlerts,
                StatValue::Count(stats.alerts),
                None,
                "common.needs_attention",
                variant::ALERTS.evaluate(f64::from(stats.alerts)),
            ),
            card(
                StatKind::PendingTasks,
                StatValue::Count(stats.tasks),
                None,
                "common.due_today",
                variant::TASKS.evaluate(f64::from(stats.tasks)),
            ),
            card(
                StatKind::CropHealth,
                StatValue::Percent(f64::from(healthy_ratio)),
                None,
                "common.healthy_crops_ratio",
                variant::CROP_HEALTH_RATIO.evaluate(f64::from(healthy_ratio)),
            ),
            card(
                StatKind::FarmStatus,
                StatValue::Label(stats.farm_status.i18n_key()),
                None,
                "common.overall_condition",
                Variant::Success,
            ),
        ];

        Self { cards }
    }

    /// Attaches a trend to the card of `kind`.
    #[must_use]
    pub fn with_trend(mut self, kind: StatKind, trend: Trend) -> Self {
        if let Some(card) = self.cards.iter_mut().find(|card| card.kind == kind) {
            card.trend = Some(trend);
        }
        self
    }

    pub fn card(&self, kind: StatKind) -> Option<&StatCard> {
        self.cards.iter().find(|card| card.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> FarmStats {
        FarmStats {
            total_crops: 24,
            healthy_crops: 20,
            total_workers: 8,
            active_workers: 7,
            total_fields: 5,
            average_health: 87.0,
            alerts: 3,
            tasks: 5,
            farm_status: HealthStatus::Excellent,
        }
    }

    fn variant_of(grid: &StatsGrid, kind: StatKind) -> Variant {
        grid.card(kind).expect("card present").variant
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(7, 8), 88); // 87.5
        assert_eq!(percentage(20, 24), 83); // 83.33
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn grid_has_eight_cards_in_display_order() {
        let grid = StatsGrid::from_stats(&stats());
        let kinds: Vec<_> = grid.cards.iter().map(|card| card.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StatKind::TotalCrops,
                StatKind::ActiveWorkers,
                StatKind::TotalFields,
                StatKind::HealthScore,
                StatKind::ActiveAlerts,
                StatKind::PendingTasks,
                StatKind::CropHealth,
                StatKind::FarmStatus,
            ]
        );
    }

    #[test]
    fn grid_values_and_variants_for_reference_stats() {
        let grid = StatsGrid::from_stats(&stats());

        let workers = grid.card(StatKind::ActiveWorkers).unwrap();
        assert_eq!(workers.value.to_string(), "7/8");
        assert_eq!(workers.subtitle_lead.as_deref(), Some("88%"));
        assert_eq!(workers.variant, Variant::Success);

        assert_eq!(variant_of(&grid, StatKind::TotalCrops), Variant::Success);
        assert_eq!(variant_of(&grid, StatKind::TotalFields), Variant::Default);
        assert_eq!(variant_of(&grid, StatKind::HealthScore), Variant::Success);
        assert_eq!(variant_of(&grid, StatKind::ActiveAlerts), Variant::Destructive);
        assert_eq!(variant_of(&grid, StatKind::PendingTasks), Variant::Warning);
        // 20 of 24 healthy is 83%.
        assert_eq!(variant_of(&grid, StatKind::CropHealth), Variant::Warning);
        assert_eq!(
            grid.card(StatKind::CropHealth).unwrap().value.to_string(),
            "83%"
        );
        assert_eq!(
            grid.card(StatKind::HealthScore).unwrap().value.to_string(),
            "87%"
        );
    }

    #[test]
    fn attendance_boundary_uses_rounded_percentage() {
        let mut s = stats();
        s.total_workers = 10;
        s.active_workers = 8;
        let grid = StatsGrid::from_stats(&s);
        assert_eq!(variant_of(&grid, StatKind::ActiveWorkers), Variant::Success);

        // 79.5% rounds to 80%.
        s.total_workers = 200;
        s.active_workers = 159;
        let grid = StatsGrid::from_stats(&s);
        assert_eq!(variant_of(&grid, StatKind::ActiveWorkers), Variant::Success);

        s.active_workers = 158;
        let grid = StatsGrid::from_stats(&s);
        assert_eq!(variant_of(&grid, StatKind::ActiveWorkers), Variant::Warning);
    }

    #[test]
    fn empty_farm_does_not_panic() {
        let s = FarmStats {
            total_crops: 0,
            healthy_crops: 0,
            total_workers: 0,
            active_workers: 0,
            total_fields: 0,
            average_health: 0.0,
            alerts: 0,
            tasks: 0,
            farm_status: HealthStatus::Good,
        };
        let grid = StatsGrid::from_stats(&s);
        assert_eq!(variant_of(&grid, StatKind::ActiveWorkers), Variant::Warning);
        assert_eq!(variant_of(&grid, StatKind::CropHealth), Variant::Destructive);
        assert_eq!(variant_of(&grid, StatKind::ActiveAlerts), Variant::Success);
        assert_eq!(
            grid.card(StatKind::FarmStatus).unwrap().value,
            StatValue::Label("health.good")
        );
    }

    #[test]
    fn trends_attach_to_the_named_card_only() {
        let grid = StatsGrid::from_stats(&stats()).with_trend(StatKind::TotalCrops, Trend::up(12));
        assert_eq!(grid.card(StatKind::TotalCrops).unwrap().trend, Some(Trend::up(12)));
        assert!(grid.card(StatKind::ActiveAlerts).unwrap().trend.is_none());
    }

    #[test]
    fn trend_magnitude_drops_the_sign() {
        let falling = Trend {
            percent: -4,
            is_positive: false,
        };
        assert_eq!(falling.magnitude(), 4);
        assert_eq!(falling.tint(), "text-destructive");
        assert_eq!(Trend::up(8).tint(), "text-success");
    }
}
