// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of the dashboard.
//!
//! Every label goes through [`Localization::tr`]; numbers, units and user
//! content (crop names, alert titles) are printed as-is.

use super::sample::DashboardSnapshot;
use crate::domain::activity::{pending_tasks, unread_alerts};
use crate::domain::navigation::{Page, BOTTOM_ITEMS};
use crate::domain::stats::{StatCard, StatValue, StatsGrid};
use crate::i18n::Localization;
use crate::storage::PreferenceStore;
use chrono::{DateTime, Utc};

/// Alerts shown in the alert panel.
const ALERT_PANEL_LIMIT: usize = 3;

pub fn render_dashboard<S: PreferenceStore>(
    l10n: &Localization<S>,
    snapshot: &DashboardSnapshot,
    now: DateTime<Utc>,
    current_page: Page,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{} - {}", l10n.tr("app.name"), l10n.tr("app.subtitle")));
    lines.push(nav_bar(l10n, current_page));

    lines.push(String::new());
    lines.push(heading(l10n.tr("dashboard.farm_overview")));
    let grid = snapshot
        .trends
        .iter()
        .fold(StatsGrid::from_stats(&snapshot.stats), |grid, &(kind, trend)| {
            grid.with_trend(kind, trend)
        });
    lines.extend(grid.cards.iter().map(|card| stat_line(l10n, card)));

    lines.push(String::new());
    lines.push(heading(l10n.tr("dashboard.todays_weather")));
    let weather = snapshot.weather.resolve();
    lines.push(format!(
        "{} {}°C | {} {}% | {} {} km/h",
        l10n.tr(weather.condition.i18n_key()),
        weather.temperature,
        l10n.tr("weather.humidity"),
        weather.humidity,
        l10n.tr("weather.wind_speed"),
        weather.wind_speed,
    ));
    lines.push(format!(
        "{} {} mm | {} {} hPa | {} {} km | {} {}",
        l10n.tr("weather.rainfall"),
        weather.rainfall,
        l10n.tr("weather.pressure"),
        weather.pressure,
        l10n.tr("weather.visibility"),
        weather.visibility,
        l10n.tr("weather.uv_index"),
        weather.uv_index,
    ));

    lines.push(String::new());
    lines.push(format!(
        "{} ({})",
        heading(l10n.tr("dashboard.active_alerts")),
        unread_alerts(&snapshot.alerts).count()
    ));
    for alert in snapshot.alerts.iter().take(ALERT_PANEL_LIMIT) {
        lines.push(format!(
            "  [{}] {}: {}",
            l10n.tr(alert.priority.i18n_key()),
            alert.title,
            alert.message
        ));
    }

    lines.push(String::new());
    lines.push(heading(l10n.tr("dashboard.crop_health_overview")));
    for crop in &snapshot.crops {
        let state = crop.card_state(now);
        let mut line = format!(
            "  {} ({} {}): {} {}% | {}: {} {}",
            crop.name,
            crop.field_id,
            crop.crop_type.as_str(),
            l10n.tr(state.status.i18n_key()),
            state.health_score,
            l10n.tr("crops.harvest_date"),
            state.harvest.display_days(),
            l10n.tr(state.harvest.label_key()),
        );
        if state.harvest.is_overdue() || state.harvest.is_near_harvest() {
            line.push_str(" !");
        }
        lines.push(line);
    }

    lines.push(String::new());
    let pending: Vec<_> = pending_tasks(&snapshot.tasks).collect();
    lines.push(format!(
        "{} ({})",
        heading(l10n.tr("dashboard.todays_tasks")),
        pending.len()
    ));
    if pending.is_empty() {
        lines.push(format!("  {}", l10n.tr("dashboard.all_tasks_done")));
    }
    for task in pending {
        lines.push(format!(
            "  [{}] {} ({})",
            l10n.tr(task.priority.i18n_key()),
            task.description,
            task.due.format("%Y-%m-%d"),
        ));
    }

    lines.join("\n")
}

fn heading(title: &str) -> String {
    format!("== {title} ==")
}

fn nav_bar<S: PreferenceStore>(l10n: &Localization<S>, current: Page) -> String {
    BOTTOM_ITEMS
        .iter()
        .map(|item| {
            let label = l10n.tr(item.label_key);
            if item.is_active(current) {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn stat_line<S: PreferenceStore>(l10n: &Localization<S>, card: &StatCard) -> String {
    let value = match &card.value {
        StatValue::Label(key) => l10n.tr(key).to_string(),
        other => other.to_string(),
    };
    let subtitle = match &card.subtitle_lead {
        Some(lead) => format!("{lead} {}", l10n.tr(card.subtitle_key)),
        None => l10n.tr(card.subtitle_key).to_string(),
    };
    let mut line = format!(
        "  {}: {} ({}) [{}]",
        l10n.tr(card.kind.title_key()),
        value,
        subtitle,
        card.variant.as_str()
    );
    if let Some(trend) = card.trend {
        let sign = if trend.is_positive { '+' } else { '-' };
        line.push_str(&format!(
            " {sign}{}% {}",
            trend.magnitude(),
            l10n.tr("common.from_last_month")
        ));
    }
    line
}
