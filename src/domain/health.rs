// SPDX-License-Identifier: MPL-2.0
//! Crop health categories and their display table.

/// Qualitative condition of a crop or a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

/// Display attributes of a [`HealthStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStyle {
    /// English label, used where no catalog is at hand.
    pub label: &'static str,
    /// Catalog key of the label.
    pub label_key: &'static str,
    /// Catalog key of the one-line description.
    pub description_key: &'static str,
    pub icon: &'static str,
    /// Foreground tint token.
    pub foreground: &'static str,
    /// Background tint token.
    pub background: &'static str,
}

const EXCELLENT: HealthStyle = HealthStyle {
    label: "Excellent",
    label_key: "health.excellent",
    description_key: "health.description.excellent",
    icon: "check-circle",
    foreground: "text-health-excellent",
    background: "bg-health-excellent/10",
};

const GOOD: HealthStyle = HealthStyle {
    label: "Good",
    label_key: "health.good",
    description_key: "health.description.good",
    icon: "activity",
    foreground: "text-health-good",
    background: "bg-health-good/10",
};

const WARNING: HealthStyle = HealthStyle {
    label: "Warning",
    label_key: "health.warning",
    description_key: "health.description.warning",
    icon: "alert-triangle",
    foreground: "text-health-warning",
    background: "bg-health-warning/10",
};

const CRITICAL: HealthStyle = HealthStyle {
    label: "Critical",
    label_key: "health.critical",
    description_key: "health.description.critical",
    icon: "x-circle",
    foreground: "text-health-critical",
    background: "bg-health-critical/10",
};

impl HealthStatus {
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Excellent,
        HealthStatus::Good,
        HealthStatus::Warning,
        HealthStatus::Critical,
    ];

    /// Looks up the fixed display attributes.
    pub fn style(self) -> &'static HealthStyle {
        match self {
            HealthStatus::Excellent => &EXCELLENT,
            HealthStatus::Good => &GOOD,
            HealthStatus::Warning => &WARNING,
            HealthStatus::Critical => &CRITICAL,
        }
    }

    pub fn i18n_key(self) -> &'static str {
        self.style().label_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_reference_tokens() {
        let excellent = HealthStatus::Excellent.style();
        assert_eq!(excellent.label, "Excellent");
        assert_eq!(excellent.icon, "check-circle");
        assert_eq!(excellent.foreground, "text-health-excellent");
        assert_eq!(excellent.background, "bg-health-excellent/10");

        let critical = HealthStatus::Critical.style();
        assert_eq!(critical.label, "Critical");
        assert_eq!(critical.icon, "x-circle");
        assert_eq!(critical.foreground, "text-health-critical");
        assert_eq!(critical.background, "bg-health-critical/10");
    }

    #[test]
    fn every_category_has_distinct_tokens() {
        for (i, a) in HealthStatus::ALL.iter().enumerate() {
            for b in &HealthStatus::ALL[i + 1..] {
                assert_ne!(a.style().foreground, b.style().foreground);
                assert_ne!(a.style().icon, b.style().icon);
            }
        }
    }

    #[test]
    fn background_token_derives_from_foreground() {
        for status in HealthStatus::ALL {
            let style = status.style();
            let tint = style.foreground.trim_start_matches("text-");
            assert_eq!(style.background, format!("bg-{tint}/10"));
        }
    }
}
