// SPDX-License-Identifier: MPL-2.0
//! Stat card variants and the threshold rules that select them.
//!
//! Each metric has its own [`ThresholdRule`]: an ordered list of
//! `(Threshold, Variant)` pairs evaluated top to bottom, first match wins,
//! with a fallback variant when nothing matches. Rules share no
//! configuration; the thresholds are product decisions, not derived values.

/// Styling choice for a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Default,
    Success,
    Warning,
    Destructive,
}

/// Style tokens of a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Icon chip tokens.
    pub icon: &'static str,
    /// Card border and hover tokens.
    pub card: &'static str,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Destructive => "destructive",
        }
    }

    pub fn style(self) -> VariantStyle {
        match self {
            Variant::Default => VariantStyle {
                icon: "text-primary bg-primary/10",
                card: "border-border hover:shadow-md",
            },
            Variant::Success => VariantStyle {
                icon: "text-success bg-success/10",
                card: "border-success/20 hover:shadow-green",
            },
            Variant::Warning => VariantStyle {
                icon: "text-warning bg-warning/10",
                card: "border-warning/20 hover:shadow-lg",
            },
            Variant::Destructive => VariantStyle {
                icon: "text-destructive bg-destructive/10",
                card: "border-destructive/20 hover:shadow-lg",
            },
        }
    }
}

/// A predicate over a metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    AtLeast(f64),
    AtMost(f64),
    Exactly(f64),
}

impl Threshold {
    pub fn matches(self, value: f64) -> bool {
        match self {
            Threshold::AtLeast(bound) => value >= bound,
            Threshold::AtMost(bound) => value <= bound,
            Threshold::Exactly(bound) => value == bound,
        }
    }
}

/// Ordered first-match-wins mapping from a metric to a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    steps: &'static [(Threshold, Variant)],
    otherwise: Variant,
}

impl ThresholdRule {
    pub const fn new(steps: &'static [(Threshold, Variant)], otherwise: Variant) -> Self {
        Self { steps, otherwise }
    }

    /// Returns the variant of the first matching step, or the fallback.
    pub fn evaluate(&self, value: f64) -> Variant {
        self.steps
            .iter()
            .find(|(threshold, _)| threshold.matches(value))
            .map_or(self.otherwise, |&(_, variant)| variant)
    }

    pub fn steps(&self) -> &'static [(Threshold, Variant)] {
        self.steps
    }

    pub fn otherwise(&self) -> Variant {
        self.otherwise
    }
}

/// Active workers as a percentage of all workers.
pub const ATTENDANCE: ThresholdRule = ThresholdRule::new(
    &[(Threshold::AtLeast(80.0), Variant::Success)],
    Variant::Warning,
);

/// Average crop health score (0-100).
pub const AVERAGE_HEALTH: ThresholdRule = ThresholdRule::new(
    &[
        (Threshold::AtLeast(80.0), Variant::Success),
        (Threshold::AtLeast(60.0), Variant::Warning),
    ],
    Variant::Destructive,
);

/// Number of active alerts.
pub const ALERTS: ThresholdRule = ThresholdRule::new(
    &[
        (Threshold::Exactly(0.0), Variant::Success),
        (Threshold::AtMost(2.0), Variant::Warning),
    ],
    Variant::Destructive,
);

/// Number of pending tasks.
pub const TASKS: ThresholdRule = ThresholdRule::new(
    &[(Threshold::AtMost(3.0), Variant::Success)],
    Variant::Warning,
);

/// Healthy crops as a percentage of all crops.
pub const CROP_HEALTH_RATIO: ThresholdRule = ThresholdRule::new(
    &[
        (Threshold::AtLeast(90.0), Variant::Success),
        (Threshold::AtLeast(70.0), Variant::Warning),
    ],
    Variant::Destructive,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_thresholds() {
        assert_eq!(ATTENDANCE.evaluate(80.0), Variant::Success);
        assert_eq!(ATTENDANCE.evaluate(100.0), Variant::Success);
        assert_eq!(ATTENDANCE.evaluate(79.0), Variant::Warning);
        assert_eq!(ATTENDANCE.evaluate(0.0), Variant::Warning);
    }

    #[test]
    fn average_health_thresholds() {
        assert_eq!(AVERAGE_HEALTH.evaluate(80.0), Variant::Success);
        assert_eq!(AVERAGE_HEALTH.evaluate(79.0), Variant::Warning);
        assert_eq!(AVERAGE_HEALTH.evaluate(60.0), Variant::Warning);
        assert_eq!(AVERAGE_HEALTH.evaluate(59.0), Variant::Destructive);
    }

    #[test]
    fn alert_thresholds() {
        assert_eq!(ALERTS.evaluate(0.0), Variant::Success);
        assert_eq!(ALERTS.evaluate(1.0), Variant::Warning);
        assert_eq!(ALERTS.evaluate(2.0), Variant::Warning);
        assert_eq!(ALERTS.evaluate(3.0), Variant::Destructive);
    }

    #[test]
    fn task_thresholds() {
        assert_eq!(TASKS.evaluate(0.0), Variant::Success);
        assert_eq!(TASKS.evaluate(3.0), Variant::Success);
        assert_eq!(TASKS.evaluate(4.0), Variant::Warning);
    }

    #[test]
    fn crop_health_ratio_thresholds() {
        assert_eq!(CROP_HEALTH_RATIO.evaluate(90.0), Variant::Success);
        assert_eq!(CROP_HEALTH_RATIO.evaluate(89.0), Variant::Warning);
        assert_eq!(CROP_HEALTH_RATIO.evaluate(70.0), Variant::Warning);
        assert_eq!(CROP_HEALTH_RATIO.evaluate(69.0), Variant::Destructive);
    }

    #[test]
    fn first_match_wins_over_later_steps() {
        // Zero also satisfies `AtMost(2)`; the earlier step must win.
        assert_eq!(ALERTS.steps()[0].0, Threshold::Exactly(0.0));
        assert_eq!(ALERTS.evaluate(0.0), Variant::Success);

        const OVERLAPPING: ThresholdRule = ThresholdRule::new(
            &[
                (Threshold::AtLeast(10.0), Variant::Destructive),
                (Threshold::AtLeast(0.0), Variant::Success),
            ],
            Variant::Default,
        );
        assert_eq!(OVERLAPPING.evaluate(50.0), Variant::Destructive);
        assert_eq!(OVERLAPPING.evaluate(5.0), Variant::Success);
        assert_eq!(OVERLAPPING.evaluate(-1.0), Variant::Default);
    }

    #[test]
    fn nan_never_matches_and_takes_the_fallback() {
        assert_eq!(AVERAGE_HEALTH.evaluate(f64::NAN), Variant::Destructive);
        assert_eq!(ATTENDANCE.evaluate(f64::NAN), ATTENDANCE.otherwise());
    }

    #[test]
    fn variant_styles_follow_the_variant_name() {
        assert_eq!(Variant::Default.style().icon, "text-primary bg-primary/10");
        assert_eq!(Variant::Success.style().card, "border-success/20 hover:shadow-green");
        assert_eq!(Variant::Warning.style().icon, "text-warning bg-warning/10");
        assert_eq!(
            Variant::Destructive.style().card,
            "border-destructive/20 hover:shadow-lg"
        );
    }
}
