// SPDX-License-Identifier: MPL-2.0
//! Alerts and tasks: priority tints and the dashboard's list filters.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Background token of the priority dot.
    pub fn indicator(self) -> &'static str {
        match self {
            Priority::High | Priority::Urgent => "bg-destructive",
            Priority::Medium => "bg-warning",
            Priority::Low => "bg-primary",
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            Priority::Low => "priority.low",
            Priority::Medium => "priority.medium",
            Priority::High => "priority.high",
            Priority::Urgent => "priority.urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTask {
    pub id: String,
    pub description: String,
    pub priority: Priority,
    pub due: NaiveDate,
    pub status: TaskStatus,
}

pub fn unread_alerts(alerts: &[Alert]) -> impl Iterator<Item = &Alert> {
    alerts.iter().filter(|alert| !alert.is_read)
}

pub fn pending_tasks(tasks: &[WorkTask]) -> impl Iterator<Item = &WorkTask> {
    tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus) -> WorkTask {
        WorkTask {
            id: id.to_string(),
            description: format!("task {id}"),
            priority: Priority::Medium,
            due: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            status,
        }
    }

    fn alert(id: &str, is_read: bool) -> Alert {
        Alert {
            id: id.to_string(),
            title: format!("alert {id}"),
            message: String::new(),
            priority: Priority::Low,
            is_read,
        }
    }

    #[test]
    fn indicator_tints() {
        assert_eq!(Priority::High.indicator(), "bg-destructive");
        assert_eq!(Priority::Urgent.indicator(), "bg-destructive");
        assert_eq!(Priority::Medium.indicator(), "bg-warning");
        assert_eq!(Priority::Low.indicator(), "bg-primary");
    }

    #[test]
    fn only_pending_tasks_pass() {
        let tasks = [
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::InProgress),
            task("3", TaskStatus::Completed),
            task("4", TaskStatus::Pending),
            task("5", TaskStatus::Cancelled),
        ];
        let ids: Vec<_> = pending_tasks(&tasks).map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn only_unread_alerts_pass() {
        let alerts = [alert("1", false), alert("2", true), alert("3", false)];
        assert_eq!(unread_alerts(&alerts).count(), 2);
        assert_eq!(unread_alerts(&[]).count(), 0);
    }
}
