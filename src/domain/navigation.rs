// SPDX-License-Identifier: MPL-2.0
//! Navigation item tables for the side drawer and the bottom bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Crops,
    Workers,
    Weather,
    Pesticide,
    Fields,
    Analytics,
    Settings,
}

impl Page {
    /// Stable page identifier used by the router.
    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Crops => "crops",
            Page::Workers => "workers",
            Page::Weather => "weather",
            Page::Pesticide => "pesticide",
            Page::Fields => "fields",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        DRAWER_ITEMS
            .iter()
            .map(|item| item.page)
            .find(|page| page.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label_key: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    const fn new(page: Page, label_key: &'static str, icon: &'static str) -> Self {
        Self {
            page,
            label_key,
            icon,
        }
    }

    pub fn is_active(&self, current: Page) -> bool {
        self.page == current
    }
}

/// Full menu, in display order.
pub const DRAWER_ITEMS: [NavItem; 8] = [
    NavItem::new(Page::Dashboard, "nav.dashboard", "home"),
    NavItem::new(Page::Crops, "nav.plants", "sprout"),
    NavItem::new(Page::Workers, "nav.workers", "users"),
    NavItem::new(Page::Weather, "nav.weather", "cloud-rain"),
    NavItem::new(Page::Pesticide, "nav.pesticides", "droplets"),
    NavItem::new(Page::Fields, "nav.fields", "map-pin"),
    NavItem::new(Page::Analytics, "nav.analytics", "bar-chart-3"),
    NavItem::new(Page::Settings, "nav.settings", "settings"),
];

/// Compact bar with short labels.
pub const BOTTOM_ITEMS: [NavItem; 5] = [
    NavItem::new(Page::Dashboard, "nav_short.home", "home"),
    NavItem::new(Page::Crops, "nav_short.plants", "sprout"),
    NavItem::new(Page::Workers, "nav_short.workers", "users"),
    NavItem::new(Page::Weather, "nav_short.weather", "cloud-rain"),
    NavItem::new(Page::Analytics, "nav_short.reports", "bar-chart-3"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip() {
        for item in DRAWER_ITEMS {
            assert_eq!(Page::from_id(item.page.id()), Some(item.page));
        }
        assert_eq!(Page::from_id("pesticides"), None);
        assert_eq!(Page::from_id(""), None);
    }

    #[test]
    fn bottom_bar_is_a_subset_of_the_drawer() {
        for item in BOTTOM_ITEMS {
            assert!(DRAWER_ITEMS.iter().any(|d| d.page == item.page));
        }
    }

    #[test]
    fn exactly_one_item_is_active() {
        let active: Vec<_> = DRAWER_ITEMS
            .iter()
            .filter(|item| item.is_active(Page::Weather))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label_key, "nav.weather");
    }
}
