//! Tab controller: exactly one view is visible at a time

use serde::{Deserialize, Serialize};

/// The registered views of the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Rule cards and the create/edit form
    #[default]
    Rules,
    /// Notification token and chat id
    Notifications,
    /// Backend activity log
    Logs,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Rules, Tab::Notifications, Tab::Logs];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Rules => "Rules",
            Tab::Notifications => "Notifications",
            Tab::Logs => "Logs",
        }
    }

    /// Number key that activates this tab
    pub fn shortcut(&self) -> char {
        match self {
            Tab::Rules => '1',
            Tab::Notifications => '2',
            Tab::Logs => '3',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Rules => 0,
            Tab::Notifications => 1,
            Tab::Logs => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rules" => Ok(Tab::Rules),
            "notifications" => Ok(Tab::Notifications),
            "logs" => Ok(Tab::Logs),
            other => Err(format!(
                "unknown tab '{}' (expected rules, notifications or logs)",
                other
            )),
        }
    }
}

/// Holds which tab is active. Purely presentational.
#[derive(Debug, Clone, Default)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new(initial: Tab) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Activate `tab`; every other tab becomes inactive.
    ///
    /// Returns `true` if the active tab changed.
    pub fn activate(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    pub fn next(&mut self) {
        let idx = (self.active.index() + 1) % Tab::ALL.len();
        self.active = Tab::ALL[idx];
    }

    pub fn previous(&mut self) {
        let len = Tab::ALL.len();
        let idx = (self.active.index() + len - 1) % len;
        self.active = Tab::ALL[idx];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_rules() {
        assert_eq!(TabController::default().active(), Tab::Rules);
    }

    #[test]
    fn test_activate_deactivates_others() {
        let mut tabs = TabController::default();
        assert!(tabs.activate(Tab::Logs));

        let active: Vec<Tab> = Tab::ALL
            .iter()
            .copied()
            .filter(|t| tabs.is_active(*t))
            .collect();
        assert_eq!(active, vec![Tab::Logs]);
    }

    #[test]
    fn test_activate_same_tab_reports_no_change() {
        let mut tabs = TabController::new(Tab::Notifications);
        assert!(!tabs.activate(Tab::Notifications));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut tabs = TabController::new(Tab::Logs);
        tabs.next();
        assert_eq!(tabs.active(), Tab::Rules);
        tabs.previous();
        assert_eq!(tabs.active(), Tab::Logs);
        tabs.previous();
        assert_eq!(tabs.active(), Tab::Notifications);
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("LOGS".parse::<Tab>(), Ok(Tab::Logs));
        assert!("charts".parse::<Tab>().is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(3), None);
    }
}
