use serde::{Deserialize, Serialize};

/// A single figure in the dashboard stats grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    /// Already formatted for display ("1,248", "98%").
    pub value: String,
    /// Short trend note shown under the value, e.g. "+12 this month".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
}

/// The stats summary rendered at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub cards: Vec<StatCard>,
}

/// A shortcut card in the "Quick Actions" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Material icon ligature name.
    pub icon: String,
    pub title: String,
    pub description: String,
    /// CSS class applied to the icon.
    pub icon_color: String,
    /// Link target. Cards without one render as plain, non-navigating cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}
