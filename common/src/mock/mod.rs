//! Static data shown on the admin dashboard until a real data source exists.

use crate::model::dashboard::{DashboardStats, QuickAction, StatCard};
use crate::model::gallery::GallerySummary;

pub fn dashboard_stats() -> DashboardStats {
    let card = |label: &str, value: &str, change: &str| StatCard {
        label: label.to_string(),
        value: value.to_string(),
        change: Some(change.to_string()),
    };

    DashboardStats {
        cards: vec![
            card("Total Galleries", "24", "+3 this month"),
            card("Total Photos", "1,248", "+156 this month"),
            card("Total Views", "12,847", "+8.2% this week"),
            card("Active Clients", "18", "+2 this month"),
        ],
    }
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            icon: "add".to_string(),
            title: "Upload Photos".to_string(),
            description: "Add new photos to your galleries with automatic optimization"
                .to_string(),
            icon_color: "text-blue-600".to_string(),
            href: Some("/upload".to_string()),
        },
        QuickAction {
            icon: "group".to_string(),
            title: "Manage Clients".to_string(),
            description: "Add clients and manage access to private galleries".to_string(),
            icon_color: "text-green-600".to_string(),
            href: None,
        },
        QuickAction {
            icon: "settings".to_string(),
            title: "Settings".to_string(),
            description: "Configure your portfolio, branding, and preferences".to_string(),
            icon_color: "text-purple-600".to_string(),
            href: None,
        },
    ]
}

pub fn recent_galleries() -> Vec<GallerySummary> {
    vec![
        GallerySummary::new(1, "Summer Wedding")
            .with_type("Wedding")
            .with_photos(42)
            .with_views(1500)
            .with_status("Published")
            .with_last_updated("2 hours ago"),
        GallerySummary::new(2, "Corporate Headshots")
            .with_type("Portrait")
            .with_photos(18)
            .with_views(640)
            .with_status("Draft")
            .with_last_updated("1 day ago"),
        GallerySummary::new(3, "Coastal Landscapes")
            .with_type("Landscape")
            .with_photos(67)
            .with_views(3104)
            .with_status("Active")
            .with_last_updated("3 days ago"),
        GallerySummary::new(4, "Family Session")
            .with_type("Family")
            .with_photos(35)
            .with_views(12_480)
            .with_status("Private")
            .with_last_updated("1 week ago"),
    ]
}
