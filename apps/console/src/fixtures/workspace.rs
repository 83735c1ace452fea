use crate::models::{
    Invoice, MemberStatus, NotificationPreference, UsageMeter, UserRole, WorkspaceUser,
};

use super::s;

pub fn sample_team() -> Vec<WorkspaceUser> {
    [
        ("1", "John Doe", "john@company.com", UserRole::Admin, MemberStatus::Active, "2024-06-21 15:30"),
        ("2", "Jane Smith", "jane@company.com", UserRole::Builder, MemberStatus::Active, "2024-06-21 14:20"),
        ("3", "Mike Johnson", "mike@company.com", UserRole::Reviewer, MemberStatus::Pending, "Never"),
    ]
    .into_iter()
    .map(|(id, name, email, role, status, last_active)| WorkspaceUser {
        id: s(id),
        name: s(name),
        email: s(email),
        role,
        status,
        last_active: s(last_active),
    })
    .collect()
}

/// The signed-in account shown in the sidebar footer.
pub fn current_user() -> WorkspaceUser {
    sample_team().remove(0)
}

pub fn notification_preferences() -> Vec<NotificationPreference> {
    [
        ("performance", "Bot Performance Alerts", "Get notified when bot performance drops", true),
        ("volume", "High Volume Conversations", "Alert when conversation volume spikes", true),
        ("review", "Answer Review Queue", "Notify when answers need human review", true),
        ("weekly", "Weekly Reports", "Receive weekly performance summaries", false),
        ("system", "System Updates", "Get notified about new features and updates", true),
    ]
    .into_iter()
    .map(|(key, title, description, enabled)| NotificationPreference {
        key: s(key),
        title: s(title),
        description: s(description),
        enabled_by_default: enabled,
    })
    .collect()
}

pub fn usage_meters() -> Vec<UsageMeter> {
    [
        ("Bots Created", "4 / 10", 40, "bg-blue-600"),
        ("API Calls", "15.2K / 50K", 30, "bg-green-600"),
        ("Storage Used", "2.1 GB / 10 GB", 21, "bg-orange-600"),
    ]
    .into_iter()
    .map(|(label, used, percent, bar_class)| UsageMeter {
        label: s(label),
        used: s(used),
        percent,
        bar_class: s(bar_class),
    })
    .collect()
}

pub fn billing_history() -> Vec<Invoice> {
    ["Jun 21, 2024", "May 21, 2024", "Apr 21, 2024"]
        .into_iter()
        .map(|date| Invoice {
            date: s(date),
            description: s("Professional Plan - Monthly"),
            amount: s("$49.00"),
            paid: true,
        })
        .collect()
}

pub const LANGUAGE_OPTIONS: [(&str, &str); 3] =
    [("en", "English"), ("vi", "Vietnamese"), ("zh", "Chinese")];

pub const TIMEZONE_OPTIONS: [(&str, &str); 3] = [
    ("UTC+7", "UTC+7 (Ho Chi Minh)"),
    ("UTC+0", "UTC+0 (London)"),
    ("UTC-5", "UTC-5 (New York)"),
];
