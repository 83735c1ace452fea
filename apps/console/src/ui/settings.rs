use std::collections::BTreeMap;

use dioxus::prelude::*;
use tracing::{debug, info};

use crate::fixtures::workspace::{
    billing_history, current_user, notification_preferences, sample_team, usage_meters,
    LANGUAGE_OPTIONS, TIMEZONE_OPTIONS,
};
use crate::models::{UserRole, WorkspaceUser};
use crate::state::{use_app_actions, ToastKind};
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{
    Badge, Card, CardHeader, Dialog, PageHeader, ProgressBar, SelectField, Switch, TabBar, TableHead,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettingsTab {
    Users,
    Workspace,
    Notifications,
    Billing,
}

impl SettingsTab {
    const ALL: [SettingsTab; 4] = [Self::Users, Self::Workspace, Self::Notifications, Self::Billing];

    fn label(self) -> &'static str {
        match self {
            Self::Users => "User Management",
            Self::Workspace => "Workspace",
            Self::Notifications => "Notifications",
            Self::Billing => "Billing",
        }
    }
}

/// Trimmed invite address, or `None` when nothing usable was typed.
fn invite_email(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn role_options() -> Vec<(&'static str, &'static str)> {
    UserRole::ALL
        .into_iter()
        .map(|role| (role.key(), role.summary()))
        .collect()
}

#[component]
pub fn Settings() -> Element {
    let mut tab = use_signal(|| SettingsTab::Users);
    let active_tab = tab();
    let active_idx = SettingsTab::ALL.iter().position(|t| *t == active_tab).unwrap_or(0);

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Settings",
                subtitle: "Manage your workspace, users, and account preferences",
            }
            TabBar {
                labels: SettingsTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                active: active_idx,
                on_select: move |idx: usize| tab.set(SettingsTab::ALL[idx]),
            }
            {
                match active_tab {
                    SettingsTab::Users => rsx! { UserManagement {} },
                    SettingsTab::Workspace => rsx! { WorkspaceSettings {} },
                    SettingsTab::Notifications => rsx! { NotificationSettings {} },
                    SettingsTab::Billing => rsx! { BillingOverview {} },
                }
            }
        }
    }
}

#[component]
fn UserManagement() -> Element {
    let actions = use_app_actions();
    let mut dialog_open = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Builder);

    let send_invite = move |_: MouseEvent| {
        let Some(address) = invite_email(&email.peek()) else {
            debug!("invite ignored, empty email");
            return;
        };
        let invited_role = *role.peek();
        info!(email = %address, role = invited_role.key(), "inviting user");
        actions.notify(
            ToastKind::Success,
            "Invitation queued",
            format!("{address} invited as {}", invited_role.label()),
        );
        email.set(String::new());
        dialog_open.set(false);
    };

    rsx! {
        Card {
            CardHeader {
                title: "Team Members",
                description: "Manage users and their access permissions",
                button {
                    class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                    onclick: move |_| dialog_open.set(true),
                    "Invite User"
                }
            }
            div { class: "overflow-x-auto p-5",
                table { class: "min-w-full divide-y divide-gray-200",
                    TableHead { columns: vec!["User", "Role", "Status", "Last Active", "Actions"] }
                    tbody { class: "divide-y divide-gray-200 bg-white",
                        for user in sample_team() {
                            MemberRow { key: "{user.id}", user: user.clone() }
                        }
                    }
                }
            }
        }

        Dialog {
            open: dialog_open(),
            title: "Invite Team Member",
            description: "Send an invitation to add a new member to your workspace",
            on_close: move |_| dialog_open.set(false),
            div { class: "space-y-4",
                div {
                    label { class: "text-sm font-medium", r#for: "invite-email", "Email Address" }
                    input {
                        id: "invite-email",
                        r#type: "email",
                        class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "colleague@company.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    label { class: "text-sm font-medium", "Role" }
                    SelectField {
                        class: "mt-1 w-full",
                        value: role().key().to_string(),
                        options: role_options(),
                        on_change: move |key: String| {
                            if let Some(picked) = UserRole::from_key(&key) {
                                role.set(picked);
                            }
                        },
                    }
                }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50",
                        onclick: move |_| dialog_open.set(false),
                        "Cancel"
                    }
                    button {
                        class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                        onclick: send_invite,
                        "Send Invitation"
                    }
                }
            }
        }
    }
}

#[component]
fn MemberRow(user: WorkspaceUser) -> Element {
    let edit_id = user.id.clone();
    let remove_id = user.id.clone();

    rsx! {
        tr {
            td { class: "px-4 py-3",
                div { class: "flex items-center gap-3",
                    div { class: "flex h-8 w-8 items-center justify-center rounded-full bg-gray-300",
                        Icon { name: IconName::User, class: "h-4 w-4 text-gray-600" }
                    }
                    div {
                        div { class: "font-medium", "{user.name}" }
                        div { class: "text-sm text-gray-500", "{user.email}" }
                    }
                }
            }
            td { class: "px-4 py-3",
                Badge { class: user.role.badge_class(), label: user.role.label() }
            }
            td { class: "px-4 py-3",
                Badge { class: user.status.badge_class(), label: user.status.label() }
            }
            td { class: "px-4 py-3 text-sm", "{user.last_active}" }
            td { class: "px-4 py-3",
                div { class: "flex gap-2",
                    button {
                        class: "rounded px-2 py-1 text-sm hover:bg-gray-100",
                        onclick: move |_| info!(user = %edit_id, "edit member requested"),
                        "Edit"
                    }
                    button {
                        class: "rounded px-2 py-1 text-sm text-red-600 hover:bg-red-50",
                        onclick: move |_| info!(user = %remove_id, "remove member requested"),
                        "Remove"
                    }
                }
            }
        }
    }
}

#[component]
fn WorkspaceSettings() -> Element {
    let actions = use_app_actions();
    let mut name = use_signal(|| "My Restaurant Bots".to_string());
    let mut domain = use_signal(String::new);
    let mut language = use_signal(|| LANGUAGE_OPTIONS[0].0.to_string());
    let mut timezone = use_signal(|| TIMEZONE_OPTIONS[0].0.to_string());

    rsx! {
        Card {
            CardHeader {
                title: "Workspace Settings",
                description: "Configure your workspace preferences and defaults",
            }
            div { class: "space-y-6 p-5",
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", r#for: "workspace-name", "Workspace Name" }
                    input {
                        id: "workspace-name",
                        class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", r#for: "workspace-domain", "Custom Domain" }
                    input {
                        id: "workspace-domain",
                        class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "bots.myrestaurant.com",
                        value: "{domain}",
                        oninput: move |evt| domain.set(evt.value()),
                    }
                    p { class: "text-sm text-gray-500", "Optional: Use your own domain for bot widgets" }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", "Default Language" }
                    SelectField {
                        class: "w-full",
                        value: language(),
                        options: LANGUAGE_OPTIONS.to_vec(),
                        on_change: move |value: String| language.set(value),
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", "Timezone" }
                    SelectField {
                        class: "w-full",
                        value: timezone(),
                        options: TIMEZONE_OPTIONS.to_vec(),
                        on_change: move |value: String| timezone.set(value),
                    }
                }
                button {
                    class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                    onclick: move |_| {
                        info!(
                            workspace = %name.peek(),
                            language = %language.peek(),
                            timezone = %timezone.peek(),
                            "workspace settings saved"
                        );
                        actions.notify(ToastKind::Success, "Workspace saved", name.peek().clone());
                    },
                    "Save Changes"
                }
            }
        }
    }
}

#[component]
fn NotificationSettings() -> Element {
    let actions = use_app_actions();
    let preferences = notification_preferences();
    let mut enabled = use_signal(|| {
        notification_preferences()
            .into_iter()
            .map(|pref| (pref.key, pref.enabled_by_default))
            .collect::<BTreeMap<String, bool>>()
    });
    let mut email = use_signal(|| current_user().email);

    rsx! {
        Card {
            CardHeader {
                title: "Notification Preferences",
                description: "Control when and how you receive notifications",
            }
            div { class: "space-y-6 p-5",
                div { class: "space-y-4",
                    for pref in preferences {
                        div { key: "{pref.key}", class: "flex items-center justify-between gap-4",
                            div { class: "space-y-1",
                                div { class: "font-medium", "{pref.title}" }
                                div { class: "text-sm text-gray-500", "{pref.description}" }
                            }
                            Switch {
                                checked: enabled.read().get(&pref.key).copied().unwrap_or(false),
                                on_toggle: {
                                    let key = pref.key.clone();
                                    move |on: bool| {
                                        debug!(preference = %key, on, "notification preference toggled");
                                        enabled.write().insert(key.clone(), on);
                                    }
                                },
                            }
                        }
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", r#for: "notification-email", "Notification Email" }
                    input {
                        id: "notification-email",
                        r#type: "email",
                        class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                button {
                    class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                    onclick: move |_| {
                        let on = enabled.peek().values().filter(|on| **on).count();
                        info!(enabled = on, email = %email.peek(), "notification preferences saved");
                        actions.notify(ToastKind::Success, "Preferences saved", format!("{on} alerts enabled"));
                    },
                    "Save Preferences"
                }
            }
        }
    }
}

#[component]
fn BillingOverview() -> Element {
    rsx! {
        div { class: "space-y-6",
            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-3",
                Card { class: "lg:col-span-2",
                    CardHeader {
                        title: "Current Plan",
                        description: "Manage your subscription and billing information",
                    }
                    div { class: "space-y-6 p-5",
                        div { class: "flex items-center justify-between rounded-lg bg-blue-50 p-4",
                            div {
                                div { class: "font-semibold text-blue-900", "Professional Plan" }
                                div { class: "text-sm text-blue-700", "Up to 10 bots, unlimited conversations" }
                            }
                            div { class: "text-right",
                                div { class: "font-bold text-blue-900", "$49/month" }
                                div { class: "text-sm text-blue-700", "Billed monthly" }
                            }
                        }
                        div { class: "space-y-4",
                            div { class: "flex items-center justify-between",
                                span { "Next billing date:" }
                                span { class: "font-medium", "July 21, 2024" }
                            }
                            div { class: "flex items-center justify-between",
                                span { "Payment method:" }
                                span { class: "font-medium", "•••• •••• •••• 4242" }
                            }
                        }
                        div { class: "flex flex-wrap gap-3",
                            for action in ["Change Plan", "Update Payment", "Cancel Subscription"] {
                                button {
                                    key: "{action}",
                                    class: "rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50",
                                    onclick: move |_| info!(action, "billing action requested"),
                                    "{action}"
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader { title: "Usage This Month" }
                    div { class: "space-y-4 p-5",
                        for meter in usage_meters() {
                            div { key: "{meter.label}",
                                div { class: "mb-1 flex justify-between",
                                    span { class: "text-sm", "{meter.label}" }
                                    span { class: "text-sm font-medium", "{meter.used}" }
                                }
                                ProgressBar { percent: meter.percent, bar_class: meter.bar_class.clone() }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    title: "Billing History",
                    description: "View your past invoices and payments",
                }
                div { class: "space-y-3 p-5",
                    for invoice in billing_history() {
                        div {
                            key: "{invoice.date}",
                            class: "flex items-center justify-between rounded-lg border border-gray-200 p-3",
                            div {
                                div { class: "font-medium", "{invoice.description}" }
                                div { class: "text-sm text-gray-500", "{invoice.date}" }
                            }
                            div { class: "flex items-center gap-3",
                                span { class: "font-medium", "{invoice.amount}" }
                                if invoice.paid {
                                    Badge { class: "bg-green-100 text-green-800", label: "Paid" }
                                } else {
                                    Badge { class: "bg-yellow-100 text-yellow-800", label: "Due" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_invites_are_ignored() {
        assert_eq!(invite_email(""), None);
        assert_eq!(invite_email("   \t"), None);
    }

    #[test]
    fn invite_address_is_trimmed() {
        assert_eq!(
            invite_email("  colleague@company.com "),
            Some("colleague@company.com".to_string())
        );
    }

    #[test]
    fn role_picker_lists_every_role_by_key() {
        let options = role_options();
        assert_eq!(options.len(), UserRole::ALL.len());
        assert!(options.iter().all(|(key, _)| UserRole::from_key(key).is_some()));
        assert_eq!(options[0].0, "reviewer");
    }

    #[test]
    fn tabs_follow_display_order() {
        let labels: Vec<_> = SettingsTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["User Management", "Workspace", "Notifications", "Billing"]);
    }
}
