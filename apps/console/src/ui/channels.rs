//! Messaging channels and external API connectors.

use dioxus::prelude::*;
use tracing::info;

use crate::config;
use crate::fixtures::channels::{sample_api_connections, sample_channels, API_AUTH_OPTIONS};
use crate::hooks::clipboard::copy_with_feedback;
use crate::models::{ApiConnection, Channel, ChannelKind, LinkStatus};
use crate::state::{use_app_actions, ToastKind};
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{Badge, Card, Dialog, PageHeader, SelectField, TabBar};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChannelsTab {
    Messaging,
    Apis,
}

impl ChannelsTab {
    const ALL: [ChannelsTab; 2] = [Self::Messaging, Self::Apis];

    fn label(self) -> &'static str {
        match self {
            Self::Messaging => "Messaging Channels",
            Self::Apis => "API Connectors",
        }
    }
}

/// Contents of the "Add API Connection" dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ApiDraft {
    name: String,
    url: String,
    auth: String,
    secret: String,
}

impl Default for ApiDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            auth: API_AUTH_OPTIONS[0].0.to_string(),
            secret: String::new(),
        }
    }
}

impl ApiDraft {
    fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }
}

fn channel_icon(kind: ChannelKind) -> (IconName, &'static str) {
    match kind {
        ChannelKind::Messenger => (IconName::MessageSquare, "text-blue-600"),
        ChannelKind::Zalo => (IconName::Smartphone, "text-blue-500"),
        ChannelKind::Web => (IconName::Globe, "text-green-600"),
    }
}

fn status_icon(status: LinkStatus) -> IconName {
    match status {
        LinkStatus::Connected => IconName::CheckCircle,
        LinkStatus::Disconnected | LinkStatus::Error => IconName::AlertCircle,
    }
}

#[component]
pub fn Channels() -> Element {
    let mut tab = use_signal(|| ChannelsTab::Messaging);
    let active_tab = tab();
    let active_idx = ChannelsTab::ALL.iter().position(|t| *t == active_tab).unwrap_or(0);

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Channels & Integrations",
                subtitle: "Connect your bots to messaging platforms and external systems",
            }
            TabBar {
                labels: ChannelsTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                active: active_idx,
                on_select: move |idx: usize| tab.set(ChannelsTab::ALL[idx]),
            }
            {
                match active_tab {
                    ChannelsTab::Messaging => rsx! { MessagingChannels {} },
                    ChannelsTab::Apis => rsx! { ApiConnectors {} },
                }
            }
        }
    }
}

#[component]
fn MessagingChannels() -> Element {
    let mut connecting = use_signal(|| None::<Channel>);

    rsx! {
        div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2 xl:grid-cols-3",
            for channel in sample_channels() {
                ChannelCard {
                    key: "{channel.id}",
                    channel: channel.clone(),
                    on_connect: move |channel: Channel| connecting.set(Some(channel)),
                }
            }
        }
        ConnectDialog { channel: connecting(), on_close: move |_| connecting.set(None) }
    }
}

#[component]
fn ChannelCard(channel: Channel, on_connect: EventHandler<Channel>) -> Element {
    let (icon, icon_class) = channel_icon(channel.kind);
    let status = channel.status;
    let name = channel.name.clone();
    let target = channel.clone();

    rsx! {
        Card { class: "relative space-y-4 p-5",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    Icon { name: icon, class: format!("h-6 w-6 {icon_class}") }
                    h2 { class: "text-lg font-semibold text-gray-900", "{channel.name}" }
                }
                Icon { name: status_icon(status), class: format!("h-5 w-5 {}", status.icon_class()) }
            }
            p { class: "text-sm text-gray-500", "{channel.description}" }
            div { class: "flex items-center justify-between",
                span { class: "text-sm text-gray-500", "Status:" }
                Badge { class: status.badge_class(), label: status.label() }
            }
            if let Some(count) = channel.bot_count {
                div { class: "flex items-center justify-between",
                    span { class: "text-sm text-gray-500", "Connected Bots:" }
                    span { class: "font-medium", "{count}" }
                }
            }
            div { class: "pt-2",
                if status == LinkStatus::Connected {
                    div { class: "space-y-2",
                        button {
                            class: "flex w-full items-center justify-center gap-2 rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                            onclick: {
                                let name = name.clone();
                                move |_| info!(channel = %name, "channel configuration requested")
                            },
                            Icon { name: IconName::Settings }
                            "Configure"
                        }
                        button {
                            class: "w-full rounded-md px-3 py-1.5 text-sm text-red-600 hover:bg-red-50",
                            onclick: move |_| info!(channel = %name, "disconnect requested"),
                            "Disconnect"
                        }
                    }
                } else {
                    button {
                        class: "w-full rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                        onclick: move |_| on_connect.call(target.clone()),
                        "Connect {channel.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn ConnectDialog(#[props(!optional)] channel: Option<Channel>, on_close: EventHandler<()>) -> Element {
    let actions = use_app_actions();
    let mut app_id = use_signal(String::new);
    let mut app_secret = use_signal(String::new);
    let app_config = config::current();

    let Some(channel) = channel else {
        return rsx! {};
    };

    let title = format!("Connect {}", channel.name);
    let description = format!("Configure your {} integration", channel.name);
    let webhook_url = app_config.webhook_url();
    let widget_code = app_config.widget_snippet("your-bot-id");
    let channel_name = channel.name.clone();

    rsx! {
        Dialog { open: true, title, description, on_close,
            div { class: "space-y-4",
                if channel.kind == ChannelKind::Web {
                    div {
                        label { class: "text-sm font-medium", "Embed Code" }
                        div { class: "mt-1 flex items-center gap-2",
                            input {
                                class: "flex-1 rounded-md border border-gray-300 px-3 py-2 font-mono text-xs",
                                value: "{widget_code}",
                                readonly: true,
                            }
                            button {
                                class: "rounded-md bg-gray-900 p-2 text-white",
                                "aria-label": "Copy embed code",
                                onclick: {
                                    let widget_code = widget_code.clone();
                                    move |_| copy_with_feedback(actions, "Embed code", widget_code.clone())
                                },
                                Icon { name: IconName::Copy }
                            }
                        }
                        p { class: "mt-1 text-xs text-gray-500", "Copy this code to your website's HTML" }
                    }
                } else {
                    div {
                        label { class: "text-sm font-medium", r#for: "app-id", "App ID / Page ID" }
                        input {
                            id: "app-id",
                            class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                            placeholder: "Enter your app ID",
                            value: "{app_id}",
                            oninput: move |evt| app_id.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "text-sm font-medium", r#for: "app-secret", "App Secret / Access Token" }
                        input {
                            id: "app-secret",
                            r#type: "password",
                            class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                            placeholder: "Enter your secret",
                            value: "{app_secret}",
                            oninput: move |evt| app_secret.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "text-sm font-medium", "Webhook URL" }
                        div { class: "mt-1 flex items-center gap-2",
                            input {
                                class: "flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                                value: "{webhook_url}",
                                readonly: true,
                            }
                            button {
                                class: "rounded-md bg-gray-900 p-2 text-white",
                                "aria-label": "Copy webhook URL",
                                onclick: {
                                    let webhook_url = webhook_url.clone();
                                    move |_| copy_with_feedback(actions, "Webhook URL", webhook_url.clone())
                                },
                                Icon { name: IconName::Copy }
                            }
                        }
                        p { class: "mt-1 text-xs text-gray-500", "Configure this URL in your {channel.name} settings" }
                    }
                }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                        onclick: move |_| {
                            let has_credentials = !app_id.peek().trim().is_empty();
                            info!(channel = %channel_name, has_credentials, "channel connection requested");
                            actions.notify(ToastKind::Info, "Connection requested", channel_name.clone());
                            app_id.set(String::new());
                            app_secret.set(String::new());
                            on_close.call(());
                        },
                        "Connect"
                    }
                }
            }
        }
    }
}

#[component]
fn ApiConnectors() -> Element {
    let actions = use_app_actions();
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(ApiDraft::default);
    let current = draft();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between gap-4",
                p { class: "text-gray-600", "Connect external APIs to provide real-time data to your bots" }
                button {
                    class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                    onclick: move |_| dialog_open.set(true),
                    "Add New API"
                }
            }
            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                for api in sample_api_connections() {
                    ApiCard { key: "{api.id}", api: api.clone() }
                }
            }
        }

        Dialog {
            open: dialog_open(),
            title: "Add API Connection",
            description: "Configure a new REST API endpoint for your bots to use",
            on_close: move |_| dialog_open.set(false),
            div { class: "space-y-4",
                div {
                    label { class: "text-sm font-medium", r#for: "api-name", "API Name" }
                    input {
                        id: "api-name",
                        class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "e.g., Product Catalog API",
                        value: "{current.name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                div {
                    label { class: "text-sm font-medium", r#for: "api-url", "API URL" }
                    input {
                        id: "api-url",
                        class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "https://api.example.com/v1",
                        value: "{current.url}",
                        oninput: move |evt| draft.write().url = evt.value(),
                    }
                }
                div {
                    label { class: "text-sm font-medium", "Authentication" }
                    SelectField {
                        class: "mt-1 w-full",
                        value: current.auth.clone(),
                        options: API_AUTH_OPTIONS.to_vec(),
                        on_change: move |value: String| draft.write().auth = value,
                    }
                }
                div {
                    label { class: "text-sm font-medium", r#for: "auth-value", "Authentication Value" }
                    input {
                        id: "auth-value",
                        r#type: "password",
                        class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "Enter token/key",
                        value: "{current.secret}",
                        oninput: move |evt| draft.write().secret = evt.value(),
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
                        onclick: move |_| {
                            let submitted = draft.peek().clone();
                            if !submitted.is_submittable() {
                                return;
                            }
                            info!(name = %submitted.name, url = %submitted.url, auth = %submitted.auth, "api connection requested");
                            actions.notify(ToastKind::Success, "API added", submitted.name.clone());
                            draft.set(ApiDraft::default());
                            dialog_open.set(false);
                        },
                        "Add API"
                    }
                }
            }
        }
    }
}

#[component]
fn ApiCard(api: ApiConnection) -> Element {
    let status = api.status;
    let name = api.name.clone();
    let test_name = api.name.clone();
    let url = api.url.clone();

    rsx! {
        Card { class: "space-y-4 p-5",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-gray-900", "{api.name}" }
                Icon { name: status_icon(status), class: format!("h-5 w-5 {}", status.icon_class()) }
            }
            p { class: "text-sm text-gray-500", "{api.description}" }
            div { class: "space-y-2",
                div { class: "flex items-center justify-between",
                    span { class: "text-sm text-gray-500", "Status:" }
                    Badge { class: status.badge_class(), label: status.label() }
                }
                div { class: "flex items-center justify-between",
                    span { class: "text-sm text-gray-500", "Endpoint:" }
                    div { class: "flex items-center gap-1",
                        span { class: "max-w-48 truncate font-mono text-sm", "{api.url}" }
                        a {
                            class: "rounded p-1 hover:bg-gray-100",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { name: IconName::ExternalLink, class: "h-3 w-3" }
                        }
                    }
                }
                div { class: "flex items-center justify-between",
                    span { class: "text-sm text-gray-500", "Last Sync:" }
                    span { class: "text-sm", "{api.last_sync}" }
                }
            }
            div { class: "flex gap-2",
                button {
                    class: "flex flex-1 items-center justify-center gap-2 rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                    onclick: move |_| info!(api = %name, "api configuration requested"),
                    Icon { name: IconName::Settings }
                    "Configure"
                }
                button {
                    class: "rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                    onclick: move |_| info!(api = %test_name, "api test requested"),
                    "Test"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_draft_needs_name_and_url() {
        let mut draft = ApiDraft::default();
        assert_eq!(draft.auth, "none");
        assert!(!draft.is_submittable());
        draft.name = "Catalog".into();
        assert!(!draft.is_submittable());
        draft.url = "   ".into();
        assert!(!draft.is_submittable());
        draft.url = "https://api.example.com/v1".into();
        assert!(draft.is_submittable());
    }

    #[test]
    fn only_connected_links_get_the_check_icon() {
        assert_eq!(status_icon(LinkStatus::Connected), IconName::CheckCircle);
        assert_eq!(status_icon(LinkStatus::Error), IconName::AlertCircle);
    }

    #[test]
    fn each_channel_kind_has_its_own_icon() {
        let icons = [ChannelKind::Messenger, ChannelKind::Zalo, ChannelKind::Web].map(|k| channel_icon(k).0);
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
    }
}
