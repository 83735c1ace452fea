use dioxus::prelude::*;
use dioxus_router::prelude::navigator;
use tracing::{info, warn};

use crate::fixtures::bots::{sample_bot_conversations, sample_bot_metrics, sample_bot_profile};
use crate::models::{BotProfile, BotStatus};
use crate::routes::Route;
use crate::state::RouteSink;
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{Badge, Card, CardHeader, StatCard, TabBar, TableHead};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailsTab {
    Overview,
    Conversations,
    Channels,
    Settings,
}

impl DetailsTab {
    const ALL: [DetailsTab; 4] = [Self::Overview, Self::Conversations, Self::Channels, Self::Settings];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Conversations => "Conversations",
            Self::Channels => "Channels",
            Self::Settings => "Settings",
        }
    }
}

const METRIC_ICONS: [IconName; 4] = [
    IconName::MessageSquare,
    IconName::Users,
    IconName::TrendingUp,
    IconName::Calendar,
];

#[component]
pub fn BotDetails(id: String) -> Element {
    let nav = navigator();
    let mut tab = use_signal(|| DetailsTab::Overview);
    let profile = sample_bot_profile();
    let bot = profile.bot.clone();
    let active_tab = tab();
    let active_idx = DetailsTab::ALL.iter().position(|t| *t == active_tab).unwrap_or(0);
    let toggle_icon = if bot.status == BotStatus::Active {
        IconName::Pause
    } else {
        IconName::Play
    };
    let status = bot.status;
    let edit_id = id.clone();

    rsx! {
        div { class: "space-y-4 pb-6 lg:space-y-6",
            div { class: "flex flex-col gap-4 lg:flex-row lg:items-center lg:justify-between",
                div { class: "flex items-center gap-4",
                    button {
                        class: "shrink-0 rounded p-2 hover:bg-gray-100",
                        "aria-label": "Back to bots",
                        onclick: move |_| nav.push_route(Route::Bots {}),
                        Icon { name: IconName::ArrowLeft }
                    }
                    div { class: "min-w-0 flex-1",
                        h1 { class: "truncate text-xl font-bold text-gray-900 lg:text-2xl", "{bot.name}" }
                        p { class: "mt-1 text-sm text-gray-600 lg:text-base", "{bot.description}" }
                    }
                }
                div { class: "flex shrink-0 items-center gap-2",
                    Badge { class: bot.status.badge_class(), label: bot.status.label() }
                    button {
                        class: "flex items-center gap-1 whitespace-nowrap rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                        onclick: move |_| nav.push_route(Route::bot_edit(edit_id.clone())),
                        Icon { name: IconName::Settings }
                        "Edit Bot"
                    }
                    button {
                        class: "flex items-center gap-1 whitespace-nowrap rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                        onclick: move |_| info!(?status, "bot run state toggle requested"),
                        Icon { name: toggle_icon }
                        {bot.status.toggle_label()}
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4 lg:grid-cols-4",
                for (metric, icon) in sample_bot_metrics().into_iter().zip(METRIC_ICONS) {
                    StatCard {
                        key: "{metric.label}",
                        label: metric.label.clone(),
                        value: metric.value.clone(),
                        change: metric.change.clone(),
                        icon,
                    }
                }
            }

            TabBar {
                labels: DetailsTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                active: active_idx,
                on_select: move |idx: usize| tab.set(DetailsTab::ALL[idx]),
            }

            {
                match active_tab {
                    DetailsTab::Overview => rsx! { OverviewTab { profile } },
                    DetailsTab::Conversations => rsx! { ConversationsTab {} },
                    DetailsTab::Channels => rsx! { ChannelsTab { profile } },
                    DetailsTab::Settings => rsx! { SettingsTab { id } },
                }
            }
        }
    }
}

#[component]
fn OverviewTab(profile: BotProfile) -> Element {
    let facts = [
        ("Created", profile.created_at.clone()),
        ("Last Updated", profile.updated_at.clone()),
        ("Last Active", profile.bot.last_active.clone()),
        ("Total Conversations", group_thousands(profile.bot.conversations)),
    ];

    rsx! {
        div { class: "grid grid-cols-1 gap-4 lg:grid-cols-2 lg:gap-6",
            Card {
                CardHeader { title: "Bot Information" }
                div { class: "space-y-4 p-5",
                    for (label, value) in facts {
                        div { key: "{label}",
                            p { class: "text-sm font-medium text-gray-700", "{label}" }
                            p { class: "text-sm text-gray-600", "{value}" }
                        }
                    }
                }
            }
            Card {
                CardHeader { title: "Connected Channels" }
                div { class: "space-y-3 p-5",
                    for channel in profile.bot.channels.iter() {
                        div { key: "{channel:?}", class: "flex items-center justify-between rounded-lg bg-gray-50 p-3",
                            span { class: "text-sm font-medium", {channel.display_name()} }
                            Badge { class: "border border-green-200 bg-green-50 text-green-700", label: "Connected" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConversationsTab() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Recent Conversations", description: "Latest interactions with your bot" }
            div { class: "overflow-x-auto p-5",
                table { class: "min-w-full divide-y divide-gray-200",
                    TableHead { columns: vec!["User", "Message", "Time", "Status"] }
                    tbody { class: "divide-y divide-gray-100",
                        for conversation in sample_bot_conversations() {
                            tr { key: "{conversation.id}",
                                td { class: "px-4 py-3 text-sm font-medium", "{conversation.user}" }
                                td { class: "max-w-xs truncate px-4 py-3 text-sm", "{conversation.message}" }
                                td { class: "px-4 py-3 text-sm text-gray-500", "{conversation.timestamp}" }
                                td { class: "px-4 py-3",
                                    Badge {
                                        class: conversation.status.badge_class(),
                                        label: conversation.status.label(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChannelsTab(profile: BotProfile) -> Element {
    rsx! {
        Card {
            CardHeader { title: "Channel Configuration", description: "Manage where your bot is deployed" }
            div { class: "space-y-4 p-5",
                for channel in profile.bot.channels.iter().copied() {
                    div { key: "{channel:?}", class: "flex flex-col justify-between gap-3 rounded-lg border border-gray-200 p-4 lg:flex-row lg:items-center",
                        div { class: "flex-1",
                            h3 { class: "font-medium", {channel.display_name()} }
                            p { class: "text-sm text-gray-600", "Connected and active" }
                        }
                        div { class: "flex items-center gap-2",
                            Badge { class: "border border-green-200 bg-green-50 text-green-700", label: "Active" }
                            button {
                                class: "flex items-center gap-1 rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                                onclick: move |_| info!(channel = channel.key(), "channel configuration requested"),
                                Icon { name: IconName::ExternalLink }
                                "Configure"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsTab(id: String) -> Element {
    let nav = navigator();
    let config_id = id.clone();
    let responses_id = id.clone();

    rsx! {
        Card {
            CardHeader { title: "Bot Settings", description: "Configure your bot's behavior and appearance" }
            div { class: "flex flex-col items-start gap-4 p-5",
                button {
                    class: "flex items-center gap-2 rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50",
                    onclick: move |_| nav.push_route(Route::bot_edit(config_id.clone())),
                    Icon { name: IconName::Settings }
                    "Edit Bot Configuration"
                }
                button {
                    class: "flex items-center gap-2 rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50",
                    onclick: move |_| nav.push_route(Route::bot_edit(responses_id.clone())),
                    Icon { name: IconName::MessageSquare }
                    "Manage Responses"
                }
                button {
                    class: "flex items-center gap-2 rounded-md bg-red-600 px-4 py-2 text-sm text-white hover:bg-red-700",
                    onclick: move |_| warn!(bot = %id, "bot deletion requested; bots are read-only"),
                    Icon { name: IconName::Trash }
                    "Delete Bot"
                }
            }
        }
    }
}

/// `1245` -> `"1,245"`.
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_245), "1,245");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn tabs_are_listed_in_display_order() {
        let labels: Vec<_> = DetailsTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Overview", "Conversations", "Channels", "Settings"]);
    }
}
