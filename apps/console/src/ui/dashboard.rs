//! Landing page: headline metrics, recent activity and the first few bots.

use dioxus::prelude::*;
use dioxus_router::prelude::navigator;

use crate::fixtures::activity::recent_activity;
use crate::fixtures::analytics::dashboard_metrics;
use crate::fixtures::bots::featured_bots;
use crate::routes::Route;
use crate::state::RouteSink;
use crate::ui::bot_card::BotCard;
use crate::ui::icons::IconName;
use crate::ui::primitives::{PageHeader, StatCard};

const METRIC_ICONS: [IconName; 4] = [
    IconName::MessageSquare,
    IconName::Users,
    IconName::TrendingUp,
    IconName::AlertCircle,
];

#[component]
pub fn Dashboard() -> Element {
    let nav = navigator();
    let metrics = dashboard_metrics();
    let activity = recent_activity();
    let bots = featured_bots();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "Dashboard", subtitle: "Monitor and manage your AI chatbots",
                button {
                    class: "rounded-md bg-gradient-to-r from-blue-500 to-purple-600 px-4 py-2 text-sm font-medium text-white hover:from-blue-600 hover:to-purple-700",
                    onclick: move |_| nav.push_route(Route::BotBuilder {}),
                    "Create New Bot"
                }
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4",
                for (metric, icon) in metrics.into_iter().zip(METRIC_ICONS) {
                    StatCard {
                        key: "{metric.label}",
                        label: metric.label.clone(),
                        value: metric.value.clone(),
                        change: metric.change.clone(),
                        icon,
                    }
                }
            }

            section { class: "rounded-lg border border-gray-200 bg-white p-6 shadow-sm",
                div { class: "mb-4 flex items-center justify-between",
                    h2 { class: "text-lg font-semibold text-gray-900", "Recent Activity" }
                    button {
                        class: "rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                        onclick: move |_| nav.push_route(Route::Activity {}),
                        "View All"
                    }
                }
                div { class: "space-y-3",
                    for entry in activity {
                        div { key: "{entry.id}", class: "flex items-center gap-3 rounded-lg bg-gray-50 p-3",
                            div { class: format!("h-2 w-2 rounded-full {}", entry.tone.dot_class()) }
                            span { class: "text-sm text-gray-600", "{entry.message}" }
                            span { class: "ml-auto whitespace-nowrap text-xs text-gray-400", "{entry.timestamp}" }
                        }
                    }
                }
            }

            section {
                div { class: "mb-4 flex items-center justify-between",
                    h2 { class: "text-lg font-semibold text-gray-900", "Your Bots" }
                    button {
                        class: "rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                        onclick: move |_| nav.push_route(Route::Bots {}),
                        "View All"
                    }
                }
                div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for bot in bots {
                        BotCard {
                            key: "{bot.id}",
                            bot: bot.clone(),
                            on_view: move |id: String| nav.push_route(Route::bot(id)),
                            on_edit: move |id: String| nav.push_route(Route::bot_edit(id)),
                        }
                    }
                }
            }
        }
    }
}
