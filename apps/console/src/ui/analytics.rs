use dioxus::prelude::*;
use tracing::{debug, info};

use crate::fixtures::analytics::{
    analytics_metrics, channel_distribution, conversation_logs, unanswered_questions,
    BOT_FILTER_OPTIONS, DATE_RANGE_OPTIONS,
};
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{
    Badge, Card, CardHeader, PageHeader, Placeholder, SelectField, StatCard, TableHead,
};

const METRIC_ICONS: [IconName; 4] = [
    IconName::MessageSquare,
    IconName::TrendingUp,
    IconName::Users,
    IconName::Calendar,
];

#[component]
pub fn Analytics() -> Element {
    let mut selected_bot = use_signal(|| BOT_FILTER_OPTIONS[0].0.to_string());
    let mut date_range = use_signal(|| DATE_RANGE_OPTIONS[0].0.to_string());
    // Not applied to the log table.
    let mut search = use_signal(String::new);

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Analytics & Insights",
                subtitle: "Track performance and identify improvement opportunities",
                SelectField {
                    class: "w-44",
                    value: selected_bot(),
                    options: BOT_FILTER_OPTIONS.to_vec(),
                    on_change: move |value: String| {
                        debug!(bot = %value, "analytics bot filter changed");
                        selected_bot.set(value);
                    },
                }
                SelectField {
                    class: "w-36",
                    value: date_range(),
                    options: DATE_RANGE_OPTIONS.to_vec(),
                    on_change: move |value: String| {
                        debug!(range = %value, "analytics date range changed");
                        date_range.set(value);
                    },
                }
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4",
                for (metric, icon) in analytics_metrics().into_iter().zip(METRIC_ICONS) {
                    StatCard {
                        key: "{metric.label}",
                        label: metric.label.clone(),
                        value: metric.value.clone(),
                        change: metric.change.clone(),
                        icon,
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                Card {
                    CardHeader { title: "Conversation Volume", description: "Messages over time" }
                    div { class: "p-5",
                        Placeholder { icon: IconName::TrendingUp, title: "Chart visualization", note: "Coming soon" }
                    }
                }
                Card {
                    CardHeader { title: "Top Channels", description: "Message distribution by platform" }
                    div { class: "space-y-4 p-5",
                        for share in channel_distribution() {
                            div { key: "{share.name}", class: "flex items-center justify-between",
                                div { class: "flex items-center gap-2",
                                    div { class: format!("h-4 w-4 rounded {}", share.swatch_class) }
                                    span { "{share.name}" }
                                }
                                span { class: "font-medium", "{share.percent}%" }
                            }
                        }
                    }
                }
            }

            Card {
                div { class: "flex items-center gap-2 border-b border-gray-100 px-5 pt-4",
                    Icon { name: IconName::AlertTriangle, class: "h-5 w-5 text-orange-500" }
                    h2 { class: "text-base font-semibold text-gray-900", "Unanswered Questions" }
                }
                p { class: "px-5 pb-4 pt-1 text-xs text-gray-500",
                    "Most frequent questions your bot couldn't answer - prioritize these for knowledge base updates"
                }
                div { class: "overflow-x-auto p-5",
                    table { class: "min-w-full divide-y divide-gray-200",
                        TableHead { columns: vec!["Question", "Category", "Frequency", "Last Asked", "Actions"] }
                        tbody { class: "divide-y divide-gray-100",
                            for question in unanswered_questions() {
                                tr { key: "{question.id}",
                                    td { class: "max-w-md px-4 py-3 text-sm font-medium", "{question.question}" }
                                    td { class: "px-4 py-3",
                                        Badge {
                                            class: "border border-gray-300 text-gray-700",
                                            label: question.category.clone().unwrap_or_else(|| "Uncategorized".to_string()),
                                        }
                                    }
                                    td { class: "px-4 py-3",
                                        Badge { class: "bg-gray-100 text-gray-800", label: format!("{}x", question.frequency) }
                                    }
                                    td { class: "px-4 py-3 text-sm", "{question.last_asked}" }
                                    td { class: "px-4 py-3",
                                        button {
                                            class: "rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                                            onclick: {
                                                let id = question.id.clone();
                                                move |_| info!(question = %id, "question queued for knowledge base")
                                            },
                                            "Add to Knowledge Base"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Recent Conversations", description: "Detailed log of bot interactions for quality assurance" }
                div { class: "p-5",
                    div { class: "relative mb-4 max-w-md",
                        Icon { name: IconName::Search, class: "absolute left-3 top-1/2 h-4 w-4 -translate-y-1/2 text-gray-400" }
                        input {
                            class: "w-full rounded-md border border-gray-300 py-2 pl-10 pr-3 text-sm",
                            placeholder: "Search conversations...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    div { class: "overflow-x-auto",
                        table { class: "min-w-full divide-y divide-gray-200",
                            TableHead { columns: vec!["User", "Channel", "Messages", "Start Time", "Status", "Actions"] }
                            tbody { class: "divide-y divide-gray-100",
                                for log in conversation_logs() {
                                    tr { key: "{log.id}",
                                        td { class: "px-4 py-3 text-sm", "{log.user}" }
                                        td { class: "px-4 py-3",
                                            Badge { class: "border border-gray-300 text-gray-700", label: log.channel.clone() }
                                        }
                                        td { class: "px-4 py-3 text-sm", "{log.messages}" }
                                        td { class: "px-4 py-3 text-sm", "{log.start_time}" }
                                        td { class: "px-4 py-3",
                                            if log.escalated {
                                                Badge { class: "bg-red-600 text-white", label: "Escalated" }
                                            } else {
                                                Badge { class: "bg-gray-900 text-white", label: "Resolved" }
                                            }
                                        }
                                        td { class: "px-4 py-3",
                                            button {
                                                class: "rounded px-3 py-1.5 text-sm hover:bg-gray-100",
                                                onclick: {
                                                    let id = log.id.clone();
                                                    move |_| debug!(conversation = %id, "conversation details requested")
                                                },
                                                "View Details"
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
    }
}
