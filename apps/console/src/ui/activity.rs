use dioxus::prelude::*;
use dioxus_router::prelude::navigator;
use tracing::info;

use crate::fixtures::activity::sample_activity;
use crate::models::ActivityTone;
use crate::routes::Route;
use crate::state::RouteSink;
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::Card;

fn tone_icon(tone: ActivityTone) -> IconName {
    match tone {
        ActivityTone::Success => IconName::CheckCircle,
        ActivityTone::Warning => IconName::AlertTriangle,
        ActivityTone::Info => IconName::Info,
    }
}

/// Full history behind the dashboard's "View All" link.
#[component]
pub fn Activity() -> Element {
    let nav = navigator();
    let entries = sample_activity();
    let shown = entries.len();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center gap-4",
                button {
                    class: "rounded-md p-2 hover:bg-gray-100",
                    "aria-label": "Back to dashboard",
                    onclick: move |_| nav.push_route(Route::Dashboard {}),
                    Icon { name: IconName::ArrowLeft }
                }
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Recent Activity" }
                    p { class: "mt-1 text-gray-600", "Complete history of all bot activities and system events" }
                }
            }

            Card {
                div { class: "flex items-center justify-between border-b border-gray-200 p-6",
                    h2 { class: "text-lg font-semibold text-gray-900", "All Activities" }
                    div { class: "flex items-center gap-2 text-sm text-gray-500",
                        Icon { name: IconName::Clock }
                        span { "Last 7 days" }
                    }
                }
                div { class: "divide-y divide-gray-100",
                    for entry in entries {
                        div { key: "{entry.id}", class: "p-4 transition-colors hover:bg-gray-50",
                            div { class: "flex items-start gap-4",
                                div { class: "mt-1 shrink-0",
                                    Icon {
                                        name: tone_icon(entry.tone),
                                        class: format!("h-5 w-5 {}", entry.tone.icon_class()),
                                    }
                                }
                                div { class: "min-w-0 flex-1",
                                    p { class: "mb-1 text-sm text-gray-900", "{entry.message}" }
                                    div { class: "flex items-center gap-3",
                                        div { class: format!("h-2 w-2 rounded-full {}", entry.tone.dot_class()) }
                                        span { class: "text-xs text-gray-500", "{entry.timestamp}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "border-t border-gray-200 p-6 text-center",
                    button {
                        class: "w-full rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50 sm:w-auto",
                        onclick: move |_| info!(shown, "load more activities requested"),
                        "Load More Activities"
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
    fn every_tone_has_a_distinct_icon() {
        let icons = [ActivityTone::Success, ActivityTone::Warning, ActivityTone::Info].map(tone_icon);
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
        assert_ne!(icons[0], icons[2]);
    }

    #[test]
    fn history_is_longer_than_the_dashboard_preview() {
        assert_eq!(sample_activity().len(), 15);
    }
}
