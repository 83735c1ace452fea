use dioxus::prelude::*;
use dioxus_router::prelude::navigator;

use crate::fixtures::activity::sample_notifications;
use crate::routes::Route;
use crate::state::{use_app_actions, RouteSink};
use crate::ui::icons::{Icon, IconName};

#[component]
pub fn Header(is_mobile: bool) -> Element {
    let actions = use_app_actions();
    // Held locally; results are not filtered anywhere yet.
    let mut query = use_signal(String::new);

    rsx! {
        header { class: "border-b border-gray-200 bg-white px-4 py-4 lg:px-6",
            div { class: "flex items-center justify-between",
                div { class: "flex flex-1 items-center gap-4",
                    if is_mobile {
                        button {
                            class: "flex h-8 w-8 items-center justify-center rounded hover:bg-gray-100",
                            "aria-label": "Open navigation",
                            onclick: move |_| actions.open_sidebar(),
                            Icon { name: IconName::Menu }
                        }
                    }
                    div { class: "relative w-full max-w-md",
                        Icon { name: IconName::Search, class: "absolute left-3 top-1/2 h-4 w-4 -translate-y-1/2 text-gray-400" }
                        input {
                            class: "w-full rounded-md border border-gray-300 py-2 pl-10 pr-3 text-sm focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500",
                            placeholder: "Search bots, conversations...",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }
                }
                div { class: "flex items-center gap-3",
                    NotificationsMenu {}
                }
            }
        }
    }
}

#[component]
fn NotificationsMenu() -> Element {
    let nav = navigator();
    let mut open = use_signal(|| false);
    let notifications = sample_notifications();
    let unread = notifications.len();

    rsx! {
        div { class: "relative",
            button {
                class: "relative rounded p-2 hover:bg-gray-100",
                "aria-label": "Notifications",
                onclick: move |_| open.set(!open()),
                Icon { name: IconName::Bell, class: "h-5 w-5 text-gray-600" }
                span { class: "absolute -right-1 -top-1 flex h-4 w-4 items-center justify-center rounded-full bg-red-500 text-xs text-white",
                    "{unread}"
                }
            }
            if open() {
                div { class: "absolute right-0 z-30 mt-2 w-80 rounded-md border border-gray-200 bg-white shadow-lg",
                    p { class: "px-4 py-2 text-sm font-semibold text-gray-900", "Notifications" }
                    hr { class: "border-gray-100" }
                    for notification in notifications {
                        div { key: "{notification.id}", class: "flex flex-col items-start p-4 hover:bg-gray-50",
                            div { class: "text-sm font-medium", "{notification.title}" }
                            div { class: "mb-1 text-sm text-gray-500", "{notification.description}" }
                            div { class: "text-xs text-gray-400", "{notification.time}" }
                        }
                    }
                    hr { class: "border-gray-100" }
                    button {
                        class: "w-full px-4 py-2 text-center text-sm text-blue-600 hover:bg-gray-50",
                        onclick: move |_| {
                            open.set(false);
                            nav.push_route(Route::Activity {});
                        },
                        "View all notifications"
                    }
                }
            }
        }
    }
}
