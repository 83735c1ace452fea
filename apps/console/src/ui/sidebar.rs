use dioxus::prelude::*;
use dioxus_router::prelude::{navigator, use_route};
use tracing::info;

use crate::fixtures::workspace::current_user;
use crate::routes::{nav_items, Route};
use crate::state::{use_app_actions, LayoutState};
use crate::ui::icons::{Icon, IconName};

#[component]
pub fn Sidebar(layout: LayoutState) -> Element {
    let actions = use_app_actions();
    let nav = navigator();
    let current: Route = use_route();
    let sidebar_class = layout.sidebar_class();

    rsx! {
        aside { class: "{sidebar_class}",
            if layout.is_mobile {
                div { class: "flex justify-end p-4",
                    button {
                        class: "flex h-8 w-8 items-center justify-center rounded hover:bg-gray-100",
                        "aria-label": "Close navigation",
                        onclick: move |_| actions.close_sidebar(),
                        Icon { name: IconName::X }
                    }
                }
            }

            div { class: "border-b border-gray-200 p-6",
                div { class: "flex items-center gap-3",
                    div { class: "flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-br from-blue-500 to-purple-600",
                        span { class: "text-sm font-bold text-white", "AI" }
                    }
                    span { class: "text-xl font-semibold text-gray-900", "ChatBot Hub" }
                }
            }

            div { class: "p-4",
                button {
                    class: "flex w-full items-center justify-center gap-2 rounded-md bg-gradient-to-r from-blue-500 to-purple-600 px-4 py-2 text-sm font-medium text-white hover:from-blue-600 hover:to-purple-700",
                    onclick: move |_| actions.select_nav(&nav, Route::BotBuilder {}),
                    Icon { name: IconName::Plus }
                    "Create New Bot"
                }
            }

            nav { class: "flex-1 overflow-y-auto px-4 pb-4",
                ul { class: "space-y-1",
                    for item in nav_items() {
                        li { key: "{item.label}",
                            button {
                                class: if item.route == current {
                                    "flex w-full items-center gap-3 rounded-lg border-r-2 border-blue-700 bg-blue-50 px-3 py-2 text-sm font-medium text-blue-700"
                                } else {
                                    "flex w-full items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium text-gray-600 transition-all duration-200 hover:bg-gray-50 hover:text-gray-900"
                                },
                                onclick: {
                                    let target = item.route.clone();
                                    move |_| actions.select_nav(&nav, target.clone())
                                },
                                Icon { name: item.icon, class: "w-5 h-5" }
                                "{item.label}"
                            }
                        }
                    }
                }
            }

            div { class: "border-t border-gray-200 p-2",
                UserMenu {}
            }
        }
    }
}

#[component]
fn UserMenu() -> Element {
    let actions = use_app_actions();
    let nav = navigator();
    let mut open = use_signal(|| false);
    let user = current_user();

    rsx! {
        div { class: "relative",
            button {
                class: "flex w-full items-center gap-3 rounded-lg p-3 text-left hover:bg-gray-50",
                onclick: move |_| open.set(!open()),
                div { class: "flex h-8 w-8 items-center justify-center rounded-full bg-gray-300",
                    Icon { name: IconName::User, class: "w-4 h-4 text-gray-600" }
                }
                div { class: "min-w-0 flex-1",
                    p { class: "truncate text-sm font-medium text-gray-900", "{user.name}" }
                    p { class: "truncate text-xs text-gray-500", "{user.email}" }
                }
            }
            if open() {
                div { class: "absolute bottom-full left-0 mb-2 w-56 rounded-md border border-gray-200 bg-white py-1 shadow-lg",
                    p { class: "px-3 py-2 text-xs font-semibold text-gray-500", "My Account" }
                    hr { class: "border-gray-100" }
                    button {
                        class: "flex w-full items-center gap-2 px-3 py-2 text-sm text-gray-700 hover:bg-gray-50",
                        onclick: move |_| {
                            open.set(false);
                            actions.select_nav(&nav, Route::Settings {});
                        },
                        Icon { name: IconName::Settings }
                        "Settings"
                    }
                    hr { class: "border-gray-100" }
                    button {
                        class: "flex w-full items-center gap-2 px-3 py-2 text-sm text-red-600 hover:bg-red-50",
                        onclick: move |_| {
                            open.set(false);
                            info!("signing out");
                        },
                        Icon { name: IconName::LogOut }
                        "Sign out"
                    }
                }
            }
        }
    }
}
