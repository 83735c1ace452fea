use dioxus::prelude::*;
use dioxus_router::prelude::navigator;
use tracing::debug;

use crate::fixtures::bots::sample_bots;
use crate::routes::Route;
use crate::state::RouteSink;
use crate::ui::bot_card::BotCard;
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::PageHeader;

#[component]
pub fn Bots() -> Element {
    let nav = navigator();
    // The grid always shows every bot; the query is kept for the input only.
    let mut query = use_signal(String::new);
    let bots = sample_bots();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "Bots", subtitle: "Manage your AI chatbots and their configurations",
                button {
                    class: "flex items-center gap-2 rounded-md bg-gradient-to-r from-blue-500 to-purple-600 px-4 py-2 text-sm font-medium text-white hover:from-blue-600 hover:to-purple-700",
                    onclick: move |_| nav.push_route(Route::BotBuilder {}),
                    Icon { name: IconName::Plus }
                    "Create New Bot"
                }
            }

            div { class: "flex items-center gap-4",
                div { class: "relative max-w-md flex-1",
                    Icon { name: IconName::Search, class: "absolute left-3 top-1/2 h-4 w-4 -translate-y-1/2 text-gray-400" }
                    input {
                        class: "w-full rounded-md border border-gray-300 py-2 pl-10 pr-3 text-sm",
                        placeholder: "Search bots...",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                button {
                    class: "flex items-center gap-2 rounded-md border border-gray-300 px-3 py-2 text-sm hover:bg-gray-50",
                    onclick: move |_| {
                        let query = query.peek().clone();
                        debug!(%query, "filter requested");
                    },
                    Icon { name: IconName::Filter }
                    "Filter"
                }
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
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
