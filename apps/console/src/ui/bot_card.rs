use dioxus::prelude::*;

use crate::models::Bot;
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::Badge;

/// Summary tile for one bot. Clicking the card views the bot; the menu button
/// edits it without triggering the card click.
#[component]
pub fn BotCard(bot: Bot, on_view: EventHandler<String>, on_edit: EventHandler<String>) -> Element {
    let view_id = bot.id.clone();
    let edit_id = bot.id.clone();

    rsx! {
        div {
            class: "cursor-pointer rounded-lg border border-gray-200 bg-white shadow-sm transition-all duration-200 hover:scale-105 hover:shadow-lg",
            onclick: move |_| on_view.call(view_id.clone()),
            div { class: "flex items-start justify-between p-5 pb-3",
                div { class: "flex-1",
                    h3 { class: "mb-1 font-semibold text-gray-900", "{bot.name}" }
                    p { class: "line-clamp-2 text-sm text-gray-600", "{bot.description}" }
                }
                button {
                    class: "rounded p-1 text-gray-500 hover:bg-gray-100",
                    "aria-label": "Edit bot",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_edit.call(edit_id.clone());
                    },
                    Icon { name: IconName::MoreVertical }
                }
            }
            div { class: "px-5 pb-5",
                div { class: "mb-4 flex items-center justify-between",
                    Badge { class: bot.status.badge_class(), label: bot.status.label() }
                    div { class: "flex gap-1",
                        for channel in bot.channels.iter() {
                            span { key: "{channel:?}", class: "text-lg", title: channel.display_name(), {channel.glyph()} }
                        }
                    }
                }
                div { class: "grid grid-cols-2 gap-4",
                    div { class: "flex items-center gap-2",
                        Icon { name: IconName::MessageSquare, class: "w-4 h-4 text-gray-400" }
                        span { class: "text-sm text-gray-600", "{bot.conversations} chats" }
                    }
                    div { class: "flex items-center gap-2",
                        Icon { name: IconName::TrendingUp, class: "w-4 h-4 text-gray-400" }
                        span { class: "text-sm text-gray-600", "{bot.last_active}" }
                    }
                }
            }
        }
    }
}
