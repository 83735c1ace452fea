//! Responsive application shell wrapped around every route.

use dioxus::prelude::*;
use dioxus_router::prelude::Outlet;

use crate::hooks::viewport::use_viewport_watcher;
use crate::routes::Route;
use crate::state::{use_app_actions, use_app_state};
use crate::ui::header::Header;
use crate::ui::notifications::NotificationCenter;
use crate::ui::sidebar::Sidebar;

#[component]
pub fn AppLayout() -> Element {
    let actions = use_app_actions();
    use_viewport_watcher(actions);

    let layout = use_app_state().read().layout;
    let content_class = layout.content_class();

    rsx! {
        div { class: "flex h-screen bg-gray-50",
            if layout.shows_overlay() {
                div {
                    class: "fixed inset-0 z-40 bg-black/50",
                    onclick: move |_| actions.close_sidebar(),
                }
            }
            Sidebar { layout }
            div { class: "{content_class}",
                Header { is_mobile: layout.is_mobile }
                main { class: "flex-1 overflow-auto p-4 lg:p-6",
                    Outlet::<Route> {}
                }
            }
            NotificationCenter {}
        }
    }
}
