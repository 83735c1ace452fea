use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state, ToastKind};
use crate::ui::icons::{Icon, IconName};

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
            Self::Info => ("border-slate-500 bg-slate-50", "text-slate-700"),
        }
    }
}

#[component]
pub fn Toast(
    kind: ToastKind,
    #[props(into)] title: String,
    #[props(into)] message: String,
    on_close: EventHandler<MouseEvent>,
) -> Element {
    let (container_class, accent_text) = kind.accent_classes();

    rsx! {
        div { class: "pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {container_class}",
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold {accent_text}", "{title}" }
                    p { class: "text-xs text-slate-700", "{message}" }
                }
                button {
                    class: "rounded p-1 text-slate-500 transition hover:bg-slate-200",
                    "aria-label": "Dismiss",
                    onclick: move |evt| on_close.call(evt),
                    Icon { name: IconName::X, class: "w-3 h-3" }
                }
            }
        }
    }
}

#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let toasts = use_app_state().read().toasts.items.clone();

    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-[60] flex w-80 flex-col gap-3",
            for toast in toasts {
                Toast {
                    key: "{toast.id}",
                    kind: toast.kind,
                    title: toast.title.clone(),
                    message: toast.message.clone(),
                    on_close: {
                        let id = toast.id;
                        move |_| actions.dismiss_toast(id)
                    },
                }
            }
        }
    }
}
