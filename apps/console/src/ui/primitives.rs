//! Small display building blocks shared by the pages.

use dioxus::prelude::*;

use crate::ui::icons::{Icon, IconName};

#[component]
pub fn PageHeader(
    #[props(into)] title: String,
    #[props(optional, into)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        header { class: "flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between",
            div { class: "space-y-1",
                h1 { class: "text-2xl font-bold text-gray-900", "{title}" }
                if let Some(subtitle) = subtitle.as_ref() {
                    p { class: "text-sm text-gray-600", "{subtitle}" }
                }
            }
            div { class: "flex flex-wrap items-center gap-2", {children} }
        }
    }
}

#[component]
pub fn Card(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        section { class: "rounded-lg border border-gray-200 bg-white shadow-sm {class}", {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(into)] title: String,
    #[props(optional, into)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex items-start justify-between gap-3 border-b border-gray-100 px-5 py-4",
            div {
                h2 { class: "text-base font-semibold text-gray-900", "{title}" }
                if let Some(description) = description.as_ref() {
                    p { class: "mt-1 text-xs text-gray-500", "{description}" }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn Badge(#[props(into)] class: String, #[props(into)] label: String) -> Element {
    rsx! {
        span { class: "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {class}", "{label}" }
    }
}

#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(optional, into)] change: Option<String>,
    #[props(optional)] icon: Option<IconName>,
) -> Element {
    let change_class = match change.as_deref() {
        Some(delta) if delta.starts_with('+') => "text-green-600",
        _ => "text-gray-500",
    };

    rsx! {
        Card { class: "p-5",
            div { class: "flex items-center justify-between",
                p { class: "text-sm font-medium text-gray-600", "{label}" }
                if let Some(icon) = icon {
                    Icon { name: icon, class: "w-4 h-4 text-gray-400" }
                }
            }
            p { class: "mt-2 text-2xl font-bold text-gray-900", "{value}" }
            if let Some(change) = change.as_ref() {
                p { class: "mt-1 text-xs {change_class}", "{change}" }
            }
        }
    }
}

/// Horizontal tab strip. Pages keep the active tab in a local enum and map it
/// to an index.
#[component]
pub fn TabBar(labels: Vec<&'static str>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        nav { class: "flex gap-1 overflow-x-auto rounded-lg bg-gray-100 p-1",
            for (idx, label) in labels.into_iter().enumerate() {
                button {
                    key: "{label}",
                    class: if idx == active {
                        "whitespace-nowrap rounded-md bg-white px-3 py-1.5 text-sm font-medium text-gray-900 shadow-sm"
                    } else {
                        "whitespace-nowrap rounded-md px-3 py-1.5 text-sm font-medium text-gray-600 hover:text-gray-900"
                    },
                    onclick: move |_| on_select.call(idx),
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn Dialog(
    open: bool,
    #[props(into)] title: String,
    #[props(optional, into)] description: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center p-4",
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| on_close.call(()),
            }
            div { class: "relative w-full max-w-lg space-y-4 rounded-lg bg-white p-6 shadow-xl",
                div { class: "flex items-start justify-between gap-4",
                    div {
                        h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
                        if let Some(description) = description.as_ref() {
                            p { class: "mt-1 text-sm text-gray-500", "{description}" }
                        }
                    }
                    button {
                        class: "rounded p-1 text-gray-400 hover:bg-gray-100 hover:text-gray-600",
                        "aria-label": "Close dialog",
                        onclick: move |_| on_close.call(()),
                        Icon { name: IconName::X }
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn Switch(checked: bool, on_toggle: EventHandler<bool>) -> Element {
    let track = if checked { "bg-gray-900" } else { "bg-gray-200" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };

    rsx! {
        button {
            class: "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors {track}",
            role: "switch",
            "aria-checked": "{checked}",
            onclick: move |_| on_toggle.call(!checked),
            span { class: "inline-block h-5 w-5 transform rounded-full bg-white shadow transition-transform {knob}" }
        }
    }
}

#[component]
pub fn ProgressBar(percent: u8, #[props(default = "bg-gray-900".to_string(), into)] bar_class: String) -> Element {
    let width = percent.min(100);

    rsx! {
        div { class: "h-2 w-full overflow-hidden rounded-full bg-gray-200",
            div { class: "h-full rounded-full {bar_class}", style: "width: {width}%;" }
        }
    }
}

#[component]
pub fn TableHead(columns: Vec<&'static str>) -> Element {
    rsx! {
        thead { class: "bg-gray-50",
            tr {
                for column in columns.into_iter() {
                    th {
                        key: "{column}",
                        class: "px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500",
                        "{column}"
                    }
                }
            }
        }
    }
}

/// Dashed placeholder for visualisations that are not wired to data.
#[component]
pub fn Placeholder(icon: IconName, #[props(into)] title: String, #[props(into)] note: String) -> Element {
    rsx! {
        div { class: "flex h-64 flex-col items-center justify-center rounded-lg border-2 border-dashed border-gray-200 bg-gray-50 text-center",
            Icon { name: icon, class: "mb-3 h-10 w-10 text-gray-300" }
            p { class: "text-sm font-medium text-gray-600", "{title}" }
            p { class: "mt-1 text-xs text-gray-400", "{note}" }
        }
    }
}

/// Native select over `(value, label)` pairs.
#[component]
pub fn SelectField(
    value: String,
    options: Vec<(&'static str, &'static str)>,
    on_change: EventHandler<String>,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        select {
            class: "rounded-md border border-gray-300 bg-white px-3 py-2 text-sm {class}",
            value: "{value}",
            onchange: move |evt| on_change.call(evt.value()),
            for (key, label) in options {
                option { key: "{key}", value: key, selected: key == value, "{label}" }
            }
        }
    }
}
