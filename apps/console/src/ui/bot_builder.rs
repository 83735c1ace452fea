//! Visual flow builder for a new bot. The canvas is a fixed sample flow; node
//! selection and the name field are the only live state.

use dioxus::prelude::*;
use tracing::info;

use crate::fixtures::bots::{sample_flow_edges, sample_flow_nodes};
use crate::models::{FlowNode, FlowNodeKind};
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{Badge, TabBar};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BuilderTab {
    Nodes,
    Properties,
}

impl BuilderTab {
    const ALL: [BuilderTab; 2] = [Self::Nodes, Self::Properties];

    fn label(self) -> &'static str {
        match self {
            Self::Nodes => "Nodes",
            Self::Properties => "Properties",
        }
    }
}

fn node_icon(kind: FlowNodeKind) -> IconName {
    match kind {
        FlowNodeKind::Start => IconName::Play,
        FlowNodeKind::Message => IconName::MessageSquare,
        FlowNodeKind::Condition => IconName::GitBranch,
        FlowNodeKind::Knowledge => IconName::Database,
        FlowNodeKind::Api => IconName::Zap,
        FlowNodeKind::Input => IconName::Plus,
    }
}

fn connectors_svg(edges: &[(i32, i32, i32, i32)]) -> String {
    let lines: String = edges
        .iter()
        .map(|(x1, y1, x2, y2)| {
            format!(r##"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="#6b7280" stroke-width="2"/>"##)
        })
        .collect();
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%">{lines}</svg>"#)
}

#[component]
pub fn BotBuilder() -> Element {
    let mut bot_name = use_signal(|| "Customer Support Bot".to_string());
    let mut tab = use_signal(|| BuilderTab::Nodes);
    let mut selected = use_signal(|| None::<String>);

    let nodes = sample_flow_nodes();
    let selected_node = selected
        .read()
        .as_ref()
        .and_then(|id| nodes.iter().find(|node| &node.id == id).cloned());
    let connectors = connectors_svg(&sample_flow_edges());
    let active_tab = tab();
    let active_idx = BuilderTab::ALL.iter().position(|t| *t == active_tab).unwrap_or(0);

    let toolbar_action = move |action: &'static str| {
        let name = bot_name.peek().clone();
        info!(%name, action, "builder toolbar action");
    };

    rsx! {
        div { class: "-m-4 flex min-h-full flex-col lg:-m-6 lg:flex-row",
            aside { class: "flex flex-col border-r border-gray-200 bg-gray-50 lg:w-80",
                div { class: "border-b border-gray-200 bg-white p-4",
                    div { class: "mb-4 flex items-center justify-between gap-2",
                        input {
                            class: "w-full border-none p-0 text-lg font-semibold focus:outline-none",
                            value: "{bot_name}",
                            oninput: move |evt| bot_name.set(evt.value()),
                        }
                        Badge { class: "border border-gray-300 text-gray-700", label: "Draft" }
                    }
                    div { class: "flex gap-2 overflow-x-auto",
                        button {
                            class: "flex items-center gap-1 whitespace-nowrap rounded-md bg-gray-900 px-3 py-1.5 text-sm text-white",
                            onclick: move |_| toolbar_action("save"),
                            Icon { name: IconName::Save }
                            "Save"
                        }
                        button {
                            class: "flex items-center gap-1 whitespace-nowrap rounded-md border border-gray-300 px-3 py-1.5 text-sm",
                            onclick: move |_| toolbar_action("test"),
                            Icon { name: IconName::Play }
                            "Test"
                        }
                        button {
                            class: "flex items-center gap-1 whitespace-nowrap rounded-md border border-gray-300 px-3 py-1.5 text-sm",
                            onclick: move |_| toolbar_action("preview"),
                            Icon { name: IconName::Eye }
                            "Preview"
                        }
                    }
                }

                div { class: "flex flex-1 flex-col gap-4 p-4",
                    TabBar {
                        labels: BuilderTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                        active: active_idx,
                        on_select: move |idx: usize| tab.set(BuilderTab::ALL[idx]),
                    }
                    {
                        match active_tab {
                            BuilderTab::Nodes => rsx! { NodePalette {} },
                            BuilderTab::Properties => rsx! { NodeProperties { node: selected_node } },
                        }
                    }
                }
            }

            div {
                class: "relative flex-1 overflow-auto bg-gray-50",
                style: "background-image: radial-gradient(circle, #e5e7eb 1px, transparent 1px); background-size: 20px 20px;",
                div { class: "relative h-full min-h-[600px] w-full min-w-[800px]",
                    for node in nodes {
                        FlowTile {
                            key: "{node.id}",
                            selected: selected.read().as_deref() == Some(node.id.as_str()),
                            node: node.clone(),
                            on_select: move |id: String| selected.set(Some(id)),
                        }
                    }
                    div { class: "pointer-events-none absolute inset-0", dangerous_inner_html: connectors }
                }
            }
        }
    }
}

#[component]
fn FlowTile(node: FlowNode, selected: bool, on_select: EventHandler<String>) -> Element {
    let ring = if selected { "ring-2 ring-blue-500" } else { "" };
    let tile = node.kind.tile_class();
    let id = node.id.clone();

    rsx! {
        div {
            class: "absolute w-40 cursor-pointer rounded-lg border-2 p-3 transition-shadow hover:shadow-md {tile} {ring}",
            style: "left: {node.x}px; top: {node.y}px;",
            onclick: move |_| on_select.call(id.clone()),
            div { class: "mb-2 flex items-center gap-2",
                Icon { name: node_icon(node.kind) }
                span { class: "text-sm font-medium", "{node.title}" }
            }
            if let Some(content) = node.content.as_ref() {
                p { class: "truncate text-xs text-gray-600", "{content}" }
            }
            div { class: "absolute -right-2 top-1/2 h-4 w-4 -translate-y-1/2 rounded-full border-2 border-gray-400 bg-white" }
            div { class: "absolute -left-2 top-1/2 h-4 w-4 -translate-y-1/2 rounded-full border-2 border-gray-400 bg-white" }
        }
    }
}

#[component]
fn NodePalette() -> Element {
    let groups: [(&str, &[(IconName, &str, &str)]); 3] = [
        ("Message Nodes", &[(IconName::MessageSquare, "Send Message", "bg-blue-100 border-blue-300 text-blue-600")]),
        ("Logic Nodes", &[(IconName::GitBranch, "Condition", "bg-yellow-100 border-yellow-300 text-yellow-600")]),
        (
            "Data Nodes",
            &[
                (IconName::Database, "Knowledge Base", "bg-purple-100 border-purple-300 text-purple-600"),
                (IconName::Zap, "API Call", "bg-orange-100 border-orange-300 text-orange-600"),
            ],
        ),
    ];

    rsx! {
        div { class: "space-y-3",
            for (heading, items) in groups {
                div { key: "{heading}",
                    p { class: "mb-2 text-sm font-medium text-gray-700", "{heading}" }
                    div { class: "space-y-2",
                        for (icon, label, tile) in items.iter().copied() {
                            div { key: "{label}", class: "flex cursor-pointer items-center gap-2 rounded-lg border p-3 {tile}",
                                Icon { name: icon }
                                span { class: "text-sm text-gray-900", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NodeProperties(#[props(!optional)] node: Option<FlowNode>) -> Element {
    let Some(node) = node else {
        return rsx! {
            p { class: "text-sm text-gray-500", "Select a node to edit its properties" }
        };
    };

    rsx! {
        div { class: "space-y-4",
            div {
                p { class: "text-sm font-medium", "Node Type" }
                p { class: "text-sm capitalize text-gray-600", {node.kind.label()} }
            }
            div {
                label { class: "text-sm font-medium", "Title" }
                input {
                    class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                    value: "{node.title}",
                    readonly: true,
                }
            }
            if let Some(content) = node.content.as_ref() {
                div {
                    label { class: "text-sm font-medium", "Content" }
                    textarea {
                        class: "mt-1 w-full rounded-md border border-gray-300 p-2 text-sm",
                        rows: "4",
                        value: "{content}",
                        readonly: true,
                    }
                }
            }
        }
    }
}
