//! Knowledge base sources: document drop zone, URL ingestion and the source
//! table.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use tracing::info;

use crate::fixtures::knowledge::sample_data_sources;
use crate::models::{DataSource, SourceKind, SourceStatus};
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{Badge, Card, CardHeader, PageHeader, Placeholder, TableHead};

/// Trimmed URL ready for ingestion, or `None` for blank input.
fn submitted_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn status_icon(status: SourceStatus) -> IconName {
    match status {
        SourceStatus::Ready => IconName::CheckCircle,
        SourceStatus::Processing => IconName::Clock,
        SourceStatus::Error => IconName::AlertCircle,
    }
}

fn kind_icon(kind: SourceKind) -> (IconName, &'static str) {
    if kind.is_document() {
        (IconName::FileText, "text-blue-500")
    } else if kind == SourceKind::Url {
        (IconName::Globe, "text-green-500")
    } else {
        (IconName::FileText, "text-gray-500")
    }
}

#[component]
pub fn KnowledgeHub() -> Element {
    let mut drag_over = use_signal(|| false);
    let mut url_input = use_signal(String::new);

    let mut submit_url = move || {
        let submitted = submitted_url(&url_input.peek());
        if let Some(url) = submitted {
            info!(%url, "url queued for ingestion");
            url_input.set(String::new());
        }
    };

    let zone_class = if drag_over() {
        "border-blue-500 bg-blue-50"
    } else {
        "border-gray-300"
    };

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "Knowledge Hub", subtitle: "Manage your bot's knowledge base and data sources" }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                Card {
                    CardHeader {
                        title: "Upload Documents",
                        description: "Upload PDFs, Word documents, or CSV files to expand your bot's knowledge",
                    }
                    div { class: "p-5",
                        div {
                            class: "rounded-lg border-2 border-dashed p-8 text-center transition-colors {zone_class}",
                            ondragover: move |evt| {
                                evt.prevent_default();
                                if !*drag_over.peek() {
                                    drag_over.set(true);
                                }
                            },
                            ondragleave: move |evt| {
                                evt.prevent_default();
                                drag_over.set(false);
                            },
                            ondrop: move |evt| {
                                evt.prevent_default();
                                drag_over.set(false);
                                let count = evt.files().map(|files| files.files().len()).unwrap_or(0);
                                info!(count, "files dropped");
                            },
                            Icon { name: IconName::Upload, class: "mx-auto mb-4 h-12 w-12 text-gray-400" }
                            p { class: "mb-2 text-gray-600", "Drag and drop files here, or" }
                            button { class: "rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50", "Browse Files" }
                            p { class: "mt-2 text-sm text-gray-500", "Supported: PDF, DOCX, CSV (max 10MB)" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        title: "Web Content",
                        description: "Add web pages or documentation URLs for the bot to learn from",
                    }
                    div { class: "space-y-4 p-5",
                        div { class: "flex gap-2",
                            input {
                                class: "flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                                placeholder: "https://example.com/documentation",
                                value: "{url_input}",
                                oninput: move |evt| url_input.set(evt.value()),
                                onkeydown: move |evt| {
                                    if evt.key() == Key::Enter {
                                        submit_url();
                                    }
                                },
                            }
                            button {
                                class: "rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                                onclick: move |_| submit_url(),
                                "Add URL"
                            }
                        }
                        p { class: "text-sm text-gray-500",
                            "The system will crawl and extract relevant content from the provided URL"
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Data Sources", description: "All knowledge sources currently loaded into your bot" }
                div { class: "overflow-x-auto p-5",
                    table { class: "min-w-full divide-y divide-gray-200",
                        TableHead { columns: vec!["Source", "Type", "Status", "Date Added", "Size", "Actions"] }
                        tbody { class: "divide-y divide-gray-100",
                            for source in sample_data_sources() {
                                SourceRow { key: "{source.id}", source: source.clone() }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    title: "Knowledge Structure",
                    description: "Visual representation of how your data is organized and connected",
                }
                div { class: "p-5",
                    Placeholder {
                        icon: IconName::FileText,
                        title: "Knowledge Graph Visualization",
                        note: "Interactive visualization coming soon",
                    }
                }
            }
        }
    }
}

#[component]
fn SourceRow(source: DataSource) -> Element {
    let (type_icon, type_class) = kind_icon(source.kind);
    let size = source.size.clone().unwrap_or_else(|| "-".to_string());
    let refresh_name = source.name.clone();
    let remove_name = source.name.clone();

    rsx! {
        tr {
            td { class: "px-4 py-3",
                div { class: "flex items-center gap-2",
                    Icon { name: type_icon, class: format!("w-4 h-4 {type_class}") }
                    span { class: "font-medium", "{source.name}" }
                }
            }
            td { class: "px-4 py-3",
                Badge { class: "border border-gray-300 capitalize text-gray-700", label: source.kind.label() }
            }
            td { class: "px-4 py-3",
                div { class: "flex items-center gap-2",
                    Icon { name: status_icon(source.status), class: format!("w-4 h-4 {}", source.status.icon_class()) }
                    span { {source.status.label()} }
                }
            }
            td { class: "px-4 py-3 text-sm", "{source.date_added}" }
            td { class: "px-4 py-3 text-sm", "{size}" }
            td { class: "px-4 py-3",
                div { class: "flex items-center gap-2",
                    button {
                        class: "rounded p-2 hover:bg-gray-100",
                        "aria-label": "Reprocess source",
                        onclick: move |_| info!(source = %refresh_name, "reprocess requested"),
                        Icon { name: IconName::RefreshCw }
                    }
                    button {
                        class: "rounded p-2 hover:bg-gray-100",
                        "aria-label": "Remove source",
                        onclick: move |_| info!(source = %remove_name, "removal requested"),
                        Icon { name: IconName::Trash }
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
    fn blank_urls_are_ignored() {
        assert_eq!(submitted_url(""), None);
        assert_eq!(submitted_url("   \t"), None);
    }

    #[test]
    fn urls_are_trimmed_before_submission() {
        assert_eq!(
            submitted_url("  https://example.com/docs \n").as_deref(),
            Some("https://example.com/docs")
        );
    }

    #[test]
    fn url_sources_use_the_globe_icon() {
        assert_eq!(kind_icon(SourceKind::Url).0, IconName::Globe);
        assert_eq!(kind_icon(SourceKind::Pdf).0, IconName::FileText);
        assert_eq!(status_icon(SourceStatus::Error), IconName::AlertCircle);
    }
}
