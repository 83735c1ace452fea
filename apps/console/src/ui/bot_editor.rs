//! Response editor for an existing bot. Edits stay in page-local state and are
//! dropped when the page unmounts.

use dioxus::prelude::*;
use dioxus_router::prelude::navigator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::fixtures::bots::{sample_bot_profile, sample_bot_responses};
use crate::models::BotResponse;
use crate::routes::Route;
use crate::state::RouteSink;
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{Badge, TabBar};

/// Form contents for the response side panel. `editing` is the id of the
/// response being changed, or `None` for a new one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseDraft {
    pub editing: Option<String>,
    pub category: String,
    pub trigger: String,
    pub response: String,
}

impl ResponseDraft {
    fn from_response(response: &BotResponse) -> Self {
        Self {
            editing: Some(response.id.clone()),
            category: response.category.clone(),
            trigger: response.trigger.clone(),
            response: response.response.clone(),
        }
    }

    fn into_response(self, id: String) -> BotResponse {
        BotResponse {
            id,
            trigger: self.trigger,
            response: self.response,
            category: self.category,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseBook {
    responses: Vec<BotResponse>,
    draft: Option<ResponseDraft>,
}

impl ResponseBook {
    pub fn new(responses: Vec<BotResponse>) -> Self {
        Self {
            responses,
            draft: None,
        }
    }

    pub fn responses(&self) -> &[BotResponse] {
        &self.responses
    }

    pub fn draft(&self) -> Option<&ResponseDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut ResponseDraft> {
        self.draft.as_mut()
    }

    pub fn begin_new(&mut self) {
        self.draft = Some(ResponseDraft::default());
    }

    /// Opens the panel on an existing response. Unknown ids leave the book as is.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.responses.iter().find(|r| r.id == id) {
            Some(response) => {
                self.draft = Some(ResponseDraft::from_response(response));
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Commits the open draft and returns the id it was stored under. Editing
    /// a response that has since been deleted stores it as a new entry.
    pub fn save(&mut self) -> Option<String> {
        let draft = self.draft.take()?;
        let existing = draft
            .editing
            .as_ref()
            .and_then(|id| self.responses.iter().position(|r| &r.id == id));

        match existing {
            Some(idx) => {
                let id = self.responses[idx].id.clone();
                self.responses[idx] = draft.into_response(id.clone());
                Some(id)
            }
            None => {
                let id = fresh_id();
                self.responses.push(draft.into_response(id.clone()));
                Some(id)
            }
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.responses.len();
        self.responses.retain(|r| r.id != id);
        if self.draft.as_ref().and_then(|d| d.editing.as_deref()) == Some(id) {
            self.draft = None;
        }
        self.responses.len() != before
    }

    /// Inserts a copy directly after the source and returns the copy's id.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let idx = self.responses.iter().position(|r| r.id == id)?;
        let mut copy = self.responses[idx].clone();
        copy.id = fresh_id();
        let new_id = copy.id.clone();
        self.responses.insert(idx + 1, copy);
        Some(new_id)
    }
}

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorTab {
    Responses,
    Settings,
}

impl EditorTab {
    const ALL: [EditorTab; 2] = [Self::Responses, Self::Settings];

    fn label(self) -> &'static str {
        match self {
            Self::Responses => "Responses",
            Self::Settings => "Settings",
        }
    }
}

#[component]
pub fn BotEditor(id: String) -> Element {
    let nav = navigator();
    let profile = use_hook(sample_bot_profile);
    let mut bot_name = use_signal(|| profile.bot.name.clone());
    let mut tab = use_signal(|| EditorTab::Responses);
    let book = use_signal(|| ResponseBook::new(sample_bot_responses()));

    let active_tab = tab();
    let active_idx = EditorTab::ALL.iter().position(|t| *t == active_tab).unwrap_or(0);
    let back_id = id.clone();

    let header_action = move |action: &'static str| {
        let name = bot_name.peek().clone();
        let responses = book.peek().responses().len();
        info!(%name, responses, action, "editor toolbar action");
    };

    rsx! {
        div { class: "-m-4 flex min-h-full flex-col lg:-m-6",
            div { class: "border-b border-gray-200 bg-white p-4",
                div { class: "flex flex-col gap-4 lg:flex-row lg:items-center lg:justify-between",
                    div { class: "flex min-w-0 flex-1 items-center gap-4",
                        button {
                            class: "shrink-0 rounded p-2 hover:bg-gray-100",
                            "aria-label": "Back to bot",
                            onclick: move |_| nav.push_route(Route::bot(back_id.clone())),
                            Icon { name: IconName::ArrowLeft }
                        }
                        div { class: "min-w-0 flex-1",
                            input {
                                class: "w-full border-none p-0 text-lg font-semibold focus:outline-none lg:text-xl",
                                value: "{bot_name}",
                                oninput: move |evt| bot_name.set(evt.value()),
                            }
                            div { class: "mt-1",
                                Badge { class: "border border-gray-300 text-gray-700", label: "Editing" }
                            }
                        }
                    }
                    div { class: "flex shrink-0 items-center gap-2",
                        for (icon, label, action) in [
                            (IconName::History, "Version History", "history"),
                            (IconName::Eye, "Preview", "preview"),
                            (IconName::Play, "Test", "test"),
                        ] {
                            button {
                                key: "{action}",
                                class: "flex items-center gap-1 whitespace-nowrap rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-50",
                                onclick: move |_| header_action(action),
                                Icon { name: icon }
                                span { class: "hidden lg:inline", "{label}" }
                            }
                        }
                        button {
                            class: "flex items-center gap-1 whitespace-nowrap rounded-md bg-gray-900 px-3 py-1.5 text-sm text-white",
                            onclick: move |_| header_action("save"),
                            Icon { name: IconName::Save }
                            "Save"
                        }
                    }
                }
            }

            div { class: "flex flex-1 flex-col overflow-hidden lg:flex-row",
                div { class: "flex flex-col gap-4 border-r border-gray-200 bg-white p-4 lg:w-1/2 xl:w-2/3",
                    TabBar {
                        labels: EditorTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                        active: active_idx,
                        on_select: move |idx: usize| tab.set(EditorTab::ALL[idx]),
                    }
                    {
                        match active_tab {
                            EditorTab::Responses => rsx! { ResponseList { book } },
                            EditorTab::Settings => rsx! {
                                EditorSettings { bot_name, description: profile.bot.description.clone() }
                            },
                        }
                    }
                }
                div { class: "flex flex-col bg-gray-50 lg:w-1/2 xl:w-1/3",
                    DraftPanel { book }
                }
            }
        }
    }
}

#[component]
fn ResponseList(book: Signal<ResponseBook>) -> Element {
    let mut book = book;
    let responses = book.read().responses().to_vec();

    rsx! {
        div { class: "flex flex-col gap-2 lg:flex-row lg:items-center lg:justify-between",
            h2 { class: "text-lg font-semibold", "Bot Responses" }
            button {
                class: "flex items-center gap-1 whitespace-nowrap rounded-md bg-gray-900 px-3 py-1.5 text-sm text-white",
                onclick: move |_| book.write().begin_new(),
                Icon { name: IconName::Plus }
                "Add Response"
            }
        }
        div { class: "flex-1 space-y-3 overflow-auto",
            for response in responses {
                ResponseRow { key: "{response.id}", response: response.clone(), book }
            }
        }
    }
}

#[component]
fn ResponseRow(response: BotResponse, book: Signal<ResponseBook>) -> Element {
    let mut book = book;
    let edit_id = response.id.clone();
    let copy_id = response.id.clone();
    let delete_id = response.id.clone();

    rsx! {
        div { class: "rounded-lg border border-gray-200 p-4 transition-shadow hover:shadow-md",
            div { class: "flex flex-col gap-3 lg:flex-row lg:items-start lg:justify-between",
                div { class: "min-w-0 flex-1",
                    div { class: "mb-2",
                        Badge { class: "border border-gray-300 text-gray-700", label: response.category.clone() }
                    }
                    p { class: "mb-2 text-sm font-medium", "Triggers: {response.trigger}" }
                    p { class: "line-clamp-2 text-sm text-gray-600", "{response.response}" }
                }
                div { class: "flex shrink-0 items-center gap-2",
                    button {
                        class: "rounded p-2 hover:bg-gray-100",
                        "aria-label": "Edit response",
                        onclick: move |_| {
                            book.write().begin_edit(&edit_id);
                        },
                        Icon { name: IconName::Edit }
                    }
                    button {
                        class: "rounded p-2 hover:bg-gray-100",
                        "aria-label": "Duplicate response",
                        onclick: move |_| {
                            let copy = book.write().duplicate(&copy_id);
                            debug!(source = %copy_id, ?copy, "response duplicated");
                        },
                        Icon { name: IconName::Copy }
                    }
                    button {
                        class: "rounded p-2 text-red-600 hover:bg-red-50 hover:text-red-700",
                        "aria-label": "Delete response",
                        onclick: move |_| {
                            if book.write().delete(&delete_id) {
                                debug!(id = %delete_id, "response deleted");
                            }
                        },
                        Icon { name: IconName::Trash }
                    }
                }
            }
        }
    }
}

#[component]
fn DraftPanel(book: Signal<ResponseBook>) -> Element {
    let mut book = book;
    let Some(draft) = book.read().draft().cloned() else {
        return rsx! {
            div { class: "flex flex-1 items-center justify-center p-4",
                div { class: "text-center text-gray-500",
                    Icon { name: IconName::Edit, class: "mx-auto mb-4 h-12 w-12 text-gray-300" }
                    p { class: "text-sm", "Select a response to edit or create a new one" }
                }
            }
        };
    };

    let is_update = draft.editing.is_some();

    rsx! {
        div { class: "flex-1 space-y-4 p-4",
            div { class: "flex items-center justify-between",
                h3 { class: "text-lg font-semibold",
                    if is_update { "Edit Response" } else { "Add New Response" }
                }
                button {
                    class: "rounded px-3 py-1.5 text-sm hover:bg-gray-100",
                    onclick: move |_| book.write().cancel(),
                    "Cancel"
                }
            }
            div { class: "space-y-4",
                div {
                    label { class: "text-sm font-medium", r#for: "category", "Category" }
                    input {
                        id: "category",
                        class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "e.g., greetings, hours, menu",
                        value: "{draft.category}",
                        oninput: move |evt| {
                            if let Some(d) = book.write().draft_mut() {
                                d.category = evt.value();
                            }
                        },
                    }
                }
                div {
                    label { class: "text-sm font-medium", r#for: "triggers", "Trigger Words" }
                    input {
                        id: "triggers",
                        class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        placeholder: "hello, hi, hey (separate with commas)",
                        value: "{draft.trigger}",
                        oninput: move |evt| {
                            if let Some(d) = book.write().draft_mut() {
                                d.trigger = evt.value();
                            }
                        },
                    }
                    p { class: "mt-1 text-xs text-gray-500", "Enter keywords that will trigger this response" }
                }
                div {
                    label { class: "text-sm font-medium", r#for: "response", "Response" }
                    textarea {
                        id: "response",
                        class: "mt-1 w-full rounded-md border border-gray-300 p-2 text-sm",
                        placeholder: "Enter the bot's response...",
                        rows: "4",
                        value: "{draft.response}",
                        oninput: move |evt| {
                            if let Some(d) = book.write().draft_mut() {
                                d.response = evt.value();
                            }
                        },
                    }
                }
                button {
                    class: "w-full rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white",
                    onclick: move |_| {
                        if let Some(id) = book.write().save() {
                            info!(%id, "response saved");
                        }
                    },
                    if is_update { "Update Response" } else { "Add Response" }
                }
            }
        }
    }
}

#[component]
fn EditorSettings(bot_name: Signal<String>, #[props(into)] description: String) -> Element {
    let mut bot_name = bot_name;
    let mut description = use_signal(|| description);
    let mut fallback = use_signal(String::new);

    rsx! {
        div { class: "space-y-4",
            div {
                label { class: "text-sm font-medium", r#for: "bot-name", "Bot Name" }
                input {
                    id: "bot-name",
                    class: "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                    value: "{bot_name}",
                    oninput: move |evt| bot_name.set(evt.value()),
                }
            }
            div {
                label { class: "text-sm font-medium", r#for: "bot-description", "Description" }
                textarea {
                    id: "bot-description",
                    class: "mt-1 w-full rounded-md border border-gray-300 p-2 text-sm",
                    rows: "3",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                label { class: "text-sm font-medium", "Default Response" }
                textarea {
                    class: "mt-1 w-full rounded-md border border-gray-300 p-2 text-sm",
                    rows: "3",
                    placeholder: "I'm sorry, I didn't understand that. Could you please rephrase your question?",
                    value: "{fallback}",
                    oninput: move |evt| fallback.set(evt.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> ResponseBook {
        ResponseBook::new(sample_bot_responses())
    }

    fn ids(book: &ResponseBook) -> Vec<String> {
        book.responses().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn editing_existing_response_replaces_in_place() {
        let mut book = book();
        assert!(book.begin_edit("2"));
        if let Some(draft) = book.draft_mut() {
            draft.response = "Open every day.".into();
        }
        assert_eq!(book.save().as_deref(), Some("2"));
        assert_eq!(ids(&book), ["1", "2", "3", "4"]);
        assert_eq!(book.responses()[1].response, "Open every day.");
        assert_eq!(book.responses()[1].category, "hours");
        assert!(book.draft().is_none());
    }

    #[test]
    fn saving_new_draft_appends_with_fresh_id() {
        let mut book = book();
        book.begin_new();
        if let Some(draft) = book.draft_mut() {
            draft.category = "refunds".into();
            draft.trigger = "refund, money back".into();
            draft.response = "Refunds take five days.".into();
        }
        let id = book.save().unwrap_or_default();
        assert_eq!(book.responses().len(), 5);
        let last = &book.responses()[4];
        assert_eq!(last.id, id);
        assert!(!["1", "2", "3", "4"].contains(&id.as_str()));
        assert_eq!(last.category, "refunds");
    }

    #[test]
    fn save_without_draft_is_a_no_op() {
        let mut book = book();
        assert_eq!(book.save(), None);
        assert_eq!(book.responses().len(), 4);
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut book = book();
        book.begin_edit("1");
        if let Some(draft) = book.draft_mut() {
            draft.response = "changed".into();
        }
        book.cancel();
        assert!(book.draft().is_none());
        assert_eq!(book.responses()[0].response, "Hello! How can I help you today?");
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut book = book();
        assert!(book.delete("3"));
        assert_eq!(ids(&book), ["1", "2", "4"]);
        assert!(!book.delete("3"));
    }

    #[test]
    fn deleting_the_edited_response_closes_the_panel() {
        let mut book = book();
        book.begin_edit("4");
        book.delete("4");
        assert!(book.draft().is_none());
    }

    #[test]
    fn duplicate_inserts_copy_after_source() {
        let mut book = book();
        let copy = book.duplicate("1").unwrap_or_default();
        assert_eq!(book.responses().len(), 5);
        assert_eq!(book.responses()[1].id, copy);
        assert_ne!(copy, "1");
        assert_eq!(book.responses()[1].response, book.responses()[0].response);
        assert_eq!(book.duplicate("missing"), None);
    }

    #[test]
    fn begin_edit_with_unknown_id_keeps_state() {
        let mut book = book();
        assert!(!book.begin_edit("nope"));
        assert!(book.draft().is_none());
    }
}
