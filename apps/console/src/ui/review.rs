//! Human review of low-confidence answers.

use dioxus::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::fixtures::review::sample_review_queue;
use crate::models::{ReviewItem, TrustTone};
use crate::state::{use_app_actions, ToastKind};
use crate::ui::icons::{Icon, IconName};
use crate::ui::primitives::{Badge, Card, CardHeader, PageHeader};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    EditedAndApproved,
    Rejected,
}

impl Verdict {
    fn toast_title(self) -> &'static str {
        match self {
            Self::Approved => "Answer approved",
            Self::EditedAndApproved => "Edited answer approved",
            Self::Rejected => "Answer rejected",
        }
    }
}

/// Outcome of one review action. Only `EditedAndApproved` carries the text.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ReviewDecision {
    pub item_id: String,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Which queue item is open in the detail panel and the reviewer's working
/// copy of its answer. The queue itself is never modified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewSelection {
    selected: Option<ReviewItem>,
    edited_answer: String,
}

impl ReviewSelection {
    pub fn selected(&self) -> Option<&ReviewItem> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|item| item.id == id)
    }

    pub fn edited_answer(&self) -> &str {
        &self.edited_answer
    }

    /// Opens `item`, replacing any unsaved edits with its original answer.
    pub fn select(&mut self, item: &ReviewItem) {
        self.edited_answer = item.bot_answer.clone();
        self.selected = Some(item.clone());
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        if self.selected.is_some() {
            self.edited_answer = text.into();
        }
    }

    pub fn approve(&mut self) -> Option<ReviewDecision> {
        self.decide(Verdict::Approved)
    }

    pub fn save_and_approve(&mut self) -> Option<ReviewDecision> {
        self.decide(Verdict::EditedAndApproved)
    }

    pub fn reject(&mut self) -> Option<ReviewDecision> {
        self.decide(Verdict::Rejected)
    }

    fn decide(&mut self, verdict: Verdict) -> Option<ReviewDecision> {
        let item = self.selected.take()?;
        let edited = std::mem::take(&mut self.edited_answer);
        Some(ReviewDecision {
            item_id: item.id,
            verdict,
            answer: (verdict == Verdict::EditedAndApproved).then_some(edited),
        })
    }
}

fn tone_icon(tone: TrustTone) -> IconName {
    match tone {
        TrustTone::High => IconName::CheckCircle,
        TrustTone::Medium => IconName::AlertTriangle,
        TrustTone::Low => IconName::X,
    }
}

#[component]
pub fn AnswerReview() -> Element {
    let actions = use_app_actions();
    let mut selection = use_signal(ReviewSelection::default);
    let queue = sample_review_queue();

    let record = move |decision: Option<ReviewDecision>| {
        let Some(decision) = decision else {
            return;
        };
        match serde_json::to_string(&decision) {
            Ok(json) => info!(decision = %json, "review decision recorded"),
            Err(err) => warn!(?err, item = %decision.item_id, "failed to encode review decision"),
        }
        actions.notify(
            ToastKind::Success,
            decision.verdict.toast_title(),
            format!("Queue item #{}", decision.item_id),
        );
    };

    let stats = [
        ("Pending Review", "12", "text-orange-600", IconName::Clock, "text-orange-500"),
        ("Approved Today", "8", "text-green-600", IconName::CheckCircle, "text-green-500"),
        ("Avg Trust Score", "72%", "text-blue-600", IconName::AlertTriangle, "text-blue-500"),
        ("Auto-Approved", "156", "text-gray-600", IconName::MessageSquare, "text-gray-500"),
    ];

    let current = selection.read().selected().cloned();
    let edited = selection.read().edited_answer().to_string();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "Answer Review", subtitle: "Review flagged bot responses to ensure accuracy and trust" }

            div { class: "grid grid-cols-1 gap-4 md:grid-cols-4",
                for (label, value, value_class, icon, icon_class) in stats {
                    Card { key: "{label}", class: "p-4",
                        div { class: "flex items-center justify-between",
                            div {
                                p { class: "text-sm text-gray-500", "{label}" }
                                p { class: "text-2xl font-bold {value_class}", "{value}" }
                            }
                            Icon { name: icon, class: format!("h-8 w-8 {icon_class}") }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                Card {
                    CardHeader {
                        title: "Review Queue",
                        description: "Answers flagged for human review due to low confidence scores",
                    }
                    div { class: "space-y-3 p-5",
                        for item in queue {
                            QueueEntry {
                                key: "{item.id}",
                                active: selection.read().is_selected(&item.id),
                                item: item.clone(),
                                on_select: move |item: ReviewItem| selection.write().select(&item),
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        title: "Detailed Review",
                        description: if current.is_some() { "Review and edit the selected answer" } else { "Select an item from the queue to review" },
                    }
                    div { class: "p-5",
                        if let Some(item) = current {
                            div { class: "space-y-6",
                                div {
                                    p { class: "text-sm font-medium text-gray-700", "User's Question" }
                                    div { class: "mt-1 rounded-lg bg-gray-50 p-3",
                                        p { class: "text-sm", "{item.user_question}" }
                                    }
                                }
                                div {
                                    p { class: "text-sm font-medium text-gray-700", "Trust Assessment" }
                                    div { class: "mt-1 space-y-2",
                                        div { class: format!("flex items-center gap-2 rounded-lg px-3 py-2 {}", item.tone().pill_class()),
                                            Icon { name: tone_icon(item.tone()) }
                                            span { class: "font-medium", "{item.trust_score}% Trusted" }
                                        }
                                        div { class: "space-y-1",
                                            for reason in item.reasoning.iter() {
                                                div { key: "{reason}", class: "flex items-center gap-2",
                                                    div { class: "h-1.5 w-1.5 rounded-full bg-gray-400" }
                                                    span { class: "text-sm text-gray-600", "{reason}" }
                                                }
                                            }
                                        }
                                    }
                                }
                                div {
                                    p { class: "text-sm font-medium text-gray-700", "Source Information" }
                                    div { class: "mt-1 rounded-lg border-l-4 border-blue-400 bg-blue-50 p-3",
                                        p { class: "text-sm text-blue-800", "{item.source_snippet}" }
                                    }
                                }
                                div {
                                    label { class: "text-sm font-medium text-gray-700", "Bot's Answer" }
                                    textarea {
                                        class: "mt-1 w-full rounded-md border border-gray-300 p-2 text-sm",
                                        rows: "4",
                                        value: "{edited}",
                                        oninput: move |evt| selection.write().edit(evt.value()),
                                    }
                                }
                                div { class: "flex flex-wrap gap-3",
                                    button {
                                        class: "flex items-center gap-2 rounded-md bg-green-600 px-4 py-2 text-sm font-medium text-white hover:bg-green-700",
                                        onclick: move |_| {
                                            let decision = selection.write().approve();
                                            record(decision);
                                        },
                                        Icon { name: IconName::CheckCircle }
                                        "Approve"
                                    }
                                    button {
                                        class: "flex items-center gap-2 rounded-md border border-gray-300 px-4 py-2 text-sm font-medium hover:bg-gray-50",
                                        onclick: move |_| {
                                            let decision = selection.write().save_and_approve();
                                            record(decision);
                                        },
                                        Icon { name: IconName::Edit }
                                        "Save & Approve"
                                    }
                                    button {
                                        class: "flex items-center gap-2 rounded-md border border-red-200 px-4 py-2 text-sm font-medium text-red-600 hover:bg-red-50",
                                        onclick: move |_| {
                                            let decision = selection.write().reject();
                                            record(decision);
                                        },
                                        Icon { name: IconName::X }
                                        "Reject"
                                    }
                                }
                                div { class: "border-t border-gray-200 pt-4",
                                    p { class: "text-sm font-medium text-gray-700", "Conversation Context" }
                                    div { class: "mt-2 flex flex-wrap items-center gap-4 text-sm text-gray-500",
                                        span { class: "flex items-center gap-1",
                                            Icon { name: IconName::User }
                                            "ID: {item.conversation_id}"
                                        }
                                        span { class: "flex items-center gap-1",
                                            Icon { name: IconName::MessageSquare }
                                            "Channel: {item.channel}"
                                        }
                                        span { class: "flex items-center gap-1",
                                            Icon { name: IconName::Clock }
                                            "{item.timestamp}"
                                        }
                                    }
                                }
                            }
                        } else {
                            div { class: "py-12 text-center text-gray-500",
                                Icon { name: IconName::AlertTriangle, class: "mx-auto mb-4 h-12 w-12 text-gray-300" }
                                p { "Select an item from the review queue to begin" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QueueEntry(item: ReviewItem, active: bool, on_select: EventHandler<ReviewItem>) -> Element {
    let frame = if active {
        "border-blue-500 bg-blue-50"
    } else {
        "border-gray-200 hover:border-gray-300"
    };
    let tone = item.tone();
    let pill = tone.pill_class();
    let clicked = item.clone();

    rsx! {
        div {
            class: "cursor-pointer rounded-lg border p-4 transition-colors {frame}",
            onclick: move |_| on_select.call(clicked.clone()),
            div { class: "mb-2 flex items-start justify-between",
                div { class: "flex items-center gap-2",
                    Badge { class: "border border-gray-300 text-gray-700", label: item.channel.clone() }
                    span { class: "text-xs text-gray-500", "{item.timestamp}" }
                }
                div { class: "flex items-center gap-1 rounded-full px-2 py-1 text-xs font-medium {pill}",
                    Icon { name: tone_icon(tone) }
                    span { "{item.trust_score}%" }
                }
            }
            div { class: "space-y-2",
                p { class: "text-sm font-medium text-gray-900", "Q: {item.user_question}" }
                p { class: "text-sm text-gray-600", "A: {item.bot_answer}" }
            }
            div { class: "mt-2 flex flex-wrap gap-1",
                for reason in item.reasoning.iter() {
                    Badge { key: "{reason}", class: "bg-gray-100 text-gray-800", label: reason.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> Vec<ReviewItem> {
        sample_review_queue()
    }

    #[test]
    fn selecting_populates_edited_answer() {
        let queue = queue();
        let mut selection = ReviewSelection::default();
        selection.select(&queue[0]);
        assert!(selection.is_selected("1"));
        assert_eq!(selection.edited_answer(), queue[0].bot_answer);
    }

    #[test]
    fn selecting_another_item_discards_edits() {
        let queue = queue();
        let mut selection = ReviewSelection::default();
        selection.select(&queue[0]);
        selection.edit("Only rice pasta on weekdays.");
        selection.select(&queue[1]);
        assert_eq!(selection.edited_answer(), queue[1].bot_answer);
        assert!(!selection.is_selected("1"));
    }

    #[test]
    fn editing_without_selection_is_ignored() {
        let mut selection = ReviewSelection::default();
        selection.edit("stray");
        assert_eq!(selection.edited_answer(), "");
    }

    #[test]
    fn save_and_approve_carries_edited_text_and_clears() {
        let queue = queue();
        let mut selection = ReviewSelection::default();
        selection.select(&queue[1]);
        selection.edit("Sunday delivery runs 11 AM to 9 PM.");
        let decision = selection.save_and_approve();
        assert_eq!(
            decision,
            Some(ReviewDecision {
                item_id: "2".into(),
                verdict: Verdict::EditedAndApproved,
                answer: Some("Sunday delivery runs 11 AM to 9 PM.".into()),
            })
        );
        assert!(selection.selected().is_none());
    }

    #[test]
    fn approve_and_reject_omit_answer() {
        let queue = queue();
        let mut selection = ReviewSelection::default();
        selection.select(&queue[2]);
        let approved = selection.approve().map(|d| (d.verdict, d.answer));
        assert_eq!(approved, Some((Verdict::Approved, None)));

        selection.select(&queue[0]);
        let rejected = selection.reject().map(|d| d.verdict);
        assert_eq!(rejected, Some(Verdict::Rejected));
    }

    #[test]
    fn actions_without_selection_do_nothing() {
        let mut selection = ReviewSelection::default();
        assert_eq!(selection.approve(), None);
        assert_eq!(selection.reject(), None);
    }

    #[test]
    fn decisions_do_not_touch_the_queue() {
        let before = queue();
        let mut selection = ReviewSelection::default();
        selection.select(&before[0]);
        selection.edit("rewritten");
        selection.save_and_approve();
        assert_eq!(queue(), before);
    }

    #[test]
    fn decision_json_omits_missing_answer() {
        let json = serde_json::to_string(&ReviewDecision {
            item_id: "3".into(),
            verdict: Verdict::Rejected,
            answer: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"item_id":"3","verdict":"rejected"}"#);
    }
}
