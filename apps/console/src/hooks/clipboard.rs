use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::error::UiError;
use crate::state::{AppActions, ToastKind};

#[cfg(target_arch = "wasm32")]
pub async fn write_text(text: &str) -> Result<(), UiError> {
    use crate::error::describe_js;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| UiError::Clipboard(describe_js(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn write_text(_text: &str) -> Result<(), UiError> {
    Err(UiError::WindowUnavailable)
}

/// Copies `text` and reports the outcome as a toast. The copy runs on the root
/// scope, so the feedback still arrives if the calling dialog closes first.
pub fn copy_with_feedback(actions: AppActions, label: &'static str, text: String) {
    let task = spawn_forever(async move {
        match write_text(&text).await {
            Ok(()) => {
                info!(label, "copied to clipboard");
                actions.notify(ToastKind::Success, "Copied", format!("{label} copied to clipboard"));
            }
            Err(err) => {
                error!(%err, label, "clipboard copy failed");
                actions.notify(ToastKind::Error, "Copy failed", err.to_string());
            }
        }
    });
    if task.is_none() {
        warn!(label, "clipboard copy not started, no runtime");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::state::{use_app_actions, AppSignal, AppState};

    #[derive(Clone, Default)]
    struct Harness {
        dialog_open: Rc<Cell<bool>>,
        state: Rc<Cell<Option<AppSignal>>>,
    }

    impl PartialEq for Harness {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.dialog_open, &other.dialog_open)
        }
    }

    fn copy_shell(harness: Harness) -> Element {
        let state = use_signal(AppState::default);
        use_context_provider(|| state);
        harness.state.set(Some(state));
        let dialog_open = harness.dialog_open.get();

        rsx! {
            if dialog_open {
                CopyingDialog {}
            }
        }
    }

    #[component]
    fn CopyingDialog() -> Element {
        let actions = use_app_actions();
        use_hook(|| copy_with_feedback(actions, "Webhook URL", "https://example.com/webhook".into()));
        rsx! { p { "connect" } }
    }

    #[test]
    fn copy_feedback_arrives_after_the_dialog_closes() {
        let harness = Harness {
            dialog_open: Rc::new(Cell::new(true)),
            ..Harness::default()
        };
        let mut dom = VirtualDom::new_with_props(copy_shell, harness.clone());
        dom.rebuild_in_place();
        let state = harness.state.get().expect("shell rendered");

        harness.dialog_open.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        dom.process_events();

        let toasts = dom.in_runtime(|| state.peek().toasts.items.clone());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].title, "Copy failed");
    }
}
