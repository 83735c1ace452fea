use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::prelude::Navigator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::routes::Route;

pub type AppSignal = Signal<AppState>;

/// Anything that can take the browser to a new route.
pub trait RouteSink {
    fn push_route(&self, route: Route);
}

impl RouteSink for Navigator {
    fn push_route(&self, route: Route) {
        if let Some(failure) = self.push(route) {
            warn!(?failure, "navigation rejected");
        }
    }
}

/// Sidebar visibility for the responsive shell.
///
/// On desktop the sidebar is a static column and `sidebar_open` has no visual
/// effect. On mobile it is an off-canvas drawer with an overlay behind it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub is_mobile: bool,
}

impl LayoutState {
    pub fn open_sidebar(&mut self) {
        if !self.sidebar_open {
            debug!("opening sidebar");
            self.sidebar_open = true;
        }
    }

    /// Returns whether the call changed anything.
    pub fn close_sidebar(&mut self) -> bool {
        if self.sidebar_open {
            debug!("closing sidebar");
            self.sidebar_open = false;
            true
        } else {
            false
        }
    }

    pub fn set_mobile(&mut self, is_mobile: bool) {
        if self.is_mobile == is_mobile {
            return;
        }
        debug!(is_mobile, "viewport class changed");
        self.is_mobile = is_mobile;
        if !is_mobile {
            self.sidebar_open = false;
        }
    }

    pub fn select_nav<S: RouteSink + ?Sized>(&mut self, sink: &S, target: Route) {
        sink.push_route(target);
        if self.is_mobile {
            self.close_sidebar();
        }
    }

    pub fn shows_overlay(&self) -> bool {
        self.is_mobile && self.sidebar_open
    }

    pub fn sidebar_class(&self) -> String {
        let placement = match (self.is_mobile, self.sidebar_open) {
            (true, true) => "fixed inset-y-0 left-0 z-50 translate-x-0",
            (true, false) => "fixed inset-y-0 left-0 z-50 -translate-x-full",
            (false, _) => "static translate-x-0",
        };
        format!(
            "w-64 shrink-0 bg-white border-r border-gray-200 flex flex-col transition-transform duration-300 ease-in-out {placement}"
        )
    }

    pub fn content_class(&self) -> &'static str {
        "flex-1 flex flex-col min-w-0"
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Transient action feedback. Oldest toasts fall off once the cap is reached.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastQueue {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            let overflow = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub layout: LayoutState,
    pub toasts: ToastQueue,
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn open_sidebar(&self) {
        let mut state = self.state;
        state.write().layout.open_sidebar();
    }

    pub fn close_sidebar(&self) {
        let mut state = self.state;
        if state.peek().layout.sidebar_open {
            state.write().layout.close_sidebar();
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn set_mobile(&self, is_mobile: bool) {
        let mut state = self.state;
        if state.peek().layout.is_mobile != is_mobile {
            state.write().layout.set_mobile(is_mobile);
        }
    }

    pub fn select_nav<S: RouteSink + ?Sized>(&self, sink: &S, target: Route) {
        let mut state = self.state;
        let mut layout = state.peek().layout;
        layout.select_nav(sink, target);
        if layout != state.peek().layout {
            state.write().layout = layout;
        }
    }

    pub fn notify(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        let mut state = self.state;
        let id = state.write().toasts.push(kind, title, message);
        let delay = toast_delay(crate::config::current().toast_duration);
        self.dismiss_after(id, delay);
    }

    pub fn dismiss_toast(&self, id: u64) {
        let mut state = self.state;
        state.write().toasts.dismiss(id);
    }

    /// Drops toast `id` once `delay` resolves. The timer belongs to the root
    /// scope, so it keeps running after the page that raised the toast unmounts.
    pub fn dismiss_after(&self, id: u64, delay: impl Future<Output = ()> + 'static) -> Option<Task> {
        let actions = *self;
        let task = spawn_forever(async move {
            delay.await;
            actions.dismiss_toast(id);
        });
        if task.is_none() {
            warn!(id, "toast timer not started, no runtime");
        }
        task
    }
}

#[cfg(target_arch = "wasm32")]
fn toast_delay(duration: Duration) -> impl Future<Output = ()> {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis)
}

#[cfg(not(target_arch = "wasm32"))]
fn toast_delay(_duration: Duration) -> impl Future<Output = ()> {
    std::future::pending()
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    let state = use_app_state();
    AppActions { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    #[derive(Default)]
    struct RecordingSink {
        pushed: RefCell<Vec<Route>>,
    }

    impl RouteSink for RecordingSink {
        fn push_route(&self, route: Route) {
            self.pushed.borrow_mut().push(route);
        }
    }

    fn mobile_open() -> LayoutState {
        LayoutState {
            sidebar_open: true,
            is_mobile: true,
        }
    }

    #[test]
    fn sidebar_starts_closed_on_desktop() {
        let layout = LayoutState::default();
        assert!(!layout.sidebar_open);
        assert!(!layout.is_mobile);
        assert!(!layout.shows_overlay());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut layout = LayoutState::default();
        layout.open_sidebar();
        layout.open_sidebar();
        assert!(layout.sidebar_open);
        assert!(layout.close_sidebar());
        assert!(!layout.close_sidebar());
        assert!(!layout.sidebar_open);
    }

    #[test]
    fn final_state_follows_last_call() {
        let mut layout = LayoutState::default();
        let calls = [true, false, false, true, true, false, true];
        for open in calls {
            if open {
                layout.open_sidebar();
            } else {
                layout.close_sidebar();
            }
        }
        assert!(layout.sidebar_open);
    }

    #[test]
    fn overlay_click_closes_exactly_once() {
        let mut layout = mobile_open();
        assert!(layout.shows_overlay());
        assert!(layout.close_sidebar());
        assert!(!layout.shows_overlay());
        assert!(!layout.close_sidebar());
    }

    #[test]
    fn mobile_navigation_pushes_route_and_closes_sidebar() {
        let sink = RecordingSink::default();
        let mut layout = mobile_open();
        layout.select_nav(&sink, Route::Analytics {});
        assert_eq!(*sink.pushed.borrow(), vec![Route::Analytics {}]);
        assert!(!layout.sidebar_open);
    }

    #[test]
    fn desktop_create_bot_leaves_sidebar_untouched() {
        let sink = RecordingSink::default();
        let mut layout = LayoutState {
            sidebar_open: true,
            is_mobile: false,
        };
        let before = layout;
        layout.select_nav(&sink, Route::BotBuilder {});
        assert_eq!(*sink.pushed.borrow(), vec![Route::BotBuilder {}]);
        assert_eq!(layout, before);
    }

    #[test]
    fn leaving_mobile_resets_open_flag() {
        let mut layout = mobile_open();
        layout.set_mobile(false);
        assert!(!layout.sidebar_open);
        layout.set_mobile(true);
        assert!(!layout.shows_overlay());
    }

    #[test]
    fn sidebar_class_covers_all_four_combinations() {
        let class = |sidebar_open, is_mobile| {
            LayoutState {
                sidebar_open,
                is_mobile,
            }
            .sidebar_class()
        };
        assert!(class(true, true).contains(" translate-x-0"));
        assert!(class(false, true).contains("-translate-x-full"));
        assert!(class(true, false).contains("static"));
        assert_eq!(class(true, false), class(false, false));
    }

    #[test]
    fn toast_queue_caps_and_dismisses() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "a", "1");
        for n in 0..3 {
            queue.push(ToastKind::Success, "b", n.to_string());
        }
        assert_eq!(queue.items.len(), 3);
        assert!(queue.items.iter().all(|toast| toast.id != first));

        let last = queue.items.last().map(|toast| toast.id).unwrap_or_default();
        queue.dismiss(last);
        assert_eq!(queue.items.len(), 2);
        queue.dismiss(9_999);
        assert_eq!(queue.items.len(), 2);
    }

    /// Resolves once the shared flag is raised.
    struct Gate(Rc<Cell<bool>>);

    impl Future for Gate {
        type Output = ();

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
            if self.0.get() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        }
    }

    #[derive(Clone, Default)]
    struct Harness {
        page_open: Rc<Cell<bool>>,
        page_dropped: Rc<Cell<bool>>,
        timer_due: Rc<Cell<bool>>,
        state: Rc<Cell<Option<AppSignal>>>,
        timer: Rc<Cell<Option<Task>>>,
    }

    impl PartialEq for Harness {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.page_open, &other.page_open)
        }
    }

    fn toast_shell(harness: Harness) -> Element {
        let state = use_signal(AppState::default);
        use_context_provider(|| state);
        harness.state.set(Some(state));
        let page_open = harness.page_open.get();

        rsx! {
            if page_open {
                ToastingPage { harness: harness.clone() }
            }
        }
    }

    #[component]
    fn ToastingPage(harness: Harness) -> Element {
        let actions = use_app_actions();
        let mut state = use_app_state();
        use_hook(|| {
            let id = state.write().toasts.push(ToastKind::Success, "Approved", "answer 3");
            let timer = actions.dismiss_after(id, Gate(harness.timer_due.clone()));
            harness.timer.set(timer);
        });
        use_drop({
            let dropped = harness.page_dropped.clone();
            move || dropped.set(true)
        });

        rsx! { p { "review" } }
    }

    #[test]
    fn toast_timer_outlives_the_page_that_raised_it() {
        let harness = Harness {
            page_open: Rc::new(Cell::new(true)),
            ..Harness::default()
        };
        let mut dom = VirtualDom::new_with_props(toast_shell, harness.clone());
        dom.rebuild_in_place();

        let state = harness.state.get().expect("shell rendered");
        let timer = harness.timer.get().expect("timer spawned");
        assert_eq!(dom_toasts(&dom, state), 1);

        harness.page_open.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert!(harness.page_dropped.get());
        assert_eq!(dom_toasts(&dom, state), 1);

        harness.timer_due.set(true);
        assert!(dom.in_runtime(|| timer.poll_now()).is_ready());
        assert_eq!(dom_toasts(&dom, state), 0);
    }

    #[test]
    fn viewport_changes_reach_the_shared_layout() {
        let harness = Harness::default();
        let mut dom = VirtualDom::new_with_props(toast_shell, harness.clone());
        dom.rebuild_in_place();
        let state = harness.state.get().expect("shell rendered");

        let layout = dom.in_runtime(|| {
            let actions = AppActions { state };
            actions.set_mobile(true);
            actions.open_sidebar();
            actions.set_mobile(false);
            state.peek().layout
        });
        assert!(!layout.is_mobile);
        assert!(!layout.sidebar_open);
    }

    fn dom_toasts(dom: &VirtualDom, state: AppSignal) -> usize {
        dom.in_runtime(|| state.peek().toasts.items.len())
    }
}
