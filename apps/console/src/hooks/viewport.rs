//! Mobile viewport detection backed by `window.matchMedia`.

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

use crate::state::AppActions;

#[cfg(target_arch = "wasm32")]
use {
    crate::error::{describe_js, UiError},
    std::rc::Rc,
    tracing::warn,
    wasm_bindgen::{closure::Closure, JsCast},
    web_sys::{MediaQueryList, MediaQueryListEvent},
};

/// Keeps `is_mobile` in sync with the configured breakpoint for as long as the
/// calling component stays mounted.
#[cfg(target_arch = "wasm32")]
pub fn use_viewport_watcher(actions: AppActions) {
    let watcher = use_hook(move || match MediaWatcher::attach(actions) {
        Ok(watcher) => Some(Rc::new(watcher)),
        Err(err) => {
            warn!(%err, "viewport watcher unavailable, assuming desktop");
            None
        }
    });

    // initial value is applied after the first render, not during it
    use_effect(move || {
        if let Some(watcher) = watcher.as_ref() {
            actions.set_mobile(watcher.query.matches());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_viewport_watcher(_actions: AppActions) {}

#[cfg(target_arch = "wasm32")]
struct MediaWatcher {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl MediaWatcher {
    fn attach(actions: AppActions) -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
        let media = crate::config::current().mobile_media_query();
        let query = window
            .match_media(&media)
            .map_err(|err| UiError::MediaQuery(describe_js(&err)))?
            .ok_or_else(|| UiError::MediaQuery(format!("no match for {media}")))?;

        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| actions.set_mobile(event.matches()),
        );
        query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|err| UiError::MediaQuery(describe_js(&err)))?;

        Ok(Self { query, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for MediaWatcher {
    fn drop(&mut self) {
        if let Err(err) = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
        {
            warn!(error = %describe_js(&err), "failed to detach viewport listener");
        }
    }
}
