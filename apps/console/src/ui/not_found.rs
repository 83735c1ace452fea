use dioxus::prelude::*;
use dioxus_router::prelude::Link;
use tracing::warn;

use crate::routes::Route;

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Calls `report` with the requested path on mount and again whenever it changes.
fn use_path_report(segments: &[String], report: impl Fn(&str) + 'static) {
    let segments = segments.to_vec();
    use_effect(use_reactive!(|segments| report(&requested_path(&segments))));
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    use_path_report(&segments, |path| warn!(%path, "no route matched"));

    rsx! {
        div { class: "flex min-h-[60vh] items-center justify-center",
            div { class: "text-center",
                h1 { class: "mb-4 text-4xl font-bold text-gray-900", "404" }
                p { class: "mb-2 text-xl text-gray-600", "Oops! Page not found" }
                p { class: "mb-6 font-mono text-sm text-gray-400", "{path}" }
                Link {
                    class: "text-blue-500 underline hover:text-blue-700",
                    to: Route::Dashboard {},
                    "Return to Home"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Harness {
        segments: Rc<RefCell<Vec<String>>>,
        reported: Rc<RefCell<Vec<String>>>,
    }

    fn reporting_page(harness: Harness) -> Element {
        let segments = harness.segments.borrow().clone();
        let reported = harness.reported.clone();
        use_path_report(&segments, move |path| reported.borrow_mut().push(path.to_string()));
        rsx! { p { "missing" } }
    }

    fn settle(dom: &mut VirtualDom) {
        dom.render_immediate_to_vec();
        for _ in 0..3 {
            dom.process_events();
        }
    }

    #[test]
    fn each_missing_path_is_reported() {
        let harness = Harness::default();
        *harness.segments.borrow_mut() = vec!["old-page".into()];
        let mut dom = VirtualDom::new_with_props(reporting_page, harness.clone());
        dom.rebuild_in_place();
        settle(&mut dom);

        dom.mark_dirty(ScopeId::APP);
        settle(&mut dom);

        *harness.segments.borrow_mut() = vec!["bots".into(), "gone".into()];
        dom.mark_dirty(ScopeId::APP);
        settle(&mut dom);

        assert_eq!(*harness.reported.borrow(), vec!["/old-page", "/bots/gone"]);
    }

    #[test]
    fn path_is_rebuilt_from_segments() {
        assert_eq!(requested_path(&["a".into(), "b".into()]), "/a/b");
        assert_eq!(requested_path(&[]), "/");
    }
}
