use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};

/// Vertical offset past which the header switches to its scrolled state.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of an element that must enter the viewport before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Elements picked up by the reveal observer, gathered once after first render.
const REVEAL_TARGETS: &str = ".fade-up, .service-card, .story-card";

pub fn header_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

/// Extracts the element id from a same-document fragment link.
/// A bare "#" and non-fragment hrefs yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Reveals marked elements the first time at least 15% of them enters the
/// viewport, then stops watching them. Elements never re-hide. Returns the
/// cleanup for the owning effect.
pub fn mount_reveal_observer() -> impl FnOnce() {
    let document = web_sys::window().unwrap().document().unwrap();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .unwrap();

    if let Ok(targets) = document.query_selector_all(REVEAL_TARGETS) {
        for i in 0..targets.length() {
            if let Some(node) = targets.item(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    observer.observe(&element);
                }
            }
        }
    }

    let callback = callback; // Keep the closure alive until cleanup
    move || {
        observer.disconnect();
        drop(callback);
    }
}

/// Intercepts clicks on same-document fragment links anywhere in the page and
/// scrolls the target section into view with smooth motion. Missing targets
/// are ignored. Returns the cleanup for the owning effect.
pub fn mount_anchor_delegate() -> impl FnOnce() {
    let document = web_sys::window().unwrap().document().unwrap();
    let document_clone = document.clone();

    let click_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
        let anchor = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a[href]").ok())
            .flatten();

        if let Some(anchor) = anchor {
            if let Some(href) = anchor.get_attribute("href") {
                if !href.starts_with('#') {
                    return;
                }
                event.prevent_default();
                if let Some(id) = anchor_target(&href) {
                    if let Some(section) = document_clone.get_element_by_id(id) {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        section.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
            }
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    document
        .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
        .unwrap();

    move || {
        document
            .remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
            .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_scrolled_only_past_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.1));
        assert!(header_scrolled(800.0));
    }

    #[test]
    fn anchor_target_parses_fragments() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#contact"), Some("contact"));
    }

    #[test]
    fn anchor_target_rejects_bare_hash_and_routes() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/terms"), None);
        assert_eq!(anchor_target("https://wa.me/123"), None);
        assert_eq!(anchor_target(""), None);
    }
}
