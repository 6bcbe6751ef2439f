use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` together with the closure it calls.
/// Dropping it disconnects the observer.
struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// Calls `on_visible` the first time `element` is at least `threshold`
    /// on screen, then stops observing.
    fn observe_once(
        element: &Element,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let seen = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting() && entry.intersection_ratio() >= threshold);
                if seen {
                    observer.disconnect();
                    on_visible();
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Becomes `true` once the node behind `node` has scrolled into view and
/// stays `true` for the rest of the component's life.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let setter = in_view.clone();
                    match VisibilityObserver::observe_once(&element, threshold, move || {
                        setter.set(true)
                    }) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            log::warn!(
                                "IntersectionObserver unavailable, showing section immediately: {:?}",
                                err
                            );
                            in_view.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            node,
        );
    }
    *in_view
}
