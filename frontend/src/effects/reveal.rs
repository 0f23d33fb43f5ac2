use yew::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -8% 0px";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches every element matching a selector and calls `on_visible` the
/// first time each one intersects. The element is unobserved right after,
/// so the callback fires at most once per element.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl OneShotObserver {
    pub fn observe_all<F>(selector: &str, threshold: f64, root_margin: &str, on_visible: F) -> Option<Self>
    where
        F: Fn(Element) + 'static,
    {
        let document = web_sys::window()?.document()?;

        let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };

        let nodes = document.query_selector_all(selector).ok()?;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }

        Some(OneShotObserver { observer, _callback: callback })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Adds `active` to each `.reveal` element once it scrolls into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let observer = OneShotObserver::observe_all(".reveal", REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, |element| {
                let _ = element.class_list().add_1("active");
            });
            move || drop(observer)
        },
        (),
    );
}
