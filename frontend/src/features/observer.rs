use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;

/// Owns an `IntersectionObserver` and its callback; disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(root_margin: &str, mut on_entries: F) -> Result<Self, SiteError>
    where
        F: FnMut(Vec<(Element, bool)>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()))
                .collect();
            on_entries(batch, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        #[allow(deprecated)]
        {
            options.root_margin(root_margin);
            options.threshold(&JsValue::from_f64(0.0));
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe_all(&self, elements: &[Element]) {
        for element in elements {
            self.observer.observe(element);
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
