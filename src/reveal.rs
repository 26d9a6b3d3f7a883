use crate::constants::{CLASS_VISIBLE, REVEAL_SELECTOR};
use crate::dom;
use portfolio_core::constants::REVEAL_FALLBACK_DELAY_MS;
use portfolio_core::{RevealOptions, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve once web fonts have loaded, or after a short delay when the
/// browser has no font loading API.
pub async fn wait_for_fonts(document: &web::Document) {
    let ready = match js_sys::Reflect::has(document, &JsValue::from_str("fonts")) {
        Ok(true) => document.fonts().ready().ok(),
        _ => None,
    };
    let promise = ready.unwrap_or_else(|| {
        js_sys::Promise::new(&mut |resolve, _reject| {
            dom::after(REVEAL_FALLBACK_DELAY_MS, move || {
                _ = resolve.call0(&JsValue::UNDEFINED);
            });
        })
    });
    if let Err(e) = JsFuture::from(promise).await {
        log::debug!("[reveal] fonts not ready: {:?}", e);
    }
}

fn reveal(el: &web::Element) {
    _ = el.class_list().add_1(CLASS_VISIBLE);
}

/// Reveal `.anim-fade-up` blocks the first time each scrolls into view.
pub fn observe(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));

    let targets = elements.clone();
    let seen = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let el = entry.target();
                let Some(index) = targets.iter().position(|t| *t == el) else {
                    continue;
                };
                if seen.borrow_mut().observe(index, entry.is_intersecting()) {
                    reveal(&el);
                    observer.unobserve(&el);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let defaults = RevealOptions::default();
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(defaults.threshold));
    options.set_root_margin(defaults.root_margin);

    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
            callback.forget();
            log::debug!("[reveal] observing {} blocks", elements.len());
        }
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            let shown = tracker.borrow_mut().reveal_all();
            elements.iter().for_each(reveal);
            log::debug!("[reveal] revealed {} blocks", shown);
        }
    }
}
