use crate::constants::{ANCHOR_SELECTOR, CLASS_SCROLLED, HEADER_SELECTOR};
use crate::dom;
use crate::nav::Navigation;
use portfolio_core::constants::INITIAL_HASH_DELAY_MS;
use portfolio_core::{anchor_target, header_is_scrolled, target_offset, NavEvent, ScrollMode, ScrollTicker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn header_height(document: &web::Document) -> Option<f64> {
    dom::query(document, HEADER_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
}

/// Scroll so `target` sits just below the fixed header.
pub fn scroll_to_element(window: &web::Window, document: &web::Document, target: &web::Element) {
    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_y;
    let offset = target_offset(top, header_height(document));

    let options = web::ScrollToOptions::new();
    options.set_top(offset);
    options.set_behavior(match ScrollMode::for_motion(dom::prefers_reduced_motion()) {
        ScrollMode::Smooth => web::ScrollBehavior::Smooth,
        ScrollMode::Instant => web::ScrollBehavior::Instant,
    });
    window.scroll_to_with_scroll_to_options(&options);
}

fn focus_without_scroll(target: &web::Element) {
    _ = target.set_attribute("tabindex", "-1");
    if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
        let options = web::FocusOptions::new();
        options.set_prevent_scroll(true);
        _ = el.focus_with_options(&options);
    }
}

pub fn wire_anchors(document: &web::Document, nav: Option<Navigation>) {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    log::debug!("[scroll] {} in-page links", anchors.len());
    for anchor in anchors {
        let link = anchor.clone();
        let nav = nav.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            ev.prevent_default();
            scroll_to_element(&window, &document, &target);
            if let Ok(history) = window.history() {
                _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
            if let Some(nav) = &nav {
                nav.dispatch(NavEvent::LinkActivated);
            }
            focus_without_scroll(&target);
        });
    }
}

/// Toggle the header's scrolled style, at most once per animation frame.
pub fn wire_header(window: &web::Window, document: &web::Document) {
    let Some(header) = dom::query(document, HEADER_SELECTOR) else {
        return;
    };
    update_header(window, &header);

    let ticker = Rc::new(RefCell::new(ScrollTicker::default()));
    dom::listen(window, "scroll", move |_: web::Event| {
        if !ticker.borrow_mut().request() {
            return;
        }
        let Some(window) = web::window() else {
            ticker.borrow_mut().complete();
            return;
        };
        let header = header.clone();
        let ticker_done = ticker.clone();
        let update = Closure::once_into_js(move || {
            if let Some(w) = web::window() {
                update_header(&w, &header);
            }
            ticker_done.borrow_mut().complete();
        });
        if window
            .request_animation_frame(update.unchecked_ref())
            .is_err()
        {
            ticker.borrow_mut().complete();
        }
    });
}

fn update_header(window: &web::Window, header: &web::Element) {
    let y = window.scroll_y().unwrap_or(0.0);
    dom::set_class(header, CLASS_SCROLLED, header_is_scrolled(y));
}

/// A URL that arrives with `#section` scrolls there once the page settles.
pub fn handle_initial_hash(window: &web::Window, document: &web::Document) {
    let Ok(hash) = window.location().hash() else {
        return;
    };
    let Some(id) = anchor_target(&hash) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    log::debug!("[scroll] initial hash #{}", id);
    let doc = document.clone();
    dom::after(INITIAL_HASH_DELAY_MS, move || {
        if let Some(w) = web::window() {
            scroll_to_element(&w, &doc, &target);
        }
    });
}

#[wasm_bindgen(js_name = smoothScrollTo)]
pub fn smooth_scroll_to(id: &str) -> bool {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return false;
    };
    match document.get_element_by_id(id) {
        Some(target) => {
            scroll_to_element(&window, &document, &target);
            true
        }
        None => false,
    }
}
