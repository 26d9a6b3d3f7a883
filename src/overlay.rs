use crate::constants::{CLASS_ACTIVE, THEME_OVERLAY_SELECTOR};
use crate::dom;
use web_sys as web;

#[inline]
pub fn find(document: &web::Document) -> Option<web::Element> {
    dom::query(document, THEME_OVERLAY_SELECTOR)
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().add_1(CLASS_ACTIVE);
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().remove_1(CLASS_ACTIVE);
}

/// Cover the page, run `swap` once covered, then uncover.
pub fn fade_through(
    overlay: web::Element,
    swap_after_ms: i32,
    hide_after_ms: i32,
    swap: impl FnOnce() + 'static,
) {
    show(&overlay);
    dom::after(swap_after_ms, move || {
        swap();
        dom::after(hide_after_ms, move || hide(&overlay));
    });
}
