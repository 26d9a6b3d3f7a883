use crate::constants::{
    THEME_ATTRIBUTE, THEME_BUTTON_SELECTOR, THEME_BUTTON_TEXT_SELECTOR, THEME_FOOTER_SELECTOR,
};
use crate::dom;
use crate::overlay;
use crate::storage::LocalStore;
use portfolio_core::constants::THEME_FADE_MS;
use portfolio_core::{Theme, ThemeController, Transition, THEMES};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    // Page scripts reach the switcher through the exported functions below.
    static CONTROLLER: RefCell<Option<ThemeController<LocalStore>>> = const { RefCell::new(None) };
}

fn with_controller<R>(f: impl FnOnce(&mut ThemeController<LocalStore>) -> R) -> Option<R> {
    CONTROLLER.with(|c| c.borrow_mut().as_mut().map(f))
}

/// Apply the saved theme without animation and wire the switcher buttons.
pub fn init(document: &web::Document) {
    let mut controller = ThemeController::new(LocalStore::open());
    let theme = controller.load();
    let label = controller.button_label();
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
    present(document, theme, &label, false);
    log::info!("[theme] {}", theme.id);

    for button in dom::query_all(document, THEME_BUTTON_SELECTOR) {
        dom::listen(&button, "click", |ev: web::MouseEvent| {
            ev.prevent_default();
            cycle();
        });
    }
}

/// Advance to the next theme; returns its id.
pub fn cycle() -> Option<&'static str> {
    let (theme, label) = with_controller(|c| (c.next(), c.button_label()))?;
    if let Some(document) = dom::window_document() {
        present(&document, theme, &label, true);
    }
    Some(theme.id)
}

fn present(document: &web::Document, theme: Theme, label: &str, animate: bool) {
    let overlay_el = overlay::find(document);
    let plan = Transition::plan(
        animate,
        dom::prefers_reduced_motion(),
        overlay_el.is_some(),
        THEME_FADE_MS,
    );
    match (plan, overlay_el) {
        (
            Transition::Overlay {
                swap_after_ms,
                hide_after_ms,
            },
            Some(el),
        ) => {
            let doc = document.clone();
            overlay::fade_through(el, swap_after_ms, hide_after_ms, move || {
                set_root_theme(&doc, theme.id)
            });
        }
        _ => set_root_theme(document, theme.id),
    }
    update_labels(document, theme, label);
}

fn set_root_theme(document: &web::Document, id: &str) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTRIBUTE, id);
    }
}

fn update_labels(document: &web::Document, theme: Theme, label: &str) {
    for button in dom::query_all(document, THEME_BUTTON_SELECTOR) {
        if let Ok(Some(text)) = button.query_selector(THEME_BUTTON_TEXT_SELECTOR) {
            text.set_text_content(Some(label));
        }
    }
    if let Some(footer) = dom::query(document, THEME_FOOTER_SELECTOR) {
        footer.set_text_content(Some(theme.name));
    }
}

#[wasm_bindgen(js_name = nextTheme)]
pub fn next_theme() -> Option<String> {
    cycle().map(str::to_string)
}

#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(id: &str) -> Option<String> {
    let (theme, label) = with_controller(|c| (c.set(id), c.button_label()))?;
    if let Some(document) = dom::window_document() {
        present(&document, theme, &label, true);
    }
    Some(theme.id.to_string())
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    with_controller(|c| c.current().id.to_string())
}

#[wasm_bindgen(js_name = themeIds)]
pub fn theme_ids() -> js_sys::Array {
    THEMES.iter().map(|t| JsValue::from_str(t.id)).collect()
}
