use crate::dom;
use crate::input::{key_action, KeyAction};
use crate::nav::Navigation;
use crate::theme;
use portfolio_core::NavEvent;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, nav: Option<&Navigation>) {
    let key = ev.key();
    let tag = dom::event_target_tag(ev);
    match key_action(&key, tag.as_deref()) {
        Some(KeyAction::CloseMenu) => {
            if let Some(nav) = nav {
                nav.dispatch(NavEvent::Key(&key));
            }
        }
        Some(KeyAction::CycleTheme) => {
            let current = theme::cycle();
            log::info!("[keys] theme -> {}", current.unwrap_or("?"));
        }
        None => {}
    }
}

pub fn wire_global_keydown(document: &web::Document, nav: Option<Navigation>) {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, nav.as_ref());
    });
}
