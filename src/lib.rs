#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod overlay;
mod render;
mod reveal;
mod scroll;
mod storage;
mod theme;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::listen(&doc, "DOMContentLoaded", move |_: web::Event| {
            _ = resolve.call0(&JsValue::UNDEFINED);
        });
    });
    _ = JsFuture::from(promise).await;
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await;

    theme::init(&document);

    let navigation = nav::Navigation::find(&document);
    if let Some(nav) = &navigation {
        nav.wire(&document);
    }
    scroll::wire_anchors(&document, navigation.clone());
    scroll::wire_header(&window, &document);
    scroll::handle_initial_hash(&window, &document);
    events::wire_global_keydown(&document, navigation);

    // The page stays usable without its background.
    match frame::start_background(&window, &document) {
        Ok(frame_loop) => events::wire_pointer(&window, &frame_loop),
        Err(e) => log::warn!("[bg] disabled: {:?}", e),
    }

    reveal::wait_for_fonts(&document).await;
    reveal::observe(&document);
    log::info!("portfolio ready");
    Ok(())
}
