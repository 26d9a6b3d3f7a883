use crate::constants::{CLASS_ACTIVE, CLASS_OPEN, NAV_LINK_SELECTOR, NAV_SELECTOR, NAV_TOGGLE_SELECTOR};
use crate::dom;
use portfolio_core::{NavEvent, NavigationController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile drawer: controller state plus the elements it drives.
#[derive(Clone)]
pub struct Navigation {
    state: Rc<RefCell<NavigationController>>,
    nav: web::Element,
    toggle: web::Element,
    body: Option<web::HtmlElement>,
}

impl Navigation {
    /// `None` when the page has no drawer; every caller treats that as a no-op.
    pub fn find(document: &web::Document) -> Option<Self> {
        let nav = dom::query(document, NAV_SELECTOR)?;
        let toggle = dom::query(document, NAV_TOGGLE_SELECTOR)?;
        Some(Self {
            state: Rc::new(RefCell::new(NavigationController::default())),
            nav,
            toggle,
            body: document.body(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn dispatch(&self, event: NavEvent<'_>) {
        let changed = self.state.borrow_mut().handle(event);
        if changed {
            self.sync();
        }
    }

    fn sync(&self) {
        let state = *self.state.borrow();
        let open = state.is_open();
        dom::set_class(&self.nav, CLASS_OPEN, open);
        dom::set_class(&self.toggle, CLASS_ACTIVE, open);
        _ = self
            .toggle
            .set_attribute("aria-expanded", state.aria_expanded());
        if let Some(body) = &self.body {
            _ = body.style().set_property("overflow", state.body_overflow());
        }
        if open {
            self.focus_first_link();
        }
        log::debug!("[nav] open={}", open);
    }

    fn focus_first_link(&self) {
        let first = dom::query_all_in(&self.nav, NAV_LINK_SELECTOR)
            .into_iter()
            .next()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(link) = first {
            _ = link.focus();
        }
    }

    pub fn wire(&self, document: &web::Document) {
        let on_toggle = self.clone();
        dom::listen(&self.toggle, "click", move |_: web::MouseEvent| {
            on_toggle.dispatch(NavEvent::Toggle);
        });

        for link in dom::query_all_in(&self.nav, NAV_LINK_SELECTOR) {
            let on_link = self.clone();
            dom::listen(&link, "click", move |_: web::MouseEvent| {
                on_link.dispatch(NavEvent::LinkActivated);
            });
        }

        let on_outside = self.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            if !on_outside.is_open() {
                return;
            }
            let in_nav = dom::event_within(&ev, &on_outside.nav);
            let in_toggle = dom::event_within(&ev, &on_outside.toggle);
            on_outside.dispatch(NavEvent::Click { in_nav, in_toggle });
        });
    }
}
