use crate::dom;
use crate::render::{self, CanvasSurface};
use portfolio_core::{Animator, Environment, FieldConfig, Schedule};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Animator,
    pub surface: CanvasSurface,
    /// Handle of the outstanding `requestAnimationFrame`, if any.
    pub pending: Option<i32>,
}

impl FrameContext {
    pub fn frame(&mut self) -> Schedule {
        self.pending = None;
        self.animator.frame(&mut self.surface)
    }
}

/// Drives a [`FrameContext`] from `requestAnimationFrame`, one tick in flight.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let this = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
        };
        let this_tick = this.clone();
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let next = this_tick.ctx.borrow_mut().frame();
            if next == Schedule::NextFrame {
                this_tick.request();
            }
        }) as Box<dyn FnMut()>));
        this
    }

    pub fn start(&self, window: &web::Window, env: Environment) {
        let next = {
            let mut ctx = self.ctx.borrow_mut();
            let viewport = dom::window_viewport(window);
            ctx.surface.resize(viewport);
            let FrameContext {
                animator, surface, ..
            } = &mut *ctx;
            let next = animator.start(viewport, env, surface);
            surface.set_opacity(animator.surface_opacity());
            log::info!(
                "[background] {} nodes, {:?}",
                animator.field().nodes().len(),
                animator.phase()
            );
            next
        };
        if next == Schedule::NextFrame {
            self.request();
        }
    }

    fn request(&self) {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.pending.is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => ctx.pending = Some(id),
                Err(e) => log::error!("[background] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        let pending = self.ctx.borrow_mut().pending.take();
        if let (Some(id), Some(window)) = (pending, web::window()) {
            _ = window.cancel_animation_frame(id);
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        let next = self.ctx.borrow_mut().animator.set_hidden(hidden);
        if hidden {
            self.cancel();
        }
        if next == Schedule::NextFrame {
            self.request();
        }
    }

    pub fn resize(&self, window: &web::Window) {
        let mut ctx = self.ctx.borrow_mut();
        let viewport = dom::window_viewport(window);
        ctx.surface.resize(viewport);
        ctx.animator.resize(viewport);
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.ctx.borrow_mut().animator.pointer_moved(x, y);
    }

    pub fn pointer_left(&self) {
        self.ctx.borrow_mut().animator.pointer_left();
    }
}

/// Create the background canvas, start animating and wire resize/visibility.
pub fn start_background(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<FrameLoop> {
    let config = FieldConfig::default();
    config.validate()?;

    let canvas = render::background_canvas(document)?;
    let surface = CanvasSurface::new(canvas)?;
    let frame_loop = FrameLoop::new(FrameContext {
        animator: Animator::with_config(config),
        surface,
        pending: None,
    });

    let env = Environment {
        reduced_motion: dom::prefers_reduced_motion(),
        hidden: document.hidden(),
    };
    frame_loop.start(window, env);

    let resize_loop = frame_loop.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        if let Some(w) = web::window() {
            resize_loop.resize(&w);
        }
    });

    let visibility_loop = frame_loop.clone();
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        visibility_loop.set_hidden(doc.hidden());
    });

    Ok(frame_loop)
}
