use crate::dom;
use crate::frame::FrameLoop;
use web_sys as web;

/// Feed window pointer movement into the background's repulsion.
pub fn wire_pointer(window: &web::Window, frame_loop: &FrameLoop) {
    let moved = frame_loop.clone();
    dom::listen(window, "mousemove", move |ev: web::MouseEvent| {
        moved.pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    });

    // mouseout bubbles from every element; only a null relatedTarget means
    // the pointer actually left the window
    let left = frame_loop.clone();
    dom::listen(window, "mouseout", move |ev: web::MouseEvent| {
        if ev.related_target().is_none() {
            left.pointer_left();
        }
    });
}
