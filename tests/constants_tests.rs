// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selectors_are_class_selectors() {
    for sel in [
        HEADER_SELECTOR,
        NAV_SELECTOR,
        NAV_TOGGLE_SELECTOR,
        THEME_BUTTON_SELECTOR,
        THEME_BUTTON_TEXT_SELECTOR,
        THEME_FOOTER_SELECTOR,
        THEME_OVERLAY_SELECTOR,
        REVEAL_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{} should be a class selector", sel);
        assert!(!sel.contains(' '), "{} should be a single class", sel);
    }
}

#[test]
fn anchor_selector_matches_in_page_links_only() {
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
}

#[test]
fn state_classes_are_distinct() {
    let classes = [CLASS_OPEN, CLASS_ACTIVE, CLASS_SCROLLED, CLASS_VISIBLE];
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("is-"));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn background_canvas_sits_behind_content() {
    assert_eq!(BACKGROUND_CANVAS_ID, "network-bg");
    assert!(BACKGROUND_CANVAS_STYLE.contains("position: fixed"));
    assert!(BACKGROUND_CANVAS_STYLE.contains("pointer-events: none"));
    assert!(BACKGROUND_CANVAS_STYLE.contains("z-index: -1"));
}

#[test]
fn reduced_motion_query_is_the_standard_media_feature() {
    assert_eq!(REDUCED_MOTION_QUERY, "(prefers-reduced-motion: reduce)");
    assert_eq!(THEME_ATTRIBUTE, "data-theme");
}
