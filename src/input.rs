use portfolio_core::{is_theme_shortcut, Viewport};

/// Page-level action bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseMenu,
    CycleTheme,
}

#[inline]
pub fn key_action(key: &str, target_tag: Option<&str>) -> Option<KeyAction> {
    if key == "Escape" {
        return Some(KeyAction::CloseMenu);
    }
    is_theme_shortcut(key, target_tag).then_some(KeyAction::CycleTheme)
}

// ---------------- Viewport helpers ----------------
/// Viewport from `innerWidth`/`innerHeight`; anything unusable collapses to zero.
#[inline]
pub fn viewport_from_inner(width: Option<f64>, height: Option<f64>) -> Viewport {
    let clean = |v: Option<f64>| match v {
        Some(v) if v.is_finite() && v > 0.0 => v.floor() as f32,
        _ => 0.0,
    };
    Viewport::new(clean(width), clean(height))
}

/// Canvas backing size in whole pixels for a viewport.
#[inline]
pub fn backing_size(viewport: Viewport) -> (u32, u32) {
    (viewport.width as u32, viewport.height as u32)
}
