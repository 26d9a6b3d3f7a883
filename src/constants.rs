// DOM contract for the page markup: selectors, ids and state classes the
// front-end reads or toggles.

// Background canvas (created and prepended to <body> when missing)
pub const BACKGROUND_CANVAS_ID: &str = "network-bg";
pub const BACKGROUND_CANVAS_STYLE: &str =
    "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: -1;";

// Header and navigation drawer
pub const HEADER_SELECTOR: &str = ".header";
pub const NAV_SELECTOR: &str = ".header__nav";
pub const NAV_TOGGLE_SELECTOR: &str = ".header__menu-toggle";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Theme switcher
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_BUTTON_SELECTOR: &str = ".theme-switcher";
pub const THEME_BUTTON_TEXT_SELECTOR: &str = ".theme-switcher__text";
pub const THEME_FOOTER_SELECTOR: &str = ".footer__theme-name";
pub const THEME_OVERLAY_SELECTOR: &str = ".theme-transition-overlay";

// Reveal-on-scroll targets
pub const REVEAL_SELECTOR: &str = ".anim-fade-up";

// State classes
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_SCROLLED: &str = "is-scrolled";
pub const CLASS_VISIBLE: &str = "is-visible";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
