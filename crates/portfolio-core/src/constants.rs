// Shared tuning constants for the network background and page glue.

// Node population
pub const NODE_DENSITY_PX2: f32 = 15_000.0; // viewport area per node
pub const MAX_NODES: usize = 60;

// Node appearance
pub const NODE_RADIUS_MIN: f32 = 1.0;
pub const NODE_RADIUS_MAX: f32 = 2.5;
pub const NODE_OPACITY_MIN: f32 = 0.2;
pub const NODE_OPACITY_MAX: f32 = 0.7;
pub const NODE_SPEED: f32 = 0.3; // px per frame, before depth scaling

// Links between nearby nodes
pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const LINK_MAX_ALPHA: f32 = 0.15;
pub const LINK_WIDTH: f32 = 0.5;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_PULL: f32 = 0.02;

// Palette
pub const NODE_RGB: [u8; 3] = [115, 115, 115];
pub const LINK_RGB: [u8; 3] = [163, 163, 163];

// Whole-surface opacity
pub const SURFACE_OPACITY: f32 = 0.4;
pub const SURFACE_OPACITY_REDUCED: f32 = 0.2;

// Header and scrolling
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const HEADER_FALLBACK_HEIGHT_PX: f64 = 64.0;
pub const INITIAL_HASH_DELAY_MS: i32 = 100;

// Themes
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";
pub const THEME_FADE_MS: i32 = 200; // overlay in, then overlay out

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_FALLBACK_DELAY_MS: i32 = 100; // when the font loading API is missing
