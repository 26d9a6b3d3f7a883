// Host-side tests for navigation, scrolling, reveal and config validation.

use portfolio_core::*;

#[test]
fn nav_toggle_flips_state() {
    let mut nav = NavigationController::default();
    assert!(!nav.is_open());
    assert!(nav.toggle());
    assert_eq!(nav.aria_expanded(), "true");
    assert_eq!(nav.body_overflow(), "hidden");
    assert!(!nav.toggle());
    assert_eq!(nav.aria_expanded(), "false");
    assert_eq!(nav.body_overflow(), "");
}

#[test]
fn nav_closes_on_escape_and_link() {
    let mut nav = NavigationController::default();
    nav.toggle();
    assert!(!nav.handle(NavEvent::Key("Enter")));
    assert!(nav.is_open());
    assert!(nav.handle(NavEvent::Key("Escape")));
    assert!(!nav.is_open());

    nav.handle(NavEvent::Toggle);
    assert!(nav.handle(NavEvent::LinkActivated));
    assert!(!nav.is_open());
    // closing an already closed drawer reports no change
    assert!(!nav.handle(NavEvent::Key("Escape")));
}

#[test]
fn nav_outside_click_only_closes_when_outside() {
    let mut nav = NavigationController::default();
    nav.toggle();
    assert!(!nav.handle(NavEvent::Click {
        in_nav: true,
        in_toggle: false
    }));
    assert!(!nav.handle(NavEvent::Click {
        in_nav: false,
        in_toggle: true
    }));
    assert!(nav.is_open());
    assert!(nav.handle(NavEvent::Click {
        in_nav: false,
        in_toggle: false
    }));
    assert!(!nav.is_open());
}

#[test]
fn scroll_target_subtracts_header() {
    assert_eq!(target_offset(900.0, Some(80.0)), 820.0);
    assert_eq!(target_offset(900.0, None), 836.0);
    assert_eq!(target_offset(900.0, Some(0.0)), 836.0);
    assert_eq!(target_offset(10.0, Some(64.0)), -54.0);
}

#[test]
fn scroll_mode_follows_reduced_motion() {
    assert_eq!(ScrollMode::for_motion(false), ScrollMode::Smooth);
    assert_eq!(ScrollMode::for_motion(true), ScrollMode::Instant);
}

#[test]
fn anchor_target_accepts_only_in_page_ids() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("/blog#top"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}

#[test]
fn header_scrolled_after_threshold() {
    assert!(!header_is_scrolled(0.0));
    assert!(!header_is_scrolled(50.0));
    assert!(header_is_scrolled(50.5));
    assert!(header_is_scrolled(2_000.0));
}

#[test]
fn scroll_ticker_coalesces_requests() {
    let mut ticker = ScrollTicker::default();
    assert!(ticker.request());
    assert!(!ticker.request());
    assert!(!ticker.request());
    assert!(ticker.is_pending());
    ticker.complete();
    assert!(ticker.request());
}

#[test]
fn reveal_fires_once_per_element() {
    let mut tracker = RevealTracker::new(3);
    assert!(!tracker.observe(0, false));
    assert!(tracker.observe(0, true));
    assert!(!tracker.observe(0, true));
    assert!(!tracker.observe(7, true));
    assert_eq!(tracker.remaining(), 2);
    assert_eq!(tracker.reveal_all(), 2);
    assert_eq!(tracker.remaining(), 0);
}

#[test]
fn reveal_options_default() {
    let options = RevealOptions::default();
    assert_eq!(options.threshold, 0.1);
    assert_eq!(options.root_margin, "0px 0px -50px 0px");
}

#[test]
fn default_config_is_valid() {
    assert_eq!(FieldConfig::default().validate(), Ok(()));
}

#[test]
fn invalid_configs_are_rejected() {
    let mut c = FieldConfig::default();
    c.density = 0.0;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive { name: "density", .. })
    ));

    let mut c = FieldConfig::default();
    c.radius_range = (3.0, 1.0);
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvertedRange { name: "radius_range", .. })
    ));

    let mut c = FieldConfig::default();
    c.link_max_alpha = 1.5;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::OutOfUnitRange { name: "link_max_alpha", .. })
    ));

    let mut c = FieldConfig::default();
    c.speed = f32::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn colors_render_as_css() {
    let c = FieldConfig::default();
    assert_eq!(c.node_color(0.5).to_css(), "rgba(115, 115, 115, 0.5)");
    assert_eq!(c.link_color(0.15).to_css(), "rgba(163, 163, 163, 0.15)");
}
