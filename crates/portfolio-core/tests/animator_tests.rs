// Host-side tests for the background animation lifecycle.

use glam::Vec2;
use portfolio_core::*;

fn animator(seed: u64) -> Animator {
    Animator::new(ParticleField::with_seed(FieldConfig::default(), seed))
}

fn env(reduced_motion: bool, hidden: bool) -> Environment {
    Environment {
        reduced_motion,
        hidden,
    }
}

#[test]
fn starts_running_and_requests_frames() {
    let mut a = animator(1);
    let mut surface = CommandRecorder::default();
    assert_eq!(a.phase(), Phase::Uninitialized);
    let s = a.start(Viewport::new(1000.0, 1000.0), env(false, false), &mut surface);
    assert_eq!(s, Schedule::NextFrame);
    assert_eq!(a.phase(), Phase::Running);
    assert_eq!(a.field().nodes().len(), 60);
    // nothing drawn until the first frame fires
    assert_eq!(surface.clears(), 0);

    for _ in 0..3 {
        assert_eq!(a.frame(&mut surface), Schedule::NextFrame);
    }
    assert_eq!(a.frames_rendered(), 3);
    assert_eq!(surface.clears(), 3);
    assert_eq!(a.surface_opacity(), FieldConfig::default().surface_opacity);
}

#[test]
fn reduced_motion_renders_exactly_once() {
    let mut a = animator(2);
    let mut surface = CommandRecorder::default();
    let s = a.start(Viewport::new(800.0, 600.0), env(true, false), &mut surface);
    assert_eq!(s, Schedule::Idle);
    assert_eq!(a.phase(), Phase::Static);
    assert_eq!(a.frames_rendered(), 1);

    // stray ticks, visibility flips and resizes never draw again
    assert_eq!(a.frame(&mut surface), Schedule::Idle);
    assert_eq!(a.set_hidden(true), Schedule::Idle);
    assert_eq!(a.set_hidden(false), Schedule::Idle);
    a.resize(Viewport::new(400.0, 300.0));
    assert_eq!(a.frame(&mut surface), Schedule::Idle);

    assert_eq!(a.frames_rendered(), 1);
    assert_eq!(surface.clears(), 1);
    assert_eq!(a.phase(), Phase::Static);
    assert_eq!(
        a.surface_opacity(),
        FieldConfig::default().reduced_surface_opacity
    );
}

#[test]
fn hidden_pauses_without_touching_the_surface() {
    let mut a = animator(3);
    let mut surface = CommandRecorder::default();
    a.start(Viewport::new(1000.0, 800.0), env(false, false), &mut surface);
    a.frame(&mut surface);
    let drawn = surface.commands.len();

    assert_eq!(a.set_hidden(true), Schedule::Idle);
    assert_eq!(a.phase(), Phase::Paused);
    let frozen: Vec<Vec2> = a.field().nodes().iter().map(|n| n.position).collect();

    // a frame that slipped through after pausing is a no-op
    assert_eq!(a.frame(&mut surface), Schedule::Idle);
    assert_eq!(surface.commands.len(), drawn);
    let still: Vec<Vec2> = a.field().nodes().iter().map(|n| n.position).collect();
    assert_eq!(frozen, still);
}

#[test]
fn resume_continues_from_current_nodes() {
    let mut a = animator(4);
    let mut reference = animator(4);
    let mut surface = CommandRecorder::default();
    let viewport = Viewport::new(900.0, 900.0);
    a.start(viewport, env(false, false), &mut surface);
    reference.start(viewport, env(false, false), &mut surface);

    a.frame(&mut surface);
    a.set_hidden(true);
    assert_eq!(a.set_hidden(false), Schedule::NextFrame);
    assert_eq!(a.phase(), Phase::Running);
    a.frame(&mut surface);

    // same as two uninterrupted frames
    reference.frame(&mut surface);
    reference.frame(&mut surface);
    assert_eq!(a.field().nodes(), reference.field().nodes());
}

#[test]
fn repeated_visibility_events_do_not_double_schedule() {
    let mut a = animator(5);
    let mut surface = CommandRecorder::default();
    a.start(Viewport::new(500.0, 500.0), env(false, false), &mut surface);
    assert_eq!(a.set_hidden(false), Schedule::Idle);
    assert_eq!(a.set_hidden(true), Schedule::Idle);
    assert_eq!(a.set_hidden(true), Schedule::Idle);
    assert_eq!(a.set_hidden(false), Schedule::NextFrame);
    assert_eq!(a.set_hidden(false), Schedule::Idle);
}

#[test]
fn starting_hidden_waits_for_visibility() {
    let mut a = animator(6);
    let mut surface = CommandRecorder::default();
    let s = a.start(Viewport::new(500.0, 500.0), env(false, true), &mut surface);
    assert_eq!(s, Schedule::Idle);
    assert_eq!(a.phase(), Phase::Paused);
    assert_eq!(a.set_hidden(false), Schedule::NextFrame);
}

#[test]
fn resize_rebuilds_nodes_and_keeps_phase() {
    let mut a = animator(7);
    let mut surface = CommandRecorder::default();
    a.start(Viewport::new(1000.0, 1000.0), env(false, false), &mut surface);
    let before: Vec<Vec2> = a.field().nodes().iter().map(|n| n.position).collect();

    a.resize(Viewport::new(600.0, 500.0));
    assert_eq!(a.phase(), Phase::Running);
    assert_eq!(a.field().nodes().len(), 20);
    assert!(a
        .field()
        .nodes()
        .iter()
        .all(|n| !before.contains(&n.position)));

    a.set_hidden(true);
    a.resize(Viewport::new(1000.0, 1000.0));
    assert_eq!(a.phase(), Phase::Paused);
    assert_eq!(a.field().nodes().len(), 60);
}

#[test]
fn resize_before_start_is_ignored() {
    let mut a = animator(8);
    a.resize(Viewport::new(1000.0, 1000.0));
    assert_eq!(a.phase(), Phase::Uninitialized);
    assert!(a.field().nodes().is_empty());
}

#[test]
fn second_start_is_ignored() {
    let mut a = animator(9);
    let mut surface = CommandRecorder::default();
    a.start(Viewport::new(1000.0, 1000.0), env(false, false), &mut surface);
    let s = a.start(Viewport::new(10.0, 10.0), env(true, false), &mut surface);
    assert_eq!(s, Schedule::Idle);
    assert_eq!(a.phase(), Phase::Running);
    assert_eq!(a.field().nodes().len(), 60);
}

#[test]
fn pointer_state_follows_move_and_leave() {
    let mut a = animator(10);
    assert_eq!(a.pointer(), PointerState::Absent);
    a.pointer_moved(12.0, 34.0);
    assert_eq!(a.pointer(), PointerState::Present(Vec2::new(12.0, 34.0)));
    a.pointer_moved(56.0, 78.0);
    assert_eq!(a.pointer().position(), Some(Vec2::new(56.0, 78.0)));
    a.pointer_left();
    assert_eq!(a.pointer(), PointerState::Absent);
}

#[test]
fn frames_apply_pointer_repulsion() {
    let viewport = Viewport::new(300.0, 300.0);
    let mut surface = CommandRecorder::default();
    let mut calm = animator(11);
    let mut poked = animator(11);
    calm.start(viewport, env(false, false), &mut surface);
    poked.start(viewport, env(false, false), &mut surface);
    assert_eq!(calm.field().nodes(), poked.field().nodes());

    poked.pointer_moved(150.0, 150.0);
    calm.frame(&mut surface);
    poked.frame(&mut surface);
    assert_ne!(calm.field().nodes(), poked.field().nodes());
}
