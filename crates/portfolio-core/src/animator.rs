//! Lifecycle of the background animation.
//!
//! The host owns the refresh-synchronised scheduler; the animator only says
//! whether another frame should be requested. A frame always runs `step`
//! to completion before `render`.

use crate::config::FieldConfig;
use crate::particle::{ParticleField, PointerState, Viewport};
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Paused,
    /// Reduced motion: one frame was drawn and the loop never starts.
    Static,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    NextFrame,
    Idle,
}

/// Environment signals sampled when the animation starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub reduced_motion: bool,
    pub hidden: bool,
}

pub struct Animator {
    field: ParticleField,
    pointer: PointerState,
    phase: Phase,
    frames_rendered: u64,
}

impl Animator {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            pointer: PointerState::Absent,
            phase: Phase::Uninitialized,
            frames_rendered: 0,
        }
    }

    pub fn with_config(config: FieldConfig) -> Self {
        Self::new(ParticleField::new(config))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Opacity the host should apply to the whole drawing surface.
    pub fn surface_opacity(&self) -> f32 {
        let config = self.field.config();
        if self.phase == Phase::Static {
            config.reduced_surface_opacity
        } else {
            config.surface_opacity
        }
    }

    pub fn start<S: Surface + ?Sized>(
        &mut self,
        viewport: Viewport,
        env: Environment,
        surface: &mut S,
    ) -> Schedule {
        if self.phase != Phase::Uninitialized {
            log::warn!("[background] start ignored, already {:?}", self.phase);
            return Schedule::Idle;
        }
        self.field.initialize(viewport);
        if env.reduced_motion {
            self.phase = Phase::Static;
            self.draw(surface);
            log::info!("[background] reduced motion, drew one static frame");
            return Schedule::Idle;
        }
        if env.hidden {
            self.phase = Phase::Paused;
            return Schedule::Idle;
        }
        self.phase = Phase::Running;
        Schedule::NextFrame
    }

    /// One animation tick. Does nothing unless running.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Schedule {
        if self.phase != Phase::Running {
            return Schedule::Idle;
        }
        self.field.step(&self.pointer);
        self.draw(surface);
        Schedule::NextFrame
    }

    pub fn set_hidden(&mut self, hidden: bool) -> Schedule {
        match (self.phase, hidden) {
            (Phase::Running, true) => {
                self.phase = Phase::Paused;
                log::debug!("[background] paused");
                Schedule::Idle
            }
            (Phase::Paused, false) => {
                self.phase = Phase::Running;
                log::debug!("[background] resumed");
                Schedule::NextFrame
            }
            _ => Schedule::Idle,
        }
    }

    /// Fresh node set for the new size; the phase is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.phase == Phase::Uninitialized {
            return;
        }
        self.field.resize(viewport);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = PointerState::Present(Vec2::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = PointerState::Absent;
    }

    fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.field.render(surface);
        self.frames_rendered += 1;
    }
}
