//! Field configuration.
//!
//! `FieldConfig::default()` mirrors the values in [`crate::constants`]; hosts
//! that want a denser or calmer background can tweak fields and call
//! [`FieldConfig::validate`] before handing the config to a field.

use crate::constants::*;
use crate::surface::Rgba;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_nodes: usize,
    pub density: f32,
    pub radius_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub speed: f32,
    pub connection_distance: f32,
    pub link_max_alpha: f32,
    pub link_width: f32,
    pub pointer_radius: f32,
    pub pointer_pull: f32,
    pub node_rgb: [u8; 3],
    pub link_rgb: [u8; 3],
    pub surface_opacity: f32,
    pub reduced_surface_opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_nodes: MAX_NODES,
            density: NODE_DENSITY_PX2,
            radius_range: (NODE_RADIUS_MIN, NODE_RADIUS_MAX),
            opacity_range: (NODE_OPACITY_MIN, NODE_OPACITY_MAX),
            speed: NODE_SPEED,
            connection_distance: CONNECTION_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            link_width: LINK_WIDTH,
            pointer_radius: POINTER_RADIUS,
            pointer_pull: POINTER_PULL,
            node_rgb: NODE_RGB,
            link_rgb: LINK_RGB,
            surface_opacity: SURFACE_OPACITY,
            reduced_surface_opacity: SURFACE_OPACITY_REDUCED,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("density", self.density)?;
        positive("connection_distance", self.connection_distance)?;
        positive("pointer_radius", self.pointer_radius)?;
        positive("link_width", self.link_width)?;
        ordered("radius_range", self.radius_range)?;
        ordered("opacity_range", self.opacity_range)?;
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "speed",
                value: self.speed,
            });
        }
        unit("opacity_range.max", self.opacity_range.1)?;
        unit("link_max_alpha", self.link_max_alpha)?;
        unit("pointer_pull", self.pointer_pull)?;
        unit("surface_opacity", self.surface_opacity)?;
        unit("reduced_surface_opacity", self.reduced_surface_opacity)?;
        Ok(())
    }

    pub fn node_color(&self, alpha: f32) -> Rgba {
        Rgba::from_rgb(self.node_rgb, alpha)
    }

    pub fn link_color(&self, alpha: f32) -> Rgba {
        Rgba::from_rgb(self.link_rgb, alpha)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn ordered(name: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    positive(name, max)
}

fn unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
