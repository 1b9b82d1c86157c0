//! Point-light configuration pushed to shader state
//!
//! Lights are configured once during scene preparation, written to the
//! shader's indexed `lightSources` uniforms, and never read back.

use crate::foundation::math::Vec3;
use crate::render::shader::{uniform, ShaderProgram};

/// Hard ceiling on configured light sources
pub const MAX_LIGHTS: usize = 4;

/// Point light source
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Ambient color contribution
    pub ambient: Vec3,
    /// Diffuse color contribution
    pub diffuse: Vec3,
    /// Specular color contribution
    pub specular: Vec3,
    /// Focal strength (falloff shaping)
    pub focal_strength: f32,
    /// Specular intensity multiplier
    pub specular_intensity: f32,
}

impl PointLight {
    /// Create a light at `position` with neutral colors
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::new(0.0, 0.0, 0.0),
            diffuse: Vec3::new(1.0, 1.0, 1.0),
            specular: Vec3::new(1.0, 1.0, 1.0),
            focal_strength: 1.0,
            specular_intensity: 1.0,
        }
    }

    /// Set the ambient color
    pub fn with_ambient(mut self, color: Vec3) -> Self {
        self.ambient = color;
        self
    }

    /// Set the diffuse color
    pub fn with_diffuse(mut self, color: Vec3) -> Self {
        self.diffuse = color;
        self
    }

    /// Set the specular color
    pub fn with_specular(mut self, color: Vec3) -> Self {
        self.specular = color;
        self
    }

    /// Set the focal strength
    pub fn with_focal_strength(mut self, focal_strength: f32) -> Self {
        self.focal_strength = focal_strength;
        self
    }

    /// Set the specular intensity
    pub fn with_specular_intensity(mut self, specular_intensity: f32) -> Self {
        self.specular_intensity = specular_intensity;
        self
    }
}

/// Ordered set of scene lights, capped at [`MAX_LIGHTS`]
#[derive(Debug, Default)]
pub struct LightingRig {
    lights: Vec<PointLight>,
}

impl LightingRig {
    /// Create an empty rig
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light; refused with an error log once [`MAX_LIGHTS`] is reached
    ///
    /// Returns whether the light was accepted.
    pub fn push(&mut self, light: PointLight) -> bool {
        if self.lights.len() >= MAX_LIGHTS {
            log::error!(
                "Ignoring light at {:?}: at most {} light sources are supported",
                light.position,
                MAX_LIGHTS
            );
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Number of configured lights
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether no lights are configured
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Push the rig into shader state
    ///
    /// Enables the custom lighting path and writes each light's six uniform
    /// fields at its index. An empty rig leaves the lighting flag untouched
    /// so the backend's default path stays active.
    pub fn apply(&self, shader: &mut dyn ShaderProgram) {
        if self.lights.is_empty() {
            return;
        }

        shader.set_bool(uniform::USE_LIGHTING, true);
        for (index, light) in self.lights.iter().enumerate() {
            shader.set_vec3(&uniform::light::position(index), light.position);
            shader.set_vec3(&uniform::light::ambient(index), light.ambient);
            shader.set_vec3(&uniform::light::diffuse(index), light.diffuse);
            shader.set_vec3(&uniform::light::specular(index), light.specular);
            shader.set_float(&uniform::light::focal_strength(index), light.focal_strength);
            shader.set_float(
                &uniform::light::specular_intensity(index),
                light.specular_intensity,
            );
        }
        log::debug!("Applied {} light source(s) to shader state", self.lights.len());
    }
}
