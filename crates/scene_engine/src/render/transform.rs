//! Model-matrix composition from per-draw transform parameters

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::render::shader::{uniform, ShaderProgram};

/// Ephemeral per-draw transform input
///
/// Consumed immediately to produce a model matrix; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    /// Per-axis scale factors
    pub scale: Vec3,
    /// Euler rotation angles in degrees, applied about X, then Y, then Z
    pub rotation_deg: Vec3,
    /// World-space translation
    pub translation: Vec3,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_deg: Vec3::zeros(),
            translation: Vec3::zeros(),
        }
    }
}

/// Compose a model matrix from scale, rotation and translation parameters
///
/// The composition is fixed as `T * Rx * Ry * Rz * S`: the object is scaled,
/// rotated about X then Y then Z, and finally positioned. Reordering changes
/// visual output for any non-uniform rotation combination, so this order is
/// part of the contract.
pub fn compose_model_matrix(params: &TransformParams) -> Mat4 {
    let scale = Mat4::new_nonuniform_scaling(&params.scale);
    let rotation_x = Mat4::rotation_x(utils::deg_to_rad(params.rotation_deg.x));
    let rotation_y = Mat4::rotation_y(utils::deg_to_rad(params.rotation_deg.y));
    let rotation_z = Mat4::rotation_z(utils::deg_to_rad(params.rotation_deg.z));
    let translation = Mat4::new_translation(&params.translation);

    translation * rotation_x * rotation_y * rotation_z * scale
}

/// Push a composed model matrix into the shader's `model` uniform
pub fn submit_model_matrix(shader: &mut dyn ShaderProgram, matrix: &Mat4) {
    shader.set_mat4(uniform::MODEL, matrix);
}
