//! Material uniform layout

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Material block declared by unlit_v3 (group 1, binding 1).
/// Total size: 16 bytes; `roughness` packs into the vec3 tail padding.
///
/// Declared but unread by the fixture's fragment output.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub color: [f32; 3],
    pub roughness: f32,
}

impl MaterialUniform {
    pub fn new(color: Vec3, roughness: f32) -> Self {
        Self {
            color: color.to_array(),
            roughness,
        }
    }
}

impl Default for MaterialUniform {
    fn default() -> Self {
        Self::new(Vec3::ONE, 1.0)
    }
}
