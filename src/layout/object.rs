//! Per-object uniform layouts

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Model matrix block for the mesh shader (group 1, binding 0).
/// Total size: 64 bytes.
///
/// Bound with a dynamic offset so many objects can share one buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl From<Mat4> for ModelUniform {
    fn from(model: Mat4) -> Self {
        Self::new(model)
    }
}

/// Object block declared by the shared header: model matrix plus an
/// instance index. Total size: 80 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub instance: u32,
    pub _pad: [u32; 3],
}

impl ObjectUniform {
    pub fn new(model: Mat4, instance: u32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            instance,
            _pad: [0; 3],
        }
    }
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, 0)
    }
}
