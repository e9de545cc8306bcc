//! Light uniform layout
//!
//! Declared by unlit_v3 and the shared header. No fragment logic reads these
//! yet; the layout exists so host and shader agree before the shading work
//! lands.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::lights::MAX_LIGHTS;

/// One light. Total size: 32 bytes, which is also the element stride of the
/// uniform array in unlit_v3.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub color: [f32; 3],
    pub _pad1: f32,
}

impl LightUniform {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            _pad0: 0.0,
            color: color.to_array(),
            _pad1: 0.0,
        }
    }
}

impl Default for LightUniform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

/// The fixed-length light array bound at group 1, binding 0 of unlit_v3.
/// Total size: 160 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LightArray {
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl Default for LightArray {
    fn default() -> Self {
        Self {
            lights: [LightUniform::default(); MAX_LIGHTS],
        }
    }
}
