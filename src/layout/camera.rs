//! Camera uniform layouts
//!
//! One struct per shader revision. The unlit fixtures intentionally keep
//! separate structs instead of a shared versioned one; their layouts changed
//! between revisions and no compatibility between them is promised.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera block for the skybox shader (group 0, binding 0).
/// Total size: 208 bytes.
///
/// `projection_inv` and `position` are not read by the current shader logic
/// but are part of the binding contract and must stay in place.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SkyboxCamera {
    /// View matrix; rotation-only, see [`crate::transform::rotation_only_view`]
    pub view: [[f32; 4]; 4],

    /// Projection matrix
    pub projection: [[f32; 4]; 4],

    /// Inverse projection matrix
    pub projection_inv: [[f32; 4]; 4],

    /// Camera world position
    pub position: [f32; 3],
    pub _pad: f32,
}

impl SkyboxCamera {
    pub fn new(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        let projection_inv = if projection.determinant().abs() > f32::EPSILON {
            projection.inverse()
        } else {
            Mat4::IDENTITY
        };

        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            projection_inv: projection_inv.to_cols_array_2d(),
            position: position.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for SkyboxCamera {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}

/// Camera block for the textured mesh shader (group 0, binding 0).
/// Total size: 144 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshCamera {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],

    /// Camera world position; declared for the fragment stage, currently
    /// unread there
    pub position: [f32; 3],
    pub _pad: f32,
}

impl MeshCamera {
    pub fn new(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            position: position.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for MeshCamera {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}

/// Camera block for the first unlit fixture. Total size: 128 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct UnlitCameraV1 {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl UnlitCameraV1 {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}

impl Default for UnlitCameraV1 {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

/// Camera block for the second and third unlit fixtures; the `world` field
/// is the layout change that revision introduced. Total size: 144 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct UnlitCameraV2 {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub world: [f32; 3],
    pub _pad: f32,
}

impl UnlitCameraV2 {
    pub fn new(view: Mat4, projection: Mat4, world: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            world: world.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for UnlitCameraV2 {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}
