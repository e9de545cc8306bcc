//! Reference implementations of the vertex-stage transforms
//!
//! CPU-side mirrors of the math the shaders run, used by tests and by hosts
//! that want to precompute expected clip positions. Matrices follow glam's
//! column-major convention, same as WGSL.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// Clip position produced by the mesh vertex stage:
/// `projection * view * model * vec4(position, 1)`.
pub fn mesh_clip_position(projection: Mat4, view: Mat4, model: Mat4, position: Vec3) -> Vec4 {
    projection * view * model * position.extend(1.0)
}

/// Clip position produced by the skybox vertex stage.
///
/// The projected z is replaced by w (the "xyww" trick), so the perspective
/// divide lands the sky exactly on the far plane.
pub fn skybox_clip_position(projection: Mat4, view: Mat4, position: Vec3) -> Vec4 {
    let projected = projection * view * position.extend(1.0);
    Vec4::new(projected.x, projected.y, projected.w, projected.w)
}

/// Direction the skybox fragment stage samples the cubemap along: the
/// untransformed cube-space position, passed through unchanged.
pub fn skybox_direction(position: Vec3) -> Vec3 {
    position
}

/// Strip the translation from a view matrix, keeping rotation only.
///
/// This is what the host binds as the skybox camera view so the sky stays
/// centered on the viewer.
pub fn rotation_only_view(view: Mat4) -> Mat4 {
    Mat4::from_mat3(Mat3::from_mat4(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_only_view_drops_translation() {
        let view = Mat4::from_rotation_y(0.5) * Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
        let stripped = rotation_only_view(view);

        assert_eq!(stripped.w_axis, Vec4::new(0.0, 0.0, 0.0, 1.0));
        // rotation part is untouched
        assert_eq!(stripped.x_axis, view.x_axis);
        assert_eq!(stripped.y_axis, view.y_axis);
        assert_eq!(stripped.z_axis, view.z_axis);
    }
}
