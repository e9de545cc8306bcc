// Shader pack constants - single source of truth.
//
// Entry point names, include names and byte sizes live here so host code,
// contract tables and tests can never drift apart.

/// Shader entry point names, as referenced by host pipeline descriptors
pub mod entry_points {
    pub const SKYBOX_VERTEX: &str = "vs_sky";
    pub const SKYBOX_FRAGMENT: &str = "fs_sky";

    /// Shared by the mesh shader and all unlit fixtures
    pub const MESH_VERTEX: &str = "vs_main";
    pub const MESH_FRAGMENT: &str = "fs_main";
}

/// Names resolvable by the include preprocessor
pub mod includes {
    pub const COMMON: &str = "common.wgsl";
}

/// Uniform block sizes in bytes, after WGSL alignment rules
pub mod uniform_sizes {
    pub const SKYBOX_CAMERA: u64 = 208;
    pub const MESH_CAMERA: u64 = 144;
    pub const UNLIT_CAMERA_V1: u64 = 128;
    pub const UNLIT_CAMERA_V2: u64 = 144;
    pub const MODEL: u64 = 64;
    pub const LIGHT: u64 = 32;
    pub const MATERIAL: u64 = 16;
    pub const GLOBALS: u64 = 16;
    pub const OBJECT: u64 = 80;
}

/// Light limits
pub mod lights {
    /// Fixed length of the light array in unlit_v3
    pub const MAX_LIGHTS: usize = 5;
}

/// Vertex stream strides in bytes
pub mod vertex_sizes {
    pub const POSITION_STRIDE: u64 = 12;
    pub const UV_STRIDE: u64 = 8;
    pub const HEADER_VERTEX_STRIDE: u64 = 72;
}
