//! Host-side GPU layout definitions
//!
//! Single source of truth for the uniform blocks, vertex streams and binding
//! indices the shaders declare. Every struct here mirrors a WGSL declaration
//! byte-for-byte; reordering a field silently breaks the binding contract on
//! some backends, so sizes are pinned by tests.

pub mod camera;
pub mod globals;
pub mod light;
pub mod material;
pub mod object;
pub mod vertex;


pub use camera::{MeshCamera, SkyboxCamera, UnlitCameraV1, UnlitCameraV2};
pub use globals::GlobalsUniform;
pub use light::{LightArray, LightUniform};
pub use material::MaterialUniform;
pub use object::{ModelUniform, ObjectUniform};
pub use vertex::{HeaderVertex, PositionVertex, UvVertex};

/// Bind group indices for the mesh shader, split by rebind frequency
pub mod groups {
    /// Per-frame camera data
    pub const CAMERA: u32 = 0;
    /// Per-object model data
    pub const OBJECT: u32 = 1;
    /// Per-material texture data
    pub const MATERIAL: u32 = 2;
}

/// Binding indices within their groups
pub mod bindings {
    pub mod skybox {
        pub const CAMERA: u32 = 0;
        pub const TEXTURE: u32 = 1;
        pub const SAMPLER: u32 = 2;
    }

    pub mod mesh {
        pub const CAMERA: u32 = 0;
        pub const MODEL: u32 = 0;
        pub const TEXTURE: u32 = 0;
        pub const SAMPLER: u32 = 1;
    }

    pub mod unlit {
        pub const CAMERA: u32 = 0;
        pub const LIGHTS: u32 = 0;
        pub const MATERIAL: u32 = 1;
        pub const TEXTURE: u32 = 0;
        pub const SAMPLER: u32 = 1;
    }
}

/// Buffer usage patterns for host uploads
pub mod usage {
    use wgpu::BufferUsages;

    /// Uniform buffer usage
    pub const UNIFORM: BufferUsages = BufferUsages::UNIFORM.union(BufferUsages::COPY_DST);

    /// Vertex buffer usage
    pub const VERTEX: BufferUsages = BufferUsages::VERTEX.union(BufferUsages::COPY_DST);

    /// Index buffer usage
    pub const INDEX: BufferUsages = BufferUsages::INDEX.union(BufferUsages::COPY_DST);
}

/// Bind group layout entry constructors
pub mod layouts {
    use wgpu::{
        BindGroupLayoutEntry, BindingType, BufferBindingType, SamplerBindingType, ShaderStages,
        TextureSampleType, TextureViewDimension,
    };

    /// Create a uniform buffer binding entry.
    pub fn uniform_buffer_entry(
        binding: u32,
        visibility: ShaderStages,
        has_dynamic_offset: bool,
    ) -> BindGroupLayoutEntry {
        BindGroupLayoutEntry {
            binding,
            visibility,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset,
                min_binding_size: None,
            },
            count: None,
        }
    }

    /// Create a filterable 2D texture binding entry.
    pub fn texture_2d_entry(binding: u32, visibility: ShaderStages) -> BindGroupLayoutEntry {
        BindGroupLayoutEntry {
            binding,
            visibility,
            ty: BindingType::Texture {
                sample_type: TextureSampleType::Float { filterable: true },
                view_dimension: TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        }
    }

    /// Create a cube texture binding entry.
    pub fn texture_cube_entry(binding: u32, visibility: ShaderStages) -> BindGroupLayoutEntry {
        BindGroupLayoutEntry {
            binding,
            visibility,
            ty: BindingType::Texture {
                sample_type: TextureSampleType::Float { filterable: true },
                view_dimension: TextureViewDimension::Cube,
                multisampled: false,
            },
            count: None,
        }
    }

    /// Create a filtering sampler binding entry.
    pub fn sampler_entry(binding: u32, visibility: ShaderStages) -> BindGroupLayoutEntry {
        BindGroupLayoutEntry {
            binding,
            visibility,
            ty: BindingType::Sampler(SamplerBindingType::Filtering),
            count: None,
        }
    }
}
