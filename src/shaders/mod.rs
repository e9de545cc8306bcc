//! Embedded WGSL shader stage pairs
//!
//! Every shader ships inside the binary so module creation never depends on
//! runtime paths. Sources run through the include preprocessor and are
//! checked against their binding contract before a `wgpu::ShaderModule` is
//! created, so a contract/source drift fails loudly at load instead of at
//! first draw.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ShaderError, ShaderResult};
use crate::include;

/// Shared layout header, available to the preprocessor as "common.wgsl"
pub const COMMON_WGSL: &str = include_str!("common.wgsl");

/// Skybox stage pair
pub const SKYBOX_WGSL: &str = include_str!("skybox.wgsl");

/// Textured mesh stage pair
pub const MESH_WGSL: &str = include_str!("mesh.wgsl");

/// Unlit fixtures, one file per uniform-layout revision
pub const UNLIT_V1_WGSL: &str = include_str!("unlit_v1.wgsl");
pub const UNLIT_V2_WGSL: &str = include_str!("unlit_v2.wgsl");
pub const UNLIT_V3_WGSL: &str = include_str!("unlit_v3.wgsl");

/// Identifies one vertex/fragment stage pair shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderId {
    Skybox,
    Mesh,
    UnlitV1,
    UnlitV2,
    UnlitV3,
}

impl ShaderId {
    pub const ALL: [ShaderId; 5] = [
        ShaderId::Skybox,
        ShaderId::Mesh,
        ShaderId::UnlitV1,
        ShaderId::UnlitV2,
        ShaderId::UnlitV3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShaderId::Skybox => "skybox",
            ShaderId::Mesh => "mesh",
            ShaderId::UnlitV1 => "unlit_v1",
            ShaderId::UnlitV2 => "unlit_v2",
            ShaderId::UnlitV3 => "unlit_v3",
        }
    }

    pub fn from_name(name: &str) -> ShaderResult<ShaderId> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or_else(|| ShaderError::UnknownShader(name.to_string()))
    }

    /// Raw embedded source, before include expansion.
    pub fn source(self) -> &'static str {
        match self {
            ShaderId::Skybox => SKYBOX_WGSL,
            ShaderId::Mesh => MESH_WGSL,
            ShaderId::UnlitV1 => UNLIT_V1_WGSL,
            ShaderId::UnlitV2 => UNLIT_V2_WGSL,
            ShaderId::UnlitV3 => UNLIT_V3_WGSL,
        }
    }

    /// Source with includes expanded, ready for the shader compiler.
    pub fn preprocessed_source(self) -> ShaderResult<String> {
        include::preprocess(self.source())
    }
}

/// Holds the compiled shader modules for every shipped stage pair.
pub struct ShaderLibrary {
    device: Arc<wgpu::Device>,
    modules: HashMap<ShaderId, wgpu::ShaderModule>,
}

impl ShaderLibrary {
    /// Preprocess, validate and compile every shipped shader.
    pub fn new(device: Arc<wgpu::Device>) -> ShaderResult<Self> {
        let mut library = Self {
            device,
            modules: HashMap::new(),
        };

        for id in ShaderId::ALL {
            library.load(id)?;
        }

        Ok(library)
    }

    fn load(&mut self, id: ShaderId) -> ShaderResult<()> {
        let source = id.preprocessed_source()?;
        id.contract().validate_source(&source)?;

        let module = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(id.name()),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });

        log::debug!("loaded shader '{}'", id.name());
        self.modules.insert(id, module);
        Ok(())
    }

    pub fn get(&self, id: ShaderId) -> Option<&wgpu::ShaderModule> {
        self.modules.get(&id)
    }

    pub fn get_named(&self, name: &str) -> ShaderResult<&wgpu::ShaderModule> {
        let id = ShaderId::from_name(name)?;
        self.modules
            .get(&id)
            .ok_or_else(|| ShaderError::UnknownShader(name.to_string()))
    }

    pub fn device(&self) -> &Arc<wgpu::Device> {
        &self.device
    }
}
