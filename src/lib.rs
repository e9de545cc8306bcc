pub mod constants;
pub mod contract;
pub mod error;
pub mod include;
pub mod layout;
pub mod shaders;
pub mod transform;

pub use contract::{BindingKind, BindingSlot, StagePair, MESH, SKYBOX, UNLIT_V1, UNLIT_V2, UNLIT_V3};
pub use error::{ShaderError, ShaderResult};
pub use include::WgslPreprocessor;
pub use layout::{
    GlobalsUniform, HeaderVertex, LightArray, LightUniform, MaterialUniform, MeshCamera,
    ModelUniform, ObjectUniform, PositionVertex, SkyboxCamera, UnlitCameraV1, UnlitCameraV2,
    UvVertex,
};
pub use shaders::{ShaderId, ShaderLibrary};
