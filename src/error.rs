//! Error types for shader loading and contract validation

use thiserror::Error;

/// Errors surfaced while preparing shaders or checking the binding contract.
///
/// Anything past this point (type mismatches inside WGSL, host pipeline
/// layouts that disagree with the shader) is rejected by the graphics API at
/// pipeline creation and is out of this crate's hands.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("unknown include '{0}'")]
    UnknownInclude(String),

    #[error("failed to read include '{name}': {source}")]
    IncludeIo {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown shader '{0}'")]
    UnknownShader(String),

    #[error("shader '{shader}' declares (group {group}, binding {binding}) more than once")]
    BindingCollision {
        shader: &'static str,
        group: u32,
        binding: u32,
    },

    #[error("shader '{shader}' source declares (group {group}, binding {binding}) missing from its contract")]
    UndeclaredBinding {
        shader: &'static str,
        group: u32,
        binding: u32,
    },

    #[error("shader '{shader}' contract declares (group {group}, binding {binding}) missing from its source")]
    MissingBinding {
        shader: &'static str,
        group: u32,
        binding: u32,
    },

    #[error("shader '{shader}' is missing entry point '{entry}'")]
    MissingEntryPoint {
        shader: &'static str,
        entry: &'static str,
    },
}

pub type ShaderResult<T> = Result<T, ShaderError>;
