//! Vertex buffer layouts
//!
//! The skybox and unlit shaders consume a bare position stream. The mesh
//! shader takes position and UV as two separate buffers, matching how the
//! host uploads mesh attributes one buffer per attribute. The shared header
//! additionally declares a full interleaved vertex for future shaders.

use bytemuck::{Pod, Zeroable};
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// Position-only stream, location 0. Stride: 12 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    pub fn layout() -> VertexBufferLayout<'static> {
        const ATTRIBUTES: &[VertexAttribute] = &[VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: VertexFormat::Float32x3,
        }];

        VertexBufferLayout {
            array_stride: 12,
            step_mode: VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

/// UV stream for the mesh shader, location 1. Stride: 8 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct UvVertex {
    pub uv: [f32; 2],
}

impl UvVertex {
    pub fn layout() -> VertexBufferLayout<'static> {
        const ATTRIBUTES: &[VertexAttribute] = &[VertexAttribute {
            offset: 0,
            shader_location: 1,
            format: VertexFormat::Float32x2,
        }];

        VertexBufferLayout {
            array_stride: 8,
            step_mode: VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

/// Full interleaved vertex declared by the shared header.
/// Total size: 72 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct HeaderVertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Primary texture coordinates
    pub uv_0: [f32; 2],
    /// Secondary texture coordinates
    pub uv_1: [f32; 2],
    /// Normal vector
    pub normal: [f32; 3],
    /// Tangent, w carries the bitangent sign
    pub tangent: [f32; 4],
    /// Vertex color
    pub color: [f32; 4],
}

impl HeaderVertex {
    pub fn layout() -> VertexBufferLayout<'static> {
        const ATTRIBUTES: &[VertexAttribute] = &[
            // Position
            VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: VertexFormat::Float32x3,
            },
            // UV channel 0
            VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: VertexFormat::Float32x2,
            },
            // UV channel 1
            VertexAttribute {
                offset: 20,
                shader_location: 2,
                format: VertexFormat::Float32x2,
            },
            // Normal
            VertexAttribute {
                offset: 28,
                shader_location: 3,
                format: VertexFormat::Float32x3,
            },
            // Tangent
            VertexAttribute {
                offset: 40,
                shader_location: 4,
                format: VertexFormat::Float32x4,
            },
            // Color
            VertexAttribute {
                offset: 56,
                shader_location: 5,
                format: VertexFormat::Float32x4,
            },
        ];

        VertexBufferLayout {
            array_stride: 72,
            step_mode: VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}
