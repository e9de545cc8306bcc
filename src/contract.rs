//! Shader binding contracts
//!
//! A `StagePair` is the host-visible half of one vertex/fragment shader pair:
//! entry point names, the (group, binding) slot table and what each slot
//! holds. The host builds its pipeline and bind group layouts from this
//! table; `validate_source` cross-checks the table against the preprocessed
//! WGSL so the two cannot drift apart silently. Mismatches the table cannot
//! see (field types, host buffer contents) remain the graphics API's
//! pipeline-creation failure.

use wgpu::{BindGroupLayout, BindGroupLayoutEntry, ShaderStages, VertexBufferLayout};

use crate::error::{ShaderError, ShaderResult};
use crate::layout::vertex::{PositionVertex, UvVertex};
use crate::layout::{bindings, groups, layouts};
use crate::shaders::ShaderId;

/// What a binding slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Uniform { dynamic_offset: bool },
    Texture2d,
    TextureCube,
    Sampler,
}

/// One (group, binding) slot of a stage pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingSlot {
    pub group: u32,
    pub binding: u32,
    pub kind: BindingKind,
    pub visibility: ShaderStages,
}

impl BindingSlot {
    const fn uniform(group: u32, binding: u32, visibility: ShaderStages) -> Self {
        Self {
            group,
            binding,
            kind: BindingKind::Uniform {
                dynamic_offset: false,
            },
            visibility,
        }
    }

    fn layout_entry(&self) -> BindGroupLayoutEntry {
        match self.kind {
            BindingKind::Uniform { dynamic_offset } => {
                layouts::uniform_buffer_entry(self.binding, self.visibility, dynamic_offset)
            }
            BindingKind::Texture2d => layouts::texture_2d_entry(self.binding, self.visibility),
            BindingKind::TextureCube => layouts::texture_cube_entry(self.binding, self.visibility),
            BindingKind::Sampler => layouts::sampler_entry(self.binding, self.visibility),
        }
    }
}

/// The binding contract of one vertex/fragment stage pair.
#[derive(Debug, Clone, Copy)]
pub struct StagePair {
    pub name: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub bindings: &'static [BindingSlot],
}

/// Skybox: everything in one group, rebound once per frame.
pub const SKYBOX: StagePair = StagePair {
    name: "skybox",
    vertex_entry: "vs_sky",
    fragment_entry: "fs_sky",
    bindings: &[
        BindingSlot::uniform(0, bindings::skybox::CAMERA, ShaderStages::VERTEX),
        BindingSlot {
            group: 0,
            binding: bindings::skybox::TEXTURE,
            kind: BindingKind::TextureCube,
            visibility: ShaderStages::FRAGMENT,
        },
        BindingSlot {
            group: 0,
            binding: bindings::skybox::SAMPLER,
            kind: BindingKind::Sampler,
            visibility: ShaderStages::FRAGMENT,
        },
    ],
};

/// Textured mesh: camera / object / material groups split by rebind
/// frequency. The object uniform is bound with a dynamic offset so one
/// buffer serves many draws.
pub const MESH: StagePair = StagePair {
    name: "mesh",
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
    bindings: &[
        BindingSlot::uniform(
            groups::CAMERA,
            bindings::mesh::CAMERA,
            ShaderStages::VERTEX.union(ShaderStages::FRAGMENT),
        ),
        BindingSlot {
            group: groups::OBJECT,
            binding: bindings::mesh::MODEL,
            kind: BindingKind::Uniform {
                dynamic_offset: true,
            },
            visibility: ShaderStages::VERTEX,
        },
        BindingSlot {
            group: groups::MATERIAL,
            binding: bindings::mesh::TEXTURE,
            kind: BindingKind::Texture2d,
            visibility: ShaderStages::FRAGMENT,
        },
        BindingSlot {
            group: groups::MATERIAL,
            binding: bindings::mesh::SAMPLER,
            kind: BindingKind::Sampler,
            visibility: ShaderStages::FRAGMENT,
        },
    ],
};

pub const UNLIT_V1: StagePair = StagePair {
    name: "unlit_v1",
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
    bindings: &[BindingSlot::uniform(0, 0, ShaderStages::VERTEX)],
};

pub const UNLIT_V2: StagePair = StagePair {
    name: "unlit_v2",
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
    bindings: &[BindingSlot::uniform(0, 0, ShaderStages::VERTEX)],
};

pub const UNLIT_V3: StagePair = StagePair {
    name: "unlit_v3",
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
    bindings: &[
        BindingSlot::uniform(0, bindings::unlit::CAMERA, ShaderStages::VERTEX),
        BindingSlot::uniform(1, bindings::unlit::LIGHTS, ShaderStages::FRAGMENT),
        BindingSlot::uniform(1, bindings::unlit::MATERIAL, ShaderStages::FRAGMENT),
        BindingSlot {
            group: 2,
            binding: bindings::unlit::TEXTURE,
            kind: BindingKind::Texture2d,
            visibility: ShaderStages::FRAGMENT,
        },
        BindingSlot {
            group: 2,
            binding: bindings::unlit::SAMPLER,
            kind: BindingKind::Sampler,
            visibility: ShaderStages::FRAGMENT,
        },
    ],
};

impl StagePair {
    /// Check the table itself: no (group, binding) collisions, no slot
    /// invisible to both stages.
    pub fn validate(&self) -> ShaderResult<()> {
        for (i, slot) in self.bindings.iter().enumerate() {
            if slot.visibility.is_empty() {
                return Err(ShaderError::MissingBinding {
                    shader: self.name,
                    group: slot.group,
                    binding: slot.binding,
                });
            }
            for other in &self.bindings[i + 1..] {
                if slot.group == other.group && slot.binding == other.binding {
                    return Err(ShaderError::BindingCollision {
                        shader: self.name,
                        group: slot.group,
                        binding: slot.binding,
                    });
                }
            }
        }
        Ok(())
    }

    /// Check the table against preprocessed WGSL source: the declared slots
    /// must match the `@group`/`@binding` declarations exactly, and both
    /// entry points must exist.
    pub fn validate_source(&self, source: &str) -> ShaderResult<()> {
        self.validate()?;

        let declared = declared_bindings(source);

        for &(group, binding) in &declared {
            if !self
                .bindings
                .iter()
                .any(|s| s.group == group && s.binding == binding)
            {
                return Err(ShaderError::UndeclaredBinding {
                    shader: self.name,
                    group,
                    binding,
                });
            }
        }

        for slot in self.bindings {
            if !declared
                .iter()
                .any(|&(g, b)| g == slot.group && b == slot.binding)
            {
                return Err(ShaderError::MissingBinding {
                    shader: self.name,
                    group: slot.group,
                    binding: slot.binding,
                });
            }
        }

        for entry in [self.vertex_entry, self.fragment_entry] {
            if !source.contains(&format!("fn {}", entry)) {
                return Err(ShaderError::MissingEntryPoint {
                    shader: self.name,
                    entry,
                });
            }
        }

        Ok(())
    }

    /// Number of bind groups the pipeline layout needs.
    pub fn group_count(&self) -> u32 {
        self.bindings
            .iter()
            .map(|s| s.group + 1)
            .max()
            .unwrap_or(0)
    }

    /// Layout entries for one bind group.
    pub fn bind_group_layout_entries(&self, group: u32) -> Vec<BindGroupLayoutEntry> {
        self.bindings
            .iter()
            .filter(|s| s.group == group)
            .map(BindingSlot::layout_entry)
            .collect()
    }

    /// Create the full list of bind group layouts, ordered by group index.
    pub fn create_bind_group_layouts(&self, device: &wgpu::Device) -> Vec<BindGroupLayout> {
        (0..self.group_count())
            .map(|group| {
                device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some(&format!("{}_group_{}", self.name, group)),
                    entries: &self.bind_group_layout_entries(group),
                })
            })
            .collect()
    }
}

/// Extract every `@group(G) @binding(B)` declaration from WGSL source.
pub fn declared_bindings(source: &str) -> Vec<(u32, u32)> {
    let mut slots = Vec::new();
    for line in source.lines() {
        let Some(group) = parse_index(line, "@group(") else {
            continue;
        };
        let Some(binding) = parse_index(line, "@binding(") else {
            continue;
        };
        slots.push((group, binding));
    }
    slots
}

fn parse_index(line: &str, token: &str) -> Option<u32> {
    let start = line.find(token)? + token.len();
    let rest = &line[start..];
    let end = rest.find(')')?;
    rest[..end].trim().parse().ok()
}

impl ShaderId {
    /// The binding contract of this stage pair.
    pub fn contract(self) -> &'static StagePair {
        match self {
            ShaderId::Skybox => &SKYBOX,
            ShaderId::Mesh => &MESH,
            ShaderId::UnlitV1 => &UNLIT_V1,
            ShaderId::UnlitV2 => &UNLIT_V2,
            ShaderId::UnlitV3 => &UNLIT_V3,
        }
    }

    /// Vertex buffer layouts this pair expects, in buffer-slot order.
    pub fn vertex_layouts(self) -> Vec<VertexBufferLayout<'static>> {
        match self {
            ShaderId::Mesh => vec![PositionVertex::layout(), UvVertex::layout()],
            _ => vec![PositionVertex::layout()],
        }
    }
}
