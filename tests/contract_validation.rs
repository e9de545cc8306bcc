// Contract validation against the real WGSL sources: every shipped stage
// pair's binding table must agree with what its shader text declares.

use shader_pack::constants::entry_points;
use shader_pack::contract::declared_bindings;
use shader_pack::{ShaderError, ShaderId, MESH, SKYBOX, UNLIT_V3};

#[test]
fn shipped_contracts_match_their_sources() {
    for id in ShaderId::ALL {
        let source = id.preprocessed_source().unwrap();
        id.contract()
            .validate_source(&source)
            .unwrap_or_else(|e| panic!("{}: {}", id.name(), e));
    }
}

#[test]
fn mesh_declares_the_three_group_split() {
    let source = ShaderId::Mesh.preprocessed_source().unwrap();
    let mut slots = declared_bindings(&source);
    slots.sort_unstable();

    assert_eq!(slots, vec![(0, 0), (1, 0), (2, 0), (2, 1)]);
    assert_eq!(MESH.group_count(), 3);
    assert_eq!(MESH.bind_group_layout_entries(0).len(), 1);
    assert_eq!(MESH.bind_group_layout_entries(1).len(), 1);
    assert_eq!(MESH.bind_group_layout_entries(2).len(), 2);
}

#[test]
fn skybox_uses_a_single_group() {
    let source = ShaderId::Skybox.preprocessed_source().unwrap();
    let mut slots = declared_bindings(&source);
    slots.sort_unstable();

    assert_eq!(slots, vec![(0, 0), (0, 1), (0, 2)]);
    assert_eq!(SKYBOX.group_count(), 1);
    assert_eq!(SKYBOX.bind_group_layout_entries(0).len(), 3);
}

#[test]
fn unlit_fixtures_grow_monotonically() {
    let v1 = declared_bindings(&ShaderId::UnlitV1.preprocessed_source().unwrap());
    let v2 = declared_bindings(&ShaderId::UnlitV2.preprocessed_source().unwrap());
    let mut v3 = declared_bindings(&ShaderId::UnlitV3.preprocessed_source().unwrap());
    v3.sort_unstable();

    assert_eq!(v1, vec![(0, 0)]);
    assert_eq!(v2, vec![(0, 0)]);
    assert_eq!(v3, vec![(0, 0), (1, 0), (1, 1), (2, 0), (2, 1)]);
    assert_eq!(UNLIT_V3.group_count(), 3);
}

#[test]
fn entry_points_match_constants() {
    assert_eq!(SKYBOX.vertex_entry, entry_points::SKYBOX_VERTEX);
    assert_eq!(SKYBOX.fragment_entry, entry_points::SKYBOX_FRAGMENT);
    assert_eq!(MESH.vertex_entry, entry_points::MESH_VERTEX);
    assert_eq!(MESH.fragment_entry, entry_points::MESH_FRAGMENT);

    for id in [ShaderId::UnlitV1, ShaderId::UnlitV2, ShaderId::UnlitV3] {
        assert_eq!(id.contract().vertex_entry, entry_points::MESH_VERTEX);
        assert_eq!(id.contract().fragment_entry, entry_points::MESH_FRAGMENT);
    }
}

#[test]
fn vertex_buffers_per_pair() {
    // mesh takes position + uv as two streams; everything else position only
    assert_eq!(ShaderId::Mesh.vertex_layouts().len(), 2);
    for id in [
        ShaderId::Skybox,
        ShaderId::UnlitV1,
        ShaderId::UnlitV2,
        ShaderId::UnlitV3,
    ] {
        let layouts = id.vertex_layouts();
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].array_stride, 12);
        assert_eq!(layouts[0].attributes[0].shader_location, 0);
    }
}

#[test]
fn extra_source_binding_is_rejected() {
    let mut source = ShaderId::Mesh.preprocessed_source().unwrap();
    source.push_str("@group(3) @binding(0) var<uniform> extra: Camera;\n");

    assert!(matches!(
        MESH.validate_source(&source),
        Err(ShaderError::UndeclaredBinding {
            group: 3,
            binding: 0,
            ..
        })
    ));
}

#[test]
fn missing_source_binding_is_rejected() {
    // skybox contract against a source that only declares (0, 0)
    let source = ShaderId::UnlitV1.preprocessed_source().unwrap();

    assert!(matches!(
        SKYBOX.validate_source(&source),
        Err(ShaderError::MissingBinding { group: 0, binding: 1, .. })
    ));
}

#[test]
fn missing_entry_point_is_rejected() {
    let source = "@group(0) @binding(0) var<uniform> camera: Camera;\n\
                  @group(0) @binding(1) var t: texture_cube<f32>;\n\
                  @group(0) @binding(2) var s: sampler;\n\
                  @vertex fn vs_sky() {}\n";

    assert!(matches!(
        SKYBOX.validate_source(source),
        Err(ShaderError::MissingEntryPoint {
            entry: "fs_sky",
            ..
        })
    ));
}
