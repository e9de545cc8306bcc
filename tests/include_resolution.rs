// Include preprocessing integration tests: the embedded header, disk
// fallback directories, and the byte-stability guarantee re-inclusion
// depends on.

use shader_pack::include::{builtin_include, preprocess, WgslPreprocessor};
use shader_pack::ShaderError;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn expanded_header(output: &str) -> &str {
    let begin = output
        .find("// Begin include: common.wgsl")
        .expect("header start marker");
    let end = output
        .find("// End include: common.wgsl")
        .expect("header end marker");
    &output[begin..end]
}

#[test]
fn builtin_header_expands_in_place() {
    init_logging();

    let source = "#include \"common.wgsl\"\n\
                  @group(0) @binding(0) var<uniform> globals: Globals;\n";
    let output = preprocess(source).unwrap();

    assert!(output.contains("struct Globals"));
    assert!(output.contains("struct Camera"));
    assert!(output.contains("struct Light"));
    assert!(!output.contains("#include"));
    // consumer code after the directive is untouched
    assert!(output.contains("var<uniform> globals: Globals;"));
}

#[test]
fn header_is_byte_identical_across_consumers() {
    init_logging();

    let consumer_a = "#include <common.wgsl>\n\
                      @vertex\n\
                      fn vs_main(in: VertexIn) -> VertexOut {\n\
                          var out: VertexOut;\n\
                          return out;\n\
                      }\n";
    let consumer_b = "// completely different surrounding code\n\
                      #include \"common.wgsl\"\n\
                      @group(0) @binding(0) var<uniform> camera: Camera;\n";

    let expanded_a = preprocess(consumer_a).unwrap();
    let expanded_b = preprocess(consumer_b).unwrap();

    assert_eq!(expanded_header(&expanded_a), expanded_header(&expanded_b));
}

#[test]
fn repeated_include_collapses_to_one_copy() {
    let source = "#include \"common.wgsl\"\n\
                  #include \"common.wgsl\"\n";
    let output = preprocess(source).unwrap();

    assert!(output.contains("// Skipped repeated include: common.wgsl"));
    assert_eq!(output.matches("struct Globals").count(), 1);
}

#[test]
fn include_dirs_resolve_files_on_disk() {
    init_logging();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("noise.wgsl"),
        "fn hash(p: vec3<f32>) -> f32 {\n    return fract(sin(dot(p, vec3<f32>(12.9898, 78.233, 45.164))) * 43758.5453);\n}\n",
    )
    .unwrap();

    let mut preprocessor = WgslPreprocessor::new();
    preprocessor.add_include_dir(dir.path());

    let output = preprocessor.process("#include \"noise.wgsl\"\n").unwrap();
    assert!(output.contains("fn hash"));
}

#[test]
fn embedded_registry_wins_over_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("common.wgsl"), "// impostor header\n").unwrap();

    let mut preprocessor = WgslPreprocessor::new();
    preprocessor.add_include_dir(dir.path());

    let output = preprocessor.process("#include \"common.wgsl\"\n").unwrap();
    assert!(output.contains("struct Globals"));
    assert!(!output.contains("impostor"));
}

#[test]
fn disk_includes_pull_siblings_by_name() {
    init_logging();

    // detail/curves.wgsl is reachable only relative to the file including it;
    // only the tempdir root is a registered include dir.
    let dir = tempfile::tempdir().unwrap();
    let detail = dir.path().join("detail");
    std::fs::create_dir(&detail).unwrap();
    std::fs::write(
        detail.join("curves.wgsl"),
        "fn ease(t: f32) -> f32 {\n    return t * t * (3.0 - 2.0 * t);\n}\n",
    )
    .unwrap();
    std::fs::write(
        detail.join("fade.wgsl"),
        "#include \"curves.wgsl\"\nfn fade(t: f32) -> f32 {\n    return ease(t);\n}\n",
    )
    .unwrap();

    let mut preprocessor = WgslPreprocessor::new();
    preprocessor.add_include_dir(dir.path());

    let output = preprocessor
        .process("#include \"detail/fade.wgsl\"\n")
        .unwrap();
    assert!(output.contains("fn ease"));
    assert!(output.contains("fn fade"));
}

#[test]
fn sibling_wins_over_include_dir() {
    let dir = tempfile::tempdir().unwrap();
    let detail = dir.path().join("detail");
    std::fs::create_dir(&detail).unwrap();
    std::fs::write(dir.path().join("curves.wgsl"), "// root copy\n").unwrap();
    std::fs::write(detail.join("curves.wgsl"), "// sibling copy\n").unwrap();
    std::fs::write(detail.join("fade.wgsl"), "#include \"curves.wgsl\"\n").unwrap();

    let mut preprocessor = WgslPreprocessor::new();
    preprocessor.add_include_dir(dir.path());

    let output = preprocessor
        .process("#include \"detail/fade.wgsl\"\n")
        .unwrap();
    assert!(output.contains("// sibling copy"));
    assert!(!output.contains("// root copy"));
}

#[test]
fn unknown_include_is_fatal() {
    let err = preprocess("#include \"does_not_exist.wgsl\"\n").unwrap_err();
    assert!(matches!(
        err,
        ShaderError::UnknownInclude(name) if name == "does_not_exist.wgsl"
    ));
}

#[test]
fn builtin_registry_contents() {
    assert!(builtin_include("common.wgsl").is_some());
    assert!(builtin_include("other.wgsl").is_none());
}
