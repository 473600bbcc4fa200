//! Scenario: Matrix-specific packages
//!
//! Journey: A maintainer pins toolkit packages per CUDA version and per
//! architecture, then resolves single combinations to eyeball the lists.
//!
//! Success Criteria:
//! - Exactly the rows matching a combination contribute
//! - The fallback contributes alongside specific rows, not instead of them
//! - Common packages come first, in declared order

use crate::common::*;

/// SCENARIO: One axis, one row per value
#[test]
fn scenario_row_per_axis_value() {
    let env = TestEnv::with_manifest(
        r#"
matrix:
  cuda: ["11.5", "11.6"]
files:
  all:
    output: conda
    dependencies: [cuda]
dependencies:
  cuda:
    specific:
      - output_types: conda
        matrices:
          - matrix: {cuda: "11.5"}
            packages: [cudatoolkit=11.5]
          - matrix: {cuda: "11.6"}
            packages: [cudatoolkit=11.6]
"#,
    );

    let result = env.run(&["resolve", "--matrix", "cuda=11.5"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, "# all [conda] cuda=11.5\ncudatoolkit=11.5\n");
}

const FALLBACK_MANIFEST: &str = r#"
matrix:
  arch: [x86_64, arm64]
  py: ["3.9", null]
files:
  all:
    output: conda
    dependencies: [build]
dependencies:
  build:
    specific:
      - output_types: conda
        matrices:
          - matrix: {arch: x86_64, py: "3.9"}
            packages: [some_amd64_39_build_dep]
          - matrix:
            packages:
"#;

/// SCENARIO: Fallback matches alongside a specific row
///
/// Guards against "most specific row wins": the x86_64 row and the empty
/// fallback both match, and both contribute.
#[test]
fn scenario_fallback_contributes_alongside_specific_rows() {
    let env = TestEnv::with_manifest(FALLBACK_MANIFEST);

    let arm = env.run(&["resolve", "--matrix", "arch=arm64;py=3.9"]);
    assert!(arm.success, "stderr:\n{}", arm.stderr);
    assert_eq!(arm.stdout, "# all [conda] arch=arm64 py=3.9\n");

    let x86 = env.run(&["resolve", "--matrix", "arch=x86_64;py=3.9"]);
    assert!(x86.success, "stderr:\n{}", x86.stderr);
    assert_eq!(
        x86.stdout,
        "# all [conda] arch=x86_64 py=3.9\nsome_amd64_39_build_dep\n"
    );
}

/// SCENARIO: Absent axis values are combinations too
#[test]
fn scenario_absent_value_is_its_own_combination() {
    let env = TestEnv::with_manifest(FALLBACK_MANIFEST);

    let result = env.run(&["resolve", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let resolved = result.events_named("resolved");
    assert_eq!(resolved.len(), 4);
    assert_eq!(
        resolved[1]["combination"],
        serde_json::json!({"arch": "x86_64", "py": null})
    );
    assert_eq!(resolved[1]["packages"], serde_json::json!([]));
}

/// SCENARIO: Common packages with no matching specific row
#[test]
fn scenario_common_list_stands_alone() {
    let env = TestEnv::with_manifest(
        r#"
matrix:
  arch: [x86_64, arm64]
files:
  all:
    output: conda
    dependencies: [style]
dependencies:
  style:
    common:
      - output_types: conda
        packages:
          - clang-tools=11.1.0
          - spdlog>=1.8.5,<1.9
          - clang-tools=11.1.0
    specific:
      - output_types: conda
        matrices:
          - matrix: {arch: x86_64}
            packages: [nvcc]
"#,
    );

    let result = env.run(&["resolve", "--matrix", "arch=arm64"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout,
        "# all [conda] arch=arm64\nclang-tools=11.1.0\nspdlog>=1.8.5,<1.9\n"
    );
}
