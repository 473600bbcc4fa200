//! Reusable manifests.

/// Two axes, three file keys: `test` includes `build`, `docs` has no outputs
/// and restricts `arch` to x86_64.
pub const MANIFEST: &str = r#"
matrix:
  cuda: ["11.5", "11.6"]
  arch: [x86_64, arm64]
files:
  build:
    output: [conda, requirements]
    dependencies: [build]
  test:
    output: conda
    includes: [build]
    dependencies: [test]
  docs:
    output: none
    dependencies: [docs]
    matrix:
      arch: [x86_64]
dependencies:
  build:
    common:
      - output_types: [conda, requirements]
        packages: [cmake>=3.20, ninja]
    specific:
      - output_types: conda
        matrices:
          - matrix: {cuda: "11.5"}
            packages: [cudatoolkit=11.5]
          - matrix: {cuda: "11.6"}
            packages: [cudatoolkit=11.6]
  test:
    common:
      - output_types: conda
        packages: [pytest, ninja]
    specific:
      - output_types: conda
        matrices:
          - matrix: {arch: arm64}
            packages: [cmake>=3.23]
          - matrix:
            packages:
  docs:
    common:
      - output_types: [conda]
        packages: [sphinx]
"#;

/// Same shape as [`MANIFEST`] without package name conflicts.
pub const CLEAN_MANIFEST: &str = r#"
matrix:
  py: ["3.10", "3.11"]
files:
  all:
    output: [requirements]
    dependencies: [run]
dependencies:
  run:
    common:
      - output_types: requirements
        packages: [numpy]
    specific:
      - output_types: requirements
        matrices:
          - matrix: {py: "3.10"}
            packages: [tomli]
          - matrix:
            packages:
"#;

/// `a` includes `b`, `b` includes `a`.
pub const CYCLIC_MANIFEST: &str = r#"
matrix:
  py: ["3.11"]
files:
  a:
    output: conda
    includes: [b]
    dependencies: [run]
  b:
    output: conda
    includes: [a]
    dependencies: [run]
dependencies:
  run:
    common:
      - output_types: conda
        packages: [python]
"#;

/// Conda env with `pip:` sub-lists in two blocks, plus writer-only file fields.
pub const PIP_GROUP_MANIFEST: &str = r#"
files:
  all:
    output: conda
    conda_dir: conda/environments
    dependencies: [run, test]
  py_test:
    output: pyproject
    pyproject_dir: python/pkg
    extras:
      table: project.optional-dependencies
      key: test
    dependencies: [test]
dependencies:
  run:
    common:
      - output_types: conda
        packages:
          - numpy
          - pip: [dgl, pyg]
  test:
    common:
      - output_types: conda
        packages:
          - pytest
          - pip: [pyg, torch]
      - output_types: pyproject
        packages: [pytest]
"#;
