//! In-memory manifest source for use case tests.

use std::path::Path;

use crate::domain::entities::RawManifest;
use crate::domain::ports::{ManifestLoadError, ManifestSource};
use crate::infrastructure::YamlManifestSource;

pub(crate) struct InMemorySource {
    yaml: &'static str,
}

impl InMemorySource {
    pub(crate) fn new(yaml: &'static str) -> Self {
        Self { yaml }
    }
}

impl ManifestSource for InMemorySource {
    fn load(&self, path: &Path) -> Result<RawManifest, ManifestLoadError> {
        YamlManifestSource::parse(self.yaml, path)
    }
}

/// The three-block example used across use case tests.
pub(crate) const MANIFEST: &str = r#"
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
