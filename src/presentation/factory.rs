//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, MatrixUseCase, ResolveUseCase};
use crate::infrastructure::YamlManifestSource;

/// Type alias for the concrete ResolveUseCase
pub type ConcreteResolveUseCase = ResolveUseCase<YamlManifestSource>;

/// Type alias for the concrete CheckUseCase
pub type ConcreteCheckUseCase = CheckUseCase<YamlManifestSource>;

/// Type alias for the concrete MatrixUseCase
pub type ConcreteMatrixUseCase = MatrixUseCase<YamlManifestSource>;

/// Create a resolve use case reading YAML manifests from disk
pub fn create_resolve_use_case() -> ConcreteResolveUseCase {
    ResolveUseCase::new(YamlManifestSource::new())
}

/// Create a check use case reading YAML manifests from disk
pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(YamlManifestSource::new())
}

/// Create a matrix use case reading YAML manifests from disk
pub fn create_matrix_use_case() -> ConcreteMatrixUseCase {
    MatrixUseCase::new(YamlManifestSource::new())
}
