//! Package specifier value object

use serde::{Serialize, Serializer};

/// Characters that terminate the package name inside a specifier.
const NAME_TERMINATORS: &[char] = &['=', '<', '>', '!', '~', '[', ';', '@'];

/// An opaque package specifier such as `cudatoolkit=11.5` or `spdlog>=1.8.5,<1.9`.
///
/// The resolver treats specifiers as atoms: two specifiers are the same only if
/// their strings are identical. Version constraints are never parsed or compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageSpec(String);

impl PackageSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading package name, used only to report conflicting specifiers.
    ///
    /// `spdlog>=1.8.5,<1.9` -> `spdlog`, `numpy [extras]` -> `numpy`.
    pub fn name(&self) -> &str {
        let trimmed = self.0.trim();
        let end = trimmed
            .find(|c: char| c.is_whitespace() || NAME_TERMINATORS.contains(&c))
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    }
}

impl From<&str> for PackageSpec {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PackageSpec {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PackageSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
