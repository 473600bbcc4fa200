//! Output type value object - which package-manager flavour a list is resolved for

use serde::{Deserialize, Serialize};

/// Output type a dependency list is resolved for.
///
/// Common entries, specific sequences and whole dependency blocks are scoped
/// to a set of output types; a resolution always targets exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// Conda environment file
    Conda,
    /// pip requirements file
    Requirements,
    /// pyproject.toml dependency table
    Pyproject,
}

impl OutputType {
    pub const ALL: [OutputType; 3] = [
        OutputType::Conda,
        OutputType::Requirements,
        OutputType::Pyproject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Conda => "conda",
            OutputType::Requirements => "requirements",
            OutputType::Pyproject => "pyproject",
        }
    }
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conda" => Ok(OutputType::Conda),
            "requirements" => Ok(OutputType::Requirements),
            "pyproject" => Ok(OutputType::Pyproject),
            other => Err(format!(
                "unknown output type '{}' (expected conda, requirements or pyproject)",
                other
            )),
        }
    }
}
