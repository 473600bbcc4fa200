//! Package list entries
//!
//! A package list holds plain specifiers and, for conda environments, named
//! groups such as `pip: [dgl, pyg]` that an installer hands to a second tool.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::PackageSpec;

/// Specifiers listed under one key, e.g. the `pip` sub-list of a conda env.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageGroup {
    pub key: String,
    pub specs: Vec<PackageSpec>,
}

impl PackageGroup {
    pub fn new(key: impl Into<String>, specs: Vec<PackageSpec>) -> Self {
        Self {
            key: key.into(),
            specs,
        }
    }

    /// Append the specifiers not already present, keeping first-occurrence order.
    pub fn extend_unique<'a>(&mut self, specs: impl IntoIterator<Item = &'a PackageSpec>) {
        for spec in specs {
            if !self.specs.contains(spec) {
                self.specs.push(spec.clone());
            }
        }
    }
}

/// One item of a package list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageEntry {
    Spec(PackageSpec),
    Group(PackageGroup),
}

impl PackageEntry {
    pub fn group(key: impl Into<String>, specs: &[&str]) -> Self {
        Self::Group(PackageGroup::new(
            key,
            specs.iter().map(|s| PackageSpec::from(*s)).collect(),
        ))
    }

    pub fn as_spec(&self) -> Option<&PackageSpec> {
        match self {
            Self::Spec(spec) => Some(spec),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&PackageGroup> {
        match self {
            Self::Spec(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

impl From<&str> for PackageEntry {
    fn from(value: &str) -> Self {
        Self::Spec(PackageSpec::from(value))
    }
}

impl From<PackageSpec> for PackageEntry {
    fn from(value: PackageSpec) -> Self {
        Self::Spec(value)
    }
}

impl Serialize for PackageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Spec(spec) => spec.serialize(serializer),
            Self::Group(group) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&group.key, &group.specs)?;
                map.end()
            }
        }
    }
}
