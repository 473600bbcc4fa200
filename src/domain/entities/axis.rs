//! Axis registry
//!
//! The declared build matrix: named axes in declaration order, each with an
//! ordered, duplicate-free list of values.

use std::sync::Arc;

use crate::domain::errors::ManifestError;
use crate::domain::value_objects::AxisValue;

use super::combination::CombinationSpace;

/// One named build dimension (e.g. `cuda`) with its declared values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    values: Vec<AxisValue>,
}

impl Axis {
    pub fn new(name: impl Into<String>, values: Vec<AxisValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[AxisValue] {
        &self.values
    }

    pub fn declares(&self, value: &AxisValue) -> bool {
        self.values.contains(value)
    }
}

/// All axes declared at the top level of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRegistry {
    axes: Vec<Axis>,
    names: Arc<[String]>,
}

impl Default for AxisRegistry {
    fn default() -> Self {
        Self {
            axes: Vec::new(),
            names: Arc::from(Vec::<String>::new()),
        }
    }
}

impl AxisRegistry {
    /// Build a registry, rejecting empty axes and repeated names or values.
    pub fn new(axes: Vec<Axis>) -> Result<Self, ManifestError> {
        for (idx, axis) in axes.iter().enumerate() {
            if axes[..idx].iter().any(|a| a.name == axis.name) {
                return Err(ManifestError::DuplicateAxis {
                    axis: axis.name.clone(),
                });
            }
            if axis.values.is_empty() {
                return Err(ManifestError::EmptyAxis {
                    axis: axis.name.clone(),
                });
            }
            for (vidx, value) in axis.values.iter().enumerate() {
                if axis.values[..vidx].contains(value) {
                    return Err(ManifestError::DuplicateAxisValue {
                        axis: axis.name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        let names: Arc<[String]> = axes.iter().map(|a| a.name.clone()).collect();
        Ok(Self { axes, names })
    }

    /// Axis names in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name.as_str())
    }

    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.axis(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub(crate) fn names(&self) -> Arc<[String]> {
        Arc::clone(&self.names)
    }

    /// The full cross product of every axis's declared values.
    pub fn space(&self) -> CombinationSpace {
        CombinationSpace::new(
            self.names(),
            self.axes.iter().map(|a| a.values.clone()).collect(),
        )
    }
}
