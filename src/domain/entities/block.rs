//! Dependency block entity
//!
//! A named grouping of package lists: a common part that applies to every
//! combination and ordered sequences of selector-keyed specific entries.
//! Every part is scoped to a set of output types.

use crate::domain::value_objects::{OutputType, PackageEntry};

use super::selector::Selector;

/// Packages that apply unconditionally for the listed output types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonEntry {
    pub output_types: Vec<OutputType>,
    pub packages: Vec<PackageEntry>,
}

impl CommonEntry {
    pub fn new(output_types: Vec<OutputType>, packages: Vec<PackageEntry>) -> Self {
        Self {
            output_types,
            packages,
        }
    }

    pub fn applies_to(&self, output_type: OutputType) -> bool {
        self.output_types.contains(&output_type)
    }
}

/// One (selector, packages) row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificEntry {
    pub selector: Selector,
    pub packages: Vec<PackageEntry>,
}

impl SpecificEntry {
    pub fn new(selector: Selector, packages: Vec<PackageEntry>) -> Self {
        Self { selector, packages }
    }
}

/// An ordered list of specific entries scoped to a set of output types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificSequence {
    pub output_types: Vec<OutputType>,
    pub entries: Vec<SpecificEntry>,
}

impl SpecificSequence {
    pub fn new(output_types: Vec<OutputType>, entries: Vec<SpecificEntry>) -> Self {
        Self {
            output_types,
            entries,
        }
    }

    pub fn applies_to(&self, output_type: OutputType) -> bool {
        self.output_types.contains(&output_type)
    }

    /// Whether the sequence has an empty-selector entry.
    pub fn has_fallback(&self) -> bool {
        self.entries.iter().any(|e| e.selector.is_fallback())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyBlock {
    pub name: String,
    /// `None` means the block applies to every output type
    pub output_types: Option<Vec<OutputType>>,
    pub common: Vec<CommonEntry>,
    pub specific: Vec<SpecificSequence>,
}

impl DependencyBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_types: None,
            common: Vec::new(),
            specific: Vec::new(),
        }
    }

    pub fn with_output_types(mut self, output_types: Vec<OutputType>) -> Self {
        self.output_types = Some(output_types);
        self
    }

    pub fn with_common(mut self, entry: CommonEntry) -> Self {
        self.common.push(entry);
        self
    }

    pub fn with_specific(mut self, sequence: SpecificSequence) -> Self {
        self.specific.push(sequence);
        self
    }

    /// Whether the block-level restriction admits `output_type`.
    pub fn applies_to(&self, output_type: OutputType) -> bool {
        self.output_types
            .as_ref()
            .map_or(true, |types| types.contains(&output_type))
    }

    /// Every selector in the block, with the index of its sequence.
    pub fn selectors(&self) -> impl Iterator<Item = (usize, &Selector)> {
        self.specific
            .iter()
            .enumerate()
            .flat_map(|(idx, seq)| seq.entries.iter().map(move |e| (idx, &e.selector)))
    }
}
