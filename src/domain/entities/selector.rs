//! Selector entity
//!
//! A partial assignment over axes. An axis left out of a selector is a
//! wildcard; the empty selector is the fallback and matches everything.

use globset::{Glob, GlobMatcher};

use crate::domain::value_objects::AxisValue;

/// How one selector constraint compares against a combination value.
#[derive(Debug, Clone)]
pub enum ValuePattern {
    /// Equal to this value (including `Absent`)
    Exact(AxisValue),
    /// Shell-style glob over the value's text; never matches `Absent`
    Glob(GlobPattern),
}

impl ValuePattern {
    /// The value or pattern as written in the manifest.
    pub fn source(&self) -> String {
        match self {
            ValuePattern::Exact(value) => value.to_string(),
            ValuePattern::Glob(glob) => glob.raw.clone(),
        }
    }
}

impl PartialEq for ValuePattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ValuePattern::Exact(a), ValuePattern::Exact(b)) => a == b,
            (ValuePattern::Glob(a), ValuePattern::Glob(b)) => a.raw == b.raw,
            _ => false,
        }
    }
}

impl Eq for ValuePattern {}

/// A compiled glob together with its source text.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(raw: impl Into<String>) -> Result<Self, globset::Error> {
        let raw = raw.into();
        let matcher = Glob::new(&raw)?.compile_matcher();
        Ok(Self { raw, matcher })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Axis constraints of a specific entry, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    constraints: Vec<(String, ValuePattern)>,
}

impl Selector {
    /// The empty (fallback) selector.
    pub fn fallback() -> Self {
        Self::default()
    }

    /// Build an exact-match selector from (axis, value) pairs.
    pub fn exact<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, AxisValue)>,
    {
        Self {
            constraints: pairs
                .into_iter()
                .map(|(axis, value)| (axis.into(), ValuePattern::Exact(value)))
                .collect(),
        }
    }

    pub fn with(mut self, axis: impl Into<String>, pattern: ValuePattern) -> Self {
        self.constraints.push((axis.into(), pattern));
        self
    }

    pub fn constraints(&self) -> impl Iterator<Item = (&str, &ValuePattern)> {
        self.constraints.iter().map(|(a, p)| (a.as_str(), p))
    }

    pub fn is_fallback(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Number of constrained axes.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether two selectors constrain the same axes to the same values,
    /// regardless of the order the constraints were written in.
    pub fn same_constraints(&self, other: &Selector) -> bool {
        self.len() == other.len()
            && self
                .constraints
                .iter()
                .all(|(axis, pattern)| other.pattern_for(axis) == Some(pattern))
    }

    pub fn pattern_for(&self, axis: &str) -> Option<&ValuePattern> {
        self.constraints
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, p)| p)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (idx, (axis, pattern)) in self.constraints.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", axis, pattern.source())?;
        }
        f.write_str("}")
    }
}
